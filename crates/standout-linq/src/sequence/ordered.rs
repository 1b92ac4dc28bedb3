//! Deferred multi-key ordering.
//!
//! `order_by*` turn a sequence into an [`OrderedSequence`], which records sort
//! keys but does not sort. `then_by*` are only available on that type and add
//! tie-breaking keys. Sorting happens when enumeration begins: the source is
//! collected and stably sorted with every key, first to last.

use std::cmp::Ordering;
use std::vec;

use super::Sequence;
use crate::ordering::{compare_by_keys, Dir, SortKey};

/// A source plus the sort keys to apply to it.
pub struct Ordered<'a, S: IntoIterator> {
    source: S,
    keys: Vec<SortKey<'a, S::Item>>,
}

/// A sequence that still accepts `then_by` keys.
pub type OrderedSequence<'a, S> = Sequence<Ordered<'a, S>>;

impl<'a, S: IntoIterator> Ordered<'a, S> {
    /// The configured sort keys, primary first.
    pub fn keys(&self) -> &[SortKey<'a, S::Item>] {
        &self.keys
    }
}

impl<S> Clone for Ordered<'_, S>
where
    S: IntoIterator + Clone,
{
    fn clone(&self) -> Self {
        Ordered {
            source: self.source.clone(),
            keys: self.keys.clone(),
        }
    }
}

impl<S> std::fmt::Debug for Ordered<'_, S>
where
    S: IntoIterator + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ordered")
            .field("source", &self.source)
            .field("keys", &self.keys)
            .finish()
    }
}

impl<S: IntoIterator> IntoIterator for Ordered<'_, S> {
    type Item = S::Item;
    type IntoIter = vec::IntoIter<S::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let mut elements: Vec<S::Item> = self.source.into_iter().collect();
        // slice::sort_by is stable: elements equal under every key keep input order
        elements.sort_by(|a, b| compare_by_keys(a, b, &self.keys));
        tracing::trace!(
            elements = elements.len(),
            keys = self.keys.len(),
            "sorted source"
        );
        elements.into_iter()
    }
}

impl<S: IntoIterator> Sequence<S> {
    fn start_ordering<'a>(self, key: SortKey<'a, S::Item>) -> OrderedSequence<'a, S> {
        Sequence::new(Ordered {
            source: self.source,
            keys: vec![key],
        })
    }

    /// Sorts ascending by `selector`.
    ///
    /// ```
    /// use standout_linq::from;
    ///
    /// let words = vec!["zzzzzz", "doreme", "test", "the longest"];
    /// let sorted = from(words).order_by(|w| w.len()).then_by(|w| *w).to_vec();
    /// assert_eq!(sorted, ["test", "doreme", "zzzzzz", "the longest"]);
    /// ```
    pub fn order_by<'a, F, K>(self, selector: F) -> OrderedSequence<'a, S>
    where
        F: Fn(&S::Item) -> K + 'a,
        K: PartialOrd + 'a,
        S::Item: 'a,
    {
        self.start_ordering(SortKey::by(selector, Dir::Asc))
    }

    /// Sorts ascending by `selector` using a custom comparator.
    pub fn order_by_with<'a, F, K, C>(self, selector: F, comparator: C) -> OrderedSequence<'a, S>
    where
        F: Fn(&S::Item) -> K + 'a,
        C: Fn(&K, &K) -> Ordering + 'a,
        K: 'a,
        S::Item: 'a,
    {
        self.start_ordering(SortKey::new(selector, comparator, Dir::Asc))
    }

    /// Sorts descending by `selector`.
    pub fn order_by_descending<'a, F, K>(self, selector: F) -> OrderedSequence<'a, S>
    where
        F: Fn(&S::Item) -> K + 'a,
        K: PartialOrd + 'a,
        S::Item: 'a,
    {
        self.start_ordering(SortKey::by(selector, Dir::Desc))
    }

    /// Sorts descending by `selector` using a custom comparator.
    pub fn order_by_descending_with<'a, F, K, C>(
        self,
        selector: F,
        comparator: C,
    ) -> OrderedSequence<'a, S>
    where
        F: Fn(&S::Item) -> K + 'a,
        C: Fn(&K, &K) -> Ordering + 'a,
        K: 'a,
        S::Item: 'a,
    {
        self.start_ordering(SortKey::new(selector, comparator, Dir::Desc))
    }
}

impl<'a, S: IntoIterator> Sequence<Ordered<'a, S>> {
    fn push_key(mut self, key: SortKey<'a, S::Item>) -> Self {
        self.source.keys.push(key);
        self
    }

    /// Breaks ties ascending by `selector`.
    pub fn then_by<F, K>(self, selector: F) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        K: PartialOrd + 'a,
        S::Item: 'a,
    {
        self.push_key(SortKey::by(selector, Dir::Asc))
    }

    /// Breaks ties ascending by `selector` using a custom comparator.
    pub fn then_by_with<F, K, C>(self, selector: F, comparator: C) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        C: Fn(&K, &K) -> Ordering + 'a,
        K: 'a,
        S::Item: 'a,
    {
        self.push_key(SortKey::new(selector, comparator, Dir::Asc))
    }

    /// Breaks ties descending by `selector`.
    pub fn then_by_descending<F, K>(self, selector: F) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        K: PartialOrd + 'a,
        S::Item: 'a,
    {
        self.push_key(SortKey::by(selector, Dir::Desc))
    }

    /// Breaks ties descending by `selector` using a custom comparator.
    pub fn then_by_descending_with<F, K, C>(self, selector: F, comparator: C) -> Self
    where
        F: Fn(&S::Item) -> K + 'a,
        C: Fn(&K, &K) -> Ordering + 'a,
        K: 'a,
        S::Item: 'a,
    {
        self.push_key(SortKey::new(selector, comparator, Dir::Desc))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{from, Dir};

    #[derive(Debug, Clone, PartialEq)]
    struct Task {
        name: &'static str,
        priority: i64,
    }

    fn task(name: &'static str, priority: i64) -> Task {
        Task { name, priority }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            task("Task A", 1),
            task("Task B", 2),
            task("Urgent Task", 5),
            task("Critical Task", 5),
            task("Done Task", 3),
        ]
    }

    #[test]
    fn ordering_single_key() {
        let results = from(sample_tasks()).order_by_descending(|t| t.priority).to_vec();
        assert_eq!(results[0].priority, 5);
        assert_eq!(results[1].priority, 5);
        assert_eq!(results[4].priority, 1);
    }

    #[test]
    fn ordering_is_stable() {
        let results = from(sample_tasks()).order_by_descending(|t| t.priority).to_vec();
        // Equal priorities keep input order
        assert_eq!(results[0].name, "Urgent Task");
        assert_eq!(results[1].name, "Critical Task");
    }

    #[test]
    fn ordering_multiple_keys() {
        let results = from(sample_tasks())
            .order_by_descending(|t| t.priority)
            .then_by(|t| t.name)
            .to_vec();
        assert_eq!(results[0].name, "Critical Task");
        assert_eq!(results[1].name, "Urgent Task");
        assert_eq!(results[2].name, "Done Task");
    }

    #[test]
    fn then_by_descending() {
        let results = from(vec![(1, 'a'), (0, 'b'), (1, 'c')])
            .order_by(|p| p.0)
            .then_by_descending(|p| p.1)
            .to_vec();
        assert_eq!(results, [(0, 'b'), (1, 'c'), (1, 'a')]);
    }

    #[test]
    fn custom_comparators() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());

        let asc = from(vec![-3, 1, -2]).order_by_with(|x| *x, by_abs).to_vec();
        assert_eq!(asc, [1, -2, -3]);

        let desc = from(vec![-3, 1, -2])
            .order_by_descending_with(|x| *x, by_abs)
            .to_vec();
        assert_eq!(desc, [-3, -2, 1]);

        let tie_broken = from(vec![2, -1, 1, -2])
            .order_by_with(|x: &i32| x.abs(), |a: &i32, b: &i32| a.cmp(b))
            .then_by_with(|x| *x, |a: &i32, b: &i32| b.cmp(a))
            .to_vec();
        assert_eq!(tie_broken, [1, -1, 2, -2]);

        let tie_broken_desc = from(vec![2, -1, 1, -2])
            .order_by(|x: &i32| x.abs())
            .then_by_descending_with(|x| *x, |a: &i32, b: &i32| b.cmp(a))
            .to_vec();
        assert_eq!(tie_broken_desc, [-1, 1, -2, 2]);
    }

    #[test]
    fn sorting_is_deferred_to_enumeration() {
        let calls = Cell::new(0);
        let ordered = from(vec![3, 1, 2]).order_by(|x| {
            calls.set(calls.get() + 1);
            *x
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(ordered.to_vec(), [1, 2, 3]);
        assert!(calls.get() > 0);
    }

    #[test]
    fn other_operators_leave_ordered_role() {
        let top_two = from(sample_tasks())
            .order_by_descending(|t| t.priority)
            .map(|t| t.name)
            .take(2)
            .to_vec();
        assert_eq!(top_two, ["Urgent Task", "Critical Task"]);
    }

    #[test]
    fn keys_are_recorded_in_call_order() {
        let ordered = from(vec![1, 2]).order_by(|x| *x).then_by_descending(|x| -x);
        let keys = ordered.source().keys();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].dir(), Dir::Asc);
        assert_eq!(keys[1].dir(), Dir::Desc);
    }

    fn floats_with_nan() -> Vec<f64> {
        (0..128)
            .map(|i| {
                if i % 4 == 1 {
                    f64::NAN
                } else {
                    ((i * 53) % 97) as f64 - 40.0
                }
            })
            .collect()
    }

    #[test]
    fn order_by_float_keys_with_nan() {
        let sorted = from(floats_with_nan()).order_by(|x| *x).to_vec();

        assert_eq!(sorted.len(), 128);
        let numbers = sorted.iter().take_while(|x| !x.is_nan()).count();
        assert_eq!(numbers, 96);
        assert!(sorted[numbers..].iter().all(|x| x.is_nan()));
        assert!(sorted[..numbers].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn order_by_descending_float_keys_puts_nan_first() {
        let sorted = from(floats_with_nan())
            .order_by_descending(|x| *x)
            .to_vec();

        let nans = sorted.iter().take_while(|x| x.is_nan()).count();
        assert_eq!(nans, 32);
        assert!(sorted[nans..].windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn then_by_float_keys_with_nan() {
        let pairs: Vec<(i32, f64)> = floats_with_nan()
            .into_iter()
            .enumerate()
            .map(|(i, x)| ((i % 2) as i32, x))
            .collect();

        let sorted = from(pairs).order_by(|p| p.0).then_by(|p| p.1).to_vec();

        assert!(sorted.windows(2).all(|w| w[0].0 <= w[1].0));
        for key in 0..2 {
            let group: Vec<f64> = sorted.iter().filter(|p| p.0 == key).map(|p| p.1).collect();
            let numbers = group.iter().take_while(|x| !x.is_nan()).count();
            assert!(group[numbers..].iter().all(|x| x.is_nan()));
            assert!(group[..numbers].windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
