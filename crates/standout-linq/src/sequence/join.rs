//! Correlating two sequences by key.

use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;

use indexmap::IndexMap;

use super::Sequence;
use crate::enumerable::group_by_map;

/// Source returned by [`Sequence::join`].
#[derive(Debug, Clone)]
pub struct Join<O, I, OK, IK, RF> {
    outer: O,
    inner: I,
    outer_key: OK,
    inner_key: IK,
    result: RF,
}

impl<O, I, K, OK, IK, RF, R> IntoIterator for Join<O, I, OK, IK, RF>
where
    O: IntoIterator,
    I: IntoIterator,
    OK: FnMut(&O::Item) -> K,
    IK: FnMut(&I::Item) -> K,
    K: Eq + Hash,
    RF: FnMut(O::Item, &I::Item) -> R,
{
    type Item = R;
    type IntoIter = JoinIter<O::IntoIter, K, I::Item, OK, RF>;

    fn into_iter(self) -> Self::IntoIter {
        let mut inner_key = self.inner_key;
        let mut lookup = HashMap::new();
        for item in self.inner {
            // First inner element with a given key wins
            if let hash_map::Entry::Vacant(slot) = lookup.entry(inner_key(&item)) {
                slot.insert(item);
            }
        }
        tracing::trace!(keys = lookup.len(), "built join lookup");
        JoinIter {
            outer: self.outer.into_iter(),
            lookup,
            outer_key: self.outer_key,
            result: self.result,
        }
    }
}

/// Iterator for [`Join`].
pub struct JoinIter<O, K, U, OK, RF> {
    outer: O,
    lookup: HashMap<K, U>,
    outer_key: OK,
    result: RF,
}

impl<O, K, U, OK, RF, R> Iterator for JoinIter<O, K, U, OK, RF>
where
    O: Iterator,
    OK: FnMut(&O::Item) -> K,
    K: Eq + Hash,
    RF: FnMut(O::Item, &U) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            let outer = self.outer.next()?;
            let key = (self.outer_key)(&outer);
            if let Some(inner) = self.lookup.get(&key) {
                return Some((self.result)(outer, inner));
            }
        }
    }
}

/// Source returned by [`Sequence::group_join`].
#[derive(Debug, Clone)]
pub struct GroupJoin<O, I, OK, IK, RF> {
    outer: O,
    inner: I,
    outer_key: OK,
    inner_key: IK,
    result: RF,
}

impl<O, I, K, OK, IK, RF, R> IntoIterator for GroupJoin<O, I, OK, IK, RF>
where
    O: IntoIterator,
    I: IntoIterator,
    OK: FnMut(&O::Item) -> K,
    IK: FnMut(&I::Item) -> K,
    K: Eq + Hash,
    I::Item: Clone,
    RF: FnMut(O::Item, Sequence<Vec<I::Item>>) -> R,
{
    type Item = R;
    type IntoIter = GroupJoinIter<O::IntoIter, K, I::Item, OK, RF>;

    fn into_iter(self) -> Self::IntoIter {
        let groups = group_by_map(self.inner, self.inner_key, |item| item);
        GroupJoinIter {
            outer: self.outer.into_iter(),
            groups,
            outer_key: self.outer_key,
            result: self.result,
        }
    }
}

/// Iterator for [`GroupJoin`].
pub struct GroupJoinIter<O, K, U, OK, RF> {
    outer: O,
    groups: IndexMap<K, Vec<U>>,
    outer_key: OK,
    result: RF,
}

impl<O, K, U, OK, RF, R> Iterator for GroupJoinIter<O, K, U, OK, RF>
where
    O: Iterator,
    OK: FnMut(&O::Item) -> K,
    K: Eq + Hash,
    U: Clone,
    RF: FnMut(O::Item, Sequence<Vec<U>>) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            let outer = self.outer.next()?;
            let key = (self.outer_key)(&outer);
            // Several outer elements may share a key, so each gets its own copy
            if let Some(group) = self.groups.get(&key) {
                return Some((self.result)(outer, Sequence::new(group.clone())));
            }
        }
    }
}

impl<S: IntoIterator> Sequence<S> {
    /// Inner join: pairs each element with the inner element sharing its key.
    ///
    /// This is a single-match join. The inner sequence is indexed by key when
    /// enumeration begins, keeping the first inner element for each key.
    /// Outer elements without a match are dropped. Output follows the order
    /// of this (outer) sequence.
    ///
    /// ```
    /// use standout_linq::from;
    ///
    /// let things = vec![("foo", 3), ("bar", 4), ("baz", 10)];
    /// let colors = vec![("Red", 3), ("Blue", 10), ("Green", 4), ("Violet", 5555)];
    ///
    /// let joined = from(things)
    ///     .join(colors, |t| t.1, |c| c.1, |t, c| format!("{} {}", t.0, c.0))
    ///     .to_vec();
    ///
    /// assert_eq!(joined, ["foo Red", "bar Green", "baz Blue"]);
    /// ```
    pub fn join<I, K, OK, IK, RF, R>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: RF,
    ) -> Sequence<Join<S, I, OK, IK, RF>>
    where
        I: IntoIterator,
        OK: FnMut(&S::Item) -> K,
        IK: FnMut(&I::Item) -> K,
        K: Eq + Hash,
        RF: FnMut(S::Item, &I::Item) -> R,
    {
        Sequence::new(Join {
            outer: self.source,
            inner,
            outer_key,
            inner_key,
            result,
        })
    }

    /// Group join: pairs each element with every inner element sharing its
    /// key.
    ///
    /// The inner sequence is grouped by key when enumeration begins. Each
    /// matching outer element receives its group as an owned sequence. Outer
    /// elements with no matching inner element are skipped; `result` is only
    /// called with non-empty groups.
    ///
    /// ```
    /// use standout_linq::from;
    ///
    /// let types = vec![("green apple", 5), ("red apple", 2), ("yellow apple", 10)];
    /// let apples = vec![
    ///     ("golden delicious", 10),
    ///     ("granny smith", 5),
    ///     ("pink lady", 2),
    ///     ("fuji", 2),
    /// ];
    ///
    /// let summary = from(types)
    ///     .group_join(apples, |t| t.1, |a| a.1, |t, group| {
    ///         format!("{}: {}", t.0, group.map(|a| a.0).join_string(", "))
    ///     })
    ///     .to_vec();
    ///
    /// assert_eq!(
    ///     summary,
    ///     [
    ///         "green apple: granny smith",
    ///         "red apple: pink lady, fuji",
    ///         "yellow apple: golden delicious",
    ///     ]
    /// );
    /// ```
    pub fn group_join<I, K, OK, IK, RF, R>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: RF,
    ) -> Sequence<GroupJoin<S, I, OK, IK, RF>>
    where
        I: IntoIterator,
        OK: FnMut(&S::Item) -> K,
        IK: FnMut(&I::Item) -> K,
        K: Eq + Hash,
        I::Item: Clone,
        RF: FnMut(S::Item, Sequence<Vec<I::Item>>) -> R,
    {
        Sequence::new(GroupJoin {
            outer: self.source,
            inner,
            outer_key,
            inner_key,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::from;

    #[derive(Debug, Clone)]
    struct Thing {
        thing: &'static str,
        cat_id: u32,
    }

    #[derive(Debug, Clone)]
    struct Category {
        name: &'static str,
        id: u32,
    }

    fn things() -> Vec<Thing> {
        vec![
            Thing {
                thing: "foo",
                cat_id: 3,
            },
            Thing {
                thing: "bar",
                cat_id: 4,
            },
            Thing {
                thing: "baz",
                cat_id: 10,
            },
        ]
    }

    fn categories() -> Vec<Category> {
        vec![
            Category { name: "Red", id: 3 },
            Category { name: "Blue", id: 10 },
            Category {
                name: "Green",
                id: 4,
            },
            Category {
                name: "Violet",
                id: 5555,
            },
        ]
    }

    #[test]
    fn join_follows_outer_order() {
        let joined = from(things())
            .join(
                categories(),
                |t| t.cat_id,
                |c| c.id,
                |t, c| format!("{} {}", t.thing, c.name),
            )
            .to_vec();

        assert_eq!(joined, ["foo Red", "bar Green", "baz Blue"]);
    }

    #[test]
    fn join_drops_unmatched_outer() {
        let joined = from(vec![1, 2, 3])
            .join(vec![2, 3, 4], |x| *x, |y| *y, |x, y| x * y)
            .to_vec();
        assert_eq!(joined, [4, 9]);
    }

    #[test]
    fn join_duplicate_inner_key_first_wins() {
        let inner = vec![("first", 1), ("second", 1)];
        let joined = from(vec![1, 1])
            .join(inner, |x| *x, |p| p.1, |_, p| p.0)
            .to_vec();

        // Single-match join: one result per outer element, always the first inner
        assert_eq!(joined, ["first", "first"]);
    }

    #[test]
    fn join_builds_lookup_on_enumeration() {
        let built = Cell::new(0);
        let joined = from(vec![1, 2]).join(
            vec![1, 2],
            |x| *x,
            |y| {
                built.set(built.get() + 1);
                *y
            },
            |x, _| x,
        );

        assert_eq!(built.get(), 0);
        assert_eq!(joined.count(), 2);
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn group_join_collects_all_matches() {
        let pets = vec![("rex", "ann"), ("tom", "bob"), ("kit", "ann")];
        let owners = vec!["ann", "bob"];

        let result = from(owners)
            .group_join(pets, |o| *o, |p| p.1, |o, group| (o, group.map(|p| p.0).to_vec()))
            .to_vec();

        assert_eq!(
            result,
            [("ann", vec!["rex", "kit"]), ("bob", vec!["tom"])]
        );
    }

    #[test]
    fn group_join_result_can_keep_the_group() {
        let pets = vec![("rex", "ann"), ("tom", "bob"), ("kit", "ann")];
        let owners = vec!["ann", "bob", "ann"];

        let pairs = from(owners)
            .group_join(pets, |o| *o, |p| p.1, |o, group| (o, group))
            .to_vec();

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].1.clone().map(|p| p.0).to_vec(), ["rex", "kit"]);
        assert_eq!(pairs[1].1.count(), 1);
        assert_eq!(pairs[2].1.to_vec(), pairs[0].1.to_vec());
    }

    #[test]
    fn group_join_skips_unmatched_outer() {
        let result = from(vec!["ann", "nobody", "bob"])
            .group_join(
                vec![("rex", "ann"), ("tom", "bob")],
                |o| *o,
                |p| p.1,
                |o, group| (o, group.count()),
            )
            .to_vec();

        assert_eq!(result, [("ann", 1), ("bob", 1)]);
    }
}
