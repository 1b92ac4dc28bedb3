//! Terminal operations: everything that enumerates the source.

use std::fmt::Display;
use std::hash::Hash;
use std::iter::Sum;

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use num_traits::AsPrimitive;

use super::Sequence;
use crate::enumerable;
use crate::error::{LinqError, Result};

fn single_of<I: Iterator>(mut iter: I) -> Result<I::Item> {
    let first = iter.next().ok_or(LinqError::EmptySequence)?;
    match iter.next() {
        Some(_) => Err(LinqError::MultipleElements),
        None => Ok(first),
    }
}

fn mean<I>(values: I) -> Result<f64>
where
    I: Iterator,
    I::Item: AsPrimitive<f64>,
{
    let (total, count) = values.fold((0.0, 0usize), |(total, count), value| {
        (total + value.as_(), count + 1)
    });
    if count == 0 {
        return Err(LinqError::EmptySequence);
    }
    Ok(total / count as f64)
}

impl<S> Sequence<S>
where
    S: IntoIterator + Clone,
{
    /// Starts a fresh enumeration of the sequence.
    pub fn iter(&self) -> S::IntoIter {
        self.source.clone().into_iter()
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Counts the elements by enumerating all of them.
    pub fn count(&self) -> usize {
        self.iter().fold(0, |count, _| count + 1)
    }

    /// Collects the elements into a vector (LINQ `toArray`).
    pub fn to_vec(&self) -> Vec<S::Item> {
        self.iter().collect()
    }

    /// Collects into an insertion-ordered map.
    ///
    /// When two elements share a key the first one wins; `element` is not
    /// called for later duplicates.
    pub fn to_map<KF, EF, K, V>(&self, mut key: KF, mut element: EF) -> IndexMap<K, V>
    where
        KF: FnMut(&S::Item) -> K,
        EF: FnMut(S::Item) -> V,
        K: Eq + Hash,
    {
        let mut map = IndexMap::new();
        for item in self.iter() {
            if let Entry::Vacant(slot) = map.entry(key(&item)) {
                slot.insert(element(item));
            }
        }
        map
    }

    /// Collects into a string-keyed record, using each key's `Display` form.
    ///
    /// Keys keep first-seen order. Keys that render to the same string
    /// collide; the first element wins.
    pub fn to_object<KF, EF, K, V>(&self, mut key: KF, mut element: EF) -> IndexMap<String, V>
    where
        KF: FnMut(&S::Item) -> K,
        EF: FnMut(S::Item) -> V,
        K: Display,
    {
        let mut record = IndexMap::new();
        for item in self.iter() {
            record
                .entry(key(&item).to_string())
                .or_insert_with(|| element(item));
        }
        record
    }

    /// Collects the distinct elements, in first-seen order.
    pub fn to_set(&self) -> IndexSet<S::Item>
    where
        S::Item: Eq + Hash,
    {
        self.iter().collect()
    }

    /// Collects the distinct projections, in first-seen order.
    pub fn to_set_by<F, P>(&self, project: F) -> IndexSet<P>
    where
        F: FnMut(S::Item) -> P,
        P: Eq + Hash,
    {
        self.iter().map(project).collect()
    }

    /// Renders each element with `Display` and joins them with `separator`.
    pub fn join_string(&self, separator: &str) -> String
    where
        S::Item: Display,
    {
        let mut out = String::new();
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            out.push_str(&item.to_string());
        }
        out
    }

    // ========================================================================
    // Element extraction
    // ========================================================================

    /// The first element.
    pub fn first(&self) -> Result<S::Item> {
        self.iter().next().ok_or(LinqError::EmptySequence)
    }

    /// The first element matching `predicate`.
    pub fn first_where<P>(&self, predicate: P) -> Result<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.iter().find(predicate).ok_or(LinqError::EmptySequence)
    }

    /// The first element, or `None` when empty.
    pub fn first_or_default(&self) -> Option<S::Item> {
        self.iter().next()
    }

    /// The first element matching `predicate`, or `None`.
    pub fn first_or_default_where<P>(&self, predicate: P) -> Option<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.iter().find(predicate)
    }

    /// The only element.
    ///
    /// Fails with [`LinqError::EmptySequence`] when empty and
    /// [`LinqError::MultipleElements`] when there is more than one. Stops
    /// after pulling the second element.
    pub fn single(&self) -> Result<S::Item> {
        single_of(self.iter())
    }

    /// The only element matching `predicate`.
    pub fn single_where<P>(&self, predicate: P) -> Result<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        single_of(self.iter().filter(predicate))
    }

    /// The only element, or `None` when there are zero or several.
    pub fn single_or_default(&self) -> Option<S::Item> {
        single_of(self.iter()).ok()
    }

    /// The only element matching `predicate`, or `None` when zero or several
    /// match.
    pub fn single_or_default_where<P>(&self, predicate: P) -> Option<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        single_of(self.iter().filter(predicate)).ok()
    }

    /// The last element. Enumerates the whole sequence.
    pub fn last(&self) -> Result<S::Item> {
        self.iter().last().ok_or(LinqError::EmptySequence)
    }

    /// The last element matching `predicate`.
    pub fn last_where<P>(&self, predicate: P) -> Result<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.iter()
            .filter(predicate)
            .last()
            .ok_or(LinqError::EmptySequence)
    }

    /// The last element, or `None` when empty.
    pub fn last_or_default(&self) -> Option<S::Item> {
        self.iter().last()
    }

    /// The last element matching `predicate`, or `None`.
    pub fn last_or_default_where<P>(&self, predicate: P) -> Option<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.iter().filter(predicate).last()
    }

    // ========================================================================
    // Quantifiers
    // ========================================================================

    /// `true` if every element matches. Stops at the first that does not.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.iter().all(|item| predicate(&item))
    }

    /// `true` if any element matches. Stops at the first that does.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    /// `true` if no element matches.
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        !self.any(predicate)
    }

    /// `true` if some element equals `value`.
    pub fn contains(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.any(|item| item == value)
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Sums the elements. An empty sequence sums to zero.
    pub fn sum(&self) -> S::Item
    where
        S::Item: Sum,
    {
        self.iter().sum()
    }

    /// Sums a projection of each element.
    pub fn sum_by<F, N>(&self, project: F) -> N
    where
        F: FnMut(S::Item) -> N,
        N: Sum,
    {
        self.iter().map(project).sum()
    }

    /// The arithmetic mean. Fails on an empty sequence.
    pub fn average(&self) -> Result<f64>
    where
        S::Item: AsPrimitive<f64>,
    {
        mean(self.iter())
    }

    /// The arithmetic mean of a projection. Fails on an empty sequence.
    pub fn average_by<F, N>(&self, project: F) -> Result<f64>
    where
        F: FnMut(S::Item) -> N,
        N: AsPrimitive<f64>,
    {
        mean(self.iter().map(project))
    }

    /// The smallest element. Ties keep the first seen.
    pub fn min(&self) -> Result<S::Item>
    where
        S::Item: PartialOrd,
    {
        enumerable::min(self.iter())
    }

    /// The largest element. Ties keep the first seen.
    pub fn max(&self) -> Result<S::Item>
    where
        S::Item: PartialOrd,
    {
        enumerable::max(self.iter())
    }

    /// The smallest projected value.
    pub fn min_of<F, K>(&self, project: F) -> Result<K>
    where
        F: FnMut(S::Item) -> K,
        K: PartialOrd,
    {
        enumerable::min(self.iter().map(project))
    }

    /// The largest projected value.
    pub fn max_of<F, K>(&self, project: F) -> Result<K>
    where
        F: FnMut(S::Item) -> K,
        K: PartialOrd,
    {
        enumerable::max(self.iter().map(project))
    }

    /// The element with the smallest key.
    pub fn min_by<F, K>(&self, selector: F) -> Result<S::Item>
    where
        F: FnMut(&S::Item) -> K,
        K: PartialOrd,
    {
        enumerable::min_by(self.iter(), selector)
    }

    /// The element with the largest key.
    pub fn max_by<F, K>(&self, selector: F) -> Result<S::Item>
    where
        F: FnMut(&S::Item) -> K,
        K: PartialOrd,
    {
        enumerable::max_by(self.iter(), selector)
    }
}
