//! The fluent sequence wrapper.
//!
//! [`Sequence`] wraps a restartable source and exposes every transform in
//! [`enumerable`](crate::enumerable) as a chainable method, plus joins,
//! ordering and terminal operations.
//!
//! Transforms take the wrapper by value and return a new wrapper around a
//! composed source; nothing is enumerated. Terminal operations take `&self`,
//! clone the source and enumerate the clone once, so the same wrapper can be
//! queried any number of times.

use std::hash::Hash;
use std::ops::Deref;

use crate::enumerable::{
    self, Concat, Distinct, Filter, Flat, GroupBy, Map, Reverse, Skip, SkipWhile, Take, TakeWhile,
};

mod join;
mod ordered;
mod terminal;

pub use join::{GroupJoin, GroupJoinIter, Join, JoinIter};
pub use ordered::{Ordered, OrderedSequence};

/// A lazy, restartable sequence.
///
/// # Example
///
/// ```
/// use standout_linq::from;
///
/// let result = from(vec![1, 2, 3])
///     .map(|x| x + 1)
///     .reverse()
///     .map(|x| x * 2)
///     .filter(|x| x % 4 == 0)
///     .to_vec();
///
/// assert_eq!(result, [8, 4]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sequence<S> {
    source: S,
}

/// Starts a sequence over any iterable source.
///
/// Borrowed collections (`&Vec<T>`, `&[T]`) make the cheapest sources since
/// each enumeration only copies the reference. Owned collections are cloned
/// per enumeration.
pub fn from<S: IntoIterator>(source: S) -> Sequence<S> {
    Sequence::new(source)
}

/// The groups produced by [`Sequence::group_by_select`].
pub type Groups<S, KF, EF, K, V> = Map<GroupBy<S, KF, EF>, fn((K, Vec<V>)) -> Grouping<K, V>>;

fn identity<T>(item: T) -> T {
    item
}

impl<S> Sequence<S> {
    /// Wraps a source.
    pub fn new(source: S) -> Self {
        Sequence { source }
    }

    /// Returns the wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unwraps the source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: IntoIterator> Sequence<S> {
    // ========================================================================
    // Projection and filtering
    // ========================================================================

    /// Projects each element.
    pub fn map<F, B>(self, project: F) -> Sequence<Map<S, F>>
    where
        F: FnMut(S::Item) -> B,
    {
        Sequence::new(enumerable::map(self.source, project))
    }

    /// Keeps the elements for which `predicate` holds (LINQ `where`).
    pub fn filter<P>(self, predicate: P) -> Sequence<Filter<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Sequence::new(enumerable::filter(self.source, predicate))
    }

    /// Reverses the sequence. Buffers the whole source on each enumeration.
    pub fn reverse(self) -> Sequence<Reverse<S>> {
        Sequence::new(enumerable::reverse(self.source))
    }

    // ========================================================================
    // Partitioning
    // ========================================================================

    /// Takes at most `count` elements.
    pub fn take(self, count: usize) -> Sequence<Take<S>> {
        Sequence::new(enumerable::take(self.source, count))
    }

    /// Takes elements while `predicate` holds.
    pub fn take_while<P>(self, predicate: P) -> Sequence<TakeWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Sequence::new(enumerable::take_while(self.source, predicate))
    }

    /// Skips the first `count` elements.
    pub fn skip(self, count: usize) -> Sequence<Skip<S>> {
        Sequence::new(enumerable::skip(self.source, count))
    }

    /// Skips elements while `predicate` holds, then yields the rest.
    pub fn skip_while<P>(self, predicate: P) -> Sequence<SkipWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Sequence::new(enumerable::skip_while(self.source, predicate))
    }

    // ========================================================================
    // Combining
    // ========================================================================

    /// Yields this sequence followed by `other`.
    pub fn append<B>(self, other: B) -> Sequence<Concat<S, B>>
    where
        B: IntoIterator<Item = S::Item>,
    {
        Sequence::new(enumerable::concat(self.source, other))
    }

    /// Yields `other` followed by this sequence.
    pub fn prepend<B>(self, other: B) -> Sequence<Concat<B, S>>
    where
        B: IntoIterator<Item = S::Item>,
    {
        Sequence::new(enumerable::concat(other, self.source))
    }

    /// Drops repeated elements; the first occurrence wins.
    pub fn distinct(self) -> Sequence<Distinct<S, fn(&S::Item) -> S::Item>>
    where
        S::Item: Eq + Hash + Clone,
    {
        Sequence::new(enumerable::distinct(self.source))
    }

    /// Drops elements whose key was already seen; the first occurrence wins.
    ///
    /// ```
    /// use standout_linq::from;
    ///
    /// let people = vec![(5, "first"), (5, "second"), (6, "other")];
    /// let unique = from(people).distinct_by(|p| p.0).to_vec();
    /// assert_eq!(unique, [(5, "first"), (6, "other")]);
    /// ```
    pub fn distinct_by<F, K>(self, key: F) -> Sequence<Distinct<S, F>>
    where
        F: FnMut(&S::Item) -> K,
        K: Eq + Hash,
    {
        Sequence::new(enumerable::distinct_by(self.source, key))
    }

    /// Flattens a sequence of iterables by one level.
    pub fn flat(self) -> Sequence<Flat<S>>
    where
        S::Item: IntoIterator,
    {
        Sequence::new(enumerable::flat(self.source))
    }

    /// Projects each element to an iterable and flattens the result.
    ///
    /// ```
    /// use standout_linq::from;
    ///
    /// let words = from(vec!["1 2", "3 4"]).flat_map(|s| s.split(' ')).to_vec();
    /// assert_eq!(words, ["1", "2", "3", "4"]);
    /// ```
    pub fn flat_map<F, I>(self, project: F) -> Sequence<Flat<Map<S, F>>>
    where
        F: FnMut(S::Item) -> I,
        I: IntoIterator,
    {
        Sequence::new(enumerable::flat(enumerable::map(self.source, project)))
    }

    // ========================================================================
    // Grouping
    // ========================================================================

    /// Groups elements by key.
    ///
    /// Groups come out in the order their key was first seen; each group keeps
    /// its elements in input order. The whole source is grouped when
    /// enumeration begins.
    ///
    /// ```
    /// use standout_linq::from;
    ///
    /// let groups = from(vec![1, 2, 3, 4, 5]).group_by(|x| x % 2).to_vec();
    /// assert_eq!(groups[0].key, 1);
    /// assert_eq!(groups[0].to_vec(), [1, 3, 5]);
    /// assert_eq!(groups[1].key, 0);
    /// assert_eq!(groups[1].to_vec(), [2, 4]);
    /// ```
    pub fn group_by<KF, K>(
        self,
        key: KF,
    ) -> Sequence<Groups<S, KF, fn(S::Item) -> S::Item, K, S::Item>>
    where
        KF: FnMut(&S::Item) -> K,
        K: Eq + Hash,
    {
        self.group_by_select(key, identity as fn(S::Item) -> S::Item)
    }

    /// Groups elements by key, storing `element(x)` in each group.
    pub fn group_by_select<KF, EF, K, V>(
        self,
        key: KF,
        element: EF,
    ) -> Sequence<Groups<S, KF, EF, K, V>>
    where
        KF: FnMut(&S::Item) -> K,
        EF: FnMut(S::Item) -> V,
        K: Eq + Hash,
    {
        Sequence::new(enumerable::map(
            enumerable::group_by(self.source, key, element),
            Grouping::from_pair as fn((K, Vec<V>)) -> Grouping<K, V>,
        ))
    }
}

impl<S: IntoIterator> IntoIterator for Sequence<S> {
    type Item = S::Item;
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter()
    }
}

impl<'s, S> IntoIterator for &'s Sequence<S>
where
    S: IntoIterator + Clone,
{
    type Item = S::Item;
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A group key together with the elements that share it.
///
/// Dereferences to the element [`Sequence`], so terminal operations can be
/// called on the group directly.
#[derive(Debug, Clone)]
pub struct Grouping<K, V> {
    /// The key shared by every element of the group.
    pub key: K,
    /// The elements, in input order.
    pub elements: Sequence<Vec<V>>,
}

impl<K, V> Grouping<K, V> {
    /// Creates a group.
    pub fn new(key: K, elements: Vec<V>) -> Self {
        Grouping {
            key,
            elements: Sequence::new(elements),
        }
    }

    fn from_pair((key, elements): (K, Vec<V>)) -> Self {
        Grouping::new(key, elements)
    }

    /// Returns the group key.
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K, V> Deref for Grouping<K, V> {
    type Target = Sequence<Vec<V>>;

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<K, V> IntoIterator for Grouping<K, V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
