//! First-occurrence filtering.
//!
//! The seen-set lives in the iterator, so every enumeration starts with an
//! empty one.

use std::collections::HashSet;
use std::hash::Hash;

/// Source returned by [`distinct`] and [`distinct_by`].
#[derive(Debug, Clone)]
pub struct Distinct<S, F> {
    source: S,
    key: F,
}

/// Yields each element the first time it is seen.
pub fn distinct<S>(source: S) -> Distinct<S, fn(&S::Item) -> S::Item>
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    distinct_by(source, <S::Item as Clone>::clone as fn(&S::Item) -> S::Item)
}

/// Yields each element whose key has not been seen before; the first element
/// with a given key wins.
pub fn distinct_by<S, F, K>(source: S, key: F) -> Distinct<S, F>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: Eq + Hash,
{
    Distinct { source, key }
}

impl<S, F, K> IntoIterator for Distinct<S, F>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: Eq + Hash,
{
    type Item = S::Item;
    type IntoIter = DistinctIter<S::IntoIter, F, K>;

    fn into_iter(self) -> Self::IntoIter {
        DistinctIter {
            inner: self.source.into_iter(),
            key: self.key,
            seen: HashSet::new(),
        }
    }
}

/// Iterator for [`Distinct`]. Owns the seen-set for one enumeration.
pub struct DistinctIter<I, F, K> {
    inner: I,
    key: F,
    seen: HashSet<K>,
}

impl<I, F, K> Iterator for DistinctIter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.inner.by_ref() {
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}
