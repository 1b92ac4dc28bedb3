use std::hash::Hash;

use indexmap::{map, IndexMap};

/// Buckets `source` by key in a single pass.
///
/// Buckets appear in the order their key was first seen, and each bucket
/// keeps its elements in input order. `element` projects what is stored.
pub fn group_by_map<S, KF, EF, K, V>(source: S, mut key: KF, mut element: EF) -> IndexMap<K, Vec<V>>
where
    S: IntoIterator,
    KF: FnMut(&S::Item) -> K,
    EF: FnMut(S::Item) -> V,
    K: Eq + Hash,
{
    let mut groups: IndexMap<K, Vec<V>> = IndexMap::new();
    for item in source {
        let group_key = key(&item);
        groups.entry(group_key).or_default().push(element(item));
    }
    tracing::trace!(groups = groups.len(), "grouped source");
    groups
}

/// Source returned by [`group_by`].
#[derive(Debug, Clone)]
pub struct GroupBy<S, KF, EF> {
    source: S,
    key: KF,
    element: EF,
}

/// Lazily yields `(key, bucket)` pairs in first-key-occurrence order.
///
/// The whole source is grouped with [`group_by_map`] when enumeration begins.
pub fn group_by<S, KF, EF, K, V>(source: S, key: KF, element: EF) -> GroupBy<S, KF, EF>
where
    S: IntoIterator,
    KF: FnMut(&S::Item) -> K,
    EF: FnMut(S::Item) -> V,
    K: Eq + Hash,
{
    GroupBy {
        source,
        key,
        element,
    }
}

impl<S, KF, EF, K, V> IntoIterator for GroupBy<S, KF, EF>
where
    S: IntoIterator,
    KF: FnMut(&S::Item) -> K,
    EF: FnMut(S::Item) -> V,
    K: Eq + Hash,
{
    type Item = (K, Vec<V>);
    type IntoIter = map::IntoIter<K, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        group_by_map(self.source, self.key, self.element).into_iter()
    }
}
