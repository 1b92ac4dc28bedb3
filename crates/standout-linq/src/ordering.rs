//! Ordering primitives for sorted sequences.
//!
//! Provides [`Dir`] for sort direction, [`SortKey`] for a single
//! (selector, comparator, direction) tuple, and [`default_compare`], the
//! comparator used when none is supplied.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

/// The comparator used by `order_by` and `then_by` when none is given.
///
/// Comparable values order as `<` and `>` say. Values that are not even
/// comparable with themselves (NaN) sort after every other value and equal to
/// each other, so the result is a total order for floats. Two distinct values
/// that are merely incomparable with each other compare `Equal`.
pub fn default_compare<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    if let Some(ordering) = a.partial_cmp(b) {
        return ordering;
    }
    match (is_unordered(a), is_unordered(b)) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn is_unordered<K: PartialOrd>(value: &K) -> bool {
    value.partial_cmp(value).is_none()
}

type KeyCompare<'a, T> = Rc<dyn Fn(&T, &T) -> Ordering + 'a>;

/// One sort key: a key selector, a comparator for the selected keys, and a
/// direction.
///
/// The selector and comparator are fused into a single element comparison so
/// keys of different types can live in the same list.
pub struct SortKey<'a, T> {
    compare: KeyCompare<'a, T>,
    dir: Dir,
}

impl<'a, T> SortKey<'a, T> {
    /// Creates a sort key from a selector and a comparator.
    pub fn new<K, F, C>(selector: F, comparator: C, dir: Dir) -> Self
    where
        F: Fn(&T) -> K + 'a,
        C: Fn(&K, &K) -> Ordering + 'a,
        T: 'a,
        K: 'a,
    {
        SortKey {
            compare: Rc::new(move |a: &T, b: &T| comparator(&selector(a), &selector(b))),
            dir,
        }
    }

    /// Creates a sort key using [`default_compare`].
    pub fn by<K, F>(selector: F, dir: Dir) -> Self
    where
        F: Fn(&T) -> K + 'a,
        K: PartialOrd + 'a,
        T: 'a,
    {
        SortKey::new(selector, default_compare::<K>, dir)
    }

    /// Returns the direction of this key.
    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Compares two elements by this key, with the direction applied.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.dir.apply((self.compare)(a, b))
    }
}

impl<T> Clone for SortKey<'_, T> {
    fn clone(&self) -> Self {
        SortKey {
            compare: Rc::clone(&self.compare),
            dir: self.dir,
        }
    }
}

impl<T> fmt::Debug for SortKey<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortKey").field("dir", &self.dir).finish()
    }
}

/// Compares two elements using a list of sort keys.
///
/// Uses the first key as the primary sort key, the second to break ties, etc.
/// If all keys compare equal, returns `Equal`.
pub fn compare_by_keys<T>(a: &T, b: &T, keys: &[SortKey<'_, T>]) -> Ordering {
    for key in keys {
        let ordering = key.compare(a, b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
