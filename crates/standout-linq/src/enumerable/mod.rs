//! Standalone lazy transforms.
//!
//! Every function here takes one or more sources (anything implementing
//! [`IntoIterator`]) and returns a new source without touching its input.
//! Work happens in `into_iter`, once per enumeration, so a source built from
//! restartable inputs is itself restartable: clone it and iterate again.
//!
//! ```
//! use standout_linq::enumerable::{filter, map, range, reverse};
//!
//! let evens = filter(map(range(1, 5), |x: i32| x * 3), |x| x % 2 == 0);
//! let backwards = reverse(evens);
//! assert_eq!(backwards.clone().into_iter().collect::<Vec<_>>(), [12, 6]);
//! assert_eq!(backwards.into_iter().collect::<Vec<_>>(), [12, 6]);
//! ```
//!
//! Extremal selection ([`min`], [`max`], [`min_by`], [`max_by`]) is eager:
//! it consumes the source and fails with
//! [`LinqError::EmptySequence`](crate::LinqError::EmptySequence) when there is
//! nothing to choose from.

mod adapters;
mod distinct;
mod extremum;
mod generators;
mod group;
mod reverse;

pub use adapters::{
    concat, filter, flat, map, skip, skip_while, take, take_while, Concat, Filter, Flat, Map,
    Skip, SkipWhile, Take, TakeWhile,
};
pub use distinct::{distinct, distinct_by, Distinct, DistinctIter};
pub use extremum::{extremum, max, max_by, min, min_by, Extreme};
pub use generators::{
    empty, lazy, range, repeat, repeat_forever, Lazy, Range, RangeIter, Repeat, RepeatIter,
};
pub use group::{group_by, group_by_map, GroupBy};
pub use reverse::{reverse, Reverse};
