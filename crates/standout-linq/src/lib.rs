//! Linq - Lazy, composable queries over any iterable.
//!
//! Linq provides a fluent API for chaining transforms over sequences and
//! terminating them into concrete values. It supports:
//!
//! - Projection, filtering, partitioning, concatenation and flattening
//! - Distinct, grouping, inner joins and group joins by key
//! - Multi-key stable ordering with custom comparators
//! - Terminal conversions to vectors, maps, sets and strings
//! - Element extraction with throwing and defaulting variants
//! - Quantifiers and numeric aggregates
//!
//! # Quick Start
//!
//! ```rust
//! use standout_linq::from;
//!
//! struct Task {
//!     name: &'static str,
//!     priority: i32,
//!     archived: bool,
//! }
//!
//! let tasks = vec![
//!     Task { name: "Write docs", priority: 3, archived: false },
//!     Task { name: "Fix bug", priority: 5, archived: false },
//!     Task { name: "Old task", priority: 1, archived: true },
//! ];
//!
//! let names = from(&tasks)
//!     .filter(|t| !t.archived)
//!     .order_by_descending(|t| t.priority)
//!     .map(|t| t.name)
//!     .to_vec();
//!
//! assert_eq!(names, ["Fix bug", "Write docs"]);
//! ```
//!
//! # Laziness and Restarting
//!
//! Building a chain never touches the source. Each terminal operation clones
//! the source description and enumerates it once:
//!
//! ```text
//! from(src).map(f).filter(p)   -> no work
//! .count() / .to_vec() / for   -> one enumeration of src per call
//! ```
//!
//! A source is restartable when it is `IntoIterator + Clone` and every clone
//! yields the same elements. Borrowed collections are the natural choice; a
//! single-use iterator wrapped directly yields its elements only once.
//!
//! # Terminal Contract
//!
//! | Operation | Empty | More than one |
//! |-----------|-------|---------------|
//! | `first`, `last` | `Err(EmptySequence)` | first / last element |
//! | `single` | `Err(EmptySequence)` | `Err(MultipleElements)` |
//! | `*_or_default` | `None` | element, or `None` for `single` |
//! | `min`, `max`, `min_by`, `max_by`, `average` | `Err(EmptySequence)` | value |
//!
//! The standalone transforms live in [`enumerable`] and can be used without
//! the wrapper.

pub mod enumerable;
mod error;
mod ordering;
mod sequence;

// Re-export public API
pub use error::{LinqError, Result};
pub use ordering::{compare_by_keys, default_compare, Dir, SortKey};
pub use sequence::{
    from, GroupJoin, GroupJoinIter, Grouping, Groups, Join, JoinIter, Ordered, OrderedSequence,
    Sequence,
};
