//! Error types for the linq crate.

use thiserror::Error;

/// Errors raised by terminal operations.
///
/// Building a sequence never fails; these only surface when a terminal
/// operation enumerates the source and finds the wrong number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LinqError {
    /// The sequence (or the part of it matching a predicate) yielded no elements.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// A single element was required but more than one was found.
    #[error("sequence contains more than one element")]
    MultipleElements,
}

/// Result type for linq operations.
pub type Result<T> = std::result::Result<T, LinqError>;
