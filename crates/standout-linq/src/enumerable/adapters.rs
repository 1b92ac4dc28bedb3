//! Streaming transforms.
//!
//! Each type here stores its input source plus the closure it needs and only
//! touches the source in `into_iter`. Every enumeration therefore restarts
//! from the beginning of the input, and the iterators handed out are the
//! standard library adapters, which pull no more than they yield.

use std::iter;

/// Source returned by [`map`].
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    project: F,
}

/// Yields `project(x)` for each element `x`.
pub fn map<S, F, B>(source: S, project: F) -> Map<S, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> B,
{
    Map { source, project }
}

impl<S, F, B> IntoIterator for Map<S, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> B,
{
    type Item = B;
    type IntoIter = iter::Map<S::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter().map(self.project)
    }
}

/// Source returned by [`filter`].
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

/// Yields only the elements for which `predicate` holds (LINQ `where`).
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Filter { source, predicate }
}

impl<S, P> IntoIterator for Filter<S, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type IntoIter = iter::Filter<S::IntoIter, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter().filter(self.predicate)
    }
}

/// Source returned by [`take`].
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

/// Yields at most the first `count` elements.
pub fn take<S: IntoIterator>(source: S, count: usize) -> Take<S> {
    Take { source, count }
}

impl<S: IntoIterator> IntoIterator for Take<S> {
    type Item = S::Item;
    type IntoIter = iter::Take<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter().take(self.count)
    }
}

/// Source returned by [`take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
}

/// Yields elements until the first one for which `predicate` fails.
pub fn take_while<S, P>(source: S, predicate: P) -> TakeWhile<S, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile { source, predicate }
}

impl<S, P> IntoIterator for TakeWhile<S, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type IntoIter = iter::TakeWhile<S::IntoIter, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter().take_while(self.predicate)
    }
}

/// Source returned by [`skip`].
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

/// Discards the first `count` elements and yields the rest.
pub fn skip<S: IntoIterator>(source: S, count: usize) -> Skip<S> {
    Skip { source, count }
}

impl<S: IntoIterator> IntoIterator for Skip<S> {
    type Item = S::Item;
    type IntoIter = iter::Skip<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter().skip(self.count)
    }
}

/// Source returned by [`skip_while`].
#[derive(Debug, Clone)]
pub struct SkipWhile<S, P> {
    source: S,
    predicate: P,
}

/// Discards elements while `predicate` holds, then yields everything from the
/// first failing element on without testing again.
pub fn skip_while<S, P>(source: S, predicate: P) -> SkipWhile<S, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    SkipWhile { source, predicate }
}

impl<S, P> IntoIterator for SkipWhile<S, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type IntoIter = iter::SkipWhile<S::IntoIter, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter().skip_while(self.predicate)
    }
}

/// Source returned by [`concat`].
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

/// Yields all of `first`, then all of `second`.
pub fn concat<A, B>(first: A, second: B) -> Concat<A, B>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Concat { first, second }
}

impl<A, B> IntoIterator for Concat<A, B>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    type Item = A::Item;
    type IntoIter = iter::Chain<A::IntoIter, B::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.first.into_iter().chain(self.second)
    }
}

/// Source returned by [`flat`].
#[derive(Debug, Clone)]
pub struct Flat<S> {
    source: S,
}

/// Flattens one level of nesting, outer order first, then inner order.
pub fn flat<S>(source: S) -> Flat<S>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Flat { source }
}

impl<S> IntoIterator for Flat<S>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;
    type IntoIter = iter::Flatten<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter().flatten()
    }
}
