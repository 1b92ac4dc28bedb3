//! Restartable sources that produce elements from scratch.

use std::iter;

use num_traits::PrimInt;

/// A restartable source built from a factory.
///
/// Every call to `into_iter` invokes the factory once, so each enumeration is
/// an independent run over the same logical computation.
#[derive(Debug, Clone, Copy)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Wraps a factory.
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<F, I> IntoIterator for Lazy<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type IntoIter = I::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (self.factory)().into_iter()
    }
}

/// Creates a restartable source from a factory.
///
/// ```
/// use standout_linq::enumerable::lazy;
///
/// let evens = lazy(|| (0..5).map(|x| x * 2));
/// assert_eq!(evens.into_iter().collect::<Vec<_>>(), [0, 2, 4, 6, 8]);
/// ```
pub fn lazy<F, I>(factory: F) -> Lazy<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    Lazy::new(factory)
}

/// A source with no elements.
pub fn empty<T>() -> Lazy<fn() -> iter::Empty<T>> {
    Lazy::new(iter::empty::<T> as fn() -> iter::Empty<T>)
}

/// `count` consecutive integers starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    start: T,
    count: usize,
}

/// Creates a source of `count` consecutive integers beginning at `start`.
///
/// The run stops at `T::max_value()`: a `count` reaching past it yields the
/// shorter run instead of overflowing.
///
/// ```
/// use standout_linq::enumerable::range;
///
/// assert_eq!(range(3, 4).into_iter().collect::<Vec<i32>>(), [3, 4, 5, 6]);
/// assert_eq!(range(3, 0).into_iter().count(), 0);
/// ```
pub fn range<T: PrimInt>(start: T, count: usize) -> Range<T> {
    Range { start, count }
}

impl<T: PrimInt> IntoIterator for Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // Values left before T::max_value(), when that fits in a usize.
        let room = (T::max_value() - self.start)
            .to_usize()
            .and_then(|gap| gap.checked_add(1));
        RangeIter {
            current: self.start,
            remaining: room.map_or(self.count, |room| self.count.min(room)),
        }
    }
}

/// Iterator for [`Range`].
#[derive(Debug, Clone)]
pub struct RangeIter<T> {
    current: T,
    remaining: usize,
}

impl<T: PrimInt> Iterator for RangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let value = self.current;
        if self.remaining > 0 {
            match self.current.checked_add(&T::one()) {
                Some(next) => self.current = next,
                None => self.remaining = 0,
            }
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: PrimInt> ExactSizeIterator for RangeIter<T> {}

/// Re-emits a source a fixed number of times, or forever.
#[derive(Debug, Clone)]
pub struct Repeat<S> {
    source: S,
    times: Option<usize>,
}

/// Creates a source that yields `source` in full `count` times.
///
/// ```
/// use standout_linq::enumerable::repeat;
///
/// let twice = repeat(vec![1, 2], 2);
/// assert_eq!(twice.into_iter().collect::<Vec<_>>(), [1, 2, 1, 2]);
/// ```
pub fn repeat<S>(source: S, count: usize) -> Repeat<S>
where
    S: IntoIterator + Clone,
{
    Repeat {
        source,
        times: Some(count),
    }
}

/// Creates a source that repeats `source` indefinitely.
///
/// Combine with a bounding operator such as `take`. If one full pass of the
/// source yields nothing, iteration ends instead of spinning.
pub fn repeat_forever<S>(source: S) -> Repeat<S>
where
    S: IntoIterator + Clone,
{
    Repeat {
        source,
        times: None,
    }
}

impl<S> IntoIterator for Repeat<S>
where
    S: IntoIterator + Clone,
{
    type Item = S::Item;
    type IntoIter = RepeatIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        RepeatIter {
            source: self.source,
            remaining: self.times,
            pass: None,
            pass_yielded: false,
        }
    }
}

/// Iterator for [`Repeat`].
pub struct RepeatIter<S: IntoIterator> {
    source: S,
    remaining: Option<usize>,
    pass: Option<S::IntoIter>,
    pass_yielded: bool,
}

impl<S> RepeatIter<S>
where
    S: IntoIterator + Clone,
{
    fn start_pass(&mut self) -> bool {
        match &mut self.remaining {
            Some(0) => return false,
            Some(n) => *n -= 1,
            None => {}
        }
        self.pass = Some(self.source.clone().into_iter());
        self.pass_yielded = false;
        true
    }
}

impl<S> Iterator for RepeatIter<S>
where
    S: IntoIterator + Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            if let Some(pass) = &mut self.pass {
                if let Some(item) = pass.next() {
                    self.pass_yielded = true;
                    return Some(item);
                }
                // An empty pass means every later pass is empty too.
                if !self.pass_yielded {
                    self.remaining = Some(0);
                }
                self.pass = None;
            }
            if !self.start_pass() {
                return None;
            }
        }
    }
}
