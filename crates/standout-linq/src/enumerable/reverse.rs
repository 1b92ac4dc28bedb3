use std::iter::Rev;
use std::vec;

/// Source returned by [`reverse`].
#[derive(Debug, Clone)]
pub struct Reverse<S> {
    source: S,
}

/// Yields the elements of `source` back to front.
///
/// The source is buffered in full each time enumeration begins, so every
/// enumeration costs O(n) time and space.
pub fn reverse<S: IntoIterator>(source: S) -> Reverse<S> {
    Reverse { source }
}

impl<S: IntoIterator> IntoIterator for Reverse<S> {
    type Item = S::Item;
    type IntoIter = Rev<vec::IntoIter<S::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        let buffer: Vec<S::Item> = self.source.into_iter().collect();
        tracing::trace!(elements = buffer.len(), "buffered source for reverse");
        buffer.into_iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses() {
        let values: Vec<i32> = reverse(vec![1, 2, 3]).into_iter().collect();
        assert_eq!(values, [3, 2, 1]);
    }

    #[test]
    fn reverse_empty() {
        assert_eq!(reverse(Vec::<i32>::new()).into_iter().count(), 0);
    }

    #[test]
    fn reverse_rebuffers_each_enumeration() {
        let source = reverse(vec!['a', 'b']);
        assert_eq!(source.clone().into_iter().collect::<String>(), "ba");
        assert_eq!(source.into_iter().collect::<String>(), "ba");
    }
}
