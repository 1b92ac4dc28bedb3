use crate::error::{LinqError, Result};

/// Which end of the ordering [`extremum`] looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extreme {
    Min,
    Max,
}

impl Extreme {
    /// Strict comparison: an equal candidate never replaces the incumbent.
    fn beats<K: PartialOrd>(self, candidate: &K, incumbent: &K) -> bool {
        match self {
            Extreme::Min => candidate < incumbent,
            Extreme::Max => candidate > incumbent,
        }
    }
}

/// Scans `(key, element)` pairs once and returns the pair with the extreme
/// key. Ties keep the first pair seen.
///
/// Every min/max operation in the crate goes through here; callers choose
/// whether the key or the element is the answer.
pub fn extremum<I, K, T>(pairs: I, extreme: Extreme) -> Result<(K, T)>
where
    I: IntoIterator<Item = (K, T)>,
    K: PartialOrd,
{
    let mut best: Option<(K, T)> = None;
    for (key, element) in pairs {
        let replace = match &best {
            Some((current, _)) => extreme.beats(&key, current),
            None => true,
        };
        if replace {
            best = Some((key, element));
        }
    }
    best.ok_or(LinqError::EmptySequence)
}

/// The smallest element.
pub fn min<S>(source: S) -> Result<S::Item>
where
    S: IntoIterator,
    S::Item: PartialOrd,
{
    extremum(source.into_iter().map(|x| (x, ())), Extreme::Min).map(|(value, ())| value)
}

/// The largest element.
pub fn max<S>(source: S) -> Result<S::Item>
where
    S: IntoIterator,
    S::Item: PartialOrd,
{
    extremum(source.into_iter().map(|x| (x, ())), Extreme::Max).map(|(value, ())| value)
}

/// The element whose projected key is smallest.
pub fn min_by<S, F, K>(source: S, mut selector: F) -> Result<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    extremum(source.into_iter().map(|x| (selector(&x), x)), Extreme::Min)
        .map(|(_, element)| element)
}

/// The element whose projected key is largest.
pub fn max_by<S, F, K>(source: S, mut selector: F) -> Result<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    extremum(source.into_iter().map(|x| (selector(&x), x)), Extreme::Max)
        .map(|(_, element)| element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_and_max() {
        assert_eq!(min(vec![3, 1, 2]), Ok(1));
        assert_eq!(max(vec![3, 1, 2]), Ok(3));
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(min(Vec::<i32>::new()), Err(LinqError::EmptySequence));
        assert_eq!(max(Vec::<f64>::new()), Err(LinqError::EmptySequence));
        assert_eq!(
            min_by(Vec::<&str>::new(), |s| s.len()),
            Err(LinqError::EmptySequence)
        );
    }

    #[test]
    fn by_returns_element() {
        let words = vec!["pear", "fig", "banana"];
        assert_eq!(min_by(words.clone(), |w| w.len()), Ok("fig"));
        assert_eq!(max_by(words, |w| w.len()), Ok("banana"));
    }

    #[test]
    fn ties_keep_first_seen() {
        let items = vec![("a", 1), ("b", 1), ("c", 0), ("d", 0)];
        assert_eq!(max_by(items.clone(), |i| i.1), Ok(("a", 1)));
        assert_eq!(min_by(items, |i| i.1), Ok(("c", 0)));
    }

    #[test]
    fn extremum_reports_key_and_element() {
        let pairs = vec![(2, 'x'), (5, 'y'), (5, 'z')];
        assert_eq!(extremum(pairs, Extreme::Max), Ok((5, 'y')));
    }
}
