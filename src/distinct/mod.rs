//! Projection-based deduplication.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::cursor::Cursor;

/// Iterator adapter yielding the first element encountered for each
/// distinct projected key, in first-occurrence order.
///
/// Keys are held in a [`HashSet`] for the duration of the traversal, so
/// auxiliary memory grows with the number of distinct keys, not with the
/// number of elements.
pub struct DistinctBy<I: Iterator, S, K> {
    cursor: Cursor<I>,
    selector: S,
    seen: HashSet<K>,
}

impl<I, S, K> DistinctBy<I, S, K>
where
    I: Iterator,
    S: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    /// Create a deduplicating adapter over `source`, keyed by `selector`.
    pub fn new<Src>(source: Src, selector: S) -> Self
    where
        Src: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            cursor: Cursor::new(source),
            selector,
            seen: HashSet::new(),
        }
    }
}

impl<I, S, K> Iterator for DistinctBy<I, S, K>
where
    I: Iterator,
    S: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.cursor.advance() {
            let key = (self.selector)(&item);
            if self.seen.insert(key) {
                return Some(item);
            }
        }
        None
    }
}

impl<I: Iterator, S, K> fmt::Debug for DistinctBy<I, S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistinctBy")
            .field("distinct_keys_seen", &self.seen.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

/// Variant of [`DistinctBy`] taking a caller-supplied equality closure
/// instead of requiring `K: Hash`.
///
/// Seen keys are kept in insertion order and compared by a linear scan,
/// so each element costs O(d) comparisons for d distinct keys so far.
/// Prefer [`DistinctBy`] whenever the key type can hash.
pub struct DistinctByWith<I: Iterator, S, K, E> {
    cursor: Cursor<I>,
    selector: S,
    eq: E,
    seen: Vec<K>,
}

impl<I, S, K, E> DistinctByWith<I, S, K, E>
where
    I: Iterator,
    S: FnMut(&I::Item) -> K,
    E: FnMut(&K, &K) -> bool,
{
    /// Create a deduplicating adapter keyed by `selector`, with key
    /// equality decided by `eq`.
    pub fn new<Src>(source: Src, selector: S, eq: E) -> Self
    where
        Src: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            cursor: Cursor::new(source),
            selector,
            eq,
            seen: Vec::new(),
        }
    }
}

impl<I, S, K, E> Iterator for DistinctByWith<I, S, K, E>
where
    I: Iterator,
    S: FnMut(&I::Item) -> K,
    E: FnMut(&K, &K) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.cursor.advance() {
            let key = (self.selector)(&item);
            if self.seen.iter().any(|prior| (self.eq)(prior, &key)) {
                continue;
            }
            self.seen.push(key);
            return Some(item);
        }
        None
    }
}

impl<I: Iterator, S, K, E> fmt::Debug for DistinctByWith<I, S, K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistinctByWith")
            .field("distinct_keys_seen", &self.seen.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Record {
        key: u32,
        value: &'static str,
    }

    fn records() -> Vec<Record> {
        vec![
            Record { key: 1, value: "x" },
            Record { key: 2, value: "y" },
            Record { key: 1, value: "z" },
        ]
    }

    #[test]
    fn first_occurrence_wins() {
        let distinct: Vec<_> = DistinctBy::new(records(), |r| r.key).collect();
        assert_eq!(
            distinct,
            vec![
                Record { key: 1, value: "x" },
                Record { key: 2, value: "y" },
            ]
        );
    }

    #[test]
    fn all_distinct_passes_everything_through() {
        let distinct: Vec<_> = DistinctBy::new(vec![1, 2, 3], |x| *x).collect();
        assert_eq!(distinct, vec![1, 2, 3]);
    }

    #[test]
    fn empty_source_yields_nothing() {
        let mut distinct = DistinctBy::new(Vec::<i32>::new(), |x| *x);
        assert_eq!(distinct.next(), None);
    }

    #[test]
    fn caller_supplied_equality_is_honoured() {
        // Case-insensitive keying without a Hash bound.
        let words = vec!["Apple", "APPLE", "banana", "Banana", "cherry"];
        let distinct: Vec<_> = DistinctByWith::new(
            words,
            |w: &&str| w.to_string(),
            |a: &String, b: &String| a.eq_ignore_ascii_case(b),
        )
        .collect();
        assert_eq!(distinct, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn memory_tracks_distinct_keys_not_elements() {
        let many_repeats = (0..1000).map(|i| i % 7);
        let mut distinct = DistinctBy::new(many_repeats, |x| *x);
        let collected: Vec<_> = distinct.by_ref().collect();
        assert_eq!(collected, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(distinct.seen.len(), 7);
    }
}
