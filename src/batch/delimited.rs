//! Predicate-delimited batching.

use std::fmt;

use crate::cursor::Cursor;

/// What to do with an element that matches the delimiter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterPolicy {
    /// The matching element is removed from the output entirely; it
    /// neither ends nor starts any batch.
    Drop,
    /// The matching element terminates the batch being closed (after the
    /// optional transform) and is never duplicated into the next batch.
    KeepInBatch,
}

/// Iterator adapter splitting a sequence into non-empty batches at each
/// element matching a delimiter predicate.
///
/// Gap behaviour is explicit: a run of zero elements between two
/// consecutive delimiters yields no batch under [`DelimiterPolicy::Drop`]
/// and a single-element batch (the transformed delimiter) under
/// [`DelimiterPolicy::KeepInBatch`]. A delimiter as the very first
/// element behaves exactly like an internal one, and the trailing segment
/// after the last delimiter is emitted only when non-empty.
pub struct SplitWhen<I: Iterator, P, F> {
    cursor: Cursor<I>,
    predicate: P,
    policy: DelimiterPolicy,
    transform: Option<F>,
}

/// Transform placeholder for the no-transform constructors.
pub(crate) type IdentityFn<T> = fn(T) -> T;

impl<I, P> SplitWhen<I, P, IdentityFn<I::Item>>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    /// Split `source` at each element matching `predicate`, with no
    /// transform applied to retained delimiters.
    pub fn new<S>(source: S, predicate: P, policy: DelimiterPolicy) -> Self
    where
        S: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            cursor: Cursor::new(source),
            predicate,
            policy,
            transform: None,
        }
    }
}

impl<I, P, F> SplitWhen<I, P, F>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> I::Item,
{
    /// Split `source` at each element matching `predicate`, applying
    /// `transform` to each delimiter retained under
    /// [`DelimiterPolicy::KeepInBatch`].
    pub fn with_transform<S>(
        source: S,
        predicate: P,
        policy: DelimiterPolicy,
        transform: F,
    ) -> Self
    where
        S: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            cursor: Cursor::new(source),
            predicate,
            policy,
            transform: Some(transform),
        }
    }
}

impl<I, P, F> Iterator for SplitWhen<I, P, F>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> I::Item,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // Empty gaps between consecutive delimiters produce empty
        // assemblies under Drop; keep scanning until a non-empty batch or
        // exhaustion.
        while self.cursor.has_next() {
            let mut batch = Vec::new();
            while let Some(item) = self.cursor.advance() {
                if (self.predicate)(&item) {
                    if self.policy == DelimiterPolicy::KeepInBatch {
                        let item = match self.transform.as_mut() {
                            Some(transform) => transform(item),
                            None => item,
                        };
                        batch.push(item);
                    }
                    break;
                }
                batch.push(item);
            }
            if !batch.is_empty() {
                return Some(batch);
            }
        }
        None
    }
}

impl<I: Iterator, P, F> fmt::Debug for SplitWhen<I, P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitWhen")
            .field("policy", &self.policy)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_zero(x: &i32) -> bool {
        *x == 0
    }

    #[test]
    fn dropping_delimiters_splits_cleanly() {
        let batches: Vec<_> =
            SplitWhen::new(vec![1, 2, 3, 0, 4, 5], is_zero, DelimiterPolicy::Drop).collect();
        assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn kept_delimiter_terminates_its_batch() {
        let batches: Vec<_> = SplitWhen::new(
            vec![1, 2, 3, 0, 4, 5],
            is_zero,
            DelimiterPolicy::KeepInBatch,
        )
        .collect();
        assert_eq!(batches, vec![vec![1, 2, 3, 0], vec![4, 5]]);
    }

    #[test]
    fn kept_delimiter_is_transformed() {
        let batches: Vec<_> = SplitWhen::with_transform(
            vec![1, 2, 0, 3],
            is_zero,
            DelimiterPolicy::KeepInBatch,
            |x| x - 100,
        )
        .collect();
        assert_eq!(batches, vec![vec![1, 2, -100], vec![3]]);
    }

    #[test]
    fn consecutive_delimiters_yield_no_gap_batch_when_dropped() {
        let batches: Vec<_> =
            SplitWhen::new(vec![1, 0, 0, 2], is_zero, DelimiterPolicy::Drop).collect();
        assert_eq!(batches, vec![vec![1], vec![2]]);
    }

    #[test]
    fn consecutive_delimiters_yield_singletons_when_kept() {
        let batches: Vec<_> =
            SplitWhen::new(vec![1, 0, 0, 2], is_zero, DelimiterPolicy::KeepInBatch).collect();
        assert_eq!(batches, vec![vec![1, 0], vec![0], vec![2]]);
    }

    #[test]
    fn leading_delimiter_behaves_like_an_internal_one() {
        let dropped: Vec<_> =
            SplitWhen::new(vec![0, 1, 2], is_zero, DelimiterPolicy::Drop).collect();
        assert_eq!(dropped, vec![vec![1, 2]]);

        let kept: Vec<_> =
            SplitWhen::new(vec![0, 1, 2], is_zero, DelimiterPolicy::KeepInBatch).collect();
        assert_eq!(kept, vec![vec![0], vec![1, 2]]);
    }

    #[test]
    fn trailing_delimiter_emits_no_empty_batch() {
        let batches: Vec<_> =
            SplitWhen::new(vec![1, 2, 0], is_zero, DelimiterPolicy::Drop).collect();
        assert_eq!(batches, vec![vec![1, 2]]);
    }

    #[test]
    fn source_without_delimiters_is_one_batch() {
        let batches: Vec<_> = SplitWhen::new(vec![1, 2, 3], is_zero, DelimiterPolicy::Drop).collect();
        assert_eq!(batches, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn all_delimiter_source_yields_nothing_when_dropped() {
        let mut batches = SplitWhen::new(vec![0, 0, 0], is_zero, DelimiterPolicy::Drop);
        assert_eq!(batches.next(), None);
    }

    #[test]
    fn stays_lazy_on_unbounded_sources() {
        let batches: Vec<_> = SplitWhen::new(1.., |x: &i32| x % 3 == 0, DelimiterPolicy::Drop)
            .take(2)
            .collect();
        assert_eq!(batches, vec![vec![1, 2], vec![4, 5]]);
    }
}
