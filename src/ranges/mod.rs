//! Run-length range detection.

use std::fmt;

use crate::cursor::Cursor;

/// One maximal run of consecutive elements satisfying a predicate.
///
/// Markers produced by a single [`MatchRanges`] traversal are disjoint
/// and strictly increasing in `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeMarker {
    /// Zero-based position of the run's first element in the source.
    pub start: usize,
    /// Number of elements in the run; always at least one.
    pub len: usize,
}

impl RangeMarker {
    /// One past the last position covered by the run.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Iterator adapter yielding one [`RangeMarker`] per maximal contiguous
/// run of elements matching a predicate, in source order.
///
/// The element that terminates a run has already failed the predicate, so
/// it can never begin the next run; it is consumed and accounted for in
/// the position counter but produces no output. The final run is reported
/// even when it extends to the end of the source.
pub struct MatchRanges<I: Iterator, P> {
    cursor: Cursor<I>,
    predicate: P,
    position: usize,
}

impl<I, P> MatchRanges<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    /// Create a run detector over `source` using `predicate`.
    pub fn new<S>(source: S, predicate: P) -> Self
    where
        S: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            cursor: Cursor::new(source),
            predicate,
            position: 0,
        }
    }
}

impl<I, P> Iterator for MatchRanges<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = RangeMarker;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.cursor.advance() {
            let start = self.position;
            self.position += 1;

            if !(self.predicate)(&item) {
                continue;
            }

            let mut len = 1;
            while let Some(next) = self.cursor.advance() {
                self.position += 1;
                if (self.predicate)(&next) {
                    len += 1;
                } else {
                    break;
                }
            }
            return Some(RangeMarker { start, len });
        }
        None
    }
}

impl<I: Iterator, P> fmt::Debug for MatchRanges<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchRanges")
            .field("position", &self.position)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
