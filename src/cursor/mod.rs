//! Forward-only traversal state over a sequence.
//!
//! Every segmenting operator in this crate drives a [`Cursor`]: a pull
//! handle over an iterator with one element of lookahead and a fused
//! exhaustion flag. Ownership of the cursor (and therefore of the
//! underlying iterator) belongs to exactly one operator invocation, which
//! is what makes the single-pass contract enforceable at compile time:
//! two consumers cannot pull from the same traversal.

use std::fmt;

/// Mutable per-traversal state over a sequence.
///
/// A `Cursor` is created per operator invocation and discarded when the
/// derived output is exhausted or abandoned. Once the inner iterator has
/// reported exhaustion the cursor latches: it never polls the inner
/// iterator again, so re-consuming an exhausted cursor yields nothing
/// rather than re-traversing.
pub struct Cursor<I: Iterator> {
    iter: I,
    lookahead: Option<I::Item>,
    done: bool,
}

impl<I: Iterator> Cursor<I> {
    /// Wrap an iterator in a fresh cursor positioned before the first element.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            iter: source.into_iter(),
            lookahead: None,
            done: false,
        }
    }

    /// Whether at least one more element remains.
    ///
    /// May pull one element from the inner iterator into the lookahead
    /// slot; that element is returned by the next [`advance`] call, so no
    /// element is ever skipped or read twice.
    ///
    /// [`advance`]: Cursor::advance
    pub fn has_next(&mut self) -> bool {
        if self.lookahead.is_some() {
            return true;
        }
        if self.done {
            return false;
        }
        match self.iter.next() {
            Some(item) => {
                self.lookahead = Some(item);
                true
            }
            None => {
                self.done = true;
                false
            }
        }
    }

    /// Advance past the current element and return it, or `None` when the
    /// sequence is exhausted.
    pub fn advance(&mut self) -> Option<I::Item> {
        if let Some(item) = self.lookahead.take() {
            return Some(item);
        }
        if self.done {
            return None;
        }
        let next = self.iter.next();
        if next.is_none() {
            self.done = true;
        }
        next
    }

    /// Whether exhaustion has already been observed.
    ///
    /// `false` does not promise more elements; it only means the end has
    /// not been seen yet.
    pub fn is_done(&self) -> bool {
        self.done && self.lookahead.is_none()
    }
}

impl<I: Iterator> fmt::Debug for Cursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("done", &self.done)
            .field("lookahead_filled", &self.lookahead.is_some())
            .finish_non_exhaustive()
    }
}
