//! Periodic sampling.

use std::fmt;

use crate::cursor::Cursor;

/// Iterator adapter emitting every `every`-th element of its source.
///
/// The cycle is 1-based: elements at positions `every`, `2 * every`,
/// `3 * every`, … are emitted, so `every == 1` passes the source through
/// unchanged and `every == 0` emits nothing at all. A final partial cycle
/// (fewer than `every` elements remaining) emits nothing.
pub struct TakeEvery<I: Iterator> {
    cursor: Cursor<I>,
    every: usize,
}

impl<I: Iterator> TakeEvery<I> {
    /// Create a sampling adapter over `source` with the given cycle length.
    pub fn new<S>(source: S, every: usize) -> Self
    where
        S: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            cursor: Cursor::new(source),
            every,
        }
    }
}

impl<I: Iterator> Iterator for TakeEvery<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.every == 0 {
            return None;
        }
        let mut item = None;
        for _ in 0..self.every {
            item = self.cursor.advance();
            item.as_ref()?;
        }
        item
    }
}

impl<I: Iterator> fmt::Debug for TakeEvery<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeEvery")
            .field("every", &self.every)
            .field("cursor", &self.cursor)
            .finish()
    }
}
