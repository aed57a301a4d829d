//! Fixed-size batching.

use std::fmt;

use crate::cursor::Cursor;

/// Iterator adapter yielding batches of `size` consecutive elements.
///
/// Every batch contains exactly `size` elements except possibly the last,
/// which holds the 1..size remainder when the source length is not a
/// multiple of `size`. A batch size of zero yields no batches at all,
/// whatever the source.
///
/// Each pull reads exactly the elements that batch needs and no more, so
/// the adapter works on unbounded sources when the caller limits how many
/// batches it takes. Abandoning iteration early leaves the source
/// partially consumed; that is the single-pass contract, not a leak.
pub struct Batched<I: Iterator> {
    cursor: Cursor<I>,
    size: usize,
}

impl<I: Iterator> Batched<I> {
    /// Create a batching adapter over `source` with the given batch size.
    pub fn new<S>(source: S, size: usize) -> Self
    where
        S: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            cursor: Cursor::new(source),
            size,
        }
    }

    /// The configured batch size.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Batched<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 || !self.cursor.has_next() {
            return None;
        }

        let mut batch = Vec::with_capacity(self.size);
        while batch.len() < self.size {
            match self.cursor.advance() {
                Some(item) => batch.push(item),
                None => break,
            }
        }
        Some(batch)
    }
}

impl<I: Iterator> fmt::Debug for Batched<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Batched")
            .field("size", &self.size)
            .field("cursor", &self.cursor)
            .finish()
    }
}
