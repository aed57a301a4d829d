//! # windrow — lazy sequence segmentation
//!
//! A family of single-pass segmentation operators over ordered sequences:
//! partitioning into batches, splitting on delimiters, periodic sampling,
//! run detection, all-pairs traversal, projection-based deduplication and
//! separator joining.
//!
//! Every operator consumes its source exactly once, forward-only, and
//! produces its output lazily (the joiner and pairwise traversal are
//! terminal consumers but still make only one pass). Sources may be
//! unbounded; a bounded consumer keeps every lazy operator usable on an
//! infinite stream.
//!
//! ## Usage example
//!
//! ```
//! use windrow::SegmentExt;
//!
//! let batches: Vec<Vec<i32>> = (1..=5).batched(2).collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let csv = vec![10, 20, 30].into_iter().join_display(",");
//! assert_eq!(csv, "10,20,30");
//! ```
//!
//! ## Ownership and misuse
//!
//! Operators take their source by value. A cursor has exactly one logical
//! reader; driving two derived sequences over one underlying source is
//! unrepresentable here rather than merely discouraged. Abandoning a
//! derived iterator early simply drops it, releasing the underlying
//! source with whatever elements it had not yet produced.

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - one per operator family, leaves first
pub mod cursor;   // Forward-only traversal state
pub mod batch;    // Fixed-size and predicate-delimited batching
pub mod sample;   // Periodic sampling
pub mod ranges;   // Run-length range detection
pub mod pairwise; // All-pairs traversal
pub mod distinct; // Projection-based deduplication
pub mod join;     // Terminal string joining

// Re-exports for convenience
pub use batch::{Batched, DelimiterPolicy, SplitWhen};
pub use cursor::Cursor;
pub use distinct::{DistinctBy, DistinctByWith};
pub use join::{join_display, join_with};
pub use pairwise::for_each_pair;
pub use ranges::{MatchRanges, RangeMarker};
pub use sample::TakeEvery;

use std::fmt::Display;
use std::hash::Hash;

use thiserror::Error;

/// Errors reported by the segmentation surface.
///
/// The typed operator API leaves no room for null sources, missing
/// callbacks or negative sizes, so inside this crate the taxonomy
/// survives only where parameters still arrive unchecked: boundaries that
/// accept raw numeric input (such as the CLI) validate through
/// [`checked_size`] before any element of a source is read.
#[derive(Error, Debug)]
pub enum SegmentError {
    /// A parameter was outside its documented domain.
    #[error("invalid {what}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        what: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Validate a raw signed count or size parameter, eagerly.
///
/// Rejects negative values (and values that do not fit this platform's
/// `usize`) with [`SegmentError::InvalidArgument`] before any lazy work
/// begins. Zero is accepted; the operators give it a defined meaning
/// (empty output).
pub fn checked_size(what: &'static str, raw: i64) -> Result<usize, SegmentError> {
    if raw < 0 {
        return Err(SegmentError::InvalidArgument {
            what,
            reason: format!("cannot be negative (got {raw})"),
        });
    }
    usize::try_from(raw).map_err(|_| SegmentError::InvalidArgument {
        what,
        reason: format!("{raw} does not fit in usize on this platform"),
    })
}

/// Segmentation adapters for any iterator.
///
/// Blanket-implemented; bring the trait into scope and every iterator
/// gains the operators. Each call takes `self` by value and establishes
/// its own isolated traversal state — nothing is shared between
/// invocations.
pub trait SegmentExt: Iterator + Sized {
    /// Group elements into batches of `size`; see [`Batched`].
    fn batched(self, size: usize) -> Batched<Self> {
        Batched::new(self, size)
    }

    /// Split into batches at each element matching `predicate`, the
    /// matching element handled per `policy`; see [`SplitWhen`].
    fn split_when<P>(
        self,
        predicate: P,
        policy: DelimiterPolicy,
    ) -> SplitWhen<Self, P, fn(Self::Item) -> Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SplitWhen::new(self, predicate, policy)
    }

    /// [`split_when`](SegmentExt::split_when) with a transform applied to
    /// delimiters retained under [`DelimiterPolicy::KeepInBatch`].
    fn split_when_with<P, F>(
        self,
        predicate: P,
        policy: DelimiterPolicy,
        transform: F,
    ) -> SplitWhen<Self, P, F>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(Self::Item) -> Self::Item,
    {
        SplitWhen::with_transform(self, predicate, policy, transform)
    }

    /// Split at each element matching `predicate`, dropping the matches.
    fn split_when_dropping<P>(
        self,
        predicate: P,
    ) -> SplitWhen<Self, P, fn(Self::Item) -> Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SplitWhen::new(self, predicate, DelimiterPolicy::Drop)
    }

    /// Emit every `every`-th element; see [`TakeEvery`].
    fn take_every(self, every: usize) -> TakeEvery<Self> {
        TakeEvery::new(self, every)
    }

    /// Detect maximal runs of elements matching `predicate`; see
    /// [`MatchRanges`].
    fn match_ranges<P>(self, predicate: P) -> MatchRanges<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        MatchRanges::new(self, predicate)
    }

    /// Invoke `action` for every unordered pair of elements; see
    /// [`for_each_pair`].
    fn for_each_pair<A>(self, action: A)
    where
        A: FnMut(&Self::Item, &Self::Item),
    {
        for_each_pair(self, action)
    }

    /// Keep the first element per distinct projected key; see
    /// [`DistinctBy`].
    fn distinct_by<S, K>(self, selector: S) -> DistinctBy<Self, S, K>
    where
        S: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        DistinctBy::new(self, selector)
    }

    /// [`distinct_by`](SegmentExt::distinct_by) with a caller-supplied
    /// key-equality closure; see [`DistinctByWith`].
    fn distinct_by_with<S, K, E>(self, selector: S, eq: E) -> DistinctByWith<Self, S, K, E>
    where
        S: FnMut(&Self::Item) -> K,
        E: FnMut(&K, &K) -> bool,
    {
        DistinctByWith::new(self, selector, eq)
    }

    /// Join stringified elements with `separator`; see [`join_with`].
    fn join_with<F>(self, separator: &str, stringify: F) -> String
    where
        F: FnMut(Self::Item) -> String,
    {
        join_with(self, separator, stringify)
    }

    /// Join elements with `separator` via their [`Display`] impls.
    fn join_display(self, separator: &str) -> String
    where
        Self::Item: Display,
    {
        join_display(self, separator)
    }
}

impl<I: Iterator> SegmentExt for I {}
