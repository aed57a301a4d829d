//! Batching operators.
//!
//! Two ways of carving a sequence into non-overlapping batches:
//! - [`Batched`]: fixed-size windows of `n` consecutive elements
//! - [`SplitWhen`]: runs delimited by elements matching a predicate
//!
//! Both consume their source exactly once and produce batches lazily,
//! one pull at a time, so they stay usable on unbounded sources as long
//! as the consumer bounds its own demand.

mod delimited;
mod fixed;

pub use delimited::{DelimiterPolicy, SplitWhen};
pub use fixed::Batched;
