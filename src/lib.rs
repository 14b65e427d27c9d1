//! Stable merge and stable partition over position-addressed sequences.
//!
//! The algorithms only ask for what they use: [`merge()`] reads each input once, front to back,
//! and [`stable_partition()`] needs to step both ways and swap, but never indexes. See [`seq`]
//! for the traits a sequence implements to take part.

#![cfg_attr(not(test), no_std)]

#[cfg(not(test))]
extern crate core as std;

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Forwards to `tracing::trace!` when the `tracing` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

#[cfg(test)]
#[macro_use]
mod test_utils;

mod merge;
mod partition;
mod search;

pub mod output;
pub mod seq;

pub use merge::{merge, merge_by, merge_by_key, merge_with, try_merge_by, MergeResult};
pub use output::{copy, CopyResult, Output, SliceWriter};
pub use partition::{
    stable_partition, stable_partition_between, stable_partition_by_key, try_stable_partition,
    try_stable_partition_between,
};
pub use search::{is_partitioned, partition_point};
pub use seq::{BidirectionalSequence, Cursor, Sequence, SequenceMut};
