//! # Lazy sequences with statically discoverable cursor capabilities
//!
//! A view stores no elements. It hands out boundary cursors and every
//! element is computed from a cursor position on demand.
//!
//! ## Capability levels
//!
//! 1. **Forward**: read, step forward, compare
//! 2. **Random access**: forward plus step back, jump by offset, distance
//!
//! The level is an associated type of the cursor, so generic code picks
//! its algorithm at compile time: [`algorithm::size`] is O(1) on a
//! [`RandomAccessCounter`] and a linear walk on a [`ForwardCounter`].
//!
//! ## Usage Example
//!
//! ```
//! use range_facade::{algorithm, ForwardCounter, RandomAccessCounter};
//!
//! let values: Vec<i64> = ForwardCounter::new(4).into_iter().collect();
//! assert_eq!(values, [0, 1, 2, 3]);
//!
//! let counter = RandomAccessCounter::new(4);
//! assert_eq!(counter.into_iter().rev().collect::<Vec<_>>(), [3, 2, 1, 0]);
//! assert_eq!(algorithm::size(&counter), 4);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algorithm; // Generic algorithms selected by capability
pub mod counter; // The bounded integer generator
pub mod cursor; // Cursor contract and capability tags
pub mod view; // Boundary-cursor sequences and their iterator

// Re-exports for convenience
pub use counter::{BoundedCounter, CounterCursor, ForwardCounter, RandomAccessCounter};
pub use cursor::{Category, CategoryKind, Cursor, Forward, RandomAccess, RandomAccessCursor, Traverse};
pub use view::{ForwardView, Iter, RandomAccessView, View};

use thiserror::Error;

/// Errors reported by the checked traversal operations
///
/// Raw cursor methods never return these; they are preconditions there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Strict construction was given a negative bound
    #[error("negative bound {0}")]
    NegativeBound(i64),

    /// Cursor does not point at an element
    #[error("position {position} out of range 0..{bound}")]
    OutOfRange {
        /// Position of the offending cursor
        position: i64,
        /// Exclusive upper limit of valid positions
        bound: i64,
    },

    /// Forward jump would pass the end cursor
    #[error("cannot advance {requested} steps, only {available} left before end")]
    PastEnd {
        /// Steps asked for
        requested: i64,
        /// Steps possible
        available: i64,
    },

    /// Backward jump would pass the begin cursor
    #[error("cannot advance {requested} steps, only {available} left after begin")]
    BeforeBegin {
        /// Steps asked for (negative)
        requested: i64,
        /// Backward steps possible
        available: i64,
    },

    /// Backward movement requested from a forward-only cursor
    #[error("forward cursor cannot move {steps} steps")]
    BackwardOnForward {
        /// Steps asked for (negative)
        steps: i64,
    },
}
