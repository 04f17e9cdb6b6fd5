//! Construction error taxonomy.
//!
//! The engine validates its constructor arguments exhaustively up front; every
//! other operation is infallible from the caller's perspective (allocation
//! failure and invalid frees are reported as `None`/silent no-ops, see the
//! crate-level docs).

use core::fmt;

/// Why [`Allocator::new`](crate::Allocator::new) refused to construct an allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructError {
    /// `base` was zero.
    ZeroBase,
    /// `length` was zero.
    ZeroLength,
    /// `granularity` was zero.
    ZeroGranularity,
    /// `granularity` exceeded `length`, leaving no usable space.
    GranularityExceedsLength,
    /// `base` was not a multiple of `granularity`.
    ///
    /// The engine does not re-align `base` on the caller's behalf; see the
    /// design notes on this choice.
    BaseMisaligned,
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstructError::ZeroBase => "base must be nonzero",
            ConstructError::ZeroLength => "length must be nonzero",
            ConstructError::ZeroGranularity => "granularity must be nonzero",
            ConstructError::GranularityExceedsLength => "granularity exceeds length",
            ConstructError::BaseMisaligned => "base is not aligned to granularity",
        })
    }
}
