//! Errors returned by this crate.

use thiserror::Error;

/// Convenience alias for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a computation can fail. Tree operations can't fail; only cable merging does
/// arithmetic that can run out of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Joining two cables would produce a length that doesn't fit in a `u64`.
    #[error("joining cables of length {a} and {b} overflows u64")]
    CostOverflow {
        /// The shorter cable.
        a: u64,
        /// The longer cable.
        b: u64,
    },

    /// The running total of merge costs no longer fits in a `u64`.
    #[error("total cost {total} plus merge cost {cost} overflows u64")]
    TotalOverflow {
        /// Cost accumulated before the failing merge.
        total: u64,
        /// Cost of the failing merge.
        cost: u64,
    },
}
