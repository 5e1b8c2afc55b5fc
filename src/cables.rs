//! Greedy minimum-cost cable joining.
//!
//! Joining two cables costs the sum of their lengths and yields one cable of that
//! length. Always joining the two shortest cables available minimises the total cost;
//! this is the same exchange argument that makes Huffman codes optimal.
//!
//! # Examples
//!
//! ```
//! use treecables::cables::{connect, Merge};
//!
//! let connection = connect(&[8, 4, 6, 12]).unwrap();
//!
//! assert_eq!(connection.total_cost, 58);
//! assert_eq!(
//!     connection.merges,
//!     vec![
//!         Merge { a: 4, b: 6, cost: 10 },
//!         Merge { a: 8, b: 10, cost: 18 },
//!         Merge { a: 12, b: 18, cost: 30 },
//!     ]
//! );
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// One join: cables of length `a` and `b` (`a <= b`) become a cable of length `cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Merge {
    /// The shorter of the two cables joined.
    pub a: u64,
    /// The longer of the two cables joined.
    pub b: u64,
    /// `a + b`: both the price of this join and the length of the result.
    pub cost: u64,
}

impl fmt::Display for Merge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.cost)
    }
}

/// The outcome of joining a set of cables into one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connection {
    /// Sum of every join's cost.
    pub total_cost: u64,
    /// Every join in the order it was made.
    pub merges: Vec<Merge>,
}

impl Connection {
    /// Length of the single cable left after the last join, or `None` if nothing was
    /// joined. Since joins only ever add lengths, this is the sum of the inputs.
    pub fn final_length(&self) -> Option<u64> {
        self.merges.last().map(|merge| merge.cost)
    }
}

/// Joins all `lengths` into one cable at minimum total cost.
///
/// Repeatedly takes the two shortest cables out of a min-heap, joins them and puts
/// the result back, until one cable is left. That is `n - 1` joins for `n` cables and
/// none at all for zero or one cable. When several cables tie for shortest, which one
/// is taken first doesn't change `total_cost`.
///
/// # Errors
///
/// [`Error::CostOverflow`] or [`Error::TotalOverflow`] if a length or the total grows
/// past `u64::MAX`.
pub fn connect(lengths: &[u64]) -> Result<Connection> {
    let mut connection = Connection {
        total_cost: 0,
        merges: Vec::with_capacity(lengths.len().saturating_sub(1)),
    };
    let mut heap: BinaryHeap<Reverse<u64>> = lengths.iter().copied().map(Reverse).collect();

    loop {
        let Some(Reverse(a)) = heap.pop() else {
            break;
        };
        let Some(Reverse(b)) = heap.pop() else {
            break;
        };

        let cost = a.checked_add(b).ok_or(Error::CostOverflow { a, b })?;
        let total = connection.total_cost;
        connection.total_cost = total
            .checked_add(cost)
            .ok_or(Error::TotalOverflow { total, cost })?;
        debug!(a, b, cost, total = connection.total_cost, "joined cables");

        connection.merges.push(Merge { a, b, cost });
        heap.push(Reverse(cost));
    }

    Ok(connection)
}
