//! Block height type used throughout the engine.
//!
//! All time-dependent logic (staking duration, epoch phases) is derived from
//! block heights supplied by the chain, never from wall-clock time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A block height on the Pezkuwi chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockHeight(u64);

impl BlockHeight {
    /// Genesis (height zero).
    pub const GENESIS: Self = Self(0);

    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Blocks elapsed since this height (relative to `current`).
    pub fn elapsed_since(&self, current: BlockHeight) -> u64 {
        current.0.saturating_sub(self.0)
    }

    /// Whether this height + duration has passed relative to `current`.
    pub fn has_elapsed(&self, duration_blocks: u64, current: BlockHeight) -> bool {
        current.0 >= self.0.saturating_add(duration_blocks)
    }

    pub fn saturating_add(self, blocks: u64) -> Self {
        Self(self.0.saturating_add(blocks))
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_saturates_below_start() {
        let start = BlockHeight::new(100);
        assert_eq!(start.elapsed_since(BlockHeight::new(50)), 0);
        assert_eq!(start.elapsed_since(BlockHeight::new(150)), 50);
    }

    #[test]
    fn has_elapsed_boundary_is_inclusive() {
        let start = BlockHeight::new(1000);
        assert!(!start.has_elapsed(500, BlockHeight::new(1499)));
        assert!(start.has_elapsed(500, BlockHeight::new(1500)));
    }
}
