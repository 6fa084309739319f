//! Reward-engine errors.
//!
//! Every variant is a local, recoverable condition; a failed call leaves the
//! ledger and epoch state untouched.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewardError {
    #[error("epoch {0} does not exist")]
    UnknownEpoch(u64),

    #[error("epoch ids are sequential: expected {expected}, got {actual}")]
    NonSequentialEpoch { expected: u64, actual: u64 },

    #[error("epoch may not start at block {actual} before the previous Active phase ends at {minimum}")]
    EpochStartsTooEarly { minimum: u64, actual: u64 },

    #[error("expected {expected} NFT holders, got {actual}")]
    NftHolderCountMismatch { expected: u128, actual: usize },

    #[error("the snapshot window for this epoch has closed")]
    SnapshotWindowClosed,

    #[error("a snapshot is already recorded for this participant in this epoch")]
    SnapshotAlreadyRecorded,

    #[error("epoch is not in its claim period")]
    EpochNotInClaimPeriod,

    #[error("participant is not eligible for this epoch's trust pool")]
    NotEligible,

    #[error("reward already claimed for this epoch")]
    AlreadyClaimed,

    #[error("arithmetic overflow in reward computation")]
    Overflow,
}
