//! Epoch reward distributor.
//!
//! Each epoch carries a PEZ pool fixed at creation: 10% is auto-distributed
//! evenly to the 201 parliamentary NFT holders (no claim needed), the
//! remaining 90% is claimable by participants whose snapshotted trust score
//! clears the eligibility threshold. Phases (`Active → ClaimPeriod → Closed`)
//! are derived purely from block heights; `claim` is the single
//! side-effecting operation and is guarded so that at most one claim per
//! (epoch, participant) can ever succeed, even under concurrent invocation.

pub mod engine;
pub mod epoch;
pub mod error;
pub mod ledger;

pub use engine::{EpochRewardSummary, RewardEngine};
pub use epoch::{Epoch, EpochPhase};
pub use error::RewardError;
pub use ledger::{ClaimLedger, ClaimRecord};
