//! Epoch definition and phase derivation.

use crate::error::RewardError;
use pezkuwi_types::{BlockHeight, ChainParams, PezAmount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle phase of an epoch. Transitions only move forward and are
/// derived from block heights — there is no externally triggered early
/// transition, and querying a phase never mutates anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpochPhase {
    Active,
    ClaimPeriod,
    Closed,
}

impl fmt::Display for EpochPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpochPhase::Active => write!(f, "Active"),
            EpochPhase::ClaimPeriod => write!(f, "ClaimPeriod"),
            EpochPhase::Closed => write!(f, "Closed"),
        }
    }
}

/// One reward epoch. The pool and its split are fixed at creation and never
/// change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epoch {
    /// Sequential id, starting at 1.
    pub id: u64,
    pub start_block: BlockHeight,
    /// Length of the Active phase in blocks.
    pub active_blocks: u64,
    /// Length of the ClaimPeriod phase in blocks.
    pub claim_blocks: u64,
    /// The full reward pool, immutable once the epoch starts.
    pub pool: PezAmount,
    /// The NFT holders' share: `pool * nft_pool_percent / 100`, truncating.
    pub nft_allocation: PezAmount,
    /// The trust-score share: `pool - nft_allocation`. The two always sum
    /// to `pool` exactly — no dust is lost in the split.
    pub trust_pool: PezAmount,
    /// Even share per NFT holder, floored.
    pub nft_per_holder: PezAmount,
}

impl Epoch {
    /// Create an epoch and compute its pool split once.
    pub fn create(
        id: u64,
        start_block: BlockHeight,
        pool: PezAmount,
        params: &ChainParams,
    ) -> Result<Self, RewardError> {
        let nft_raw = pool
            .raw()
            .checked_mul(params.nft_pool_percent)
            .ok_or(RewardError::Overflow)?
            / 100;
        let nft_allocation = PezAmount::new(nft_raw);
        let trust_pool = pool - nft_allocation;
        let nft_per_holder = PezAmount::new(nft_raw / params.nft_holder_count.max(1));
        Ok(Self {
            id,
            start_block,
            active_blocks: params.epoch_active_blocks,
            claim_blocks: params.epoch_claim_blocks,
            pool,
            nft_allocation,
            trust_pool,
            nft_per_holder,
        })
    }

    /// First block of the ClaimPeriod phase.
    pub fn active_end(&self) -> BlockHeight {
        self.start_block.saturating_add(self.active_blocks)
    }

    /// First block of the Closed phase — claims stop here.
    pub fn claim_deadline(&self) -> BlockHeight {
        self.start_block
            .saturating_add(self.active_blocks)
            .saturating_add(self.claim_blocks)
    }

    /// Derive the phase at a block height.
    pub fn phase(&self, current_block: BlockHeight) -> EpochPhase {
        if current_block >= self.claim_deadline() {
            EpochPhase::Closed
        } else if current_block >= self.active_end() {
            EpochPhase::ClaimPeriod
        } else {
            EpochPhase::Active
        }
    }
}
