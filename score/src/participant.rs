//! Participant snapshot — the explicit inputs a composite score is computed
//! from.
//!
//! The chain and the auxiliary data store supply these fields; the engine
//! never fetches them itself. A participant record is created on first
//! staking action, mutated as stake / referrals / education / roles change,
//! and zeroed rather than deleted.

use crate::referral::referral_score;
use crate::staking::{months_staked, staking_component};
use crate::trust::{CompositeTrustScore, EducationScore, RoleScore};
use pezkuwi_types::{AccountId, BlockHeight, ChainParams, HezAmount};
use serde::{Deserialize, Serialize};

/// One participant's scoring inputs at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub account: AccountId,
    /// Currently staked HEZ in raw units.
    pub staked: HezAmount,
    /// Block at which staking-score tracking was started. `None` means the
    /// participant never opted in; the staking component is then zero no
    /// matter how much is staked.
    pub staking_start_block: Option<BlockHeight>,
    pub referral_count: u32,
    pub education: EducationScore,
    pub role: RoleScore,
}

impl Participant {
    /// A fresh participant record with everything zeroed.
    pub fn new(account: AccountId) -> Self {
        Self {
            account,
            staked: HezAmount::ZERO,
            staking_start_block: None,
            referral_count: 0,
            education: EducationScore::ZERO,
            role: RoleScore::ZERO,
        }
    }

    /// Opt in to staking-score tracking at the given block.
    pub fn start_score_tracking(&mut self, at: BlockHeight) {
        self.staking_start_block = Some(at);
    }

    /// Compute the full composite trust score for this snapshot.
    ///
    /// Deterministic: identical snapshot + identical `current_block` always
    /// produce the identical breakdown.
    pub fn composite(&self, current_block: BlockHeight, params: &ChainParams) -> CompositeTrustScore {
        let (months, tracking) = match self.staking_start_block {
            Some(start) => (
                months_staked(start, current_block, params.blocks_per_month),
                true,
            ),
            None => (0, false),
        };
        let staking = staking_component(self.staked, months, tracking);
        let referral = referral_score(self.referral_count);
        CompositeTrustScore::compute(staking, referral, self.education, self.role)
    }
}
