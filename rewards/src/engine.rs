//! The reward engine — epoch creation, score snapshots, claims.

use crate::epoch::{Epoch, EpochPhase};
use crate::error::RewardError;
use crate::ledger::{ClaimLedger, ClaimRecord};
use pezkuwi_score::TrustScore;
use pezkuwi_types::{AccountId, BlockHeight, ChainParams, PezAmount};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Bookkeeping summary for one epoch's trust-score pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpochRewardSummary {
    pub trust_pool: PezAmount,
    pub nft_allocation: PezAmount,
    /// Sum of all eligible snapshot scores.
    pub total_trust_score: u128,
    /// All recorded snapshots, eligible or not.
    pub participants_count: usize,
    /// `trust_pool / total_trust_score`, floored. Display only — payouts
    /// multiply before dividing so they keep more precision.
    pub reward_per_point: u128,
    pub claim_deadline: BlockHeight,
}

/// The epoch reward distributor.
///
/// Owns every piece of per-epoch state: the epochs themselves, the score
/// snapshots recorded during each Active phase, the NFT payout lists fixed
/// at creation, and the claim ledger. Everything except `claim` takes
/// `&mut self`; `claim` takes `&self` and relies on the ledger's per-key
/// atomic guard, so claims for different participants may run concurrently
/// while snapshots and epochs stay frozen.
pub struct RewardEngine {
    params: ChainParams,
    epochs: BTreeMap<u64, Epoch>,
    /// Per-epoch snapshots, ordered by participant for deterministic
    /// enumeration.
    snapshots: HashMap<u64, BTreeMap<AccountId, TrustScore>>,
    /// Running sum of eligible snapshot scores per epoch. Fixed once the
    /// Active phase ends, since snapshots can only be recorded while Active.
    eligible_totals: HashMap<u64, u128>,
    /// Automatic NFT distribution computed at epoch creation.
    nft_payouts: HashMap<u64, Vec<(AccountId, PezAmount)>>,
    ledger: ClaimLedger,
}

impl RewardEngine {
    pub fn new(params: ChainParams) -> Self {
        Self {
            params,
            epochs: BTreeMap::new(),
            snapshots: HashMap::new(),
            eligible_totals: HashMap::new(),
            nft_payouts: HashMap::new(),
            ledger: ClaimLedger::new(),
        }
    }

    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    /// Create the next epoch and fix its pool split.
    ///
    /// Epoch ids are sequential from 1; an epoch may not start before the
    /// previous epoch's Active phase has ended. The 10% NFT allocation is
    /// distributed evenly across the holder set here — automatically, with
    /// no claim action — and the per-holder payouts are recorded.
    pub fn create_epoch(
        &mut self,
        id: u64,
        start_block: BlockHeight,
        pool: PezAmount,
        nft_holders: &[AccountId],
    ) -> Result<&Epoch, RewardError> {
        let expected = self.epochs.keys().next_back().map_or(1, |last| last + 1);
        if id != expected {
            return Err(RewardError::NonSequentialEpoch {
                expected,
                actual: id,
            });
        }
        if let Some(prev) = self.epochs.values().next_back() {
            let minimum = prev.active_end();
            if start_block < minimum {
                return Err(RewardError::EpochStartsTooEarly {
                    minimum: minimum.as_u64(),
                    actual: start_block.as_u64(),
                });
            }
        }
        if nft_holders.len() as u128 != self.params.nft_holder_count {
            return Err(RewardError::NftHolderCountMismatch {
                expected: self.params.nft_holder_count,
                actual: nft_holders.len(),
            });
        }

        let epoch = Epoch::create(id, start_block, pool, &self.params)?;
        let payouts: Vec<(AccountId, PezAmount)> = nft_holders
            .iter()
            .map(|h| (h.clone(), epoch.nft_per_holder))
            .collect();

        info!(
            epoch = id,
            start = start_block.as_u64(),
            pool = pool.raw(),
            trust_pool = epoch.trust_pool.raw(),
            nft_per_holder = epoch.nft_per_holder.raw(),
            "epoch created"
        );

        self.nft_payouts.insert(id, payouts);
        self.snapshots.insert(id, BTreeMap::new());
        self.eligible_totals.insert(id, 0);
        self.epochs.insert(id, epoch);
        Ok(&self.epochs[&id])
    }

    pub fn epoch(&self, id: u64) -> Option<&Epoch> {
        self.epochs.get(&id)
    }

    /// Derive an epoch's phase at the given block. Idempotent, mutates
    /// nothing.
    pub fn phase(&self, id: u64, current_block: BlockHeight) -> Result<EpochPhase, RewardError> {
        self.epochs
            .get(&id)
            .map(|e| e.phase(current_block))
            .ok_or(RewardError::UnknownEpoch(id))
    }

    /// Record a participant's composite trust score for an epoch.
    ///
    /// Allowed only while the epoch is Active; a snapshot is immutable once
    /// recorded. Ineligible scores are recorded too (they show in the
    /// participant count) but do not join the eligible total.
    pub fn record_snapshot(
        &mut self,
        epoch_id: u64,
        participant: AccountId,
        score: TrustScore,
        current_block: BlockHeight,
    ) -> Result<(), RewardError> {
        let epoch = self
            .epochs
            .get(&epoch_id)
            .ok_or(RewardError::UnknownEpoch(epoch_id))?;
        if epoch.phase(current_block) != EpochPhase::Active {
            return Err(RewardError::SnapshotWindowClosed);
        }

        let snaps = self
            .snapshots
            .get_mut(&epoch_id)
            .ok_or(RewardError::UnknownEpoch(epoch_id))?;
        if snaps.contains_key(&participant) {
            return Err(RewardError::SnapshotAlreadyRecorded);
        }

        if score.is_reward_eligible() {
            let total = self.eligible_totals.entry(epoch_id).or_insert(0);
            *total = total
                .checked_add(score.value() as u128)
                .ok_or(RewardError::Overflow)?;
        }
        debug!(
            epoch = epoch_id,
            participant = %participant,
            score = score.value(),
            "trust score snapshot recorded"
        );
        snaps.insert(participant, score);
        Ok(())
    }

    pub fn snapshot(&self, epoch_id: u64, participant: &AccountId) -> Option<TrustScore> {
        self.snapshots.get(&epoch_id)?.get(participant).copied()
    }

    /// Sum of eligible snapshot scores for an epoch.
    pub fn eligible_total(&self, epoch_id: u64) -> u128 {
        self.eligible_totals.get(&epoch_id).copied().unwrap_or(0)
    }

    /// Claim a participant's trust-pool reward.
    ///
    /// Payout is `floor(score * trust_pool / total_eligible_score)`. Dust
    /// policy: every payout is floored independently and the sub-unit
    /// remainder simply stays in the pool unclaimed, so the sum of all
    /// payouts can never exceed the trust pool.
    ///
    /// This is the one side-effecting operation in the engine. The ledger's
    /// per-key atomic entry guarantees at most one success per
    /// (epoch, participant) no matter how many threads race; a failed call
    /// leaves the ledger unchanged.
    pub fn claim(
        &self,
        epoch_id: u64,
        participant: &AccountId,
        current_block: BlockHeight,
    ) -> Result<PezAmount, RewardError> {
        let epoch = self
            .epochs
            .get(&epoch_id)
            .ok_or(RewardError::UnknownEpoch(epoch_id))?;
        if epoch.phase(current_block) != EpochPhase::ClaimPeriod {
            return Err(RewardError::EpochNotInClaimPeriod);
        }

        let score = self
            .snapshot(epoch_id, participant)
            .ok_or(RewardError::NotEligible)?;
        if !score.is_reward_eligible() {
            return Err(RewardError::NotEligible);
        }

        // total > 0: this participant's eligible score is part of it.
        let total = self.eligible_total(epoch_id);
        let amount = PezAmount::new(
            (score.value() as u128)
                .checked_mul(epoch.trust_pool.raw())
                .ok_or(RewardError::Overflow)?
                / total,
        );

        self.ledger.try_claim(epoch_id, participant.clone(), amount)?;
        debug!(
            epoch = epoch_id,
            participant = %participant,
            amount = amount.raw(),
            "reward claimed"
        );
        Ok(amount)
    }

    /// The recorded claim for a participant, if any.
    pub fn claimed(&self, epoch_id: u64, participant: &AccountId) -> Option<ClaimRecord> {
        self.ledger.get(epoch_id, participant)
    }

    /// Total trust-pool PEZ paid out for an epoch so far.
    pub fn total_paid(&self, epoch_id: u64) -> PezAmount {
        self.ledger.total_paid(epoch_id)
    }

    /// The automatic NFT payout list fixed at epoch creation.
    pub fn nft_payouts(&self, epoch_id: u64) -> Option<&[(AccountId, PezAmount)]> {
        self.nft_payouts.get(&epoch_id).map(|v| v.as_slice())
    }

    /// Bookkeeping summary for an epoch's pools.
    pub fn summary(&self, epoch_id: u64) -> Result<EpochRewardSummary, RewardError> {
        let epoch = self
            .epochs
            .get(&epoch_id)
            .ok_or(RewardError::UnknownEpoch(epoch_id))?;
        let total = self.eligible_total(epoch_id);
        let participants = self.snapshots.get(&epoch_id).map_or(0, |s| s.len());
        Ok(EpochRewardSummary {
            trust_pool: epoch.trust_pool,
            nft_allocation: epoch.nft_allocation,
            total_trust_score: total,
            participants_count: participants,
            reward_per_point: if total == 0 {
                0
            } else {
                epoch.trust_pool.raw() / total
            },
            claim_deadline: epoch.claim_deadline(),
        })
    }
}
