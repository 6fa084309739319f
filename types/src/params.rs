//! Deployment parameters — the block-time and reward constants every engine
//! instance is configured with.
//!
//! Defaults match the Pezkuwi mainnet values. A test network may shorten the
//! epoch windows, but within one deployment these never change mid-epoch.

use crate::amount::{HezAmount, PezAmount};
use serde::{Deserialize, Serialize};

/// All deployment parameters consumed by the scoring and reward engines.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainParams {
    // ── Block time ───────────────────────────────────────────────────────
    /// Blocks per staking month (~30 days at 10 blocks/minute).
    pub blocks_per_month: u64,

    // ── Epochs ───────────────────────────────────────────────────────────
    /// Length of an epoch's Active phase in blocks (~30 days).
    pub epoch_active_blocks: u64,

    /// Length of an epoch's ClaimPeriod phase in blocks (~7 days).
    pub epoch_claim_blocks: u64,

    // ── Reward pool split ────────────────────────────────────────────────
    /// Percent of each epoch pool auto-distributed to parliamentary NFT
    /// holders; the remainder is the trust-score pool.
    pub nft_pool_percent: u128,

    /// Number of parliamentary NFT holders sharing the NFT allocation.
    pub nft_holder_count: u128,

    // ── Emission ─────────────────────────────────────────────────────────
    /// Months between synthetic halvings.
    pub halving_period_months: u64,

    /// Monthly PEZ release before the first halving.
    pub pez_base_monthly: PezAmount,

    /// Monthly HEZ release before the first halving.
    pub hez_base_monthly: HezAmount,
}

impl ChainParams {
    /// Pezkuwi mainnet defaults — the intended live configuration.
    pub fn pezkuwi_defaults() -> Self {
        Self {
            blocks_per_month: 432_000, // 30 days * 24h * 60min * 10 blocks
            epoch_active_blocks: 432_000,
            epoch_claim_blocks: 100_800, // 7 days
            nft_pool_percent: 10,
            nft_holder_count: 201,
            halving_period_months: 48,
            pez_base_monthly: PezAmount::from_whole(74_218_750),
            hez_base_monthly: HezAmount::from_whole(37_109_375),
        }
    }
}

/// Default is the Pezkuwi mainnet configuration.
impl Default for ChainParams {
    fn default() -> Self {
        Self::pezkuwi_defaults()
    }
}
