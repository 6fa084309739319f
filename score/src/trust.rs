//! Composite trust score aggregation.
//!
//! The staking component is multiplied twice — once directly and once inside
//! the weighted sum — making the final score super-linear in staking
//! commitment. That is protocol policy, not an accident; do not "simplify"
//! this into a weighted average or downstream reward allocations diverge
//! from the chain's canonical computation.

use crate::error::ScoreError;
use crate::referral::ReferralComponent;
use crate::staking::StakingComponent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Education ("perwerde") score, 0..=100, supplied by the education pallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EducationScore(u64);

impl EducationScore {
    pub const MAX: u64 = 100;
    pub const ZERO: Self = Self(0);

    /// Validate an externally supplied score. Out-of-range values are
    /// rejected, never clamped — clamping would mask a caller bug.
    pub fn new(value: u64) -> Result<Self, ScoreError> {
        if value > Self::MAX {
            return Err(ScoreError::ScoreOutOfRange {
                field: "education",
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Role ("tiki") score, 0..=100, derived from held role badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleScore(u64);

impl RoleScore {
    pub const MAX: u64 = 100;
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Result<Self, ScoreError> {
        if value > Self::MAX {
            return Err(ScoreError::ScoreOutOfRange {
                field: "role",
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A final composite trust score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrustScore(u64);

impl TrustScore {
    /// Scores at or below this are ineligible for the epoch trust pool.
    /// A protocol constant, not a per-epoch parameter.
    pub const ELIGIBILITY_THRESHOLD: u64 = 100;

    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Reward eligibility: strictly above the threshold.
    pub fn is_reward_eligible(&self) -> bool {
        self.0 > Self::ELIGIBILITY_THRESHOLD
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weighted-sum trust aggregation over already-validated components.
///
/// ```text
/// weighted = staking*100 + referral*300 + education*300 + role*300
/// final    = staking * weighted / 1000     (truncating)
/// ```
///
/// With components in domain (staking ≤ 100, referral ≤ 50, others ≤ 100)
/// the intermediate tops out at 100 * 85_000, far inside u64, so the
/// multiplication step cannot wrap.
pub fn compute_trust_score(
    staking: StakingComponent,
    referral: ReferralComponent,
    education: EducationScore,
    role: RoleScore,
) -> TrustScore {
    let s = staking.value();
    let weighted =
        s * 100 + referral.value() * 300 + education.value() * 300 + role.value() * 300;
    TrustScore(s * weighted / 1000)
}

/// A full component breakdown plus the final score.
///
/// Pure output, never stored state: recomputing from an identical
/// participant snapshot always yields an identical value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeTrustScore {
    pub staking: StakingComponent,
    pub referral: ReferralComponent,
    pub education: EducationScore,
    pub role: RoleScore,
    pub final_score: TrustScore,
}

impl CompositeTrustScore {
    pub fn compute(
        staking: StakingComponent,
        referral: ReferralComponent,
        education: EducationScore,
        role: RoleScore,
    ) -> Self {
        Self {
            staking,
            referral,
            education,
            role,
            final_score: compute_trust_score(staking, referral, education, role),
        }
    }
}
