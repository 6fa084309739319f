//! Referral score — piecewise-linear in referral count, hard-capped at 50.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the referral component.
pub const REFERRAL_COMPONENT_MAX: u64 = 50;

/// The referral component of a trust score, 0..=50.
///
/// Only constructible through [`referral_score`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReferralComponent(u64);

impl ReferralComponent {
    pub const ZERO: Self = Self(0);

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReferralComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score a referral count.
///
/// 0 → 0; 1..=5 → count×4; 6..=20 → 20 + (count−5)×2; 21+ → 50.
/// Monotonic non-decreasing, never above 50.
pub fn referral_score(count: u32) -> ReferralComponent {
    let count = count as u64;
    let score = if count == 0 {
        0
    } else if count <= 5 {
        count * 4
    } else if count <= 20 {
        20 + (count - 5) * 2
    } else {
        REFERRAL_COMPONENT_MAX
    };
    ReferralComponent(score)
}
