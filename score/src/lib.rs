//! Trust score engine — the deterministic composite scoring formulas.
//!
//! A participant's trust score combines four components:
//! - staking: amount tier (20–50) scaled by a duration multiplier, capped at 100
//! - referral: 0–50 from referral count
//! - education (perwerde): 0–100, supplied externally
//! - role (tiki): 0–100, supplied externally
//!
//! `final = staking * (staking*100 + referral*300 + education*300 + role*300) / 1000`
//!
//! All canonical arithmetic is integer fixed-point; floating point exists
//! only in the non-authoritative [`preview`] module.

pub mod error;
pub mod participant;
pub mod preview;
pub mod referral;
pub mod staking;
pub mod trust;

pub use error::ScoreError;
pub use participant::Participant;
pub use referral::{referral_score, ReferralComponent};
pub use staking::{amount_score, months_staked, staking_component, DurationMultiplier, StakingComponent};
pub use trust::{compute_trust_score, CompositeTrustScore, EducationScore, RoleScore, TrustScore};
