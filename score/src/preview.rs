//! Floating-point preview math for display layers.
//!
//! This mirrors the live calculator widget: IEEE floats, cosmetic only.
//! Nothing here may feed a claim or snapshot — the canonical path is the
//! integer arithmetic in [`crate::staking`] and [`crate::trust`].

/// Live-preview trust score from raw slider inputs.
pub fn preview_trust_score(
    staked_hez: f64,
    months_staked: f64,
    referral_count: u32,
    education: f64,
    role: f64,
) -> f64 {
    let tier: f64 = if staked_hez <= 100.0 {
        20.0
    } else if staked_hez <= 250.0 {
        30.0
    } else if staked_hez <= 750.0 {
        40.0
    } else {
        50.0
    };
    let mult = if months_staked < 1.0 {
        1.0
    } else if months_staked < 3.0 {
        1.2
    } else if months_staked < 6.0 {
        1.4
    } else if months_staked < 12.0 {
        1.7
    } else {
        2.0
    };
    let staking = (tier * mult).min(100.0);
    let referral = crate::referral::referral_score(referral_count).value() as f64;
    let weighted = staking * 100.0 + referral * 300.0 + education * 300.0 + role * 300.0;
    (staking * weighted / 1000.0).round()
}

/// Human-readable rating label for a final score.
pub fn score_rating(score: u64) -> &'static str {
    match score {
        250.. => "Legendary",
        200.. => "Excellent",
        150.. => "Very Good",
        100.. => "Good",
        70.. => "Average",
        40.. => "Fair",
        20.. => "Low",
        _ => "Very Low",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staking::staking_component;
    use crate::trust::{compute_trust_score, EducationScore, RoleScore};
    use pezkuwi_types::HezAmount;

    #[test]
    fn preview_tracks_canonical_on_reference_inputs() {
        let preview = preview_trust_score(100.0, 0.0, 5, 30.0, 40.0);
        let canonical = compute_trust_score(
            staking_component(HezAmount::from_whole(100), 0, true),
            crate::referral::referral_score(5),
            EducationScore::new(30).unwrap(),
            RoleScore::new(40).unwrap(),
        );
        assert_eq!(preview as u64, canonical.value());
    }

    #[test]
    fn rating_labels() {
        assert_eq!(score_rating(0), "Very Low");
        assert_eq!(score_rating(99), "Average");
        assert_eq!(score_rating(100), "Good");
        assert_eq!(score_rating(580), "Legendary");
    }
}
