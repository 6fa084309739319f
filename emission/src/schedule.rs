//! Monthly release computation under the 48-month halving schedule.

use pezkuwi_types::ChainParams;
use serde::{Deserialize, Serialize};

/// The two independently emitted token classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenClass {
    Pez,
    Hez,
}

/// Emission schedule for both token classes.
///
/// All values are deterministic integers; the halving is a right shift, so
/// once `2^period` exceeds the base the release is exactly 0 and stays 0 —
/// no wrap, no fractional sub-unit behavior.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmissionSchedule {
    /// Monthly PEZ release before the first halving, raw units.
    pez_base_monthly: u128,
    /// Monthly HEZ release before the first halving, raw units.
    hez_base_monthly: u128,
    /// Months between halvings.
    halving_period_months: u64,
}

impl EmissionSchedule {
    pub fn new(params: &ChainParams) -> Self {
        Self {
            pez_base_monthly: params.pez_base_monthly.raw(),
            hez_base_monthly: params.hez_base_monthly.raw(),
            halving_period_months: params.halving_period_months,
        }
    }

    fn base(&self, class: TokenClass) -> u128 {
        match class {
            TokenClass::Pez => self.pez_base_monthly,
            TokenClass::Hez => self.hez_base_monthly,
        }
    }

    /// Which halving period a month index falls in (0 for the first 48 months).
    pub fn halving_period(&self, months_since_genesis: u64) -> u64 {
        months_since_genesis / self.halving_period_months.max(1)
    }

    /// Raw units released in the given month.
    ///
    /// `base / 2^period`, integer floor. Defined for every month index; for
    /// very large indices the shift exhausts the base and the release is 0.
    pub fn monthly_release(&self, class: TokenClass, months_since_genesis: u64) -> u128 {
        let period = self.halving_period(months_since_genesis);
        let base = self.base(class);
        if period >= u128::BITS as u64 {
            return 0;
        }
        base >> period
    }

    /// Cumulative raw units released in months `0..months_since_genesis`.
    ///
    /// Exclusive of the month at the index itself, so
    /// `total_released_through(c, 0) == 0`.
    pub fn total_released_through(&self, class: TokenClass, months_since_genesis: u64) -> u128 {
        let halving = self.halving_period_months.max(1);
        let mut total: u128 = 0;
        let mut month = 0u64;
        while month < months_since_genesis {
            let period_end = ((month / halving) + 1) * halving;
            let span = period_end.min(months_since_genesis) - month;
            let release = self.monthly_release(class, month);
            if release == 0 {
                break;
            }
            total = total.saturating_add(release.saturating_mul(span as u128));
            month = period_end;
        }
        total
    }
}

impl Default for EmissionSchedule {
    fn default() -> Self {
        Self::new(&ChainParams::pezkuwi_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pezkuwi_types::PEZ_UNIT;

    fn schedule() -> EmissionSchedule {
        EmissionSchedule::default()
    }

    #[test]
    fn first_period_releases_the_base() {
        let s = schedule();
        let base = 74_218_750 * PEZ_UNIT;
        assert_eq!(s.monthly_release(TokenClass::Pez, 0), base);
        assert_eq!(s.monthly_release(TokenClass::Pez, 47), base);
    }

    #[test]
    fn halves_exactly_at_48_month_boundaries() {
        let s = schedule();
        let base = s.monthly_release(TokenClass::Pez, 0);
        for k in 1..=6u32 {
            let at_boundary = s.monthly_release(TokenClass::Pez, 48 * k as u64);
            assert_eq!(at_boundary, base >> k, "halving {} mismatch", k);
            let just_before = s.monthly_release(TokenClass::Pez, 48 * k as u64 - 1);
            assert_eq!(just_before, base >> (k - 1));
        }
    }

    #[test]
    fn classes_are_independent() {
        let s = schedule();
        assert_eq!(
            s.monthly_release(TokenClass::Hez, 0),
            s.monthly_release(TokenClass::Pez, 0) / 2
        );
        // Asking for one class at a deep month does not perturb the other.
        let _ = s.monthly_release(TokenClass::Pez, 48 * 200);
        assert_eq!(s.monthly_release(TokenClass::Hez, 0), 37_109_375 * PEZ_UNIT);
    }

    #[test]
    fn converges_to_zero_without_wrapping() {
        let s = schedule();
        // Enough halvings to exhaust a u128 base.
        assert_eq!(s.monthly_release(TokenClass::Pez, 48 * 130), 0);
        assert_eq!(s.monthly_release(TokenClass::Pez, u64::MAX), 0);
    }

    #[test]
    fn cumulative_release_sums_whole_periods() {
        let s = schedule();
        let base = s.monthly_release(TokenClass::Pez, 0);
        assert_eq!(s.total_released_through(TokenClass::Pez, 0), 0);
        assert_eq!(s.total_released_through(TokenClass::Pez, 1), base);
        assert_eq!(s.total_released_through(TokenClass::Pez, 48), base * 48);
        // 48 months at base + 24 months at base/2
        assert_eq!(
            s.total_released_through(TokenClass::Pez, 72),
            base * 48 + (base / 2) * 24
        );
    }

    #[test]
    fn release_is_non_increasing_month_over_month() {
        let s = schedule();
        let mut prev = s.monthly_release(TokenClass::Hez, 0);
        for month in 1..400u64 {
            let r = s.monthly_release(TokenClass::Hez, month);
            assert!(r <= prev, "release increased at month {}", month);
            prev = r;
        }
    }
}
