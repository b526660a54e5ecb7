//! Shared numeric primitives for the calculation engines.
//!
//! Everything here is pure and allocation-free. Growth factors are computed by
//! iterative checked multiplication rather than `powd` so that extreme
//! rate/term combinations surface as [`GrowthFactor::Overflowed`] instead of
//! drifting or panicking mid-multiply.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::FinPlanError;
use crate::types::{Percent, Rate};
use crate::FinPlanResult;

/// Growth factors above this are treated as overflow and the caller must
/// choose a fallback (or fail).
pub const OVERFLOW_THRESHOLD: Decimal = dec!(10_000_000_000);

const HUNDRED: Decimal = dec!(100);

/// Convert a user-facing annual percentage to a per-period decimal rate.
pub fn periodic_rate(annual_rate_percent: Percent, periods_per_year: u32) -> FinPlanResult<Rate> {
    if periods_per_year == 0 {
        return Err(FinPlanError::DivisionByZero {
            context: "periodic rate (zero periods per year)".into(),
        });
    }
    Ok(annual_rate_percent / HUNDRED / Decimal::from(periods_per_year))
}

/// Result of a guarded `(1 + rate)^periods` evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthFactor {
    Exact(Decimal),
    /// The factor exceeded [`OVERFLOW_THRESHOLD`] (or Decimal range).
    Overflowed,
}

/// Compute `(1 + rate)^periods` with overflow detection.
pub fn growth_factor(rate: Rate, periods: u32) -> GrowthFactor {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = match factor.checked_mul(base) {
            Some(f) => f,
            None => return GrowthFactor::Overflowed,
        };
        if factor > OVERFLOW_THRESHOLD {
            return GrowthFactor::Overflowed;
        }
    }
    GrowthFactor::Exact(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_periodic_rate_monthly() {
        // 8.5% annual -> 8.5/100/12 monthly
        let r = periodic_rate(dec!(8.5), 12).unwrap();
        assert_eq!(r, dec!(8.5) / dec!(100) / dec!(12));
    }

    #[test]
    fn test_periodic_rate_zero_periods() {
        assert!(periodic_rate(dec!(5), 0).is_err());
    }

    #[test]
    fn test_growth_factor_exact() {
        // 1.1^3 = 1.331
        assert_eq!(growth_factor(dec!(0.10), 3), GrowthFactor::Exact(dec!(1.331)));
    }

    #[test]
    fn test_growth_factor_zero_periods() {
        assert_eq!(growth_factor(dec!(0.10), 0), GrowthFactor::Exact(Decimal::ONE));
    }

    #[test]
    fn test_growth_factor_overflow() {
        // 2^periods blows through 1e10 well before 1200 periods
        assert_eq!(growth_factor(Decimal::ONE, 1200), GrowthFactor::Overflowed);
    }

    #[test]
    fn test_growth_factor_just_under_threshold() {
        // 10^10 is not strictly above the threshold
        let f = growth_factor(dec!(9), 10);
        assert_eq!(f, GrowthFactor::Exact(dec!(10_000_000_000)));
    }
}
