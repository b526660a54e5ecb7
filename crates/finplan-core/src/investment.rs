//! Investment growth with monthly compounding and end-of-month contributions
//! (ordinary annuity). Reused by the retirement engine and invoked per year
//! index by callers building growth curves, so each call stays O(months) with
//! no allocation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::loan::MONTHS_PER_YEAR;
use crate::numeric::{growth_factor, periodic_rate, GrowthFactor};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};
use crate::FinPlanResult;

const HUNDRED: Decimal = dec!(100);
const TWELVE: Decimal = dec!(12);

/// Lump sum plus recurring-contribution growth parameters.
/// `years` may be fractional or zero (zero yields no growth).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub initial: Money,
    pub monthly_contribution: Money,
    /// Expected annual return as a percentage (7 = 7%).
    pub annual_return_percent: Percent,
    pub years: Years,
}

/// Projected value and earnings split.
///
/// Invariant: `final_value == total_contributions + total_earnings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentResult {
    pub final_value: Money,
    pub total_contributions: Money,
    pub total_earnings: Money,
    /// Earnings over contributions, as a percentage. 0 when nothing was
    /// contributed (safe default, not an error).
    pub roi_percent: Percent,
}

/// Project the future value of an initial balance plus monthly contributions.
pub fn project_investment(
    input: &InvestmentInput,
) -> FinPlanResult<ComputationOutput<InvestmentResult>> {
    let start = Instant::now();

    let result = growth_breakdown(input)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Future value with monthly compounding and ordinary-annuity contributions",
        &serde_json::json!({
            "initial": input.initial.to_string(),
            "monthly_contribution": input.monthly_contribution.to_string(),
            "annual_return_percent": input.annual_return_percent.to_string(),
            "years": input.years.to_string(),
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}

/// Growth computation without the output envelope. Shared with the
/// retirement engine.
pub(crate) fn growth_breakdown(input: &InvestmentInput) -> FinPlanResult<InvestmentResult> {
    validate(input)?;

    // Fractional years are rounded to the nearest whole month.
    let num_months = (input.years * TWELVE)
        .round()
        .to_u32()
        .ok_or_else(|| FinPlanError::InvalidInput {
            field: "years".into(),
            reason: "projection does not fit in a whole number of months".into(),
        })?;
    let n = Decimal::from(num_months);
    let monthly_rate = periodic_rate(input.annual_return_percent, MONTHS_PER_YEAR)?;

    let (fv_initial, fv_contributions) = if monthly_rate.is_zero() {
        // Pure linear accumulation, no growth
        (input.initial, input.monthly_contribution * n)
    } else {
        match growth_factor(monthly_rate, num_months) {
            GrowthFactor::Exact(gf) => {
                let fv_contributions = if num_months > 0 {
                    input.monthly_contribution * (gf - Decimal::ONE) / monthly_rate
                } else {
                    Decimal::ZERO
                };
                (input.initial * gf, fv_contributions)
            }
            GrowthFactor::Overflowed => {
                return Err(FinPlanError::NumericalOverflow {
                    context: "investment growth factor".into(),
                })
            }
        }
    };

    let final_value = fv_initial + fv_contributions;
    let total_contributions = input.initial + input.monthly_contribution * n;
    let total_earnings = final_value - total_contributions;
    let roi_percent = if total_contributions.is_zero() {
        Decimal::ZERO
    } else {
        total_earnings / total_contributions * HUNDRED
    };

    Ok(InvestmentResult {
        final_value,
        total_contributions,
        total_earnings,
        roi_percent,
    })
}

fn validate(input: &InvestmentInput) -> FinPlanResult<()> {
    if input.initial < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "initial".into(),
            reason: "initial investment cannot be negative".into(),
        });
    }
    if input.monthly_contribution < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "monthly_contribution".into(),
            reason: "monthly contribution cannot be negative".into(),
        });
    }
    if input.annual_return_percent < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "annual_return_percent".into(),
            reason: "annual return cannot be negative".into(),
        });
    }
    if input.years < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "years".into(),
            reason: "years cannot be negative".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(initial: Decimal, monthly: Decimal, rate: Decimal, years: Decimal) -> InvestmentInput {
        InvestmentInput {
            initial,
            monthly_contribution: monthly,
            annual_return_percent: rate,
            years,
        }
    }

    #[test]
    fn test_zero_years_yields_no_growth() {
        let result = project_investment(&input(dec!(10_000), dec!(500), dec!(7), dec!(0))).unwrap();
        let r = &result.result;
        assert_eq!(r.final_value, dec!(10_000));
        assert_eq!(r.total_contributions, dec!(10_000));
        assert_eq!(r.total_earnings, dec!(0));
    }

    #[test]
    fn test_zero_rate_is_linear_accumulation() {
        let result = project_investment(&input(dec!(1_000), dec!(100), dec!(0), dec!(2))).unwrap();
        let r = &result.result;
        assert_eq!(r.final_value, dec!(1_000) + dec!(100) * dec!(24));
        assert_eq!(r.total_earnings, dec!(0));
        assert_eq!(r.roi_percent, dec!(0));
    }

    #[test]
    fn test_value_split_invariant() {
        let result =
            project_investment(&input(dec!(25_000), dec!(750), dec!(6.5), dec!(18))).unwrap();
        let r = &result.result;
        assert_eq!(r.final_value, r.total_contributions + r.total_earnings);
        assert!(r.total_earnings > Decimal::ZERO);
    }

    #[test]
    fn test_lump_sum_matches_growth_factor() {
        // No contributions: final value is just initial * (1 + r/12)^months
        let result = project_investment(&input(dec!(50_000), dec!(0), dec!(8), dec!(10))).unwrap();
        let monthly = dec!(8) / dec!(100) / dec!(12);
        let gf = match crate::numeric::growth_factor(monthly, 120) {
            crate::numeric::GrowthFactor::Exact(v) => v,
            crate::numeric::GrowthFactor::Overflowed => panic!("unexpected overflow"),
        };
        assert_eq!(result.result.final_value, dec!(50_000) * gf);
    }

    #[test]
    fn test_monotone_in_years() {
        let mut previous = Decimal::ZERO;
        for years in 0..=30 {
            let result = project_investment(&input(
                dec!(5_000),
                dec!(200),
                dec!(6),
                Decimal::from(years),
            ))
            .unwrap();
            assert!(
                result.result.final_value >= previous,
                "growth regressed at year {}",
                years
            );
            previous = result.result.final_value;
        }
    }

    #[test]
    fn test_roi_guard_with_zero_contributions() {
        let result = project_investment(&input(dec!(0), dec!(0), dec!(7), dec!(10))).unwrap();
        let r = &result.result;
        assert_eq!(r.total_contributions, dec!(0));
        assert_eq!(r.roi_percent, dec!(0));
    }

    #[test]
    fn test_fractional_years_round_to_nearest_month() {
        // 1.5 years -> 18 months of contributions
        let result = project_investment(&input(dec!(0), dec!(100), dec!(0), dec!(1.5))).unwrap();
        assert_eq!(result.result.total_contributions, dec!(1_800));
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(project_investment(&input(dec!(-1), dec!(0), dec!(5), dec!(1))).is_err());
        assert!(project_investment(&input(dec!(0), dec!(-1), dec!(5), dec!(1))).is_err());
        assert!(project_investment(&input(dec!(0), dec!(0), dec!(-5), dec!(1))).is_err());
        assert!(project_investment(&input(dec!(0), dec!(0), dec!(5), dec!(-1))).is_err());
    }
}
