//! Compound interest with arbitrary intra-year compounding frequency.
//!
//! The same overflow policy as the numeric primitives applies here: a growth
//! factor past the threshold is surfaced as `NumericalOverflow` rather than
//! propagating an infinite or saturated value.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::numeric::{growth_factor, GrowthFactor, OVERFLOW_THRESHOLD};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};
use crate::FinPlanResult;

const HUNDRED: Decimal = dec!(100);

/// Compounding parameters. `years` may be fractional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: Money,
    /// Nominal annual rate as a percentage (5 = 5%).
    pub annual_rate_percent: Percent,
    pub years: Years,
    /// Compounding periods per year (12 = monthly, 365 = daily).
    pub compound_frequency_per_year: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub final_amount: Money,
    pub interest_earned: Money,
    /// True annualized growth rate once intra-year compounding is accounted
    /// for, as a percentage.
    pub effective_annual_rate_percent: Percent,
    pub principal: Money,
}

/// Compute final amount and effective annual rate for compound interest.
pub fn compound_interest(
    input: &CompoundInterestInput,
) -> FinPlanResult<ComputationOutput<CompoundInterestResult>> {
    let start = Instant::now();

    validate(input)?;
    let rate = input.annual_rate_percent / HUNDRED;
    let frequency = Decimal::from(input.compound_frequency_per_year);
    let base = Decimal::ONE + rate / frequency;

    // f*y may be fractional, so powd rather than the iterative primitive
    let factor = base
        .checked_powd(frequency * input.years)
        .ok_or_else(|| FinPlanError::NumericalOverflow {
            context: "compound growth factor".into(),
        })?;
    if factor > OVERFLOW_THRESHOLD {
        return Err(FinPlanError::NumericalOverflow {
            context: "compound growth factor".into(),
        });
    }

    let final_amount = input.principal * factor;

    // One year of compounding at the per-period rate gives the effective rate
    let effective_annual_rate_percent =
        match growth_factor(rate / frequency, input.compound_frequency_per_year) {
            GrowthFactor::Exact(annual) => (annual - Decimal::ONE) * HUNDRED,
            GrowthFactor::Overflowed => {
                return Err(FinPlanError::NumericalOverflow {
                    context: "effective annual rate".into(),
                })
            }
        };

    let result = CompoundInterestResult {
        final_amount,
        interest_earned: final_amount - input.principal,
        effective_annual_rate_percent,
        principal: input.principal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Compound interest with variable compounding frequency",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "years": input.years.to_string(),
            "compound_frequency_per_year": input.compound_frequency_per_year,
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}

fn validate(input: &CompoundInterestInput) -> FinPlanResult<()> {
    if input.principal < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "principal".into(),
            reason: "principal cannot be negative".into(),
        });
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "interest rate cannot be negative".into(),
        });
    }
    if input.years <= Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "years".into(),
            reason: "years must be > 0".into(),
        });
    }
    if input.compound_frequency_per_year == 0 {
        return Err(FinPlanError::InvalidInput {
            field: "compound_frequency_per_year".into(),
            reason: "compounding frequency must be > 0".into(),
        });
    }
    Ok(())
}
