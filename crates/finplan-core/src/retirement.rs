//! Retirement sufficiency: required nest egg under the 4% withdrawal rule
//! versus the nest egg projected by the investment growth engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::investment::{growth_breakdown, InvestmentInput};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::FinPlanResult;

/// Fixed annual withdrawal rate assumption (the "4% rule").
pub const WITHDRAWAL_RATE: Rate = dec!(0.04);

/// Assumed years spent in retirement. Documented in the assumptions envelope;
/// the 4%-rule required-savings figure is horizon-independent, a known
/// simplification of real annuity depletion.
pub const RETIREMENT_HORIZON_YEARS: u32 = 25;

const HUNDRED: Decimal = dec!(100);

/// Retirement planning parameters. `income_replacement_percent` may exceed
/// 100 for callers planning a raise in retirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_income: Money,
    pub current_savings: Money,
    pub income_replacement_percent: Percent,
    pub monthly_contribution: Money,
    pub expected_return_percent: Percent,
}

/// Sufficiency projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementResult {
    pub required_savings: Money,
    pub projected_savings: Money,
    pub annual_retirement_income: Money,
    pub years_to_retirement: u32,
    /// required - projected. Positive = shortfall, negative = surplus.
    pub savings_gap: Money,
}

/// Project retirement readiness against the 4% withdrawal rule.
pub fn project_retirement(
    input: &RetirementInput,
) -> FinPlanResult<ComputationOutput<RetirementResult>> {
    let start = Instant::now();

    validate(input)?;
    let years_to_retirement = input.retirement_age - input.current_age;

    let annual_retirement_income =
        input.current_income * input.income_replacement_percent / HUNDRED;
    let required_savings = annual_retirement_income / WITHDRAWAL_RATE;

    let growth = growth_breakdown(&InvestmentInput {
        initial: input.current_savings,
        monthly_contribution: input.monthly_contribution,
        annual_return_percent: input.expected_return_percent,
        years: Decimal::from(years_to_retirement),
    })?;
    let projected_savings = growth.final_value;

    let result = RetirementResult {
        required_savings,
        projected_savings,
        annual_retirement_income,
        years_to_retirement,
        savings_gap: required_savings - projected_savings,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Retirement sufficiency (4% withdrawal rule vs projected growth)",
        &serde_json::json!({
            "withdrawal_rate": WITHDRAWAL_RATE.to_string(),
            "retirement_horizon_years": RETIREMENT_HORIZON_YEARS,
            "years_to_retirement": years_to_retirement,
            "income_replacement_percent": input.income_replacement_percent.to_string(),
            "expected_return_percent": input.expected_return_percent.to_string(),
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}

fn validate(input: &RetirementInput) -> FinPlanResult<()> {
    if input.retirement_age <= input.current_age {
        return Err(FinPlanError::InvalidInput {
            field: "retirement_age".into(),
            reason: "retirement age must be greater than current age".into(),
        });
    }
    if input.current_income < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "current_income".into(),
            reason: "income cannot be negative".into(),
        });
    }
    if input.income_replacement_percent < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "income_replacement_percent".into(),
            reason: "replacement percentage cannot be negative".into(),
        });
    }
    // current_savings, monthly_contribution and expected_return_percent are
    // re-validated by the investment engine.
    Ok(())
}
