//! Household financial ratios: debt-to-income, savings rate, expense ratio.
//! Zero income yields zero ratios by design rather than an error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinPlanResult;

const HUNDRED: Decimal = dec!(100);

/// Monthly household cash flow figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioInput {
    pub income: Money,
    pub expenses: Money,
    pub debt_payments: Money,
    pub savings: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioResult {
    pub debt_to_income_percent: Percent,
    pub savings_rate_percent: Percent,
    pub expense_ratio_percent: Percent,
    /// Income left after expenses and debt payments.
    pub available_income: Money,
    pub total_outflow: Money,
}

/// Compute the standard household financial ratios.
pub fn financial_ratios(input: &RatioInput) -> FinPlanResult<ComputationOutput<RatioResult>> {
    let start = Instant::now();

    validate(input)?;

    let pct_of_income = |amount: Decimal| {
        if input.income > Decimal::ZERO {
            amount / input.income * HUNDRED
        } else {
            Decimal::ZERO
        }
    };

    let result = RatioResult {
        debt_to_income_percent: pct_of_income(input.debt_payments),
        savings_rate_percent: pct_of_income(input.savings),
        expense_ratio_percent: pct_of_income(input.expenses),
        available_income: input.income - input.expenses - input.debt_payments,
        total_outflow: input.expenses + input.debt_payments,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Household financial ratios (share-of-income)",
        &serde_json::json!({
            "income": input.income.to_string(),
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}

fn validate(input: &RatioInput) -> FinPlanResult<()> {
    for (field, value) in [
        ("income", input.income),
        ("expenses", input.expenses),
        ("debt_payments", input.debt_payments),
        ("savings", input.savings),
    ] {
        if value < Decimal::ZERO {
            return Err(FinPlanError::InvalidInput {
                field: field.into(),
                reason: format!("{field} cannot be negative"),
            });
        }
    }
    Ok(())
}
