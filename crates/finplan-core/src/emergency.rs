//! Emergency fund sizing and timeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FinPlanResult;

fn default_target_months() -> Decimal {
    Decimal::from(6)
}

/// Emergency fund parameters. Target defaults to six months of expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundInput {
    pub monthly_expenses: Money,
    #[serde(default = "default_target_months")]
    pub target_months: Decimal,
    #[serde(default)]
    pub current_savings: Money,
    #[serde(default)]
    pub monthly_savings: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundResult {
    pub target_amount: Money,
    pub current_savings: Money,
    pub amount_needed: Money,
    /// 0 when the target is already met or nothing is being saved
    /// (safe default, not an error).
    pub months_to_goal: Decimal,
}

/// Size an emergency fund and project the months to reach it.
pub fn plan_emergency_fund(
    input: &EmergencyFundInput,
) -> FinPlanResult<ComputationOutput<EmergencyFundResult>> {
    let start = Instant::now();

    validate(input)?;

    let target_amount = input.monthly_expenses * input.target_months;
    let amount_needed = (target_amount - input.current_savings).max(Decimal::ZERO);
    let months_to_goal = if input.monthly_savings > Decimal::ZERO && amount_needed > Decimal::ZERO
    {
        amount_needed / input.monthly_savings
    } else {
        Decimal::ZERO
    };

    let result = EmergencyFundResult {
        target_amount,
        current_savings: input.current_savings,
        amount_needed,
        months_to_goal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Emergency fund target (months-of-expenses rule)",
        &serde_json::json!({
            "monthly_expenses": input.monthly_expenses.to_string(),
            "target_months": input.target_months.to_string(),
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}

fn validate(input: &EmergencyFundInput) -> FinPlanResult<()> {
    if input.monthly_expenses < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "monthly_expenses".into(),
            reason: "monthly expenses cannot be negative".into(),
        });
    }
    if input.target_months < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "target_months".into(),
            reason: "target months cannot be negative".into(),
        });
    }
    if input.current_savings < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "current_savings".into(),
            reason: "current savings cannot be negative".into(),
        });
    }
    if input.monthly_savings < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "monthly_savings".into(),
            reason: "monthly savings cannot be negative".into(),
        });
    }
    Ok(())
}
