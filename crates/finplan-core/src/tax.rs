//! Illustrative federal income tax estimate over 2024 marginal brackets.
//! Single and married-filing-jointly schedules only; no deductions, credits,
//! or state/local modeling. Numbers are for illustration, not filing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::FinPlanResult;

const HUNDRED: Decimal = dec!(100);

/// Upper bound of a bracket (None = unbounded top bracket) and its rate.
struct Bracket {
    upper: Option<Decimal>,
    rate: Rate,
}

// 2024 brackets, illustrative
const SINGLE_BRACKETS: [Bracket; 7] = [
    Bracket { upper: Some(dec!(11_000)), rate: dec!(0.10) },
    Bracket { upper: Some(dec!(44_725)), rate: dec!(0.12) },
    Bracket { upper: Some(dec!(95_375)), rate: dec!(0.22) },
    Bracket { upper: Some(dec!(182_050)), rate: dec!(0.24) },
    Bracket { upper: Some(dec!(231_250)), rate: dec!(0.32) },
    Bracket { upper: Some(dec!(578_125)), rate: dec!(0.35) },
    Bracket { upper: None, rate: dec!(0.37) },
];

const MARRIED_BRACKETS: [Bracket; 7] = [
    Bracket { upper: Some(dec!(22_000)), rate: dec!(0.10) },
    Bracket { upper: Some(dec!(89_450)), rate: dec!(0.12) },
    Bracket { upper: Some(dec!(190_750)), rate: dec!(0.22) },
    Bracket { upper: Some(dec!(364_200)), rate: dec!(0.24) },
    Bracket { upper: Some(dec!(462_500)), rate: dec!(0.32) },
    Bracket { upper: Some(dec!(693_750)), rate: dec!(0.35) },
    Bracket { upper: None, rate: dec!(0.37) },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxEstimateInput {
    pub income: Money,
    pub filing_status: FilingStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxEstimateResult {
    pub tax_owed: Money,
    pub effective_rate_percent: Percent,
    pub marginal_rate_percent: Percent,
    pub after_tax_income: Money,
}

/// Estimate federal income tax with progressive marginal brackets.
pub fn estimate_tax(input: &TaxEstimateInput) -> FinPlanResult<ComputationOutput<TaxEstimateResult>> {
    let start = Instant::now();

    if input.income < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "income".into(),
            reason: "income cannot be negative".into(),
        });
    }

    let brackets: &[Bracket] = match input.filing_status {
        FilingStatus::Single => &SINGLE_BRACKETS,
        FilingStatus::MarriedFilingJointly => &MARRIED_BRACKETS,
    };

    let mut tax_owed = Decimal::ZERO;
    let mut marginal_rate = Decimal::ZERO;
    let mut previous_limit = Decimal::ZERO;

    for bracket in brackets {
        if input.income <= previous_limit {
            break;
        }
        let taxable_in_bracket = match bracket.upper {
            Some(upper) => input.income.min(upper) - previous_limit,
            None => input.income - previous_limit,
        };
        tax_owed += taxable_in_bracket * bracket.rate;
        marginal_rate = bracket.rate;
        previous_limit = match bracket.upper {
            Some(upper) => upper,
            None => break,
        };
    }

    let effective_rate_percent = if input.income > Decimal::ZERO {
        tax_owed / input.income * HUNDRED
    } else {
        Decimal::ZERO
    };

    let result = TaxEstimateResult {
        tax_owed,
        effective_rate_percent,
        marginal_rate_percent: marginal_rate * HUNDRED,
        after_tax_income: input.income - tax_owed,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Progressive marginal tax estimate (illustrative 2024 federal brackets)",
        &serde_json::json!({
            "filing_status": input.filing_status,
            "tax_year": 2024,
            "scope": "federal only, no deductions or credits",
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn single(income: Decimal) -> TaxEstimateInput {
        TaxEstimateInput {
            income,
            filing_status: FilingStatus::Single,
        }
    }

    #[test]
    fn test_income_within_first_bracket() {
        let result = estimate_tax(&single(dec!(10_000))).unwrap();
        let r = &result.result;
        assert_eq!(r.tax_owed, dec!(1_000));
        assert_eq!(r.marginal_rate_percent, dec!(10));
        assert_eq!(r.effective_rate_percent, dec!(10));
    }

    #[test]
    fn test_bracket_boundary_is_exact() {
        // Exactly 11_000: all taxed at 10%
        let result = estimate_tax(&single(dec!(11_000))).unwrap();
        assert_eq!(result.result.tax_owed, dec!(1_100));
        assert_eq!(result.result.marginal_rate_percent, dec!(10));
    }

    #[test]
    fn test_income_spanning_two_brackets() {
        // 20_000: 11_000 @ 10% + 9_000 @ 12% = 1_100 + 1_080
        let result = estimate_tax(&single(dec!(20_000))).unwrap();
        let r = &result.result;
        assert_eq!(r.tax_owed, dec!(2_180));
        assert_eq!(r.marginal_rate_percent, dec!(12));
        assert!(r.effective_rate_percent < dec!(12));
    }

    #[test]
    fn test_top_bracket_applies() {
        let result = estimate_tax(&single(dec!(1_000_000))).unwrap();
        assert_eq!(result.result.marginal_rate_percent, dec!(37));
    }

    #[test]
    fn test_married_brackets_are_wider() {
        let s = estimate_tax(&single(dec!(100_000))).unwrap();
        let m = estimate_tax(&TaxEstimateInput {
            income: dec!(100_000),
            filing_status: FilingStatus::MarriedFilingJointly,
        })
        .unwrap();
        assert!(m.result.tax_owed < s.result.tax_owed);
    }

    #[test]
    fn test_zero_income() {
        let result = estimate_tax(&single(dec!(0))).unwrap();
        let r = &result.result;
        assert_eq!(r.tax_owed, dec!(0));
        assert_eq!(r.effective_rate_percent, dec!(0));
        assert_eq!(r.after_tax_income, dec!(0));
    }

    #[test]
    fn test_negative_income_rejected() {
        assert!(estimate_tax(&single(dec!(-1))).is_err());
    }
}
