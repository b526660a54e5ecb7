//! Debt snowball planner: debts ordered smallest balance first, with each
//! retired debt's payment rolled into the next one.
//!
//! The rollover model is simplified: every debt is assumed to receive its
//! rolled-up payment from month one rather than from the month its
//! predecessors actually retire. Payoff months use the closed-form annuity
//! payoff `n = -ln(1 - r*B/P) / ln(1 + r)`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::loan::MONTHS_PER_YEAR;
use crate::numeric::periodic_rate;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinPlanResult;

/// A single debt account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtAccount {
    pub name: String,
    pub balance: Money,
    pub min_payment: Money,
    /// Annual interest rate as a percentage (22.9 = 22.9%).
    pub interest_rate_percent: Percent,
    /// Optional extra payment directed at this debt.
    #[serde(default)]
    pub extra_payment: Money,
}

/// Payoff projection for one debt under the snowball ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub name: String,
    pub balance: Money,
    /// Minimum + extra + rolled-up payments from previously retired debts.
    pub monthly_payment: Money,
    pub months_to_payoff: Decimal,
    pub total_paid: Money,
    pub total_interest: Money,
}

/// Snowball plan across all debts, smallest balance first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnowballPlan {
    pub payoff_order: Vec<DebtPayoff>,
    pub total_interest: Money,
}

/// Build a debt snowball payoff plan.
pub fn plan_snowball(debts: &[DebtAccount]) -> FinPlanResult<ComputationOutput<SnowballPlan>> {
    let start = Instant::now();

    if debts.is_empty() {
        return Err(FinPlanError::InvalidInput {
            field: "debts".into(),
            reason: "at least one debt is required".into(),
        });
    }
    for debt in debts {
        validate(debt)?;
    }

    let mut ordered: Vec<&DebtAccount> = debts.iter().collect();
    ordered.sort_by(|a, b| a.balance.cmp(&b.balance));

    let mut payoff_order = Vec::with_capacity(ordered.len());
    let mut rolled = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;

    for debt in ordered {
        let monthly_payment = debt.min_payment + debt.extra_payment + rolled;
        let monthly_rate = periodic_rate(debt.interest_rate_percent, MONTHS_PER_YEAR)?;

        let months_to_payoff = if monthly_rate.is_zero() {
            debt.balance / monthly_payment
        } else {
            // Payment must at least cover the first month's interest or the
            // balance grows forever.
            let interest_share = monthly_rate * debt.balance / monthly_payment;
            if interest_share >= Decimal::ONE {
                return Err(FinPlanError::InvalidInput {
                    field: "min_payment".into(),
                    reason: format!(
                        "payment on '{}' does not cover monthly interest",
                        debt.name
                    ),
                });
            }
            -((Decimal::ONE - interest_share).ln()) / (Decimal::ONE + monthly_rate).ln()
        };

        let total_paid = monthly_payment * months_to_payoff;
        let interest = total_paid - debt.balance;
        total_interest += interest;

        payoff_order.push(DebtPayoff {
            name: debt.name.clone(),
            balance: debt.balance,
            monthly_payment,
            months_to_payoff,
            total_paid,
            total_interest: interest,
        });

        rolled += debt.min_payment + debt.extra_payment;
    }

    let result = SnowballPlan {
        payoff_order,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Debt snowball (smallest balance first, simultaneous rollover)",
        &serde_json::json!({
            "num_debts": debts.len(),
            "rollover_model": "rolled payments applied from month one",
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}

fn validate(debt: &DebtAccount) -> FinPlanResult<()> {
    if debt.balance <= Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "balance".into(),
            reason: format!("balance on '{}' must be > 0", debt.name),
        });
    }
    if debt.min_payment <= Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "min_payment".into(),
            reason: format!("minimum payment on '{}' must be > 0", debt.name),
        });
    }
    if debt.interest_rate_percent < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "interest_rate_percent".into(),
            reason: format!("interest rate on '{}' cannot be negative", debt.name),
        });
    }
    if debt.extra_payment < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "extra_payment".into(),
            reason: format!("extra payment on '{}' cannot be negative", debt.name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn debt(name: &str, balance: Decimal, min: Decimal, rate: Decimal) -> DebtAccount {
        DebtAccount {
            name: name.to_string(),
            balance,
            min_payment: min,
            interest_rate_percent: rate,
            extra_payment: Decimal::ZERO,
        }
    }

    #[test]
    fn test_ordering_is_smallest_balance_first() {
        let debts = vec![
            debt("car", dec!(18_000), dec!(350), dec!(5.9)),
            debt("card", dec!(3_500), dec!(90), dec!(22.9)),
            debt("student", dec!(28_000), dec!(310), dec!(4.5)),
        ];
        let result = plan_snowball(&debts).unwrap();
        let names: Vec<&str> = result
            .result
            .payoff_order
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["card", "car", "student"]);
    }

    #[test]
    fn test_rollover_increases_later_payments() {
        let debts = vec![
            debt("small", dec!(1_000), dec!(100), dec!(10)),
            debt("large", dec!(10_000), dec!(200), dec!(10)),
        ];
        let result = plan_snowball(&debts).unwrap();
        let order = &result.result.payoff_order;
        assert_eq!(order[0].monthly_payment, dec!(100));
        // Large debt gets the small debt's payment rolled in
        assert_eq!(order[1].monthly_payment, dec!(300));
    }

    #[test]
    fn test_zero_rate_payoff_is_linear() {
        let debts = vec![debt("loan", dec!(1_200), dec!(100), dec!(0))];
        let result = plan_snowball(&debts).unwrap();
        let p = &result.result.payoff_order[0];
        assert_eq!(p.months_to_payoff, dec!(12));
        assert_eq!(p.total_interest, dec!(0));
    }

    #[test]
    fn test_interest_accrues_with_positive_rate() {
        let debts = vec![debt("card", dec!(5_000), dec!(200), dec!(18))];
        let result = plan_snowball(&debts).unwrap();
        let p = &result.result.payoff_order[0];
        // Closed form: n = -ln(1 - 0.015*5000/200) / ln(1.015) ~ 31.6 months
        assert!(p.months_to_payoff > dec!(31) && p.months_to_payoff < dec!(32));
        assert!(p.total_interest > Decimal::ZERO);
    }

    #[test]
    fn test_payment_below_interest_is_rejected() {
        // 24% APR on 10k = 200/mo interest; 150 never amortizes
        let debts = vec![debt("card", dec!(10_000), dec!(150), dec!(24))];
        let err = plan_snowball(&debts).unwrap_err();
        assert!(matches!(err, FinPlanError::InvalidInput { .. }));
    }

    #[test]
    fn test_extra_payment_shortens_payoff() {
        let base = vec![debt("card", dec!(5_000), dec!(200), dec!(18))];
        let mut boosted = base.clone();
        boosted[0].extra_payment = dec!(100);

        let slow = plan_snowball(&base).unwrap();
        let fast = plan_snowball(&boosted).unwrap();
        assert!(
            fast.result.payoff_order[0].months_to_payoff
                < slow.result.payoff_order[0].months_to_payoff
        );
    }

    #[test]
    fn test_empty_debt_list_rejected() {
        assert!(plan_snowball(&[]).is_err());
    }
}
