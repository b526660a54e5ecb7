//! Amortization schedule materialization: per-period principal/interest
//! split with the floating residue folded into the final payment so the
//! balance lands on exactly zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::loan::{payment_breakdown, LoanTerms, PaymentBasis, MONTHS_PER_YEAR};
use crate::numeric::periodic_rate;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FinPlanResult;

/// Balances below this are treated as rounding residue and absorbed into the
/// final principal portion.
const RESIDUE_THRESHOLD: Decimal = dec!(0.01);

/// One payment period.
///
/// `remaining_balance` strictly decreases across the sequence and is exactly
/// zero on the final row; the principal portions sum to the original
/// principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based payment number.
    pub payment_index: u32,
    pub scheduled_payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
}

/// Full schedule plus the fixed payment it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationOutput {
    pub monthly_payment: Money,
    pub rows: Vec<AmortizationRow>,
}

/// Materialize the per-period breakdown for a fixed-rate loan. Freshly
/// computed on every call; row count never exceeds `term_years * 12`.
pub fn amortization_schedule(
    terms: &LoanTerms,
) -> FinPlanResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();

    let loan = payment_breakdown(terms)?;
    if loan.payment_basis == PaymentBasis::InterestOnlyApproximation {
        // An interest-only payment never retires principal, so no finite
        // schedule exists.
        return Err(FinPlanError::NumericalOverflow {
            context: "amortization schedule (payment fell back to interest-only approximation)"
                .into(),
        });
    }

    let monthly_rate = periodic_rate(terms.annual_rate_percent, MONTHS_PER_YEAR)?;
    let num_payments = terms.term_years * MONTHS_PER_YEAR;
    let payment = loan.monthly_payment;

    let mut rows = Vec::with_capacity(num_payments as usize);
    let mut balance = terms.principal;

    for payment_index in 1..=num_payments {
        let interest_portion = balance * monthly_rate;
        let mut principal_portion = payment - interest_portion;
        balance -= principal_portion;

        // Fold the rounding residue into the final principal portion
        if balance < RESIDUE_THRESHOLD {
            principal_portion += balance;
            balance = Decimal::ZERO;
        }

        rows.push(AmortizationRow {
            payment_index,
            scheduled_payment: payment,
            principal_portion,
            interest_portion,
            remaining_balance: balance,
        });

        if balance.is_zero() {
            break;
        }
    }

    let result = AmortizationOutput {
        monthly_payment: payment,
        rows,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Amortization schedule (fixed payment, declining-balance interest)",
        &serde_json::json!({
            "principal": terms.principal.to_string(),
            "annual_rate_percent": terms.annual_rate_percent.to_string(),
            "term_years": terms.term_years,
            "residue_threshold": RESIDUE_THRESHOLD.to_string(),
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

    fn terms(principal: Decimal, rate: Decimal, years: u32) -> LoanTerms {
        LoanTerms {
            principal,
            annual_rate_percent: rate,
            term_years: years,
        }
    }

    const TOLERANCE: Decimal = dec!(0.000001);

    #[test]
    fn test_final_row_balance_is_exactly_zero() {
        let result = amortization_schedule(&terms(dec!(200_000), dec!(8.5), 5)).unwrap();
        let rows = &result.result.rows;
        assert_eq!(rows.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_principal_portions_sum_to_principal() {
        let result = amortization_schedule(&terms(dec!(200_000), dec!(8.5), 5)).unwrap();
        let total: Decimal = result
            .result
            .rows
            .iter()
            .map(|r| r.principal_portion)
            .sum();
        assert!((total - dec!(200_000)).abs() < TOLERANCE, "sum={}", total);
    }

    #[test]
    fn test_balance_strictly_decreases() {
        let result = amortization_schedule(&terms(dec!(100_000), dec!(6), 15)).unwrap();
        let rows = &result.result.rows;
        let mut previous = dec!(100_000);
        for row in rows {
            assert!(
                row.remaining_balance < previous,
                "balance did not decrease at payment {}",
                row.payment_index
            );
            previous = row.remaining_balance;
        }
    }

    #[test]
    fn test_row_count_and_indices() {
        let result = amortization_schedule(&terms(dec!(50_000), dec!(4), 3)).unwrap();
        let rows = &result.result.rows;
        assert!(rows.len() <= 36);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.payment_index, (i + 1) as u32);
        }
    }

    #[test]
    fn test_zero_rate_schedule() {
        let result = amortization_schedule(&terms(dec!(12_000), dec!(0), 1)).unwrap();
        let rows = &result.result.rows;
        assert_eq!(rows.len(), 12);
        for row in rows {
            assert_eq!(row.interest_portion, Decimal::ZERO);
            assert_eq!(row.principal_portion, dec!(1_000));
        }
        assert_eq!(rows.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_payment_splits_add_up() {
        let result = amortization_schedule(&terms(dec!(200_000), dec!(8.5), 5)).unwrap();
        let rows = &result.result.rows;
        // Every non-final row: payment == principal + interest
        for row in &rows[..rows.len() - 1] {
            let diff =
                (row.scheduled_payment - row.principal_portion - row.interest_portion).abs();
            assert!(diff < TOLERANCE, "split mismatch at {}", row.payment_index);
        }
    }

    #[test]
    fn test_interest_only_fallback_has_no_schedule() {
        let err = amortization_schedule(&terms(dec!(10_000), dec!(500), 100)).unwrap_err();
        assert!(matches!(err, FinPlanError::NumericalOverflow { .. }));
    }

    #[test]
    fn test_invalid_terms_propagate() {
        assert!(amortization_schedule(&terms(dec!(0), dec!(5), 10)).is_err());
        assert!(amortization_schedule(&terms(dec!(1_000), dec!(5), 0)).is_err());
    }
}
