//! Fixed-rate amortizing loan pricing.
//!
//! Closed-form annuity payment with an explicit, tagged fallback for
//! rate/term combinations whose growth factor overflows: the reference
//! behaviour of silently substituting an interest-only payment is kept, but
//! the substitution is surfaced via [`PaymentBasis`] and an envelope warning
//! instead of being hidden.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinPlanError;
use crate::numeric::{growth_factor, periodic_rate, GrowthFactor};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinPlanResult;

/// Hard cap on loan length: 100 years of monthly payments.
pub const MAX_PAYMENTS: u32 = 1200;

pub(crate) const MONTHS_PER_YEAR: u32 = 12;

/// Terms of a fixed-rate amortizing loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// Annual interest rate as a percentage (8.5 = 8.5%).
    pub annual_rate_percent: Percent,
    pub term_years: u32,
}

/// How the monthly payment was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentBasis {
    /// Standard amortizing-annuity formula (linear split at zero rate).
    Amortizing,
    /// Interest-only approximation, used when the growth factor overflowed.
    /// The payment never retires principal; totals are approximate.
    InterestOnlyApproximation,
}

/// Cost breakdown of a priced loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    pub principal: Money,
    pub payment_basis: PaymentBasis,
}

/// Price a fixed-rate amortizing loan.
pub fn price_loan(terms: &LoanTerms) -> FinPlanResult<ComputationOutput<LoanResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let result = payment_breakdown(terms)?;
    if result.payment_basis == PaymentBasis::InterestOnlyApproximation {
        warnings.push(
            "Growth factor exceeded the overflow threshold; monthly payment is an \
             interest-only approximation"
                .to_string(),
        );
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate amortizing loan (closed-form annuity payment)",
        &serde_json::json!({
            "principal": result.principal.to_string(),
            "annual_rate_percent": terms.annual_rate_percent.to_string(),
            "term_years": terms.term_years,
            "num_payments": terms.term_years * MONTHS_PER_YEAR,
        }),
        warnings,
        elapsed,
        result,
    ))
}

/// Payment computation without the output envelope. Shared with the mortgage
/// engine and the amortization schedule generator.
pub(crate) fn payment_breakdown(terms: &LoanTerms) -> FinPlanResult<LoanResult> {
    validate(terms)?;

    let num_payments = terms.term_years * MONTHS_PER_YEAR;
    let n = Decimal::from(num_payments);
    let monthly_rate = periodic_rate(terms.annual_rate_percent, MONTHS_PER_YEAR)?;

    let (monthly_payment, payment_basis) = if monthly_rate.is_zero() {
        (terms.principal / n, PaymentBasis::Amortizing)
    } else {
        match growth_factor(monthly_rate, num_payments) {
            GrowthFactor::Exact(gf) => (
                terms.principal * monthly_rate * gf / (gf - Decimal::ONE),
                PaymentBasis::Amortizing,
            ),
            GrowthFactor::Overflowed => (
                terms.principal * monthly_rate,
                PaymentBasis::InterestOnlyApproximation,
            ),
        }
    };

    let total_paid = monthly_payment * n;
    Ok(LoanResult {
        monthly_payment,
        total_paid,
        total_interest: total_paid - terms.principal,
        principal: terms.principal,
        payment_basis,
    })
}

fn validate(terms: &LoanTerms) -> FinPlanResult<()> {
    if terms.principal <= Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "principal".into(),
            reason: "principal must be > 0".into(),
        });
    }
    if terms.term_years == 0 {
        return Err(FinPlanError::InvalidInput {
            field: "term_years".into(),
            reason: "term must be > 0 years".into(),
        });
    }
    if terms.term_years > MAX_PAYMENTS / MONTHS_PER_YEAR {
        return Err(FinPlanError::InvalidInput {
            field: "term_years".into(),
            reason: "loan term too long (max 100 years)".into(),
        });
    }
    if terms.annual_rate_percent < Decimal::ZERO {
        return Err(FinPlanError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "interest rate cannot be negative".into(),
        });
    }
    Ok(())
}
