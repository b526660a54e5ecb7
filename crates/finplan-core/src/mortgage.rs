//! Mortgage cost composition: principal and interest from the loan engine
//! plus property tax, homeowner's insurance, and PMI surcharges.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::loan::{payment_breakdown, LoanTerms, PaymentBasis};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinPlanResult;

const TWELVE: Decimal = dec!(12);

/// Mortgage parameters. `down_payment <= home_price` is the caller's
/// responsibility; the engine only rejects a non-positive loan amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInput {
    pub home_price: Money,
    pub down_payment: Money,
    /// Annual interest rate as a percentage (6.5 = 6.5%).
    pub annual_rate_percent: Percent,
    pub term_years: u32,
    pub property_tax_annual: Money,
    pub insurance_annual: Money,
    pub pmi_monthly: Money,
}

/// Blended monthly and lifetime mortgage cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageResult {
    pub loan_amount: Money,
    pub monthly_payment: Money,
    pub total_monthly: Money,
    pub total_interest: Money,
    pub total_cost: Money,
    pub monthly_tax: Money,
    pub monthly_insurance: Money,
    pub monthly_pmi: Money,
    pub payment_basis: PaymentBasis,
}

/// Compute the full monthly and lifetime cost of a mortgage.
pub fn analyze_mortgage(input: &MortgageInput) -> FinPlanResult<ComputationOutput<MortgageResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let loan_amount = input.home_price - input.down_payment;
    let loan = payment_breakdown(&LoanTerms {
        principal: loan_amount,
        annual_rate_percent: input.annual_rate_percent,
        term_years: input.term_years,
    })?;

    if loan.payment_basis == PaymentBasis::InterestOnlyApproximation {
        warnings.push(
            "Growth factor exceeded the overflow threshold; principal-and-interest payment \
             is an interest-only approximation"
                .to_string(),
        );
    }

    let monthly_tax = input.property_tax_annual / TWELVE;
    let monthly_insurance = input.insurance_annual / TWELVE;
    let total_monthly = loan.monthly_payment + monthly_tax + monthly_insurance + input.pmi_monthly;

    let years = Decimal::from(input.term_years);
    let total_cost = loan.total_paid
        + input.property_tax_annual * years
        + input.insurance_annual * years
        + input.pmi_monthly * TWELVE * years;

    let result = MortgageResult {
        loan_amount,
        monthly_payment: loan.monthly_payment,
        total_monthly,
        total_interest: loan.total_interest,
        total_cost,
        monthly_tax,
        monthly_insurance,
        monthly_pmi: input.pmi_monthly,
        payment_basis: loan.payment_basis,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Mortgage cost composition (loan annuity + tax/insurance/PMI surcharges)",
        &serde_json::json!({
            "home_price": input.home_price.to_string(),
            "down_payment": input.down_payment.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "term_years": input.term_years,
        }),
        warnings,
        elapsed,
        result,
    ))
}
