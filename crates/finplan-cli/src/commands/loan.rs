use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::loan::{self, LoanTerms};
use finplan_core::schedule;

use crate::input;

/// Arguments for loan pricing
#[derive(Args)]
pub struct LoanArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 8.5 for 8.5%)
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Loan term in years
    #[arg(long, alias = "years")]
    pub term_years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct AmortizationArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Loan term in years
    #[arg(long, alias = "years")]
    pub term_years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

fn resolve_terms(
    input_path: &Option<String>,
    principal: Option<Decimal>,
    annual_rate_percent: Option<Decimal>,
    term_years: Option<u32>,
) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    if let Some(path) = input_path {
        return Ok(input::file::read_json(path)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(LoanTerms {
        principal: principal.ok_or("--principal is required")?,
        annual_rate_percent: annual_rate_percent.ok_or("--annual-rate-percent is required")?,
        term_years: term_years.ok_or("--term-years is required")?,
    })
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = resolve_terms(
        &args.input,
        args.principal,
        args.annual_rate_percent,
        args.term_years,
    )?;
    let result = loan::price_loan(&terms)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_amortization(args: AmortizationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = resolve_terms(
        &args.input,
        args.principal,
        args.annual_rate_percent,
        args.term_years,
    )?;
    let result = schedule::amortization_schedule(&terms)?;
    Ok(serde_json::to_value(result)?)
}
