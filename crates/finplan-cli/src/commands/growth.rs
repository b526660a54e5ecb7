use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::compound::{self, CompoundInterestInput};
use finplan_core::investment::{self, InvestmentInput};

use crate::input;

/// Arguments for investment growth projection
#[derive(Args)]
pub struct InvestmentArgs {
    /// Initial lump-sum investment
    #[arg(long, default_value = "0")]
    pub initial: Decimal,

    /// Monthly contribution
    #[arg(long, default_value = "0")]
    pub monthly_contribution: Decimal,

    /// Expected annual return as a percentage (e.g. 7 for 7%)
    #[arg(long, alias = "return")]
    pub annual_return_percent: Option<Decimal>,

    /// Projection length in years (fractional allowed)
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for compound interest
#[derive(Args)]
pub struct CompoundArgs {
    /// Principal amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual rate as a percentage (e.g. 5 for 5%)
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Number of years (fractional allowed)
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Compounding periods per year (12 = monthly, 365 = daily)
    #[arg(long, alias = "frequency", default_value = "12")]
    pub compound_frequency_per_year: u32,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_investment(args: InvestmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let investment_input: InvestmentInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        InvestmentInput {
            initial: args.initial,
            monthly_contribution: args.monthly_contribution,
            annual_return_percent: args
                .annual_return_percent
                .ok_or("--annual-return-percent is required")?,
            years: args.years.ok_or("--years is required")?,
        }
    };
    let result = investment::project_investment(&investment_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_compound_interest(args: CompoundArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let compound_input: CompoundInterestInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        CompoundInterestInput {
            principal: args.principal.ok_or("--principal is required")?,
            annual_rate_percent: args
                .annual_rate_percent
                .ok_or("--annual-rate-percent is required")?,
            years: args.years.ok_or("--years is required")?,
            compound_frequency_per_year: args.compound_frequency_per_year,
        }
    };
    let result = compound::compound_interest(&compound_input)?;
    Ok(serde_json::to_value(result)?)
}
