use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::mortgage::{self, MortgageInput};

use crate::input;

/// Arguments for mortgage analysis
#[derive(Args)]
pub struct MortgageArgs {
    /// Purchase price of the home
    #[arg(long)]
    pub home_price: Option<Decimal>,

    /// Down payment amount
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 6.5 for 6.5%)
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Mortgage term in years
    #[arg(long, alias = "years")]
    pub term_years: Option<u32>,

    /// Annual property tax
    #[arg(long, default_value = "0")]
    pub property_tax_annual: Decimal,

    /// Annual homeowner's insurance
    #[arg(long, default_value = "0")]
    pub insurance_annual: Decimal,

    /// Monthly private mortgage insurance
    #[arg(long, default_value = "0")]
    pub pmi_monthly: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_mortgage(args: MortgageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mortgage_input: MortgageInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        MortgageInput {
            home_price: args.home_price.ok_or("--home-price is required")?,
            down_payment: args.down_payment.ok_or("--down-payment is required")?,
            annual_rate_percent: args
                .annual_rate_percent
                .ok_or("--annual-rate-percent is required")?,
            term_years: args.term_years.ok_or("--term-years is required")?,
            property_tax_annual: args.property_tax_annual,
            insurance_annual: args.insurance_annual,
            pmi_monthly: args.pmi_monthly,
        }
    };
    let result = mortgage::analyze_mortgage(&mortgage_input)?;
    Ok(serde_json::to_value(result)?)
}
