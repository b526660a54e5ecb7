use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::retirement::{self, RetirementInput};

use crate::input;

/// Arguments for retirement sufficiency projection
#[derive(Args)]
pub struct RetirementArgs {
    /// Current age
    #[arg(long)]
    pub current_age: Option<u32>,

    /// Planned retirement age
    #[arg(long)]
    pub retirement_age: Option<u32>,

    /// Current annual income
    #[arg(long)]
    pub current_income: Option<Decimal>,

    /// Current retirement savings
    #[arg(long, default_value = "0")]
    pub current_savings: Decimal,

    /// Retirement income as a percentage of current income (e.g. 80)
    #[arg(long, default_value = "80")]
    pub income_replacement_percent: Decimal,

    /// Monthly retirement contribution
    #[arg(long, default_value = "0")]
    pub monthly_contribution: Decimal,

    /// Expected annual return as a percentage before retirement
    #[arg(long, alias = "return", default_value = "7")]
    pub expected_return_percent: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_retirement(args: RetirementArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let retirement_input: RetirementInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RetirementInput {
            current_age: args.current_age.ok_or("--current-age is required")?,
            retirement_age: args.retirement_age.ok_or("--retirement-age is required")?,
            current_income: args.current_income.ok_or("--current-income is required")?,
            current_savings: args.current_savings,
            income_replacement_percent: args.income_replacement_percent,
            monthly_contribution: args.monthly_contribution,
            expected_return_percent: args.expected_return_percent,
        }
    };
    let result = retirement::project_retirement(&retirement_input)?;
    Ok(serde_json::to_value(result)?)
}
