use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finplan_core::debt::{self, DebtAccount};
use finplan_core::emergency::{self, EmergencyFundInput};
use finplan_core::ratios::{self, RatioInput};
use finplan_core::tax::{self, FilingStatus, TaxEstimateInput};

use crate::input;

/// Arguments for debt snowball planning
#[derive(Args)]
pub struct DebtSnowballArgs {
    /// Path to JSON input file with an array of debts
    /// (name, balance, min_payment, interest_rate_percent, extra_payment)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for emergency fund planning
#[derive(Args)]
pub struct EmergencyFundArgs {
    /// Monthly living expenses
    #[arg(long)]
    pub monthly_expenses: Option<Decimal>,

    /// Months of expenses to target
    #[arg(long, default_value = "6")]
    pub target_months: Decimal,

    /// Current emergency savings
    #[arg(long, default_value = "0")]
    pub current_savings: Decimal,

    /// Amount saved toward the fund each month
    #[arg(long, default_value = "0")]
    pub monthly_savings: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for household ratio analysis
#[derive(Args)]
pub struct RatiosArgs {
    /// Monthly gross income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Monthly living expenses
    #[arg(long, default_value = "0")]
    pub expenses: Decimal,

    /// Monthly debt payments
    #[arg(long, default_value = "0")]
    pub debt_payments: Decimal,

    /// Monthly savings
    #[arg(long, default_value = "0")]
    pub savings: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the illustrative tax estimate
#[derive(Args)]
pub struct TaxArgs {
    /// Annual taxable income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Filing status: single or married_filing_jointly
    #[arg(long, default_value = "single")]
    pub filing_status: String,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_debt_snowball(args: DebtSnowballArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let debts: Vec<DebtAccount> = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for debt snowball planning".into());
    };
    let result = debt::plan_snowball(&debts)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_emergency_fund(args: EmergencyFundArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fund_input: EmergencyFundInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        EmergencyFundInput {
            monthly_expenses: args.monthly_expenses.ok_or("--monthly-expenses is required")?,
            target_months: args.target_months,
            current_savings: args.current_savings,
            monthly_savings: args.monthly_savings,
        }
    };
    let result = emergency::plan_emergency_fund(&fund_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_ratios(args: RatiosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ratio_input: RatioInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RatioInput {
            income: args.income.ok_or("--income is required")?,
            expenses: args.expenses,
            debt_payments: args.debt_payments,
            savings: args.savings,
        }
    };
    let result = ratios::financial_ratios(&ratio_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_tax(args: TaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tax_input: TaxEstimateInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let filing_status = match args.filing_status.as_str() {
            "single" => FilingStatus::Single,
            "married_filing_jointly" | "married" => FilingStatus::MarriedFilingJointly,
            other => return Err(format!("unknown filing status '{other}'").into()),
        };
        TaxEstimateInput {
            income: args.income.ok_or("--income is required")?,
            filing_status,
        }
    };
    let result = tax::estimate_tax(&tax_input)?;
    Ok(serde_json::to_value(result)?)
}
