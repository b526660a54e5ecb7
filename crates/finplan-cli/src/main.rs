mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::growth::{CompoundArgs, InvestmentArgs};
use commands::loan::{AmortizationArgs, LoanArgs};
use commands::mortgage::MortgageArgs;
use commands::planning::{DebtSnowballArgs, EmergencyFundArgs, RatiosArgs, TaxArgs};
use commands::retirement::RetirementArgs;

/// Personal finance calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "finplan",
    version,
    about = "Personal finance calculations with decimal precision",
    long_about = "A CLI for personal finance calculations with decimal precision. \
                  Supports loan and mortgage pricing, amortization schedules, \
                  investment and retirement projections, compound interest, debt \
                  snowball planning, and household ratio analysis."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a fixed-rate amortizing loan
    Loan(LoanArgs),
    /// Generate a per-payment amortization schedule
    Amortization(AmortizationArgs),
    /// Analyze full monthly and lifetime mortgage cost
    Mortgage(MortgageArgs),
    /// Project investment growth with monthly contributions
    Investment(InvestmentArgs),
    /// Compound interest with a chosen compounding frequency
    CompoundInterest(CompoundArgs),
    /// Retirement sufficiency under the 4% withdrawal rule
    Retirement(RetirementArgs),
    /// Debt payoff plan using the snowball method
    DebtSnowball(DebtSnowballArgs),
    /// Emergency fund target and savings timeline
    EmergencyFund(EmergencyFundArgs),
    /// Household financial ratios
    Ratios(RatiosArgs),
    /// Illustrative federal income tax estimate
    Tax(TaxArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Loan(args) => commands::loan::run_loan(args),
        Commands::Amortization(args) => commands::loan::run_amortization(args),
        Commands::Mortgage(args) => commands::mortgage::run_mortgage(args),
        Commands::Investment(args) => commands::growth::run_investment(args),
        Commands::CompoundInterest(args) => commands::growth::run_compound_interest(args),
        Commands::Retirement(args) => commands::retirement::run_retirement(args),
        Commands::DebtSnowball(args) => commands::planning::run_debt_snowball(args),
        Commands::EmergencyFund(args) => commands::planning::run_emergency_fund(args),
        Commands::Ratios(args) => commands::planning::run_ratios(args),
        Commands::Tax(args) => commands::planning::run_tax(args),
        Commands::Version => {
            println!("finplan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
