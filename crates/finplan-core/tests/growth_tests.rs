use finplan_core::compound::{compound_interest, CompoundInterestInput};
use finplan_core::investment::{project_investment, InvestmentInput};
use finplan_core::retirement::{project_retirement, RetirementInput, WITHDRAWAL_RATE};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

// ===========================================================================
// Investment growth tests
// ===========================================================================

fn growth_input(years: Decimal) -> InvestmentInput {
    InvestmentInput {
        initial: dec!(10_000),
        monthly_contribution: dec!(500),
        annual_return_percent: dec!(7),
        years,
    }
}

#[test]
fn test_growth_curve_is_monotone() {
    // The dashboard builds time series by calling the engine once per year
    let mut previous = Decimal::ZERO;
    for year in 0..=40 {
        let result = project_investment(&growth_input(Decimal::from(year))).unwrap();
        assert!(result.result.final_value >= previous, "dip at year {year}");
        previous = result.result.final_value;
    }
}

#[test]
fn test_contribution_split_identity_along_curve() {
    for year in [0u32, 1, 7, 20, 40] {
        let result = project_investment(&growth_input(Decimal::from(year))).unwrap();
        let r = &result.result;
        assert_eq!(r.final_value, r.total_contributions + r.total_earnings);
    }
}

#[test]
fn test_contributions_only_beats_nothing() {
    let with = project_investment(&InvestmentInput {
        initial: dec!(0),
        monthly_contribution: dec!(250),
        annual_return_percent: dec!(6),
        years: dec!(10),
    })
    .unwrap();
    // 120 months of 250 = 30_000 contributed; growth must exceed that
    assert_eq!(with.result.total_contributions, dec!(30_000));
    assert!(with.result.final_value > dec!(30_000));
}

// ===========================================================================
// Retirement sufficiency tests
// ===========================================================================

#[test]
fn test_retirement_reference_scenario() {
    // 500k income, 80% replacement: 400k/yr needed, 10M required at 4%
    let result = project_retirement(&RetirementInput {
        current_age: 40,
        retirement_age: 67,
        current_income: dec!(500_000),
        current_savings: dec!(250_000),
        income_replacement_percent: dec!(80),
        monthly_contribution: dec!(3_000),
        expected_return_percent: dec!(6.5),
    })
    .unwrap();
    let r = &result.result;
    assert_eq!(r.annual_retirement_income, dec!(400_000));
    assert_eq!(r.required_savings, dec!(10_000_000));
    assert_eq!(r.years_to_retirement, 27);
    assert_eq!(r.savings_gap, r.required_savings - r.projected_savings);
}

#[test]
fn test_withdrawal_rate_constant_is_four_percent() {
    assert_eq!(WITHDRAWAL_RATE, dec!(0.04));
}

#[test]
fn test_longer_horizon_grows_projection() {
    let early = project_retirement(&RetirementInput {
        current_age: 30,
        retirement_age: 60,
        current_income: dec!(90_000),
        current_savings: dec!(50_000),
        income_replacement_percent: dec!(75),
        monthly_contribution: dec!(1_000),
        expected_return_percent: dec!(6),
    })
    .unwrap();
    let late = project_retirement(&RetirementInput {
        current_age: 30,
        retirement_age: 67,
        current_income: dec!(90_000),
        current_savings: dec!(50_000),
        income_replacement_percent: dec!(75),
        monthly_contribution: dec!(1_000),
        expected_return_percent: dec!(6),
    })
    .unwrap();
    assert!(late.result.projected_savings > early.result.projected_savings);
}

// ===========================================================================
// Compound interest tests
// ===========================================================================

#[test]
fn test_reference_monthly_scenario() {
    // 50k at 5% for 10 years, monthly compounding
    let result = compound_interest(&CompoundInterestInput {
        principal: dec!(50_000),
        annual_rate_percent: dec!(5),
        years: dec!(10),
        compound_frequency_per_year: 12,
    })
    .unwrap();
    let r = &result.result;
    assert!(r.final_amount > dec!(82_000) && r.final_amount < dec!(82_700));
    assert_eq!(r.interest_earned, r.final_amount - dec!(50_000));
}

#[test]
fn test_frequency_ordering() {
    // More frequent compounding never earns less
    let mut last = Decimal::ZERO;
    for freq in [1u32, 4, 12, 52, 365] {
        let result = compound_interest(&CompoundInterestInput {
            principal: dec!(10_000),
            annual_rate_percent: dec!(6),
            years: dec!(5),
            compound_frequency_per_year: freq,
        })
        .unwrap();
        assert!(
            result.result.final_amount >= last,
            "final amount fell at frequency {freq}"
        );
        last = result.result.final_amount;
    }
}

#[test]
fn test_daily_compounding_near_continuous_limit() {
    let result = compound_interest(&CompoundInterestInput {
        principal: dec!(10_000),
        annual_rate_percent: dec!(8),
        years: dec!(5),
        compound_frequency_per_year: 365,
    })
    .unwrap();
    // Continuous: 10_000 * e^(0.08 * 5)
    let continuous = dec!(10_000) * dec!(0.4).exp();
    let diff = (result.result.final_amount - continuous).abs();
    assert!(diff < dec!(5), "diff from continuous limit: {diff}");
}

#[test]
fn test_effective_rate_converges_up_with_frequency() {
    let annual = compound_interest(&CompoundInterestInput {
        principal: dec!(1_000),
        annual_rate_percent: dec!(10),
        years: dec!(1),
        compound_frequency_per_year: 1,
    })
    .unwrap();
    let daily = compound_interest(&CompoundInterestInput {
        principal: dec!(1_000),
        annual_rate_percent: dec!(10),
        years: dec!(1),
        compound_frequency_per_year: 365,
    })
    .unwrap();
    assert_eq!(annual.result.effective_annual_rate_percent, dec!(10));
    assert!(daily.result.effective_annual_rate_percent > dec!(10.5));
    // e^0.1 - 1 = 10.517%, the continuous ceiling
    assert!(daily.result.effective_annual_rate_percent < dec!(10.52));
}
