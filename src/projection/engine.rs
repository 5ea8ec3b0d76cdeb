//! Strategy dispatch and the three projection strategies
//!
//! Each strategy is a pure function from parameters to a result. The loops
//! are folds carrying an immutable `(principal, total)` pair; breakdown rows
//! are recorded as the fold passes each year boundary.
//!
//! Contribution timing differs deliberately between the compound
//! strategies: the yearly strategy grows the prior balance before adding
//! the year's deposits (new money earns nothing until the next year), while
//! the monthly strategy adds the month's deposits before growing (new money
//! earns growth in its own month). Both behaviors are load-bearing and
//! match the reference outputs.

use crate::params::{CalculationParams, CalculationType, CompoundFrequency};

use super::breakdown::{CalculationResult, YearlyData};

/// The concrete computation selected by the parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Linear interest on each contribution
    Simple,
    /// One compounding step per year
    CompoundYearly,
    /// Twelve compounding steps per year at the nominal rate / 12
    CompoundMonthly,
}

impl Strategy {
    /// Select the strategy for a parameter set
    pub fn for_params(params: &CalculationParams) -> Self {
        match (params.calculation_type, params.compound_frequency) {
            (CalculationType::Simple, _) => Strategy::Simple,
            (CalculationType::Compound, CompoundFrequency::Yearly) => Strategy::CompoundYearly,
            (CalculationType::Compound, CompoundFrequency::Monthly) => Strategy::CompoundMonthly,
        }
    }
}

/// Run the projection for a parameter set
///
/// No validation happens here; the caller is expected to have run
/// [`crate::params::validate`] first. Out-of-range input produces
/// undefined numeric results rather than an error.
pub fn calculate(params: &CalculationParams) -> CalculationResult {
    match Strategy::for_params(params) {
        Strategy::Simple => simple_interest(params),
        Strategy::CompoundYearly => compound_yearly(params),
        Strategy::CompoundMonthly => compound_monthly(params),
    }
}

/// Yearly compounding: grow the carried balance, then add the year's
/// contributions
fn compound_yearly(params: &CalculationParams) -> CalculationResult {
    let growth = 1.0 + params.annual_rate_fraction();
    let yearly_addition = params.yearly_addition();

    let mut breakdown = Vec::with_capacity(params.investment_period as usize);
    let (principal, total) = (1..=params.investment_period).fold(
        (params.initial_amount, params.initial_amount),
        |(principal, total), year| {
            let total = total * growth + yearly_addition;
            let principal = principal + yearly_addition;

            breakdown.push(YearlyData {
                year,
                principal,
                profit: total - principal,
                total,
            });

            (principal, total)
        },
    );

    CalculationResult::from_final_state(principal, total, breakdown)
}

/// Monthly compounding: add the month's contributions, then grow the whole
/// balance by the nominal rate / 12
fn compound_monthly(params: &CalculationParams) -> CalculationResult {
    let growth = 1.0 + params.monthly_rate_fraction();

    let mut breakdown = Vec::with_capacity(params.investment_period as usize);
    let (principal, total) = (1..=params.total_months()).fold(
        (params.initial_amount, params.initial_amount),
        |(principal, total), month| {
            let month_in_year = (month - 1) % 12 + 1;
            let mut deposit = params.monthly_deposit;
            if params.is_bonus_month(month_in_year) {
                deposit += params.bonus_deposit;
            }

            let principal = principal + deposit;
            let total = (total + deposit) * growth;

            if month % 12 == 0 {
                breakdown.push(YearlyData {
                    year: month / 12,
                    principal,
                    profit: total - principal,
                    total,
                });
            }

            (principal, total)
        },
    );

    CalculationResult::from_final_state(principal, total, breakdown)
}

/// Simple interest: the lump sum and each year's contributions earn linear
/// interest independently
///
/// The deposit made in year `i` has earned `(y - i)` years of interest by
/// the end of year `y`; the current year's deposit has earned none.
fn simple_interest(params: &CalculationParams) -> CalculationResult {
    let rate = params.annual_rate_fraction();
    let yearly_addition = params.yearly_addition();

    let mut breakdown = Vec::with_capacity(params.investment_period as usize);
    (1..=params.investment_period).fold(params.initial_amount, |principal, year| {
        let principal = principal + yearly_addition;

        let lump_interest = params.initial_amount * rate * year as f64;
        let deposit_interest: f64 = (1..year)
            .map(|i| yearly_addition * rate * (year - i) as f64)
            .sum();
        let profit = lump_interest + deposit_interest;

        breakdown.push(YearlyData {
            year,
            principal,
            profit,
            total: principal + profit,
        });

        principal
    });

    CalculationResult::from_breakdown(breakdown)
}
