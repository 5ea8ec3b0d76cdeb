//! Parameter structures for a single projection run

use serde::{Deserialize, Serialize};

/// Default bonus months (June and December payouts)
fn default_bonus_months() -> Vec<u32> {
    vec![6, 12]
}

/// Which interest model to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationType {
    /// Linear growth on each contribution
    Simple,
    /// Accrued growth earns further growth
    Compound,
}

/// Compounding frequency, only meaningful for compound calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundFrequency {
    /// One growth step per year
    Yearly,
    /// Twelve growth steps per year at the nominal rate / 12
    Monthly,
}

/// Input parameters for one projection run
///
/// The engine trusts these values. Range enforcement lives in
/// [`crate::params::validate`] and must happen before calling
/// [`crate::projection::calculate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationParams {
    /// Lump sum invested at time zero
    pub initial_amount: f64,

    /// Nominal annual rate in percent (5.0 = 5%)
    pub annual_rate: f64,

    /// Projection horizon in whole years
    pub investment_period: u32,

    /// Amount contributed every month
    pub monthly_deposit: f64,

    /// Extra amount contributed in each bonus month
    #[serde(default)]
    pub bonus_deposit: f64,

    /// Calendar months (1-12) that receive the bonus deposit
    #[serde(default = "default_bonus_months")]
    pub bonus_months: Vec<u32>,

    /// Compounding frequency when `calculation_type` is compound
    pub compound_frequency: CompoundFrequency,

    /// Simple or compound interest
    pub calculation_type: CalculationType,
}

impl CalculationParams {
    /// Create parameters with the default bonus schedule (June/December)
    pub fn new(
        initial_amount: f64,
        annual_rate: f64,
        investment_period: u32,
        monthly_deposit: f64,
        bonus_deposit: f64,
        calculation_type: CalculationType,
        compound_frequency: CompoundFrequency,
    ) -> Self {
        Self {
            initial_amount,
            annual_rate,
            investment_period,
            monthly_deposit,
            bonus_deposit,
            bonus_months: default_bonus_months(),
            compound_frequency,
            calculation_type,
        }
    }

    /// Total contributed over one year: 12 monthly deposits plus one bonus
    /// deposit per bonus month
    pub fn yearly_addition(&self) -> f64 {
        self.monthly_deposit * 12.0 + self.bonus_deposit * self.bonus_months.len() as f64
    }

    /// Total number of monthly steps for the horizon
    pub fn total_months(&self) -> u32 {
        self.investment_period * 12
    }

    /// Whether a calendar month (1-12) receives the bonus deposit
    pub fn is_bonus_month(&self, month_in_year: u32) -> bool {
        self.bonus_months.contains(&month_in_year)
    }

    /// Nominal annual rate as a fraction (0.05 for 5%)
    pub fn annual_rate_fraction(&self) -> f64 {
        self.annual_rate / 100.0
    }

    /// Monthly growth rate as a fraction: nominal annual rate / 12
    pub fn monthly_rate_fraction(&self) -> f64 {
        self.annual_rate / 12.0 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> CalculationParams {
        CalculationParams::new(
            1_000_000.0,
            5.0,
            10,
            30_000.0,
            100_000.0,
            CalculationType::Compound,
            CompoundFrequency::Yearly,
        )
    }

    #[test]
    fn test_yearly_addition() {
        let params = test_params();

        // 30,000 * 12 + 100,000 * 2 bonus months
        assert_eq!(params.yearly_addition(), 560_000.0);
        assert_eq!(params.total_months(), 120);
    }

    #[test]
    fn test_bonus_months_default() {
        let params = test_params();

        assert!(params.is_bonus_month(6));
        assert!(params.is_bonus_month(12));
        assert!(!params.is_bonus_month(7));
    }

    #[test]
    fn test_serde_defaults() {
        // bonus_deposit and bonus_months may be absent from stored input
        let json = r#"{
            "initial_amount": 500000.0,
            "annual_rate": 3.0,
            "investment_period": 5,
            "monthly_deposit": 10000.0,
            "compound_frequency": "monthly",
            "calculation_type": "compound"
        }"#;

        let params: CalculationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.bonus_deposit, 0.0);
        assert_eq!(params.bonus_months, vec![6, 12]);
        assert_eq!(params.compound_frequency, CompoundFrequency::Monthly);
    }
}
