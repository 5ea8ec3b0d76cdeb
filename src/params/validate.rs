//! Form-level validation for calculation parameters
//!
//! The projection engine performs no range checks of its own; every caller
//! path (CLI, stored form values) goes through here first and surfaces the
//! full list of field errors, matching the behavior of the input form.

use thiserror::Error;

use super::data::{CalculationParams, CalculationType, CompoundFrequency};

/// Allowed range for the annual rate, in percent
pub const ANNUAL_RATE_RANGE: (f64, f64) = (0.0, 100.0);

/// Allowed range for the investment period, in years
pub const INVESTMENT_PERIOD_RANGE: (u32, u32) = (1, 50);

/// A single field failing validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("initial amount must be zero or greater, got {0}")]
    InitialAmount(f64),

    #[error("annual rate must be between 0 and 100 percent, got {0}")]
    AnnualRate(f64),

    #[error("investment period must be between 1 and 50 years, got {0}")]
    InvestmentPeriod(u32),

    #[error("monthly deposit must be zero or greater, got {0}")]
    MonthlyDeposit(f64),

    #[error("bonus deposit must be zero or greater, got {0}")]
    BonusDeposit(f64),

    #[error("bonus month {0} is outside 1-12")]
    BonusMonthOutOfRange(u32),

    #[error("bonus month {0} is listed more than once")]
    BonusMonthDuplicate(u32),

    #[error("field '{field}' is not a number: '{value}'")]
    NotANumber { field: &'static str, value: String },
}

/// Check every field of `params` and collect all failures
///
/// Returns `Ok(())` only when the parameters satisfy the ranges the engine
/// assumes. NaN rates and amounts fail their range checks here, so the
/// engine never sees them.
pub fn validate(params: &CalculationParams) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !(params.initial_amount >= 0.0) {
        errors.push(ValidationError::InitialAmount(params.initial_amount));
    }

    let (rate_min, rate_max) = ANNUAL_RATE_RANGE;
    if !(params.annual_rate >= rate_min && params.annual_rate <= rate_max) {
        errors.push(ValidationError::AnnualRate(params.annual_rate));
    }

    let (period_min, period_max) = INVESTMENT_PERIOD_RANGE;
    if params.investment_period < period_min || params.investment_period > period_max {
        errors.push(ValidationError::InvestmentPeriod(params.investment_period));
    }

    if !(params.monthly_deposit >= 0.0) {
        errors.push(ValidationError::MonthlyDeposit(params.monthly_deposit));
    }

    if !(params.bonus_deposit >= 0.0) {
        errors.push(ValidationError::BonusDeposit(params.bonus_deposit));
    }

    let mut seen = [false; 13];
    for &month in &params.bonus_months {
        if month < 1 || month > 12 {
            errors.push(ValidationError::BonusMonthOutOfRange(month));
        } else if seen[month as usize] {
            errors.push(ValidationError::BonusMonthDuplicate(month));
        } else {
            seen[month as usize] = true;
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Raw form fields as entered, before numeric conversion
///
/// Mirrors the persisted input form: every numeric field arrives as a
/// string and the optional fields may be empty.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FormInput {
    pub initial_amount: String,
    pub annual_rate: String,
    pub investment_period: String,
    pub monthly_deposit: String,
    #[serde(default)]
    pub bonus_deposit: String,
    #[serde(default)]
    pub bonus_months: Vec<u32>,
    pub compound_frequency: CompoundFrequency,
    pub calculation_type: CalculationType,
}

impl FormInput {
    /// Convert raw fields into validated parameters
    ///
    /// Collects every conversion and range failure rather than stopping at
    /// the first, so the caller can show all field errors at once.
    pub fn parse(&self) -> Result<CalculationParams, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let initial_amount = parse_field("initial_amount", &self.initial_amount, &mut errors);
        let annual_rate = parse_field("annual_rate", &self.annual_rate, &mut errors);
        let monthly_deposit = parse_field("monthly_deposit", &self.monthly_deposit, &mut errors);

        // Empty bonus field means no bonus deposits
        let bonus_deposit = if self.bonus_deposit.trim().is_empty() {
            0.0
        } else {
            parse_field("bonus_deposit", &self.bonus_deposit, &mut errors)
        };

        let investment_period = match self.investment_period.trim().parse::<u32>() {
            Ok(v) => v,
            Err(_) => {
                errors.push(ValidationError::NotANumber {
                    field: "investment_period",
                    value: self.investment_period.clone(),
                });
                0
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let params = CalculationParams {
            initial_amount,
            annual_rate,
            investment_period,
            monthly_deposit,
            bonus_deposit,
            bonus_months: self.bonus_months.clone(),
            compound_frequency: self.compound_frequency,
            calculation_type: self.calculation_type,
        };

        validate(&params)?;
        Ok(params)
    }
}

fn parse_field(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => {
            errors.push(ValidationError::NotANumber {
                field,
                value: value.to_string(),
            });
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> CalculationParams {
        CalculationParams::new(
            1_000_000.0,
            5.0,
            10,
            30_000.0,
            0.0,
            CalculationType::Compound,
            CompoundFrequency::Yearly,
        )
    }

    #[test]
    fn test_valid_params_pass() {
        assert!(validate(&valid_params()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut params = valid_params();
        params.initial_amount = -1.0;
        params.annual_rate = 150.0;
        params.investment_period = 0;

        let errors = validate(&params).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::InitialAmount(-1.0)));
        assert!(errors.contains(&ValidationError::AnnualRate(150.0)));
        assert!(errors.contains(&ValidationError::InvestmentPeriod(0)));
    }

    #[test]
    fn test_nan_rate_rejected() {
        let mut params = valid_params();
        params.annual_rate = f64::NAN;

        assert!(validate(&params).is_err());
    }

    #[test]
    fn test_bonus_month_checks() {
        let mut params = valid_params();
        params.bonus_months = vec![6, 13, 6];

        let errors = validate(&params).unwrap_err();
        assert!(errors.contains(&ValidationError::BonusMonthOutOfRange(13)));
        assert!(errors.contains(&ValidationError::BonusMonthDuplicate(6)));
    }

    #[test]
    fn test_period_bounds() {
        let mut params = valid_params();
        params.investment_period = 50;
        assert!(validate(&params).is_ok());

        params.investment_period = 51;
        assert!(validate(&params).is_err());
    }

    #[test]
    fn test_form_input_parse() {
        let input = FormInput {
            initial_amount: "1000000".to_string(),
            annual_rate: "5".to_string(),
            investment_period: "10".to_string(),
            monthly_deposit: "30000".to_string(),
            bonus_deposit: "".to_string(),
            bonus_months: vec![6, 12],
            compound_frequency: CompoundFrequency::Yearly,
            calculation_type: CalculationType::Compound,
        };

        let params = input.parse().unwrap();
        assert_eq!(params.initial_amount, 1_000_000.0);
        assert_eq!(params.bonus_deposit, 0.0);
    }

    #[test]
    fn test_form_input_bad_number() {
        let input = FormInput {
            initial_amount: "abc".to_string(),
            annual_rate: "5".to_string(),
            investment_period: "ten".to_string(),
            monthly_deposit: "0".to_string(),
            bonus_deposit: String::new(),
            bonus_months: vec![],
            compound_frequency: CompoundFrequency::Yearly,
            calculation_type: CalculationType::Simple,
        };

        let errors = input.parse().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
