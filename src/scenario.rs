//! Scenario runner for comparing projection variants
//!
//! Holds a base parameter set and derives variants from it, so sensitivity
//! sweeps (different rates, different horizons) share everything else.

use rayon::prelude::*;

use crate::params::CalculationParams;
use crate::projection::{calculate, CalculationResult};

/// Runner around a base parameter set
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(params);
/// for (rate, result) in runner.rate_sweep(&[3.0, 5.0, 7.0]) {
///     println!("{rate}% -> {:.0}", result.final_amount);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: CalculationParams,
}

impl ScenarioRunner {
    /// Create a runner for a base parameter set
    pub fn new(base: CalculationParams) -> Self {
        Self { base }
    }

    /// Project the base parameters
    pub fn run(&self) -> CalculationResult {
        calculate(&self.base)
    }

    /// Base parameters with a different annual rate
    pub fn with_rate(&self, annual_rate: f64) -> CalculationParams {
        CalculationParams {
            annual_rate,
            ..self.base.clone()
        }
    }

    /// Base parameters with a different horizon
    pub fn with_period(&self, investment_period: u32) -> CalculationParams {
        CalculationParams {
            investment_period,
            ..self.base.clone()
        }
    }

    /// Project the base at each given annual rate
    pub fn rate_sweep(&self, rates: &[f64]) -> Vec<(f64, CalculationResult)> {
        rates
            .iter()
            .map(|&rate| (rate, calculate(&self.with_rate(rate))))
            .collect()
    }

    /// Project the base at each given horizon
    pub fn period_sweep(&self, periods: &[u32]) -> Vec<(u32, CalculationResult)> {
        periods
            .iter()
            .map(|&period| (period, calculate(&self.with_period(period))))
            .collect()
    }

    /// Reference to the base parameters
    pub fn params(&self) -> &CalculationParams {
        &self.base
    }
}

/// Project many independent parameter sets in parallel
pub fn run_batch(params: &[CalculationParams]) -> Vec<CalculationResult> {
    params.par_iter().map(calculate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CalculationType, CompoundFrequency};

    fn base_params() -> CalculationParams {
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
    fn test_rate_sweep_ordering() {
        let runner = ScenarioRunner::new(base_params());
        let results = runner.rate_sweep(&[3.0, 5.0, 7.0]);

        assert_eq!(results.len(), 3);
        // Higher rate, higher final amount
        assert!(results[2].1.final_amount > results[1].1.final_amount);
        assert!(results[1].1.final_amount > results[0].1.final_amount);
        // Principal is rate-independent
        assert_eq!(
            results[0].1.total_principal,
            results[2].1.total_principal
        );
    }

    #[test]
    fn test_period_sweep_lengths() {
        let runner = ScenarioRunner::new(base_params());
        let results = runner.period_sweep(&[5, 20]);

        assert_eq!(results[0].1.yearly_breakdown.len(), 5);
        assert_eq!(results[1].1.yearly_breakdown.len(), 20);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let sets: Vec<_> = [2.0, 4.0, 6.0, 8.0]
            .iter()
            .map(|&rate| CalculationParams {
                annual_rate: rate,
                ..base_params()
            })
            .collect();

        let batch = run_batch(&sets);
        assert_eq!(batch.len(), 4);
        for (params, result) in sets.iter().zip(&batch) {
            assert_eq!(result, &calculate(params));
        }
    }
}
