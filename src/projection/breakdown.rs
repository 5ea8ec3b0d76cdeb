//! Output structures for projection runs

use serde::{Deserialize, Serialize};

/// Asset position at the end of one projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyData {
    /// Year index, 1-based
    pub year: u32,

    /// Cumulative contributions to date (initial lump sum plus deposits)
    pub principal: f64,

    /// Accrued growth: `total - principal`
    pub profit: f64,

    /// Asset value including growth
    pub total: f64,
}

/// Complete result of one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Asset value at the end of the horizon
    pub final_amount: f64,

    /// Total contributed over the horizon
    pub total_principal: f64,

    /// `final_amount - total_principal`
    pub total_profit: f64,

    /// Profit as a percentage of principal, 0 when nothing was contributed
    pub profit_rate: f64,

    /// One entry per projection year, in increasing year order
    pub yearly_breakdown: Vec<YearlyData>,
}

impl CalculationResult {
    /// Build a result from the final running accumulators
    ///
    /// `profit_rate` is guarded: a zero principal yields 0, not NaN.
    pub fn from_final_state(
        total_principal: f64,
        final_amount: f64,
        yearly_breakdown: Vec<YearlyData>,
    ) -> Self {
        let total_profit = final_amount - total_principal;
        let profit_rate = if total_principal > 0.0 {
            total_profit / total_principal * 100.0
        } else {
            0.0
        };

        Self {
            final_amount,
            total_principal,
            total_profit,
            profit_rate,
            yearly_breakdown,
        }
    }

    /// Build a result whose summary mirrors the last breakdown entry
    ///
    /// Used by the simple-interest strategy, which derives its summary from
    /// the recorded rows rather than separate accumulators. An empty
    /// breakdown collapses to all-zero totals.
    pub fn from_breakdown(yearly_breakdown: Vec<YearlyData>) -> Self {
        let (total_principal, final_amount) = yearly_breakdown
            .last()
            .map(|last| (last.principal, last.total))
            .unwrap_or((0.0, 0.0));

        Self::from_final_state(total_principal, final_amount, yearly_breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profit_rate_guard() {
        let result = CalculationResult::from_final_state(0.0, 0.0, Vec::new());

        assert_eq!(result.profit_rate, 0.0);
        assert!(!result.profit_rate.is_nan());
    }

    #[test]
    fn test_summary_from_breakdown() {
        let rows = vec![
            YearlyData { year: 1, principal: 100.0, profit: 5.0, total: 105.0 },
            YearlyData { year: 2, principal: 200.0, profit: 15.0, total: 215.0 },
        ];

        let result = CalculationResult::from_breakdown(rows);
        assert_eq!(result.total_principal, 200.0);
        assert_eq!(result.final_amount, 215.0);
        assert_eq!(result.total_profit, 15.0);
        assert_eq!(result.profit_rate, 7.5);
    }

    #[test]
    fn test_empty_breakdown_is_all_zero() {
        let result = CalculationResult::from_breakdown(Vec::new());

        assert_eq!(result.final_amount, 0.0);
        assert_eq!(result.total_principal, 0.0);
        assert_eq!(result.profit_rate, 0.0);
    }
}
