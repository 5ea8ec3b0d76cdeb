//! CSV export of saved simulations
//!
//! Read-only transformation of engine output: a per-simulation sheet with a
//! parameter preamble and the yearly table, and a side-by-side comparison
//! sheet for several simulations.

use std::io::Write;

use thiserror::Error;

use crate::params::{CalculationType, CompoundFrequency};
use crate::store::Simulation;

/// Errors from CSV serialization
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Write one simulation: preamble rows, then the yearly breakdown table
pub fn write_simulation<W: Write>(simulation: &Simulation, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    let params = &simulation.parameters;
    let results = &simulation.results;

    csv.write_record(["simulation", &simulation.name])?;
    csv.write_record(["created", &simulation.created_at.format("%Y-%m-%d").to_string()])?;
    csv.write_record([""])?;

    csv.write_record(["initial_amount", &format!("{:.2}", params.initial_amount)])?;
    csv.write_record(["annual_rate_pct", &format!("{:.2}", params.annual_rate)])?;
    csv.write_record(["investment_period_years", &params.investment_period.to_string()])?;
    csv.write_record(["monthly_deposit", &format!("{:.2}", params.monthly_deposit)])?;
    csv.write_record(["bonus_deposit", &format!("{:.2}", params.bonus_deposit)])?;
    csv.write_record([
        "bonus_months".to_string(),
        params
            .bonus_months
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" "),
    ])?;
    csv.write_record([
        "calculation_type",
        match params.calculation_type {
            CalculationType::Simple => "simple",
            CalculationType::Compound => "compound",
        },
    ])?;
    csv.write_record([
        "compound_frequency",
        match params.compound_frequency {
            CompoundFrequency::Yearly => "yearly",
            CompoundFrequency::Monthly => "monthly",
        },
    ])?;
    csv.write_record([""])?;

    csv.write_record(["final_amount", &format!("{:.2}", results.final_amount)])?;
    csv.write_record(["total_principal", &format!("{:.2}", results.total_principal)])?;
    csv.write_record(["total_profit", &format!("{:.2}", results.total_profit)])?;
    csv.write_record(["profit_rate_pct", &format!("{:.2}", results.profit_rate)])?;
    csv.write_record([""])?;

    csv.write_record(["year", "principal", "profit", "total"])?;
    for row in &results.yearly_breakdown {
        csv.write_record([
            row.year.to_string(),
            format!("{:.2}", row.principal),
            format!("{:.2}", row.profit),
            format!("{:.2}", row.total),
        ])?;
    }

    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write several simulations side by side, one column group per simulation
///
/// Rows run to the longest horizon; simulations with a shorter horizon get
/// blank cells past their final year.
pub fn write_comparison<W: Write>(
    simulations: &[Simulation],
    writer: W,
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);

    let max_years = simulations
        .iter()
        .map(|s| s.results.yearly_breakdown.len())
        .max()
        .unwrap_or(0);

    let mut header = vec!["year".to_string()];
    for simulation in simulations {
        header.push(format!("{}_principal", simulation.name));
        header.push(format!("{}_profit", simulation.name));
        header.push(format!("{}_total", simulation.name));
    }
    csv.write_record(&header)?;

    for year in 1..=max_years as u32 {
        let mut record = vec![year.to_string()];
        for simulation in simulations {
            match simulation
                .results
                .yearly_breakdown
                .iter()
                .find(|row| row.year == year)
            {
                Some(row) => {
                    record.push(format!("{:.2}", row.principal));
                    record.push(format!("{:.2}", row.profit));
                    record.push(format!("{:.2}", row.total));
                }
                None => {
                    record.extend([String::new(), String::new(), String::new()]);
                }
            }
        }
        csv.write_record(&record)?;
    }

    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CalculationParams;
    use crate::store::Simulation;

    fn simulation(name: &str, years: u32) -> Simulation {
        Simulation::new(
            name,
            CalculationParams::new(
                1_000_000.0,
                5.0,
                years,
                30_000.0,
                0.0,
                CalculationType::Compound,
                CompoundFrequency::Yearly,
            ),
        )
    }

    #[test]
    fn test_simulation_export_layout() {
        let sim = simulation("plan", 3);
        let mut buffer = Vec::new();
        write_simulation(&sim, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("simulation,plan"));
        assert!(text.contains("year,principal,profit,total"));
        // One data row per projected year
        assert_eq!(text.lines().filter(|l| l.starts_with("1,")).count(), 1);
        assert_eq!(text.lines().filter(|l| l.starts_with("3,")).count(), 1);
        assert!(!text.contains("\n4,"));
    }

    #[test]
    fn test_comparison_pads_short_horizons() {
        let sims = vec![simulation("short", 2), simulation("long", 4)];
        let mut buffer = Vec::new();
        write_comparison(&sims, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "year,short_principal,short_profit,short_total,long_principal,long_profit,long_total"
        );
        // Header + 4 year rows
        assert_eq!(lines.len(), 5);
        // Year 3 has blanks for the short simulation
        assert!(lines[3].starts_with("3,,,"));
    }

    #[test]
    fn test_comparison_empty_input() {
        let mut buffer = Vec::new();
        write_comparison(&[], &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.trim(), "year");
    }
}
