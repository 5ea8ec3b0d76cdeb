//! Compare projections across a range of annual rates for one plan
//!
//! Usage: cargo run --bin compare_rates -- --initial 1000000 --years 20

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use investment_calculator::export;
use investment_calculator::format::{format_currency, format_percentage, Currency};
use investment_calculator::params::{validate, CalculationParams, CalculationType, CompoundFrequency};
use investment_calculator::scenario::ScenarioRunner;
use investment_calculator::store::Simulation;

#[derive(Debug, Parser)]
#[command(name = "compare_rates", about = "Rate sensitivity comparison for an investment plan")]
struct Args {
    /// Lump sum invested at time zero
    #[arg(long, default_value_t = 1_000_000.0)]
    initial: f64,

    /// Investment period in years
    #[arg(long, default_value_t = 20)]
    years: u32,

    /// Monthly deposit amount
    #[arg(long, default_value_t = 30_000.0)]
    monthly: f64,

    /// Annual rates (percent) to compare
    #[arg(long, value_delimiter = ',', default_values_t = [1.0, 3.0, 5.0, 7.0])]
    rates: Vec<f64>,

    /// Output CSV path
    #[arg(long, default_value = "rate_comparison.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let base = CalculationParams::new(
        args.initial,
        args.rates.first().copied().unwrap_or(5.0),
        args.years,
        args.monthly,
        0.0,
        CalculationType::Compound,
        CompoundFrequency::Yearly,
    );
    if let Err(errors) = validate(&base) {
        for error in &errors {
            eprintln!("error: {error}");
        }
        anyhow::bail!("invalid base parameters");
    }

    let runner = ScenarioRunner::new(base);

    let mut simulations = Vec::new();
    for (rate, result) in runner.rate_sweep(&args.rates) {
        println!("{}", "=".repeat(60));
        println!("Annual rate {}", format_percentage(rate, 2));
        println!("{}", "=".repeat(60));
        println!(
            "  Final amount: {}  (principal {}, profit rate {})",
            format_currency(result.final_amount, Currency::Jpy),
            format_currency(result.total_principal, Currency::Jpy),
            format_percentage(result.profit_rate, 2),
        );

        simulations.push(Simulation::new(
            format!("rate_{rate}"),
            runner.with_rate(rate),
        ));
    }

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    export::write_comparison(&simulations, file)?;
    println!("\nComparison written to: {}", args.output.display());

    Ok(())
}
