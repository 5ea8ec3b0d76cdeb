//! Investment Calculator CLI
//!
//! Runs a projection from command-line parameters, prints the yearly
//! breakdown, and optionally exports CSV or saves the simulation locally.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

use investment_calculator::format::{format_currency, format_percentage, Currency};
use investment_calculator::params::{validate, CalculationParams, CalculationType, CompoundFrequency};
use investment_calculator::projection::calculate;
use investment_calculator::store::{Simulation, SimulationStore};
use investment_calculator::export;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TypeArg {
    Simple,
    Compound,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FrequencyArg {
    Yearly,
    Monthly,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CurrencyArg {
    Jpy,
    Usd,
    Twd,
}

#[derive(Debug, Parser)]
#[command(name = "investment-calculator", version, about = "Multi-year investment growth projection")]
struct Args {
    /// Lump sum invested at time zero
    #[arg(long, default_value_t = 1_000_000.0)]
    initial: f64,

    /// Nominal annual rate in percent
    #[arg(long, default_value_t = 5.0)]
    rate: f64,

    /// Investment period in years (1-50)
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Monthly deposit amount
    #[arg(long, default_value_t = 30_000.0)]
    monthly: f64,

    /// Bonus deposit amount per bonus month
    #[arg(long, default_value_t = 0.0)]
    bonus: f64,

    /// Calendar months (1-12) receiving the bonus deposit
    #[arg(long, value_delimiter = ',', default_values_t = [6, 12])]
    bonus_months: Vec<u32>,

    /// Interest model
    #[arg(long = "type", value_enum, default_value_t = TypeArg::Compound)]
    calculation_type: TypeArg,

    /// Compounding frequency (compound type only)
    #[arg(long, value_enum, default_value_t = FrequencyArg::Yearly)]
    frequency: FrequencyArg,

    /// Display currency
    #[arg(long, value_enum, default_value_t = CurrencyArg::Jpy)]
    currency: CurrencyArg,

    /// Write the yearly breakdown to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Save the simulation to the local store
    #[arg(long)]
    save: bool,

    /// Name for the saved simulation
    #[arg(long, default_value = "simulation")]
    name: String,

    /// Directory for the local store
    #[arg(long, default_value = ".investment-calculator")]
    store_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let params = CalculationParams {
        initial_amount: args.initial,
        annual_rate: args.rate,
        investment_period: args.years,
        monthly_deposit: args.monthly,
        bonus_deposit: args.bonus,
        bonus_months: args.bonus_months.clone(),
        compound_frequency: match args.frequency {
            FrequencyArg::Yearly => CompoundFrequency::Yearly,
            FrequencyArg::Monthly => CompoundFrequency::Monthly,
        },
        calculation_type: match args.calculation_type {
            TypeArg::Simple => CalculationType::Simple,
            TypeArg::Compound => CalculationType::Compound,
        },
    };

    if let Err(errors) = validate(&params) {
        for error in &errors {
            eprintln!("error: {error}");
        }
        bail!("{} invalid parameter(s)", errors.len());
    }

    let currency = match args.currency {
        CurrencyArg::Jpy => Currency::Jpy,
        CurrencyArg::Usd => Currency::Usd,
        CurrencyArg::Twd => Currency::Twd,
    };

    let result = calculate(&params);

    println!("Investment Calculator v0.1.0");
    println!("============================\n");

    println!("Parameters:");
    println!("  Initial amount: {}", format_currency(params.initial_amount, currency));
    println!("  Annual rate: {}", format_percentage(params.annual_rate, 2));
    println!("  Period: {} years", params.investment_period);
    println!("  Monthly deposit: {}", format_currency(params.monthly_deposit, currency));
    if params.bonus_deposit > 0.0 {
        println!(
            "  Bonus deposit: {} in months {:?}",
            format_currency(params.bonus_deposit, currency),
            params.bonus_months
        );
    }
    println!();

    println!("{:>5} {:>18} {:>18} {:>18}", "Year", "Principal", "Profit", "Total");
    println!("{}", "-".repeat(62));
    for row in &result.yearly_breakdown {
        println!(
            "{:>5} {:>18} {:>18} {:>18}",
            row.year,
            format_currency(row.principal, currency),
            format_currency(row.profit, currency),
            format_currency(row.total, currency),
        );
    }

    println!("\nSummary:");
    println!("  Final amount: {}", format_currency(result.final_amount, currency));
    println!("  Total principal: {}", format_currency(result.total_principal, currency));
    println!("  Total profit: {}", format_currency(result.total_profit, currency));
    println!("  Profit rate: {}", format_percentage(result.profit_rate, 2));

    if args.csv.is_some() || args.save {
        let simulation = Simulation::new(args.name.clone(), params);

        if let Some(path) = &args.csv {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            export::write_simulation(&simulation, file)?;
            println!("\nResults written to: {}", path.display());
        }

        if args.save {
            let store = SimulationStore::open(&args.store_dir)?;
            let id = simulation.id.clone();
            store.upsert(simulation)?;
            println!("\nSaved as {} in {}", id, args.store_dir.display());
        }
    }

    Ok(())
}
