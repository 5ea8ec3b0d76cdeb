//! Projection engine producing year-by-year asset breakdowns

mod breakdown;
mod engine;

pub use breakdown::{CalculationResult, YearlyData};
pub use engine::{calculate, Strategy};
