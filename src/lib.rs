//! Investment Calculator - projection engine for multi-year investment growth
//!
//! This library provides:
//! - Compound (yearly or monthly) and simple-interest projections
//! - Periodic deposits with configurable bonus-month contributions
//! - Year-by-year principal/profit/total breakdowns with aggregate summary
//! - Scenario sweeps and parallel batch projection
//! - Local JSON persistence and CSV export of saved simulations

pub mod export;
pub mod format;
pub mod params;
pub mod projection;
pub mod scenario;
pub mod store;

// Re-export commonly used types
pub use params::{CalculationParams, CalculationType, CompoundFrequency};
pub use projection::{calculate, CalculationResult, YearlyData};
pub use scenario::ScenarioRunner;
pub use store::{Simulation, SimulationStore};
