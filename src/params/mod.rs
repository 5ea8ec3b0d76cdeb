//! Calculation parameters and form-level validation

mod data;
pub mod validate;

pub use data::{CalculationParams, CalculationType, CompoundFrequency};
pub use validate::{validate, FormInput, ValidationError};
