//! BMR Calculator Shared Library
//!
//! This crate contains the field ranges, validation rules, unit conversions
//! and BMR formulas used by both the command line front end and the WASM
//! module. Nothing in here performs I/O.

pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use types::*;
pub use units::*;
pub use validation::*;
