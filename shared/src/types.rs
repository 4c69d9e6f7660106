//! Serializable output payloads
//!
//! These are the JSON shapes written by `--format json` and returned by the
//! WASM bindings.

use serde::{Deserialize, Serialize};

use crate::errors::InputError;
use crate::health_metrics::{BmrMethod, BmrResult};
use crate::units::EnergyUnit;

/// Successful calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrReport {
    /// BMR per day in `unit`, rounded to the requested precision
    pub bmr: f64,
    pub unit: EnergyUnit,
    pub method: BmrMethod,
}

impl BmrReport {
    pub fn new(result: &BmrResult, unit: EnergyUnit, precision: usize) -> Self {
        Self {
            bmr: round_to(result.in_unit(unit), precision),
            unit,
            method: result.method,
        }
    }
}

/// Rejected input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&InputError> for ErrorResponse {
    fn from(err: &InputError) -> Self {
        Self {
            error: ErrorDetail {
                code: err.code().to_string(),
                message: err.to_string(),
                field: Some(err.field().name().to_string()),
            },
        }
    }
}

/// Round half away from zero to `precision` decimal places
pub fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(15) as i32);
    (value * factor).round() / factor
}
