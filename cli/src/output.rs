//! Rendering of the single result line
//!
//! Text output is what a person at a terminal sees; JSON output carries the
//! same information for scripts.

use anyhow::Result;
use bmr_calculator_shared::{BmrReport, BmrResult, EnergyUnit, ErrorResponse, InputError};

use crate::config::{OutputConfig, OutputFormat};

/// Prefix of every successful text result
pub const RESULT_PREFIX: &str = "Your BMR is:";

/// Render a computed BMR, without trailing newline
pub fn render_result(result: &BmrResult, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Text => {
            let mut line = format!(
                "{} {:.*}",
                RESULT_PREFIX,
                output.precision,
                result.in_unit(output.energy_unit)
            );
            if output.energy_unit == EnergyUnit::Kj {
                line.push_str(&format!(" {}/day", output.energy_unit));
            }
            Ok(line)
        }
        OutputFormat::Json => {
            let report = BmrReport::new(result, output.energy_unit, output.precision);
            Ok(serde_json::to_string(&report)?)
        }
    }
}

/// Render a rejected input, without trailing newline
pub fn render_error(err: &InputError, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(err.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&ErrorResponse::from(err))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmr_calculator_shared::{BmrMethod, Field};

    fn result(kcal_per_day: f64) -> BmrResult {
        BmrResult {
            kcal_per_day,
            method: BmrMethod::MifflinStJeor,
        }
    }

    #[test]
    fn test_text_result() {
        let line = render_result(&result(1592.263), &OutputConfig::default()).unwrap();
        assert_eq!(line, "Your BMR is: 1592.26");
    }

    #[test]
    fn test_text_result_precision_and_kilojoules() {
        let output = OutputConfig {
            precision: 0,
            energy_unit: EnergyUnit::Kj,
            ..OutputConfig::default()
        };
        let line = render_result(&result(1000.0), &output).unwrap();
        assert_eq!(line, "Your BMR is: 4184 kJ/day");
    }

    #[test]
    fn test_negative_result_is_printed_as_computed() {
        let line = render_result(&result(-735.58908), &OutputConfig::default()).unwrap();
        assert_eq!(line, "Your BMR is: -735.59");
    }

    #[test]
    fn test_json_result() {
        let output = OutputConfig {
            format: OutputFormat::Json,
            ..OutputConfig::default()
        };
        let line = render_result(&result(1592.263), &output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["bmr"], 1592.26);
        assert_eq!(value["unit"], "kcal");
        assert_eq!(value["method"], "mifflin_st_jeor");
    }

    #[test]
    fn test_text_error_is_the_message() {
        let line = render_error(&InputError::AgeOutOfRange, OutputFormat::Text).unwrap();
        assert_eq!(line, "Error: Age must be between 1 and 119.");
    }

    #[test]
    fn test_json_error() {
        let err = InputError::Malformed {
            field: Field::Height,
            value: "tall".to_string(),
        };
        let line = render_error(&err, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["error"]["code"], "MALFORMED_INPUT");
        assert_eq!(value["error"]["message"], "Error: Height must be a whole number.");
        assert_eq!(value["error"]["field"], "height");
    }
}
