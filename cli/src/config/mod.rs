//! Configuration management for the BMR calculator
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (`--config <FILE>`, or config/development.toml /
//!    config/production.toml chosen by RUST_ENV)
//! 3. Environment variables (prefix: BMR__)
//! 4. Command-line flags (applied by the binary)

use std::env;
use std::path::Path;

use anyhow::Result;
use bmr_calculator_shared::{BmrMethod, EnergyUnit, Field};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported number of decimal places in the printed BMR
pub const MAX_PRECISION: usize = 6;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub calculation: CalculationConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How inputs are read and which equation is applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationConfig {
    pub method: BmrMethod,
    pub input_order: InputOrder,
}

/// How the result is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub energy_unit: EnergyUnit,
    pub precision: usize,
    pub prompts: PromptMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            energy_unit: EnergyUnit::Kcal,
            precision: 2,
            prompts: PromptMode::Auto,
        }
    }
}

/// Diagnostic log configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

/// Position of height and weight in the input stream.
///
/// Age always comes first and gender last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputOrder {
    #[default]
    AgeHeightWeight,
    AgeWeightHeight,
}

impl InputOrder {
    pub fn fields(&self) -> [Field; 4] {
        match self {
            InputOrder::AgeHeightWeight => [Field::Age, Field::Height, Field::Weight, Field::Gender],
            InputOrder::AgeWeightHeight => [Field::Age, Field::Weight, Field::Height, Field::Gender],
        }
    }
}

impl std::str::FromStr for InputOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "age-height-weight" | "age-height-weight-gender" => Ok(InputOrder::AgeHeightWeight),
            "age-weight-height" | "age-weight-height-gender" => Ok(InputOrder::AgeWeightHeight),
            _ => Err(format!("Unknown input order: {}", s)),
        }
    }
}

/// Result line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// When to print a prompt before each read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    /// Only when standard input is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl PromptMode {
    pub fn enabled(&self, interactive: bool) -> bool {
        match self {
            PromptMode::Auto => interactive,
            PromptMode::Always => true,
            PromptMode::Never => false,
        }
    }
}

/// Log line format on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Settings that load but cannot be used
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("output.precision must be at most {max}, got {0}", max = MAX_PRECISION)]
    Precision(usize),
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. `path` if given (must exist), otherwise config/{RUST_ENV}.toml if present
    /// 3. Environment variables with BMR__ prefix
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => {
                let name = format!("config/{}", Self::environment());
                config::File::with_name(&name).required(false)
            }
        };
        Self::layered(file)
    }

    fn layered<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(file)
            // e.g., BMR__CALCULATION__METHOD=harris_benedict sets calculation.method
            .add_source(
                config::Environment::with_prefix("BMR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Reject settings that deserialize but are out of bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::Precision(self.output.precision));
        }
        Ok(())
    }

    /// Value of RUST_ENV, defaulting to development
    pub fn environment() -> String {
        env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        Self::environment() == "production"
    }
}
