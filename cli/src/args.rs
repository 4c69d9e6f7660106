//! Command-line arguments

use std::path::PathBuf;

use bmr_calculator_shared::{BmrMethod, EnergyUnit};
use clap::Parser;

use crate::config::{AppConfig, InputOrder, OutputFormat, PromptMode};

/// Reads age, height, weight and gender from standard input and prints the
/// Basal Metabolic Rate.
#[derive(Parser, Debug)]
#[command(name = "bmr-calculator", version, about)]
pub struct Args {
    /// TOML configuration file (defaults to config/$RUST_ENV.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// BMR equation: mifflin-st-jeor or harris-benedict
    #[arg(short, long)]
    pub method: Option<BmrMethod>,

    /// Order of the numeric inputs: age-height-weight or age-weight-height
    #[arg(long)]
    pub order: Option<InputOrder>,

    /// Result format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Report the BMR in kcal or kj
    #[arg(long, value_name = "UNIT")]
    pub energy_unit: Option<EnergyUnit>,

    /// Decimal places in the printed BMR
    #[arg(short, long, value_name = "N")]
    pub precision: Option<usize>,

    /// Do not print prompts before each value
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Apply flags on top of the loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(method) = self.method {
            config.calculation.method = method;
        }
        if let Some(order) = self.order {
            config.calculation.input_order = order;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(unit) = self.energy_unit {
            config.output.energy_unit = unit;
        }
        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }
        if self.quiet {
            config.output.prompts = PromptMode::Never;
        }
    }
}
