//! BMR Calculator
//!
//! Reads age, height, weight and gender from standard input as whitespace or
//! newline separated tokens, and prints the Basal Metabolic Rate or the first validation error.
//!
//! Exit codes: 0 when a BMR is printed, 1 when input is rejected, 2 when
//! configuration or I/O fails.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use bmr_calculator::{
    args::Args,
    config::{AppConfig, LogFormat},
    Outcome, Session,
};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_INTERNAL_ERROR: u8 = 2;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            init_tracing(LogFormat::default());
            error!("Configuration error: {:#}", err);
            return ExitCode::from(EXIT_INTERNAL_ERROR);
        }
    };

    init_tracing(config.logging.format);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        env = %AppConfig::environment(),
        method = %config.calculation.method,
        "Starting BMR calculator"
    );

    match run(&config) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            error!("{:#}", err);
            ExitCode::from(EXIT_INTERNAL_ERROR)
        }
    }
}

/// Layer command-line flags over file and environment configuration
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Run one session on standard input and output
fn run(config: &AppConfig) -> Result<Outcome> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let session = Session::new(config, interactive);
    session.run(stdin.lock(), io::stdout().lock())
}

/// Initialize tracing/logging
///
/// Logs go to stderr so that stdout carries only prompts and the result line.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bmr_calculator=warn".into());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if format == LogFormat::Json || AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .init();
    }
}
