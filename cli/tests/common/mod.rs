//! Common test utilities for integration tests
//!
//! Drives a [`Session`] with in-memory input the way a user would type it
//! at the console, and captures everything written to the output stream.

#![allow(dead_code)]

use std::io::Cursor;

use bmr_calculator::{
    config::{AppConfig, InputOrder, OutputFormat, PromptMode},
    Outcome, Session,
};

/// Captured result of one session
pub struct TestRun {
    pub outcome: Outcome,
    pub output: String,
}

impl TestRun {
    pub fn contains(&self, needle: &str) -> bool {
        self.output.contains(needle)
    }
}

/// Configuration without prompts, so output is exactly the result line
pub fn quiet_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.output.prompts = PromptMode::Never;
    config
}

/// Configuration reading weight before height
pub fn weight_first_config() -> AppConfig {
    let mut config = quiet_config();
    config.calculation.input_order = InputOrder::AgeWeightHeight;
    config
}

/// Configuration writing JSON results
pub fn json_config() -> AppConfig {
    let mut config = quiet_config();
    config.output.format = OutputFormat::Json;
    config
}

/// Run a session with `config` on `input`
pub fn run_with(config: &AppConfig, input: &str) -> TestRun {
    let session = Session::new(config, false);
    let mut output = Vec::new();
    let outcome = session
        .run(Cursor::new(input.as_bytes()), &mut output)
        .expect("session I/O failed");

    TestRun {
        outcome,
        output: String::from_utf8(output).expect("output is not UTF-8"),
    }
}

/// Run a session with the default order and no prompts
pub fn run(input: &str) -> TestRun {
    run_with(&quiet_config(), input)
}

pub const AGE_ERROR: &str = "Error: Age must be between 1 and 119.";
pub const HEIGHT_ERROR: &str = "Error: Height must be between 1 and 99 inches.";
pub const WEIGHT_ERROR: &str = "Error: Weight must be between 1 and 999 pounds.";
pub const GENDER_ERROR: &str = "Error: Invalid gender. Please enter 'M' or 'F'.";
pub const RESULT: &str = "Your BMR is:";
