//! BMR Calculator Library
//!
//! This library exposes the command line front end for use in tests and
//! other crates: configuration, argument parsing, the interactive session
//! and result rendering.

pub mod args;
pub mod config;
pub mod output;
pub mod session;

pub use session::{Outcome, Session};
