//! shiftr CLI library
//!
//! Command-line front end for the `shiftr-core` token classification
//! and shift engine.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
