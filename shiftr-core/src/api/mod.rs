//! Public API for shiftr-core
//!
//! The facade composes the domain layer into one entry point,
//! [`ShiftEngine`], that hosts and the CLI build once and call per
//! gesture.

mod engine;
mod error;
mod outcome;

pub use engine::ShiftEngine;
pub use error::{Error, Result};
pub use outcome::ShiftOutcome;
