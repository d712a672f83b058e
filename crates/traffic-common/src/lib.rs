//! # Traffic Common
//!
//! Shared types, errors, logging, and utilities for the traffic survey analyser.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the workspace: the typed error taxonomy, survey date and junction
//! types, percentage rounding, and tracing initialisation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(feature = "testing")]
pub mod test_utils;

pub use error::{Result, TrafficError};
pub use logging::{init_logging, LoggingConfig};
pub use types::*;
pub use utils::*;
