//! # Traffic Config
//!
//! Type-safe configuration management for the traffic survey analyser.
//!
//! This crate provides the configuration schema (including the read-only
//! table of available survey dates), defaults, TOML loading with
//! environment overrides, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
pub use validator::*;
