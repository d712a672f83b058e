//! # Traffic Analysis
//!
//! Loading, aggregation and reporting for traffic survey datasets.
//!
//! This crate reads survey CSV files into [`TrafficRecord`]s, computes the
//! fixed set of [`SurveyStatistics`], finds a junction's peak hour, and
//! persists the statistics as a `key: value` text report.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod loader;
pub mod peak_hour;
pub mod record;
pub mod report;
pub mod statistics;

pub use aggregator::*;
pub use loader::*;
pub use peak_hour::*;
pub use record::*;
pub use report::*;
pub use statistics::*;
