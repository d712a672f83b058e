//! # Traffic Survey
//!
//! Interactive survey analyser: pick a date, analyse that day's dataset,
//! save the report and draw the hourly histogram, then offer another date.
//!
//! The [`Session`] and [`DateSelector`] are generic over their input and
//! output streams so that whole runs can be scripted in tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod date_selector;
pub mod error;
pub mod session;

pub use date_selector::*;
pub use error::*;
pub use session::*;
