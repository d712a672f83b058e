//! # Traffic Graphs
//!
//! Hourly vehicle histogram for the two surveyed junctions.
//!
//! Records are bucketed into a [`HourlyHistogram`], laid out by
//! [`ChartLayout`] in pure pixel geometry, and drawn by a [`ChartRenderer`].
//! The bundled [`BitmapHistogramRenderer`] writes a PNG with plotters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod histogram;
pub mod layout;
pub mod renderer;

pub use histogram::*;
pub use layout::*;
pub use renderer::*;
