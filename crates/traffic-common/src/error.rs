//! Error types shared by the traffic survey crates.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for traffic survey operations.
pub type Result<T> = std::result::Result<T, TrafficError>;

/// Main error type for loading, analysing, reporting and charting survey data.
#[derive(Error, Debug)]
pub enum TrafficError {
    /// Configuration related errors.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset file for a selected date does not exist.
    #[error("Dataset not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A row could not be decoded, or one of its numeric fields failed to parse.
    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    /// A statistic needs at least one record but the dataset is empty.
    #[error("Empty dataset: {message}")]
    EmptyDataset { message: String },

    /// A junction-scoped statistic found no records for that junction.
    #[error("No records found for junction '{junction}'")]
    NoJunctionRecords { junction: String },

    /// Report writing or parsing errors.
    #[error("Report error: {message}")]
    Report {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart layout and rendering errors.
    #[error("Chart error: {message}")]
    Chart {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TrafficError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a dataset-not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a malformed record error for the given 1-based CSV line.
    pub fn malformed(line: u64, msg: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: msg.into(),
        }
    }

    /// Create an empty dataset error.
    pub fn empty_dataset(msg: impl Into<String>) -> Self {
        Self::EmptyDataset {
            message: msg.into(),
        }
    }

    /// Create a missing junction error.
    pub fn no_junction_records(junction: impl Into<String>) -> Self {
        Self::NoJunctionRecords {
            junction: junction.into(),
        }
    }

    /// Create a new report error.
    pub fn report(msg: impl Into<String>) -> Self {
        Self::Report {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new report error with source.
    pub fn report_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Report {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new chart error.
    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new chart error with source.
    pub fn chart_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Chart {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error describes a problem with the dataset itself
    /// rather than with the environment (files, configuration, output).
    pub const fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. } | Self::EmptyDataset { .. } | Self::NoJunctionRecords { .. }
        )
    }

    /// Get the error category as a string.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Io(_) => "io",
            Self::NotFound { .. } => "not_found",
            Self::MalformedRecord { .. } => "malformed_record",
            Self::EmptyDataset { .. } => "empty_dataset",
            Self::NoJunctionRecords { .. } => "no_junction_records",
            Self::Report { .. } => "report",
            Self::Chart { .. } => "chart",
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to `TrafficError`
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for TrafficError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::chart_with_source("Chart rendering failed", err)
    }
}
