//! Application-wide error types using thiserror.

use traffic_common::TrafficError;
use traffic_config::ConfigError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum SurveyError {
    /// Loading, analysis, report or chart error.
    #[error(transparent)]
    Traffic(#[from] TrafficError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Console I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while a prompt was waiting for an answer.
    #[error("Input closed before the session finished")]
    InputClosed,
}

/// Result type for the survey application.
pub type SurveyResult<T> = Result<T, SurveyError>;
