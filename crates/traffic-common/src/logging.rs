//! Structured logging setup built on `tracing-subscriber`.

use crate::error::{Result, TrafficError};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "info", "`traffic_analysis=debug`")
    pub level: String,
    /// Optional file path for log output; stderr when unset
    pub file_path: Option<PathBuf>,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            // Prompts share the terminal, so only problems are shown by default
            level: "warn".to_string(),
            file_path: None,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = if let Some(file_path) = &config.file_path {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        let layer = fmt::layer()
            .with_ansi(false)
            .with_target(config.include_targets)
            .with_writer(Mutex::new(file));
        registry.with(layer).try_init()
    } else {
        let layer = fmt::layer()
            .with_target(config.include_targets)
            .with_writer(std::io::stderr);
        registry.with(layer).try_init()
    };

    result.map_err(|e| TrafficError::config_with_source("Failed to initialise logging", e))?;
    tracing::debug!(level = %config.level, "Logging initialised");
    Ok(())
}
