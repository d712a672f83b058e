//! Configuration loading and persistence.

use crate::schema::Config;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use traffic_common::TrafficError;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "TRAFFIC_SURVEY_CONFIG";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "traffic-survey.toml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading or writing the configuration file
    #[error("Failed to access configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value failed validation
    #[error("Invalid configuration value for '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl From<ConfigError> for TrafficError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("Configuration loading failed", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content)?;

        Self::apply_env_overrides(&mut config);
        config.validate()?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from the environment-named file, the default file,
    /// or built-in defaults, in that order.
    pub fn load() -> Result<Config, ConfigError> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            return Self::load_config(config_path);
        }
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::load_config(DEFAULT_CONFIG_FILE);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration text without applying overrides or validation.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration as pretty TOML
    pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(config)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) {
        Self::apply_overrides(config, |var| env::var(var).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("TRAFFIC_DATA_DIR") {
            config.data.data_dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup("TRAFFIC_OUTPUT_DIR") {
            config.report.output_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("TRAFFIC_LOG_LEVEL") {
            config.logging.level = level;
        }
    }
}
