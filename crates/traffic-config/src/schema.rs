//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use traffic_common::LoggingConfig;

/// Main configuration structure for the traffic survey analyser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset location and the table of available dates.
    pub data: DataConfig,
    /// Report output configuration.
    pub report: ReportConfig,
    /// Histogram configuration.
    pub chart: ChartConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Read-only mapping from a `DDMMYYYY` key to the dataset file recorded on that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailableDates(BTreeMap<String, String>);

impl AvailableDates {
    /// Builds a table from `(key, file name)` pairs.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The dataset file name for a date key.
    pub fn file_for(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether a dataset is recorded for the date key.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over `(key, file name)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of recorded dates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no date is recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Dataset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory the dataset file names are resolved against.
    pub data_dir: PathBuf,
    /// Earliest year accepted at the date prompt.
    pub min_year: i32,
    /// Latest year accepted at the date prompt.
    pub max_year: i32,
    /// Dates for which a dataset exists.
    pub available_dates: AvailableDates,
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory for `results_<DDMMYYYY>.txt` and the histogram images.
    pub output_dir: PathBuf,
}

/// Histogram configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Whether to draw the histogram at all.
    pub enabled: bool,
    /// Block on a keypress after drawing so the user can inspect the image.
    pub wait_for_dismiss: bool,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Margin around the plot area in pixels.
    pub margin: u32,
    /// Font family for labels and title.
    pub font_family: String,
    /// Color configuration.
    pub colors: ChartColors,
}

/// Histogram colors as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartColors {
    /// Elm Avenue/Rabbit Road bars.
    pub elm: String,
    /// Hanley Highway/Westway bars.
    pub hanley: String,
    /// Image background.
    pub background: String,
    /// Axes, outlines and text.
    pub foreground: String,
}

/// Logging configuration as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level filter; `RUST_LOG` takes precedence.
    pub level: String,
    /// Optional log file; stderr when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LoggingSettings {
    /// Converts to the runtime logging configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}
