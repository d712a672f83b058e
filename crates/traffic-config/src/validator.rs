//! Runtime validation of a loaded configuration.

use crate::loader::ConfigError;
use crate::schema::{ChartColors, ChartConfig, Config, DataConfig};
use traffic_common::SurveyDate;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first problem found.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_data(&config.data)?;
        Self::validate_chart(&config.chart)?;
        Ok(())
    }

    fn validate_data(data: &DataConfig) -> Result<(), ConfigError> {
        if data.min_year > data.max_year {
            return Err(ConfigError::Invalid {
                field: "data.min_year".to_string(),
                message: format!(
                    "min_year {} is after max_year {}",
                    data.min_year, data.max_year
                ),
            });
        }

        for (key, file) in data.available_dates.iter() {
            let date = SurveyDate::from_key(key).ok_or_else(|| ConfigError::Invalid {
                field: "data.available_dates".to_string(),
                message: format!("'{key}' is not an 8-digit DDMMYYYY key"),
            })?;
            if date.to_naive_date().is_none() {
                return Err(ConfigError::Invalid {
                    field: "data.available_dates".to_string(),
                    message: format!("'{key}' is not a calendar date"),
                });
            }
            if file.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field: "data.available_dates".to_string(),
                    message: format!("no dataset file given for '{key}'"),
                });
            }
        }

        Ok(())
    }

    fn validate_chart(chart: &ChartConfig) -> Result<(), ConfigError> {
        let border = chart.margin.saturating_mul(2);
        if chart.width <= border || chart.height <= border {
            return Err(ConfigError::Invalid {
                field: "chart.margin".to_string(),
                message: format!(
                    "a {}x{} image leaves no plot area inside a {}px margin",
                    chart.width, chart.height, chart.margin
                ),
            });
        }
        Self::validate_colors(&chart.colors)
    }

    fn validate_colors(colors: &ChartColors) -> Result<(), ConfigError> {
        for (name, value) in [
            ("elm", &colors.elm),
            ("hanley", &colors.hanley),
            ("background", &colors.background),
            ("foreground", &colors.foreground),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::Invalid {
                    field: format!("chart.colors.{name}"),
                    message: format!("'{value}' is not a #rrggbb color"),
                });
            }
        }
        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigValidator::validate(self)
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
