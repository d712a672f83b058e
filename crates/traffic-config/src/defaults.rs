//! Default values for the three recorded survey days.

use crate::schema::*;
use std::path::PathBuf;

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            report: ReportConfig::default(),
            chart: ChartConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            min_year: 2000,
            max_year: 2024,
            available_dates: AvailableDates::new([
                ("15062024", "traffic_data15062024.csv"),
                ("16062024", "traffic_data16062024.csv"),
                ("21062024", "traffic_data21062024.csv"),
            ]),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            wait_for_dismiss: true,
            width: 1000,
            height: 700,
            margin: 50,
            font_family: "sans-serif".to_string(),
            colors: ChartColors::default(),
        }
    }
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            elm: "#90ee90".to_string(),
            hanley: "#f08080".to_string(),
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}
