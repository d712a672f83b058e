//! Integration tests for traffic-config crate.

use std::path::PathBuf;
use traffic_common::test_utils::{create_temp_dir, write_fixture_file};
use traffic_common::TrafficError;
use traffic_config::{AvailableDates, Config, ConfigError, ConfigLoader};

#[test]
fn test_default_config_lists_survey_dates() {
    let config = Config::default();

    assert!(config.validate().is_ok());
    assert_eq!(
        config.data.available_dates.file_for("15062024"),
        Some("traffic_data15062024.csv")
    );
    assert_eq!(
        config.data.available_dates.file_for("16062024"),
        Some("traffic_data16062024.csv")
    );
    assert_eq!(
        config.data.available_dates.file_for("21062024"),
        Some("traffic_data21062024.csv")
    );
    assert!(!config.data.available_dates.contains("17062024"));
}

#[test]
fn test_save_then_load() {
    let dir = create_temp_dir();
    let path = dir.path().join("traffic-survey.toml");

    let mut config = Config::default();
    config.data.data_dir = PathBuf::from("surveys");
    config.data.available_dates = AvailableDates::new([("01072024", "july.csv")]);
    config.chart.enabled = false;

    ConfigLoader::save_config(&path, &config).unwrap();
    let loaded = ConfigLoader::load_config(&path).unwrap();

    assert_eq!(loaded.data.available_dates, config.data.available_dates);
    assert!(!loaded.chart.enabled);
}

#[test]
fn test_load_rejects_invalid_table() {
    let dir = create_temp_dir();
    let path = write_fixture_file(
        dir.path(),
        "bad.toml",
        "[data.available_dates]\n\"2024-06-15\" = \"a.csv\"\n",
    );

    let err = ConfigLoader::load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_missing_file_converts_to_traffic_error() {
    let dir = create_temp_dir();
    let err = ConfigLoader::load_config(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));

    let err: TrafficError = err.into();
    assert_eq!(err.category(), "config");
}
