//! Integration tests for traffic-survey crate.
//!
//! These tests drive whole sessions through scripted console input against
//! fixture datasets in a temporary directory.

use proptest::prelude::*;
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use traffic_analysis::read_report;
use traffic_common::test_utils::csv_fixtures::{csv_document, sample_csv, CsvRow};
use traffic_common::test_utils::{create_temp_dir, init_test_logging, write_fixture_file};
use traffic_common::{Result, TrafficError, ELM_AVENUE};
use traffic_config::Config;
use traffic_graphs::{ChartRenderer, HourlyHistogram};
use traffic_survey::{check_day, check_month, DateInputError, Session, SurveyError};

/// Counts render calls without touching the filesystem or fonts.
struct CountingRenderer {
    calls: Rc<Cell<usize>>,
    fail: bool,
}

impl ChartRenderer for CountingRenderer {
    fn render(&self, _histogram: &HourlyHistogram, _path: &Path) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            Err(TrafficError::chart("no display"))
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

fn config_for(dir: &Path) -> Config {
    let mut config = Config::default();
    config.data.data_dir = dir.join("data");
    config.report.output_dir = dir.join("out");
    config.chart.enabled = false;
    config
}

fn run_session(config: Config, script: &str) -> (traffic_survey::SurveyResult<()>, String) {
    let mut output = Vec::new();
    let result = Session::new(config, script.as_bytes(), &mut output).run();
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_full_session_writes_report() {
    init_test_logging();

    let dir = create_temp_dir();
    let config = config_for(dir.path());
    write_fixture_file(
        &config.data.data_dir,
        "traffic_data15062024.csv",
        &sample_csv(),
    );

    let (result, output) = run_session(config.clone(), "15\n06\n2024\nN\n");
    result.unwrap();

    let report = config.report.output_dir.join("results_15062024.txt");
    assert!(output.contains("Analyzing data for 15062024...\n"));
    assert!(output.contains("Total Vehicles: 10\n"));
    assert!(output.contains("Peak Hour Hanley: Between 17:00 and 18:00\n"));
    assert!(output.contains(&format!("Results saved to {}.\n", report.display())));
    assert!(output.ends_with(
        "Do you want to select a data file for a different date? (Y/N): Exiting the program.\n"
    ));
    assert!(!output.contains("Generating histogram"));

    let pairs = read_report(&report).unwrap();
    assert_eq!(pairs.len(), 15);
    assert_eq!(pairs[9], ("Elm Vehicles".to_string(), "6".to_string()));
}

#[test]
fn test_missing_dataset_continues_to_next_date() {
    let dir = create_temp_dir();
    let config = config_for(dir.path());
    write_fixture_file(
        &config.data.data_dir,
        "traffic_data21062024.csv",
        &sample_csv(),
    );

    let (result, output) = run_session(config.clone(), "15\n6\n2024\nx\ny\n21\n6\n2024\nn\n");
    result.unwrap();

    assert!(output.contains("Error loading data: Dataset not found: "));
    assert!(output.contains("Invalid input. Please enter 'Y' for yes or 'N' for no.\n"));
    assert!(config
        .report
        .output_dir
        .join("results_21062024.txt")
        .is_file());
    assert!(!config
        .report
        .output_dir
        .join("results_15062024.txt")
        .exists());
}

#[test]
fn test_single_junction_dataset_reports_processing_error() {
    let dir = create_temp_dir();
    let config = config_for(dir.path());
    write_fixture_file(
        &config.data.data_dir,
        "traffic_data16062024.csv",
        &csv_document(&[CsvRow::new(ELM_AVENUE, "Car")]),
    );

    let (result, output) = run_session(config.clone(), "16\n06\n2024\nN\n");
    result.unwrap();

    assert!(output.contains(
        "Error processing data: No records found for junction 'Hanley Highway/Westway'\n"
    ));
    assert!(!output.contains("Results saved"));
    assert!(!config.report.output_dir.exists());
}

#[test]
fn test_histogram_and_dismiss_prompt() {
    let dir = create_temp_dir();
    let mut config = config_for(dir.path());
    config.chart.enabled = true;
    write_fixture_file(
        &config.data.data_dir,
        "traffic_data15062024.csv",
        &sample_csv(),
    );

    let calls = Rc::new(Cell::new(0));
    let renderer = CountingRenderer {
        calls: Rc::clone(&calls),
        fail: false,
    };
    let mut output = Vec::new();
    let result = Session::with_renderer(
        config.clone(),
        "15\n06\n2024\n\nN\n".as_bytes(),
        &mut output,
        Box::new(renderer),
    )
    .run();
    result.unwrap();

    let output = String::from_utf8(output).unwrap();
    let image = config.report.output_dir.join("histogram_15062024.png");
    assert_eq!(calls.get(), 1);
    assert!(output.contains("Generating histogram...\n"));
    assert!(output.contains(&format!("Histogram saved to {}.\n", image.display())));
    assert!(output.contains("Press Enter to close the histogram..."));
}

#[test]
fn test_histogram_failure_is_reported() {
    let dir = create_temp_dir();
    let mut config = config_for(dir.path());
    config.chart.enabled = true;
    write_fixture_file(
        &config.data.data_dir,
        "traffic_data15062024.csv",
        &sample_csv(),
    );

    let renderer = CountingRenderer {
        calls: Rc::new(Cell::new(0)),
        fail: true,
    };
    let mut output = Vec::new();
    Session::with_renderer(
        config,
        "15\n06\n2024\nN\n".as_bytes(),
        &mut output,
        Box::new(renderer),
    )
    .run()
    .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Error generating histogram: Chart error: no display\n"));
    assert!(!output.contains("Press Enter"));
}

#[test]
fn test_input_closed_mid_session() {
    let dir = create_temp_dir();
    let (result, _) = run_session(config_for(dir.path()), "15\n");
    assert!(matches!(result, Err(SurveyError::InputClosed)));
}

proptest! {
    #[test]
    fn prop_day_range(day in -100i32..100) {
        prop_assert_eq!(check_day(day).is_ok(), (1..=31).contains(&day));
        if !(1..=31).contains(&day) {
            prop_assert_eq!(check_day(day), Err(DateInputError::DayOutOfRange));
        }
    }

    #[test]
    fn prop_month_range(month in -100i32..100) {
        prop_assert_eq!(check_month(month).is_ok(), (1..=12).contains(&month));
    }
}
