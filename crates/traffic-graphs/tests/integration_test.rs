//! Integration tests for traffic-graphs crate.
//!
//! These tests verify histogram bucketing and layout over generated surveys.

use proptest::prelude::*;
use traffic_analysis::{load_from_reader, TrafficRecord};
use traffic_common::test_utils::csv_fixtures::{csv_document, sample_csv, CsvRow};
use traffic_common::test_utils::init_test_logging;
use traffic_common::test_utils::property_testing::{junction_strategy, time_of_day_strategy};
use traffic_common::{SurveyDate, ELM_AVENUE, HANLEY_HIGHWAY};
use traffic_config::ChartConfig;
use traffic_graphs::{ChartLayout, ChartStyle, HourlyHistogram};

fn date() -> SurveyDate {
    SurveyDate::new(16, 6, 2024)
}

#[test]
fn test_sample_day_layout() {
    init_test_logging();

    let records = load_from_reader(sample_csv().as_bytes()).unwrap();
    let histogram = HourlyHistogram::from_records(&records, &date()).unwrap();
    let layout = ChartStyle::from(&ChartConfig::default()).layout;
    let bars = layout.bars(&histogram);

    let tallest: Vec<_> = bars
        .iter()
        .filter(|b| (b.height() - layout.plot_height()).abs() < f64::EPSILON)
        .map(|b| (b.series, b.hour))
        .collect();
    assert_eq!(tallest, vec![(0, 8), (1, 17)]);
}

#[test]
fn test_custom_layout_from_config() {
    let config = ChartConfig {
        width: 480,
        height: 320,
        margin: 40,
        ..ChartConfig::default()
    };
    let layout = ChartStyle::from(&config).layout;
    assert_eq!(layout.plot_width(), 400.0);
    assert_eq!(layout.plot_height(), 240.0);
    assert_eq!(layout.baseline(), 280.0);
}

#[test]
fn test_unparsable_hour_at_survey_junction() {
    let doc = csv_document(&[
        CsvRow::new(ELM_AVENUE, "Car"),
        CsvRow::new(HANLEY_HIGHWAY, "Car").at("xx:15:00"),
    ]);
    let records = load_from_reader(doc.as_bytes()).unwrap();
    let err = HourlyHistogram::from_records(&records, &date()).unwrap_err();
    assert!(err.to_string().contains("line 3"));
}

fn records_strategy() -> impl Strategy<Value = Vec<TrafficRecord>> {
    prop::collection::vec((junction_strategy(), time_of_day_strategy()), 0..80).prop_map(
        |rows| {
            let rows: Vec<CsvRow> = rows
                .iter()
                .map(|(junction, time)| CsvRow::new(junction, "Car").at(time))
                .collect();
            load_from_reader(csv_document(&rows).as_bytes()).unwrap()
        },
    )
}

proptest! {
    #[test]
    fn prop_bins_sum_to_junction_counts(records in records_strategy()) {
        let histogram = HourlyHistogram::from_records(&records, &date()).unwrap();

        for series in &histogram.series {
            let expected = records.iter().filter(|r| r.at_junction(&series.name)).count() as u64;
            prop_assert_eq!(series.total(), expected);
        }
    }

    #[test]
    fn prop_bars_fit_plot_area(
        records in records_strategy(),
        width in 200u32..2000,
        height in 200u32..1500,
        margin in 0u32..90,
    ) {
        let histogram = HourlyHistogram::from_records(&records, &date()).unwrap();
        let layout = ChartLayout { width, height, margin };

        for bar in layout.bars(&histogram) {
            prop_assert!(bar.height() >= 0.0);
            prop_assert!(bar.height() <= layout.plot_height() + 1e-9);
            prop_assert!(bar.top_left.x >= layout.left());
            prop_assert!(bar.bottom_right.x <= layout.right() + 1e-9);
        }
    }
}
