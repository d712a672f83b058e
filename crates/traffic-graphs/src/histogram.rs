//! Hourly vehicle counts for the two surveyed junctions.

use traffic_analysis::{line_of, TrafficRecord};
use traffic_common::{Result, SurveyDate, TrafficError, ELM_AVENUE, HANLEY_HIGHWAY, HOURS_PER_DAY};

/// Caption under the x-axis.
pub const X_AXIS_CAPTION: &str = "Hours 00:00 to 24:00";

/// One junction's vehicle counts for each hour of the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramSeries {
    /// Junction name, used in the legend.
    pub name: String,
    /// Vehicle count per hour, index 0 is midnight.
    pub counts: [u64; HOURS_PER_DAY],
}

impl HistogramSeries {
    /// An all-zero series.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counts: [0; HOURS_PER_DAY],
        }
    }

    /// Sum over all hours.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Two-series histogram, Elm Avenue first and Hanley Highway second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyHistogram {
    /// Chart title including the survey date.
    pub title: String,
    /// Elm Avenue/Rabbit Road then Hanley Highway/Westway.
    pub series: [HistogramSeries; 2],
}

impl HourlyHistogram {
    /// Buckets every record at either surveyed junction by hour.
    ///
    /// Records at other junctions are skipped without parsing their time.
    pub fn from_records(records: &[TrafficRecord], date: &SurveyDate) -> Result<Self> {
        let mut series = [
            HistogramSeries::new(ELM_AVENUE),
            HistogramSeries::new(HANLEY_HIGHWAY),
        ];

        for (index, record) in records.iter().enumerate() {
            let Some(slot) = series
                .iter()
                .position(|s| record.at_junction(&s.name))
            else {
                continue;
            };

            let line = line_of(index);
            let hour = record.hour(line)? as usize;
            if hour >= HOURS_PER_DAY {
                return Err(TrafficError::malformed(
                    line,
                    format!("hour {hour} is outside the day"),
                ));
            }
            series[slot].counts[hour] += 1;
        }

        Ok(Self {
            title: histogram_title(date),
            series,
        })
    }

    /// Largest single bin across both series.
    pub fn max_count(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.counts.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// `Histogram of Vehicle Frequency per Hour (DD/MM/YYYY)`
pub fn histogram_title(date: &SurveyDate) -> String {
    format!("Histogram of Vehicle Frequency per Hour ({})", date.display())
}

/// File name of the chart image for a `DDMMYYYY` key.
pub fn histogram_file_name(key: &str) -> String {
    format!("histogram_{key}.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use traffic_analysis::load_from_reader;
    use traffic_common::test_utils::csv_fixtures::{csv_document, sample_csv, CsvRow};

    fn date() -> SurveyDate {
        SurveyDate::new(15, 6, 2024)
    }

    #[test]
    fn test_sample_day_buckets() {
        let records = load_from_reader(sample_csv().as_bytes()).unwrap();
        let histogram = HourlyHistogram::from_records(&records, &date()).unwrap();

        let [elm, hanley] = &histogram.series;
        assert_eq!(elm.name, ELM_AVENUE);
        assert_eq!(elm.counts[7], 1);
        assert_eq!(elm.counts[8], 2);
        assert_eq!(elm.counts[17], 1);
        assert_eq!(elm.total(), 6);
        assert_eq!(hanley.counts[6], 1);
        assert_eq!(hanley.counts[17], 2);
        assert_eq!(hanley.total(), 4);
        assert_eq!(histogram.max_count(), 2);
        assert_eq!(
            histogram.title,
            "Histogram of Vehicle Frequency per Hour (15/06/2024)"
        );
    }

    #[test]
    fn test_other_junctions_are_skipped() {
        let doc = csv_document(&[
            CsvRow::new("Station Road/Park Lane", "Car").at("late"),
            CsvRow::new(ELM_AVENUE, "Car").at("23:10:00"),
        ]);
        let records = load_from_reader(doc.as_bytes()).unwrap();
        let histogram = HourlyHistogram::from_records(&records, &date()).unwrap();
        assert_eq!(histogram.series[0].counts[23], 1);
        assert_eq!(histogram.series[1].total(), 0);
    }

    #[test]
    fn test_hour_out_of_range() {
        let doc = csv_document(&[CsvRow::new(HANLEY_HIGHWAY, "Car").at("24:00:00")]);
        let records = load_from_reader(doc.as_bytes()).unwrap();
        let err = HourlyHistogram::from_records(&records, &date()).unwrap_err();
        assert!(matches!(err, TrafficError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_empty_histogram() {
        let histogram = HourlyHistogram::from_records(&[], &date()).unwrap();
        assert_eq!(histogram.max_count(), 0);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(histogram_file_name("21062024"), "histogram_21062024.png");
    }
}
