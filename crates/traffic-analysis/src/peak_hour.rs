//! Busiest hour of the day at a junction.

use crate::record::{line_of, TrafficRecord};
use std::collections::BTreeMap;
use std::fmt;
use traffic_common::{Result, TrafficError};

/// Records counted in one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourBucket {
    /// Hour text as first seen in the data, e.g. `"08"`.
    pub label: String,
    /// Number of records in the hour.
    pub count: u64,
}

/// The busiest hour at a junction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakHour {
    /// Numeric hour of day.
    pub hour: u32,
    /// Hour text as first seen in the data.
    pub label: String,
    /// Records in the hour.
    pub count: u64,
}

impl PeakHour {
    /// Human-readable span, e.g. `Between 08:00 and 9:00`.
    pub fn describe(&self) -> String {
        format!("Between {}:00 and {}:00", self.label, self.hour + 1)
    }
}

impl fmt::Display for PeakHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Groups a junction's records by numeric hour.
pub fn hourly_counts(
    records: &[TrafficRecord],
    junction: &str,
) -> Result<BTreeMap<u32, HourBucket>> {
    let mut buckets: BTreeMap<u32, HourBucket> = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        if !record.at_junction(junction) {
            continue;
        }
        let hour = record.hour(line_of(index))?;
        buckets
            .entry(hour)
            .or_insert_with(|| HourBucket {
                label: record.hour_label().to_string(),
                count: 0,
            })
            .count += 1;
    }

    Ok(buckets)
}

/// Finds the hour with the most records at `junction`.
///
/// Ties go to the earliest hour.
pub fn peak_hour(records: &[TrafficRecord], junction: &str) -> Result<PeakHour> {
    let buckets = hourly_counts(records, junction)?;

    let mut peak: Option<(u32, &HourBucket)> = None;
    for (&hour, bucket) in &buckets {
        if peak.map_or(true, |(_, best)| bucket.count > best.count) {
            peak = Some((hour, bucket));
        }
    }

    let (hour, bucket) = peak.ok_or_else(|| TrafficError::no_junction_records(junction))?;
    Ok(PeakHour {
        hour,
        label: bucket.label.clone(),
        count: bucket.count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::record_at;
    use traffic_common::{ELM_AVENUE, HANLEY_HIGHWAY};

    #[test]
    fn test_peak_hour() {
        let records = vec![
            record_at(HANLEY_HIGHWAY, "08:10:00"),
            record_at(HANLEY_HIGHWAY, "08:50:00"),
            record_at(HANLEY_HIGHWAY, "09:00:00"),
            record_at(ELM_AVENUE, "09:00:00"),
            record_at(ELM_AVENUE, "09:30:00"),
        ];

        let peak = peak_hour(&records, HANLEY_HIGHWAY).unwrap();
        assert_eq!(peak.hour, 8);
        assert_eq!(peak.count, 2);
        assert_eq!(peak.describe(), "Between 08:00 and 9:00");
    }

    #[test]
    fn test_tie_goes_to_earliest_hour() {
        let records = vec![
            record_at(HANLEY_HIGHWAY, "19:00:00"),
            record_at(HANLEY_HIGHWAY, "07:00:00"),
            record_at(HANLEY_HIGHWAY, "13:00:00"),
        ];
        assert_eq!(peak_hour(&records, HANLEY_HIGHWAY).unwrap().hour, 7);
    }

    #[test]
    fn test_label_is_kept_as_written() {
        let records = vec![record_at(HANLEY_HIGHWAY, " 7:15:00")];
        let peak = peak_hour(&records, HANLEY_HIGHWAY).unwrap();
        assert_eq!(peak.hour, 7);
        assert_eq!(peak.describe(), "Between  7:00 and 8:00");
    }

    #[test]
    fn test_last_hour_of_day() {
        let records = vec![record_at(ELM_AVENUE, "23:59:00")];
        assert_eq!(
            peak_hour(&records, ELM_AVENUE).unwrap().describe(),
            "Between 23:00 and 24:00"
        );
    }

    #[test]
    fn test_no_records_for_junction() {
        let records = vec![record_at(ELM_AVENUE, "08:00:00")];
        let err = peak_hour(&records, HANLEY_HIGHWAY).unwrap_err();
        assert!(matches!(err, TrafficError::NoJunctionRecords { .. }));
    }

    #[test]
    fn test_bad_hour_is_malformed() {
        let records = vec![
            record_at(HANLEY_HIGHWAY, "08:00:00"),
            record_at(HANLEY_HIGHWAY, "noon"),
        ];
        let err = hourly_counts(&records, HANLEY_HIGHWAY).unwrap_err();
        assert!(matches!(err, TrafficError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_other_junction_hours_are_not_parsed() {
        let records = vec![
            record_at(HANLEY_HIGHWAY, "08:00:00"),
            record_at(ELM_AVENUE, "noon"),
        ];
        let counts = hourly_counts(&records, HANLEY_HIGHWAY).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&8].count, 1);
    }
}
