//! Common type definitions and domain constants.

use chrono::NaiveDate;
use std::fmt;

/// Junction monitored on the western approach.
pub const ELM_AVENUE: &str = "Elm Avenue/Rabbit Road";

/// Junction monitored on the eastern approach.
pub const HANLEY_HIGHWAY: &str = "Hanley Highway/Westway";

/// Number of hourly buckets in a survey day.
pub const HOURS_PER_DAY: usize = 24;

/// Vehicle type labels as they appear in the survey files.
pub mod vehicle {
    /// Heavy goods vehicle.
    pub const TRUCK: &str = "Truck";
    /// Bus or coach.
    pub const BUS: &str = "Bus";
    /// Pedal bicycle.
    pub const BIKE: &str = "Bike";
    /// Motorcycle.
    pub const MOTORBIKE: &str = "Motorbike";
    /// Scooter.
    pub const SCOOTER: &str = "Scooter";

    /// Vehicle types counted as two-wheeled.
    pub const TWO_WHEELED: [&str; 3] = [BIKE, MOTORBIKE, SCOOTER];
}

/// A survey day chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurveyDate {
    /// Day of month, 1-31.
    pub day: u32,
    /// Month, 1-12.
    pub month: u32,
    /// Four digit year.
    pub year: i32,
}

impl SurveyDate {
    /// Creates a survey date without calendar validation.
    pub const fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// The `DDMMYYYY` key used by the available-dates table and output file names.
    pub fn key(&self) -> String {
        format!("{:02}{:02}{}", self.day, self.month, self.year)
    }

    /// Human readable `DD/MM/YYYY` form used in chart titles.
    pub fn display(&self) -> String {
        format!("{:02}/{:02}/{}", self.day, self.month, self.year)
    }

    /// The matching calendar date, if the triple is a real day.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Parses a `DDMMYYYY` key back into a date.
    pub fn from_key(key: &str) -> Option<Self> {
        if key.len() != 8 || !key.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let day = key[0..2].parse().ok()?;
        let month = key[2..4].parse().ok()?;
        let year = key[4..8].parse().ok()?;
        Some(Self { day, month, year })
    }
}

impl fmt::Display for SurveyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<NaiveDate> for SurveyDate {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_zero_padded() {
        let date = SurveyDate::new(5, 6, 2024);
        assert_eq!(date.key(), "05062024");
        assert_eq!(date.display(), "05/06/2024");
        assert_eq!(format!("{date}"), "05/06/2024");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            SurveyDate::from_key("21062024"),
            Some(SurveyDate::new(21, 6, 2024))
        );
        assert_eq!(SurveyDate::from_key("2106202"), None);
        assert_eq!(SurveyDate::from_key("21-06-24"), None);
    }

    #[test]
    fn test_calendar_validation() {
        assert!(SurveyDate::new(15, 6, 2024).to_naive_date().is_some());
        assert!(SurveyDate::new(31, 2, 2024).to_naive_date().is_none());
    }
}
