//! Interactive survey date prompt.

use crate::error::{SurveyError, SurveyResult};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use thiserror::Error;
use tracing::debug;
use traffic_common::SurveyDate;
use traffic_config::{AvailableDates, DataConfig};

/// Why an answer at the date prompt was rejected.
///
/// Each rejection restarts the prompt sequence from the day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateInputError {
    /// The answer is not an integer.
    #[error("Please enter a valid number for day, month, or year.")]
    NotANumber,

    /// Day outside 1 to 31.
    #[error("Day must be between 1 and 31.")]
    DayOutOfRange,

    /// Month outside 1 to 12.
    #[error("Month must be between 1 and 12.")]
    MonthOutOfRange,

    /// Year outside the configured range.
    #[error("Year must be between {min} and {max}.")]
    YearOutOfRange {
        /// Earliest accepted year.
        min: i32,
        /// Latest accepted year.
        max: i32,
    },

    /// No dataset is recorded for the date.
    #[error("Data not available for this date. Please try again.")]
    Unavailable,
}

/// A date the user picked together with its dataset file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDate {
    /// The chosen day.
    pub date: SurveyDate,
    /// Dataset file recorded on that day.
    pub file_name: String,
}

/// Parses one typed date component.
pub fn parse_component(input: &str) -> Result<i32, DateInputError> {
    input
        .trim()
        .parse()
        .map_err(|_| DateInputError::NotANumber)
}

/// Accepts a day of month in 1 to 31.
pub fn check_day(day: i32) -> Result<u32, DateInputError> {
    match u32::try_from(day) {
        Ok(day @ 1..=31) => Ok(day),
        _ => Err(DateInputError::DayOutOfRange),
    }
}

/// Accepts a month in 1 to 12.
pub fn check_month(month: i32) -> Result<u32, DateInputError> {
    match u32::try_from(month) {
        Ok(month @ 1..=12) => Ok(month),
        _ => Err(DateInputError::MonthOutOfRange),
    }
}

/// Accepts a year inside `years`.
pub fn check_year(year: i32, years: &RangeInclusive<i32>) -> Result<i32, DateInputError> {
    if years.contains(&year) {
        Ok(year)
    } else {
        Err(DateInputError::YearOutOfRange {
            min: *years.start(),
            max: *years.end(),
        })
    }
}

/// Looks the date up in the available-dates table.
pub fn resolve(date: SurveyDate, dates: &AvailableDates) -> Result<SelectedDate, DateInputError> {
    dates
        .file_for(&date.key())
        .map(|file| SelectedDate {
            date,
            file_name: file.to_string(),
        })
        .ok_or(DateInputError::Unavailable)
}

/// Writes `prompt`, then reads one line without its line ending.
///
/// # Errors
///
/// [`SurveyError::InputClosed`] at end of input.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> SurveyResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SurveyError::InputClosed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompts for a day, month and year until an available date is entered.
#[derive(Debug, Clone)]
pub struct DateSelector<'a> {
    dates: &'a AvailableDates,
    years: RangeInclusive<i32>,
}

impl<'a> DateSelector<'a> {
    /// Creates a selector over a dates table and accepted year range.
    pub const fn new(dates: &'a AvailableDates, years: RangeInclusive<i32>) -> Self {
        Self { dates, years }
    }

    /// Creates a selector from the data configuration.
    pub const fn from_config(data: &'a DataConfig) -> Self {
        Self::new(&data.available_dates, data.min_year..=data.max_year)
    }

    /// Prompts until the user enters an available date.
    pub fn select<R, W>(&self, input: &mut R, output: &mut W) -> SurveyResult<SelectedDate>
    where
        R: BufRead,
        W: Write,
    {
        loop {
            match self.attempt(input, output)? {
                Ok(selected) => {
                    debug!(key = %selected.date.key(), file = %selected.file_name, "Date selected");
                    return Ok(selected);
                }
                Err(err) => {
                    debug!(error = %err, "Rejected date input");
                    writeln!(output, "Error: {err}")?;
                }
            }
        }
    }

    /// One pass through the three prompts; the inner error is a rejected answer.
    fn attempt<R, W>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> SurveyResult<Result<SelectedDate, DateInputError>>
    where
        R: BufRead,
        W: Write,
    {
        let answer = prompt_line(input, output, "Enter the day (DD): ")?;
        let day = match parse_component(&answer).and_then(check_day) {
            Ok(day) => day,
            Err(err) => return Ok(Err(err)),
        };

        let answer = prompt_line(input, output, "Enter the month (MM): ")?;
        let month = match parse_component(&answer).and_then(check_month) {
            Ok(month) => month,
            Err(err) => return Ok(Err(err)),
        };

        let answer = prompt_line(input, output, "Enter the year (YYYY): ")?;
        let year = match parse_component(&answer).and_then(|y| check_year(y, &self.years)) {
            Ok(year) => year,
            Err(err) => return Ok(Err(err)),
        };

        Ok(resolve(SurveyDate::new(day, month, year), self.dates))
    }
}
