//! Persists statistics as a plain `Name: value` text file.

use crate::statistics::SurveyStatistics;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use traffic_common::{Result, TrafficError};

const SEPARATOR: &str = ": ";

/// File name of the report for a `DDMMYYYY` key.
pub fn report_file_name(key: &str) -> String {
    format!("results_{key}.txt")
}

/// One `Name: value` line per statistic, in report order.
pub fn format_entries(stats: &SurveyStatistics) -> Vec<String> {
    stats
        .entries()
        .into_iter()
        .map(|(name, value)| format!("{name}{SEPARATOR}{value}"))
        .collect()
}

/// Writes the report into `dir`, creating it when missing.
///
/// Returns the path of the file written.
#[instrument(skip(stats, dir), fields(dir = %dir.as_ref().display()))]
pub fn write_report<P: AsRef<Path>>(
    stats: &SurveyStatistics,
    dir: P,
    key: &str,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| {
        TrafficError::report_with_source(
            format!("cannot create output directory {}", dir.display()),
            e,
        )
    })?;

    let path = dir.join(report_file_name(key));
    let mut content = format_entries(stats).join("\n");
    content.push('\n');

    fs::write(&path, content).map_err(|e| {
        TrafficError::report_with_source(format!("cannot write {}", path.display()), e)
    })?;

    info!(path = %path.display(), "Wrote survey report");
    Ok(path)
}

/// Reads a report back into ordered `(name, value)` pairs.
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<Vec<(String, String)>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        TrafficError::report_with_source(format!("cannot read {}", path.display()), e)
    })?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.split_once(SEPARATOR)
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| {
                    TrafficError::report(format!(
                        "line {} of {} is not a 'Name: value' pair",
                        index + 1,
                        path.display()
                    ))
                })
        })
        .collect()
}
