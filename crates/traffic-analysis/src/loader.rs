//! Reads a survey CSV file into memory.

use crate::record::TrafficRecord;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info, instrument};
use traffic_common::{Result, TrafficError};

/// Loads every record from a headered CSV file.
///
/// A missing file is reported as [`TrafficError::NotFound`], a row that
/// cannot be decoded as [`TrafficError::MalformedRecord`] with its CSV line.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<TrafficRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => TrafficError::not_found(path),
        _ => TrafficError::Io(err),
    })?;

    let records = load_from_reader(file)?;
    info!(records = records.len(), "Loaded survey dataset");
    Ok(records)
}

/// Loads every record from any CSV source.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<TrafficRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let records = csv_reader
        .deserialize::<TrafficRecord>()
        .map(|row| row.map_err(convert_csv_error))
        .collect::<Result<Vec<_>>>()?;

    debug!(records = records.len(), "Decoded CSV rows");
    Ok(records)
}

fn convert_csv_error(err: csv::Error) -> TrafficError {
    let line = err.position().map_or(0, csv::Position::line);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => TrafficError::Io(io_err),
        _ => TrafficError::malformed(line, message),
    }
}
