//! Reading the bundled dataset file.

use std::path::Path;

use tracing::debug;

use crate::domain::Schedule;

use super::convert::convert_schedule;
use super::error::DatasetError;
use super::types::DayRecord;

/// Parse a schedule from JSON text.
pub fn parse_schedule(json: &str) -> Result<Schedule, DatasetError> {
    let records: Vec<DayRecord> = serde_json::from_str(json)?;
    convert_schedule(records)
}

/// Load and validate the schedule from a JSON file.
///
/// The file is read once; the returned schedule is never reloaded.
pub fn load_schedule(path: impl AsRef<Path>) -> Result<Schedule, DatasetError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = json.len(), "read dataset");
    parse_schedule(&json)
}
