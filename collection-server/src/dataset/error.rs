//! Dataset loading error types.

use std::path::PathBuf;

use crate::domain::{DayId, ScheduleError};

/// Errors that can occur while loading the schedule dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read
    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for the dataset shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A place entry is not a `[street, detail]` pair
    #[error("day {day}, route {route}: place {index} has {len} fields, expected 2")]
    MalformedPlace {
        day: DayId,
        route: String,
        index: usize,
        len: usize,
    },

    /// The data parsed but violates a schedule invariant
    #[error("invalid schedule: {0}")]
    Invalid(#[from] ScheduleError),
}
