//! Schedule dataset loading.
//!
//! The schedule ships as a static JSON file next to the binary. It is read
//! once at startup, converted into domain types and validated; a dataset
//! that violates any schedule invariant is rejected as a whole.

mod convert;
mod error;
mod loader;
mod types;

pub use convert::convert_schedule;
pub use error::DatasetError;
pub use loader::{load_schedule, parse_schedule};
pub use types::{DayRecord, RouteRecord};
