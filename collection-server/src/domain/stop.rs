//! Route stops.

/// A single street entry within a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Street or location name, e.g. "Alfareros".
    pub street_name: String,

    /// Free-form schedule detail, e.g. "8:00 - 9:00".
    pub schedule_detail: String,
}

impl Stop {
    /// Create a new stop.
    pub fn new(street_name: impl Into<String>, schedule_detail: impl Into<String>) -> Self {
        Self {
            street_name: street_name.into(),
            schedule_detail: schedule_detail.into(),
        }
    }
}
