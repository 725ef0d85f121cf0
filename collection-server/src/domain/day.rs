//! Schedule days.

use std::fmt;

use super::Route;

/// Position of a day within the schedule.
///
/// Day ids are 0-based and dense: the day at position `i` of a valid
/// [`Schedule`](super::Schedule) always has id `i`, so an id can index
/// directly into per-day state such as visibility flags.
///
/// # Examples
///
/// ```
/// use collection_server::domain::DayId;
///
/// let monday = DayId::new(0);
/// assert_eq!(monday.index(), 0);
/// assert_eq!(monday.to_string(), "0");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayId(usize);

impl DayId {
    /// Create a day id from a 0-based index.
    pub const fn new(index: usize) -> Self {
        DayId(index)
    }

    /// Returns the 0-based index of this day.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayId({})", self.0)
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One weekday entry in the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    /// Stable 0-based index of the day.
    pub id: DayId,

    /// Display label, e.g. "Lunes".
    pub label: String,

    /// Routes collected on this day, in display order.
    pub routes: Vec<Route>,
}

impl Day {
    /// Create a new day.
    pub fn new(id: DayId, label: impl Into<String>, routes: Vec<Route>) -> Self {
        Self {
            id,
            label: label.into(),
            routes,
        }
    }

    /// Number of stops across all routes of the day.
    pub fn stop_count(&self) -> usize {
        self.routes.iter().map(|r| r.stops.len()).sum()
    }
}
