//! Domain error types.
//!
//! These errors represent schedule invariant violations detected when a
//! [`Schedule`](super::Schedule) is assembled. They are distinct from
//! file and parse errors, which live in the dataset layer.

use super::DayId;

/// Invariant violations in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Day ids must equal their position in the schedule
    #[error("day at position {position} has id {found}; ids must run 0, 1, 2, ... in order")]
    DayOutOfSequence { position: usize, found: DayId },

    /// Two routes of the same day share an id
    #[error("day {day}: duplicate route id {route}")]
    DuplicateRouteId { day: DayId, route: String },

    /// A placeholder route carries stops
    #[error("day {day}: route {route} has no name but {stops} stops")]
    UnnamedRouteWithStops {
        day: DayId,
        route: String,
        stops: usize,
    },

    /// A route name is empty or whitespace
    #[error("day {day}: route {route} has a blank name")]
    BlankRouteName { day: DayId, route: String },

    /// A route name collides with a selection sentinel
    #[error("day {day}: route {route} uses reserved name {name:?}")]
    ReservedRouteName {
        day: DayId,
        route: String,
        name: String,
    },
}
