//! The full collection schedule.

use std::collections::HashSet;

use super::{Day, DayId, ScheduleError, is_reserved_route_name};

/// An ordered, validated sequence of days.
///
/// All invariants are checked once in [`Schedule::new`]; code holding a
/// `Schedule` can rely on them:
///
/// - the day at position `i` has id `i`;
/// - route ids are unique within each day;
/// - placeholder routes have no stops;
/// - route names are non-blank and never a selection sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    days: Vec<Day>,
}

impl Schedule {
    /// Validate and wrap a list of days.
    pub fn new(days: Vec<Day>) -> Result<Self, ScheduleError> {
        for (position, day) in days.iter().enumerate() {
            if day.id.index() != position {
                return Err(ScheduleError::DayOutOfSequence {
                    position,
                    found: day.id,
                });
            }
            validate_routes(day)?;
        }

        Ok(Self { days })
    }

    /// All days in schedule order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Look up a day by id.
    pub fn day(&self, id: DayId) -> Option<&Day> {
        self.days.get(id.index())
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the schedule has no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of routes, placeholders included.
    pub fn route_count(&self) -> usize {
        self.days.iter().map(|d| d.routes.len()).sum()
    }

    /// Total number of stops.
    pub fn stop_count(&self) -> usize {
        self.days.iter().map(Day::stop_count).sum()
    }

    /// Distinct route names in order of first appearance.
    ///
    /// These are the options of the route selector. Placeholder routes
    /// contribute nothing.
    pub fn route_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.days
            .iter()
            .flat_map(|d| d.routes.iter())
            .filter_map(|r| r.name())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

fn validate_routes(day: &Day) -> Result<(), ScheduleError> {
    let mut ids = HashSet::new();

    for route in &day.routes {
        if !ids.insert(route.id.as_str()) {
            return Err(ScheduleError::DuplicateRouteId {
                day: day.id,
                route: route.id.to_string(),
            });
        }

        match route.name() {
            None if !route.stops.is_empty() => {
                return Err(ScheduleError::UnnamedRouteWithStops {
                    day: day.id,
                    route: route.id.to_string(),
                    stops: route.stops.len(),
                });
            }
            None => {}
            Some(name) if name.trim().is_empty() => {
                return Err(ScheduleError::BlankRouteName {
                    day: day.id,
                    route: route.id.to_string(),
                });
            }
            Some(name) if is_reserved_route_name(name) => {
                return Err(ScheduleError::ReservedRouteName {
                    day: day.id,
                    route: route.id.to_string(),
                    name: name.to_string(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}
