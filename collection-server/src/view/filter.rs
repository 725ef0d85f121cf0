//! The three schedule filters.
//!
//! Each filter is a pure function over borrowed schedule data. They are
//! composed in a fixed order by [`derive_view`](super::derive_view):
//! day visibility, then route name, then street matcher.

use crate::domain::{Day, Route, Stop};

use super::matcher::StreetMatcher;
use super::state::{RouteSelection, ViewState};

/// Days whose visibility flag is set.
pub fn visible_days<'a>(days: &'a [Day], state: &ViewState) -> Vec<&'a Day> {
    days.iter().filter(|d| state.is_day_visible(d.id)).collect()
}

/// Routes that pass the route selector.
pub fn selected_routes<'a>(routes: &'a [Route], selection: &RouteSelection) -> Vec<&'a Route> {
    routes.iter().filter(|r| selection.matches(r)).collect()
}

/// Stops whose street name passes the matcher.
pub fn matching_stops<'a>(stops: &'a [Stop], matcher: &StreetMatcher) -> Vec<&'a Stop> {
    stops
        .iter()
        .filter(|s| matcher.matches(&s.street_name))
        .collect()
}
