//! Deriving the displayed schedule from data and UI state.

use crate::domain::{Day, Route, Schedule, Stop};

use super::filter::{matching_stops, selected_routes, visible_days};
use super::matcher::StreetMatcher;
use super::state::ViewState;

/// How route cards should be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Several route cards per row (all routes selected).
    Grid,
    /// One full-width card per row (a single route selected).
    Single,
}

impl Layout {
    /// Lowercase name, used as a CSS class and in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::Single => "single",
        }
    }
}

/// The filtered schedule, borrowing from the underlying [`Schedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleView<'a> {
    pub layout: Layout,
    /// Visible days in schedule order. A day stays even if no routes survive.
    pub days: Vec<DayView<'a>>,
}

/// A visible day and its surviving routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView<'a> {
    pub day: &'a Day,
    pub routes: Vec<RouteView<'a>>,
}

/// A surviving route and its surviving stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteView<'a> {
    pub route: &'a Route,
    pub stops: Vec<&'a Stop>,
}

impl ScheduleView<'_> {
    /// Number of routes shown across all days.
    pub fn route_count(&self) -> usize {
        self.days.iter().map(|d| d.routes.len()).sum()
    }

    /// Number of stops shown across all days.
    pub fn stop_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.routes.iter())
            .map(|r| r.stops.len())
            .sum()
    }

    /// Iterate over every shown `(day, route, stop)` triple.
    pub fn rows(&self) -> impl Iterator<Item = (&Day, &Route, &Stop)> + '_ {
        self.days.iter().flat_map(|d| {
            d.routes
                .iter()
                .flat_map(move |r| r.stops.iter().map(move |s| (d.day, r.route, *s)))
        })
    }
}

/// Compute what to display.
///
/// Applies day visibility, then the route selector, then the street
/// matcher. While the matcher is active, routes left with no stops are
/// dropped from their day; with an empty matcher every selected route is
/// shown, placeholders included.
pub fn derive_view<'a>(schedule: &'a Schedule, state: &ViewState) -> ScheduleView<'a> {
    let matcher = StreetMatcher::new(state.matcher_text());
    let selection = state.selected_route();

    let days = visible_days(schedule.days(), state)
        .into_iter()
        .map(|day| {
            let routes = selected_routes(&day.routes, selection)
                .into_iter()
                .map(|route| RouteView {
                    route,
                    stops: matching_stops(&route.stops, &matcher),
                })
                .filter(|r| !matcher.is_active() || !r.stops.is_empty())
                .collect();
            DayView { day, routes }
        })
        .collect();

    let layout = if selection.is_all() {
        Layout::Grid
    } else {
        Layout::Single
    };

    ScheduleView { layout, days }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{DayId, RouteId};
    use crate::view::{RouteSelection, ViewEvent};
    use proptest::prelude::*;

    const NAMES: [&str; 3] = ["Norte", "Sur", "Centro"];
    const STREETS: [&str; 6] = ["Alfareros", "Juárez", "Hidalgo", "Pagaza", "Peña", "Vergel"];

    /// A random schedule: up to 7 days, each with up to 4 routes
    /// (some placeholders) of up to 5 stops.
    fn arb_schedule() -> impl Strategy<Value = Schedule> {
        let route = (
            proptest::option::of(0..NAMES.len()),
            proptest::collection::vec(0..STREETS.len(), 0..5),
        );
        let day = proptest::collection::vec(route, 0..4);
        proptest::collection::vec(day, 0..7).prop_map(|days| {
            let days = days
                .into_iter()
                .enumerate()
                .map(|(d, routes)| {
                    let routes = routes
                        .into_iter()
                        .enumerate()
                        .map(|(r, (name, stops))| {
                            let id = RouteId::new(format!("d{d}r{r}"));
                            match name {
                                None => Route::placeholder(id),
                                Some(n) => Route::named(
                                    id,
                                    NAMES[n],
                                    stops
                                        .into_iter()
                                        .map(|s| Stop::new(STREETS[s], "8:00"))
                                        .collect(),
                                ),
                            }
                        })
                        .collect();
                    Day::new(DayId::new(d), format!("Day {d}"), routes)
                })
                .collect();
            Schedule::new(days).unwrap()
        })
    }

    fn arb_selection() -> impl Strategy<Value = RouteSelection> {
        proptest::option::of(0..NAMES.len() + 1).prop_map(|n| match n {
            None => RouteSelection::All,
            Some(i) => RouteSelection::Named(NAMES.get(i).copied().unwrap_or("Oeste").to_string()),
        })
    }

    proptest! {
        /// Output days are exactly the visible days
        #[test]
        fn days_follow_visibility(schedule in arb_schedule(), flags in proptest::collection::vec(any::<bool>(), 7)) {
            let hidden = flags.iter().enumerate().filter(|(_, v)| !**v).map(|(i, _)| DayId::new(i));
            let state = ViewState::with_hidden(schedule.len(), hidden, "", RouteSelection::All);
            let view = derive_view(&schedule, &state);

            let shown: Vec<DayId> = view.days.iter().map(|d| d.day.id).collect();
            let expected: Vec<DayId> = schedule
                .days()
                .iter()
                .filter(|d| flags[d.id.index()])
                .map(|d| d.id)
                .collect();
            prop_assert_eq!(shown, expected);
        }

        /// A named selection only ever shows routes with that name
        #[test]
        fn named_selection_only_shows_that_name(schedule in arb_schedule(), selection in arb_selection(), text in "[a-zA-Z]{0,3}") {
            let state = ViewState::initial(schedule.len())
                .apply(ViewEvent::SelectRoute(selection.clone()))
                .apply(ViewEvent::SetMatcher(text));
            let view = derive_view(&schedule, &state);

            if let RouteSelection::Named(name) = &selection {
                for day in &view.days {
                    for route in &day.routes {
                        prop_assert_eq!(route.route.name(), Some(name.as_str()));
                    }
                }
            }
        }

        /// Every shown stop contains the matcher text, ignoring case
        #[test]
        fn shown_stops_match(schedule in arb_schedule(), text in "[a-zA-Zá]{1,3}") {
            let state = ViewState::initial(schedule.len())
                .apply(ViewEvent::SetMatcher(text.clone()));
            let view = derive_view(&schedule, &state);

            for (_, _, stop) in view.rows() {
                prop_assert!(stop.street_name.to_uppercase().contains(&text.to_uppercase()));
            }
        }

        /// Clearing the matcher gives back every stop of the selected routes
        #[test]
        fn empty_matcher_is_identity(schedule in arb_schedule(), selection in arb_selection(), text in "[a-z]{0,3}") {
            let base = ViewState::initial(schedule.len())
                .apply(ViewEvent::SelectRoute(selection.clone()));
            let cleared = base
                .clone()
                .apply(ViewEvent::SetMatcher(text))
                .apply(ViewEvent::SetMatcher(String::new()));

            let view = derive_view(&schedule, &cleared);
            prop_assert_eq!(&view, &derive_view(&schedule, &base));

            for day in &view.days {
                let expected: Vec<&Route> =
                    day.day.routes.iter().filter(|r| selection.matches(r)).collect();
                prop_assert_eq!(day.routes.len(), expected.len());
                for (shown, route) in day.routes.iter().zip(expected) {
                    prop_assert_eq!(shown.stops.len(), route.stops.len());
                }
            }
        }
    }
}
