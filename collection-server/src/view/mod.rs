//! View state derivation.
//!
//! Given the static [`Schedule`](crate::domain::Schedule) and a
//! [`ViewState`] snapshot, [`derive_view`] computes what the page shows.
//! State changes go through [`ViewState::apply`] one [`ViewEvent`] at a time.

mod derive;
mod filter;
mod matcher;
mod state;

pub use derive::{DayView, Layout, RouteView, ScheduleView, derive_view};
pub use filter::{matching_stops, selected_routes, visible_days};
pub use matcher::StreetMatcher;
pub use state::{RouteSelection, ViewEvent, ViewState};
