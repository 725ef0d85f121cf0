//! Page URL generation.
//!
//! The page keeps no server-side session: every link and form carries the
//! complete view state in its query string. These helpers encode a
//! [`ViewState`] the same way [`ScheduleQuery`](super::ScheduleQuery)
//! decodes it.

use url::form_urlencoded::Serializer;

use crate::domain::DayId;
use crate::view::ViewState;

/// Comma-separated ids of hidden days, e.g. `"0,3"`.
pub fn hidden_param(state: &ViewState) -> String {
    state
        .hidden_days()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode a state as a query string, omitting defaults.
pub fn state_query(state: &ViewState) -> String {
    let mut query = Serializer::new(String::new());

    if !state.matcher_text().is_empty() {
        query.append_pair("q", state.matcher_text());
    }
    if !state.selected_route().is_all() {
        query.append_pair("route", state.selected_route().as_str());
    }
    let hidden = hidden_param(state);
    if !hidden.is_empty() {
        query.append_pair("hidden", &hidden);
    }

    query.finish()
}

/// URL of the page showing `state`.
pub fn page_url(state: &ViewState) -> String {
    let query = state_query(state);
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

/// URL that toggles one day's visibility on top of `state`.
pub fn toggle_url(state: &ViewState, day: DayId) -> String {
    let query = state_query(state);
    if query.is_empty() {
        format!("/?toggle={day}")
    } else {
        format!("/?{query}&toggle={day}")
    }
}
