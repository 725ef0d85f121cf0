//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::DayId;
use crate::view::{RouteSelection, ScheduleView, ViewEvent, ViewState};

/// Query string carrying the view state.
///
/// Used by both the HTML page and the JSON API.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleQuery {
    /// Street matcher text
    pub q: Option<String>,

    /// Selected route name (`ALL` or absent for every route)
    pub route: Option<String>,

    /// Comma-separated ids of hidden days
    pub hidden: Option<String>,

    /// Day whose visibility is flipped before rendering
    pub toggle: Option<String>,
}

/// Error returned when a query parameter cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid day id {value:?} in `{param}`")]
    InvalidDay { param: &'static str, value: String },
}

impl ScheduleQuery {
    /// Rebuild the view state this query describes.
    ///
    /// A `toggle` parameter is applied as a [`ViewEvent::ToggleDay`] on top
    /// of the decoded state.
    pub fn to_state(&self, day_count: usize) -> Result<ViewState, QueryError> {
        let hidden = parse_day_list("hidden", self.hidden.as_deref().unwrap_or(""))?;
        let selection = RouteSelection::parse(self.route.as_deref().unwrap_or(""));
        let matcher = self.q.clone().unwrap_or_default();

        let state = ViewState::with_hidden(day_count, hidden, matcher, selection);

        match self.toggle.as_deref().map(str::trim) {
            None | Some("") => Ok(state),
            Some(value) => {
                let day = parse_day("toggle", value)?;
                Ok(state.apply(ViewEvent::ToggleDay(day)))
            }
        }
    }
}

fn parse_day(param: &'static str, value: &str) -> Result<DayId, QueryError> {
    value
        .parse::<usize>()
        .map(DayId::new)
        .map_err(|_| QueryError::InvalidDay {
            param,
            value: value.to_string(),
        })
}

fn parse_day_list(param: &'static str, value: &str) -> Result<Vec<DayId>, QueryError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_day(param, s))
        .collect()
}

/// Derived schedule response.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// `grid` or `single`
    pub layout: &'static str,

    /// The state the response was derived from
    pub state: StateResult,

    /// Visible days
    pub days: Vec<DayResult>,
}

/// Echo of the effective view state.
#[derive(Debug, Serialize)]
pub struct StateResult {
    pub matcher: String,
    pub route: String,
    pub hidden: Vec<usize>,
}

/// A visible day.
#[derive(Debug, Serialize)]
pub struct DayResult {
    pub id: usize,
    pub label: String,
    pub routes: Vec<RouteResult>,
}

/// A route that survived filtering.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub id: String,
    pub name: Option<String>,
    pub stops: Vec<StopResult>,
}

/// A stop that survived filtering.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub street_name: String,
    pub schedule_detail: String,
}

/// Route selector options.
#[derive(Debug, Serialize)]
pub struct RouteNamesResponse {
    pub routes: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ScheduleResponse {
    /// Create from a derived view and the state it came from.
    pub fn from_view(view: &ScheduleView<'_>, state: &ViewState) -> Self {
        let days = view
            .days
            .iter()
            .map(|d| DayResult {
                id: d.day.id.index(),
                label: d.day.label.clone(),
                routes: d
                    .routes
                    .iter()
                    .map(|r| RouteResult {
                        id: r.route.id.to_string(),
                        name: r.route.name.clone(),
                        stops: r
                            .stops
                            .iter()
                            .map(|s| StopResult {
                                street_name: s.street_name.clone(),
                                schedule_detail: s.schedule_detail.clone(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            layout: view.layout.as_str(),
            state: StateResult {
                matcher: state.matcher_text().to_string(),
                route: state.selected_route().as_str().to_string(),
                hidden: state.hidden_days().map(DayId::index).collect(),
            },
            days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::links::state_query;

    fn query(
        q: Option<&str>,
        route: Option<&str>,
        hidden: Option<&str>,
        toggle: Option<&str>,
    ) -> ScheduleQuery {
        ScheduleQuery {
            q: q.map(Into::into),
            route: route.map(Into::into),
            hidden: hidden.map(Into::into),
            toggle: toggle.map(Into::into),
        }
    }

    #[test]
    fn empty_query_is_initial_state() {
        let state = ScheduleQuery::default().to_state(7).unwrap();
        assert_eq!(state, ViewState::initial(7));
    }

    #[test]
    fn decodes_all_fields() {
        let state = query(Some("alfar"), Some("Norte"), Some("1, 3,"), None)
            .to_state(4)
            .unwrap();

        assert_eq!(state.matcher_text(), "alfar");
        assert_eq!(state.selected_route(), &RouteSelection::Named("Norte".into()));
        assert_eq!(state.day_visible(), &[true, false, true, false]);
    }

    #[test]
    fn toggle_applies_after_hidden() {
        let state = query(None, None, Some("1"), Some("1")).to_state(3).unwrap();
        assert_eq!(state.day_visible(), &[true, true, true]);

        let state = query(None, None, None, Some("2")).to_state(3).unwrap();
        assert_eq!(state.day_visible(), &[true, true, false]);
    }

    #[test]
    fn blank_toggle_ignored() {
        let state = query(None, None, None, Some("")).to_state(2).unwrap();
        assert_eq!(state, ViewState::initial(2));
    }

    #[test]
    fn sentinel_route_means_all() {
        for value in ["ALL", "Todas", ""] {
            let state = query(None, Some(value), None, None).to_state(1).unwrap();
            assert!(state.selected_route().is_all());
        }
    }

    #[test]
    fn invalid_day_ids_rejected() {
        assert_eq!(
            query(None, None, Some("1,x"), None).to_state(3),
            Err(QueryError::InvalidDay {
                param: "hidden",
                value: "x".into()
            })
        );
        assert_eq!(
            query(None, None, None, Some("-1")).to_state(3),
            Err(QueryError::InvalidDay {
                param: "toggle",
                value: "-1".into()
            })
        );
    }

    #[test]
    fn encoded_state_decodes_to_same_state() {
        let state = ViewState::initial(5)
            .apply(ViewEvent::ToggleDay(DayId::new(4)))
            .apply(ViewEvent::SetMatcher("Peña & Co".into()))
            .apply(ViewEvent::SelectRoute(RouteSelection::Named("Norte".into())));

        let encoded = state_query(&state);
        let decoded: ScheduleQuery = url::form_urlencoded::parse(encoded.as_bytes())
            .fold(ScheduleQuery::default(), |mut q, (k, v)| {
                match k.as_ref() {
                    "q" => q.q = Some(v.into_owned()),
                    "route" => q.route = Some(v.into_owned()),
                    "hidden" => q.hidden = Some(v.into_owned()),
                    "toggle" => q.toggle = Some(v.into_owned()),
                    _ => {}
                }
                q
            });

        assert_eq!(decoded.to_state(5).unwrap(), state);
    }

    #[test]
    fn error_display() {
        let err = QueryError::InvalidDay {
            param: "hidden",
            value: "x".into(),
        };
        assert_eq!(err.to_string(), "invalid day id \"x\" in `hidden`");
    }
}
