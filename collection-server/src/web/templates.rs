//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{ALL_ROUTES, ALL_ROUTES_LABEL, Schedule};
use crate::view::{ScheduleView, ViewState};

use super::links::{hidden_param, page_url, toggle_url};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Schedule page with filter form and results.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Current matcher text (search box value)
    pub matcher: String,
    /// Hidden-days parameter carried by the form
    pub hidden: String,
    pub route_options: Vec<RouteOption>,
    pub day_toggles: Vec<DayToggle>,
    /// CSS class for the route cards
    pub layout: &'static str,
    pub days: Vec<DayCard>,
    /// Link back to the unfiltered page
    pub reset_url: String,
    /// Link reproducing the current view
    pub permalink: String,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// An option of the route selector.
#[derive(Debug, Clone)]
pub struct RouteOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A day visibility toggle.
#[derive(Debug, Clone)]
pub struct DayToggle {
    pub label: String,
    pub visible: bool,
    /// Link that flips this day
    pub url: String,
}

/// A visible day with its route cards.
#[derive(Debug, Clone)]
pub struct DayCard {
    pub label: String,
    pub routes: Vec<RouteCard>,
}

/// A route card.
#[derive(Debug, Clone)]
pub struct RouteCard {
    pub id: String,
    /// Uppercased route name, empty for placeholders
    pub title: String,
    pub stops: Vec<StopRow>,
}

/// A row in a route card.
#[derive(Debug, Clone)]
pub struct StopRow {
    pub street: String,
    pub detail: String,
}

impl IndexTemplate {
    /// Build the page model for a derived view.
    pub fn new(
        schedule: &Schedule,
        route_names: &[String],
        state: &ViewState,
        view: &ScheduleView<'_>,
    ) -> Self {
        let selected = state.selected_route();

        let route_options = std::iter::once(RouteOption {
            value: ALL_ROUTES.to_string(),
            label: ALL_ROUTES_LABEL.to_string(),
            selected: selected.is_all(),
        })
        .chain(route_names.iter().map(|name| RouteOption {
            value: name.clone(),
            label: name.clone(),
            selected: selected.as_str() == name && !selected.is_all(),
        }))
        .collect();

        let day_toggles = schedule
            .days()
            .iter()
            .map(|day| DayToggle {
                label: day.label.clone(),
                visible: state.is_day_visible(day.id),
                url: toggle_url(state, day.id),
            })
            .collect();

        let days = view
            .days
            .iter()
            .map(|d| DayCard {
                label: d.day.label.clone(),
                routes: d
                    .routes
                    .iter()
                    .map(|r| RouteCard {
                        id: r.route.id.to_string(),
                        title: r.route.name().map(str::to_uppercase).unwrap_or_default(),
                        stops: r
                            .stops
                            .iter()
                            .map(|s| StopRow {
                                street: s.street_name.clone(),
                                detail: s.schedule_detail.clone(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            matcher: state.matcher_text().to_string(),
            hidden: hidden_param(state),
            route_options,
            day_toggles,
            layout: view.layout.as_str(),
            days,
            reset_url: "/".to_string(),
            permalink: page_url(state),
        }
    }
}
