//! UI state snapshot and its reducer.
//!
//! The view never mutates state in place. Each user action is a
//! [`ViewEvent`], and [`ViewState::apply`] returns the next snapshot.

use crate::domain::{ALL_ROUTES, ALL_ROUTES_LABEL, DayId, Route};

/// Which routes the route selector lets through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteSelection {
    /// Every route, placeholders included.
    #[default]
    All,
    /// Only routes with exactly this name.
    Named(String),
}

impl RouteSelection {
    /// Interpret a selector value.
    ///
    /// The empty string and both sentinels (`ALL`, `Todas`) select every
    /// route; anything else is taken as an exact route name.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_ROUTES || value == ALL_ROUTES_LABEL {
            RouteSelection::All
        } else {
            RouteSelection::Named(value.to_string())
        }
    }

    /// The selector value for this selection.
    pub fn as_str(&self) -> &str {
        match self {
            RouteSelection::All => ALL_ROUTES,
            RouteSelection::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, RouteSelection::All)
    }

    /// Whether a route passes this selection.
    ///
    /// Matching is exact and case-sensitive. Placeholder routes only pass
    /// [`RouteSelection::All`].
    pub fn matches(&self, route: &Route) -> bool {
        match self {
            RouteSelection::All => true,
            RouteSelection::Named(name) => route.name() == Some(name.as_str()),
        }
    }
}

/// A user action on the schedule view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Flip the visibility of one day.
    ToggleDay(DayId),
    /// Replace the street matcher text.
    SetMatcher(String),
    /// Change the route selector.
    SelectRoute(RouteSelection),
}

/// Immutable snapshot of the view's user-controlled state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Visibility flags indexed by day id.
    day_visible: Vec<bool>,
    matcher_text: String,
    selected_route: RouteSelection,
}

impl ViewState {
    /// Initial state: every day visible, no matcher, all routes.
    pub fn initial(day_count: usize) -> Self {
        Self {
            day_visible: vec![true; day_count],
            matcher_text: String::new(),
            selected_route: RouteSelection::All,
        }
    }

    /// Build a state with the given days hidden.
    ///
    /// Ids outside `0..day_count` are ignored.
    pub fn with_hidden(
        day_count: usize,
        hidden: impl IntoIterator<Item = DayId>,
        matcher_text: impl Into<String>,
        selected_route: RouteSelection,
    ) -> Self {
        let mut day_visible = vec![true; day_count];
        for id in hidden {
            if let Some(flag) = day_visible.get_mut(id.index()) {
                *flag = false;
            }
        }

        Self {
            day_visible,
            matcher_text: matcher_text.into(),
            selected_route,
        }
    }

    /// Apply one event, producing the next state.
    #[must_use]
    pub fn apply(mut self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::ToggleDay(id) => {
                if let Some(flag) = self.day_visible.get_mut(id.index()) {
                    *flag = !*flag;
                }
            }
            ViewEvent::SetMatcher(text) => self.matcher_text = text,
            ViewEvent::SelectRoute(selection) => self.selected_route = selection,
        }
        self
    }

    /// Whether a day is shown. Days past the end of the flag vector are.
    pub fn is_day_visible(&self, id: DayId) -> bool {
        self.day_visible.get(id.index()).copied().unwrap_or(true)
    }

    /// Visibility flags indexed by day id.
    pub fn day_visible(&self) -> &[bool] {
        &self.day_visible
    }

    /// Ids of hidden days, ascending.
    pub fn hidden_days(&self) -> impl Iterator<Item = DayId> + '_ {
        self.day_visible
            .iter()
            .enumerate()
            .filter(|(_, visible)| !**visible)
            .map(|(i, _)| DayId::new(i))
    }

    pub fn matcher_text(&self) -> &str {
        &self.matcher_text
    }

    pub fn selected_route(&self) -> &RouteSelection {
        &self.selected_route
    }
}
