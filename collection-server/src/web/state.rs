//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::Schedule;

/// Shared application state.
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// The loaded schedule
    pub schedule: Arc<Schedule>,

    /// Route selector options, computed once from the schedule
    pub route_names: Arc<Vec<String>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(schedule: Schedule) -> Self {
        let route_names = schedule.route_names().into_iter().map(String::from).collect();

        Self {
            schedule: Arc::new(schedule),
            route_names: Arc::new(route_names),
        }
    }
}
