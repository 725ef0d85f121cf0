//! Web layer for the collection schedule.
//!
//! Serves the schedule page and a small JSON API. The view state travels
//! in the query string; the server itself only holds the static schedule.

mod dto;
pub mod links;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
