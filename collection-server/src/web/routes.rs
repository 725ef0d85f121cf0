//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::view::derive_view;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/schedule", get(schedule_json))
        .route("/api/routes", get(route_names))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Schedule page.
async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Response, AppError> {
    let view_state = match query.to_state(state.schedule.len()) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "rejected page query");
            return error_page(StatusCode::BAD_REQUEST, "Consulta inválida", e.to_string());
        }
    };

    let view = derive_view(&state.schedule, &view_state);
    debug!(
        days = view.days.len(),
        routes = view.route_count(),
        stops = view.stop_count(),
        "derived page view"
    );

    let template = IndexTemplate::new(&state.schedule, &state.route_names, &view_state, &view);
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Derived schedule as JSON.
async fn schedule_json(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let view_state = query.to_state(state.schedule.len())?;
    let view = derive_view(&state.schedule, &view_state);

    Ok(Json(ScheduleResponse::from_view(&view, &view_state)))
}

/// Route selector options.
async fn route_names(State(state): State<AppState>) -> Json<RouteNamesResponse> {
    Json(RouteNamesResponse {
        routes: state.route_names.as_ref().clone(),
    })
}

fn error_page(status: StatusCode, title: &str, message: String) -> Result<Response, AppError> {
    let html = ErrorTemplate {
        title: title.to_string(),
        message,
    }
    .render()
    .map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok((status, Html(html)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
