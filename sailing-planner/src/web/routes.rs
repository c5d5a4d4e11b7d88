//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::PortCode;
use crate::format::SailingRecord;
use crate::planner::SearchError;

use super::dto::*;
use super::state::AppState;

/// Criteria used when a search does not name one.
const DEFAULT_CRITERIA: &str = "cheapest-direct";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/criteria", get(list_criteria))
        .route("/ports", get(list_ports))
        .route("/search", get(search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Registered criteria names, in listing order.
async fn list_criteria(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(state.registry.names())
}

/// Every port in the schedule, sorted by code.
async fn list_ports(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.repo.ports().iter().map(|p| p.to_string()).collect())
}

/// Run a search between two ports.
async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<SailingRecord>>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;
    let origin = known_port(&state, "origin", &params.origin)?;
    let destination = known_port(&state, "destination", &params.destination)?;
    let criteria = params.criteria.as_deref().unwrap_or(DEFAULT_CRITERIA);

    let records = state
        .registry
        .search(criteria, state.repo.as_ref(), &origin, &destination)?;

    debug!(
        criteria,
        origin = %origin,
        destination = %destination,
        results = records.len(),
        "search served"
    );
    Ok(Json(records))
}

fn known_port(state: &AppState, field: &str, value: &str) -> Result<PortCode, AppError> {
    let port = PortCode::parse_normalized(value).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {field} port: {value}"),
    })?;

    if !state.repo.has_port(&port) {
        return Err(AppError::NotFound {
            message: format!("Unknown {field} port: {port}"),
        });
    }
    Ok(port)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::UnknownCriteria(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
