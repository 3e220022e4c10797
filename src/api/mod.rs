//! HTTP surface - the REST contract the interactive client talks to.
//!
//! One handler module per resource. Handlers translate the error taxonomy to
//! wire responses: validation problems become `400 {"error"}` with the
//! specific message, storage failures are logged and become `500 {"error"}`
//! with a generic "could not load/save" message. No retries happen here; the
//! client re-triggers a failed operation manually.

/// Standalone discount calculator endpoint
pub mod discount;
/// Hourly-rate settings endpoints
pub mod settings;
/// Weekly log endpoints
pub mod weekly_logs;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tower_http::cors::CorsLayer;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Explicitly constructed at startup and handed in; handlers never build
    /// their own connection.
    pub db: DatabaseConnection,
}

/// Builds the application router over the given database connection.
pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route(
            "/settings/hourly-rate",
            get(settings::get_hourly_rate).put(settings::put_hourly_rate),
        )
        .route(
            "/weekly-logs",
            get(weekly_logs::get_week).put(weekly_logs::put_week),
        )
        .route("/discount", post(discount::quote))
        .layer(CorsLayer::permissive())
        .with_state(AppState { db })
}

/// `400 {"error": message}` - bad caller input, message surfaced as-is.
pub(crate) fn validation_error(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// `500 {"error": message}` - store failure, generic message only (the cause
/// goes to the log, not the wire).
pub(crate) fn storage_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}
