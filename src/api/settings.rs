//! Handlers for `/settings/hourly-rate`.

use crate::api::{AppState, storage_error, validation_error};
use crate::core::settings;
use crate::errors::Error;
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

#[derive(Serialize)]
struct RateResponse {
    numeric_value: Option<f64>,
}

/// `GET /settings/hourly-rate` - the saved rate, or null if never set.
pub async fn get_hourly_rate(State(state): State<AppState>) -> Response {
    match settings::get_hourly_rate(&state.db).await {
        Ok(value) => Json(RateResponse {
            numeric_value: value,
        })
        .into_response(),
        Err(err) => {
            error!("GET /settings/hourly-rate: {err}");
            storage_error("Could not load hourly rate")
        }
    }
}

/// `PUT /settings/hourly-rate` - upsert the rate.
///
/// The body is taken as loose JSON so a missing or non-numeric
/// `numeric_value` produces the contract's `400 {"error"}` rather than a
/// framework rejection.
pub async fn put_hourly_rate(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(value) = body.get("numeric_value").and_then(Value::as_f64) else {
        return validation_error("numeric_value must be a positive number");
    };

    match settings::set_hourly_rate(&state.db, value).await {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(Error::Validation(_)) => validation_error("numeric_value must be a positive number"),
        Err(err) => {
            error!("PUT /settings/hourly-rate: {err}");
            storage_error("Could not save hourly rate")
        }
    }
}
