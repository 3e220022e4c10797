//! Handlers for `/weekly-logs`.
//!
//! The `week_start` key travels as an ISO `YYYY-MM-DD` string identifying a
//! Monday; normalizing a date to its Monday is the client's job, this layer
//! only parses. Malformed `hours`/`extras` payloads degrade to empty
//! defaults rather than erroring, keeping the boundary as forgiving as the
//! interactive UI expects.

use crate::api::{AppState, storage_error, validation_error};
use crate::core::week::{Extra, WeekHours};
use crate::core::weekly_log;
use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    week_start: Option<String>,
}

fn parse_week_start(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// `GET /weekly-logs?week_start=YYYY-MM-DD` - the saved week, or null data
/// when the week has never been saved.
pub async fn get_week(State(state): State<AppState>, Query(query): Query<WeekQuery>) -> Response {
    let Some(raw) = query.week_start else {
        return validation_error("week_start query param is required");
    };
    let Some(week_start) = parse_week_start(&raw) else {
        return validation_error("week_start must be an ISO date (YYYY-MM-DD)");
    };

    match weekly_log::get_week(&state.db, week_start).await {
        Ok(snapshot) => Json(json!({ "data": snapshot })).into_response(),
        Err(err) => {
            error!("GET /weekly-logs?week_start={week_start}: {err}");
            storage_error("Could not load week")
        }
    }
}

/// `PUT /weekly-logs` - upsert one week's rate snapshot, hours, and extras.
pub async fn put_week(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(raw) = body
        .get("week_start")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
    else {
        return validation_error("week_start is required");
    };
    let Some(week_start) = parse_week_start(raw) else {
        return validation_error("week_start must be an ISO date (YYYY-MM-DD)");
    };

    let hourly_rate = body
        .get("hourly_rate")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let hours: WeekHours = body
        .get("hours")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();
    let extras: Vec<Extra> = body
        .get("extras")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();

    match weekly_log::save_week(&state.db, week_start, hourly_rate, hours, extras).await {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(err) => {
            error!("PUT /weekly-logs ({week_start}): {err}");
            storage_error("Could not save week")
        }
    }
}
