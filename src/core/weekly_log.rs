//! Weekly log access - reading and upserting one week's hours and extras.
//!
//! A log is keyed by its Monday. The first save for a week creates the row
//! implicitly; every later save for the same key replaces `hourly_rate`,
//! `hours`, and `extras` in place, leaving `inserted_at` alone. Rows are
//! never deleted. The last writer for a key unconditionally wins; there is
//! no version check on the upsert.

use crate::{
    core::week::{Extra, WeekHours, WeekSnapshot, finite_or_zero},
    entities::{WeeklyLog, weekly_log},
    errors::Result,
};
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::{debug, info, instrument};

/// Looks up the log for `week_start`, which must already be a Monday; this
/// function never normalizes the key and never synthesizes a default row.
///
/// Returns `Ok(None)` when no row exists, which the interactive layer treats
/// as an all-zero week.
#[instrument(skip(db))]
pub async fn get_week(
    db: &DatabaseConnection,
    week_start: NaiveDate,
) -> Result<Option<WeekSnapshot>> {
    let Some(row) = WeeklyLog::find_by_id(week_start).one(db).await? else {
        debug!("No weekly log for {week_start}");
        return Ok(None);
    };

    let hours: WeekHours = serde_json::from_value(row.hours)?;
    let extras: Vec<Extra> = serde_json::from_value(row.extras)?;
    Ok(Some(WeekSnapshot {
        hourly_rate: row.hourly_rate,
        hours,
        extras,
    }))
}

/// Upserts the log for `week_start`.
///
/// Hours are sanitized and rounded to 2 decimal places before persisting;
/// weekdays absent from the caller's input are already 0 in [`WeekHours`].
/// Extras keep their caller-supplied order; blank ids and labels are filled
/// in via [`Extra::normalized`].
#[instrument(skip(db, hours, extras))]
pub async fn save_week(
    db: &DatabaseConnection,
    week_start: NaiveDate,
    hourly_rate: f64,
    hours: WeekHours,
    extras: Vec<Extra>,
) -> Result<()> {
    let hours = hours.rounded();
    let extras: Vec<Extra> = extras.into_iter().map(Extra::normalized).collect();

    let row = weekly_log::ActiveModel {
        week_start: Set(week_start),
        hourly_rate: Set(finite_or_zero(hourly_rate)),
        hours: Set(serde_json::to_value(hours)?),
        extras: Set(serde_json::to_value(&extras)?),
        inserted_at: Set(Utc::now()),
    };
    WeeklyLog::insert(row)
        .on_conflict(
            OnConflict::column(weekly_log::Column::WeekStart)
                .update_columns([
                    weekly_log::Column::HourlyRate,
                    weekly_log::Column::Hours,
                    weekly_log::Column::Extras,
                ])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    info!("Saved weekly log for {week_start} ({} extras)", extras.len());
    Ok(())
}
