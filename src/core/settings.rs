//! Settings access - reading and upserting the hourly rate.
//!
//! The `settings` table is key-value by name; only [`HOURLY_RATE`] exists
//! today. Writes are whole-row upserts, so replaying the same value leaves
//! the stored state unchanged.

use crate::{
    entities::{Setting, setting},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::{debug, info, instrument};

/// Name of the single setting this application uses.
pub const HOURLY_RATE: &str = "hourly_rate";

/// Returns the saved hourly rate, or `None` if it was never set.
///
/// Callers can distinguish "not set" (`Ok(None)`) from "store failure"
/// (`Err(Error::Storage)`).
#[instrument(skip(db))]
pub async fn get_hourly_rate(db: &DatabaseConnection) -> Result<Option<f64>> {
    let row = Setting::find_by_id(HOURLY_RATE.to_owned()).one(db).await?;
    debug!("Hourly rate setting: {:?}", row.as_ref().map(|s| s.numeric_value));
    Ok(row.map(|s| s.numeric_value))
}

/// Replaces the stored hourly rate and refreshes its timestamp.
///
/// Rejects non-finite or non-positive values with [`Error::Validation`]; a
/// rejected write leaves the previously stored rate untouched.
#[instrument(skip(db))]
pub async fn set_hourly_rate(db: &DatabaseConnection, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::Validation(
            "hourly rate must be a positive number".to_string(),
        ));
    }

    let row = setting::ActiveModel {
        name: Set(HOURLY_RATE.to_owned()),
        numeric_value: Set(value),
        updated_at: Set(Utc::now()),
    };
    Setting::insert(row)
        .on_conflict(
            OnConflict::column(setting::Column::Name)
                .update_columns([setting::Column::NumericValue, setting::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    info!("Saved hourly rate: {value}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::database::create_tables;
    use sea_orm::{Database, PaginatorTrait};

    async fn setup_test_db() -> Result<DatabaseConnection> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        Ok(db)
    }

    #[tokio::test]
    async fn test_rate_unset_reads_as_none() -> Result<()> {
        let db = setup_test_db().await?;
        assert_eq!(get_hourly_rate(&db).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_then_get_rate() -> Result<()> {
        let db = setup_test_db().await?;
        set_hourly_rate(&db, 22.5).await?;
        assert_eq!(get_hourly_rate(&db).await?, Some(22.5));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_replaces_single_row() -> Result<()> {
        let db = setup_test_db().await?;
        set_hourly_rate(&db, 20.0).await?;
        set_hourly_rate(&db, 25.0).await?;

        assert_eq!(get_hourly_rate(&db).await?, Some(25.0));
        let count = Setting::find().count(&db).await?;
        assert_eq!(count, 1, "upsert must never append a duplicate row");
        Ok(())
    }

    #[tokio::test]
    async fn test_replaying_same_value_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        set_hourly_rate(&db, 18.0).await?;
        set_hourly_rate(&db, 18.0).await?;

        assert_eq!(get_hourly_rate(&db).await?, Some(18.0));
        assert_eq!(Setting::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_non_positive_rate_and_keeps_previous() -> Result<()> {
        let db = setup_test_db().await?;
        set_hourly_rate(&db, 30.0).await?;

        for bad in [0.0, -5.0, f64::NAN] {
            let err = set_hourly_rate(&db, bad).await;
            assert!(
                matches!(err, Err(Error::Validation(_))),
                "rate {bad} should be rejected"
            );
        }

        // The previously stored rate is still retrievable
        assert_eq!(get_hourly_rate(&db).await?, Some(30.0));
        Ok(())
    }
}
