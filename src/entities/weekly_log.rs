//! Weekly log entity - one row per calendar week, keyed by its Monday.
//!
//! Each row snapshots the hourly rate in effect when the week was saved
//! (deliberately decoupled from the live setting, so historical weeks stay
//! stable if the rate later changes) alongside per-weekday hours and a list
//! of ad-hoc extras, both stored as JSON columns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Weekly log database model.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weekly_logs")]
pub struct Model {
    /// Monday of the ISO week this log covers. Unique key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub week_start: Date,
    /// Hourly rate snapshot taken when this week was saved.
    pub hourly_rate: f64,
    /// JSON object mapping lowercase weekday names (`monday`..`friday`) to
    /// hours worked, rounded to 2 decimals at the persistence boundary.
    pub hours: Json,
    /// JSON array of `{id, label, amount}` extras, in caller-supplied order.
    pub extras: Json,
    /// Set once when the row is first inserted; upserts leave it alone.
    pub inserted_at: DateTimeUtc,
}

/// Weekly logs have no relationships with other entities.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
