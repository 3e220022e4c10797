//! Setting entity - a singleton named numeric configuration value.
//!
//! Only one setting name is used today, `"hourly_rate"`. Writes are whole-row
//! upserts keyed by name, so there is at most one row per setting.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Setting database model - stores one named numeric value per row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    /// Setting name, e.g. `"hourly_rate"`. Unique key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    /// The last-saved value for this setting.
    pub numeric_value: f64,
    /// When this setting was last written.
    pub updated_at: DateTimeUtc,
}

/// Settings have no relationships with other entities.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
