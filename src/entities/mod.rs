//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod setting;
pub mod weekly_log;

// Re-export specific types to avoid conflicts
pub use setting::{Column as SettingColumn, Entity as Setting, Model as SettingModel};
pub use weekly_log::{Column as WeeklyLogColumn, Entity as WeeklyLog, Model as WeeklyLogModel};
