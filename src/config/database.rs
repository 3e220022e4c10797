//! Database connection and table creation using SeaORM.
//!
//! Uses `Schema::create_table_from_entity` to generate the `CREATE TABLE`
//! statements from the entity definitions, so the database schema always
//! matches the Rust struct definitions without hand-written SQL.

use crate::entities::{Setting, WeeklyLog};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

/// Establishes a connection to the database.
///
/// The connection is constructed explicitly at startup and injected into the
/// router state; a bad URL or unreachable store fails here, not lazily on
/// first use.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    let db = Database::connect(database_url).await?;
    info!("Connected to database at {database_url}");
    Ok(db)
}

/// Creates the `settings` and `weekly_logs` tables if they do not exist yet.
///
/// Idempotent so the server can restart against an existing database file.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut settings_table = schema.create_table_from_entity(Setting);
    settings_table.if_not_exists();
    db.execute(builder.build(&settings_table)).await?;

    let mut weekly_logs_table = schema.create_table_from_entity(WeeklyLog);
    weekly_logs_table.if_not_exists();
    db.execute(builder.build(&weekly_logs_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{SettingModel, WeeklyLogModel};
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Both tables exist and are queryable
        let _: Vec<SettingModel> = Setting::find().limit(1).all(&db).await?;
        let _: Vec<WeeklyLogModel> = WeeklyLog::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<SettingModel> = Setting::find().limit(1).all(&db).await?;
        Ok(())
    }
}
