//! Application configuration loaded from the environment.
//!
//! Two variables matter: `DATABASE_URL` (where the SQLite database lives) and
//! `BIND_ADDR` (the address the HTTP server listens on). Both fall back to
//! local-development defaults so a fresh checkout runs without a `.env`.

/// Database connection and schema bootstrap
pub mod database;

use tracing::info;

/// Default SQLite location when `DATABASE_URL` is not set.
/// `mode=rwc` lets SQLite create the file on first run.
const DEFAULT_DATABASE_URL: &str = "sqlite://data/paylog.sqlite?mode=rwc";

/// Default listen address when `BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection string handed to SeaORM.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
}

/// Loads the application configuration from the environment, applying
/// defaults for anything unset. `.env` loading (via `dotenvy`) happens in
/// `main` before this is called, so variables from either source apply.
pub fn load_app_configuration() -> AppConfig {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    info!("Configured database_url={database_url}, bind_addr={bind_addr}");
    AppConfig {
        database_url,
        bind_addr,
    }
}
