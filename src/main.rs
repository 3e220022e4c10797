use dotenvy::dotenv;
use paylog::api;
use paylog::config;
use paylog::config::database::{create_connection, create_tables};
use paylog::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Resolve application configuration
    let app_config = config::load_app_configuration();

    // 4. Connect to the database and ensure tables exist
    let db = create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;
    info!("Database initialized successfully.");

    // 5. Serve the API
    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {e}", app_config.bind_addr))?;
    info!("Listening on {}", app_config.bind_addr);

    axum::serve(listener, api::router(db)).await?;

    Ok(())
}
