//! Database migration command.

use secrecy::SecretString;
use sqlx::SqlitePool;
use tracing::info;

use storeroom_server::db::{self, MIGRATOR};

/// Errors that can occur while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connect to the configured store from the environment.
pub async fn connect() -> Result<SqlitePool, MigrateError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("STOREROOM_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MigrateError::MissingEnvVar("STOREROOM_DATABASE_URL"))?;

    Ok(db::create_pool(&database_url).await?)
}

/// Run the embedded migrations against the configured store.
pub async fn run() -> Result<(), MigrateError> {
    info!("Connecting to entity store...");
    let pool = connect().await?;

    info!("Running migrations...");
    MIGRATOR.run(&pool).await?;

    info!("Migrations complete");
    Ok(())
}
