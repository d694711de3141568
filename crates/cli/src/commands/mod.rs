pub mod migrate;
pub mod seed;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing database URL: set LOFTLINE_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Reads the database URL from the environment, preferring the
/// project-specific variable over the generic one.
fn database_url() -> Result<SecretString, CliError> {
    dotenvy::dotenv().ok();

    std::env::var("LOFTLINE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| CliError::MissingDatabaseUrl)
}

pub async fn connect() -> Result<PgPool, CliError> {
    let url = database_url()?;
    let pool = PgPool::connect(url.expose_secret()).await?;
    Ok(pool)
}
