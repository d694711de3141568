use super::CliError;

/// Applies all pending migrations from the server's migrations directory.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;
    tracing::info!("Migrations complete");

    Ok(())
}
