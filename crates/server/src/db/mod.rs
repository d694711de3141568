//! Database operations for the Loftline `PostgreSQL` store.
//!
//! # Tables
//!
//! - `lofts` - Lofts with per-utility billing schedule columns
//! - `loft_owners` - Third-party and company owners
//! - `transactions` - Income/expense ledger (bill payments are expenses)
//! - `notifications` - Per-user notifications
//!
//! # Functions
//!
//! - `get_upcoming_bills(days_ahead)` / `get_overdue_bills()` - unpivot the
//!   schedule columns into one row per due (loft, utility) pair
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p loftline-cli -- migrate
//! ```

pub mod bills;
pub mod lofts;
pub mod notifications;
pub mod transactions;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., frequency outside the closed set).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
