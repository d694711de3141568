//! Database operations for bill queries.
//!
//! The heavy lifting lives in the SQL functions `get_upcoming_bills` and
//! `get_overdue_bills` (see migrations), which unpivot the per-utility
//! schedule columns on `lofts` into one row per due (loft, utility) pair.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::RepositoryError;

/// One (loft, utility) pair with a due date, as returned by the bill
/// functions. `utility_type` and `frequency` are raw wire strings; the
/// bill service parses them into their closed enums.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BillRow {
    /// Loft the bill belongs to.
    pub loft_id: Uuid,
    /// Loft display name.
    pub loft_name: String,
    /// Owning party, if third-party owned.
    pub owner_id: Option<Uuid>,
    /// Utility wire name (`eau`, `energie`, ...).
    pub utility_type: String,
    /// Stored next due date.
    pub due_date: NaiveDate,
    /// Frequency wire spelling (nullable in the schema).
    pub frequency: Option<String>,
}

/// Bills due between today and `days_ahead` days from now (inclusive).
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn upcoming_bills(
    pool: &PgPool,
    days_ahead: i32,
) -> Result<Vec<BillRow>, RepositoryError> {
    let rows = sqlx::query_as::<_, BillRow>("SELECT * FROM get_upcoming_bills($1)")
        .bind(days_ahead)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Bills whose due date is strictly before today.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn overdue_bills(pool: &PgPool) -> Result<Vec<BillRow>, RepositoryError> {
    let rows = sqlx::query_as::<_, BillRow>("SELECT * FROM get_overdue_bills()")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
