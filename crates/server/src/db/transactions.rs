//! Database operations for the transaction ledger.

use sqlx::PgPool;
use tracing::{debug, instrument};

use loftline_core::LoftId;

use super::RepositoryError;
use crate::models::Transaction;
use crate::models::transaction::CreateTransaction;

const TRANSACTION_COLUMNS: &str = "\
    id, amount, description, transaction_type, status, date, category, \
    loft_id, created_at, updated_at";

/// Insert a transaction.
///
/// The date defaults to today when the payload omits it.
///
/// # Errors
///
/// Returns error if the database insert fails.
#[instrument(skip(pool, params), fields(kind = %params.transaction_type))]
pub async fn insert_transaction(
    pool: &PgPool,
    params: CreateTransaction,
) -> Result<Transaction, RepositoryError> {
    let transaction = sqlx::query_as::<_, Transaction>(&format!(
        "
        INSERT INTO transactions
            (amount, description, transaction_type, status, date, category, loft_id)
        VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE), $6, $7)
        RETURNING {TRANSACTION_COLUMNS}
        "
    ))
    .bind(params.amount)
    .bind(&params.description)
    .bind(params.transaction_type)
    .bind(params.status)
    .bind(params.date)
    .bind(&params.category)
    .bind(params.loft_id)
    .fetch_one(pool)
    .await?;

    debug!(id = %transaction.id, "Recorded transaction");
    Ok(transaction)
}

/// List transactions, newest first, optionally filtered by loft.
///
/// # Errors
///
/// Returns error if the database query fails.
pub async fn list_transactions(
    pool: &PgPool,
    loft_id: Option<LoftId>,
) -> Result<Vec<Transaction>, RepositoryError> {
    let transactions = sqlx::query_as::<_, Transaction>(&format!(
        "
        SELECT {TRANSACTION_COLUMNS}
        FROM transactions
        WHERE $1::uuid IS NULL OR loft_id = $1
        ORDER BY date DESC, created_at DESC
        "
    ))
    .bind(loft_id)
    .fetch_all(pool)
    .await?;

    Ok(transactions)
}
