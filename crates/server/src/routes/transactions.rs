//! Transaction handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use loftline_core::LoftId;

use crate::db;
use crate::error::AppError;
use crate::models::Transaction;
use crate::models::transaction::CreateTransaction;
use crate::state::AppState;

/// Build the transactions router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/transactions",
        get(list_transactions).post(create_transaction),
    )
}

/// Query parameters for listing transactions.
#[derive(Debug, Deserialize)]
struct ListQuery {
    loft_id: Option<LoftId>,
}

/// List transactions, optionally filtered by loft.
#[instrument(skip(state))]
async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = db::transactions::list_transactions(state.pool(), query.loft_id).await?;
    Ok(Json(transactions))
}

/// Record a transaction.
#[instrument(skip(state, payload))]
async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransaction>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let transaction = db::transactions::insert_transaction(state.pool(), payload).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}
