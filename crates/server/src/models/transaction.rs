//! Transaction row model and request payloads.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use loftline_core::{LoftId, TransactionId, TransactionStatus, TransactionType};

/// A ledger transaction.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Unique transaction ID.
    pub id: TransactionId,
    /// Amount in the default currency.
    pub amount: Decimal,
    /// Human-readable description.
    pub description: String,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Settlement state.
    pub status: TransactionStatus,
    /// Calendar date of the transaction.
    pub date: NaiveDate,
    /// Free-form category (bill payments use the utility wire name).
    pub category: Option<String>,
    /// Loft the transaction belongs to, if any.
    pub loft_id: Option<LoftId>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Payload for recording a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransaction {
    pub amount: Decimal,
    pub description: String,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub status: TransactionStatus,
    /// Defaults to today when omitted.
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub loft_id: Option<LoftId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_transaction_defaults() {
        let payload: CreateTransaction = serde_json::from_value(serde_json::json!({
            "amount": "2500.00",
            "description": "water bill payment",
            "transaction_type": "expense"
        }))
        .expect("deserialize");

        assert_eq!(payload.status, TransactionStatus::Completed);
        assert_eq!(payload.transaction_type, TransactionType::Expense);
        assert!(payload.date.is_none());
        assert!(payload.loft_id.is_none());
    }
}
