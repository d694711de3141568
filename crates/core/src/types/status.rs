//! Status enums for lofts and transactions.
//!
//! Wire spellings match the columns of the managed store, so these enums
//! round-trip through both JSON payloads and database TEXT columns.

use serde::{Deserialize, Serialize};

/// Occupancy status of a loft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "loft_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum LoftStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl LoftStatus {
    /// Wire spelling used in the database and JSON payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for LoftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LoftStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(format!("invalid loft status: {s}")),
        }
    }
}

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "transaction_type", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Wire spelling used in the database and JSON payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("invalid transaction type: {s}")),
        }
    }
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "transaction_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    #[default]
    Completed,
    Failed,
}

impl TransactionStatus {
    /// Wire spelling used in the database and JSON payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("invalid transaction status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loft_status_round_trip() {
        for status in [
            LoftStatus::Available,
            LoftStatus::Occupied,
            LoftStatus::Maintenance,
        ] {
            let parsed: LoftStatus = status.as_str().parse().expect("parse");
            assert_eq!(parsed, status);
        }
        assert!("vacant".parse::<LoftStatus>().is_err());
    }

    #[test]
    fn test_transaction_type_serde_spelling() {
        let json = serde_json::to_string(&TransactionType::Expense).expect("serialize");
        assert_eq!(json, "\"expense\"");
    }

    #[test]
    fn test_transaction_status_default_is_completed() {
        assert_eq!(TransactionStatus::default(), TransactionStatus::Completed);
    }
}
