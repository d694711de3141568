//! Bill service: alert aggregation and payment recording.
//!
//! Payment recording issues two independent writes: the expense transaction
//! and the due-date advance. They are deliberately NOT wrapped in a database
//! transaction, matching the system this replaces: if the second write fails
//! the payment stays recorded with an un-advanced due date and an operator
//! must correct the loft by hand. The error log below calls that out.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{error, info, instrument};

use loftline_core::{
    BillFrequency, BillStatus, LoftId, OwnerId, TransactionId, TransactionStatus, TransactionType,
    Urgency, UtilityType, classify, next_due_date,
};

use crate::db::{self, RepositoryError, bills::BillRow};
use crate::error::AppError;
use crate::models::transaction::CreateTransaction;

/// A classified bill alert. Derived on every query from the lofts' stored
/// due dates against the current date; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct BillAlert {
    /// Loft the bill belongs to.
    pub loft_id: LoftId,
    /// Loft display name.
    pub loft_name: String,
    /// Owning party, if third-party owned.
    pub owner_id: Option<OwnerId>,
    /// Which utility is due.
    pub utility_type: UtilityType,
    /// Stored next due date.
    pub due_date: NaiveDate,
    /// Billing frequency, if configured.
    pub frequency: Option<BillFrequency>,
    /// Upcoming/overdue classification with the day count.
    #[serde(flatten)]
    pub status: BillStatus,
    /// Badge urgency derived from the classification.
    pub urgency: Urgency,
}

/// Upcoming and overdue alerts for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct BillAlerts {
    pub upcoming: Vec<BillAlert>,
    pub overdue: Vec<BillAlert>,
}

/// Parameters for marking a bill as paid.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkBillPaid {
    /// Amount paid.
    pub amount: Decimal,
    /// Payment date; defaults to today.
    pub paid_on: Option<NaiveDate>,
    /// Ledger description; defaults to "<utility> bill payment for <loft>".
    pub description: Option<String>,
}

/// Result of recording a bill payment.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecorded {
    /// The recorded expense transaction.
    pub transaction_id: TransactionId,
    /// The loft's new stored due date for this utility.
    pub next_due_date: NaiveDate,
}

/// Bill alert aggregation and payment recording.
#[derive(Clone)]
pub struct BillService {
    pool: PgPool,
}

impl BillService {
    /// Create a new bill service.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch and classify upcoming and overdue bills.
    ///
    /// `days_ahead` bounds the upcoming window; overdue bills have no bound.
    ///
    /// # Errors
    ///
    /// Returns error if a query fails or a stored frequency/utility value
    /// fails to parse (data corruption).
    #[instrument(skip(self))]
    pub async fn alerts(&self, today: NaiveDate, days_ahead: i32) -> Result<BillAlerts, AppError> {
        let upcoming = db::bills::upcoming_bills(&self.pool, days_ahead).await?;
        let overdue = db::bills::overdue_bills(&self.pool).await?;

        Ok(BillAlerts {
            upcoming: classify_rows(today, upcoming)?,
            overdue: classify_rows(today, overdue)?,
        })
    }

    /// Record a bill payment and advance the loft's due date.
    ///
    /// Inserts an expense transaction, then moves the loft's stored
    /// `prochaine_echeance_*` column to the next recurrence of its current
    /// due date. See the module docs for the non-atomicity caveat.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the loft does not exist, `BadRequest` if the
    /// loft has no frequency or due date configured for the utility, and a
    /// database error if either write fails.
    #[instrument(skip(self, params), fields(%loft_id, %utility))]
    pub async fn mark_paid(
        &self,
        loft_id: LoftId,
        utility: UtilityType,
        params: MarkBillPaid,
    ) -> Result<PaymentRecorded, AppError> {
        let loft = db::lofts::get_loft(&self.pool, loft_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("loft {loft_id}")))?;

        let (frequency_raw, current_due) = loft.schedule(utility);
        let (Some(frequency_raw), Some(current_due)) = (frequency_raw, current_due) else {
            return Err(AppError::BadRequest(format!(
                "no billing schedule configured for {utility} on loft {}",
                loft.name
            )));
        };
        let frequency = parse_frequency(frequency_raw)?;

        let next_due = next_due_date(current_due, frequency);

        let description = params
            .description
            .unwrap_or_else(|| default_description(utility, &loft.name));

        let transaction = db::transactions::insert_transaction(
            &self.pool,
            CreateTransaction {
                amount: params.amount,
                description,
                transaction_type: TransactionType::Expense,
                status: TransactionStatus::Completed,
                date: params.paid_on,
                category: Some(utility.as_str().to_string()),
                loft_id: Some(loft_id),
            },
        )
        .await?;

        // Second write. Not atomic with the insert above: on failure the
        // payment stays recorded and the schedule must be fixed by hand.
        if let Err(err) = db::lofts::advance_due_date(&self.pool, loft_id, utility, next_due).await
        {
            error!(
                %loft_id,
                %utility,
                transaction_id = %transaction.id,
                %next_due,
                error = %err,
                "payment recorded but due date was not advanced; set the loft's due date manually"
            );
            return Err(err.into());
        }

        info!(
            %loft_id,
            %utility,
            transaction_id = %transaction.id,
            %next_due,
            "bill marked as paid"
        );

        Ok(PaymentRecorded {
            transaction_id: transaction.id,
            next_due_date: next_due,
        })
    }
}

/// Classify raw bill rows against `today`.
fn classify_rows(today: NaiveDate, rows: Vec<BillRow>) -> Result<Vec<BillAlert>, AppError> {
    rows.into_iter().map(|row| to_alert(today, row)).collect()
}

/// Convert one raw bill row into a classified alert.
fn to_alert(today: NaiveDate, row: BillRow) -> Result<BillAlert, AppError> {
    let utility_type: UtilityType = row
        .utility_type
        .parse()
        .map_err(|e: String| AppError::Database(RepositoryError::DataCorruption(e)))?;
    let frequency = row.frequency.as_deref().map(parse_frequency).transpose()?;
    let status = classify(today, row.due_date);

    Ok(BillAlert {
        loft_id: LoftId::new(row.loft_id),
        loft_name: row.loft_name,
        owner_id: row.owner_id.map(OwnerId::new),
        utility_type,
        due_date: row.due_date,
        frequency,
        urgency: status.urgency(),
        status,
    })
}

/// Parse a stored frequency value. The schema constrains the column to the
/// closed set, so a failure here is a data-integrity bug.
fn parse_frequency(raw: &str) -> Result<BillFrequency, AppError> {
    raw.parse().map_err(|e: loftline_core::InvalidFrequency| {
        AppError::Database(RepositoryError::DataCorruption(e.to_string()))
    })
}

/// Default ledger description for a bill payment.
fn default_description(utility: UtilityType, loft_name: &str) -> String {
    format!("{} bill payment for {loft_name}", utility.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn row(utility: &str, due: NaiveDate, frequency: Option<&str>) -> BillRow {
        BillRow {
            loft_id: Uuid::new_v4(),
            loft_name: "Loft Hydra".to_string(),
            owner_id: None,
            utility_type: utility.to_string(),
            due_date: due,
            frequency: frequency.map(String::from),
        }
    }

    #[test]
    fn test_to_alert_upcoming() {
        let today = date(2024, 6, 10);
        let alert = to_alert(today, row("eau", date(2024, 6, 12), Some("mensuel")))
            .expect("classify");

        assert_eq!(alert.utility_type, UtilityType::Eau);
        assert_eq!(alert.frequency, Some(BillFrequency::Monthly));
        assert_eq!(alert.status, BillStatus::Upcoming { days_until_due: 2 });
        assert_eq!(alert.urgency, Urgency::Soon);
    }

    #[test]
    fn test_to_alert_overdue() {
        let today = date(2024, 6, 11);
        let alert =
            to_alert(today, row("internet", date(2024, 6, 10), None)).expect("classify");

        assert_eq!(alert.frequency, None);
        assert_eq!(alert.status, BillStatus::Overdue { days_overdue: 1 });
        assert_eq!(alert.urgency, Urgency::Critical);
    }

    #[test]
    fn test_to_alert_rejects_unknown_utility() {
        let err = to_alert(date(2024, 6, 10), row("gaz", date(2024, 6, 10), None)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Database(RepositoryError::DataCorruption(_))
        ));
    }

    #[test]
    fn test_to_alert_rejects_unknown_frequency() {
        let err = to_alert(
            date(2024, 6, 10),
            row("eau", date(2024, 6, 10), Some("fortnightly")),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Database(RepositoryError::DataCorruption(_))
        ));
    }

    #[test]
    fn test_default_description() {
        assert_eq!(
            default_description(UtilityType::Eau, "Loft Hydra"),
            "water bill payment for Loft Hydra"
        );
        assert_eq!(
            default_description(UtilityType::Energie, "Loft Didouche"),
            "energy bill payment for Loft Didouche"
        );
    }

    #[test]
    fn test_alert_serialization_flattens_status() {
        let alert = to_alert(
            date(2024, 6, 10),
            row("eau", date(2024, 6, 10), Some("mensuel")),
        )
        .expect("classify");
        let json = serde_json::to_value(&alert).expect("serialize");

        assert_eq!(json["state"], "upcoming");
        assert_eq!(json["days_until_due"], 0);
        assert_eq!(json["urgency"], "critical");
        assert_eq!(json["frequency"], "mensuel");
    }
}
