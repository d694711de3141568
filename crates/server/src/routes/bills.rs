//! Bill alert and payment handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use loftline_core::{LoftId, UtilityType};

use crate::error::AppError;
use crate::services::{BillAlerts, MarkBillPaid, PaymentRecorded};
use crate::state::AppState;

/// Build the bills router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/bills/alerts", get(alerts))
        .route("/api/lofts/{id}/bills/{utility}/pay", post(pay_bill))
}

/// Query parameters for the alerts endpoint.
#[derive(Debug, Deserialize)]
struct AlertsQuery {
    /// Overrides the configured upcoming window.
    days_ahead: Option<i32>,
}

/// Upcoming and overdue bill alerts.
#[instrument(skip(state))]
async fn alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertsQuery>,
) -> Result<Json<BillAlerts>, AppError> {
    let days_ahead = match query.days_ahead {
        Some(days) if days <= 0 => {
            return Err(AppError::BadRequest(format!(
                "days_ahead must be positive (got {days})"
            )));
        }
        Some(days) => days,
        None => state.config().upcoming_window_days,
    };

    let today = Utc::now().date_naive();
    let alerts = state.bills().alerts(today, days_ahead).await?;
    Ok(Json(alerts))
}

/// Mark a utility bill as paid.
///
/// Records the expense transaction and advances the loft's next due date
/// according to its billing frequency.
#[instrument(skip(state, payload))]
async fn pay_bill(
    State(state): State<AppState>,
    Path((id, utility)): Path<(LoftId, String)>,
    Json(payload): Json<MarkBillPaid>,
) -> Result<Json<PaymentRecorded>, AppError> {
    let utility: UtilityType = utility.parse().map_err(AppError::BadRequest)?;

    let recorded = state.bills().mark_paid(id, utility, payload).await?;
    Ok(Json(recorded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_bill_payload_deserializes() {
        let payload: MarkBillPaid = serde_json::from_value(serde_json::json!({
            "amount": "2500.00",
            "paid_on": "2024-06-10"
        }))
        .expect("deserialize");

        assert_eq!(
            payload.paid_on,
            chrono::NaiveDate::from_ymd_opt(2024, 6, 10)
        );
        assert!(payload.description.is_none());
    }

    #[test]
    fn test_unknown_utility_is_a_client_error() {
        let err = "gaz".parse::<UtilityType>().unwrap_err();
        let err = AppError::BadRequest(err);
        assert_eq!(err.to_string(), "Bad request: invalid utility type: gaz");
    }
}
