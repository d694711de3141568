use chrono::{Days, Months, Utc};
use loftline_core::{BillFrequency, LoftStatus};
use uuid::Uuid;

use super::CliError;

/// Seeds a demo owner and loft with billing schedules for local development.
///
/// Safe to run multiple times: each invocation inserts a fresh owner and
/// loft rather than upserting.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    let owner_id: Uuid = sqlx::query_scalar(
        r"
        INSERT INTO loft_owners (name, email, phone)
        VALUES ($1, $2, $3)
        RETURNING id
        ",
    )
    .bind("Demo Owner")
    .bind("demo.owner@example.com")
    .bind("+33 6 00 00 00 00")
    .fetch_one(&pool)
    .await?;

    let today = Utc::now().date_naive();
    let water_due = today.checked_add_days(Days::new(10)).unwrap_or(today);
    let energy_due = today.checked_add_days(Days::new(2)).unwrap_or(today);
    let phone_due = today.checked_sub_days(Days::new(5)).unwrap_or(today);
    let internet_due = today.checked_add_months(Months::new(1)).unwrap_or(today);

    let loft_id: Uuid = sqlx::query_scalar(
        r"
        INSERT INTO lofts (
            name, address, status, owner_id, price_per_month,
            frequence_paiement_eau, prochaine_echeance_eau,
            frequence_paiement_energie, prochaine_echeance_energie,
            frequence_paiement_telephone, prochaine_echeance_telephone,
            frequence_paiement_internet, prochaine_echeance_internet
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING id
        ",
    )
    .bind("Loft des Arts")
    .bind("12 rue de la Verrerie, Paris")
    .bind(LoftStatus::Available)
    .bind(owner_id)
    .bind(rust_decimal::Decimal::new(1200_00, 2))
    .bind(BillFrequency::Bimonthly.as_str())
    .bind(water_due)
    .bind(BillFrequency::Monthly.as_str())
    .bind(energy_due)
    .bind(BillFrequency::Monthly.as_str())
    .bind(phone_due)
    .bind(BillFrequency::Yearly.as_str())
    .bind(internet_due)
    .fetch_one(&pool)
    .await?;

    tracing::info!(%owner_id, %loft_id, "Seeded demo owner and loft");

    Ok(())
}
