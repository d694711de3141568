//! Loft row model and request payloads.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use loftline_core::{LoftId, LoftStatus, OwnerId, UtilityType};

/// A loft row, including the per-utility billing schedule columns.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Loft {
    /// Unique loft ID.
    pub id: LoftId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Street address.
    pub address: String,
    /// Monthly rent.
    pub price_per_month: Decimal,
    /// Occupancy status.
    pub status: LoftStatus,
    /// Owning party, if third-party owned.
    pub owner_id: Option<OwnerId>,
    /// Company share of revenue, percent.
    pub company_percentage: Decimal,
    /// Owner share of revenue, percent.
    pub owner_percentage: Decimal,
    /// Water billing frequency (wire spelling, nullable).
    pub frequence_paiement_eau: Option<String>,
    /// Next water bill due date.
    pub prochaine_echeance_eau: Option<NaiveDate>,
    /// Energy billing frequency.
    pub frequence_paiement_energie: Option<String>,
    /// Next energy bill due date.
    pub prochaine_echeance_energie: Option<NaiveDate>,
    /// Phone billing frequency.
    pub frequence_paiement_telephone: Option<String>,
    /// Next phone bill due date.
    pub prochaine_echeance_telephone: Option<NaiveDate>,
    /// Internet billing frequency.
    pub frequence_paiement_internet: Option<String>,
    /// Next internet bill due date.
    pub prochaine_echeance_internet: Option<NaiveDate>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Loft {
    /// The stored (frequency, next due date) pair for one utility.
    #[must_use]
    pub fn schedule(&self, utility: UtilityType) -> (Option<&str>, Option<NaiveDate>) {
        match utility {
            UtilityType::Eau => (
                self.frequence_paiement_eau.as_deref(),
                self.prochaine_echeance_eau,
            ),
            UtilityType::Energie => (
                self.frequence_paiement_energie.as_deref(),
                self.prochaine_echeance_energie,
            ),
            UtilityType::Telephone => (
                self.frequence_paiement_telephone.as_deref(),
                self.prochaine_echeance_telephone,
            ),
            UtilityType::Internet => (
                self.frequence_paiement_internet.as_deref(),
                self.prochaine_echeance_internet,
            ),
        }
    }
}

/// Payload for creating a loft.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLoft {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub price_per_month: Decimal,
    #[serde(default)]
    pub status: LoftStatus,
    pub owner_id: Option<OwnerId>,
    pub company_percentage: Option<Decimal>,
    pub owner_percentage: Option<Decimal>,
    pub frequence_paiement_eau: Option<String>,
    pub prochaine_echeance_eau: Option<NaiveDate>,
    pub frequence_paiement_energie: Option<String>,
    pub prochaine_echeance_energie: Option<NaiveDate>,
    pub frequence_paiement_telephone: Option<String>,
    pub prochaine_echeance_telephone: Option<NaiveDate>,
    pub frequence_paiement_internet: Option<String>,
    pub prochaine_echeance_internet: Option<NaiveDate>,
}

/// Payload for updating a loft. Missing fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLoft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub price_per_month: Option<Decimal>,
    pub status: Option<LoftStatus>,
    pub owner_id: Option<OwnerId>,
    pub company_percentage: Option<Decimal>,
    pub owner_percentage: Option<Decimal>,
    pub frequence_paiement_eau: Option<String>,
    pub prochaine_echeance_eau: Option<NaiveDate>,
    pub frequence_paiement_energie: Option<String>,
    pub prochaine_echeance_energie: Option<NaiveDate>,
    pub frequence_paiement_telephone: Option<String>,
    pub prochaine_echeance_telephone: Option<NaiveDate>,
    pub frequence_paiement_internet: Option<String>,
    pub prochaine_echeance_internet: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_loft() -> Loft {
        Loft {
            id: LoftId::new(Uuid::nil()),
            name: "Loft Hydra".to_string(),
            description: None,
            address: "12 Rue Didouche".to_string(),
            price_per_month: Decimal::new(45_000, 0),
            status: LoftStatus::Occupied,
            owner_id: None,
            company_percentage: Decimal::new(50, 0),
            owner_percentage: Decimal::new(50, 0),
            frequence_paiement_eau: Some("mensuel".to_string()),
            prochaine_echeance_eau: NaiveDate::from_ymd_opt(2024, 6, 10),
            frequence_paiement_energie: None,
            prochaine_echeance_energie: None,
            frequence_paiement_telephone: None,
            prochaine_echeance_telephone: None,
            frequence_paiement_internet: Some("trimestriel".to_string()),
            prochaine_echeance_internet: NaiveDate::from_ymd_opt(2024, 8, 1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_schedule_selects_utility_columns() {
        let loft = sample_loft();
        let (frequency, due) = loft.schedule(UtilityType::Eau);
        assert_eq!(frequency, Some("mensuel"));
        assert_eq!(due, NaiveDate::from_ymd_opt(2024, 6, 10));

        let (frequency, due) = loft.schedule(UtilityType::Energie);
        assert_eq!(frequency, None);
        assert_eq!(due, None);
    }

    #[test]
    fn test_create_loft_defaults_status() {
        let payload: CreateLoft = serde_json::from_value(serde_json::json!({
            "name": "Loft A",
            "address": "1 Rue A",
            "price_per_month": "30000"
        }))
        .expect("deserialize");
        assert_eq!(payload.status, LoftStatus::Available);
    }
}
