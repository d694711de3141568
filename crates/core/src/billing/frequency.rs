//! Billing frequencies.
//!
//! The store constrains frequency columns to the seven French spellings
//! below, so an unrecognized value reaching [`BillFrequency::from_str`] is a
//! data-integrity bug in the caller's data, not a user error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A frequency value outside the closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid billing frequency: {0}")]
pub struct InvalidFrequency(pub String);

/// How often a utility bill recurs.
///
/// Wire spellings are the French values stored in the
/// `frequence_paiement_*` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillFrequency {
    /// Every 7 days (`hebdomadaire`).
    #[serde(rename = "hebdomadaire")]
    Weekly,
    /// Every calendar month (`mensuel`).
    #[serde(rename = "mensuel")]
    Monthly,
    /// Every 2 months (`bimestriel`).
    #[serde(rename = "bimestriel")]
    Bimonthly,
    /// Every 3 months (`trimestriel`).
    #[serde(rename = "trimestriel")]
    Quarterly,
    /// Every 4 months (`quadrimestriel`).
    #[serde(rename = "quadrimestriel")]
    FourMonthly,
    /// Every 6 months (`semestriel`).
    #[serde(rename = "semestriel")]
    SixMonthly,
    /// Every 12 months (`annuel`).
    #[serde(rename = "annuel")]
    Yearly,
}

impl BillFrequency {
    /// All frequencies, shortest interval first.
    pub const ALL: [Self; 7] = [
        Self::Weekly,
        Self::Monthly,
        Self::Bimonthly,
        Self::Quarterly,
        Self::FourMonthly,
        Self::SixMonthly,
        Self::Yearly,
    ];

    /// Wire spelling used in the database and JSON payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "hebdomadaire",
            Self::Monthly => "mensuel",
            Self::Bimonthly => "bimestriel",
            Self::Quarterly => "trimestriel",
            Self::FourMonthly => "quadrimestriel",
            Self::SixMonthly => "semestriel",
            Self::Yearly => "annuel",
        }
    }

    /// Calendar-month span for month-family frequencies, `None` for weekly.
    #[must_use]
    pub const fn months(&self) -> Option<u32> {
        match self {
            Self::Weekly => None,
            Self::Monthly => Some(1),
            Self::Bimonthly => Some(2),
            Self::Quarterly => Some(3),
            Self::FourMonthly => Some(4),
            Self::SixMonthly => Some(6),
            Self::Yearly => Some(12),
        }
    }
}

impl std::fmt::Display for BillFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BillFrequency {
    type Err = InvalidFrequency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hebdomadaire" => Ok(Self::Weekly),
            "mensuel" => Ok(Self::Monthly),
            "bimestriel" => Ok(Self::Bimonthly),
            "trimestriel" => Ok(Self::Quarterly),
            "quadrimestriel" => Ok(Self::FourMonthly),
            "semestriel" => Ok(Self::SixMonthly),
            "annuel" => Ok(Self::Yearly),
            other => Err(InvalidFrequency(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_round_trip() {
        for frequency in BillFrequency::ALL {
            let parsed: BillFrequency = frequency.as_str().parse().expect("parse");
            assert_eq!(parsed, frequency);

            let json = serde_json::to_string(&frequency).expect("serialize");
            assert_eq!(json, format!("\"{frequency}\""));
            let back: BillFrequency = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, frequency);
        }
    }

    #[test]
    fn test_unknown_value_is_invalid_frequency() {
        let err = "fortnightly".parse::<BillFrequency>().unwrap_err();
        assert_eq!(err, InvalidFrequency("fortnightly".to_string()));
        assert_eq!(
            err.to_string(),
            "invalid billing frequency: fortnightly"
        );
    }

    #[test]
    fn test_month_spans() {
        assert_eq!(BillFrequency::Weekly.months(), None);
        assert_eq!(BillFrequency::Monthly.months(), Some(1));
        assert_eq!(BillFrequency::Quarterly.months(), Some(3));
        assert_eq!(BillFrequency::Yearly.months(), Some(12));
    }
}
