//! Utility types billed per loft.
//!
//! Each loft carries one billing schedule per utility: a payment frequency
//! column and a next-due-date column. The store uses French column names
//! (`frequence_paiement_eau`, `prochaine_echeance_eau`, ...), one pair per
//! utility, so the column names are exposed here instead of being formatted
//! ad hoc at every call site.

use serde::{Deserialize, Serialize};

/// A utility billed against a loft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilityType {
    /// Water (`eau`).
    Eau,
    /// Energy (`energie`).
    Energie,
    /// Phone (`telephone`).
    Telephone,
    /// Internet (`internet`).
    Internet,
}

impl UtilityType {
    /// All utilities, in display order.
    pub const ALL: [Self; 4] = [Self::Eau, Self::Energie, Self::Telephone, Self::Internet];

    /// Wire spelling used in the database and JSON payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eau => "eau",
            Self::Energie => "energie",
            Self::Telephone => "telephone",
            Self::Internet => "internet",
        }
    }

    /// English label for logs and descriptions.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Eau => "water",
            Self::Energie => "energy",
            Self::Telephone => "phone",
            Self::Internet => "internet",
        }
    }

    /// Column holding the billing frequency for this utility.
    #[must_use]
    pub const fn frequency_column(&self) -> &'static str {
        match self {
            Self::Eau => "frequence_paiement_eau",
            Self::Energie => "frequence_paiement_energie",
            Self::Telephone => "frequence_paiement_telephone",
            Self::Internet => "frequence_paiement_internet",
        }
    }

    /// Column holding the next due date for this utility.
    #[must_use]
    pub const fn due_date_column(&self) -> &'static str {
        match self {
            Self::Eau => "prochaine_echeance_eau",
            Self::Energie => "prochaine_echeance_energie",
            Self::Telephone => "prochaine_echeance_telephone",
            Self::Internet => "prochaine_echeance_internet",
        }
    }
}

impl std::fmt::Display for UtilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UtilityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eau" => Ok(Self::Eau),
            "energie" => Ok(Self::Energie),
            "telephone" => Ok(Self::Telephone),
            "internet" => Ok(Self::Internet),
            _ => Err(format!("invalid utility type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utility_round_trip() {
        for utility in UtilityType::ALL {
            let parsed: UtilityType = utility.as_str().parse().expect("parse");
            assert_eq!(parsed, utility);
        }
        assert!("gaz".parse::<UtilityType>().is_err());
    }

    #[test]
    fn test_column_names_follow_wire_spelling() {
        assert_eq!(
            UtilityType::Eau.frequency_column(),
            "frequence_paiement_eau"
        );
        assert_eq!(
            UtilityType::Internet.due_date_column(),
            "prochaine_echeance_internet"
        );
    }
}
