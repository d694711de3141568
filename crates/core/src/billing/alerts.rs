//! Due-date classification for bill alerts.
//!
//! A bill due today is still upcoming (highest urgency), not overdue.
//! Urgency thresholds mirror the dashboard badges: overdue and due-today
//! are critical, due within 3 days is soon, anything later is normal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How soon a bill needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Overdue or due today.
    Critical,
    /// Due within the next 3 days.
    Soon,
    /// Due later.
    Normal,
}

/// Classification of a due date against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BillStatus {
    /// Due today or later. `days_until_due == 0` means due today.
    Upcoming {
        /// Whole days from the reference date to the due date (>= 0).
        days_until_due: i64,
    },
    /// Past due. `days_overdue` is always >= 1.
    Overdue {
        /// Whole days since the due date (>= 1).
        days_overdue: i64,
    },
}

impl BillStatus {
    /// Badge urgency for this status.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        match self {
            Self::Overdue { .. } | Self::Upcoming { days_until_due: 0 } => Urgency::Critical,
            Self::Upcoming { days_until_due } if *days_until_due <= 3 => Urgency::Soon,
            Self::Upcoming { .. } => Urgency::Normal,
        }
    }

    /// Whether this bill is past due.
    #[must_use]
    pub const fn is_overdue(&self) -> bool {
        matches!(self, Self::Overdue { .. })
    }
}

/// Classify a due date relative to `today`.
///
/// Pure function of its inputs: identical arguments always produce an
/// identical classification.
#[must_use]
pub fn classify(today: NaiveDate, due: NaiveDate) -> BillStatus {
    let days = (due - today).num_days();
    if days >= 0 {
        BillStatus::Upcoming {
            days_until_due: days,
        }
    } else {
        BillStatus::Overdue {
            days_overdue: -days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_due_today_is_upcoming_with_zero_days() {
        let status = classify(date(2024, 6, 10), date(2024, 6, 10));
        assert_eq!(status, BillStatus::Upcoming { days_until_due: 0 });
        assert_eq!(status.urgency(), Urgency::Critical);
        assert!(!status.is_overdue());
    }

    #[test]
    fn test_one_day_past_is_overdue_by_one() {
        let status = classify(date(2024, 6, 11), date(2024, 6, 10));
        assert_eq!(status, BillStatus::Overdue { days_overdue: 1 });
        assert_eq!(status.urgency(), Urgency::Critical);
        assert!(status.is_overdue());
    }

    #[test]
    fn test_due_within_three_days_is_soon() {
        for days in 1..=3 {
            let due = date(2024, 6, 10) + chrono::Duration::days(days);
            let status = classify(date(2024, 6, 10), due);
            assert_eq!(status.urgency(), Urgency::Soon, "day offset {days}");
        }
    }

    #[test]
    fn test_due_later_is_normal() {
        let status = classify(date(2024, 6, 10), date(2024, 6, 20));
        assert_eq!(status, BillStatus::Upcoming { days_until_due: 10 });
        assert_eq!(status.urgency(), Urgency::Normal);
    }

    #[test]
    fn test_long_overdue() {
        let status = classify(date(2024, 7, 1), date(2024, 6, 1));
        assert_eq!(status, BillStatus::Overdue { days_overdue: 30 });
    }

    #[test]
    fn test_classification_is_idempotent() {
        let (today, due) = (date(2024, 6, 10), date(2024, 6, 12));
        assert_eq!(classify(today, due), classify(today, due));
    }

    #[test]
    fn test_serde_tagged_representation() {
        let json = serde_json::to_value(BillStatus::Overdue { days_overdue: 2 })
            .expect("serialize");
        assert_eq!(json["state"], "overdue");
        assert_eq!(json["days_overdue"], 2);
    }
}
