//! Next-due-date calculation.

use chrono::{Days, Months, NaiveDate};

use super::frequency::BillFrequency;

/// Compute the next due date after `current_due` for the given frequency.
///
/// Weekly adds exactly 7 days. Month-family frequencies use calendar-month
/// arithmetic: the day-of-month is preserved where valid and clamped to the
/// last day of the target month otherwise (Jan 31 + 1 month = Feb 28/29).
///
/// The result is strictly later than the input. Pure function: no clock
/// access, no side effects.
#[must_use]
pub fn next_due_date(current_due: NaiveDate, frequency: BillFrequency) -> NaiveDate {
    match frequency.months() {
        None => current_due
            .checked_add_days(Days::new(7))
            .unwrap_or(NaiveDate::MAX),
        Some(months) => current_due
            .checked_add_months(Months::new(months))
            .unwrap_or(NaiveDate::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_weekly_adds_seven_days() {
        assert_eq!(
            next_due_date(date(2024, 3, 1), BillFrequency::Weekly),
            date(2024, 3, 8)
        );
    }

    #[test]
    fn test_weekly_crosses_month_boundary() {
        assert_eq!(
            next_due_date(date(2024, 1, 29), BillFrequency::Weekly),
            date(2024, 2, 5)
        );
    }

    #[test]
    fn test_monthly_preserves_day_of_month() {
        assert_eq!(
            next_due_date(date(2024, 3, 15), BillFrequency::Monthly),
            date(2024, 4, 15)
        );
    }

    #[test]
    fn test_monthly_clamps_to_leap_february() {
        // 2024 is a leap year
        assert_eq!(
            next_due_date(date(2024, 1, 31), BillFrequency::Monthly),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_monthly_clamps_to_common_february() {
        assert_eq!(
            next_due_date(date(2023, 1, 31), BillFrequency::Monthly),
            date(2023, 2, 28)
        );
    }

    #[test]
    fn test_bimonthly_and_quarterly() {
        assert_eq!(
            next_due_date(date(2024, 5, 10), BillFrequency::Bimonthly),
            date(2024, 7, 10)
        );
        assert_eq!(
            next_due_date(date(2024, 11, 30), BillFrequency::Quarterly),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_four_monthly_and_six_monthly() {
        assert_eq!(
            next_due_date(date(2024, 2, 29), BillFrequency::FourMonthly),
            date(2024, 6, 29)
        );
        assert_eq!(
            next_due_date(date(2024, 8, 31), BillFrequency::SixMonthly),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_yearly_clamps_leap_day() {
        // Feb 29 + 12 months lands in a common year
        assert_eq!(
            next_due_date(date(2024, 2, 29), BillFrequency::Yearly),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_result_is_strictly_later_for_all_frequencies() {
        let starts = [
            date(2023, 1, 1),
            date(2023, 12, 31),
            date(2024, 2, 29),
            date(2024, 6, 15),
        ];
        for start in starts {
            for frequency in BillFrequency::ALL {
                let next = next_due_date(start, frequency);
                assert!(next > start, "{frequency}: {next} not after {start}");
            }
        }
    }

    #[test]
    fn test_referential_transparency() {
        let due = date(2024, 4, 30);
        assert_eq!(
            next_due_date(due, BillFrequency::SixMonthly),
            next_due_date(due, BillFrequency::SixMonthly)
        );
    }
}
