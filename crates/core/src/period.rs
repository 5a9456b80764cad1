//! Calendar month helpers.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// The calendar month containing a given day, as seen from that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPeriod {
    /// The reference day ("today").
    pub today: NaiveDate,
    /// First day of the month.
    pub first_day: NaiveDate,
    /// Number of days in the month.
    pub days_in_month: u32,
}

impl MonthPeriod {
    /// Builds the period for the month containing `today`.
    #[must_use]
    pub fn containing(today: NaiveDate) -> Self {
        Self {
            today,
            first_day: today - Days::new(u64::from(today.day0())),
            days_in_month: days_in_month(today),
        }
    }

    /// Days elapsed in the month so far, counting today.
    #[must_use]
    pub fn days_elapsed(&self) -> u32 {
        self.today.day()
    }

    /// Monday of the week containing today.
    #[must_use]
    pub fn week_start(&self) -> NaiveDate {
        self.today - Days::new(u64::from(self.today.weekday().num_days_from_monday()))
    }

    /// Returns true if the date falls in the same year and month as today.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.today.year() && date.month() == self.today.month()
    }
}

/// Number of days in the month containing `date`.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next_month| next_month.pred_opt())
        .map_or(31, |last_day| last_day.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2026, 1, 15), 31)]
    #[case(date(2026, 2, 1), 28)]
    #[case(date(2028, 2, 29), 29)]
    #[case(date(2026, 4, 30), 30)]
    #[case(date(2026, 12, 31), 31)]
    fn test_days_in_month(#[case] day: NaiveDate, #[case] expected: u32) {
        assert_eq!(days_in_month(day), expected);
    }

    #[test]
    fn test_month_period_bounds() {
        let period = MonthPeriod::containing(date(2026, 10, 18));

        assert_eq!(period.first_day, date(2026, 10, 1));
        assert_eq!(period.days_in_month, 31);
        assert_eq!(period.days_elapsed(), 18);
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2026-10-18 is a Sunday
        let period = MonthPeriod::containing(date(2026, 10, 18));
        assert_eq!(period.week_start(), date(2026, 10, 12));

        let monday = MonthPeriod::containing(date(2026, 10, 12));
        assert_eq!(monday.week_start(), date(2026, 10, 12));
    }

    #[test]
    fn test_week_start_can_cross_month_boundary() {
        // 2026-10-01 is a Thursday
        let period = MonthPeriod::containing(date(2026, 10, 1));
        assert_eq!(period.week_start(), date(2026, 9, 28));
    }

    #[test]
    fn test_contains_matches_year_and_month() {
        let period = MonthPeriod::containing(date(2026, 10, 18));

        assert!(period.contains(date(2026, 10, 31)));
        assert!(!period.contains(date(2026, 9, 30)));
        assert!(!period.contains(date(2025, 10, 18)));
    }
}
