//! Day counting between an entry date and a balance date.
//!
//! Interest on a ledger entry accrues from the start of the day it was
//! recorded to the end of the balance date. The count therefore runs from
//! midnight at the start of `start` to the following midnight after `end`:
//! a same-day pair counts as one day.
//!
//! # Usage
//!
//! ```rust
//! use accrue_core::daycounts::{days_between, ActualInclusive, DayCount};
//! use accrue_core::types::Date;
//!
//! let start = Date::from_ymd(2023, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 1, 1).unwrap();
//!
//! assert_eq!(days_between(start, end), 366);
//! assert_eq!(days_between(start, start), 1);
//!
//! let years = ActualInclusive.year_fraction(start, end);
//! assert!((years - 366.0 / 365.25).abs() < 1e-12);
//! ```

use crate::types::Date;

/// Average year length, in days, used to turn a day count into years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the convention.
    fn name(&self) -> &'static str;

    /// Calculates the day count between two dates.
    ///
    /// Can be negative if `end` precedes `start`.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Calculates the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> f64;
}

/// Actual days, end date inclusive, over a 365.25-day year.
///
/// # Formula
///
/// $$\text{Days} = (\text{end} - \text{start}) + 1$$
///
/// $$\text{Year Fraction} = \frac{\text{Days}}{365.25}$$
///
/// Leap days need no special handling: they are already present in the
/// actual calendar difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActualInclusive;

impl DayCount for ActualInclusive {
    fn name(&self) -> &'static str {
        "ACT+1/365.25"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        days_between(start, end)
    }

    #[allow(clippy::cast_precision_loss)]
    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        days_between(start, end) as f64 / DAYS_PER_YEAR
    }
}

/// Whole days from the midnight starting `start` to the midnight ending `end`.
///
/// Only calendar dates matter. When `end` precedes `start` the result is
/// negative (`end` one day before `start` gives 0, two days before gives -1);
/// callers treat that as a balance date before the entry date.
#[must_use]
pub fn days_between(start: Date, end: Date) -> i64 {
    start.days_between(&end) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_same_day_is_one() {
        assert_eq!(days_between(d(2023, 1, 1), d(2023, 1, 1)), 1);
        assert_eq!(days_between(d(2024, 2, 29), d(2024, 2, 29)), 1);
    }

    #[test]
    fn test_forward_counts() {
        assert_eq!(days_between(d(2023, 1, 1), d(2023, 1, 2)), 2);
        assert_eq!(days_between(d(2023, 1, 1), d(2024, 1, 1)), 366);
        assert_eq!(days_between(d(2023, 6, 1), d(2024, 1, 1)), 215);
    }

    #[test]
    fn test_leap_year_period() {
        // 2024 has Feb 29
        assert_eq!(days_between(d(2024, 1, 1), d(2025, 1, 1)), 367);
        assert_eq!(days_between(d(2024, 2, 28), d(2024, 3, 1)), 3);
    }

    #[test]
    fn test_reverse_direction() {
        let early = d(2023, 1, 1);
        let late = d(2023, 1, 11);
        assert_eq!(days_between(early, late), 11);
        assert_eq!(days_between(late, early), -9);
        assert!(days_between(late, early) < 0);
        assert_eq!(days_between(d(2023, 1, 2), d(2023, 1, 1)), 0);
    }

    #[test]
    fn test_time_of_day_ignored() {
        let morning = NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        let night = NaiveDate::from_ymd_opt(2023, 5, 3)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        assert_eq!(days_between(Date::from(morning), Date::from(night)), 3);
        assert_eq!(days_between(Date::from(night), Date::from(night)), 1);
    }

    #[test]
    fn test_actual_inclusive_trait() {
        let dc = ActualInclusive;
        assert_eq!(dc.name(), "ACT+1/365.25");
        assert_eq!(dc.day_count(d(2023, 1, 1), d(2023, 12, 31)), 365);
        assert_relative_eq!(
            dc.year_fraction(d(2023, 1, 1), d(2023, 12, 31)),
            365.0 / 365.25,
            epsilon = 1e-12
        );
    }
}
