//! Calendar date type for ledger entries and balance dates.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{AccrueError, AccrueResult};

/// A calendar date with no time-of-day component.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Anything carrying a
/// wall-clock time is normalized to its calendar day on the way in, so two
/// instants on the same day always compare equal.
///
/// # Example
///
/// ```rust
/// use accrue_core::types::Date;
///
/// let date = Date::from_ymd(2023, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next.to_string(), "2023-02-28");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `AccrueError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AccrueResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| AccrueError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `AccrueError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> AccrueResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| AccrueError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Truncates a date-time to its calendar day (local midnight).
    #[must_use]
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Date(datetime.date())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `AccrueError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> AccrueResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let new_day = self.day().min(days_in_month(new_year, new_month));

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date, clamping Feb 29 to Feb 28.
    ///
    /// # Errors
    ///
    /// Returns `AccrueError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> AccrueResult<Self> {
        self.add_months(years * 12)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    ///
    /// This is the plain difference (same day gives 0). The entry-to-balance
    /// day count lives in [`crate::daycounts`].
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = AccrueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<NaiveDateTime> for Date {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_datetime(datetime)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the plain number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2023, 6, 1).unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2024-01-01").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 1, 1).unwrap());
        assert_eq!(" 2024-01-01 ".parse::<Date>().unwrap(), date);
        assert!(Date::parse("01/01/2024").is_err());
        assert!(Date::parse("").is_err());
    }

    #[test]
    fn test_from_datetime_drops_time() {
        let late = NaiveDate::from_ymd_opt(2023, 3, 10)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap();
        let early = NaiveDate::from_ymd_opt(2023, 3, 10)
            .unwrap()
            .and_hms_opt(0, 0, 1)
            .unwrap();
        assert_eq!(Date::from(late), Date::from(early));
        assert_eq!(Date::from(late).to_string(), "2023-03-10");
    }

    #[test]
    fn test_add_months() {
        let date = Date::from_ymd(2023, 1, 31).unwrap();
        assert_eq!(date.add_months(1).unwrap(), Date::from_ymd(2023, 2, 28).unwrap());
        assert_eq!(date.add_months(13).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
        assert_eq!(date.add_months(-2).unwrap(), Date::from_ymd(2022, 11, 30).unwrap());
        assert_eq!(date.add_months(60).unwrap(), Date::from_ymd(2028, 1, 31).unwrap());
    }

    #[test]
    fn test_add_years_leap_day() {
        let leap = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(leap.add_years(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
        assert_eq!(leap.add_years(4).unwrap(), leap.add_months(48).unwrap());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d1.days_between(&d2), 365);
        assert_eq!(d2.days_between(&d1), -365);
        assert_eq!(d2 - d1, 365);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2023, 6, 1).unwrap();
        assert_eq!(format!("{}", date), "2023-06-01");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2023, 6, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2023-06-01\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
