//! Quick choices for the balance date.

use accrue_core::{AccrueError, AccrueResult, Date};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shortcut for picking a balance date.
///
/// Except for `Today`, presets are offsets from an anchor date: the earliest
/// entry in the ledger, or today when there are no entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceDatePreset {
    /// Today's date.
    Today,
    /// One month after the anchor.
    OneMonth,
    /// One year after the anchor.
    OneYear,
    /// Five years after the anchor.
    FiveYears,
}

impl BalanceDatePreset {
    /// Months added to the anchor, or `None` for `Today`.
    #[must_use]
    pub const fn months(&self) -> Option<i32> {
        match self {
            BalanceDatePreset::Today => None,
            BalanceDatePreset::OneMonth => Some(1),
            BalanceDatePreset::OneYear => Some(12),
            BalanceDatePreset::FiveYears => Some(60),
        }
    }

    /// Resolves the preset to a concrete date.
    pub fn resolve(&self, earliest_entry: Option<Date>, today: Date) -> AccrueResult<Date> {
        match self.months() {
            None => Ok(today),
            Some(months) => earliest_entry.unwrap_or(today).add_months(months),
        }
    }

    /// Returns all presets.
    #[must_use]
    pub fn all() -> &'static [BalanceDatePreset] {
        &[
            BalanceDatePreset::Today,
            BalanceDatePreset::OneMonth,
            BalanceDatePreset::OneYear,
            BalanceDatePreset::FiveYears,
        ]
    }
}

impl fmt::Display for BalanceDatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BalanceDatePreset::Today => "Today",
            BalanceDatePreset::OneMonth => "1 Month",
            BalanceDatePreset::OneYear => "1 Year",
            BalanceDatePreset::FiveYears => "5 Years",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BalanceDatePreset {
    type Err = AccrueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(BalanceDatePreset::Today),
            "1m" | "one-month" | "1-month" => Ok(BalanceDatePreset::OneMonth),
            "1y" | "one-year" | "1-year" => Ok(BalanceDatePreset::OneYear),
            "5y" | "five-years" | "5-years" => Ok(BalanceDatePreset::FiveYears),
            _ => Err(AccrueError::UnknownPreset(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_today_ignores_anchor() {
        let today = d(2024, 10, 1);
        assert_eq!(
            BalanceDatePreset::Today.resolve(Some(d(2020, 1, 1)), today).unwrap(),
            today
        );
    }

    #[test]
    fn test_offsets_from_earliest_entry() {
        let earliest = Some(d(2023, 1, 31));
        let today = d(2024, 10, 1);
        assert_eq!(
            BalanceDatePreset::OneMonth.resolve(earliest, today).unwrap(),
            d(2023, 2, 28)
        );
        assert_eq!(
            BalanceDatePreset::OneYear.resolve(earliest, today).unwrap(),
            d(2024, 1, 31)
        );
        assert_eq!(
            BalanceDatePreset::FiveYears.resolve(earliest, today).unwrap(),
            d(2028, 1, 31)
        );
    }

    #[test]
    fn test_no_entries_anchors_on_today() {
        let today = d(2024, 2, 29);
        assert_eq!(
            BalanceDatePreset::OneYear.resolve(None, today).unwrap(),
            d(2025, 2, 28)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("1m".parse::<BalanceDatePreset>().unwrap(), BalanceDatePreset::OneMonth);
        assert_eq!(
            "Five-Years".parse::<BalanceDatePreset>().unwrap(),
            BalanceDatePreset::FiveYears
        );
        assert_eq!(
            "2w".parse::<BalanceDatePreset>().unwrap_err(),
            AccrueError::UnknownPreset("2w".to_string())
        );
        assert_eq!(BalanceDatePreset::all().len(), 4);
    }
}
