//! Compounding frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AccrueError;

/// How many times per year interest is capitalized into principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    /// Daily compounding (365 per year)
    Daily,
    /// Weekly compounding (52 per year)
    Weekly,
    /// Monthly compounding (12 per year)
    #[default]
    Monthly,
    /// Yearly compounding (1 per year)
    Yearly,
}

impl CompoundingFrequency {
    /// Returns the fixed number of compounding periods per year.
    #[must_use]
    pub const fn compounds_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Yearly => 1,
        }
    }

    /// Returns all frequencies, least to most frequent.
    #[must_use]
    pub fn all() -> &'static [CompoundingFrequency] {
        &[
            CompoundingFrequency::Yearly,
            CompoundingFrequency::Monthly,
            CompoundingFrequency::Weekly,
            CompoundingFrequency::Daily,
        ]
    }

    /// Lowercase name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Daily => "daily",
            CompoundingFrequency::Weekly => "weekly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Daily => "Daily",
            CompoundingFrequency::Weekly => "Weekly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Yearly => "Yearly",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CompoundingFrequency {
    type Err = AccrueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "d" | "365" => Ok(CompoundingFrequency::Daily),
            "weekly" | "w" | "52" => Ok(CompoundingFrequency::Weekly),
            "monthly" | "m" | "12" => Ok(CompoundingFrequency::Monthly),
            "yearly" | "annual" | "annually" | "y" | "1" => Ok(CompoundingFrequency::Yearly),
            _ => Err(AccrueError::UnknownFrequency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compounds_per_year() {
        assert_eq!(CompoundingFrequency::Daily.compounds_per_year(), 365);
        assert_eq!(CompoundingFrequency::Weekly.compounds_per_year(), 52);
        assert_eq!(CompoundingFrequency::Monthly.compounds_per_year(), 12);
        assert_eq!(CompoundingFrequency::Yearly.compounds_per_year(), 1);
    }

    #[test]
    fn test_default_is_monthly() {
        assert_eq!(CompoundingFrequency::default(), CompoundingFrequency::Monthly);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Daily".parse::<CompoundingFrequency>().unwrap(), CompoundingFrequency::Daily);
        assert_eq!("w".parse::<CompoundingFrequency>().unwrap(), CompoundingFrequency::Weekly);
        assert_eq!("annual".parse::<CompoundingFrequency>().unwrap(), CompoundingFrequency::Yearly);
        assert!("hourly".parse::<CompoundingFrequency>().is_err());
    }

    #[test]
    fn test_all_round_trips_through_as_str() {
        for freq in CompoundingFrequency::all() {
            assert_eq!(freq.as_str().parse::<CompoundingFrequency>().unwrap(), *freq);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CompoundingFrequency::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");
    }
}
