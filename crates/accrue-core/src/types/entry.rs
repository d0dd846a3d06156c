//! Ledger entry: one dated cash movement.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Date;
use crate::error::{AccrueError, AccrueResult};

/// Identifier of a ledger entry, unique for the lifetime of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money borrowed; increases the balance owed.
    Borrowed,
    /// Money repaid; decreases the balance owed.
    Paid,
}

impl EntryKind {
    /// Sign applied to the entry's value in the net balance.
    #[must_use]
    pub const fn sign(&self) -> f64 {
        match self {
            EntryKind::Borrowed => 1.0,
            EntryKind::Paid => -1.0,
        }
    }

    /// Lowercase name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Borrowed => "borrowed",
            EntryKind::Paid => "paid",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::Borrowed => "Borrowed",
            EntryKind::Paid => "Paid",
        };
        write!(f, "{name}")
    }
}

impl FromStr for EntryKind {
    type Err = AccrueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "borrowed" | "borrow" | "b" => Ok(EntryKind::Borrowed),
            "paid" | "pay" | "p" => Ok(EntryKind::Paid),
            _ => Err(AccrueError::UnknownEntryKind(s.to_string())),
        }
    }
}

/// An immutable record of one borrowed or repaid amount.
///
/// Amounts are held as decimals rounded to cents; the engine converts them to
/// `f64` only when compounding.
///
/// # Example
///
/// ```rust
/// use accrue_core::types::{Date, EntryId, EntryKind, LedgerEntry};
/// use rust_decimal_macros::dec;
///
/// let entry = LedgerEntry::new(
///     EntryId::new(1),
///     Date::from_ymd(2023, 1, 1).unwrap(),
///     dec!(10000.005),
///     EntryKind::Borrowed,
/// );
/// assert_eq!(entry.amount(), dec!(10000.01));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    id: EntryId,
    date: Date,
    amount: Decimal,
    kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl LedgerEntry {
    /// Creates an entry, rounding the amount to two decimal places.
    #[must_use]
    pub fn new(id: EntryId, date: Date, amount: Decimal, kind: EntryKind) -> Self {
        Self {
            id,
            date,
            amount: round_cents(amount),
            kind,
            description: None,
        }
    }

    /// Attaches a free-text note.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Entry identifier.
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Date the movement happened.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Nominal amount, two decimal places.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Nominal amount as a float, for compounding.
    #[must_use]
    pub fn amount_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or(f64::NAN)
    }

    /// Borrowed or paid.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Optional note.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Rounds to cents, half away from zero.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Parses a user-entered amount: a plain non-negative decimal with at most
/// two fractional digits. Exponent notation is rejected.
///
/// # Errors
///
/// Returns `AccrueError::InvalidAmount` naming the rejected text.
pub fn parse_amount(raw: &str) -> AccrueResult<Decimal> {
    let raw = raw.trim();
    let amount =
        Decimal::from_str(raw).map_err(|_| AccrueError::invalid_amount(raw, "is not a number"))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AccrueError::invalid_amount(raw, "cannot be negative"));
    }
    if amount.normalize().scale() > 2 {
        return Err(AccrueError::invalid_amount(
            raw,
            "can have at most two decimal places",
        ));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> Date {
        Date::from_ymd(2023, 1, 1).unwrap()
    }

    #[test]
    fn test_amount_rounded_to_cents() {
        let e = LedgerEntry::new(EntryId::new(1), date(), dec!(12.345), EntryKind::Paid);
        assert_eq!(e.amount(), dec!(12.35));
        let e = LedgerEntry::new(EntryId::new(1), date(), dec!(5000), EntryKind::Paid);
        assert_eq!(e.amount(), dec!(5000));
        assert_eq!(e.amount_f64(), 5000.0);
    }

    #[test]
    fn test_kind_sign_and_parse() {
        assert_eq!(EntryKind::Borrowed.sign(), 1.0);
        assert_eq!(EntryKind::Paid.sign(), -1.0);
        assert_eq!("BORROWED".parse::<EntryKind>().unwrap(), EntryKind::Borrowed);
        assert_eq!("p".parse::<EntryKind>().unwrap(), EntryKind::Paid);
        assert!("lent".parse::<EntryKind>().is_err());
        assert_eq!(EntryKind::Paid.as_str().parse::<EntryKind>().unwrap(), EntryKind::Paid);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.30 ").unwrap(), dec!(12.30));
        assert_eq!(parse_amount("0").unwrap(), dec!(0));
        assert_eq!(
            parse_amount("1234567890123456.78").unwrap(),
            dec!(1234567890123456.78)
        );
        assert!(parse_amount("12.500").is_ok());
        assert_eq!(
            parse_amount("-3").unwrap_err(),
            AccrueError::invalid_amount("-3", "cannot be negative")
        );
        assert_eq!(
            parse_amount("12.345").unwrap_err().to_string(),
            "Amount '12.345' can have at most two decimal places"
        );
        assert!(parse_amount("1e3").is_err());
        assert!(parse_amount("ten").is_err());
    }

    #[test]
    fn test_description() {
        let e = LedgerEntry::new(EntryId::new(7), date(), dec!(1), EntryKind::Borrowed)
            .with_description("car repair");
        assert_eq!(e.description(), Some("car repair"));
        assert_eq!(e.id().get(), 7);
    }

    #[test]
    fn test_serde_shape() {
        let e = LedgerEntry::new(EntryId::new(3), date(), dec!(10.5), EntryKind::Borrowed);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["date"], "2023-01-01");
        assert_eq!(json["kind"], "borrowed");
        assert!(json.get("description").is_none());
    }
}
