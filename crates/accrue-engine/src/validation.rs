//! Field-level validation of entry input.
//!
//! An [`EntryDraft`] holds the raw text a user typed for one entry. It is
//! checked as a whole so that every problem can be reported at once, next to
//! the field it belongs to.

use accrue_core::{Date, EntryKind, LedgerEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::ledger::NewEntry;

/// Raw, unvalidated entry fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    /// Date as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Amount as typed.
    #[serde(default)]
    pub amount: String,
    /// `borrowed` or `paid`.
    #[serde(default, alias = "type")]
    pub kind: String,
    /// Optional note.
    #[serde(default)]
    pub description: Option<String>,
}

impl EntryDraft {
    /// Creates a draft from raw field values.
    pub fn new(
        date: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            kind: kind.into(),
            description: None,
        }
    }

    /// Attaches a note.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Prefills a draft from an existing entry, for editing.
    #[must_use]
    pub fn from_entry(entry: &LedgerEntry) -> Self {
        Self {
            date: entry.date().to_string(),
            amount: format!("{:.2}", entry.amount()),
            kind: entry.kind().as_str().to_string(),
            description: entry.description().map(str::to_string),
        }
    }

    /// Checks every field and returns the entry, or all field errors.
    ///
    /// `today` bounds the date: entries cannot be recorded in the future.
    pub fn validate(&self, today: Date) -> Result<NewEntry, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let date = match parse_date(&self.date, today) {
            Ok(date) => Some(date),
            Err(message) => {
                errors.push(ValidationError::new("date", message));
                None
            }
        };

        let amount = match parse_amount(&self.amount) {
            Ok(amount) => Some(amount),
            Err(message) => {
                errors.push(ValidationError::new("amount", message));
                None
            }
        };

        let kind = match EntryKind::from_str(&self.kind) {
            Ok(kind) => Some(kind),
            Err(_) if self.kind.trim().is_empty() => {
                errors.push(ValidationError::new("kind", "Type is required"));
                None
            }
            Err(_) => {
                errors.push(ValidationError::new(
                    "kind",
                    format!(
                        "Type must be 'borrowed' or 'paid', got '{}'",
                        self.kind.trim()
                    ),
                ));
                None
            }
        };

        match (date, amount, kind) {
            (Some(date), Some(amount), Some(kind)) if errors.is_empty() => Ok(NewEntry {
                date,
                amount,
                kind,
                description: self
                    .description
                    .as_deref()
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(str::to_string),
            }),
            _ => Err(errors),
        }
    }
}

fn parse_date(raw: &str, today: Date) -> Result<Date, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Date is required".to_string());
    }
    let date =
        Date::parse(raw).map_err(|_| format!("Date '{raw}' must be in YYYY-MM-DD format"))?;
    if date > today {
        return Err(format!("Date {date} is in the future"));
    }
    Ok(date)
}

fn parse_amount(raw: &str) -> Result<Decimal, String> {
    if raw.trim().is_empty() {
        return Err("Amount is required".to_string());
    }
    accrue_core::parse_amount(raw).map_err(|e| e.to_string())
}
