//! In-memory ledger of entries for one session.
//!
//! The ledger owns the entries; evaluations borrow them. Because an
//! [`Evaluation`] holds shared references into the ledger, the ledger cannot
//! be edited while results from it are alive, and any edit forces a fresh
//! evaluation.

use accrue_core::{Date, EntryId, EntryKind, LedgerEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CompoundingConfig;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::{evaluate, Evaluation};
use crate::presets::BalanceDatePreset;

/// Entry fields before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Date the movement happened.
    pub date: Date,
    /// Nominal amount.
    pub amount: Decimal,
    /// Borrowed or paid.
    pub kind: EntryKind,
    /// Optional note.
    pub description: Option<String>,
}

impl NewEntry {
    /// Creates entry fields without a description.
    #[must_use]
    pub fn new(date: Date, amount: Decimal, kind: EntryKind) -> Self {
        Self {
            date,
            amount,
            kind,
            description: None,
        }
    }

    /// Attaches a note.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn into_entry(self, id: EntryId) -> LedgerEntry {
        let entry = LedgerEntry::new(id, self.date, self.amount, self.kind);
        match self.description {
            Some(description) => entry.with_description(description),
            None => entry,
        }
    }
}

/// Session-scoped collection of ledger entries.
///
/// Ids increase monotonically and are never handed out twice, even after
/// the entry holding one is removed.
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds an entry and returns its new id.
    pub fn add(&mut self, entry: NewEntry) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(entry.into_entry(id));
        tracing::debug!(%id, "added ledger entry");
        id
    }

    /// Replaces every field of an existing entry, keeping its id.
    ///
    /// Returns the previous version.
    pub fn replace(&mut self, id: EntryId, entry: NewEntry) -> EngineResult<LedgerEntry> {
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(EngineError::EntryNotFound { id })?;
        let previous = std::mem::replace(slot, entry.into_entry(id));
        tracing::debug!(%id, "replaced ledger entry");
        Ok(previous)
    }

    /// Removes an entry and returns it.
    pub fn remove(&mut self, id: EntryId) -> EngineResult<LedgerEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or(EngineError::EntryNotFound { id })?;
        tracing::debug!(%id, "removed ledger entry");
        Ok(self.entries.remove(index))
    }

    /// Looks up an entry.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the ledger has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter()
    }

    /// Entries ordered by date; entries on the same date keep insertion order.
    #[must_use]
    pub fn sorted_by_date(&self) -> Vec<&LedgerEntry> {
        let mut sorted: Vec<&LedgerEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.date());
        sorted
    }

    /// Date of the earliest entry, if any.
    #[must_use]
    pub fn earliest_date(&self) -> Option<Date> {
        self.entries.iter().map(LedgerEntry::date).min()
    }

    /// Resolves a balance-date preset against this ledger's earliest entry.
    pub fn balance_date_for(&self, preset: BalanceDatePreset, today: Date) -> EngineResult<Date> {
        Ok(preset.resolve(self.earliest_date(), today)?)
    }

    /// Evaluates all entries in date order.
    #[must_use]
    pub fn evaluate(&self, config: &CompoundingConfig) -> Evaluation<'_> {
        evaluate(self.sorted_by_date(), config)
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a LedgerEntry;
    type IntoIter = std::slice::Iter<'a, LedgerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrue_core::CompoundingFrequency;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_ids_are_sequential_and_not_reused() {
        let mut ledger = Ledger::new();
        let a = ledger.add(NewEntry::new(d(2023, 1, 1), dec!(100), EntryKind::Borrowed));
        let b = ledger.add(NewEntry::new(d(2023, 2, 1), dec!(50), EntryKind::Paid));
        assert_eq!(a, EntryId::new(1));
        assert_eq!(b, EntryId::new(2));

        ledger.remove(b).unwrap();
        let c = ledger.add(NewEntry::new(d(2023, 3, 1), dec!(25), EntryKind::Paid));
        assert_eq!(c, EntryId::new(3));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut ledger = Ledger::new();
        let id = ledger.add(NewEntry::new(d(2023, 1, 1), dec!(100), EntryKind::Borrowed));
        let previous = ledger
            .replace(
                id,
                NewEntry::new(d(2023, 1, 5), dec!(150.499), EntryKind::Paid)
                    .with_description("fixed"),
            )
            .unwrap();

        assert_eq!(previous.amount(), dec!(100));
        let current = ledger.get(id).unwrap();
        assert_eq!(current.id(), id);
        assert_eq!(current.date(), d(2023, 1, 5));
        assert_eq!(current.amount(), dec!(150.50));
        assert_eq!(current.kind(), EntryKind::Paid);
        assert_eq!(current.description(), Some("fixed"));
    }

    #[test]
    fn test_unknown_id() {
        let mut ledger = Ledger::new();
        let missing = EntryId::new(99);
        assert!(matches!(
            ledger.remove(missing),
            Err(EngineError::EntryNotFound { id }) if id == missing
        ));
        assert!(ledger
            .replace(missing, NewEntry::new(d(2023, 1, 1), dec!(1), EntryKind::Paid))
            .is_err());
        assert!(ledger.get(missing).is_none());
    }

    #[test]
    fn test_sorted_by_date_is_stable() {
        let mut ledger = Ledger::new();
        let late = ledger.add(NewEntry::new(d(2023, 6, 1), dec!(1), EntryKind::Paid));
        let first_same = ledger.add(NewEntry::new(d(2023, 1, 1), dec!(2), EntryKind::Borrowed));
        let second_same = ledger.add(NewEntry::new(d(2023, 1, 1), dec!(3), EntryKind::Borrowed));

        let ids: Vec<EntryId> = ledger.sorted_by_date().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![first_same, second_same, late]);
        assert_eq!(ledger.earliest_date(), Some(d(2023, 1, 1)));
        // insertion order is untouched
        assert_eq!(ledger.iter().next().unwrap().id(), late);
    }

    #[test]
    fn test_evaluate_in_date_order() {
        let mut ledger = Ledger::new();
        ledger.add(NewEntry::new(d(2023, 6, 1), dec!(5000), EntryKind::Paid));
        ledger.add(NewEntry::new(d(2023, 1, 1), dec!(10000), EntryKind::Borrowed));

        let config = CompoundingConfig::new(d(2024, 1, 1), 0.10, CompoundingFrequency::Monthly);
        let evaluation = ledger.evaluate(&config);
        assert_eq!(evaluation.entries[0].entry.date(), d(2023, 1, 1));
        assert_eq!(evaluation.entries[1].entry.date(), d(2023, 6, 1));
        assert!(evaluation.balance.net_balance > 0.0);
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.earliest_date(), None);
        let today = d(2024, 5, 20);
        assert_eq!(
            ledger.balance_date_for(BalanceDatePreset::OneYear, today).unwrap(),
            d(2025, 5, 20)
        );
        let config = CompoundingConfig::with_defaults(today);
        assert_eq!(ledger.evaluate(&config).balance.net_balance, 0.0);
    }

    #[test]
    fn test_preset_uses_earliest_entry() {
        let mut ledger = Ledger::new();
        ledger.add(NewEntry::new(d(2023, 3, 31), dec!(1), EntryKind::Borrowed));
        ledger.add(NewEntry::new(d(2023, 8, 1), dec!(1), EntryKind::Borrowed));
        let today = d(2024, 5, 20);
        assert_eq!(
            ledger.balance_date_for(BalanceDatePreset::OneMonth, today).unwrap(),
            d(2023, 4, 30)
        );
        assert_eq!(
            ledger.balance_date_for(BalanceDatePreset::Today, today).unwrap(),
            today
        );
    }
}
