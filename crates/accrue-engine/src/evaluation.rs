//! Per-entry valuation and net balance aggregation.
//!
//! [`evaluate`] is the single source of every derived quantity: the summary
//! and the per-entry breakdown both read from the [`EntryResult`]s it returns.
//! Nothing here is rounded; rounding to cents is a display concern.

use accrue_core::daycounts::{ActualInclusive, DayCount};
use accrue_core::{EntryId, EntryKind, LedgerEntry};
use serde::Serialize;
use std::fmt;

use crate::compounding;
use crate::config::CompoundingConfig;

/// Valuation of one entry as of the balance date.
///
/// Borrows its source entry, so results cannot outlive a change to the
/// entries they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryResult<'a> {
    /// Source entry.
    pub entry: &'a LedgerEntry,
    /// Days from the entry date to the end of the balance date.
    pub days_elapsed: i64,
    /// `days_elapsed / 365.25`.
    pub years_elapsed: f64,
    /// Compounding periods per year.
    pub compounds_per_year: u32,
    /// `compounds_per_year * years_elapsed`, unrounded.
    pub compound_periods: f64,
    /// `annual_rate / compounds_per_year`.
    pub periodic_rate: f64,
    /// `(1 + periodic_rate) ^ compound_periods`.
    pub growth_factor: f64,
    /// `(1 + periodic_rate) ^ compounds_per_year - 1`.
    pub effective_annual_rate: f64,
    /// `amount * growth_factor`.
    pub future_value: f64,
}

impl EntryResult<'_> {
    /// Interest accrued on top of the nominal amount (negative when discounting).
    #[must_use]
    pub fn accrued_interest(&self) -> f64 {
        self.future_value - self.entry.amount_f64()
    }

    /// Future value with the entry's sign: positive for borrowed, negative for paid.
    #[must_use]
    pub fn signed_value(&self) -> f64 {
        self.entry.kind().sign() * self.future_value
    }
}

/// Whether the net balance is owed or in credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Net balance is positive.
    Owed,
    /// Net balance is zero or negative.
    InCredit,
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceStatus::Owed => write!(f, "Owed"),
            BalanceStatus::InCredit => write!(f, "In credit"),
        }
    }
}

/// Aggregate over all entries of one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BalanceResult {
    /// Sum of future values of borrowed entries.
    pub total_borrowed: f64,
    /// Sum of future values of paid entries.
    pub total_paid: f64,
    /// `total_borrowed - total_paid`; positive means owed.
    pub net_balance: f64,
}

impl BalanceResult {
    /// Aggregates entry results.
    #[must_use]
    pub fn from_results(results: &[EntryResult<'_>]) -> Self {
        let mut total_borrowed = 0.0;
        let mut total_paid = 0.0;

        for result in results {
            match result.entry.kind() {
                EntryKind::Borrowed => total_borrowed += result.future_value,
                EntryKind::Paid => total_paid += result.future_value,
            }
        }

        Self {
            total_borrowed,
            total_paid,
            net_balance: total_borrowed - total_paid,
        }
    }

    /// Owed when the net balance is positive, otherwise in credit.
    #[must_use]
    pub fn status(&self) -> BalanceStatus {
        if self.net_balance > 0.0 {
            BalanceStatus::Owed
        } else {
            BalanceStatus::InCredit
        }
    }
}

/// Output of one [`evaluate`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation<'a> {
    /// Parameters the evaluation was run with.
    pub config: CompoundingConfig,
    /// One result per input entry, in input order.
    pub entries: Vec<EntryResult<'a>>,
    /// Net balance.
    pub balance: BalanceResult,
}

impl<'a> Evaluation<'a> {
    /// Splits into per-entry results and the aggregate.
    #[must_use]
    pub fn into_parts(self) -> (Vec<EntryResult<'a>>, BalanceResult) {
        (self.entries, self.balance)
    }

    /// Looks up the result for an entry id.
    #[must_use]
    pub fn find(&self, id: EntryId) -> Option<&EntryResult<'a>> {
        self.entries.iter().find(|r| r.entry.id() == id)
    }
}

/// Values a single entry as of `config.balance_date`.
#[must_use]
pub fn evaluate_entry<'a>(entry: &'a LedgerEntry, config: &CompoundingConfig) -> EntryResult<'a> {
    let days_elapsed = ActualInclusive.day_count(entry.date(), config.balance_date);
    let years_elapsed = ActualInclusive.year_fraction(entry.date(), config.balance_date);
    let growth_factor =
        compounding::growth_factor(config.annual_rate, config.frequency, years_elapsed);

    EntryResult {
        entry,
        days_elapsed,
        years_elapsed,
        compounds_per_year: config.compounds_per_year(),
        compound_periods: compounding::compound_periods(config.frequency, years_elapsed),
        periodic_rate: config.periodic_rate(),
        growth_factor,
        effective_annual_rate: config.effective_annual_rate(),
        future_value: entry.amount_f64() * growth_factor,
    }
}

/// Values every entry independently and aggregates the net balance.
///
/// Results come back in input order. No input is validated and the call
/// cannot fail: an empty input gives a zero balance, a balance date before an
/// entry date discounts that entry, and non-finite inputs give non-finite
/// outputs.
///
/// # Example
///
/// ```rust
/// use accrue_core::{CompoundingFrequency, Date, EntryId, EntryKind, LedgerEntry};
/// use accrue_engine::{evaluate, CompoundingConfig};
/// use rust_decimal_macros::dec;
///
/// let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
/// let entries = vec![
///     LedgerEntry::new(EntryId::new(1), date(2023, 1, 1), dec!(10000), EntryKind::Borrowed),
///     LedgerEntry::new(EntryId::new(2), date(2023, 6, 1), dec!(5000), EntryKind::Paid),
/// ];
/// let config = CompoundingConfig::new(
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     0.10,
///     CompoundingFrequency::Monthly,
/// );
///
/// let (results, balance) = evaluate(&entries, &config).into_parts();
/// assert_eq!(results.len(), 2);
/// assert!(balance.net_balance > 0.0);
/// ```
pub fn evaluate<'a, I>(entries: I, config: &CompoundingConfig) -> Evaluation<'a>
where
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    let results: Vec<EntryResult<'a>> = entries
        .into_iter()
        .map(|entry| evaluate_entry(entry, config))
        .collect();
    let balance = BalanceResult::from_results(&results);

    tracing::debug!(
        entries = results.len(),
        balance_date = %config.balance_date,
        annual_rate = config.annual_rate,
        frequency = %config.frequency,
        net_balance = balance.net_balance,
        "evaluated ledger"
    );
    if !balance.net_balance.is_finite() {
        tracing::warn!(net_balance = balance.net_balance, "net balance is not finite");
    }

    Evaluation {
        config: *config,
        entries: results,
        balance,
    }
}
