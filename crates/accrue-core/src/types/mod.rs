//! Domain types for loan balance calculations.
//!
//! - [`Date`]: Calendar date with no time of day
//! - [`LedgerEntry`]: A dated borrowed/paid amount
//! - [`CompoundingFrequency`]: Compounding periods per year

mod date;
mod entry;
mod frequency;

pub use date::Date;
pub use entry::{parse_amount, round_cents, EntryId, EntryKind, LedgerEntry};
pub use frequency::CompoundingFrequency;
