//! # Accrue Engine
//!
//! Compound-interest valuation of loan ledgers.
//!
//! Every ledger entry accrues interest independently from its own date to
//! the balance date:
//!
//! $$FV = A \times \left(1 + \frac{r}{n}\right)^{n t}, \quad t = \frac{\text{days}}{365.25}$$
//!
//! and the net balance is the sum of borrowed future values minus the sum of
//! paid future values. Positive means owed.
//!
//! ## Modules
//!
//! - [`compounding`]: growth factor and effective annual rate
//! - [`evaluation`]: per-entry breakdown and aggregation
//! - [`ledger`]: in-memory entry store with stable ids
//! - [`validation`]: field-level checks for entry input
//! - [`presets`]: quick balance-date choices
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::{CompoundingFrequency, Date, EntryKind};
//! use accrue_engine::{CompoundingConfig, Ledger, NewEntry};
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = Ledger::new();
//! let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();
//! ledger.add(NewEntry::new(date(2023, 1, 1), dec!(10000), EntryKind::Borrowed));
//! ledger.add(NewEntry::new(date(2023, 6, 1), dec!(5000), EntryKind::Paid));
//!
//! let config = CompoundingConfig::from_percent(
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     10.0,
//!     CompoundingFrequency::Monthly,
//! );
//! let evaluation = ledger.evaluate(&config);
//! assert!(evaluation.balance.net_balance > 5000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod compounding;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod ledger;
pub mod presets;
pub mod validation;

pub use config::{CompoundingConfig, DEFAULT_RATE_PERCENT};
pub use error::{EngineError, EngineResult, Validate, ValidationError};
pub use evaluation::{
    evaluate, evaluate_entry, BalanceResult, BalanceStatus, EntryResult, Evaluation,
};
pub use ledger::{Ledger, NewEntry};
pub use presets::BalanceDatePreset;
pub use validation::EntryDraft;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::CompoundingConfig;
    pub use crate::error::{EngineError, EngineResult, Validate};
    pub use crate::evaluation::{evaluate, BalanceResult, BalanceStatus, EntryResult, Evaluation};
    pub use crate::ledger::{Ledger, NewEntry};
    pub use crate::presets::BalanceDatePreset;
    pub use crate::validation::EntryDraft;
    pub use accrue_core::prelude::*;
}
