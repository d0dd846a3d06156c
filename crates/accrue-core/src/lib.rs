//! # Accrue Core
//!
//! Core types and day counting for the Accrue loan balance calculator.
//!
//! - **Types**: [`Date`], [`LedgerEntry`], [`CompoundingFrequency`]
//! - **Day Counts**: the entry-to-balance-date day count and year fraction
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let entry = LedgerEntry::new(
//!     EntryId::new(1),
//!     Date::from_ymd(2023, 1, 1).unwrap(),
//!     dec!(10000),
//!     EntryKind::Borrowed,
//! );
//! let days = days_between(entry.date(), Date::from_ymd(2023, 1, 31).unwrap());
//! assert_eq!(days, 31);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{days_between, ActualInclusive, DayCount, DAYS_PER_YEAR};
    pub use crate::error::{AccrueError, AccrueResult};
    pub use crate::types::{
        parse_amount, CompoundingFrequency, Date, EntryId, EntryKind, LedgerEntry,
    };
}

// Re-export commonly used types at crate root
pub use error::{AccrueError, AccrueResult};
pub use types::{parse_amount, CompoundingFrequency, Date, EntryId, EntryKind, LedgerEntry};
