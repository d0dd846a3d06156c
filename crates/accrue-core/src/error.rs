//! Error types for the Accrue core crate.
//!
//! The calculation itself is total over finite inputs; these errors come from
//! constructing domain values (dates, amounts, frequencies, entry kinds) out of user
//! input.

use thiserror::Error;

/// A specialized Result type for Accrue core operations.
pub type AccrueResult<T> = Result<T, AccrueError>;

/// The main error type for Accrue core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccrueError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid monetary amount.
    #[error("Amount '{value}' {reason}")]
    InvalidAmount {
        /// The rejected input.
        value: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Unknown compounding frequency name.
    #[error("Unknown compounding frequency: {0}")]
    UnknownFrequency(String),

    /// Unknown balance date preset name.
    #[error("Unknown balance date preset: {0} (expected today, 1m, 1y or 5y)")]
    UnknownPreset(String),

    /// Unknown entry kind name.
    #[error("Unknown entry kind: {0} (expected 'borrowed' or 'paid')")]
    UnknownEntryKind(String),
}

impl AccrueError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
