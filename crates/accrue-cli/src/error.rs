//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Entry file could not be read or parsed.
    #[error("Cannot read entries from {}: {reason}", path.display())]
    EntryFile {
        /// File that failed.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// One or more records in the entry file failed validation.
    #[error("{count} invalid record(s) in {}:\n{details}", path.display())]
    InvalidEntries {
        /// File that was loaded.
        path: PathBuf,
        /// Number of rejected records.
        count: usize,
        /// One line per field error.
        details: String,
    },

    /// Calculation parameters failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No entry with the requested id.
    #[error("No entry with id {0}")]
    UnknownEntry(u64),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

impl From<accrue_engine::EngineError> for CliError {
    fn from(err: accrue_engine::EngineError) -> Self {
        CliError::InvalidInput(err.to_string())
    }
}

impl From<accrue_core::AccrueError> for CliError {
    fn from(err: accrue_core::AccrueError) -> Self {
        CliError::InvalidInput(err.to_string())
    }
}
