//! Engine error types and field-level validation.

use accrue_core::{AccrueError, EntryId};
use thiserror::Error;

/// Engine operation result type.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error types.
///
/// Evaluation never fails; these come from ledger edits and from validating
/// user input before it reaches the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No entry with the given id.
    #[error("Entry not found: {id}")]
    EntryNotFound {
        /// The id that was looked up.
        id: EntryId,
    },

    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {}", join(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Error constructing a core value.
    #[error(transparent)]
    Core(#[from] AccrueError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl From<Vec<ValidationError>> for EngineError {
    fn from(mut errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = errors.remove(0);
            EngineError::Validation {
                field: err.field,
                message: err.message,
            }
        } else {
            EngineError::MultipleValidationErrors(errors)
        }
    }
}

/// Trait for validatable inputs.
pub trait Validate {
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the input is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> EngineResult<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }
}
