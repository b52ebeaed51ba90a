//! Error types for ID parsing and validation.

use chron_ulid::UlidError;
use thiserror::Error;

/// Errors that can occur when parsing or validating IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID is missing the underscore separator.
    #[error("ID missing underscore separator")]
    MissingSeparator,

    /// The ID does not start with the expected prefix.
    #[error("invalid ID prefix: expected '{expected}', got '{actual}'")]
    PrefixMismatch {
        expected: &'static str,
        actual: String,
    },

    /// The identifier portion of the ID is invalid.
    ///
    /// Preserves the underlying distinction between a wrong length, a
    /// character outside the alphabet, and an overflowing value.
    #[error("invalid identifier: {0}")]
    InvalidUlid(#[from] UlidError),
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a prefix mismatch.
    pub fn is_prefix_error(&self) -> bool {
        matches!(self, IdError::PrefixMismatch { .. })
    }
}
