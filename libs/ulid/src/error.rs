//! Error types for identifier parsing and construction.

use thiserror::Error;

/// Errors that can occur when constructing an identifier from external data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UlidError {
    /// An input buffer or text value has the wrong size.
    ///
    /// `expected` is 26 for text, 16 for the binary form, 10 for an
    /// externally supplied randomness buffer.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A text input contains a character outside the base-32 alphabet.
    #[error("invalid character '{character}' at position {index}")]
    InvalidCharacter { character: char, index: usize },

    /// The decoded text encodes a value wider than 128 bits.
    ///
    /// The first character of the text form carries only 3 meaningful bits,
    /// so it must decode to a value of at most 7.
    #[error("text encodes a value that overflows 128 bits")]
    Overflow,
}

impl UlidError {
    /// Returns true if this error indicates a wrong input size.
    pub fn is_length_error(&self) -> bool {
        matches!(self, UlidError::InvalidLength { .. })
    }
}
