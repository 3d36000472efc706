//! Error types for nibble operations.

use std::fmt;

/// Result type for nibble operations.
pub type NibbleResult<T> = Result<T, NibbleError>;

/// Errors that can occur during nibble-level encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NibbleError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of nibbles requested.
        requested: usize,
        /// Number of nibbles available.
        available: usize,
    },

    /// A character in a hex string is not a hex digit or separator.
    InvalidHexDigit {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input string.
        position: usize,
    },

    /// A hex string holds an odd number of digits.
    OddHexLength {
        /// Number of hex digits found.
        digits: usize,
    },
}

impl fmt::Display for NibbleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} nibbles but only {available} nibbles available"
                )
            }
            Self::InvalidHexDigit { ch, position } => {
                write!(f, "invalid hex digit {ch:?} at position {position}")
            }
            Self::OddHexLength { digits } => {
                write!(f, "hex string has an odd number of digits ({digits})")
            }
        }
    }
}

impl std::error::Error for NibbleError {}
