//! Error types for decimal encoding/decoding.

use std::fmt;

use nibble::HexDump;

use crate::types::DecimalFormat;

/// Result type for decimal codec operations.
pub type DecimalResult<T> = Result<T, DecimalError>;

/// Errors that can occur during zoned/packed encoding or decoding.
///
/// Every decode error carries the complete input so the message can show
/// its hex dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// The input byte sequence is empty.
    EmptyInput { format: DecimalFormat },

    /// A zoned byte before the last one does not carry the zone nibble.
    InvalidZonePart {
        /// Byte index of the offending byte.
        index: usize,
        input: Vec<u8>,
    },

    /// The sign nibble is not an accepted sign marker.
    InvalidSignPart {
        format: DecimalFormat,
        input: Vec<u8>,
    },

    /// A nibble in a digit position is outside `0..=9`.
    InvalidDigitPart {
        format: DecimalFormat,
        /// Nibble index (high nibble of byte `n` is `2n`).
        index: usize,
        input: Vec<u8>,
    },

    /// The decoded magnitude does not fit in an `i64`.
    Overflow {
        format: DecimalFormat,
        input: Vec<u8>,
    },

    /// Fixed-width output buffer cannot hold the value.
    OutputTooSmall { needed: usize, available: usize },
}

impl DecimalError {
    /// The input bytes the error refers to, for decode errors.
    #[must_use]
    pub fn input(&self) -> Option<&[u8]> {
        match self {
            Self::InvalidZonePart { input, .. }
            | Self::InvalidSignPart { input, .. }
            | Self::InvalidDigitPart { input, .. }
            | Self::Overflow { input, .. } => Some(input.as_slice()),
            Self::EmptyInput { .. } => Some(&[][..]),
            Self::OutputTooSmall { .. } => None,
        }
    }

    /// `true` for errors caused by malformed bytes, as opposed to a
    /// well-formed value that is out of range.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. }
                | Self::InvalidZonePart { .. }
                | Self::InvalidSignPart { .. }
                | Self::InvalidDigitPart { .. }
        )
    }
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { format } => write!(f, "empty {format} decimal input"),
            Self::InvalidZonePart { index, input } => {
                write!(f, "invalid zone part at byte {index}: {}", HexDump(input))
            }
            Self::InvalidSignPart { format, input } => {
                write!(f, "invalid sign part in {format} decimal: {}", HexDump(input))
            }
            Self::InvalidDigitPart {
                format,
                index,
                input,
            } => write!(
                f,
                "invalid digit part at nibble {index} in {format} decimal: {}",
                HexDump(input)
            ),
            Self::Overflow { format, input } => write!(
                f,
                "overflow: {format} decimal {} is outside the signed 64-bit range",
                HexDump(input)
            ),
            Self::OutputTooSmall { needed, available } => write!(
                f,
                "output buffer too small: need {needed} bytes, {available} available"
            ),
        }
    }
}

impl std::error::Error for DecimalError {}
