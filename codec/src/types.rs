//! Core types for the codec.

use std::fmt;

/// Sign of an encoded value. Zero is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Returns the sign of `value`.
    #[must_use]
    pub const fn of(value: i64) -> Self {
        if value < 0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns `true` for [`Sign::Negative`].
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

/// The two decimal layouts handled by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DecimalFormat {
    /// One digit per byte, sign in the high nibble of the last byte.
    Zoned,
    /// Two digits per byte, sign in the low nibble of the last byte.
    Packed,
}

impl fmt::Display for DecimalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoned => f.write_str("zoned"),
            Self::Packed => f.write_str("packed"),
        }
    }
}
