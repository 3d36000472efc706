//! Decimal digit extraction and checked accumulation.

use crate::types::Sign;

/// Most decimal digits an `i64` magnitude can have (`9223372036854775808`).
pub const MAX_DIGITS: usize = 19;

/// Decimal digits of `|value|`, most significant first, without leading zeros.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Digits {
    buf: [u8; MAX_DIGITS],
    start: usize,
}

impl Digits {
    pub(crate) const fn of(value: i64) -> Self {
        let mut magnitude = value.unsigned_abs();
        let mut buf = [0u8; MAX_DIGITS];
        let mut start = MAX_DIGITS;
        loop {
            start -= 1;
            buf[start] = (magnitude % 10) as u8;
            magnitude /= 10;
            if magnitude == 0 {
                break;
            }
        }
        Self { buf, start }
    }

    pub(crate) const fn len(&self) -> usize {
        MAX_DIGITS - self.start
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

/// Number of decimal digits in `|value|` (at least 1).
#[must_use]
pub const fn digit_count(value: i64) -> usize {
    Digits::of(value).len()
}

/// Accumulates decimal digits into an `i64` magnitude.
///
/// Overflow is latched rather than reported so the caller can keep
/// validating the remaining nibbles first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Magnitude(Option<u64>);

impl Magnitude {
    pub(crate) const fn new() -> Self {
        Self(Some(0))
    }

    pub(crate) fn push(&mut self, digit: u8) {
        self.0 = self
            .0
            .and_then(|m| m.checked_mul(10))
            .and_then(|m| m.checked_add(u64::from(digit)));
    }

    /// Applies `sign`; `None` if the result is outside the `i64` range.
    pub(crate) fn finish(self, sign: Sign) -> Option<i64> {
        let magnitude = self.0?;
        match sign {
            Sign::Positive => i64::try_from(magnitude).ok(),
            Sign::Negative => 0i64.checked_sub_unsigned(magnitude),
        }
    }
}
