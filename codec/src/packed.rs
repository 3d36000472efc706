//! Packed decimal encoding and decoding.
//!
//! Two digits per byte with the sign in the rightmost nibble:
//! `d1|d2 d3|d4 ... dn|sign`. A zero digit is prepended when the digit
//! count is even so digits plus sign fill whole bytes.
//!
//! - `+123` is `12 3C`
//! - `-1234` is `01 23 4D`

use nibble::{NibbleReader, NibbleWriter};

use crate::digits::{Digits, Magnitude};
use crate::error::{DecimalError, DecimalResult};
use crate::options::{classify_packed_sign, packed_sign_nibble, CodecOptions};
use crate::types::{DecimalFormat, Sign};

/// Encodes `value` as packed decimal with sign nibble `C` or `D`.
#[must_use]
pub fn encode_packed(value: i64) -> Vec<u8> {
    let digits = Digits::of(value);
    let mut writer = NibbleWriter::with_capacity(packed_len(value));
    if digits.len() % 2 == 0 {
        writer.write_nibble(0);
    }
    for &digit in digits.as_slice() {
        writer.write_nibble(digit);
    }
    writer.write_nibble(packed_sign_nibble(Sign::of(value)));
    writer.finish()
}

/// Encodes `value` into the fixed-width field `out`.
///
/// `out` holds `2 * out.len() - 1` digit nibbles; digits are right-justified
/// and zero-padded. Returns `out.len()`. `out` is not modified on error.
pub fn encode_packed_into(value: i64, out: &mut [u8]) -> DecimalResult<usize> {
    let needed = packed_len(value);
    if out.len() < needed {
        return Err(DecimalError::OutputTooSmall {
            needed,
            available: out.len(),
        });
    }

    let digits = Digits::of(value);
    let digits = digits.as_slice();
    let pad = out.len() * 2 - 1 - digits.len();
    let digit_at = |nibble: usize| if nibble < pad { 0 } else { digits[nibble - pad] };
    let last = out.len() - 1;

    for (idx, byte) in out.iter_mut().enumerate() {
        let high = digit_at(idx * 2);
        let low = if idx == last {
            packed_sign_nibble(Sign::of(value))
        } else {
            digit_at(idx * 2 + 1)
        };
        *byte = nibble::join(high, low);
    }
    Ok(out.len())
}

/// Number of bytes [`encode_packed`] produces for `value`.
#[must_use]
pub const fn packed_len(value: i64) -> usize {
    crate::digits::digit_count(value) / 2 + 1
}

/// Decodes packed decimal bytes; the sign nibble must be `C` or `D`.
pub fn decode_packed(bytes: &[u8]) -> DecimalResult<i64> {
    decode_packed_with(bytes, &CodecOptions::default())
}

/// Decodes packed decimal bytes using the sign rules in `options`.
///
/// Every digit nibble is validated before the sign nibble.
pub fn decode_packed_with(bytes: &[u8], options: &CodecOptions) -> DecimalResult<i64> {
    let Some(&last) = bytes.last() else {
        return Err(DecimalError::EmptyInput {
            format: DecimalFormat::Packed,
        });
    };

    let digit_nibbles = bytes.len() * 2 - 1;
    let mut magnitude = Magnitude::new();
    for (index, digit) in NibbleReader::new(bytes).take(digit_nibbles).enumerate() {
        if digit > 9 {
            return Err(DecimalError::InvalidDigitPart {
                format: DecimalFormat::Packed,
                index,
                input: bytes.to_vec(),
            });
        }
        magnitude.push(digit);
    }

    let (_, sign_nibble) = nibble::split(last);
    let sign = classify_packed_sign(sign_nibble, options.lenient_signs).ok_or_else(|| {
        DecimalError::InvalidSignPart {
            format: DecimalFormat::Packed,
            input: bytes.to_vec(),
        }
    })?;

    magnitude.finish(sign).ok_or_else(|| DecimalError::Overflow {
        format: DecimalFormat::Packed,
        input: bytes.to_vec(),
    })
}
