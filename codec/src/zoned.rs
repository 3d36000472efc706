//! Zoned decimal encoding and decoding.
//!
//! One digit per byte: the low nibble holds the digit, the high nibble holds
//! the zone marker, except in the last byte where it holds the sign.
//!
//! With the ASCII charset `+123` is `31 32 33` and `-123` is `31 32 73`.
//! With the EBCDIC charset `+123` is `F1 F2 C3`.

use nibble::NibbleWriter;

use crate::digits::{Digits, Magnitude};
use crate::error::{DecimalError, DecimalResult};
use crate::options::{CodecOptions, ZoneCharset};
use crate::types::{DecimalFormat, Sign};

/// Encodes `value` as ASCII zoned decimal, one byte per digit of `|value|`.
#[must_use]
pub fn encode_zoned(value: i64) -> Vec<u8> {
    encode_zoned_with(value, &CodecOptions::default())
}

/// Encodes `value` as zoned decimal using the charset in `options`.
#[must_use]
pub fn encode_zoned_with(value: i64, options: &CodecOptions) -> Vec<u8> {
    let digits = Digits::of(value);
    let charset = options.zone_charset;
    let digits = digits.as_slice();
    let last = digits.len() - 1;

    let mut writer = NibbleWriter::with_capacity(digits.len());
    for (idx, &digit) in digits.iter().enumerate() {
        let high = if idx == last {
            charset.sign_nibble(Sign::of(value))
        } else {
            charset.zone()
        };
        writer.write_nibble(high);
        writer.write_nibble(digit);
    }
    writer.finish()
}

/// Encodes `value` into the fixed-width field `out`.
///
/// Digits are right-justified and the field is padded on the left with
/// zoned zeros. Returns the number of bytes written, always `out.len()`.
/// `out` is not modified on error.
pub fn encode_zoned_into(value: i64, out: &mut [u8], options: &CodecOptions) -> DecimalResult<usize> {
    let digits = Digits::of(value);
    if out.len() < digits.len() {
        return Err(DecimalError::OutputTooSmall {
            needed: digits.len(),
            available: out.len(),
        });
    }

    let charset = options.zone_charset;
    let pad = out.len() - digits.len();
    let last = out.len() - 1;
    for (idx, byte) in out.iter_mut().enumerate() {
        let digit = if idx < pad {
            0
        } else {
            digits.as_slice()[idx - pad]
        };
        let high = if idx == last {
            charset.sign_nibble(Sign::of(value))
        } else {
            charset.zone()
        };
        *byte = nibble::join(high, digit);
    }
    Ok(out.len())
}

/// Number of bytes [`encode_zoned`] produces for `value`.
#[must_use]
pub const fn zoned_len(value: i64) -> usize {
    crate::digits::digit_count(value)
}

/// Decodes ASCII zoned decimal bytes.
pub fn decode_zoned(bytes: &[u8]) -> DecimalResult<i64> {
    decode_zoned_with(bytes, &CodecOptions::default())
}

/// Decodes zoned decimal bytes using the charset and sign rules in `options`.
///
/// Bytes are checked in order, the high nibble before the low nibble.
/// Overflow is only reported once every byte has passed validation.
pub fn decode_zoned_with(bytes: &[u8], options: &CodecOptions) -> DecimalResult<i64> {
    if bytes.is_empty() {
        return Err(DecimalError::EmptyInput {
            format: DecimalFormat::Zoned,
        });
    }

    let charset = options.zone_charset;
    let last = bytes.len() - 1;
    let mut magnitude = Magnitude::new();
    let mut sign = Sign::Positive;

    for (index, &byte) in bytes.iter().enumerate() {
        let (high, digit) = nibble::split(byte);
        if index < last {
            if high != charset.zone() {
                return Err(DecimalError::InvalidZonePart {
                    index,
                    input: bytes.to_vec(),
                });
            }
        } else {
            sign = last_sign(high, charset, options.lenient_signs, bytes)?;
        }

        if digit > 9 {
            return Err(DecimalError::InvalidDigitPart {
                format: DecimalFormat::Zoned,
                index: index * 2 + 1,
                input: bytes.to_vec(),
            });
        }
        magnitude.push(digit);
    }

    magnitude.finish(sign).ok_or_else(|| DecimalError::Overflow {
        format: DecimalFormat::Zoned,
        input: bytes.to_vec(),
    })
}

fn last_sign(nibble: u8, charset: ZoneCharset, lenient: bool, bytes: &[u8]) -> DecimalResult<Sign> {
    charset
        .classify_sign(nibble, lenient)
        .ok_or_else(|| DecimalError::InvalidSignPart {
            format: DecimalFormat::Zoned,
            input: bytes.to_vec(),
        })
}
