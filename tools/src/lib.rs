//! Introspection and debugging tools for the bcdec codec.
//!
//! This crate provides utilities for looking at decimal fields the way a
//! record reader sees them:
//!
//! - Encode a value and show the resulting bytes
//! - Decode a field from hex or from a byte range of a record file
//! - Explain a field nibble by nibble (zone, sign, digit, padding)
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand why a field does not decode.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use codec::{
    classify_packed_sign, decode_packed_with, decode_zoned_with, encode_packed,
    encode_packed_into, encode_zoned_into, encode_zoned_with, CodecOptions, DecimalFormat,
    DecimalResult, Sign, ZoneCharset,
};
use nibble::HexDump;
use serde::Serialize;

/// Result of encoding a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    pub value: i64,
    pub format: DecimalFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<ZoneCharset>,
    pub hex: String,
    pub len: usize,
}

/// Result of decoding a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub format: DecimalFormat,
    pub hex: String,
    pub value: i64,
    pub sign: Sign,
}

/// What a nibble means at its position in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NibbleRole {
    Zone,
    Sign,
    Digit,
    /// Leading zero digit that does not contribute to the value.
    Pad,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NibbleEntry {
    pub index: usize,
    pub value: u8,
    pub role: NibbleRole,
}

/// Nibble-level breakdown of a field plus its decode outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub format: DecimalFormat,
    pub hex: String,
    pub nibbles: Vec<NibbleEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Widest fixed field [`encode_report`] will fill, in bytes.
pub const MAX_FIELD_WIDTH: usize = 256;

/// Encodes `value`, into a field of `width` bytes when given.
///
/// Widths above [`MAX_FIELD_WIDTH`] are rejected before anything is allocated.
pub fn encode_report(
    value: i64,
    format: DecimalFormat,
    options: &CodecOptions,
    width: Option<usize>,
) -> Result<EncodeReport> {
    if let Some(width) = width {
        ensure!(
            width <= MAX_FIELD_WIDTH,
            "field width {width} exceeds the maximum of {MAX_FIELD_WIDTH} bytes"
        );
    }
    let bytes = match (format, width) {
        (DecimalFormat::Zoned, None) => encode_zoned_with(value, options),
        (DecimalFormat::Zoned, Some(width)) => {
            let mut buf = vec![0u8; width];
            encode_zoned_into(value, &mut buf, options)?;
            buf
        }
        (DecimalFormat::Packed, None) => encode_packed(value),
        (DecimalFormat::Packed, Some(width)) => {
            let mut buf = vec![0u8; width];
            encode_packed_into(value, &mut buf)?;
            buf
        }
    };
    let charset = match format {
        DecimalFormat::Zoned => Some(options.zone_charset),
        DecimalFormat::Packed => None,
    };
    Ok(EncodeReport {
        value,
        format,
        charset,
        hex: HexDump(&bytes).to_string(),
        len: bytes.len(),
    })
}

/// Decodes `bytes` in the given format.
pub fn decode(bytes: &[u8], format: DecimalFormat, options: &CodecOptions) -> DecimalResult<i64> {
    match format {
        DecimalFormat::Zoned => decode_zoned_with(bytes, options),
        DecimalFormat::Packed => decode_packed_with(bytes, options),
    }
}

pub fn decode_report(
    bytes: &[u8],
    format: DecimalFormat,
    options: &CodecOptions,
) -> DecimalResult<DecodeReport> {
    let value = decode(bytes, format, options)?;
    Ok(DecodeReport {
        format,
        hex: HexDump(bytes).to_string(),
        value,
        sign: Sign::of(value),
    })
}

/// Breaks a zoned field into zone/sign and digit nibbles.
pub fn inspect_zoned(bytes: &[u8], options: &CodecOptions) -> InspectReport {
    let charset = options.zone_charset;
    let last = bytes.len().saturating_sub(1);
    let mut nibbles = Vec::with_capacity(bytes.len() * 2);
    for (idx, &byte) in bytes.iter().enumerate() {
        let (high, low) = nibble::split(byte);
        let high_role = if idx < last {
            if high == charset.zone() {
                NibbleRole::Zone
            } else {
                NibbleRole::Invalid
            }
        } else if charset.classify_sign(high, options.lenient_signs).is_some() {
            NibbleRole::Sign
        } else {
            NibbleRole::Invalid
        };
        nibbles.push(NibbleEntry {
            index: idx * 2,
            value: high,
            role: high_role,
        });
        nibbles.push(NibbleEntry {
            index: idx * 2 + 1,
            value: low,
            role: digit_role(low),
        });
    }
    mark_padding(&mut nibbles);
    finish_inspect(bytes, DecimalFormat::Zoned, options, nibbles)
}

/// Breaks a packed field into digit nibbles and the trailing sign nibble.
pub fn inspect_packed(bytes: &[u8], options: &CodecOptions) -> InspectReport {
    let total = bytes.len() * 2;
    let mut nibbles = Vec::with_capacity(total);
    for (idx, &byte) in bytes.iter().enumerate() {
        let (high, low) = nibble::split(byte);
        for (offset, value) in [(0, high), (1, low)] {
            let index = idx * 2 + offset;
            let role = if index + 1 == total {
                if classify_packed_sign(value, options.lenient_signs).is_some() {
                    NibbleRole::Sign
                } else {
                    NibbleRole::Invalid
                }
            } else {
                digit_role(value)
            };
            nibbles.push(NibbleEntry { index, value, role });
        }
    }
    mark_padding(&mut nibbles);
    finish_inspect(bytes, DecimalFormat::Packed, options, nibbles)
}

const fn digit_role(value: u8) -> NibbleRole {
    if value <= 9 {
        NibbleRole::Digit
    } else {
        NibbleRole::Invalid
    }
}

// Zero digits before the first nonzero digit or invalid nibble are padding.
// The last digit always counts.
fn mark_padding(nibbles: &mut [NibbleEntry]) {
    let Some(last_digit) = nibbles
        .iter()
        .rposition(|entry| entry.role == NibbleRole::Digit)
    else {
        return;
    };
    for entry in &mut nibbles[..last_digit] {
        match entry.role {
            NibbleRole::Zone | NibbleRole::Sign => {}
            NibbleRole::Digit if entry.value == 0 => entry.role = NibbleRole::Pad,
            _ => break,
        }
    }
}

fn finish_inspect(
    bytes: &[u8],
    format: DecimalFormat,
    options: &CodecOptions,
    nibbles: Vec<NibbleEntry>,
) -> InspectReport {
    let (value, error) = match decode(bytes, format, options) {
        Ok(value) => (Some(value), None),
        Err(err) => (None, Some(err.to_string())),
    };
    InspectReport {
        format,
        hex: HexDump(bytes).to_string(),
        nibbles,
        value,
        error,
    }
}

/// Renders an [`InspectReport`] for terminal output.
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} decimal {} ({} bytes)",
        report.format,
        report.hex,
        report.nibbles.len() / 2
    );
    for entry in &report.nibbles {
        let role = match entry.role {
            NibbleRole::Zone => "zone",
            NibbleRole::Sign => "sign",
            NibbleRole::Digit => "digit",
            NibbleRole::Pad => "pad",
            NibbleRole::Invalid => "INVALID",
        };
        let _ = writeln!(
            out,
            "  nibble {:>2}: 0x{:X} {role}",
            entry.index, entry.value
        );
    }
    match (&report.value, &report.error) {
        (Some(value), _) => {
            let _ = write!(out, "value: {value}");
        }
        (None, Some(error)) => {
            let _ = write!(out, "error: {error}");
        }
        (None, None) => {}
    }
    out
}

/// Reads `len` bytes at `offset` from a record file (to the end when `len` is `None`).
pub fn read_field(path: &Path, offset: usize, len: Option<usize>) -> Result<Vec<u8>> {
    let contents = fs::read(path).with_context(|| format!("read record {}", path.display()))?;
    ensure!(
        offset <= contents.len(),
        "offset {offset} is past the end of {} ({} bytes)",
        path.display(),
        contents.len()
    );
    let end = match len {
        Some(len) => offset
            .checked_add(len)
            .filter(|end| *end <= contents.len())
            .with_context(|| {
                format!(
                    "field {offset}+{len} is past the end of {} ({} bytes)",
                    path.display(),
                    contents.len()
                )
            })?,
        None => contents.len(),
    };
    Ok(contents[offset..end].to_vec())
}
