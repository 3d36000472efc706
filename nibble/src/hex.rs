//! Hex rendering and parsing for byte dumps.

use std::fmt;

use crate::error::{NibbleError, NibbleResult};

/// Displays a byte slice as contiguous upper-case hex (`1F34`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// Parses a hex string into bytes.
///
/// Digits may be upper or lower case. ASCII whitespace and the separators
/// `-`, `:` and `_` are ignored, and a single leading `0x`/`0X` is skipped,
/// so `"0x12 3c"`, `"12-3C"` and `"123c"` all parse to `[0x12, 0x3C]`.
pub fn parse_hex(input: &str) -> NibbleResult<Vec<u8>> {
    let (offset, body) = match input.trim_start().get(..2) {
        Some("0x" | "0X") => {
            let start = input.len() - input.trim_start().len() + 2;
            (start, &input[start..])
        }
        _ => (0, input),
    };

    let mut bytes = Vec::with_capacity(body.len() / 2);
    let mut high: Option<u8> = None;
    let mut digits = 0usize;
    for (idx, ch) in body.char_indices() {
        if ch.is_ascii_whitespace() || matches!(ch, '-' | ':' | '_') {
            continue;
        }
        let value = ch.to_digit(16).ok_or(NibbleError::InvalidHexDigit {
            ch,
            position: offset + idx,
        })? as u8;
        digits += 1;
        match high.take() {
            Some(h) => bytes.push(crate::join(h, value)),
            None => high = Some(value),
        }
    }

    if high.is_some() {
        return Err(NibbleError::OddHexLength { digits });
    }
    Ok(bytes)
}
