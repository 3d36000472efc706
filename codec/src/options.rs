//! Encoding conventions and decoder options.

use crate::types::Sign;

/// Packed decimal sign nibble for non-negative values.
pub const PACKED_POSITIVE: u8 = 0x0C;
/// Packed decimal sign nibble for negative values.
pub const PACKED_NEGATIVE: u8 = 0x0D;

/// Zone and sign nibble convention for zoned decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZoneCharset {
    /// ASCII digits: zone `0x3`, sign `0x3` positive, `0x7` negative.
    #[default]
    Ascii,
    /// EBCDIC digits: zone `0xF`, sign `0xC` positive, `0xD` negative.
    Ebcdic,
}

impl ZoneCharset {
    /// Zone nibble carried by every byte except the last.
    #[must_use]
    pub const fn zone(self) -> u8 {
        match self {
            Self::Ascii => 0x3,
            Self::Ebcdic => 0xF,
        }
    }

    /// Sign nibble written into the last byte.
    #[must_use]
    pub const fn sign_nibble(self, sign: Sign) -> u8 {
        match (self, sign) {
            (Self::Ascii, Sign::Positive) => 0x3,
            (Self::Ascii, Sign::Negative) => 0x7,
            (Self::Ebcdic, Sign::Positive) => 0xC,
            (Self::Ebcdic, Sign::Negative) => 0xD,
        }
    }

    /// Classifies the high nibble of the last zoned byte.
    ///
    /// With `lenient` set, EBCDIC also accepts the alternate sign nibbles.
    /// ASCII has no alternates.
    #[must_use]
    pub const fn classify_sign(self, nibble: u8, lenient: bool) -> Option<Sign> {
        match self {
            Self::Ascii => match nibble {
                0x3 => Some(Sign::Positive),
                0x7 => Some(Sign::Negative),
                _ => None,
            },
            Self::Ebcdic => match nibble {
                0xC => Some(Sign::Positive),
                0xD => Some(Sign::Negative),
                _ if lenient => alternate_sign(nibble),
                _ => None,
            },
        }
    }
}

/// Packed decimal sign nibble for `sign`.
#[must_use]
pub const fn packed_sign_nibble(sign: Sign) -> u8 {
    match sign {
        Sign::Positive => PACKED_POSITIVE,
        Sign::Negative => PACKED_NEGATIVE,
    }
}

/// Classifies the last nibble of a packed decimal.
#[must_use]
pub const fn classify_packed_sign(nibble: u8, lenient: bool) -> Option<Sign> {
    match nibble {
        PACKED_POSITIVE => Some(Sign::Positive),
        PACKED_NEGATIVE => Some(Sign::Negative),
        _ if lenient => alternate_sign(nibble),
        _ => None,
    }
}

// 0xF is the "unsigned" nibble, read as positive.
const fn alternate_sign(nibble: u8) -> Option<Sign> {
    match nibble {
        0xA | 0xE | 0xF => Some(Sign::Positive),
        0xB => Some(Sign::Negative),
        _ => None,
    }
}

/// Options shared by the `_with` encoders and decoders.
///
/// The default is the ASCII zone charset with strict sign checking, which
/// is what [`encode_zoned`](crate::encode_zoned), [`decode_zoned`](crate::decode_zoned)
/// and [`decode_packed`](crate::decode_packed) use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecOptions {
    /// Zone and sign convention for zoned decimal.
    pub zone_charset: ZoneCharset,

    /// Accept alternate sign nibbles (`A`, `E`, `F` positive; `B` negative)
    /// when decoding packed and EBCDIC zoned data.
    pub lenient_signs: bool,
}

impl CodecOptions {
    /// ASCII zones, strict signs.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zone_charset: ZoneCharset::Ascii,
            lenient_signs: false,
        }
    }

    /// EBCDIC zones, strict signs.
    #[must_use]
    pub const fn ebcdic() -> Self {
        Self::new().with_zone_charset(ZoneCharset::Ebcdic)
    }

    /// ASCII zones, alternate signs accepted.
    #[must_use]
    pub const fn lenient() -> Self {
        Self::new().with_lenient_signs(true)
    }

    #[must_use]
    pub const fn with_zone_charset(mut self, zone_charset: ZoneCharset) -> Self {
        self.zone_charset = zone_charset;
        self
    }

    #[must_use]
    pub const fn with_lenient_signs(mut self, lenient_signs: bool) -> Self {
        self.lenient_signs = lenient_signs;
        self
    }
}
