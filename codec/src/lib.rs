//! Zoned and packed decimal encoding/decoding for the bcdec codec.
//!
//! Converts signed 64-bit integers to and from the two binary-coded decimal
//! layouts used in mainframe record interchange.
//!
//! # Features
//!
//! - Zoned decimal (one digit per byte, sign in the last zone nibble)
//! - Packed decimal (two digits per byte, sign in the last nibble)
//! - ASCII (`0x3`) and EBCDIC (`0xF`) zone conventions
//! - Fixed-width field encoding into caller-provided buffers
//! - Optional acceptance of alternate sign nibbles
//!
//! # Design Principles
//!
//! - **Pure functions** - No state, no I/O, safe from any thread.
//! - **Explicit errors** - Malformed input and overflow are distinct errors
//!   that carry the full input for diagnostics. Nothing panics.
//! - **Strict by default** - The plain functions accept exactly the bytes
//!   the encoders produce, plus leading zeros.
//!
//! # Example
//!
//! ```
//! use codec::{decode_packed, decode_zoned, encode_packed, encode_zoned};
//!
//! assert_eq!(encode_zoned(-123), vec![0x31, 0x32, 0x73]);
//! assert_eq!(encode_packed(-123), vec![0x12, 0x3D]);
//!
//! assert_eq!(decode_zoned(&[0x31, 0x32, 0x73]).unwrap(), -123);
//! assert_eq!(decode_packed(&[0x12, 0x3D]).unwrap(), -123);
//! ```

mod digits;
mod error;
mod options;
mod packed;
mod types;
mod zoned;

pub use digits::{digit_count, MAX_DIGITS};
pub use error::{DecimalError, DecimalResult};
pub use options::{
    classify_packed_sign, packed_sign_nibble, CodecOptions, ZoneCharset, PACKED_NEGATIVE,
    PACKED_POSITIVE,
};
pub use packed::{decode_packed, decode_packed_with, encode_packed, encode_packed_into, packed_len};
pub use types::{DecimalFormat, Sign};
pub use zoned::{
    decode_zoned, decode_zoned_with, encode_zoned, encode_zoned_into, encode_zoned_with, zoned_len,
};
