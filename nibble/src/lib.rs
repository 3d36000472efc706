//! Nibble packing primitives for the bcdec codec.
//!
//! This crate provides [`NibbleWriter`] and [`NibbleReader`] for 4-bit
//! granular encoding and decoding, plus [`HexDump`] and [`parse_hex`] for
//! moving between bytes and their hex text.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads/writes are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about zones, signs or digits.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use nibble::{NibbleReader, NibbleWriter};
//!
//! let mut writer = NibbleWriter::new();
//! writer.write_nibble(0x1);
//! writer.write_nibble(0xC);
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0x1C]);
//!
//! let mut reader = NibbleReader::new(&bytes);
//! assert_eq!(reader.read_nibble().unwrap(), 0x1);
//! assert_eq!(reader.read_nibble().unwrap(), 0xC);
//! ```

mod error;
mod hex;
mod reader;
mod writer;

pub use error::{NibbleError, NibbleResult};
pub use hex::{parse_hex, HexDump};
pub use reader::NibbleReader;
pub use writer::NibbleWriter;

/// Splits a byte into its `(high, low)` nibbles.
#[must_use]
pub const fn split(byte: u8) -> (u8, u8) {
    (byte >> 4, byte & 0x0F)
}

/// Joins two nibbles into a byte. Bits above the low four of each are dropped.
#[must_use]
pub const fn join(high: u8, low: u8) -> u8 {
    ((high & 0x0F) << 4) | (low & 0x0F)
}
