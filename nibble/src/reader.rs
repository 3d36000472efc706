//! Nibble-level reader with bounded operations.

use crate::error::{NibbleError, NibbleResult};

/// A nibble-level reader for decoding BCD byte sequences.
///
/// Nibbles are yielded high half first. All reads are bounds-checked and
/// the reader never panics on malformed input. The reader is also an
/// [`Iterator`] over the remaining nibbles.
#[derive(Debug, Clone)]
pub struct NibbleReader<'a> {
    data: &'a [u8],
    nibble_pos: usize,
}

impl<'a> NibbleReader<'a> {
    /// Creates a new `NibbleReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            nibble_pos: 0,
        }
    }

    /// Returns the number of nibbles remaining to read.
    #[must_use]
    pub const fn nibbles_remaining(&self) -> usize {
        self.data
            .len()
            .saturating_mul(2)
            .saturating_sub(self.nibble_pos)
    }

    /// Returns `true` if there are no more nibbles to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nibbles_remaining() == 0
    }

    /// Returns the current nibble position.
    #[must_use]
    pub const fn nibble_position(&self) -> usize {
        self.nibble_pos
    }

    /// Reads a single nibble.
    pub fn read_nibble(&mut self) -> NibbleResult<u8> {
        let available = self.nibbles_remaining();
        if available == 0 {
            return Err(NibbleError::UnexpectedEof {
                requested: 1,
                available,
            });
        }
        let (high, low) = crate::split(self.data[self.nibble_pos / 2]);
        let nibble = if self.nibble_pos % 2 == 0 { high } else { low };
        self.nibble_pos += 1;
        Ok(nibble)
    }
}

impl Iterator for NibbleReader<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.read_nibble().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nibbles_remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NibbleReader<'_> {}
