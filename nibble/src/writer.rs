//! Nibble-level writer for building BCD byte sequences.

/// A nibble-level writer.
///
/// Nibbles are written high half first. Call [`finish`](Self::finish) to get
/// the final byte buffer.
#[derive(Debug, Default)]
pub struct NibbleWriter {
    /// The accumulated bytes.
    bytes: Vec<u8>,
    /// High nibble waiting for its low half, if any.
    pending: Option<u8>,
}

impl NibbleWriter {
    /// Creates a new empty `NibbleWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `NibbleWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            pending: None,
        }
    }

    /// Returns the number of nibbles written so far.
    #[must_use]
    pub fn nibbles_written(&self) -> usize {
        self.bytes.len() * 2 + usize::from(self.pending.is_some())
    }

    /// Returns `true` if the next nibble starts a new byte.
    #[must_use]
    pub const fn is_byte_aligned(&self) -> bool {
        self.pending.is_none()
    }

    /// Writes the low four bits of `value`; higher bits are dropped.
    pub fn write_nibble(&mut self, value: u8) {
        let value = value & 0x0F;
        match self.pending.take() {
            Some(high) => self.bytes.push(crate::join(high, value)),
            None => self.pending = Some(value),
        }
    }

    /// Finishes writing and returns the byte buffer.
    ///
    /// If the last byte is incomplete, its low nibble is zero.
    #[must_use]
    pub fn finish(mut self) -> Vec<u8> {
        if let Some(high) = self.pending.take() {
            self.bytes.push(crate::join(high, 0));
        }
        self.bytes
    }
}
