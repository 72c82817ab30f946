//! MSB-first bit-level I/O.
//!
//! Huffman codes in the hfc container are packed most significant bit
//! first: the first code bit lands in bit 7 of the first payload byte.
//! [`BitWriter`] accumulates bits into a `Vec<u8>` and reports how many zero
//! bits were needed to finish the last byte; [`BitReader`] walks a byte slice
//! bit by bit, bounded to a caller-supplied bit length so trailing padding is
//! never observed.
//!
//! # Example
//!
//! ```
//! use hfc_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! for bit in [true, false, true, true, true, false, false] {
//!     writer.write_bit(bit);
//! }
//! let (bytes, pad) = writer.finish();
//! assert_eq!(bytes, vec![0b1011_1000]);
//! assert_eq!(pad, 1);
//!
//! let mut reader = BitReader::with_bit_len(&bytes, 7).unwrap();
//! assert_eq!(reader.read_bit(), Some(true));
//! assert_eq!(reader.read_bit(), Some(false));
//! assert_eq!(reader.by_ref().count(), 5);
//! assert_eq!(reader.read_bit(), None);
//! ```

use crate::error::{HfcError, Result};

/// MSB-first bit writer backed by a growable buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed bytes.
    output: Vec<u8>,
    /// Pending bits, right-aligned.
    buffer: u64,
    /// Number of pending bits in `buffer` (always < 8 between calls).
    bits_in_buffer: u8,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Append a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | u64::from(bit);
        self.bits_in_buffer += 1;

        if self.bits_in_buffer == 8 {
            self.output.push(self.buffer as u8);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Pad the final partial byte with zero bits and return the bytes
    /// together with the number of padding bits (0-7).
    ///
    /// An already byte-aligned stream reports a pad of 0, never 8.
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        let mut pad = 0;
        if self.bits_in_buffer > 0 {
            pad = 8 - self.bits_in_buffer;
            self.output.push((self.buffer << pad) as u8);
        }
        (self.output, pad)
    }
}

/// MSB-first bit reader over a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Number of readable bits (trailing padding excluded).
    bit_len: u64,
    /// Bits consumed so far.
    position: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader that stops after `bit_len` bits.
    ///
    /// Fails if `data` holds fewer than `bit_len` bits.
    pub fn with_bit_len(data: &'a [u8], bit_len: u64) -> Result<Self> {
        let available = data.len() as u64 * 8;
        if bit_len > available {
            return Err(HfcError::truncated(
                0,
                bit_len.div_ceil(8) as usize,
                data.len(),
            ));
        }
        Ok(Self {
            data,
            bit_len,
            position: 0,
        })
    }

    /// Number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.position
    }

    /// Number of bits left before the end of the stream.
    pub fn bits_remaining(&self) -> u64 {
        self.bit_len - self.position
    }

    /// Check if every readable bit has been consumed.
    pub fn is_eof(&self) -> bool {
        self.position >= self.bit_len
    }

    /// Read one bit, or `None` at end of stream.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.is_eof() {
            return None;
        }
        let byte = self.data[(self.position / 8) as usize];
        let shift = 7 - (self.position % 8) as u8;
        self.position += 1;
        Some((byte >> shift) & 1 == 1)
    }

}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits_remaining() as usize;
        (remaining, Some(remaining))
    }
}
