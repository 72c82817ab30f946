//! # hfc Huffman
//!
//! Static Huffman compression with keyed obfuscation and a self-describing
//! container.
//!
//! Compression counts byte frequencies, builds one Huffman tree for the whole
//! input, derives a prefix-free code table, packs the code stream MSB-first
//! and stores the table in front of an obfuscated header + payload region.
//! Decompression needs nothing but the container and the key.
//!
//! ```text
//! compress:   bytes ─▶ FrequencyTable ─▶ HuffmanTree ─▶ CodeTable ─▶ pack ─▶ header ─▶ XOR ─▶ container
//! decompress: container ─▶ CodeTable ─▶ XOR ─▶ header ─▶ unpack ─▶ greedy match ─▶ bytes
//! ```
//!
//! ## Example
//!
//! ```rust
//! use hfc_huffman::{decode, encode};
//!
//! let original = b"aaaabbc";
//! let container = encode(original, 42).unwrap();
//! let decoded = decode(&container, 42).unwrap();
//!
//! assert!(decoded.is_complete());
//! assert_eq!(decoded.data, original);
//! ```
//!
//! ## Obfuscation
//!
//! The key only XORs the header and payload with a single byte (`key & 0xFF`).
//! It keeps the payload from being readable at a glance and nothing more;
//! it offers no confidentiality.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod codes;
pub mod container;
pub mod frequency;
pub mod obfuscate;
pub mod pack;
pub mod queue;
pub mod tree;

// Re-exports
pub use codes::{Code, CodeTable};
pub use container::{ContainerInfo, DecodeOptions, PayloadHeader, inspect};
pub use frequency::FrequencyTable;
pub use hfc_core::error::{HfcError, Result};
pub use hfc_core::traits::{Compressor, DecodeStatus, Decoded, Decompressor};
pub use obfuscate::ObfuscationKey;
pub use pack::PackedBits;
pub use queue::MinQueue;
pub use tree::{HuffmanTree, Node};

/// A Huffman codec bound to one key and set of decode limits.
///
/// ```rust
/// use hfc_huffman::{Compressor, Decompressor, HuffmanCodec};
///
/// let codec = HuffmanCodec::new(7);
/// let container = codec.compress(b"hello, hello").unwrap();
/// assert_eq!(codec.decompress_exact(&container).unwrap(), b"hello, hello");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HuffmanCodec {
    key: ObfuscationKey,
    options: DecodeOptions,
}

impl HuffmanCodec {
    /// Create a codec for `key` with default decode limits.
    pub fn new(key: i64) -> Self {
        Self {
            key: ObfuscationKey::new(key),
            options: DecodeOptions::DEFAULT,
        }
    }

    /// Replace the decode limits.
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// The key applied to containers.
    pub fn key(&self) -> ObfuscationKey {
        self.key
    }

    /// The decode limits in effect.
    pub fn options(&self) -> DecodeOptions {
        self.options
    }
}

impl Compressor for HuffmanCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        container::encode(input, self.key)
    }
}

impl Decompressor for HuffmanCodec {
    fn decompress(&self, input: &[u8]) -> Result<Decoded> {
        container::decode(input, self.key, self.options)
    }
}

/// Compress `input`, obfuscating the payload with `key`.
///
/// Fails with [`HfcError::EmptyInput`] on an empty buffer.
pub fn encode(input: &[u8], key: i64) -> Result<Vec<u8>> {
    HuffmanCodec::new(key).compress(input)
}

/// Decompress a container produced by [`encode`] with the same key.
///
/// A stream that runs out before the declared length is not an error: the
/// partial data comes back with [`DecodeStatus::LengthMismatch`].
pub fn decode(input: &[u8], key: i64) -> Result<Decoded> {
    HuffmanCodec::new(key).decompress(input)
}
