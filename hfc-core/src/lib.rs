//! # hfc Core
//!
//! Core components for the hfc keyed Huffman compressor.
//!
//! - [`bitstream`]: MSB-first bit I/O for variable-length codes
//! - [`traits`]: Whole-buffer compressor/decompressor traits and decode status
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front end                                           │
//! │     hfc CLI (compress, decompress, test, info)          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Huffman tree, code table, container, obfuscation    │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, errors, traits                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use hfc_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! for bit in [true, true, false] {
//!     writer.write_bit(bit);
//! }
//! let (bytes, pad) = writer.finish();
//!
//! let reader = BitReader::with_bit_len(&bytes, 8 - u64::from(pad)).unwrap();
//! assert_eq!(reader.collect::<Vec<_>>(), vec![true, true, false]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{HfcError, Result};
pub use traits::{Compressor, DecodeStatus, Decoded, Decompressor};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{HfcError, Result};
    pub use crate::traits::{Compressor, DecodeStatus, Decoded, Decompressor};
}
