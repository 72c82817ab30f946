//! Core traits for whole-buffer compression.
//!
//! hfc codecs work on complete buffers: input is read fully and output is
//! produced in one piece. Decompression reports a [`DecodeStatus`] next to
//! the data so that a partially decoded buffer can be handed back without
//! being mistaken for a successful one.

use crate::error::{HfcError, Result};

/// Outcome of a whole-buffer decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// Exactly the declared number of bytes was decoded.
    Complete,
    /// The bit stream ran out before the declared length was reached.
    ///
    /// The data is unreliable and must be treated as corrupted.
    LengthMismatch {
        /// Original length declared in the container.
        expected: u64,
        /// Number of bytes actually decoded.
        actual: u64,
    },
}

impl DecodeStatus {
    /// Check whether the decode produced the declared length.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Decompressed bytes together with their [`DecodeStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded bytes (possibly partial, see `status`).
    pub data: Vec<u8>,
    /// Whether `data` matches the declared length.
    pub status: DecodeStatus,
}

impl Decoded {
    /// Build a result, deriving the status from the declared length.
    pub fn new(data: Vec<u8>, expected: u64) -> Self {
        let actual = data.len() as u64;
        let status = if actual == expected {
            DecodeStatus::Complete
        } else {
            DecodeStatus::LengthMismatch { expected, actual }
        };
        Self { data, status }
    }

    /// Check whether the decode produced the declared length.
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Return the data, turning a length mismatch into an error.
    pub fn into_exact(self) -> Result<Vec<u8>> {
        match self.status {
            DecodeStatus::Complete => Ok(self.data),
            DecodeStatus::LengthMismatch { expected, actual } => {
                Err(HfcError::length_mismatch(expected, actual))
            }
        }
    }
}

/// A whole-buffer compressor (encoder).
pub trait Compressor {
    /// Compress `input` into a self-describing container.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// A whole-buffer decompressor (decoder).
pub trait Decompressor {
    /// Decompress a container, reporting length mismatches as a status.
    fn decompress(&self, input: &[u8]) -> Result<Decoded>;

    /// Decompress a container, treating a length mismatch as an error.
    fn decompress_exact(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decompress(input)?.into_exact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_status() {
        let ok = Decoded::new(b"abc".to_vec(), 3);
        assert!(ok.is_complete());
        assert_eq!(ok.into_exact().unwrap(), b"abc");

        let short = Decoded::new(b"ab".to_vec(), 3);
        assert_eq!(
            short.status,
            DecodeStatus::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert!(matches!(
            short.into_exact(),
            Err(HfcError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    struct Identity;

    impl Decompressor for Identity {
        fn decompress(&self, input: &[u8]) -> Result<Decoded> {
            Ok(Decoded::new(input.to_vec(), 4))
        }
    }

    #[test]
    fn test_decompress_exact_default() {
        assert!(Identity.decompress_exact(b"abcd").is_ok());
        assert!(Identity.decompress_exact(b"abc").is_err());
    }
}
