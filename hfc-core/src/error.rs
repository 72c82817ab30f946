//! Error types for hfc operations.
//!
//! A single error type covers compression input validation, container
//! parsing and payload decoding. Length mismatches are normally reported
//! through [`DecodeStatus`](crate::traits::DecodeStatus) rather than as an
//! error; the [`HfcError::LengthMismatch`] variant exists for callers that
//! ask for an exact result.

use std::io;
use thiserror::Error;

/// The main error type for hfc operations.
#[derive(Debug, Error)]
pub enum HfcError {
    /// I/O error from the surrounding program (file reads/writes).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Compression was requested on a zero-length buffer.
    #[error("Empty input: nothing to compress")]
    EmptyInput,

    /// Input is larger than the container's 32-bit length field.
    #[error("Input too large: {len} bytes exceeds the container limit of {max} bytes")]
    InputTooLarge {
        /// Length of the rejected input.
        len: usize,
        /// Largest representable length.
        max: usize,
    },

    /// Container ended before a required field.
    #[error("Truncated container: need {needed} bytes at offset {offset}, have {available}")]
    TruncatedContainer {
        /// Byte offset of the field being read.
        offset: usize,
        /// Number of bytes the field requires.
        needed: usize,
        /// Number of bytes left in the buffer.
        available: usize,
    },

    /// The serialized code table is malformed.
    #[error("Invalid code table: {message}")]
    InvalidCodeTable {
        /// Description of the problem.
        message: String,
    },

    /// The de-obfuscated payload header is not plausible.
    #[error("Corrupted header: {message}")]
    CorruptedHeader {
        /// Description of the problem.
        message: String,
    },

    /// Accumulated bits can no longer match any code table entry.
    #[error("Unmappable code at bit position {bit_position}")]
    UnmappableCode {
        /// Bit position (within the un-padded payload) where decoding failed.
        bit_position: u64,
    },

    /// Decoded symbol count differs from the declared original length.
    #[error("Length mismatch: expected {expected} bytes, decoded {actual}")]
    LengthMismatch {
        /// Original length declared in the container.
        expected: u64,
        /// Number of bytes actually decoded.
        actual: u64,
    },

    /// Declared original length exceeds the configured output limit.
    #[error("Output limit exceeded: container declares {declared} bytes, limit is {limit}")]
    OutputLimitExceeded {
        /// Declared original length.
        declared: u64,
        /// Configured limit.
        limit: u64,
    },
}

/// Result type alias for hfc operations.
pub type Result<T> = std::result::Result<T, HfcError>;

impl HfcError {
    /// Create an input too large error.
    pub fn input_too_large(len: usize, max: usize) -> Self {
        Self::InputTooLarge { len, max }
    }

    /// Create a truncated container error.
    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Self::TruncatedContainer {
            offset,
            needed,
            available,
        }
    }

    /// Create an invalid code table error.
    pub fn invalid_table(message: impl Into<String>) -> Self {
        Self::InvalidCodeTable {
            message: message.into(),
        }
    }

    /// Create a corrupted header error.
    pub fn corrupted_header(message: impl Into<String>) -> Self {
        Self::CorruptedHeader {
            message: message.into(),
        }
    }

    /// Create an unmappable code error.
    pub fn unmappable(bit_position: u64) -> Self {
        Self::UnmappableCode { bit_position }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: u64, actual: u64) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an output limit error.
    pub fn output_limit(declared: u64, limit: u64) -> Self {
        Self::OutputLimitExceeded { declared, limit }
    }

    /// Whether this error indicates corrupt data or a wrong key, as opposed
    /// to a usage or I/O problem.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::TruncatedContainer { .. }
                | Self::InvalidCodeTable { .. }
                | Self::CorruptedHeader { .. }
                | Self::UnmappableCode { .. }
                | Self::LengthMismatch { .. }
                | Self::OutputLimitExceeded { .. }
        )
    }
}
