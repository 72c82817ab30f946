//! Test command implementation.

use hfc_huffman::{DecodeOptions, DecodeStatus, Decompressor, HuffmanCodec};
use std::fs;
use std::path::Path;

pub fn cmd_test(
    input: &Path,
    key: i64,
    max_output: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let container = fs::read(input)?;
    println!("Testing {}", input.display());

    let mut options = DecodeOptions::DEFAULT;
    if let Some(limit) = max_output {
        options = options.with_max_output_len(limit);
    }
    let codec = HuffmanCodec::new(key).with_options(options);

    let failure = match codec.decompress(&container) {
        Ok(decoded) => match decoded.status {
            DecodeStatus::Complete => {
                println!("  OK: {} bytes", decoded.data.len());
                return Ok(());
            }
            DecodeStatus::LengthMismatch { expected, actual } => {
                format!("decoded {} of {} declared bytes", actual, expected)
            }
        },
        Err(e) if e.is_corruption() => e.to_string(),
        Err(e) => return Err(e.into()),
    };

    println!("  FAILED: {}", failure);
    std::process::exit(2);
}
