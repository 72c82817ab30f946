//! Decompress command implementation.

use super::{WriteOptions, write_output};
use crate::utils::create_spinner;
use hfc_huffman::{DecodeOptions, DecodeStatus, Decompressor, HuffmanCodec};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    key: i64,
    max_output: Option<u64>,
    options: WriteOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let container = fs::read(input)?;
    println!(
        "Decompressing {} ({} bytes)",
        input.display(),
        container.len()
    );

    let mut decode_options = DecodeOptions::DEFAULT;
    if let Some(limit) = max_output {
        decode_options = decode_options.with_max_output_len(limit);
    }
    let codec = HuffmanCodec::new(key).with_options(decode_options);

    let pb = create_spinner("decoding payload", options.progress);
    let decoded = codec.decompress(&container);
    pb.finish_and_clear();
    let decoded = decoded?;

    write_output(input, output, &decoded.data, options)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        complete = decoded.is_complete(),
        "decompressed"
    );

    match decoded.status {
        DecodeStatus::Complete => {
            println!("Original length: {} bytes", decoded.data.len());
            println!("Decompressed size: {} bytes", decoded.data.len());
            println!("Wrote {}", output.display());
            Ok(())
        }
        DecodeStatus::LengthMismatch { expected, actual } => {
            println!("Original length: {} bytes", expected);
            println!("Decompressed size: {} bytes", actual);
            eprintln!(
                "Warning: decompressed length does not match the original length; {} is unreliable (wrong key or corrupted input?)",
                output.display()
            );
            std::process::exit(2);
        }
    }
}
