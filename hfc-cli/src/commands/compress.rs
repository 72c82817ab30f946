//! Compress command implementation.

use super::{WriteOptions, write_output};
use crate::utils::{create_spinner, space_savings};
use hfc_huffman::{Compressor, ContainerInfo, HuffmanCodec, inspect};
use std::fmt::Write;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    key: i64,
    options: WriteOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    println!("Compressing {} ({} bytes)", input.display(), data.len());

    let codec = HuffmanCodec::new(key);
    let pb = create_spinner("building code table", options.progress);
    let container = codec.compress(&data);
    pb.finish_and_clear();
    let container = container?;

    let info = inspect(&container)?;
    write_output(input, output, &container, options)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        key_byte = codec.key().byte(),
        "compressed"
    );

    print!("{}", summary(data.len(), &info));
    println!("Wrote {}", output.display());
    Ok(())
}

/// Size report printed after a successful compression.
///
/// The compressed size is the obfuscated region alone; the code table is
/// reported as part of the container size.
fn summary(input_len: usize, info: &ContainerInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Compressed size: {} bytes (excluding {}-byte code table)",
        info.region_len, info.table_len
    );
    let _ = writeln!(out, "Container size: {} bytes", info.total_len());
    let _ = writeln!(
        out,
        "Space savings: {:.1}%",
        space_savings(input_len as u64, info.total_len() as u64)
    );
    let _ = writeln!(out, "Number of Huffman codes: {}", info.table.len());
    out
}
