//! Info command implementation.

use hfc_huffman::{ContainerInfo, inspect};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// JSON output for `hfc info --json`.
#[derive(Debug, Serialize, Deserialize)]
struct InfoOutput {
    file: String,
    size: usize,
    table_size: usize,
    payload_size: usize,
    entries: usize,
    max_code_len: usize,
    codes: Vec<CodeEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CodeEntry {
    symbol: u8,
    length: usize,
    code: String,
}

impl InfoOutput {
    fn new(path: &Path, info: &ContainerInfo) -> Self {
        Self {
            file: path.display().to_string(),
            size: info.total_len(),
            table_size: info.table_len,
            payload_size: info.payload_len(),
            entries: info.table.len(),
            max_code_len: info.table.max_code_len(),
            codes: info
                .table
                .iter()
                .map(|(symbol, code)| CodeEntry {
                    symbol,
                    length: code.len(),
                    code: code.to_string(),
                })
                .collect(),
        }
    }
}

/// Printable form of a symbol for the text table.
fn display_symbol(symbol: u8) -> String {
    if symbol.is_ascii_graphic() {
        format!("'{}'", symbol as char)
    } else {
        format!("{:#04x}", symbol)
    }
}

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let container = fs::read(input)?;
    let info = inspect(&container)?;
    let output = InfoOutput::new(input, &info);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("File: {}", output.file);
    println!("Size: {} bytes", output.size);
    println!("Code table: {} bytes", output.table_size);
    println!("Packed payload: {} bytes", output.payload_size);
    println!("Entries: {}", output.entries);
    println!("Longest code: {} bits", output.max_code_len);
    println!();
    println!("{:>6} {:>6}  Code", "Symbol", "Bits");
    println!("{}", "-".repeat(40));
    for entry in &output.codes {
        let code = if entry.code.is_empty() {
            "(empty)"
        } else {
            entry.code.as_str()
        };
        println!(
            "{:>6} {:>6}  {}",
            display_symbol(entry.symbol),
            entry.length,
            code
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_symbol() {
        assert_eq!(display_symbol(b'a'), "'a'");
        assert_eq!(display_symbol(b' '), "0x20");
        assert_eq!(display_symbol(0), "0x00");
    }

    #[test]
    fn test_info_output_json() {
        let container = hfc_huffman::encode(b"aaaabbc", 5).unwrap();
        let info = inspect(&container).unwrap();
        let output = InfoOutput::new(Path::new("sample.hfc"), &info);

        let json = serde_json::to_string(&output).unwrap();
        let parsed: InfoOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.entries, 3);
        assert_eq!(parsed.codes[0].symbol, b'a');
        assert_eq!(parsed.codes[0].code, "1");
        assert_eq!(parsed.size, container.len());
    }
}
