//! The hfc container format.
//!
//! ```text
//! [4 bytes]  entry count (u32, BE)
//! repeated entry count times:
//!   [1 byte]  symbol
//!   [2 bytes] code length (u16, BE)
//!   [n bytes] code bits, ASCII '0'/'1'
//! [1 byte]  pad count (0-7)            \
//! [4 bytes] original length (u32, BE)   } obfuscated with the key
//! [N bytes] packed payload             /
//! ```
//!
//! The code table is stored in clear so [`inspect`] can read it without the
//! key. Table entries are written in ascending symbol order, which makes
//! the output fully deterministic for a given input and key.

use crate::codes::{Code, CodeTable};
use crate::frequency::FrequencyTable;
use crate::obfuscate::ObfuscationKey;
use crate::pack::{self, PackedBits};
use crate::tree::HuffmanTree;
use hfc_core::error::{HfcError, Result};
use hfc_core::traits::Decoded;
use tracing::{debug, warn};

/// Size of the entry count field.
pub const ENTRY_COUNT_SIZE: usize = 4;

/// Size of an entry's fixed part (symbol + code length).
pub const ENTRY_HEADER_SIZE: usize = 3;

/// Size of the pad count + original length header.
pub const PAYLOAD_HEADER_SIZE: usize = 5;

/// Smallest well-formed container: one entry with an empty code and an
/// empty payload.
pub const MIN_CONTAINER_SIZE: usize = ENTRY_COUNT_SIZE + ENTRY_HEADER_SIZE + PAYLOAD_HEADER_SIZE;

/// Largest input the 32-bit length field can describe.
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

/// At most one entry per byte value.
const MAX_ENTRIES: u32 = 256;

/// Upper bound on the output buffer reserved before decoding starts.
const MAX_INITIAL_CAPACITY: u64 = 1 << 20;

/// Limits applied while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Largest original length a container may declare.
    pub max_output_len: u64,
}

impl DecodeOptions {
    /// Accept anything the format can express.
    pub const DEFAULT: Self = Self {
        max_output_len: u32::MAX as u64,
    };

    /// Create options with the given output limit.
    pub fn new(max_output_len: u64) -> Self {
        Self { max_output_len }
    }

    /// Replace the output limit.
    pub fn with_max_output_len(mut self, max_output_len: u64) -> Self {
        self.max_output_len = max_output_len;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The pad count and original length that precede the packed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadHeader {
    /// Zero bits appended to the payload (0-7).
    pub pad: u8,
    /// Number of bytes the payload decodes to.
    pub original_len: u32,
}

impl PayloadHeader {
    /// Append the header bytes to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.push(self.pad);
        out.extend_from_slice(&self.original_len.to_be_bytes());
    }

    /// Parse the header from the start of a de-obfuscated region.
    pub fn parse(region: &[u8], offset: usize) -> Result<Self> {
        let Some(header) = region.get(..PAYLOAD_HEADER_SIZE) else {
            return Err(HfcError::truncated(offset, PAYLOAD_HEADER_SIZE, region.len()));
        };
        Ok(Self {
            pad: header[0],
            original_len: u32::from_be_bytes([header[1], header[2], header[3], header[4]]),
        })
    }
}

/// What can be learned from a container without its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    /// The embedded code table.
    pub table: CodeTable,
    /// Bytes taken by the clear-text code table.
    pub table_len: usize,
    /// Bytes taken by the obfuscated header and payload.
    pub region_len: usize,
}

impl ContainerInfo {
    /// Total container size.
    pub fn total_len(&self) -> usize {
        self.table_len + self.region_len
    }

    /// Size of the packed payload alone.
    pub fn payload_len(&self) -> usize {
        self.region_len.saturating_sub(PAYLOAD_HEADER_SIZE)
    }
}

/// Take `len` bytes at `*offset`, advancing it.
fn take<'a>(input: &'a [u8], offset: &mut usize, len: usize) -> Result<&'a [u8]> {
    let available = input.len().saturating_sub(*offset);
    if available < len {
        return Err(HfcError::truncated(*offset, len, available));
    }
    let bytes = &input[*offset..*offset + len];
    *offset += len;
    Ok(bytes)
}

fn check_min_size(input: &[u8]) -> Result<()> {
    if input.len() < MIN_CONTAINER_SIZE {
        return Err(HfcError::truncated(0, MIN_CONTAINER_SIZE, input.len()));
    }
    Ok(())
}

/// Number of bytes `table` occupies when serialized.
pub fn table_len(table: &CodeTable) -> usize {
    ENTRY_COUNT_SIZE
        + table
            .iter()
            .map(|(_, code)| ENTRY_HEADER_SIZE + code.len())
            .sum::<usize>()
}

/// Serialize `table` onto `out`.
pub fn write_table(table: &CodeTable, out: &mut Vec<u8>) -> Result<()> {
    out.extend_from_slice(&(table.len() as u32).to_be_bytes());
    for (symbol, code) in table.iter() {
        let len = u16::try_from(code.len()).map_err(|_| {
            HfcError::invalid_table(format!(
                "code for {symbol:#04x} is {} bits long",
                code.len()
            ))
        })?;
        out.push(symbol);
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(&code.to_ascii());
    }
    Ok(())
}

/// Parse the code table at the start of `input`.
///
/// Returns the table and the offset of the first byte after it.
pub fn read_table(input: &[u8]) -> Result<(CodeTable, usize)> {
    let mut offset = 0;
    let count = take(input, &mut offset, ENTRY_COUNT_SIZE)?;
    let count = u32::from_be_bytes([count[0], count[1], count[2], count[3]]);
    if count > MAX_ENTRIES {
        return Err(HfcError::invalid_table(format!(
            "{count} entries exceeds the {MAX_ENTRIES} possible symbols"
        )));
    }

    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let header = take(input, &mut offset, ENTRY_HEADER_SIZE)?;
        let symbol = header[0];
        let len = u16::from_be_bytes([header[1], header[2]]) as usize;
        let ascii = take(input, &mut offset, len)?;
        let code = Code::from_ascii(ascii).ok_or_else(|| {
            HfcError::invalid_table(format!(
                "code for {symbol:#04x} contains bytes other than '0'/'1'"
            ))
        })?;
        entries.push((symbol, code));
    }

    Ok((CodeTable::from_entries(entries)?, offset))
}

/// Read the clear-text part of a container.
pub fn inspect(input: &[u8]) -> Result<ContainerInfo> {
    check_min_size(input)?;
    let (table, table_len) = read_table(input)?;
    let region_len = input.len() - table_len;
    if region_len < PAYLOAD_HEADER_SIZE {
        return Err(HfcError::truncated(table_len, PAYLOAD_HEADER_SIZE, region_len));
    }
    Ok(ContainerInfo {
        table,
        table_len,
        region_len,
    })
}

/// Output bytes to reserve before decoding.
fn initial_capacity(expected: u64, payload_bits: u64, max_code_len: usize) -> usize {
    // Non-empty codes consume at least one bit per symbol.
    let bound = if max_code_len == 0 {
        expected
    } else {
        expected.min(payload_bits)
    };
    bound.min(MAX_INITIAL_CAPACITY) as usize
}

/// Compress `input` into a container obfuscated with `key`.
pub fn encode(input: &[u8], key: ObfuscationKey) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(HfcError::EmptyInput);
    }
    if input.len() > MAX_INPUT_LEN {
        return Err(HfcError::input_too_large(input.len(), MAX_INPUT_LEN));
    }

    let freq = FrequencyTable::from_bytes(input);
    let table = CodeTable::from_tree(&HuffmanTree::from_frequencies(&freq)?);
    let bit_len = table.encoded_bit_len(&freq);
    let PackedBits { bytes, pad } = pack::pack_symbols(input, &table, bit_len)?;

    debug!(
        input_len = input.len(),
        symbols = table.len(),
        max_code_len = table.max_code_len(),
        bit_len,
        pad,
        "encoded payload"
    );

    let table_len = table_len(&table);
    let mut out = Vec::with_capacity(table_len + PAYLOAD_HEADER_SIZE + bytes.len());
    write_table(&table, &mut out)?;

    let header = PayloadHeader {
        pad,
        original_len: input.len() as u32,
    };
    header.write_to(&mut out);
    out.extend_from_slice(&bytes);
    key.apply(&mut out[table_len..]);

    Ok(out)
}

/// Decompress a container obfuscated with `key`.
///
/// Structural problems are errors. Running out of bits before the declared
/// length is reached, including in the middle of a code, is reported
/// through the returned status instead and keeps the symbols decoded so far.
pub fn decode(input: &[u8], key: ObfuscationKey, options: DecodeOptions) -> Result<Decoded> {
    check_min_size(input)?;
    let (table, table_len) = read_table(input)?;

    let mut region = input[table_len..].to_vec();
    key.apply(&mut region);
    let header = PayloadHeader::parse(&region, table_len)?;
    let expected = u64::from(header.original_len);
    if expected > options.max_output_len {
        return Err(HfcError::output_limit(expected, options.max_output_len));
    }

    let mut bits = pack::unpack(&region[PAYLOAD_HEADER_SIZE..], header.pad)?;
    let payload_bits = bits.bits_remaining();
    debug!(
        symbols = table.len(),
        pad = header.pad,
        payload_bits,
        expected,
        "decoding payload"
    );

    let reverse = table.reverse_map();
    let max_code_len = table.max_code_len();
    let mut out = Vec::with_capacity(initial_capacity(expected, payload_bits, max_code_len));
    let mut current = Vec::with_capacity(max_code_len);

    while (out.len() as u64) < expected {
        if let Some(&symbol) = reverse.get(current.as_slice()) {
            out.push(symbol);
            current.clear();
            continue;
        }
        let Some(bit) = bits.read_bit() else {
            break;
        };
        current.push(bit);
        if current.len() > max_code_len {
            return Err(HfcError::unmappable(
                bits.bits_read() - current.len() as u64,
            ));
        }
    }

    if !current.is_empty() {
        debug!(
            leftover_bits = current.len(),
            "payload ended inside a code"
        );
    }

    let decoded = Decoded::new(out, expected);
    if !decoded.is_complete() {
        warn!(
            expected,
            actual = decoded.data.len(),
            "decoded length does not match the declared original length"
        );
    }
    Ok(decoded)
}
