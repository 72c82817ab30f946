//! Bit packing and unpacking of the code stream.
//!
//! The packed payload is the concatenation of every input byte's code,
//! MSB-first, padded with zero bits to a whole byte. The pad count is 0-7;
//! a stream that is already byte-aligned records 0.

use crate::codes::CodeTable;
use hfc_core::bitstream::{BitReader, BitWriter};
use hfc_core::error::{HfcError, Result};

/// Largest pad count a valid container can carry.
pub const MAX_PAD: u8 = 7;

/// A packed bit stream and the number of zero bits appended to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    /// Packed bytes, most significant bit first.
    pub bytes: Vec<u8>,
    /// Zero bits appended to the last byte (0-7).
    pub pad: u8,
}

impl PackedBits {
    /// Number of meaningful (un-padded) bits.
    pub fn bit_len(&self) -> u64 {
        (self.bytes.len() as u64 * 8).saturating_sub(u64::from(self.pad))
    }
}

/// Pack a sequence of bits.
pub fn pack<I>(bits: I) -> PackedBits
where
    I: IntoIterator<Item = bool>,
{
    let mut writer = BitWriter::new();
    for bit in bits {
        writer.write_bit(bit);
    }
    let (bytes, pad) = writer.finish();
    PackedBits { bytes, pad }
}

/// Encode every byte of `input` with `table` and pack the result.
///
/// Every byte of `input` must have an entry in `table`. `bit_len` is the
/// expected number of code bits and only sizes the output buffer.
pub fn pack_symbols(input: &[u8], table: &CodeTable, bit_len: u64) -> Result<PackedBits> {
    let mut writer = BitWriter::with_capacity(bit_len.div_ceil(8) as usize);
    for (offset, &byte) in input.iter().enumerate() {
        let code = table.get(byte).ok_or_else(|| {
            HfcError::invalid_table(format!(
                "no code for byte {byte:#04x} at offset {offset}"
            ))
        })?;
        for &bit in code.bits() {
            writer.write_bit(bit);
        }
    }
    let (bytes, pad) = writer.finish();
    Ok(PackedBits { bytes, pad })
}

/// Open a reader over `bytes` that yields every bit except the trailing
/// `pad` bits.
///
/// Fails if `pad` exceeds [`MAX_PAD`] or the number of available bits.
pub fn unpack(bytes: &[u8], pad: u8) -> Result<BitReader<'_>> {
    if pad > MAX_PAD {
        return Err(HfcError::corrupted_header(format!(
            "pad count {pad} exceeds {MAX_PAD}"
        )));
    }
    let total = bytes.len() as u64 * 8;
    if u64::from(pad) > total {
        return Err(HfcError::corrupted_header(format!(
            "pad count {pad} exceeds the {total}-bit payload"
        )));
    }
    BitReader::with_bit_len(bytes, total - u64::from(pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::HuffmanTree;

    fn bits(s: &str) -> Vec<bool> {
        s.bytes().map(|c| c == b'1').collect()
    }

    #[test]
    fn test_pack_pads_with_zeros() {
        let packed = pack(bits("1011"));
        assert_eq!(packed.bytes, vec![0b1011_0000]);
        assert_eq!(packed.pad, 4);
        assert_eq!(packed.bit_len(), 4);
    }

    #[test]
    fn test_aligned_stream_records_zero_pad() {
        let packed = pack(bits("1100110011110000"));
        assert_eq!(packed.bytes, vec![0xCC, 0xF0]);
        assert_eq!(packed.pad, 0);

        let unpacked: Vec<bool> = unpack(&packed.bytes, packed.pad).unwrap().collect();
        assert_eq!(unpacked.len(), 16);
    }

    #[test]
    fn test_unpack_trims_padding() {
        let packed = pack(bits("101"));
        let unpacked: Vec<bool> = unpack(&packed.bytes, packed.pad).unwrap().collect();
        assert_eq!(unpacked, bits("101"));
    }

    #[test]
    fn test_empty_stream() {
        let packed = pack(std::iter::empty());
        assert!(packed.bytes.is_empty());
        assert_eq!(packed.pad, 0);
        assert_eq!(unpack(&[], 0).unwrap().count(), 0);
    }

    #[test]
    fn test_unpack_rejects_bad_pad() {
        assert!(matches!(
            unpack(&[0xFF], 8),
            Err(HfcError::CorruptedHeader { .. })
        ));
        assert!(matches!(
            unpack(&[], 3),
            Err(HfcError::CorruptedHeader { .. })
        ));
    }

    #[test]
    fn test_pack_symbols() {
        let input = b"aaaabbc";
        let table = crate::codes::CodeTable::from_tree(&HuffmanTree::from_bytes(input).unwrap());
        let packed = pack_symbols(input, &table, 10).unwrap();
        // a=1 a=1 a=1 a=1 b=01 b=01 c=00, then six pad bits
        assert_eq!(packed.bytes, vec![0b1111_0101, 0b0000_0000]);
        assert_eq!(packed.pad, 6);
        assert_eq!(packed.bit_len(), 10);
    }

    #[test]
    fn test_pack_symbols_missing_code() {
        let table = crate::codes::CodeTable::from_tree(&HuffmanTree::from_bytes(b"ab").unwrap());
        assert!(pack_symbols(b"abc", &table, 3).is_err());
    }
}
