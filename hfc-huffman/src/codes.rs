//! Code table generation and validation.
//!
//! A [`CodeTable`] maps each symbol to its bit-string. Tables come either from
//! walking a [`HuffmanTree`] (left appends `0`, right appends `1`) or from a
//! parsed container, in which case the entries are validated before use.

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};
use hfc_core::error::{HfcError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A variable-length bit-string; `true` is a `1` bit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<bool>);

impl Code {
    /// Create a code from its bits.
    pub fn new(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    /// Parse a code from ASCII `'0'`/`'1'` characters.
    ///
    /// Returns `None` if any other byte is present.
    pub fn from_ascii(ascii: &[u8]) -> Option<Self> {
        ascii
            .iter()
            .map(|&c| match c {
                b'0' => Some(false),
                b'1' => Some(true),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Render the code as ASCII `'0'`/`'1'` characters.
    pub fn to_ascii(&self) -> Vec<u8> {
        self.0.iter().map(|&b| if b { b'1' } else { b'0' }).collect()
    }

    /// The bits of this code.
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if this is the empty code.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if `self` is a prefix of `other` (every code is a prefix of
    /// itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Reverse lookup from accumulated bits to symbol, used while decoding.
pub type ReverseMap = HashMap<Vec<bool>, u8>;

/// Symbol to code mapping, iterated in ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Assign a code to every leaf of `tree`.
    ///
    /// A tree consisting of a single leaf yields one entry with the empty
    /// code.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut prefix = Vec::with_capacity(tree.depth());
        Self::walk(tree.root(), &mut prefix, &mut codes);
        Self { codes }
    }

    fn walk(node: &Node, prefix: &mut Vec<bool>, codes: &mut BTreeMap<u8, Code>) {
        match node {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, Code(prefix.clone()));
            }
            Node::Internal { left, right, .. } => {
                prefix.push(false);
                Self::walk(left, prefix, codes);
                prefix.pop();

                prefix.push(true);
                Self::walk(right, prefix, codes);
                prefix.pop();
            }
        }
    }

    /// Build a table from parsed entries, rejecting tables that cannot be
    /// decoded unambiguously.
    ///
    /// Rejected: no entries, a repeated symbol, a repeated code, an empty
    /// code alongside other entries, and codes that are prefixes of others.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, Code)>,
    {
        let mut codes = BTreeMap::new();
        for (symbol, code) in entries {
            if codes.insert(symbol, code).is_some() {
                return Err(HfcError::invalid_table(format!(
                    "duplicate symbol {symbol:#04x}"
                )));
            }
        }

        let table = Self { codes };
        if table.is_empty() {
            return Err(HfcError::invalid_table("no entries"));
        }
        if table.len() > 1 {
            if let Some((symbol, _)) = table.iter().find(|(_, code)| code.is_empty()) {
                return Err(HfcError::invalid_table(format!(
                    "empty code for symbol {symbol:#04x} in a {}-entry table",
                    table.len()
                )));
            }
            if let Some((a, b)) = table.prefix_conflict() {
                return Err(HfcError::invalid_table(format!(
                    "code for {a:#04x} is a prefix of the code for {b:#04x}"
                )));
            }
        }
        Ok(table)
    }

    /// Code assigned to `symbol`.
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Number of payload bits needed to encode data with the given
    /// frequencies. Symbols missing from the table contribute nothing.
    pub fn encoded_bit_len(&self, freq: &FrequencyTable) -> u64 {
        freq.iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| count * code.len() as u64))
            .sum()
    }

    /// Check that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        self.prefix_conflict().is_none()
    }

    fn prefix_conflict(&self) -> Option<(u8, u8)> {
        // In lexicographic order a prefix sorts directly before the codes it
        // prefixes, so checking neighbours is enough.
        let mut sorted: Vec<(&Code, u8)> = self.iter().map(|(s, c)| (c, s)).collect();
        sorted.sort();
        sorted
            .windows(2)
            .find(|pair| pair[0].0.is_prefix_of(pair[1].0))
            .map(|pair| (pair[0].1, pair[1].1))
    }

    /// Build the bits-to-symbol lookup used by the decoder.
    pub fn reverse_map(&self) -> ReverseMap {
        self.codes
            .iter()
            .map(|(&symbol, code)| (code.0.clone(), symbol))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::from_ascii(s.as_bytes()).unwrap()
    }

    #[test]
    fn test_from_tree_sample() {
        let tree = HuffmanTree::from_bytes(b"aaaabbc").unwrap();
        let table = CodeTable::from_tree(&tree);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(b'a'), Some(&code("1")));
        assert_eq!(table.get(b'c'), Some(&code("00")));
        assert_eq!(table.get(b'b'), Some(&code("01")));
        assert_eq!(table.max_code_len(), 2);
        assert!(table.is_prefix_free());

        let freq = FrequencyTable::from_bytes(b"aaaabbc");
        assert_eq!(table.encoded_bit_len(&freq), 4 + 2 * 2 + 2);
    }

    #[test]
    fn test_single_symbol_gets_empty_code() {
        let tree = HuffmanTree::from_bytes(&[7; 10]).unwrap();
        let table = CodeTable::from_tree(&tree);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(7), Some(&Code::default()));
        assert_eq!(table.max_code_len(), 0);
    }

    #[test]
    fn test_prefix_free_for_skewed_input() {
        // Fibonacci-like weights give the deepest possible tree.
        let mut data = Vec::new();
        let (mut a, mut b) = (1usize, 1usize);
        for symbol in 0..20u8 {
            data.extend(std::iter::repeat_n(symbol, a));
            (a, b) = (b, a + b);
        }
        let table = CodeTable::from_tree(&HuffmanTree::from_bytes(&data).unwrap());
        assert_eq!(table.len(), 20);
        assert_eq!(table.max_code_len(), 19);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_ascii_roundtrip() {
        let c = code("0110");
        assert_eq!(c.to_ascii(), b"0110");
        assert_eq!(c.to_string(), "0110");
        assert_eq!(c.len(), 4);
        assert!(Code::from_ascii(b"01x").is_none());
    }

    #[test]
    fn test_from_entries_validation() {
        assert!(CodeTable::from_entries(vec![(1, code("0")), (2, code("1"))]).is_ok());
        assert!(CodeTable::from_entries(vec![(1, Code::default())]).is_ok());

        let cases = vec![
            vec![],
            vec![(1, code("0")), (1, code("1"))],
            vec![(1, code("0")), (2, code("0"))],
            vec![(1, code("0")), (2, Code::default())],
            vec![(1, code("0")), (2, code("01")), (3, code("11"))],
        ];
        for entries in cases {
            assert!(matches!(
                CodeTable::from_entries(entries),
                Err(HfcError::InvalidCodeTable { .. })
            ));
        }
    }

    #[test]
    fn test_reverse_map() {
        let table = CodeTable::from_tree(&HuffmanTree::from_bytes(b"aaaabbc").unwrap());
        let reverse = table.reverse_map();
        assert_eq!(reverse.len(), 3);
        assert_eq!(reverse.get([true].as_slice()), Some(&b'a'));
        assert_eq!(reverse.get([false, true].as_slice()), Some(&b'b'));
        assert_eq!(reverse.get([false].as_slice()), None);
    }
}
