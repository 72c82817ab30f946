//! Byte frequency counting.

/// Occurrence counts for each byte value in a buffer.
///
/// Built once per compression and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
    distinct: usize,
    total: u64,
}

impl FrequencyTable {
    /// Count every byte of `data` in a single pass.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }

        let distinct = counts.iter().filter(|&&c| c > 0).count();
        Self {
            counts,
            distinct,
            total: data.len() as u64,
        }
    }

    /// Occurrences of `symbol` (0 if absent).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of byte values that occur at least once.
    pub fn distinct(&self) -> usize {
        self.distinct
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Check if no bytes were counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over present symbols and their counts, ascending by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}
