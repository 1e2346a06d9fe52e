//! Contains [FrequencyTable], the per-byte
//! occurrence counts a Huffman tree is built from.

use crate::common::ALPHABET_SIZE;

/// Occurrence count of each of the 256 byte values in some text.
///
/// The sum of all counts always equals the number of bytes that were counted.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// An all-zero table
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; ALPHABET_SIZE],
        }
    }

    pub fn from_text(text: &[u8]) -> Self {
        let mut table = Self::new();
        table.add_text(text);
        table
    }

    /// Count every byte of `text` on top of what was already counted
    pub fn add_text(&mut self, text: &[u8]) {
        for &byte in text {
            self.counts[byte as usize] += 1;
        }
    }

    pub fn count(&self, symbol: u8) -> usize {
        self.counts[symbol as usize]
    }

    /// Sets the count of a single symbol. Used when the counts are known from elsewhere,
    /// e.g. when they are recovered from the leaves of a tree.
    pub fn set_count(&mut self, symbol: u8, count: usize) {
        self.counts[symbol as usize] = count;
    }

    /// Number of bytes counted so far.
    ///
    /// `None` if counts set through [FrequencyTable::set_count] add up to more than `usize::MAX`.
    pub fn total(&self) -> Option<usize> {
        self.counts
            .iter()
            .try_fold(0usize, |total, &count| total.checked_add(count))
    }

    /// Number of symbols with a count above zero
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Iterate over all present symbols in ascending order together with their count
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::FrequencyTable;

    #[test]
    fn abracadabra() {
        let table = FrequencyTable::from_text(b"abracadabra");
        assert_eq!(table.count(b'a'), 5);
        assert_eq!(table.count(b'b'), 2);
        assert_eq!(table.count(b'r'), 2);
        assert_eq!(table.count(b'c'), 1);
        assert_eq!(table.count(b'd'), 1);
        assert_eq!(table.count(b'z'), 0);
        assert_eq!(table.distinct_symbols(), 5);
        assert_eq!(table.total(), Some(11));
    }

    #[test]
    fn empty_text() {
        let table = FrequencyTable::from_text(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), Some(0));
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn full_byte_range() {
        let data: alloc::vec::Vec<u8> = (0..=255).chain(0..=255).chain(250..=255).collect();
        let mut table = FrequencyTable::from_text(&data[..256]);
        table.add_text(&data[256..]);
        assert_eq!(table.total(), Some(data.len()));
        assert_eq!(table.distinct_symbols(), 256);
        assert_eq!(table.count(0), 2);
        assert_eq!(table.count(255), 3);

        let symbols: alloc::vec::Vec<u8> = table.iter().map(|(symbol, _)| symbol).collect();
        assert!(symbols.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn total_overflow() {
        let mut table = FrequencyTable::new();
        table.set_count(b'a', usize::MAX);
        assert_eq!(table.total(), Some(usize::MAX));
        table.set_count(b'b', 1);
        assert_eq!(table.total(), None);
    }
}
