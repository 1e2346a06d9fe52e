use alloc::vec::Vec;

/// An interface for writing an arbitrary number of bits into a buffer
pub(crate) struct BitWriter {
    /// The buffer that's filled with bits
    output: Vec<u8>,
    /// The index pointing to the next unoccupied bit. Effectively just
    /// the number of bits that have been written into the buffer so far.
    bit_idx: usize,
}

impl BitWriter {
    /// Initialize a new writer. Write new bits into the buffer with `write_bit`, and
    /// obtain the output using `dump`
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            bit_idx: 0,
        }
    }

    /// Write a single bit. Bits fill each byte starting from the *most significant position*.
    pub fn write_bit(&mut self, bit: bool) {
        let bit_offset = self.bit_idx % 8;
        if bit_offset == 0 {
            self.output.push(0);
        }
        if bit {
            // the byte for this bit was pushed above at the latest
            let last = self.output.len() - 1;
            self.output[last] |= 0x80 >> bit_offset;
        }
        self.bit_idx += 1;
    }

    /// Number of bits written so far
    pub fn index(&self) -> usize {
        self.bit_idx
    }

    /// Returns the populated buffer that you've been writing bits into.
    /// A partially filled last byte is padded with zeros.
    ///
    /// This function consumes the writer, so it cannot be used after
    /// dumping
    pub fn dump(self) -> Vec<u8> {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::BitWriter;
    use alloc::vec;

    fn write_str(bw: &mut BitWriter, bits: &str) {
        for c in bits.chars() {
            bw.write_bit(c == '1');
        }
    }

    #[test]
    fn single_byte_written_4_4() {
        // Write the first 4 bits as 1s and the last 4 bits as 0s
        let mut bw = BitWriter::new();
        write_str(&mut bw, "1111");
        write_str(&mut bw, "0000");
        assert_eq!(bw.index(), 8);
        assert_eq!(vec![0b1111_0000], bw.dump());
    }

    #[test]
    fn multi_byte_boundary_crossed_4_5_7() {
        // Writing 4 1s and then 5 zeros then 7 1s
        let mut bw = BitWriter::new();
        write_str(&mut bw, "1111");
        write_str(&mut bw, "00000");
        write_str(&mut bw, "1111111");
        assert_eq!(bw.index(), 16);
        assert_eq!(vec![0b1111_0000, 0b0111_1111], bw.dump());
    }

    #[test]
    fn partial_byte_is_padded() {
        let mut bw = BitWriter::new();
        write_str(&mut bw, "101");
        assert_eq!(bw.index(), 3);
        assert_eq!(vec![0b1010_0000], bw.dump());
    }

    #[test]
    fn nothing_written() {
        let bw = BitWriter::new();
        assert_eq!(bw.index(), 0);
        assert!(bw.dump().is_empty());
    }
}
