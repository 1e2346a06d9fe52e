//! Packing encoded bits into bytes.
pub(crate) mod bit_writer;

use crate::common::char_from_bit;
use crate::decoding::bit_reader::{BitReader, GetBitsError};
use alloc::string::String;
use alloc::vec::Vec;

/// Encoded bits packed eight to a byte, most significant bit first.
///
/// The last byte is padded with zeros, `bit_count` tells where the real bits end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedBits {
    pub bytes: Vec<u8>,
    pub bit_count: usize,
}

impl PackedBits {
    /// A reader over exactly the `bit_count` real bits.
    ///
    /// Fails if `bytes` is too short to hold `bit_count` bits.
    pub fn reader(&self) -> Result<BitReader<'_>, GetBitsError> {
        BitReader::new(&self.bytes, self.bit_count)
    }

    /// Expand back into the '0'/'1' form
    pub fn to_bit_string(&self) -> Result<String, GetBitsError> {
        let mut out = String::with_capacity(self.bit_count);
        let mut br = self.reader()?;
        while br.bits_left() > 0 {
            out.push(char_from_bit(br.get_bit()?));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::bit_writer::BitWriter;
    use super::PackedBits;
    use crate::decoding::bit_reader::GetBitsError;

    #[test]
    fn to_bit_string() {
        let mut bw = BitWriter::new();
        for c in "101100101".chars() {
            bw.write_bit(c == '1');
        }
        let bit_count = bw.index();
        let packed = PackedBits {
            bytes: bw.dump(),
            bit_count,
        };
        assert_eq!(packed.bytes, [0b1011_0010, 0b1000_0000]);
        assert_eq!(packed.to_bit_string().unwrap(), "101100101");
    }

    #[test]
    fn bit_count_past_the_bytes() {
        let packed = PackedBits {
            bytes: alloc::vec![0xFF],
            bit_count: 9,
        };
        assert_eq!(
            packed.to_bit_string(),
            Err(GetBitsError::NotEnoughRemainingBits {
                requested: 9,
                remaining: 8
            })
        );
    }
}
