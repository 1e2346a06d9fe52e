/// Reads bits from a byte slice, starting at the most significant bit of the first byte.
pub struct BitReader<'s> {
    idx: usize, //index counts bits already read
    len: usize,
    source: &'s [u8],
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum GetBitsError {
    #[error("Can't read {requested} bits, only have {remaining} bits left")]
    NotEnoughRemainingBits { requested: usize, remaining: usize },
}

impl<'s> BitReader<'s> {
    /// Read only the first `num_bits` bits of `source`. Anything after is padding.
    ///
    /// Fails if `source` is too short to hold `num_bits` bits.
    pub fn new(source: &'s [u8], num_bits: usize) -> Result<BitReader<'s>, GetBitsError> {
        let available = source.len() * 8;
        if num_bits > available {
            return Err(GetBitsError::NotEnoughRemainingBits {
                requested: num_bits,
                remaining: available,
            });
        }
        Ok(BitReader {
            idx: 0,
            len: num_bits,
            source,
        })
    }

    pub fn bits_left(&self) -> usize {
        self.len - self.idx
    }

    pub fn get_bit(&mut self) -> Result<bool, GetBitsError> {
        if self.idx >= self.len {
            return Err(GetBitsError::NotEnoughRemainingBits {
                requested: 1,
                remaining: 0,
            });
        }
        let byte = self.source[self.idx / 8];
        let bit = (byte >> (7 - self.idx % 8)) & 1 == 1;
        self.idx += 1;
        Ok(bit)
    }
}
