use super::tree::{HuffmanTree, Node};
use crate::common::bit_from_char;
use crate::decoding::bit_reader::GetBitsError;
use crate::encoding::PackedBits;
use alloc::vec;
use alloc::vec::Vec;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Encoded input contains {got:?} at index {index}, only '0' and '1' are allowed")]
    InvalidBit { index: usize, got: char },
    #[error("Encoded input ended in the middle of a code after {bits_consumed} bits, {dangling} bits did not reach a leaf")]
    IncompleteCode { bits_consumed: usize, dangling: usize },
    #[error(transparent)]
    GetBitsError(#[from] GetBitsError),
}

/// Turns encoded bits back into the original bytes by walking a [HuffmanTree].
pub struct HuffmanDecoder<'tree> {
    tree: &'tree HuffmanTree,
}

impl<'t> HuffmanDecoder<'t> {
    pub fn new(tree: &'t HuffmanTree) -> HuffmanDecoder<'t> {
        HuffmanDecoder { tree }
    }

    /// Decode a '0'/'1' string
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let bits = encoded.chars().enumerate().map(|(index, got)| {
            bit_from_char(got).ok_or(DecodeError::InvalidBit { index, got })
        });
        self.walk(bits)
    }

    /// Decode bits packed by [super::HuffmanEncoder::encode_packed]
    ///
    /// A `bit_count` larger than the bytes can hold is rejected before anything is decoded.
    pub fn decode_packed(&self, packed: &PackedBits) -> Result<Vec<u8>, DecodeError> {
        let mut br = packed.reader()?;
        let bits = core::iter::from_fn(|| {
            if br.bits_left() == 0 {
                None
            } else {
                Some(br.get_bit().map_err(DecodeError::from))
            }
        });
        self.walk(bits)
    }

    fn walk<I>(&self, bits: I) -> Result<Vec<u8>, DecodeError>
    where
        I: Iterator<Item = Result<bool, DecodeError>>,
    {
        let root = self.tree.root();

        // A lone symbol has the empty code, so the bits carry no information.
        // Its weight is the number of times it occurred.
        if let Node::Leaf { symbol, weight } = root {
            vprintln!("Single leaf tree, repeating {} {} times", symbol, weight);
            return Ok(vec![*symbol; *weight]);
        }

        let mut decoded = Vec::with_capacity(self.tree.weight());
        let mut cursor = root;
        let mut bits_consumed = 0;
        let mut code_len = 0;

        for bit in bits {
            let bit = bit?;
            bits_consumed += 1;
            code_len += 1;

            // the cursor is reset to the internal root whenever it reaches a leaf
            if let Node::Internal { left, right, .. } = cursor {
                cursor = if bit { &**right } else { &**left };
            }
            if let Node::Leaf { symbol, .. } = cursor {
                decoded.push(*symbol);
                cursor = root;
                code_len = 0;
            }
        }

        if code_len != 0 {
            return Err(DecodeError::IncompleteCode {
                bits_consumed,
                dangling: code_len,
            });
        }
        Ok(decoded)
    }
}

/// Decode `encoded` with the tree the codes were generated from.
pub fn decode(tree: &HuffmanTree, encoded: &str) -> Result<Vec<u8>, DecodeError> {
    HuffmanDecoder::new(tree).decode(encoded)
}
