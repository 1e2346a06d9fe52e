//! Values shared between the encoding side
//! and the decoding side.

/// Number of distinct symbols. Every symbol is one byte.
pub const ALPHABET_SIZE: usize = 256;

/// The character a code uses for a step to the left child.
pub const LEFT_BIT: char = '0';
/// The character a code uses for a step to the right child.
pub const RIGHT_BIT: char = '1';

/// Maps the character form of a bit to the branch it selects, `false` being left.
pub fn bit_from_char(c: char) -> Option<bool> {
    match c {
        LEFT_BIT => Some(false),
        RIGHT_BIT => Some(true),
        _ => None,
    }
}

/// Inverse of [bit_from_char].
pub fn char_from_bit(bit: bool) -> char {
    if bit {
        RIGHT_BIT
    } else {
        LEFT_BIT
    }
}
