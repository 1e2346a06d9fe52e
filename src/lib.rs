//! A Huffman coder for byte strings.
//!
//! The input is counted into a [frequency::FrequencyTable], the two least frequent
//! nodes are merged over and over through a [priority_queue::PriorityQueue] until a
//! single [huffman::HuffmanTree] remains, and the tree is turned into a
//! [huffman::CodeTable] that maps every byte of the input to a prefix free bit-string.
//!
//! ```
//! let text = b"abracadabra";
//! let tree = ruhuff::build_huffman_tree(text)?;
//! let table = ruhuff::generate_code_table(&tree);
//! let encoded = ruhuff::encode(text, &table)?;
//! assert_eq!(ruhuff::decode(&tree, &encoded)?, text);
//! # Ok::<(), ruhuff::errors::HuffmanError>(())
//! ```
#![no_std]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

#[cfg(feature = "std")]
pub const VERBOSE: bool = false;

macro_rules! vprintln {
    ($($x:expr),*) => {
        #[cfg(feature = "std")]
        if crate::VERBOSE {
            std::println!($($x),*);
        }
    }
}

pub mod common;
pub mod decoding;
pub mod encoding;
pub mod errors;
pub mod frequency;
pub mod huffman;
pub mod priority_queue;
mod tests;

pub use frequency::FrequencyTable;
pub use huffman::{
    build_huffman_tree, decode, encode, generate_code_table, CodeTable, HuffmanDecoder,
    HuffmanEncoder, HuffmanTree, Node, TreeBuilder,
};
pub use priority_queue::{PriorityQueue, QueueCapacity};
