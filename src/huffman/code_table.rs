use super::tree::{HuffmanTree, Node};
use crate::common::{ALPHABET_SIZE, LEFT_BIT, RIGHT_BIT};
use crate::frequency::FrequencyTable;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Maps every symbol of a tree to its code, the path from the root to its leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    /// Indexed by symbol, `None` for symbols the tree does not contain
    codes: Vec<Option<String>>,
}

impl CodeTable {
    pub fn get(&self, symbol: u8) -> Option<&str> {
        self.codes[symbol as usize].as_deref()
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.codes[symbol as usize].is_some()
    }

    /// Number of symbols that have a code
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All symbols with their code, in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_deref().map(|code| (symbol as u8, code)))
    }

    /// Number of bits the encoded form of a text with these frequencies takes.
    ///
    /// Returns `None` if a counted symbol has no code.
    pub fn encoded_bit_count(&self, frequencies: &FrequencyTable) -> Option<usize> {
        frequencies
            .iter()
            .map(|(symbol, count)| self.get(symbol).map(|code| code.len() * count))
            .sum()
    }
}

/// Derive the code of every leaf by walking the tree depth first.
///
/// A tree that is a single leaf assigns the empty code to its symbol.
pub fn generate_code_table(tree: &HuffmanTree) -> CodeTable {
    let mut codes = vec![None; ALPHABET_SIZE];

    // One shared path buffer. Each stack entry remembers how long the path to its
    // parent was, so the buffer is cut back to that before the branch bit is pushed.
    let mut path = String::new();
    let mut stack: Vec<(&Node, usize, Option<char>)> = vec![(tree.root(), 0, None)];

    while let Some((node, parent_len, bit)) = stack.pop() {
        path.truncate(parent_len);
        if let Some(bit) = bit {
            path.push(bit);
        }

        match node {
            Node::Leaf { symbol, .. } => {
                codes[*symbol as usize] = Some(path.clone());
            }
            Node::Internal { left, right, .. } => {
                let len = path.len();
                stack.push((&**right, len, Some(RIGHT_BIT)));
                stack.push((&**left, len, Some(LEFT_BIT)));
            }
        }
    }

    CodeTable { codes }
}
