use crate::frequency::FrequencyTable;
use crate::priority_queue::{PriorityQueue, PriorityQueueError, QueueCapacity, Weighted};
use alloc::boxed::Box;
use alloc::vec;

/// A node of a Huffman tree.
///
/// Internal nodes always own exactly two children, leaves never have any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: u8, weight: usize) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Combine two nodes under a new parent. `left` ends up on the '0' branch.
    ///
    /// The two weights must add up to at most `usize::MAX`.
    pub fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol of a leaf, `None` for internal nodes
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// The branch taken for a bit, `false` being left. Leaves have no children.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { &**right } else { &**left }),
        }
    }
}

impl Weighted for Node {
    fn weight(&self) -> usize {
        Node::weight(self)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeBuildError {
    #[error("Can't build a huffman tree from empty input")]
    EmptyInput,
    #[error("Symbol counts add up to more than {max} and can't be weighed", max = usize::MAX)]
    WeightOverflow,
    #[error(transparent)]
    PriorityQueue(#[from] PriorityQueueError),
}

/// A finished Huffman tree. Leaves are exactly the symbols of the text it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Sum of all leaf weights, which is the length of the text the tree was built from
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// True if the text only had one distinct symbol. That symbol then has an empty code.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    /// Recover the counts the tree was built from by visiting every leaf
    pub fn frequencies(&self) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { symbol, weight } => table.set_count(*symbol, *weight),
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        table
    }

    /// Length of the longest root to leaf path. A single leaf tree has depth 0.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => max_depth = max_depth.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((&**right, depth + 1));
                    stack.push((&**left, depth + 1));
                }
            }
        }
        max_depth
    }
}

/// Builds [HuffmanTree]s by greedily merging the two lightest nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    queue_capacity: QueueCapacity,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of nodes the priority queue may hold during construction
    pub fn with_queue_capacity(mut self, capacity: QueueCapacity) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn build(&self, text: &[u8]) -> Result<HuffmanTree, TreeBuildError> {
        if text.is_empty() {
            return Err(TreeBuildError::EmptyInput);
        }
        self.build_from_frequencies(&FrequencyTable::from_text(text))
    }

    pub fn build_from_frequencies(
        &self,
        frequencies: &FrequencyTable,
    ) -> Result<HuffmanTree, TreeBuildError> {
        if frequencies.is_empty() {
            return Err(TreeBuildError::EmptyInput);
        }
        // every internal weight is at most the total, so no merge can overflow after this
        if frequencies.total().is_none() {
            return Err(TreeBuildError::WeightOverflow);
        }

        let mut queue = PriorityQueue::with_capacity(self.queue_capacity);
        for (symbol, count) in frequencies.iter() {
            queue.add(Node::leaf(symbol, count))?;
        }
        vprintln!("Building huffman tree from {} leaves", queue.len());

        while queue.len() > 1 {
            let left = queue.poll()?;
            let right = queue.poll()?;
            queue.add(Node::merge(left, right))?;
        }

        let root = queue.poll()?;
        Ok(HuffmanTree { root })
    }
}

/// Build the Huffman tree for `text` with an unbounded priority queue.
pub fn build_huffman_tree(text: &[u8]) -> Result<HuffmanTree, TreeBuildError> {
    TreeBuilder::new().build(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(build_huffman_tree(b""), Err(TreeBuildError::EmptyInput));
        assert_eq!(
            TreeBuilder::new().build_from_frequencies(&FrequencyTable::new()),
            Err(TreeBuildError::EmptyInput)
        );
    }

    #[test]
    fn weight_overflow() {
        let mut frequencies = FrequencyTable::new();
        frequencies.set_count(b'a', usize::MAX - 1);
        frequencies.set_count(b'b', 1);
        let tree = TreeBuilder::new()
            .build_from_frequencies(&frequencies)
            .unwrap();
        assert_eq!(tree.weight(), usize::MAX);

        frequencies.set_count(b'c', 1);
        assert_eq!(
            TreeBuilder::new().build_from_frequencies(&frequencies),
            Err(TreeBuildError::WeightOverflow)
        );
    }

    #[test]
    fn single_symbol() {
        let tree = build_huffman_tree(b"aaaa").unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.root(), &Node::leaf(b'a', 4));
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn two_symbols() {
        let tree = build_huffman_tree(b"abb").unwrap();
        // the lighter node is polled first and goes to the left
        assert_eq!(tree.root(), &Node::merge(Node::leaf(b'a', 1), Node::leaf(b'b', 2)));
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn weights_add_up() {
        let text = b"abracadabra";
        let tree = build_huffman_tree(text).unwrap();
        assert_eq!(tree.weight(), text.len());
        assert_eq!(tree.frequencies(), FrequencyTable::from_text(text));

        let mut stack = vec![tree.root()];
        while let Some(node) = stack.pop() {
            if let Node::Internal {
                weight,
                left,
                right,
            } = node
            {
                assert_eq!(*weight, left.weight() + right.weight());
                stack.push(left);
                stack.push(right);
            }
        }
    }

    #[test]
    fn bounded_queue_too_small() {
        let builder = TreeBuilder::new().with_queue_capacity(QueueCapacity::Bounded(4));
        assert_eq!(
            builder.build(b"abcde"),
            Err(TreeBuildError::PriorityQueue(
                PriorityQueueError::CapacityExceeded { capacity: 4 }
            ))
        );
        // merging never needs more room than the leaves took
        assert!(builder.build(b"abcd").is_ok());
    }

    #[test]
    fn all_byte_values() {
        let data: alloc::vec::Vec<u8> = (0..=255).collect();
        let tree = build_huffman_tree(&data).unwrap();
        assert_eq!(tree.weight(), 256);
        // 256 equally likely symbols form a perfectly balanced tree
        assert_eq!(tree.depth(), 8);
    }
}
