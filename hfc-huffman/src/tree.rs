//! Huffman tree construction.
//!
//! The tree is an owned recursive enum: every internal node exclusively owns
//! its two children, so dropping the root releases the whole tree.
//!
//! Construction repeatedly merges the two lowest-weight nodes taken from a
//! [`MinQueue`]. Leaves are queued in ascending symbol order and every merged
//! node is queued after them, so equal weights resolve by queue order and the
//! same input always yields the same tree. The first node taken becomes the
//! left (`0`) child.

use crate::frequency::FrequencyTable;
use crate::queue::MinQueue;
use hfc_core::error::{HfcError, Result};

/// A node of a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its occurrence count.
    Leaf {
        /// Byte value.
        symbol: u8,
        /// Occurrence count.
        weight: u64,
    },
    /// Two merged subtrees.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached with a `0` bit.
        left: Box<Node>,
        /// Subtree reached with a `1` bit.
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf.
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        Self::Leaf { symbol, weight }
    }

    /// Merge two subtrees under a new internal node.
    pub fn merge(left: Node, right: Node) -> Self {
        Self::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    /// Check if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    fn count(&self, leaves: &mut usize, internals: &mut usize) {
        match self {
            Self::Leaf { .. } => *leaves += 1,
            Self::Internal { left, right, .. } => {
                *internals += 1;
                left.count(leaves, internals);
                right.count(leaves, internals);
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// A Huffman tree built from byte frequencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for `freq`.
    ///
    /// Fails with [`HfcError::EmptyInput`] when no symbol was counted.
    pub fn from_frequencies(freq: &FrequencyTable) -> Result<Self> {
        let mut queue = MinQueue::with_capacity(freq.distinct(), Node::weight);
        queue.extend(
            freq.iter()
                .map(|(symbol, weight)| Node::leaf(symbol, weight)),
        );

        while let Some(left) = queue.pop() {
            match queue.pop() {
                Some(right) => queue.push(Node::merge(left, right)),
                None => return Ok(Self { root: left }),
            }
        }

        Err(HfcError::EmptyInput)
    }

    /// Build the tree for the bytes of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::from_bytes(data))
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.counts().0
    }

    /// Number of internal nodes (always `leaf_count() - 1`).
    pub fn internal_count(&self) -> usize {
        self.counts().1
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    fn counts(&self) -> (usize, usize) {
        let (mut leaves, mut internals) = (0, 0);
        self.root.count(&mut leaves, &mut internals);
        (leaves, internals)
    }
}
