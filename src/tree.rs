//! Huffman tree construction.
//!
//! Nodes live in a [`SlotMap`] arena and reference their children by
//! [`NodeKey`], so the tree is acyclic and owned in one place.

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::node::{Node, NodeKey};
use slotmap::SlotMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Index;

/// A node waiting in the merge queue.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct QueueEntry {
    weight: u64,
    /// Insertion sequence number, used to break weight ties
    seq: u64,
    key: NodeKey,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry: lighter, then earlier, wins.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An optimal prefix-code tree for one frequency table.
///
/// Built by repeatedly merging the two lightest nodes. Leaves are seeded in
/// ascending symbol order and equal weights are popped in insertion order,
/// so the same table always yields the same tree.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: SlotMap<NodeKey, Node>,
    root: NodeKey,
}

impl HuffmanTree {
    /// Builds the tree for `frequencies`.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::InvalidInput`] if the table is empty.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffmanError::InvalidInput);
        }

        let mut leaves: Vec<(char, u64)> = frequencies.iter().collect();
        leaves.sort_unstable_by_key(|&(symbol, _)| symbol);

        let mut nodes = SlotMap::with_capacity_and_key(2 * leaves.len() - 1);
        let mut queue = BinaryHeap::with_capacity(leaves.len());
        let mut seq = 0u64;

        for (symbol, weight) in leaves {
            let key = nodes.insert(Node::leaf(symbol, weight));
            queue.push(QueueEntry { weight, seq, key });
            seq += 1;
        }

        let mut merges = 0usize;
        while queue.len() > 1 {
            let (Some(left), Some(right)) = (queue.pop(), queue.pop()) else {
                break;
            };
            let weight = left.weight + right.weight;
            let key = nodes.insert(Node::internal(left.key, right.key, weight));
            queue.push(QueueEntry { weight, seq, key });
            seq += 1;
            merges += 1;
        }

        let root = queue.pop().ok_or(HuffmanError::InvalidInput)?.key;

        tracing::debug!(
            symbols = frequencies.len(),
            merges,
            total_weight = nodes[root].weight(),
            "built huffman tree"
        );

        Ok(Self { nodes, root })
    }

    /// Counts the characters of `text` and builds the tree for them.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::build(&FrequencyTable::from_text(text))
    }

    /// Key of the root node.
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Looks up a node by key.
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.values().filter(|node| node.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.len() - self.leaf_count()
    }

    /// Weight of the root, equal to the number of counted characters.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root].weight()
    }

    /// Returns every leaf as `(symbol, weight, depth)`, depth-first, left
    /// subtree before right.
    pub fn leaves(&self) -> Vec<(char, u64, usize)> {
        let mut leaves = Vec::new();
        let mut stack = vec![(self.root, 0usize)];

        while let Some((key, depth)) = stack.pop() {
            match self.nodes[key] {
                Node::Leaf { symbol, weight } => leaves.push((symbol, weight, depth)),
                Node::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }

        leaves
    }

    /// Number of bits needed to encode the counted text with this tree's code.
    ///
    /// A lone root leaf counts as depth 1, matching its one-bit code.
    pub fn encoded_bits(&self) -> u64 {
        self.leaves()
            .into_iter()
            .map(|(_, weight, depth)| weight * depth.max(1) as u64)
            .sum()
    }
}

impl Index<NodeKey> for HuffmanTree {
    type Output = Node;

    fn index(&self, key: NodeKey) -> &Node {
        &self.nodes[key]
    }
}
