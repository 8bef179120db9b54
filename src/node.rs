use slotmap::new_key_type;

new_key_type! {
    /// Index of a node inside a [`HuffmanTree`](crate::HuffmanTree) arena.
    pub struct NodeKey;
}

/// A node of the Huffman tree.
///
/// Nodes are immutable once inserted into the arena. Children are referenced
/// by key, so the tree owns every node and no node owns another directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its frequency.
    Leaf { symbol: char, weight: u64 },

    /// The merge of two subtrees. `weight` is the sum of the children's weights.
    Internal {
        left: NodeKey,
        right: NodeKey,
        weight: u64,
    },
}

impl Node {
    pub(crate) fn leaf(symbol: char, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    pub(crate) fn internal(left: NodeKey, right: NodeKey, weight: u64) -> Self {
        Node::Internal {
            left,
            right,
            weight,
        }
    }

    /// Sum of the frequencies below this node.
    pub fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => weight,
        }
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match *self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// The `(left, right)` children of an internal node, `None` for leaves.
    pub fn children(&self) -> Option<(NodeKey, NodeKey)> {
        match *self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}
