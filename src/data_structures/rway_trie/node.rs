//! Node implementation for the R-way trie.
//!
//! Nodes live in an arena owned by the trie and refer to each other by index.
//! Child links express ownership; the parent link is a plain back-reference
//! used only to spell a node's word.

/// Number of child slots per node, one per lowercase ASCII letter.
pub const ALPHABET_SIZE: usize = 26;

/// Index of a node inside the trie's arena.
pub(crate) type NodeId = usize;

/// Arena index of the root node. The root is never released.
pub(crate) const ROOT: NodeId = 0;

/// Maps a lowercase ASCII letter to its child slot.
pub(crate) fn slot(byte: u8) -> Option<usize> {
    byte.is_ascii_lowercase().then(|| usize::from(byte - b'a'))
}

/// A node in the R-way trie.
///
/// Each node represents a letter on some word's path. A node carrying a value
/// is terminal and marks the end of a stored word; otherwise it only exists to
/// hold the path to its children.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode<T> {
    /// Letter this node stands for (unused on the root)
    pub label: u8,

    /// Back-reference to the parent, `None` on the root and on released slots
    pub parent: Option<NodeId>,

    /// Child slots indexed by `letter - b'a'`
    pub children: [Option<NodeId>; ALPHABET_SIZE],

    /// Value stored for the word ending here
    pub value: Option<T>,
}

impl<T> TrieNode<T> {
    /// Creates the root node.
    pub fn root() -> Self {
        Self {
            label: 0,
            parent: None,
            children: [None; ALPHABET_SIZE],
            value: None,
        }
    }

    /// Creates a structural node for `label` below `parent`.
    pub fn new(label: u8, parent: NodeId) -> Self {
        Self {
            label,
            parent: Some(parent),
            ..Self::root()
        }
    }

    /// Whether a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Child ids in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().flatten().copied()
    }

    /// A node with neither a value nor children can be pruned.
    pub fn is_prunable(&self) -> bool {
        !self.is_terminal() && !self.has_children()
    }
}
