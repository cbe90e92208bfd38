// Copyright (c) 2025 Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! R-way Trie Implementation
//!
//! This module provides a trie over lowercase ASCII words with one child slot
//! per letter. It backs the autocomplete index: words are inserted with a
//! value, looked up exactly, deleted with pruning of the branch they leave
//! behind, and enumerated lazily by prefix.
//!
//! Nodes are stored in an arena and linked by index, so the parent
//! back-reference used to spell words never owns anything.
//!
//! # Example
//!
//! ```
//! use autocomplete_lib::data_structures::rway_trie::{RWayTrie, Trie, WordCursor};
//!
//! let mut trie = RWayTrie::new();
//! trie.add("key", 3).unwrap();
//! trie.add("keys", 4).unwrap();
//! trie.add("wall", 4).unwrap();
//!
//! let words: Vec<String> = trie.words_with_prefix("ke").collect();
//! assert_eq!(words, vec!["key", "keys"]);
//!
//! // Remove words while enumerating
//! let mut cursor = trie.words();
//! while let Some(word) = cursor.next() {
//!     if word.starts_with('w') {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(trie.size(), 2);
//! ```

mod cursor;
mod error;
mod node;

#[cfg(test)]
mod tests;

use tracing::debug;

pub use cursor::{WordCursor, WordsWithPrefix};
pub use error::{TrieError, TrieResult};
pub use node::ALPHABET_SIZE;
use node::{slot, NodeId, TrieNode, ROOT};

/// Prefix that selects the whole vocabulary.
pub const ROOT_WORD_PREFIX: &str = "";

/// Storage contract for the prefix index.
///
/// Implementations assume their caller already validated word length; they
/// only reject words they cannot represent.
pub trait Trie<T> {
    /// Cursor type produced by prefix enumeration.
    type Words<'a>: WordCursor
    where
        Self: 'a;

    /// Inserts `word` with `value`, replacing the value of an existing word.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if a new word was inserted, `false` if its value was replaced.
    /// * `Err(TrieError)` - If the word is empty or holds a character the trie cannot store.
    fn add(&mut self, word: &str, value: T) -> TrieResult<bool>;

    /// Number of stored words.
    fn size(&self) -> usize;

    /// Whether `word` is stored. Path-only nodes do not count.
    fn contains(&self, word: &str) -> bool;

    /// Deletes `word`, pruning nodes that no longer lead anywhere.
    ///
    /// Returns `true` if a word was actually deleted.
    fn delete(&mut self, word: &str) -> bool;

    /// Enumerates the whole vocabulary.
    fn words(&mut self) -> Self::Words<'_> {
        self.words_with_prefix(ROOT_WORD_PREFIX)
    }

    /// Enumerates every stored word that begins with `prefix`.
    ///
    /// A prefix with no node in the trie yields nothing.
    fn words_with_prefix(&mut self, prefix: &str) -> Self::Words<'_>;
}

/// Trie with one child slot per lowercase ASCII letter.
///
/// Key features:
/// * O(length) insert, lookup and delete
/// * O(1) size
/// * Breadth-first prefix enumeration, shortest words first
/// * Deletion through an active enumeration
#[derive(Debug, Clone)]
pub struct RWayTrie<T> {
    /// Node arena; slot `ROOT` holds the root
    nodes: Vec<TrieNode<T>>,

    /// Released arena slots available for reuse
    free: Vec<NodeId>,

    /// Number of terminal nodes
    size: usize,
}

impl<T> RWayTrie<T> {
    /// Creates a new empty `RWayTrie`.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            free: Vec::new(),
            size: 0,
        }
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Removes every word and releases all nodes.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[ROOT] = TrieNode::root();
        self.free.clear();
        self.size = 0;
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode<T> {
        &self.nodes[id]
    }

    /// Spells the word ending at `id` by walking parents up to the root.
    pub(crate) fn word_at(&self, id: NodeId) -> String {
        let mut letters = Vec::new();
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            letters.push(self.nodes[current].label);
            current = parent;
        }
        letters.iter().rev().map(|&b| char::from(b)).collect()
    }

    /// Follows `word` letter by letter from the root.
    fn find(&self, word: &str) -> Option<NodeId> {
        word.bytes().try_fold(ROOT, |node, b| self.nodes[node].children[slot(b)?])
    }

    fn allocate(&mut self, node: TrieNode<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.nodes[id] = TrieNode::root();
        self.free.push(id);
    }

    pub(crate) fn insert_word(&mut self, word: &str, value: T) -> TrieResult<bool> {
        if word.is_empty() {
            return Err(TrieError::EmptyKey);
        }

        // Reject before creating anything so a bad word leaves no nodes behind
        let slots = word
            .bytes()
            .map(slot)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| TrieError::InvalidCharacter {
                key: word.to_string(),
                ch: word
                    .chars()
                    .find(|c| !c.is_ascii_lowercase())
                    .unwrap_or_default(),
            })?;

        let mut node = ROOT;
        for (&label, slot) in word.as_bytes().iter().zip(slots) {
            node = match self.nodes[node].children[slot] {
                Some(child) => child,
                None => {
                    let child = self.allocate(TrieNode::new(label, node));
                    self.nodes[node].children[slot] = Some(child);
                    child
                }
            };
        }

        let is_new = self.nodes[node].value.replace(value).is_none();
        if is_new {
            self.size += 1;
        }
        Ok(is_new)
    }

    pub(crate) fn delete_word(&mut self, word: &str) -> bool {
        let Some(id) = self.find(word) else {
            return false;
        };
        if self.nodes[id].value.take().is_none() {
            return false;
        }
        self.size -= 1;

        // Walk upward releasing nodes that no longer lead to any word
        let mut current = id;
        let mut pruned = 0usize;
        while current != ROOT && self.nodes[current].is_prunable() {
            let Some(parent) = self.nodes[current].parent else {
                break;
            };
            if let Some(slot) = slot(self.nodes[current].label) {
                self.nodes[parent].children[slot] = None;
            }
            self.release(current);
            pruned += 1;
            current = parent;
        }

        debug!(word, pruned, "Deleted word from trie");
        true
    }
}

impl<T> Default for RWayTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Trie<T> for RWayTrie<T> {
    type Words<'a> = WordsWithPrefix<'a, T> where Self: 'a;

    fn add(&mut self, word: &str, value: T) -> TrieResult<bool> {
        self.insert_word(word, value)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn contains(&self, word: &str) -> bool {
        self.find(word)
            .is_some_and(|id| self.nodes[id].is_terminal())
    }

    fn delete(&mut self, word: &str) -> bool {
        self.delete_word(word)
    }

    fn words_with_prefix(&mut self, prefix: &str) -> Self::Words<'_> {
        let start = self.find(prefix);
        WordsWithPrefix::new(self, start)
    }
}
