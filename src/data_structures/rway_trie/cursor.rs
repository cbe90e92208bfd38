//! Lazy, removal-capable enumeration over an [`RWayTrie`].
//!
//! A cursor keeps its own breadth-first frontier of pending node ids. It holds
//! the trie's exclusive borrow, so the only mutation possible while it is alive
//! goes through [`WordCursor::remove`] or [`WordCursor::delete`].
//!
//! Deleting words never invalidates the frontier: nodes released by pruning
//! are childless and payload-less, and ancestors of pending nodes keep a child
//! and therefore survive. A released slot that is still queued is reset and
//! simply yields nothing when reached.

use std::collections::VecDeque;

use super::node::NodeId;
use super::{RWayTrie, TrieError, TrieResult};

/// Enumeration protocol shared by trie cursors and the adapters built on them.
pub trait WordCursor: Iterator<Item = String> {
    /// Returns `true` if another word will be produced.
    ///
    /// Pending structural nodes may be expanded, but no word is consumed.
    fn has_next(&mut self) -> bool;

    /// Deletes the word most recently produced by this cursor.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The word was deleted from the backing store.
    /// * `Err(TrieError::NothingToRemove)` - No word was produced yet, or it was already removed.
    /// * `Err(TrieError::NotFound)` - The store no longer holds the word.
    fn remove(&mut self) -> TrieResult<()>;

    /// Deletes `word` from the backing store without disturbing the traversal.
    fn delete(&mut self, word: &str) -> bool;
}

/// Breadth-first frontier of node ids still to be visited.
#[derive(Debug, Default)]
struct Frontier {
    queue: VecDeque<NodeId>,
}

impl Frontier {
    fn starting_at(start: Option<NodeId>) -> Self {
        Self {
            queue: start.into_iter().collect(),
        }
    }

    /// Expands structural nodes at the front of the queue until a terminal
    /// node is at the front, and returns it without popping.
    fn seek<T>(&mut self, trie: &RWayTrie<T>) -> Option<NodeId> {
        while let Some(&id) = self.queue.front() {
            let node = trie.node(id);
            if node.is_terminal() {
                return Some(id);
            }
            self.queue.pop_front();
            self.queue.extend(node.children());
        }
        None
    }

    fn advance<T>(&mut self, trie: &RWayTrie<T>) -> Option<String> {
        let id = self.seek(trie)?;
        self.queue.pop_front();
        self.queue.extend(trie.node(id).children());
        Some(trie.word_at(id))
    }
}

/// Cursor over every stored word beginning with a given prefix.
///
/// Words are produced shortest first, alphabetically within one length.
/// Created by [`Trie::words_with_prefix`](super::Trie::words_with_prefix).
#[derive(Debug)]
pub struct WordsWithPrefix<'a, T> {
    trie: &'a mut RWayTrie<T>,
    frontier: Frontier,
    last: Option<String>,
}

impl<'a, T> WordsWithPrefix<'a, T> {
    pub(crate) fn new(trie: &'a mut RWayTrie<T>, start: Option<NodeId>) -> Self {
        Self {
            trie,
            frontier: Frontier::starting_at(start),
            last: None,
        }
    }
}

impl<T> Iterator for WordsWithPrefix<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let word = self.frontier.advance(&*self.trie)?;
        self.last = Some(word.clone());
        Some(word)
    }
}

impl<T> WordCursor for WordsWithPrefix<'_, T> {
    fn has_next(&mut self) -> bool {
        self.frontier.seek(&*self.trie).is_some()
    }

    fn remove(&mut self) -> TrieResult<()> {
        let word = self.last.take().ok_or(TrieError::NothingToRemove)?;
        if self.trie.delete_word(&word) {
            Ok(())
        } else {
            Err(TrieError::NotFound(word))
        }
    }

    fn delete(&mut self, word: &str) -> bool {
        self.trie.delete_word(word)
    }
}
