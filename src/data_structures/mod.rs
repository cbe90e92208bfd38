//! Data structures for the autocomplete index.
//!
//! This module contains the storage structures the prefix index is built on.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - No panics on caller input
//! - Lazy enumeration without eager collection

pub mod rway_trie;

// Re-export common data structures
pub use rway_trie::{RWayTrie, Trie, TrieError, TrieResult, WordCursor};
