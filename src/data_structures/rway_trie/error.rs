//! Error types for the R-way trie.
//!
//! This module defines the error types that can occur during trie operations
//! and while removing words through an enumeration cursor.

/// Errors that can occur in R-way trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key holds a character outside `a`-`z`.
    #[error("Key '{key}' contains unsupported character '{ch}'")]
    InvalidCharacter {
        /// The rejected key.
        key: String,
        /// The first character that has no slot in the alphabet.
        ch: char,
    },

    /// Error when a cursor is asked to remove before producing a word,
    /// or after its last word was already removed.
    #[error("No produced word to remove")]
    NothingToRemove,

    /// Error when the word to remove is no longer stored.
    #[error("Word not found: {0}")]
    NotFound(String),
}

/// Result type for R-way trie operations.
pub type TrieResult<T> = Result<T, TrieError>;
