//! Error types for the prefix index.

use crate::data_structures::rway_trie::TrieError;

/// Errors that can occur in prefix index queries.
///
/// Short or unrepresentable input is not an error: it is rejected by
/// returning `false`, `0` or an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixIndexError {
    /// Error when a depth-bounded query is given a negative depth.
    #[error("Depth must not be negative, got {0}")]
    NegativeDepth(i64),

    /// Error when removal through an enumeration is not possible.
    #[error("Invalid state: {0}")]
    InvalidState(#[from] TrieError),
}

/// Result type for prefix index operations.
pub type PrefixIndexResult<T> = Result<T, PrefixIndexError>;
