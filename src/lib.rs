//! Autocomplete Library
//!
//! This library contains the prefix-search index behind the autocomplete
//! command-line tool: an R-way trie storing lowercase words, the validating
//! prefix index in front of it, the vocabulary loader, and the configuration
//! and error plumbing used by the binary.
//!
//! # Architecture
//!
//! - [`data_structures::rway_trie`] owns all nodes and every structural change
//! - [`prefix_index`] validates input and filters the trie's enumerations
//! - [`loader`] turns raw text into candidate words
//! - [`config`] and [`error`] serve the binary

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod prefix_index;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

pub use data_structures::rway_trie::{RWayTrie, Trie, WordCursor};
pub use prefix_index::PrefixIndex;

/// Version information for the autocomplete library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
