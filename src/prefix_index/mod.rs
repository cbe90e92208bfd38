// Copyright (c) 2025 Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix index for autocomplete.
//!
//! The prefix index sits in front of a [`Trie`] and is the component callers
//! talk to. It validates input, splits raw text into words, and adds
//! depth-bounded enumeration on top of the trie's prefix enumeration.
//!
//! Noisy input is rejected softly: words of [`MIN_WORD_SIZE`] letters or
//! fewer, and anything the trie cannot store, are skipped by `add` and make
//! `contains`/`delete` return `false`. Only a negative depth and a bad
//! removal through an enumeration are reported as errors.
//!
//! # Example
//!
//! ```
//! use autocomplete_lib::prefix_index::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! assert_eq!(index.add(["key keys wall", "a bb"]), 3);
//!
//! let words: Vec<String> = index.words_with_prefix("ke").collect();
//! assert_eq!(words, vec!["key", "keys"]);
//!
//! // Only words of at most depth + 2 letters
//! let short: Vec<String> = index.words_with_prefix_depth("ke", 1).unwrap().collect();
//! assert_eq!(short, vec!["key"]);
//! ```

mod error;
mod matches;

use tracing::{debug, trace};

use crate::data_structures::rway_trie::{RWayTrie, Trie};

pub use error::{PrefixIndexError, PrefixIndexResult};
pub use matches::{DepthMatches, Matches};

/// Words must be longer than this; prefixes must be at least this long.
pub const MIN_WORD_SIZE: usize = 2;

/// Separator between words in strings passed to [`PrefixIndex::add`].
pub const WORDS_SEPARATOR: char = ' ';

/// Validating, tokenizing front end over a [`Trie`].
///
/// Each stored word carries its length as value.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex<S = RWayTrie<usize>> {
    trie: S,
}

impl PrefixIndex<RWayTrie<usize>> {
    /// Creates an empty index backed by an [`RWayTrie`].
    pub fn new() -> Self {
        Self::with_trie(RWayTrie::new())
    }
}

impl<S: Trie<usize>> PrefixIndex<S> {
    /// Creates an index over an existing trie.
    ///
    /// Words already in `trie` are served as they are, including ones the
    /// index itself would reject.
    pub fn with_trie(trie: S) -> Self {
        Self { trie }
    }

    /// Consumes the index and returns the underlying trie.
    pub fn into_inner(self) -> S {
        self.trie
    }

    /// Adds every valid word found in `strings`.
    ///
    /// Each string is split on single spaces and every piece is lowercased.
    /// Pieces longer than [`MIN_WORD_SIZE`] that the trie can store are
    /// inserted; everything else is skipped.
    ///
    /// # Returns
    ///
    /// The number of words inserted, re-inserted words included.
    pub fn add<I>(&mut self, strings: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut words_added = 0;
        for string in strings {
            for token in string.as_ref().split(WORDS_SEPARATOR) {
                let word = token.to_lowercase();
                if !is_word_valid(&word) {
                    continue;
                }
                let len = word.len();
                match self.trie.add(&word, len) {
                    Ok(_) => words_added += 1,
                    Err(e) => trace!(error = %e, "Skipping token"),
                }
            }
        }
        debug!(words_added, size = self.trie.size(), "Added words to index");
        words_added
    }

    /// Whether `word` is stored. Invalid words are never stored.
    pub fn contains(&self, word: &str) -> bool {
        is_word_valid(word) && self.trie.contains(word)
    }

    /// Deletes `word`. Returns `false` for invalid or absent words.
    pub fn delete(&mut self, word: &str) -> bool {
        is_word_valid(word) && self.trie.delete(word)
    }

    /// Number of stored words.
    pub fn size(&self) -> usize {
        self.trie.size()
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Enumerates every stored word.
    pub fn words(&mut self) -> Matches<S::Words<'_>> {
        Matches::new(self.trie.words())
    }

    /// Enumerates the stored words beginning with `prefix`.
    ///
    /// A prefix shorter than [`MIN_WORD_SIZE`] yields nothing.
    pub fn words_with_prefix(&mut self, prefix: &str) -> Matches<S::Words<'_>> {
        if !is_prefix_valid(prefix) {
            return Matches::empty();
        }
        Matches::new(self.trie.words_with_prefix(prefix))
    }

    /// Enumerates the stored words beginning with `prefix` that are at most
    /// `depth + MIN_WORD_SIZE` letters long.
    ///
    /// The bound does not depend on the length of `prefix`.
    ///
    /// # Returns
    ///
    /// * `Ok(DepthMatches)` - The matching words, none if `prefix` is too short.
    /// * `Err(PrefixIndexError::NegativeDepth)` - If `depth` is negative.
    pub fn words_with_prefix_depth(
        &mut self,
        prefix: &str,
        depth: i64,
    ) -> PrefixIndexResult<DepthMatches<S::Words<'_>>> {
        if depth < 0 {
            return Err(PrefixIndexError::NegativeDepth(depth));
        }
        let depth = usize::try_from(depth).unwrap_or(usize::MAX);
        if !is_prefix_valid(prefix) {
            return Ok(DepthMatches::empty());
        }
        Ok(DepthMatches::new(self.trie.words_with_prefix(prefix), depth))
    }
}

/// A word is valid if it is longer than [`MIN_WORD_SIZE`].
pub fn is_word_valid(word: &str) -> bool {
    word.len() > MIN_WORD_SIZE
}

/// A prefix is valid if it is at least [`MIN_WORD_SIZE`] long.
pub fn is_prefix_valid(prefix: &str) -> bool {
    prefix.len() >= MIN_WORD_SIZE
}
