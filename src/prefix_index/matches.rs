//! Enumerations returned by [`PrefixIndex`](super::PrefixIndex) queries.

use crate::data_structures::rway_trie::{TrieError, WordCursor};

use super::{PrefixIndexResult, MIN_WORD_SIZE};

/// Words matching a prefix, or nothing if the prefix was rejected.
#[derive(Debug)]
pub struct Matches<C> {
    inner: Option<C>,
}

impl<C: WordCursor> Matches<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self { inner: Some(inner) }
    }

    pub(crate) fn empty() -> Self {
        Self { inner: None }
    }

    /// Returns `true` if another word will be produced.
    pub fn has_next(&mut self) -> bool {
        self.inner.as_mut().is_some_and(|cursor| cursor.has_next())
    }

    /// Deletes the word most recently produced.
    ///
    /// Fails with [`PrefixIndexError::InvalidState`](super::PrefixIndexError::InvalidState)
    /// if no word was produced, it was already removed, or it is no longer stored.
    pub fn remove(&mut self) -> PrefixIndexResult<()> {
        let inner = self.inner.as_mut().ok_or(TrieError::NothingToRemove)?;
        Ok(inner.remove()?)
    }
}

impl<C: WordCursor> Iterator for Matches<C> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.as_mut()?.next()
    }
}

/// Words matching a prefix whose length stays within `depth + MIN_WORD_SIZE`.
///
/// One qualifying word is kept ready ahead of the consumer so that
/// [`has_next`](Self::has_next) never advances the enumeration. The underlying
/// cursor produces words shortest first, so the first word over the bound
/// ends the enumeration.
#[derive(Debug)]
pub struct DepthMatches<C> {
    inner: Option<C>,
    max_len: usize,
    lookahead: Option<String>,
    current: Option<String>,
    exhausted: bool,
}

impl<C: WordCursor> DepthMatches<C> {
    pub(crate) fn new(inner: C, depth: usize) -> Self {
        let mut matches = Self {
            inner: Some(inner),
            max_len: depth.saturating_add(MIN_WORD_SIZE),
            lookahead: None,
            current: None,
            exhausted: false,
        };
        matches.prefetch();
        matches
    }

    pub(crate) fn empty() -> Self {
        Self {
            inner: None,
            max_len: 0,
            lookahead: None,
            current: None,
            exhausted: true,
        }
    }

    fn prefetch(&mut self) {
        if self.exhausted {
            return;
        }
        match self.inner.as_mut().and_then(|cursor| cursor.next()) {
            Some(word) if word.len() <= self.max_len => self.lookahead = Some(word),
            _ => self.exhausted = true,
        }
    }

    /// Returns `true` if another word will be produced.
    pub fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Deletes the word most recently produced.
    ///
    /// Fails with [`PrefixIndexError::InvalidState`](super::PrefixIndexError::InvalidState)
    /// if no word was produced, it was already removed, or it is no longer stored.
    pub fn remove(&mut self) -> PrefixIndexResult<()> {
        let word = self.current.take().ok_or(TrieError::NothingToRemove)?;
        let inner = self.inner.as_mut().ok_or(TrieError::NothingToRemove)?;
        if inner.delete(&word) {
            Ok(())
        } else {
            Err(TrieError::NotFound(word).into())
        }
    }
}

impl<C: WordCursor> Iterator for DepthMatches<C> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let word = self.lookahead.take()?;
        self.prefetch();
        self.current = Some(word.clone());
        Some(word)
    }
}
