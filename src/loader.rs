//! Vocabulary loading.
//!
//! Reads raw text and splits it into candidate words for the prefix index.
//! The text is lowercased, then cut at every run of characters outside
//! `a`-`z`. Length filtering is left to the index.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::AutocompleteResult;

/// Loads candidate words from text sources.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordsLoader;

impl WordsLoader {
    /// Creates a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Reads the file at `path` and returns its words.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The words in file order.
    /// * `Err(AutocompleteError::Io)` - If the file cannot be opened or read.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> AutocompleteResult<Vec<String>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let words = self.load_from_reader(BufReader::new(file))?;
        info!(path = %path.display(), words = words.len(), "Loaded words");
        Ok(words)
    }

    /// Reads `reader` line by line and returns its words.
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> AutocompleteResult<Vec<String>> {
        let mut words = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let before = words.len();
            words.extend(self.split_words(&line));
            debug!(line = number + 1, found = words.len() - before, "Split line");
        }
        Ok(words)
    }

    /// Splits `text` into lowercase words.
    pub fn split_words(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_ascii_lowercase())
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }
}
