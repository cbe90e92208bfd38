//! Word source configuration module.
//!
//! This module defines where the CLI reads the vocabulary from.

use std::path::PathBuf;

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default vocabulary file, relative to the working directory.
pub const DEFAULT_WORDS_PATH: &str = "resources/words-333333.txt";

/// Word source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the text file holding the vocabulary
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_WORDS_PATH),
        }
    }
}

impl Validate for SourceConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "source.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
