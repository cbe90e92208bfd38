//! Query configuration module.
//!
//! This module defines the prefix and depth the CLI queries when none are
//! given on the command line.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::prefix_index::{is_prefix_valid, MIN_WORD_SIZE};
use serde::{Deserialize, Serialize};

/// Default query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Prefix to complete
    pub prefix: String,

    /// Maximum word length above the minimum word size
    pub depth: i64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            prefix: "the".to_string(),
            depth: 4,
        }
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !is_prefix_valid(&self.prefix) {
            return Err(ConfigError::ValidationError(format!(
                "query.prefix must be at least {MIN_WORD_SIZE} characters, got '{}'",
                self.prefix
            )));
        }

        if !self.prefix.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ConfigError::ValidationError(format!(
                "query.prefix must hold only lowercase letters, got '{}'",
                self.prefix
            )));
        }

        if self.depth < 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "query.depth".to_string(),
                message: format!("must not be negative, got {}", self.depth),
            });
        }

        Ok(())
    }
}
