//! Trie configuration module.
//!
//! Tuning knobs for [`AlaTrie`](crate::data_structures::AlaTrie). None of them
//! change which sequences are stored or found.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound for the per-node child map capacity hint.
pub const MAX_CHILD_CAPACITY: usize = 4096;

/// Configuration for the Ala Trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Initial capacity of every node's child map
    /// Zero defers allocation until the first child is inserted
    child_capacity: usize,
}

impl TrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - child_capacity: 0 (allocate lazily)
    pub fn new() -> Self {
        Self { child_capacity: 0 }
    }

    /// Set the initial capacity reserved in each node's child map.
    ///
    /// Useful for small alphabets where most nodes branch several ways.
    pub fn with_child_capacity(mut self, child_capacity: usize) -> Self {
        self.child_capacity = child_capacity;
        self
    }

    /// Get the initial child map capacity
    pub fn child_capacity(&self) -> usize {
        self.child_capacity
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.child_capacity > MAX_CHILD_CAPACITY {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.child_capacity".to_string(),
                message: format!("must be at most {MAX_CHILD_CAPACITY}"),
            });
        }

        Ok(())
    }
}
