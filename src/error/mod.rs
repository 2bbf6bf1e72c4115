//! Error module for the Ala Trie crate.
//!
//! Trie operations themselves are total and never fail. The errors here
//! cover the surrounding configuration and logging setup.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the Ala Trie crate.
pub type AlaResult<T> = Result<T, AlaError>;

/// Core error enum for the Ala Trie crate.
#[derive(Error, Debug)]
pub enum AlaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors installing the tracing subscriber.
    #[error("Logging error: {0}")]
    Logging(String),

    /// Errors rendering configuration to text.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
