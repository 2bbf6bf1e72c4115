//! Ala Trie Library
//!
//! A prefix tree over sequences of arbitrary hashable values, supporting
//! insertion of complete sequences and exact membership lookup.
//!
//! # Architecture
//!
//! - [`data_structures::AlaTrie`] is the whole of the core: a handle owning
//!   a single root node, delegating to per-node iterative walks.
//! - [`config`] loads tuning and logging settings from files and environment.
//! - [`logging`] installs a `tracing` subscriber for embedding applications.
//! - [`error`] holds the error types for configuration and logging setup.
//!   Trie operations themselves never fail.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::AlaTrie;

/// Version information for the Ala Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
