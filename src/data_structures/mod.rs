//! Data structures for the Ala Trie crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Single-owner trees with no shared or reference-counted nodes
//! - Iterative traversal so input length never bounds stack usage

pub mod ala_trie;

// Re-export common data structures
pub use ala_trie::{AlaTrie, DefaultHashBuilder};
