//! Test modules for the Ala Trie crate.
//!
//! This module contains crate-level testing infrastructure:
//! - Scenario tests for the trie across value types
//! - Property-based tests against a `HashSet` reference model
//! - Configuration loading tests
//! - Shared proptest strategies

pub mod ala_trie_tests;
