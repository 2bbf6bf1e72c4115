// Copyright (c) 2025 Ala Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ala Trie Implementation
//!
//! A prefix tree over sequences of arbitrary hashable values. Sequences that
//! share a prefix share the nodes for that prefix; suffixes are never shared.
//!
//! # Features
//!
//! - Generic over any `V: Hash + Eq` element type and any `BuildHasher`.
//! - Iterative insertion and lookup, so sequence length is bounded only by
//!   memory, never by call-stack depth.
//! - Single-owner node tree with no reference counting or locks.
//!
//! # Example
//!
//! ```
//! use ala_trie::data_structures::AlaTrie;
//!
//! let mut trie = AlaTrie::<&str>::new();
//! trie.add(["one", "two", "three"]);
//!
//! assert!(trie.search(&["one", "two", "three"]));
//! assert!(!trie.search(&["one", "two"]));
//! assert!(!trie.search(&["one", "five"]));
//! ```
//!
//! # Empty sequences
//!
//! Adding an empty sequence marks the root terminal, but searching for an
//! empty sequence always returns `false`. The two operations are
//! deliberately asymmetric here and callers relying on empty sequences
//! must track them separately.
//!
//! # Concurrency
//!
//! `AlaTrie` does no internal synchronization. `search` takes `&self` and
//! `add` takes `&mut self`, so sharing across threads goes through whatever
//! lock the caller wraps it in (typically a single `RwLock` around the whole
//! trie).

mod node;

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use fnv::FnvBuildHasher;
use tracing::{debug, trace};

use crate::config::TrieConfig;
use node::TrieNode;

/// Hasher used for child maps when none is supplied.
pub type DefaultHashBuilder = FnvBuildHasher;

/// Ala Trie stores complete sequences of values and answers exact
/// membership queries over them.
///
/// # Type Parameters
///
/// * `V` - The element type of stored sequences. Must implement `Hash` and `Eq`.
/// * `S` - The hasher used for every node's child map.
pub struct AlaTrie<V, S = DefaultHashBuilder> {
    /// The root node, created once and never replaced
    root: TrieNode<V, S>,

    /// Configuration options
    config: TrieConfig,

    /// Hasher cloned into every newly created node
    hash_builder: S,
}

impl<V> AlaTrie<V, DefaultHashBuilder>
where
    V: Hash + Eq,
{
    /// Creates a new empty `AlaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `AlaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: TrieConfig) -> Self {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<V, S> AlaTrie<V, S>
where
    V: Hash + Eq,
    S: BuildHasher + Clone,
{
    /// Creates a new empty `AlaTrie` whose child maps use `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_config_and_hasher(TrieConfig::default(), hash_builder)
    }

    /// Creates a new empty `AlaTrie` with the given configuration and hasher.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    /// * `hash_builder` - Hasher for every node's child map.
    pub fn with_config_and_hasher(config: TrieConfig, hash_builder: S) -> Self {
        debug!(
            child_capacity = config.child_capacity(),
            "Creating Ala trie"
        );

        Self {
            root: TrieNode::with_capacity_and_hasher(
                config.child_capacity(),
                hash_builder.clone(),
            ),
            config,
            hash_builder,
        }
    }

    /// Inserts a complete sequence into the trie.
    ///
    /// Missing nodes along the path are created; existing ones are reused
    /// without allocating. Adding the same sequence again leaves the trie
    /// unchanged. An empty sequence marks the root terminal, which has no
    /// effect on [`search`](Self::search).
    ///
    /// # Arguments
    ///
    /// * `sequence` - The values to insert, in order.
    pub fn add<I>(&mut self, sequence: I)
    where
        I: IntoIterator<Item = V>,
    {
        let stats = self
            .root
            .add(sequence, self.config.child_capacity(), &self.hash_builder);

        trace!(
            depth = stats.depth,
            created = stats.created,
            "Sequence added"
        );
    }

    /// Checks whether exactly this sequence was previously added.
    ///
    /// Proper prefixes and extensions of an added sequence do not match
    /// unless they were added themselves. The walk stops at the first value
    /// with no matching child.
    ///
    /// An empty sequence always returns `false`, even after adding an empty
    /// sequence.
    ///
    /// # Arguments
    ///
    /// * `sequence` - The values to look up, in order. Any borrowed form of
    ///   `V` works, e.g. `&str` for a trie of `String`.
    ///
    /// # Returns
    ///
    /// `true` if the sequence is non-empty and was added, `false` otherwise.
    pub fn search<'a, Q, I>(&self, sequence: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        Q: Hash + Eq + ?Sized + 'a,
        V: Borrow<Q>,
    {
        let mut values = sequence.into_iter().peekable();
        if values.peek().is_none() {
            return false;
        }

        self.root.search(values)
    }
}

impl<V, S> fmt::Debug for AlaTrie<V, S> {
    // Only the root is summarized; the node tree can be arbitrarily deep.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlaTrie")
            .field("config", &self.config)
            .field("root_children", &self.root.children.len())
            .field("root_terminal", &self.root.is_terminal)
            .finish_non_exhaustive()
    }
}

impl<V, S> Default for AlaTrie<V, S>
where
    V: Hash + Eq,
    S: BuildHasher + Clone + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<V, S, I> Extend<I> for AlaTrie<V, S>
where
    V: Hash + Eq,
    S: BuildHasher + Clone,
    I: IntoIterator<Item = V>,
{
    /// Adds every sequence yielded by `iter`.
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        for sequence in iter {
            self.add(sequence);
        }
    }
}

impl<V, S, I> FromIterator<I> for AlaTrie<V, S>
where
    V: Hash + Eq,
    S: BuildHasher + Clone + Default,
    I: IntoIterator<Item = V>,
{
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut trie = Self::default();
        trie.extend(iter);
        trie
    }
}
