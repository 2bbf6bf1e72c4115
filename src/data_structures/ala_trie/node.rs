// Copyright (c) 2025 Ala Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Ala Trie.
//!
//! Each node owns its children outright. There is no sharing between
//! branches, so a node is reachable from the root by exactly one path of
//! values, and that path is the prefix the node represents.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

/// Outcome of walking a sequence into a node with [`TrieNode::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct AddStats {
    /// Number of values consumed from the sequence.
    pub depth: usize,

    /// Number of nodes allocated along the way.
    pub created: usize,
}

/// A node in the Ala Trie.
///
/// `is_terminal` is independent of `children`: a sequence can be complete
/// and still be a proper prefix of another inserted sequence.
pub(crate) struct TrieNode<V, S> {
    /// Map of values to exclusively owned child nodes
    pub children: HashMap<V, TrieNode<V, S>, S>,

    /// Whether the path to this node was added as a complete sequence
    pub is_terminal: bool,
}

impl<V, S> TrieNode<V, S>
where
    V: Hash + Eq,
    S: BuildHasher + Clone,
{
    /// Creates an empty, non-terminal node.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            children: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            is_terminal: false,
        }
    }

    /// Walks `sequence` down from this node, creating any missing children,
    /// and marks the node reached at the end as terminal.
    ///
    /// An empty sequence marks `self` terminal. Positions whose child already
    /// exists are followed without allocating.
    pub fn add<I>(&mut self, sequence: I, child_capacity: usize, hash_builder: &S) -> AddStats
    where
        I: IntoIterator<Item = V>,
    {
        let mut stats = AddStats::default();
        let mut node = self;

        for value in sequence {
            stats.depth += 1;
            node = match node.children.entry(value) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    stats.created += 1;
                    entry.insert(TrieNode::with_capacity_and_hasher(
                        child_capacity,
                        hash_builder.clone(),
                    ))
                }
            };
        }

        node.is_terminal = true;
        stats
    }

    /// Follows `sequence` down from this node and reports whether the node
    /// reached at the end is terminal.
    ///
    /// Stops at the first value with no matching child. An empty sequence
    /// reports whether `self` is terminal; callers decide what that means.
    pub fn search<'a, Q, I>(&self, sequence: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        Q: Hash + Eq + ?Sized + 'a,
        V: Borrow<Q>,
    {
        let mut node = self;

        for value in sequence {
            match node.children.get(value) {
                Some(child) => node = child,
                None => return false,
            }
        }

        node.is_terminal
    }
}

impl<V, S> Drop for TrieNode<V, S> {
    /// Tears the subtree down with an explicit stack so that dropping a node
    /// never recurses once per level.
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }

        let mut pending: Vec<TrieNode<V, S>> =
            self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
