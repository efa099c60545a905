use std::mem;

use super::{InvariantViolation, NotFound, TrieError};
use crate::collections::hash::HashTable;

/// A node in a [`Trie`](super::Trie). The path from the root to a node spells out a prefix, and
/// the node is terminating if that prefix is also a complete stored word.
#[derive(Debug, Default)]
pub struct TrieNode {
    pub(crate) children: HashTable<char, TrieNode>,
    pub(crate) terminating: bool,
}

impl TrieNode {
    /// Creates a node with no children that doesn't end a word.
    pub fn new() -> TrieNode {
        TrieNode::default()
    }

    /// Returns true if the path to this node spells a stored word.
    pub const fn is_terminating(&self) -> bool {
        self.terminating
    }

    /// Returns the child reached by following `character`, if there is one.
    pub fn child(&self, character: char) -> Option<&TrieNode> {
        self.children.get(&character)
    }

    /// Returns the number of distinct characters that can follow this node.
    pub const fn child_count(&self) -> usize {
        self.children.len()
    }

    /// A node can be deleted only when nothing depends on it: no word ends on it or anywhere
    /// below it. Below such a node there can only be a single unbranching chain.
    pub(crate) fn is_prunable(&self) -> bool {
        let mut node = self;
        loop {
            if node.terminating || node.children.len() > 1 {
                return false;
            }
            match node.children.values().next() {
                Some(child) => node = child,
                None => return true,
            }
        }
    }

    /// Deletes the child reached by `character`.
    ///
    /// # Errors
    /// Refuses with [`InvariantViolation`] if a word ends on the child or below it, as deleting it
    /// would lose stored words.
    pub(crate) fn remove_child(&mut self, character: char) -> Result<TrieNode, TrieError> {
        const MISSING: NotFound = NotFound { kind: "trie character" };

        if !self.children.get(&character).ok_or(MISSING)?.is_prunable() {
            return Err(InvariantViolation {
                reason: "a trie node leading to a stored word can't be deleted",
            }.into());
        }
        Ok(self.children.remove(&character).ok_or(MISSING)?)
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach each level of children before it's dropped, so long words don't recurse.
        let mut stack = vec![mem::take(&mut self.children)];
        while let Some(children) = stack.pop() {
            for (_, mut child) in children {
                if !child.children.is_empty() {
                    stack.push(mem::take(&mut child.children));
                }
            }
        }
    }
}
