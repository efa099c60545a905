//! Classic collection types, each implemented on its own.
//!
//! # Purpose
//! I wrote these types to learn each data structure's textbook operations, but also how the usual
//! pointer-linked designs translate into ownership: who owns a node, who only refers to it, and
//! what has to be cleaned up when it goes away.
//!
//! # Method
//! Every collection follows the same shape by convention (`insert`, `get`, `remove` and
//! `remove_all`, under whichever name suits it) rather than through a shared trait. Infallible
//! mutators return `&mut Self` so calls can be chained.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "graph")]
pub mod graph;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "sequence")]
pub mod sequence;
#[cfg(feature = "tree")]
pub mod tree;
#[cfg(feature = "trie")]
pub mod trie;
