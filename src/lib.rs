//! This crate is a collection of classic abstract data types, each written from scratch to show
//! its textbook operations and their costs.
//!
//! # Purpose
//! This crate is a learning exercise with no expectation of being used in production. Each data
//! structure stands alone. The only sharing is that the [`Tree`](collections::tree::Tree) and
//! [`Graph`](collections::graph::Graph) traversals run on this crate's own
//! [`Queue`](collections::sequence::Queue) and [`HashTable`](collections::hash::HashTable).
//!
//! # Method
//! Structures that are linked together by references in a garbage-collected language need a
//! different shape in Rust. Links that own their target (`next`, children, `left`/`right`) are
//! boxes or vectors. Links that don't (a doubly linked list's `prev`, a graph's edges) are handles
//! or values resolved by lookup. Removing a node can then never leave a dangling reference behind.
//!
//! The binary search tree is unbalanced and removes whole subtrees. Both are deliberate and are
//! documented on [`BinarySearchTree`](collections::binary_tree::BinarySearchTree).
//!
//! # Error Handling
//! Failing to find something is usually a normal outcome of a search, so lookups and removals
//! return [`Option`]s. [`Result`]s are reserved for operations that can't proceed at all: adding
//! an edge to a vertex that doesn't exist, or removing a word that was never stored. Those errors
//! are strongly typed structs implementing [`Error`](std::error::Error), grouped into enums for
//! static dispatch where an operation can fail in more than one way.
//!
//! # Logging
//! Notable structural events, such as rehashing, pruning or detaching a subtree, are reported
//! through [`tracing`]. Installing a subscriber is left to the application.
//!
//! # Features
//! Each collection sits behind a feature of the same name (`binary-tree`, `graph`, `hash`, `heap`,
//! `linked`, `sequence`, `tree`, `trie`). All of them are enabled by the default
//! `collections-all` feature.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![forbid(unsafe_code)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
