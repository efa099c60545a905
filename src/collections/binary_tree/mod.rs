//! An unbalanced [`BinarySearchTree`] and its node type.

mod binary_search_tree;
mod iter;
mod node;
mod tests;

pub use binary_search_tree::*;
pub use iter::*;
pub use node::Node;
pub(crate) use node::{Branch, Seek};
