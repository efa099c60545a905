use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

/// A value in a [`Tree`](super::Tree) together with its children, which it owns in insertion
/// order.
pub struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) children: Children<T>,
}

/// The owned children of a [`TreeNode`]. Dropping them tears the subtree down level by level
/// instead of recursing once per generation.
pub(crate) struct Children<T>(Vec<TreeNode<T>>);

impl<T> TreeNode<T> {
    /// Creates a node with no children.
    pub const fn new(value: T) -> TreeNode<T> {
        TreeNode {
            value,
            children: Children(Vec::new()),
        }
    }

    /// Returns a reference to the value held by this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the value held by this node.
    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns this node's children, oldest first.
    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    /// Appends `value` as the last child of this node.
    pub fn insert(&mut self, value: T) -> &mut Self {
        self.children.push(TreeNode::new(value));
        self
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns mutable access to this node's children, so that deeper levels can be grown.
    pub fn children_mut(&mut self) -> &mut [TreeNode<T>] {
        &mut self.children
    }

    /// Consumes the node, returning its value and dropping its children.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Deref for Children<T> {
    type Target = Vec<TreeNode<T>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Children<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Drop for Children<T> {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.0);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Nests each node's children inside it. This recurses once per level, so very deep trees
/// shouldn't be printed.
impl<T: Debug> Debug for TreeNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            write!(f, "{:?}", self.value)
        } else {
            f.debug_map().entry(&self.value, &self.children.as_slice()).finish()
        }
    }
}
