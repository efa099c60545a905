use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use super::{Iter, TreeNode};
use crate::collections::sequence::Queue;

/// A tree where each node may have any number of ordered children.
///
/// Inserting through the tree itself only ever adds to the root's children. Deeper structure is
/// built by inserting through a node, for example `tree.get_mut(&x)?.insert(y)`.
///
/// Lookups are breadth-first with children visited in insertion order, so the shallowest match is
/// found first and, among matches at the same depth, the leftmost.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes in the Tree.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(1)`* |
/// | `get` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `remove_all` | `O(1)` |
///
/// \* Amortized, the root's children may need to be reallocated.
pub struct Tree<T> {
    pub(crate) root: Option<TreeNode<T>>,
}

impl<T> Tree<T> {
    /// Creates a new, empty Tree.
    pub const fn new() -> Tree<T> {
        Tree {
            root: None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub const fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut TreeNode<T>> {
        self.root.as_mut()
    }

    /// Makes `value` the root if the tree is empty, otherwise appends it as the root's last child.
    pub fn insert(&mut self, value: T) -> &mut Self {
        match &mut self.root {
            Some(root) => {
                root.insert(value);
            },
            None => self.root = Some(TreeNode::new(value)),
        }
        self
    }

    /// Drops the root, and with it every node in the tree.
    pub fn remove_all(&mut self) -> &mut Self {
        self.root = None;
        self
    }

    /// Returns an iterator over the values in breadth-first order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the number of levels in the tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&TreeNode<T>> = self.root.iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level.into_iter().flat_map(|node| node.children.iter()).collect();
        }
        height
    }
}

impl<T: PartialEq> Tree<T> {
    /// Returns the first node holding `value`, searching breadth-first from the root.
    pub fn get(&self, value: &T) -> Option<&TreeNode<T>> {
        let mut queue = Queue::new();
        queue.enqueue(self.root.as_ref()?);

        while let Some(node) = queue.dequeue() {
            if node.value == *value {
                return Some(node);
            }
            queue.extend(node.children.iter());
        }
        None
    }

    /// Returns the first node holding `value` mutably, so that children can be added below it.
    pub fn get_mut(&mut self, value: &T) -> Option<&mut TreeNode<T>> {
        let mut queue = Queue::new();
        queue.enqueue(self.root.as_mut()?);

        while let Some(node) = queue.dequeue() {
            if node.value == *value {
                return Some(node);
            }
            queue.extend(node.children.iter_mut());
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Removes the first node holding `value`, along with all of its descendants, and returns it.
    ///
    /// If the root matches, the whole tree is removed. Otherwise, the search visits nodes
    /// breadth-first and checks each node's children for a match, so that the matching child can
    /// be spliced out of its parent.
    pub fn remove(&mut self, value: &T) -> Option<TreeNode<T>> {
        let root = self.root.as_mut()?;
        if root.value == *value {
            debug!("removed the root of a tree, leaving it empty");
            return self.root.take();
        }

        let mut queue = Queue::new();
        queue.enqueue(root);

        while let Some(parent) = queue.dequeue() {
            if let Some(index) = parent.children.iter().position(|child| child.value == *value) {
                return Some(parent.children.remove(index));
            }
            queue.extend(parent.children.iter_mut());
        }
        None
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Tree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "Tree({root:?})"),
            None => write!(f, "Tree(-)"),
        }
    }
}
