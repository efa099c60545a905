use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use tracing::warn;

use super::{Branch, Iter, Node, Seek};

/// An unbalanced binary search tree over values with a natural ordering.
///
/// Every value in a node's left subtree is less than or equal to the node's own value, and every
/// value in its right subtree is greater. Equal values are kept, always routing left.
///
/// # Removal
/// [`remove`](BinarySearchTree::remove) detaches the matching node *together with its subtree*
/// rather than splicing in a successor. Removing the root therefore empties the tree. Any
/// descendants lost this way are handed back inside the returned tree, so nothing is dropped
/// behind the caller's back.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `h`: The height of the tree, which is `n` in the worst case because nothing is rebalanced.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `get` | `O(h)` |
/// | `remove` | `O(h + k)`* |
/// | `remove_all` | `O(1)` |
///
/// \* Where `k` is the size of the detached subtree, which has to be counted.
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty BinarySearchTree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Drops the root, and with it every node in the tree.
    pub fn remove_all(&mut self) -> &mut Self {
        self.root = Branch(None);
        self.len = 0;
        self
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    fn from_root(root: Branch<T>) -> BinarySearchTree<T> {
        let mut tree = BinarySearchTree {
            root,
            len: 0,
        };
        tree.len = tree.iter().count();
        tree
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Attaches `value` at the empty slot found by descending from the root, left when `value` is
    /// less than or equal to a node and right otherwise.
    pub fn insert(&mut self, value: T) -> &mut Self {
        match self.root.seek_mut(&value, Seek::Vacant) {
            Some(slot) => *slot = Branch(Some(Box::new(Node::leaf(value)))),
            None => unreachable!("a descent for a vacant slot always ends at one"),
        }
        self.len += 1;
        self
    }

    /// Finds a node holding `value`.
    ///
    /// When duplicates are stacked directly down the left side of a match, the search carries on
    /// past them and returns the deepest one.
    pub fn get(&self, value: &T) -> Option<&Node<T>> {
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            curr = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => match node.left() {
                    Some(left) if left.value == *value => Some(left),
                    _ => return Some(node),
                },
            };
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Detaches the first node on the search path that holds `value` and returns it as the root
    /// of a new tree, along with everything below it. If the root matches, the whole tree is
    /// detached.
    ///
    /// Returns [`None`] if no node holds `value`.
    pub fn remove(&mut self, value: &T) -> Option<BinarySearchTree<T>> {
        let branch = self.root.seek_mut(value, Seek::Holding)?;
        let detached = BinarySearchTree::from_root(mem::take(branch));

        self.len -= detached.len;
        if detached.len > 1 {
            warn!(
                descendants = detached.len - 1,
                "removed a binary search tree node along with its descendants"
            );
        }
        Some(detached)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.root.height()
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.root)
    }
}
