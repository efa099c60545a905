use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

/// An owning, possibly empty, child slot.
pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

/// A single value in a [`BinarySearchTree`](super::BinarySearchTree), along with the subtrees to
/// either side of it.
pub struct Node<T> {
    pub(crate) left: Branch<T>,
    pub(crate) right: Branch<T>,
    pub(crate) value: T,
}

/// What a descent through the tree is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Seek {
    /// The empty slot where the value would be attached.
    Vacant,
    /// The first slot on the path whose node holds the value.
    Holding,
}

enum Step {
    Stop,
    Missing,
    Left,
    Right,
}

impl<T> Node<T> {
    pub(crate) const fn leaf(value: T) -> Node<T> {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }

    /// Returns a reference to the value held by this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the root of the left subtree, in which every value is less than or equal to this
    /// one.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns the root of the right subtree, in which every value is greater than this one.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }
}

impl<T: Ord> Branch<T> {
    /// Descends from this slot, going left for values less than or equal to each node and right
    /// otherwise, until the slot described by `seek` is reached.
    ///
    /// Returns [`None`] if the descent falls off the tree while looking for a held value.
    pub fn seek_mut(&mut self, value: &T, seek: Seek) -> Option<&mut Branch<T>> {
        let mut branch = self;
        loop {
            match branch.step(value, seek) {
                Step::Stop => return Some(branch),
                Step::Missing => return None,
                Step::Left => branch = &mut branch.0.as_mut()?.left,
                Step::Right => branch = &mut branch.0.as_mut()?.right,
            }
        }
    }

    fn step(&self, value: &T, seek: Seek) -> Step {
        match (&self.0, seek) {
            (None, Seek::Vacant) => Step::Stop,
            (None, Seek::Holding) => Step::Missing,
            (Some(node), Seek::Holding) if node.value == *value => Step::Stop,
            (Some(node), _) if *value <= node.value => Step::Left,
            (Some(_), _) => Step::Right,
        }
    }

}

impl<T> Branch<T> {
    /// Counts the nodes on the longest path down from this slot, walking with an explicit stack
    /// so that degenerate chains don't exhaust the call stack.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.0.as_deref().map(|node| (node, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }
}

impl<T> Drop for Branch<T> {
    fn drop(&mut self) {
        // Unlink every node before it's dropped, so that dropping never recurses.
        let mut stack: Vec<Box<Node<T>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

impl<T> Default for Branch<T> {
    fn default() -> Self {
        Branch(None)
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Option<Box<Node<T>>>> for Branch<T> {
    fn from(value: Option<Box<Node<T>>>) -> Self {
        Branch(value)
    }
}

/// Draws the subtree sideways, one level of indentation per level of depth. This recurses once per
/// level, so it is only suited to trees of a printable size.
impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
