use std::iter::FusedIterator;

use super::{Tree, TreeNode};
use crate::collections::sequence::Queue;

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            queue: self.root.iter().collect(),
        }
    }
}

/// A type for breadth-first iteration over a [`Tree`], yielding each level from left to right.
pub struct Iter<'a, T> {
    pub(crate) queue: Queue<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.dequeue()?;
        self.queue.extend(node.children.iter());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
