use std::iter::FusedIterator;

use super::{BinarySearchTree, Node};

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

/// A type for in-order iteration over a [`BinarySearchTree`], yielding values in ascending order.
pub struct Iter<'a, T> {
    // Nodes whose left subtree has been visited but which haven't been yielded yet.
    pub(crate) stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
