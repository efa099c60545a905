use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::SinglyLinkedList;

/// A last-in-first-out container. Every operation is `O(1)`.
pub struct Stack<T> {
    pub(crate) inner: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack {
            inner: SinglyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Places `value` on top of the Stack.
    pub fn push(&mut self, value: T) -> &mut Self {
        self.inner.push_front(value);
        self
    }

    /// Removes and returns the value on top of the Stack.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Returns the value on top of the Stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.inner.front_mut()
    }

    pub fn remove_all(&mut self) -> &mut Self {
        self.inner.remove_all();
        self
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes each item in turn, so the last item yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}
