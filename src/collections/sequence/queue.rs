use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::DoublyLinkedList;

/// A first-in-first-out container. Values are enqueued at the back of a [`DoublyLinkedList`] and
/// dequeued from its front, both in `O(1)`.
pub struct Queue<T> {
    pub(crate) inner: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            inner: DoublyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    pub fn enqueue(&mut self, value: T) -> &mut Self {
        self.inner.push_back(value);
        self
    }

    /// Removes and returns the value at the front of the Queue.
    pub fn dequeue(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Returns the value at the front of the Queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    pub fn remove_all(&mut self) -> &mut Self {
        self.inner.remove_all();
        self
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}
