use std::iter::FusedIterator;

use super::{DoublyLinkedList, ListContents, ListState, NodeId};

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            list: self,
            state: self.state,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) list: &'a DoublyLinkedList<T>,
    // A copy of the list's bounds, shrunk from either end as items are yielded.
    pub(crate) state: ListState,
}

impl<'a, T> Iter<'a, T> {
    fn step(&mut self, next: impl FnOnce(&ListContents) -> (NodeId, ListContents)) -> Option<&'a T> {
        match self.state {
            ListState::Empty => None,
            ListState::Full(contents) if contents.len == 1 => {
                self.state = ListState::Empty;
                Some(&self.list.node(contents.head).value)
            },
            ListState::Full(contents) => {
                let (yielded, remaining) = next(&contents);
                self.state = ListState::Full(remaining);
                Some(&self.list.node(yielded).value)
            },
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        self.step(|contents| {
            let head = contents.head;
            // Not the last item, so the head has a successor.
            let next = list.node(head).next.unwrap_or(contents.tail);
            (head, ListContents { len: contents.len - 1, head: next, ..*contents })
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let list = self.list;
        self.step(|contents| {
            let tail = contents.tail;
            // Not the last item, so the tail has a predecessor.
            let prev = list.node(tail).prev.unwrap_or(contents.head);
            (tail, ListContents { len: contents.len - 1, tail: prev, ..*contents })
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        match self.state {
            ListState::Empty => 0,
            ListState::Full(ListContents { len, .. }) => len,
        }
    }
}
