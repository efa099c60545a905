use std::fmt::{self, Debug, Display, Formatter};

use derive_more::IsVariant;

use super::{Iter, Node, NodeId, NodeRef};

/// A list with links in both directions. Each node owns its `next` link and holds a non-owning
/// `prev` back-reference.
///
/// Nodes live in an arena and refer to each other through handles rather than pointers, so a
/// removed node can never leave a dangling reference behind. Slots released by a removal are
/// reused by later insertions.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `insert` / `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `remove_all` | `O(1)`** |
///
/// \* Amortized, the arena may need to grow.
///
/// \** Not counting the time taken to drop the values.
pub struct DoublyLinkedList<T> {
    pub(crate) nodes: Vec<Option<Node<T>>>,
    pub(crate) free: Vec<NodeId>,
    pub(crate) state: ListState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListContents {
    pub len: usize,
    pub head: NodeId,
    pub tail: NodeId,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            nodes: Vec::new(),
            free: Vec::new(),
            state: Empty,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len,
        }
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the first node of the list, if the list isn't empty.
    pub const fn head(&self) -> Option<NodeRef<'_, T>> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(NodeRef { list: self, id: head }),
        }
    }

    /// Returns the last node of the list, if the list isn't empty.
    pub const fn tail(&self) -> Option<NodeRef<'_, T>> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(NodeRef { list: self, id: tail }),
        }
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head().map(|node| node.value())
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail().map(|node| node.value())
    }

    /// Prepends `value` to the list, making it the new head.
    pub fn insert(&mut self, value: T) -> &mut Self {
        self.push_front(value);
        self
    }

    /// Add the provided element to the front of the DoublyLinkedList.
    pub fn push_front(&mut self, value: T) {
        match self.state {
            Empty => self.push_only(value),
            Full(ListContents { len, head, tail }) => {
                let node = self.alloc(Node {
                    value,
                    next: Some(head),
                    prev: None,
                });
                self.node_mut(head).prev = Some(node);
                self.state = Full(ListContents { len: len + 1, head: node, tail });
            },
        }
    }

    /// Add the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        match self.state {
            Empty => self.push_only(value),
            Full(ListContents { len, head, tail }) => {
                let node = self.alloc(Node {
                    value,
                    next: None,
                    prev: Some(tail),
                });
                self.node_mut(tail).next = Some(node);
                self.state = Full(ListContents { len: len + 1, head, tail: node });
            },
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(self.unlink(head)),
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(self.unlink(tail)),
        }
    }

    /// Releases every node in the list, leaving it empty. Calling this on an empty list does
    /// nothing.
    pub fn remove_all(&mut self) -> &mut Self {
        self.nodes.clear();
        self.free.clear();
        self.state = Empty;
        self
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    fn push_only(&mut self, value: T) {
        let node = self.alloc(Node {
            value,
            next: None,
            prev: None,
        });
        self.state = Full(ListContents { len: 1, head: node, tail: node });
    }

    /// Detaches the node at `id`, repairing the links of its neighbours, and returns its value.
    fn unlink(&mut self, id: NodeId) -> T {
        let node = self.release(id);

        self.state = match (self.state, node.prev, node.next) {
            (Empty, _, _) | (Full(_), None, None) => Empty,
            // Removing the head, its successor becomes the new head.
            (Full(ListContents { len, tail, .. }), None, Some(next)) => {
                self.node_mut(next).prev = None;
                Full(ListContents { len: len - 1, head: next, tail })
            },
            // Removing the tail, its predecessor becomes the new tail.
            (Full(ListContents { len, head, .. }), Some(prev), None) => {
                self.node_mut(prev).next = None;
                Full(ListContents { len: len - 1, head, tail: prev })
            },
            (Full(contents), Some(prev), Some(next)) => {
                self.node_mut(prev).next = Some(next);
                self.node_mut(next).prev = Some(prev);
                Full(ListContents { len: contents.len - 1, ..contents })
            },
        };

        node.value
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = Some(node);
                id
            },
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            },
        }
    }

    fn release(&mut self, id: NodeId) -> Node<T> {
        let Some(node) = self.nodes[id.0].take() else {
            unreachable!("list handles always refer to occupied slots")
        };
        self.free.push(id);
        node
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        match &self.nodes[id.0] {
            Some(node) => node,
            None => unreachable!("list handles always refer to occupied slots"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.nodes[id.0] {
            Some(node) => node,
            None => unreachable!("list handles always refer to occupied slots"),
        }
    }

    /// Walks forward from the head and backward from the tail, checking that both directions
    /// agree about every link.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => assert!(self.nodes.iter().all(Option::is_none)),
            Full(ListContents { len, head, tail }) => {
                assert_eq!(self.node(head).prev, None, "Head shouldn't have a predecessor.");

                let mut curr = head;
                let mut count = 1;
                while let Some(next) = self.node(curr).next {
                    assert_eq!(self.node(next).prev, Some(curr));
                    curr = next;
                    count += 1;
                }
                assert_eq!(tail, curr, "Walking forward should end at the tail.");
                assert_eq!(len, count, "Length should match the number of linked nodes.");

                let forward = self.iter().map(|v| v as *const T).collect::<Vec<_>>();
                let mut backward = self.iter().rev().map(|v| v as *const T).collect::<Vec<_>>();
                backward.reverse();
                assert_eq!(forward, backward);
            },
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns the first node, starting from the head, that holds a value equal to `value`.
    pub fn get(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.find(value).map(|id| NodeRef { list: self, id })
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Unlinks the first node holding a value equal to `value` and returns that value.
    ///
    /// Returns [`None`] if no node matches, including when the list is empty.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let id = self.find(value)?;
        Some(self.unlink(id))
    }

    fn find(&self, value: &T) -> Option<NodeId> {
        let mut curr = match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head),
        };
        while let Some(id) = curr {
            let node = self.node(id);
            if node.value == *value {
                return Some(id);
            }
            curr = node.next;
        }
        None
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugEntries(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugEntries<'a, T>(&'a DoublyLinkedList<T>);

impl<T: Debug> Debug for DebugEntries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") <-> (")
        )
    }
}
