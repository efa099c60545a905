use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, IterMut};

/// A list with links in one direction only, where each node owns the node after it.
///
/// New values are prepended, so the most recently inserted value is always at the head. Lookups
/// and removals walk from the head and act on the first (head-ward) match only.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` / `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `get` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `remove_all` | `O(1)`* |
///
/// \* The list is detached in constant time, dropping the nodes themselves takes `O(n)`.
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element of a [`SinglyLinkedList`], along with the link to the rest of the list.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Returns a reference to the value held by this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the node following this one, if there is one.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the first node of the list, if the list isn't empty.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Prepends `value` to the list, making it the new head.
    pub fn insert(&mut self, value: T) -> &mut Self {
        self.push_front(value);
        self
    }

    /// Add the provided element to the front of the SinglyLinkedList.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Detaches every node from the list, leaving it empty. Calling this on an empty list does
    /// nothing.
    pub fn remove_all(&mut self) -> &mut Self {
        // Dropping the old list releases the nodes iteratively rather than recursively.
        drop(SinglyLinkedList {
            head: self.head.take(),
            len: 0,
        });
        self.len = 0;
        self
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the first node, starting from the head, that holds a value equal to `value`.
    pub fn get(&self, value: &T) -> Option<&Node<T>> {
        let mut curr = self.head.as_deref();
        while let Some(node) = curr {
            if node.value == *value {
                return Some(node);
            }
            curr = node.next.as_deref();
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Unlinks the first node holding a value equal to `value` and returns that value. The
    /// predecessor (or the head, if the match is first) is spliced directly to the match's
    /// successor.
    ///
    /// Returns [`None`] if no node matches, including when the list is empty.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        // The link that owns the current node stands in for the trailing predecessor.
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.value != *value) {
            link = &mut link.as_mut()?.next;
        }

        let node = link.take()?;
        *link = node.next;
        self.len -= 1;
        Some(node.value)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    /// Builds a list in the same order as `iter`, which means that the values are not simply
    /// prepended one after another.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugEntries(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugEntries<'a, T>(&'a SinglyLinkedList<T>);

impl<T: Debug> Debug for DebugEntries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
