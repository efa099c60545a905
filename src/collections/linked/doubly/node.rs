use super::DoublyLinkedList;

/// A stable handle to a slot in a [`DoublyLinkedList`]'s node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub usize);

pub(crate) struct Node<T> {
    pub value: T,
    /// The owning link towards the tail.
    pub next: Option<NodeId>,
    /// The back-reference towards the head, which owns nothing.
    pub prev: Option<NodeId>,
}

/// A borrowed view of one node in a [`DoublyLinkedList`], which can be used to walk the list in
/// either direction.
pub struct NodeRef<'a, T> {
    pub(crate) list: &'a DoublyLinkedList<T>,
    pub(crate) id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    /// Returns a reference to the value held by this node.
    pub fn value(&self) -> &'a T {
        &self.list.node(self.id).value
    }

    /// Returns the node after this one, or [`None`] if this is the tail.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.list.node(self.id).next.map(|id| NodeRef { list: self.list, id })
    }

    /// Returns the node before this one, or [`None`] if this is the head.
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        self.list.node(self.id).prev.map(|id| NodeRef { list: self.list, id })
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}
