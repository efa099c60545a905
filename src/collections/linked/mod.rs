//! Linked collection types. [`SinglyLinkedList`] owns its nodes through boxed `next` links, while
//! [`DoublyLinkedList`] keeps its nodes in an arena so that the `prev` back-references can't
//! dangle.

pub mod doubly;
pub mod singly;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
