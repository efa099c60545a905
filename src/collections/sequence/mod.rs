//! Sequence containers with push/pop/peek semantics: a LIFO [`Stack`] and a FIFO [`Queue`].
//!
//! Both are thin adapters over the linked lists, which already provide `O(1)` operations at the
//! ends that each container needs.

mod queue;
mod stack;
mod tests;

pub use queue::*;
pub use stack::*;
