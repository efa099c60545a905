use derive_more::{Display, Error, From, IsVariant};

/// The value named by a lookup or removal doesn't exist in the collection.
///
/// Most collections report a missing value with [`None`] instead, because not finding something
/// is a normal outcome of a search. This error is reserved for operations that need the value to
/// exist before they can do anything at all, such as adding an edge between two vertices.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No {kind} matching the provided value was found!")]
pub struct NotFound {
    /// What kind of thing was being looked up, such as `"vertex"` or `"word"`.
    pub kind: &'static str,
}

/// An argument was rejected before any mutation took place.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Invalid argument: {reason}!")]
pub struct InvalidArgument {
    /// Why the argument was rejected.
    pub reason: &'static str,
}

/// A structural operation was refused because carrying it out would corrupt the collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Refusing to break collection invariant: {reason}!")]
pub struct InvariantViolation {
    /// Which invariant would have been broken.
    pub reason: &'static str,
}

/// Every way that a [`Trie`](crate::collections::trie::Trie) operation can fail.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// The word, or one of its characters, isn't stored.
    NotFound(NotFound),
    /// The word can't be stored, e.g. because it is empty.
    InvalidArgument(InvalidArgument),
    /// A node was about to be pruned while still in use.
    InvariantViolation(InvariantViolation),
}
