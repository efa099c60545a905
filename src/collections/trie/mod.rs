//! A character [`Trie`] for storing words and answering prefix queries.

mod node;
mod trie;

pub use node::*;
pub use trie::*;
#[doc(inline)]
pub use crate::util::error::{InvalidArgument, InvariantViolation, NotFound, TrieError};
