//! A module containing [`HashTable`] and associated types.
//!
//! Other than the table itself, the included types provide owned and borrowed iteration over
//! entries, keys or values. There is no mutable iterator over keys because mutating the keys of a
//! HashTable in place would cause a logic error.

mod hash_table;
mod iter;

pub use hash_table::*;
pub use iter::*;
