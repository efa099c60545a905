//! A directed [`Graph`] stored as adjacency lists.

mod graph;
mod tests;
mod vertex;

pub use graph::*;
pub use vertex::*;
#[doc(inline)]
pub use crate::util::error::NotFound;
