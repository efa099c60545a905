//! A generic, N-ary [`Tree`] searched breadth-first.

mod iter;
mod node;
mod tree;

pub use iter::*;
pub use node::*;
pub use tree::*;
