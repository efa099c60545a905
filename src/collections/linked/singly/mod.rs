mod iter;
mod singly_linked_list;
mod tests;

pub use iter::*;
pub use singly_linked_list::*;
