/// A vertex in a [`Graph`](super::Graph) and its outgoing edges.
///
/// Edges don't own the vertices they point to. Each one holds the destination's value, which is
/// resolved against the graph when the edge is followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
    pub(crate) value: T,
    pub(crate) adjacent: Vec<T>,
}

impl<T> Vertex<T> {
    pub(crate) const fn new(value: T) -> Vertex<T> {
        Vertex {
            value,
            adjacent: Vec::new(),
        }
    }

    /// Returns a reference to the value identifying this vertex.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the values of the vertices this one has edges to, in the order the edges were
    /// added. Parallel edges appear more than once.
    pub fn adjacent(&self) -> &[T] {
        &self.adjacent
    }

    pub fn out_degree(&self) -> usize {
        self.adjacent.len()
    }
}
