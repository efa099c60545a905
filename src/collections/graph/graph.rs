use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::slice;

use tracing::debug;

use super::{NotFound, Vertex};
use crate::collections::hash::HashTable;
use crate::collections::sequence::Queue;

const SOURCE: NotFound = NotFound { kind: "source vertex" };
const DESTINATION: NotFound = NotFound { kind: "destination vertex" };

/// A directed graph, where every vertex keeps a list of the vertices it has edges to.
///
/// Vertex values act as identifiers: every lookup resolves to the *first* vertex holding a value.
/// Adding two vertices with the same value is allowed, but the later one can't be reached by
/// value. Parallel edges are allowed and aren't deduplicated.
///
/// Cycles are allowed. Traversals keep track of the vertices they have visited, so they always
/// terminate.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `v`: The number of vertices in the Graph.
/// - `e`: The number of edges in the Graph.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_vertex` | `O(1)`* |
/// | `add_edge` | `O(v)` |
/// | `get` | `O(v)` |
/// | `has_path_dfs/bfs` | `O(v * (v + e))`** |
/// | `remove_vertex` | `O(v + e)` |
/// | `remove_edge` | `O(v + e)` |
/// | `remove_all` | `O(1)` |
///
/// \* Amortized.
///
/// \** Each edge followed looks its destination up by value.
pub struct Graph<T> {
    pub(crate) vertices: Vec<Vertex<T>>,
}

impl<T> Graph<T> {
    /// Creates a new Graph with no vertices.
    pub const fn new() -> Graph<T> {
        Graph {
            vertices: Vec::new(),
        }
    }

    /// Returns the number of vertices in the Graph.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the total number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    /// Returns an iterator over the vertices in the order they were added.
    pub fn vertices(&self) -> slice::Iter<'_, Vertex<T>> {
        self.vertices.iter()
    }

    /// Adds a new vertex holding `value`, without checking for an existing one.
    pub fn add_vertex(&mut self, value: T) -> &mut Self {
        self.vertices.push(Vertex::new(value));
        self
    }

    /// Removes every vertex, and with them every edge.
    pub fn remove_all(&mut self) -> &mut Self {
        self.vertices.clear();
        self
    }
}

impl<T: PartialEq> Graph<T> {
    /// Returns the first vertex holding `value`.
    pub fn get(&self, value: &T) -> Option<&Vertex<T>> {
        self.vertices.iter().find(|vertex| vertex.value == *value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Removes the first vertex holding `value`, then removes every edge leading to `value` from
    /// the vertices that remain.
    ///
    /// Returns the removed vertex, or [`None`] if no vertex holds `value`.
    pub fn remove_vertex(&mut self, value: &T) -> Option<Vertex<T>> {
        let index = self.vertices.iter().position(|vertex| vertex.value == *value)?;
        let removed = self.vertices.remove(index);

        let mut scrubbed = 0;
        for vertex in self.vertices.iter_mut() {
            let before = vertex.adjacent.len();
            vertex.adjacent.retain(|adjacent| adjacent != value);
            scrubbed += before - vertex.adjacent.len();
        }
        debug!(
            outgoing = removed.out_degree(),
            incoming = scrubbed,
            "removed graph vertex and its edges"
        );

        Some(removed)
    }

    /// Removes the first edge from `source` to `destination`, returning the destination's value.
    ///
    /// # Errors
    /// Returns [`NotFound`] if there is no vertex holding `source`. If the source exists but has
    /// no edge to `destination`, `Ok(None)` is returned instead.
    pub fn remove_edge(&mut self, source: &T, destination: &T) -> Result<Option<T>, NotFound> {
        let vertex = self.vertices
            .iter_mut()
            .find(|vertex| vertex.value == *source)
            .ok_or(SOURCE)?;

        Ok(vertex.adjacent
            .iter()
            .position(|adjacent| adjacent == destination)
            .map(|index| vertex.adjacent.remove(index)))
    }
}

impl<T: Clone + PartialEq> Graph<T> {
    /// Adds an edge from the first vertex holding `source` to the first vertex holding
    /// `destination`. An existing edge between the same vertices doesn't prevent another one.
    ///
    /// # Errors
    /// Returns [`NotFound`] if either vertex doesn't exist, in which case nothing is changed.
    pub fn add_edge(&mut self, source: &T, destination: &T) -> Result<&mut Self, NotFound> {
        let destination = self.get(destination).ok_or(DESTINATION)?.value.clone();
        let vertex = self.vertices
            .iter_mut()
            .find(|vertex| vertex.value == *source)
            .ok_or(SOURCE)?;

        vertex.adjacent.push(destination);
        Ok(self)
    }
}

impl<T: Clone + Hash + Eq> Graph<T> {
    /// Returns whether `destination` can be reached from `source` by following edges, exploring
    /// depth-first. Every vertex can reach itself.
    ///
    /// # Errors
    /// Returns [`NotFound`] if either vertex doesn't exist.
    pub fn has_path_dfs(&self, source: &T, destination: &T) -> Result<bool, NotFound> {
        let start = self.endpoints(source, destination)?;
        let mut visited: HashTable<T, ()> = HashTable::new();
        let mut order = Vec::new();
        Ok(self.depth_first(start, Some(destination), &mut visited, &mut order))
    }

    /// Returns whether `destination` can be reached from `source` by following edges, exploring
    /// breadth-first. Every vertex can reach itself.
    ///
    /// # Errors
    /// Returns [`NotFound`] if either vertex doesn't exist.
    pub fn has_path_bfs(&self, source: &T, destination: &T) -> Result<bool, NotFound> {
        let start = self.endpoints(source, destination)?;
        let mut order = Vec::new();
        Ok(self.breadth_first(start, Some(destination), &mut order))
    }

    /// Returns the values of every vertex reachable from `source`, in depth-first pre-order.
    pub fn dfs(&self, source: &T) -> Result<Vec<&T>, NotFound> {
        let start = self.get(source).ok_or(SOURCE)?;
        let mut visited: HashTable<T, ()> = HashTable::new();
        let mut order = Vec::new();
        self.depth_first(start, None, &mut visited, &mut order);
        Ok(order)
    }

    /// Returns the values of every vertex reachable from `source`, in breadth-first order.
    pub fn bfs(&self, source: &T) -> Result<Vec<&T>, NotFound> {
        let start = self.get(source).ok_or(SOURCE)?;
        let mut order = Vec::new();
        self.breadth_first(start, None, &mut order);
        Ok(order)
    }

    fn endpoints(&self, source: &T, destination: &T) -> Result<&Vertex<T>, NotFound> {
        let start = self.get(source).ok_or(SOURCE)?;
        self.get(destination).ok_or(DESTINATION)?;
        Ok(start)
    }

    /// Visits `vertex` and then, recursively, each unvisited vertex it has an edge to. Stops early
    /// and returns true once `target` is visited.
    fn depth_first<'a>(
        &'a self,
        vertex: &'a Vertex<T>,
        target: Option<&T>,
        visited: &mut HashTable<T, ()>,
        order: &mut Vec<&'a T>,
    ) -> bool {
        visited.insert(vertex.value.clone(), ());
        order.push(&vertex.value);
        if target == Some(&vertex.value) {
            return true;
        }

        for adjacent in vertex.adjacent.iter() {
            if visited.contains_key(adjacent) {
                continue;
            }
            if let Some(next) = self.get(adjacent) {
                if self.depth_first(next, target, visited, order) {
                    return true;
                }
            }
        }
        false
    }

    /// Visits vertices in order of their distance from `start`. Stops early and returns true once
    /// `target` is visited.
    fn breadth_first<'a>(
        &'a self,
        start: &'a Vertex<T>,
        target: Option<&T>,
        order: &mut Vec<&'a T>,
    ) -> bool {
        let mut visited: HashTable<T, ()> = HashTable::new();
        let mut queue = Queue::new();
        visited.insert(start.value.clone(), ());
        queue.enqueue(start);

        while let Some(vertex) = queue.dequeue() {
            order.push(&vertex.value);
            if target == Some(&vertex.value) {
                return true;
            }

            for adjacent in vertex.adjacent.iter() {
                if visited.insert(adjacent.clone(), ()).is_some() {
                    continue;
                }
                if let Some(next) = self.get(adjacent) {
                    queue.enqueue(next);
                }
            }
        }
        false
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Graph<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.vertices.iter().map(|vertex| (&vertex.value, &vertex.adjacent)))
            .finish()
    }
}
