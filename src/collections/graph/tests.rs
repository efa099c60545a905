#![cfg(test)]

use super::*;

fn chain() -> Graph<u32> {
    let mut graph = Graph::new();
    for i in 1..=5 {
        graph.add_vertex(i);
    }
    graph.add_edge(&1, &2)
        .and_then(|g| g.add_edge(&2, &3))
        .and_then(|g| g.add_edge(&3, &4))
        .map(|_| ())
        .unwrap_or_else(|err| panic!("{err}"));
    graph
}

#[test]
fn test_add_vertex_then_get() {
    let mut graph = Graph::new();
    graph.add_vertex("a");
    assert_eq!(graph.get(&"a").map(Vertex::value), Some(&"a"));
    assert!(graph.get(&"b").is_none());
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_add_edge_requires_both_vertices() {
    let mut graph = chain();
    assert_eq!(
        graph.add_edge(&1, &9).map(|_| ()),
        Err(NotFound { kind: "destination vertex" })
    );
    assert_eq!(graph.add_edge(&9, &1).map(|_| ()), Err(NotFound { kind: "source vertex" }));
    assert_eq!(graph.edge_count(), 3, "A failed add_edge shouldn't change anything.");

    assert!(graph.add_edge(&1, &2).is_ok());
    assert_eq!(
        graph.get(&1).map(Vertex::adjacent),
        Some(&[2, 2][..]),
        "Parallel edges should be kept."
    );
}

#[test]
fn test_reachability() {
    let graph = chain();

    assert_eq!(graph.has_path_dfs(&1, &4), Ok(true));
    assert_eq!(graph.has_path_bfs(&1, &4), Ok(true));
    assert_eq!(graph.has_path_dfs(&4, &1), Ok(false), "Edges only go one way.");
    assert_eq!(graph.has_path_bfs(&4, &1), Ok(false), "Edges only go one way.");
    assert_eq!(graph.has_path_dfs(&1, &5), Ok(false));
    assert_eq!(graph.has_path_bfs(&5, &5), Ok(true), "Every vertex reaches itself.");
    assert!(graph.has_path_dfs(&1, &6).is_err());
    assert!(graph.has_path_bfs(&6, &1).is_err());
}

#[test]
fn test_cycles_terminate() {
    let mut graph = chain();
    assert!(graph.add_edge(&4, &1).is_ok());
    assert!(graph.add_edge(&2, &2).is_ok());

    assert_eq!(graph.has_path_dfs(&3, &2), Ok(true));
    assert_eq!(graph.has_path_bfs(&3, &2), Ok(true));
    assert_eq!(graph.has_path_dfs(&1, &5), Ok(false));
    assert_eq!(graph.has_path_bfs(&1, &5), Ok(false));
}

#[test]
fn test_traversal_orders() {
    let mut graph = Graph::new();
    for v in ['a', 'b', 'c', 'd', 'e'] {
        graph.add_vertex(v);
    }
    for (from, to) in [('a', 'b'), ('a', 'c'), ('b', 'd'), ('c', 'e'), ('d', 'a')] {
        assert!(graph.add_edge(&from, &to).is_ok());
    }

    assert_eq!(graph.dfs(&'a'), Ok(vec![&'a', &'b', &'d', &'c', &'e']));
    assert_eq!(graph.bfs(&'a'), Ok(vec![&'a', &'b', &'c', &'d', &'e']));
    assert_eq!(graph.bfs(&'e'), Ok(vec![&'e']));
}

#[test]
fn test_remove_vertex_scrubs_edges() {
    let mut graph = chain();
    assert!(graph.add_edge(&1, &3).is_ok());

    let removed = graph.remove_vertex(&3);
    assert_eq!(removed.as_ref().map(Vertex::adjacent), Some(&[4][..]));
    assert!(graph.get(&3).is_none());
    assert!(
        graph.vertices().all(|vertex| !vertex.adjacent().contains(&3)),
        "No edge should still point at a removed vertex."
    );
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.has_path_dfs(&1, &4), Ok(false));

    assert!(graph.remove_vertex(&3).is_none());
}

#[test]
fn test_remove_edge() {
    let mut graph = chain();

    assert_eq!(graph.remove_edge(&1, &2), Ok(Some(2)));
    assert_eq!(graph.remove_edge(&1, &2), Ok(None), "The edge is already gone.");
    assert_eq!(graph.remove_edge(&9, &2), Err(NotFound { kind: "source vertex" }));
    assert_eq!(graph.has_path_bfs(&1, &4), Ok(false));
}

#[test]
fn test_remove_parallel_edge() {
    let mut graph = chain();
    assert!(graph.add_edge(&1, &2).is_ok(), "A second edge between the same vertices is allowed.");
    assert_eq!(graph.get(&1).map(Vertex::adjacent), Some(&[2, 2][..]));

    assert_eq!(graph.remove_edge(&1, &2), Ok(Some(2)));
    assert_eq!(
        graph.get(&1).map(Vertex::adjacent),
        Some(&[2][..]),
        "Only the first of the parallel edges should be removed."
    );
    assert_eq!(graph.has_path_dfs(&1, &4), Ok(true));
}

#[test]
fn test_remove_all() {
    let mut graph = chain();
    graph.remove_all().remove_all();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}
