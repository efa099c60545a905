//! End-to-end checks of the documented behaviour of each collection, through the public API only.

use classic_collections::collections::binary_tree::BinarySearchTree;
use classic_collections::collections::graph::Graph;
use classic_collections::collections::heap::MinHeap;
use classic_collections::collections::linked::{DoublyLinkedList, SinglyLinkedList};
use classic_collections::collections::tree::Tree;
use classic_collections::collections::trie::{MatchMode, Trie};

#[test]
fn insert_then_get_on_empty_structures() {
    assert_eq!(SinglyLinkedList::new().insert(7).get(&7).map(|n| *n.value()), Some(7));
    assert_eq!(DoublyLinkedList::new().insert(7).get(&7).map(|n| *n.value()), Some(7));
    assert_eq!(BinarySearchTree::new().insert(7).get(&7).map(|n| *n.value()), Some(7));
    assert_eq!(Tree::new().insert(7).get(&7).map(|n| *n.value()), Some(7));
    assert_eq!(Graph::new().add_vertex(7).get(&7).map(|v| *v.value()), Some(7));
    assert_eq!(MinHeap::new().insert(7).peek(), Some(&7));
}

#[test]
fn trie_round_trip() {
    let mut trie = Trie::new();
    trie.add_word("cat")
        .and_then(|t| t.add_word("car"))
        .unwrap_or_else(|err| panic!("{err}"));
    assert!(trie.contains("cat", MatchMode::Exact));

    assert!(trie.remove_word("cat").is_ok());
    assert!(!trie.contains("cat", MatchMode::Exact));
    assert!(trie.contains("car", MatchMode::Exact));
}

#[test]
fn graph_reachability() {
    let mut graph = Graph::new();
    for v in 1..=5 {
        graph.add_vertex(v);
    }
    for (from, to) in [(1, 2), (2, 3), (3, 4)] {
        assert!(graph.add_edge(&from, &to).is_ok());
    }

    assert_eq!(graph.has_path_dfs(&1, &4), Ok(true));
    assert_eq!(graph.has_path_bfs(&1, &4), Ok(true));
    assert_eq!(graph.has_path_dfs(&4, &1), Ok(false));
}

#[test]
fn heap_scenario() {
    let mut heap = MinHeap::new();
    heap.insert(5).insert(3).insert(8).insert(1);

    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.extract_min(), Some(1));
    assert_eq!(heap.peek(), Some(&3));
}

#[test]
fn remove_all_is_idempotent() {
    let mut singly: SinglyLinkedList<_> = (0..3).collect();
    assert!(singly.remove_all().remove_all().is_empty());

    let mut doubly: DoublyLinkedList<_> = (0..3).collect();
    assert!(doubly.remove_all().remove_all().is_empty());

    let mut bst: BinarySearchTree<_> = (0..3).collect();
    assert!(bst.remove_all().remove_all().is_empty());

    let mut tree = Tree::new();
    tree.insert(0).insert(1);
    assert!(tree.remove_all().remove_all().is_empty());

    let mut graph = Graph::new();
    graph.add_vertex(0);
    assert!(graph.remove_all().remove_all().is_empty());

    let mut trie = Trie::new();
    assert!(trie.add_word("word").is_ok());
    assert!(trie.remove_all().remove_all().is_empty());

    let mut heap: MinHeap<_> = (0..3).collect();
    assert!(heap.remove_all().remove_all().is_empty());
}
