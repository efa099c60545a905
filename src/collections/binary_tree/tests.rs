#![cfg(test)]

use std::fmt::Debug;

use proptest::prelude::*;

use super::*;

/// Checks that every value is within the bounds set by its ancestors, with `low` exclusive and
/// `high` inclusive.
fn assert_ordered<T: Ord + Debug>(node: Option<&Node<T>>, low: Option<&T>, high: Option<&T>) {
    let Some(node) = node else { return };
    if let Some(low) = low {
        assert!(node.value() > low, "{:?} should be greater than {:?}.", node.value(), low);
    }
    if let Some(high) = high {
        assert!(node.value() <= high, "{:?} should be at most {:?}.", node.value(), high);
    }
    assert_ordered(node.left(), low, Some(node.value()));
    assert_ordered(node.right(), Some(node.value()), high);
}

#[test]
fn test_insert_then_get() {
    let mut tree = BinarySearchTree::new();
    tree.insert(5);
    assert_eq!(tree.get(&5).map(Node::value), Some(&5));

    tree.insert(3).insert(8).insert(1).insert(4);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.root().map(Node::value), Some(&5));
    assert_eq!(tree.root().and_then(Node::left).map(Node::value), Some(&3));
    assert_eq!(tree.root().and_then(Node::right).map(Node::value), Some(&8));
    assert!(tree.get(&7).is_none());
    assert_ordered(tree.root(), None, None);
}

#[test]
fn test_duplicates_route_left() {
    let mut tree = BinarySearchTree::new();
    tree.insert(5).insert(5).insert(5);

    let root = tree.root();
    assert_eq!(root.and_then(Node::right).map(Node::value), None, "Duplicates never go right.");
    assert_eq!(root.and_then(Node::left).map(Node::value), Some(&5));

    let found = tree.get(&5).map(|node| node as *const Node<i32>);
    let deepest = root
        .and_then(Node::left)
        .and_then(Node::left)
        .map(|node| node as *const Node<i32>);
    assert_eq!(found, deepest, "Search should continue past duplicates on the left.");
}

#[test]
fn test_remove_detaches_subtree() {
    let mut tree: BinarySearchTree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();

    let detached = tree.remove(&30);
    assert_eq!(
        detached.as_ref().map(|t| t.iter().copied().collect::<Vec<_>>()),
        Some(vec![20, 30, 40]),
        "The matched node should come back with its children."
    );
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [50, 60, 70, 80]);
    assert_eq!(tree.len(), 4);
    assert!(tree.root().and_then(Node::left).is_none());

    assert!(tree.remove(&30).is_none(), "A value that isn't present can't be removed.");
    assert_eq!(tree.remove(&80).map(|t| t.len()), Some(1));
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_remove_root_discards_tree() {
    let mut tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    let detached = tree.remove(&2);

    assert!(tree.is_empty(), "Removing the root removes every node.");
    assert!(tree.root().is_none());
    assert_eq!(detached.map(|t| t.len()), Some(3));
}

#[test]
fn test_remove_all() {
    let mut tree: BinarySearchTree<_> = (0..10).collect();
    tree.remove_all();
    assert!(tree.is_empty());
    assert!(tree.get(&3).is_none());
    tree.remove_all();
    assert!(tree.is_empty(), "Clearing twice should leave the tree empty without issue.");
}

#[test]
fn test_min_max_height() {
    let tree: BinarySearchTree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&7));
    assert_eq!(tree.height(), 3);

    let empty = BinarySearchTree::<u8>::new();
    assert_eq!(empty.min(), None);
    assert_eq!(empty.height(), 0);
}

#[test]
fn test_degenerate_tree_drop() {
    let mut tree: BinarySearchTree<u32> = (0..60_000).collect();
    assert_eq!(tree.height(), 60_000, "Sorted inserts should form a single chain.");
    assert_eq!(tree.max(), Some(&59_999));
    tree.remove_all();
    assert!(tree.is_empty());
}

proptest! {
    #[test]
    fn prop_ordering_invariant(values in prop::collection::vec(0_u8..32, 0..96)) {
        let tree: BinarySearchTree<_> = values.iter().copied().collect();

        assert_ordered(tree.root(), None, None);
        prop_assert_eq!(tree.len(), values.len());

        let mut sorted = values.clone();
        sorted.sort();
        prop_assert_eq!(tree.iter().copied().collect::<Vec<_>>(), sorted);

        for value in &values {
            prop_assert_eq!(tree.get(value).map(Node::value), Some(value));
        }
    }

    #[test]
    fn prop_remove_keeps_remaining_ordered(
        values in prop::collection::vec(0_u8..32, 1..64),
        target in 0_u8..32,
    ) {
        let mut tree: BinarySearchTree<_> = values.iter().copied().collect();
        let before = tree.len();
        let detached = tree.remove(&target);

        assert_ordered(tree.root(), None, None);
        prop_assert_eq!(tree.len() + detached.as_ref().map_or(0, |t| t.len()), before);
        prop_assert_eq!(detached.is_some(), values.contains(&target));
    }
}
