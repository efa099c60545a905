#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_insert_prepends() {
    let mut list = SinglyLinkedList::new();
    list.insert(1).insert(2).insert(3);

    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [3, 2, 1],
        "Each insert should become the new head."
    );
    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&3));
}

#[test]
fn test_get() {
    let mut list = SinglyLinkedList::new();
    assert!(list.get(&1).is_none(), "An empty list shouldn't find anything.");

    list.insert(1);
    let node = list.get(&1);
    assert_eq!(
        node.map(Node::value),
        Some(&1),
        "A value should be found immediately after being inserted."
    );

    list.insert(2).insert(3);
    let node = list.get(&2).map(|node| (node.value(), node.next().map(Node::value)));
    assert_eq!(node, Some((&2, Some(&1))), "The returned node should still link to its successor.");
    assert!(list.get(&4).is_none());
}

#[test]
fn test_remove() {
    let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    assert_eq!(list.remove(&1), None, "Removing from an empty list is a no-op.");

    let mut list: SinglyLinkedList<_> = [1, 2, 3, 4].into_iter().collect();

    assert_eq!(list.remove(&1), Some(1), "Removing the head should work.");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);

    assert_eq!(list.remove(&3), Some(3), "Removing a middle node should splice around it.");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 4]);

    assert_eq!(list.remove(&4), Some(4), "Removing the tail should work.");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2]);

    assert_eq!(list.remove(&7), None);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_first_occurrence_only() {
    let mut list: SinglyLinkedList<_> = [5, 1, 5, 1].into_iter().collect();
    list.remove(&5);
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 5, 1],
        "Only the head-ward occurrence should be removed."
    );
}

#[test]
fn test_remove_all() {
    let counter = CountedDrop::new(0);
    let mut list = SinglyLinkedList::new();
    for _ in 0..10 {
        list.insert(counter.clone());
    }

    list.remove_all();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(counter.count(), 10, "Every node should have been dropped.");

    list.remove_all();
    assert!(list.is_empty(), "Clearing twice should leave the list empty without issue.");
}

#[test]
fn test_long_list_drop() {
    let list: SinglyLinkedList<_> = (0..200_000).collect();
    assert_eq!(list.len(), 200_000);
    drop(list);
}

#[test]
fn test_display() {
    let list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
}

proptest! {
    #[test]
    fn prop_tracks_multiset(
        inserts in prop::collection::vec(0_u8..16, 0..64),
        removes in prop::collection::vec(0_u8..16, 0..64),
    ) {
        let mut list = SinglyLinkedList::new();
        let mut model: Vec<u8> = Vec::new();

        for value in &inserts {
            list.insert(*value);
            model.insert(0, *value);
        }
        for value in &removes {
            let expected = model.iter().position(|v| v == value).map(|i| model.remove(i));
            prop_assert_eq!(list.remove(value), expected);
        }

        prop_assert_eq!(list.len(), model.len());
        prop_assert_eq!(list.into_iter().collect::<Vec<_>>(), model);
    }
}
