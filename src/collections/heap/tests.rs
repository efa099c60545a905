#![cfg(test)]

use proptest::prelude::*;

use super::*;

#[test]
fn test_insert_and_extract() {
    let mut heap = MinHeap::new();
    heap.insert(5).insert(3).insert(8).insert(1);

    assert_eq!(heap.peek(), Some(&1), "The smallest item should be at the root.");
    assert_eq!(heap.extract_min(), Some(1));
    assert_eq!(heap.peek(), Some(&3), "The next smallest item should take its place.");
    assert_eq!(heap.len(), 3);
    assert!(heap.is_valid());
}

#[test]
fn test_empty() {
    let mut heap = MinHeap::<i32>::new();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.extract_min(), None);

    heap.insert(4);
    assert_eq!(heap.extract_min(), Some(4));
    assert!(heap.is_empty());
}

#[test]
fn test_index_arithmetic() {
    assert_eq!(MinHeap::<u8>::left_child_index(0), 1);
    assert_eq!(MinHeap::<u8>::right_child_index(0), 2);
    assert_eq!(MinHeap::<u8>::left_child_index(3), 7);
    assert_eq!(MinHeap::<u8>::parent_index(0), None);
    assert_eq!(MinHeap::<u8>::parent_index(7), Some(3));
    assert_eq!(MinHeap::<u8>::parent_index(8), Some(3));
}

#[test]
fn test_duplicates() {
    let heap: MinHeap<_> = [2, 2, 1, 1, 3].into_iter().collect();
    assert_eq!(heap.into_sorted_vec(), [1, 1, 2, 2, 3]);
}

#[test]
fn test_remove_all() {
    let mut heap: MinHeap<_> = (0..10).rev().collect();
    heap.remove_all().remove_all();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
}

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Extract,
}

proptest! {
    #[test]
    fn prop_heap_property_holds(
        ops in prop::collection::vec(
            prop_oneof![any::<i16>().prop_map(Op::Insert), Just(Op::Extract)],
            0..128,
        ),
    ) {
        let mut heap = MinHeap::new();
        let mut model: Vec<i16> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(item) => {
                    heap.insert(item);
                    model.push(item);
                },
                Op::Extract => {
                    let expected = model.iter().min().copied();
                    if let Some(min) = expected {
                        if let Some(pos) = model.iter().position(|v| *v == min) {
                            model.swap_remove(pos);
                        }
                    }
                    prop_assert_eq!(heap.extract_min(), expected);
                },
            }
            prop_assert!(heap.is_valid());
            prop_assert_eq!(heap.peek(), model.iter().min());
        }

        model.sort();
        prop_assert_eq!(heap.into_sorted_vec(), model);
    }
}
