#![cfg(test)]

use super::*;

#[test]
fn test_stack_is_lifo() {
    let mut stack = Stack::new();
    assert_eq!(stack.pop(), None);

    stack.push(1).push(2).push(3);
    assert_eq!(stack.peek(), Some(&3), "Peek should see the most recent push.");
    assert_eq!(stack.len(), 3);

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert!(stack.is_empty());
}

#[test]
fn test_queue_is_fifo() {
    let mut queue: Queue<_> = (1..=3).collect();
    assert_eq!(queue.peek(), Some(&1), "Peek should see the oldest value.");

    queue.enqueue(4);
    assert_eq!(
        std::iter::from_fn(|| queue.dequeue()).collect::<Vec<_>>(),
        [1, 2, 3, 4]
    );
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_interleaved_queue() {
    let mut queue = Queue::new();
    queue.enqueue('a').enqueue('b');
    assert_eq!(queue.dequeue(), Some('a'));
    queue.enqueue('c');
    assert_eq!(queue.dequeue(), Some('b'));
    assert_eq!(queue.dequeue(), Some('c'));
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_remove_all() {
    let mut stack: Stack<_> = (0..4).collect();
    stack.remove_all().remove_all();
    assert!(stack.is_empty());

    let mut queue: Queue<_> = (0..4).collect();
    queue.remove_all().remove_all();
    assert!(queue.is_empty());
}
