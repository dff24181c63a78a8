#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_fifo_order_with_wrapping() {
    let mut queue = CircularQueue::new(3);
    for i in 0..3 {
        assert_eq!(queue.enqueue(i), Ok(()));
    }
    assert!(queue.is_full());
    assert_eq!(queue.enqueue(3), Err(QueueFull(3)), "A full queue should refuse new values.");

    assert_eq!(queue.dequeue(), Some(0));
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.enqueue(3), Ok(()));
    assert_eq!(queue.enqueue(4), Ok(()), "The tail cursor should wrap to the start.");
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);

    assert_eq!(queue.peek(), Some(&2));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), Some(4), "The head cursor should wrap to the start.");
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), None);
}

#[test]
fn test_zero_capacity() {
    let mut queue = CircularQueue::new(0);
    assert!(queue.is_empty() && queue.is_full());
    assert_eq!(queue.enqueue('a').map_err(QueueFull::into_inner), Err('a'));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_clear() {
    let counter = CountedDrop::counter();
    let mut queue = CircularQueue::new(4);
    for _ in 0..4 {
        queue.enqueue(CountedDrop::new(&counter)).expect("queue has room");
    }
    drop(queue.dequeue());

    queue.clear();
    assert_eq!(counter.get(), 4, "clear should drop every queued value.");
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), 4, "clear should keep the capacity.");

    queue.enqueue(CountedDrop::new(&counter)).expect("queue has room");
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_debug() {
    let mut queue = CircularQueue::new(2);
    queue.enqueue(7).expect("queue has room");
    assert_eq!(format!("{queue:?}"), "CircularQueue { contents: [7], len: 1, cap: 2 }");
}
