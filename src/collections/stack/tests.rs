#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_array_stack_lifo() {
    let mut stack = ArrayStack::<i32>::new();
    assert_eq!(stack.capacity(), STACK_CAPACITY);

    stack.push(10).expect("stack has room");
    stack.push(20).expect("stack has room");
    stack.push(30).expect("stack has room");
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);

    assert_eq!(stack.pop(), Some(30));
    assert_eq!(stack.peek(), Some(&20), "peek shouldn't remove the top value.");
    assert_eq!(stack.len(), 2);
    assert_eq!(format!("{stack:?}"), "ArrayStack { contents: [10, 20], len: 2, cap: 10 }");
}

#[test]
fn test_array_stack_bounds() {
    let mut stack = ArrayStack::<u8, 2>::new();
    assert_eq!(stack.pop(), None, "Popping an empty stack should underflow gracefully.");
    assert_eq!(stack.peek(), None);

    assert_eq!(stack.push(1), Ok(()));
    assert_eq!(stack.push(2), Ok(()));
    assert!(stack.is_full());
    assert_eq!(stack.push(3), Err(StackFull(3)), "A full stack should hand the value back.");
    assert_eq!(stack.len(), 2);

    let mut empty = ArrayStack::<u8, 0>::new();
    assert!(empty.is_empty() && empty.is_full());
    assert_eq!(empty.push(1).map_err(StackFull::into_inner), Err(1));
}

#[test]
fn test_array_stack_clear() {
    let counter = CountedDrop::counter();
    let mut stack = ArrayStack::<CountedDrop, 4>::new();
    for _ in 0..3 {
        stack.push(CountedDrop::new(&counter)).expect("stack has room");
    }
    stack.clear();
    assert_eq!(counter.get(), 3);
    assert!(stack.is_empty());
}

#[test]
fn test_linked_stack_lifo() {
    let mut stack = LinkedStack::new();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);

    for i in [10, 20, 30] {
        stack.push(i);
    }
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [30, 20, 10], "Top comes first.");
    assert_eq!(stack.pop(), Some(30));
    assert_eq!(stack.peek(), Some(&20));
    assert_eq!(stack.len(), 2);
    assert_eq!(format!("{stack:?}"), "LinkedStack { contents: [20, 10], len: 2 }");

    stack.clear();
    assert!(stack.is_empty());
}
