#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::collections::linked::AppendAtError;
use crate::util::alloc::CountedDrop;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

fn values(list: &SinglyLinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_head_and_tail_scenario() {
    let mut list = SinglyLinkedList::init(10);
    list.append_tail(20);
    list.append_tail(30);
    list.append_head(5);
    list.verify_links();
    assert_eq!(values(&list), [5, 10, 20, 30]);

    assert_eq!(list.pop_head(), Some(5));
    assert_eq!(values(&list), [10, 20, 30]);

    assert_eq!(list.pop_tail(), Some(30));
    assert_eq!(values(&list), [10, 20]);
    assert_eq!(list.tail(), Some(&20), "The tail pointer should move back after pop_tail.");
    list.verify_links();
}

#[test]
fn test_single_node_boundary() {
    let mut list = SinglyLinkedList::init(1);
    assert_eq!(list.head(), list.tail(), "A single node is both the head and the tail.");

    assert_eq!(list.pop_tail(), Some(1));
    assert!(list.is_empty());
    assert_eq!(list.head(), None);
    assert_eq!(list.tail(), None);

    list.append_tail(2);
    assert_eq!(list.pop_head(), Some(2));
    assert!(list.is_empty(), "Popping the only node should leave the list empty.");
    list.verify_links();
}

#[test]
fn test_pop_empty() {
    let mut list = SinglyLinkedList::<i32>::new();
    assert_eq!(list.pop_head(), None);
    assert_eq!(list.pop_tail(), None);
    assert_eq!(list.len(), 0, "Popping from an empty list mustn't change the length.");

    let mut list = SinglyLinkedList::init(i32::MIN);
    assert_eq!(
        list.pop_head(),
        Some(i32::MIN),
        "A stored minimum value is distinct from the empty result."
    );
}

#[test]
fn test_append_at() {
    let mut list = SinglyLinkedList::from_iter([10, 30]);

    assert_eq!(list.append_at(20, 1), Ok(()));
    assert_eq!(values(&list), [10, 20, 30]);

    assert_eq!(list.append_at(40, 3), Ok(()), "Index equal to the length appends to the tail.");
    assert_eq!(list.tail(), Some(&40));
    list.append_tail(50);
    assert_eq!(values(&list), [10, 20, 30, 40, 50], "The tail should be repaired by append_at.");
    list.verify_links();

    assert_eq!(list.append_at(0, 0), Err(AppendAtError::HeadIndex));
    assert_eq!(
        list.append_at(99, 6),
        Err(AppendAtError::IndexOutOfBounds(IndexOutOfBounds { index: 6, len: 5 }))
    );
    assert_eq!(list.len(), 5, "Refused inserts mustn't change the length.");

    let mut empty = SinglyLinkedList::new();
    assert_eq!(empty.append_at(1, 1), Err(AppendAtError::EmptyList));
    assert_eq!(empty.append_at(1, 0), Err(AppendAtError::EmptyList));
    assert!(empty.is_empty());
}

#[test]
fn test_delete_at() {
    let mut list = SinglyLinkedList::from_iter(0..5);

    assert_eq!(list.delete_at(2), Ok(2));
    assert_eq!(values(&list), [0, 1, 3, 4]);

    assert_eq!(list.delete_at(3), Ok(4), "Deleting the last index should work.");
    assert_eq!(list.tail(), Some(&3), "Deleting the last index should repair the tail.");
    list.append_tail(5);
    assert_eq!(values(&list), [0, 1, 3, 5]);

    assert_eq!(list.delete_at(0), Ok(0), "Deleting the first index should work.");
    assert_eq!(list.head(), Some(&1), "Deleting the first index should repair the head.");

    assert_eq!(list.delete_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.len(), 3);
    list.verify_links();

    let mut single = SinglyLinkedList::init(7);
    assert_eq!(single.delete_at(0), Ok(7));
    assert!(single.is_empty());
    assert_eq!(single.delete_at(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
}

#[test]
fn test_traversal_restarts() {
    let list = SinglyLinkedList::from_iter([1, 2, 3]);
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));

    let restart = iter.clone();
    assert_eq!(iter.collect::<Vec<_>>(), [&2, &3]);
    assert_eq!(restart.len(), 2, "A cloned iterator keeps its own position.");
    assert_eq!(values(&list), [1, 2, 3], "Iterating mustn't modify the list.");
}

#[test]
fn test_find_and_get() {
    let list = SinglyLinkedList::from_iter([4, 3, 2, 3]);
    assert_eq!(list.find(&3), Some(1), "find should return the first match.");
    assert_eq!(list.find(&9), None);
    assert!(list.contains(&2));

    assert_eq!(list[3], 3);
    assert_eq!(list.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_panics!({
        let list = SinglyLinkedList::from_iter([1]);
        list.get(1);
    });
}

#[test]
fn test_display() {
    let list = SinglyLinkedList::from_iter([5, 10, 20]);
    assert_eq!(list.to_string(), "(5) -> (10) -> (20)");
    assert_eq!(SinglyLinkedList::<i32>::new().to_string(), "()");
    assert_eq!(format!("{list:?}"), "SinglyLinkedList { contents: [5, 10, 20], len: 3 }");
}

#[test]
fn test_teardown_drops_each_node_once() {
    let counter = CountedDrop::counter();
    let mut list = SinglyLinkedList::new();
    for _ in 0..10 {
        list.append_tail(CountedDrop::new(&counter));
    }

    drop(list.pop_tail());
    drop(list.delete_at(3));
    assert_eq!(counter.get(), 2);

    list.clear();
    assert_eq!(counter.get(), 10, "clear should release every remaining node.");
    assert!(list.is_empty());

    list.append_head(CountedDrop::new(&counter));
    list.append_head(CountedDrop::new(&counter));
    drop(list);
    assert_eq!(counter.get(), 12, "Dropping the list should release every node exactly once.");
}

#[test]
fn test_into_iter_and_clone() {
    let list = SinglyLinkedList::from_iter(1..=3);
    let copy = list.clone();
    assert_eq!(list, copy);
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(copy.len(), 3);
}

proptest! {
    #[test]
    fn prop_tail_then_head_is_fifo(input in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut list = SinglyLinkedList::new();
        for value in &input {
            list.append_tail(*value);
        }
        let mut output = Vec::new();
        while let Some(value) = list.pop_head() {
            output.push(value);
        }
        prop_assert_eq!(output, input);
    }

    #[test]
    fn prop_head_then_head_is_lifo(input in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut list = SinglyLinkedList::new();
        for value in &input {
            list.append_head(*value);
        }
        let output = list.into_iter().collect::<Vec<_>>();
        let mut expected = input.clone();
        expected.reverse();
        prop_assert_eq!(output, expected);
    }

    #[test]
    fn prop_delete_at_bounds(len in 0_usize..16, index in 0_usize..20) {
        let mut list = SinglyLinkedList::from_iter(0..len);
        let result = list.delete_at(index);
        if index < len {
            prop_assert_eq!(result, Ok(index));
            prop_assert_eq!(list.len(), len - 1);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(list.len(), len);
        }
        list.verify_links();
    }

    #[test]
    fn prop_len_tracks_operations(ops in proptest::collection::vec((0_u8..6, any::<i16>(), 0_usize..8), 0..64)) {
        let mut list = SinglyLinkedList::new();
        let mut model = std::collections::VecDeque::new();
        for (op, value, index) in ops {
            match op {
                0 => { list.append_head(value); model.push_front(value); },
                1 => { list.append_tail(value); model.push_back(value); },
                2 => prop_assert_eq!(list.pop_head(), model.pop_front()),
                3 => prop_assert_eq!(list.pop_tail(), model.pop_back()),
                4 => {
                    let ok = list.append_at(value, index).is_ok();
                    prop_assert_eq!(ok, !model.is_empty() && index != 0 && index <= model.len());
                    if ok { model.insert(index, value); }
                },
                _ => prop_assert_eq!(list.delete_at(index).ok(), model.remove(index)),
            }
            list.verify_links();
            prop_assert_eq!(list.len(), model.len());
        }
        prop_assert!(list.iter().eq(model.iter()));
    }
}
