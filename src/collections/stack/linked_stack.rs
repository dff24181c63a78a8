use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::SinglyLinkedList;
use crate::collections::linked::singly::Iter;
use crate::util::fmt::DebugIter;

/// An unbounded stack built on a [`SinglyLinkedList`], with the top of the stack at the head of
/// the list.
///
/// Pushing only fails if a node can't be allocated, which aborts the process.
pub struct LinkedStack<T> {
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> LinkedStack<T> {
    /// Creates a new, empty LinkedStack.
    pub const fn new() -> LinkedStack<T> {
        LinkedStack {
            list: SinglyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.append_head(value);
    }

    /// Removes and returns the value on top of the stack, or None if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_head()
    }

    /// Returns a reference to the value on top of the stack, if there is one.
    pub fn peek(&self) -> Option<&T> {
        self.list.head()
    }

    /// Drops every value on the stack, releasing each node once.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the values on the stack, from the top to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}
