use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::Index;

use derive_more::IsVariant;
use tracing::debug;

use super::{Iter, Node, NodeRef};
use crate::collections::linked::error::{AppendAtError, IndexOutOfBounds};
use crate::collections::linked::length::{Length, ONE};
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugIter;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions. The extra back link per node makes removal from the tail
/// `O(1)`, allows traversal from tail to head and lets indexed operations start from whichever
/// end is closer.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `head/tail` | `O(1)` |
/// | `append_head/tail` | `O(1)` |
/// | `pop_head/tail` | `O(1)` |
/// | `append_at` | `O(min(i, n-i))` |
/// | `delete_at` | `O(min(i, n-i))` |
/// | `get` | `O(min(i, n-i))` |
/// | `find` | `O(n)` |
///
/// The list holds raw pointers to its nodes and so is neither [`Send`] nor [`Sync`].
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Creates a DoublyLinkedList holding a single node, which is both the head and the tail.
    pub fn init(value: T) -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: ListState::single(value),
            _phantom: PhantomData,
        }
    }

    /// Returns the number of nodes in the list.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the list contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the value at the head of the list, if it exists.
    pub fn head(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a reference to the value at the tail of the list, if it exists.
    pub fn tail(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Adds the provided value to the head of the list.
    pub fn append_head(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.append_head(value),
        }
    }

    /// Adds the provided value to the tail of the list.
    pub fn append_tail(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.append_tail(value),
        }
    }

    /// Inserts `value` so that it becomes the node at `index`, counting from the head. An `index`
    /// equal to the length appends to the tail.
    ///
    /// As with [`SinglyLinkedList::append_at`](crate::collections::linked::SinglyLinkedList::append_at),
    /// index 0 and empty lists are refused, [`append_head`](Self::append_head) covers both.
    pub fn append_at(&mut self, value: T, index: usize) -> Result<(), AppendAtError> {
        let contents = match &mut self.state {
            Empty => {
                debug!(index, "positional insert into empty list refused");
                return Err(AppendAtError::EmptyList);
            },
            Full(contents) => contents,
        };

        let len = contents.len.get();
        if index == 0 {
            debug!(len, "positional insert at head refused");
            return Err(AppendAtError::HeadIndex);
        }
        if index > len {
            debug!(index, len, "positional insert out of bounds");
            return Err(IndexOutOfBounds { index, len }.into());
        }

        if index == len {
            contents.append_tail(value);
            return Ok(());
        }

        let prev = contents.seek(index - 1);
        // UNREACHABLE: The index isn't the length, so the node before it isn't the tail.
        let next = prev.next().unreachable();
        contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: Some(prev),
            next: Some(next),
        });
        *next.prev_mut() = Some(node);
        *prev.next_mut() = Some(node);

        Ok(())
    }

    /// Removes the head of the list and returns its value, or None if the list is empty.
    pub fn pop_head(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is unlinked from the list below.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // UNREACHABLE: The previous length is greater than 1, so the head has a
                        // successor.
                        let new_head = node.next.unreachable();
                        *new_head.prev_mut() = None;
                        *head = new_head;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the tail of the list and returns its value, or None if the list is empty.
    pub fn pop_tail(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                // SAFETY: The tail is unlinked from the list below.
                let node = unsafe { tail.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // UNREACHABLE: The previous length is greater than 1, so the tail has a
                        // predecessor.
                        let new_tail = node.prev.unreachable();
                        *new_tail.next_mut() = None;
                        *tail = new_tail;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the node at `index` and returns its value. Removing either end goes through
    /// [`pop_head`](Self::pop_head) or [`pop_tail`](Self::pop_tail), which repair the ends.
    pub fn delete_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = match self.checked_contents_for_index_mut(index) {
            Ok(contents) => contents,
            Err(err) => {
                debug!(index, len = err.len, "positional delete out of bounds");
                return Err(err);
            },
        };

        if index == 0 {
            // UNREACHABLE: Index 0 is in bounds, so the list isn't empty.
            return Ok(self.pop_head().unreachable());
        }
        if index == contents.len.last_index() {
            // UNREACHABLE: As above.
            return Ok(self.pop_tail().unreachable());
        }

        // SAFETY: The node is unlinked from both neighbours below.
        let node = unsafe { contents.seek(index).take_node() };
        // UNREACHABLE: Neither end is being removed, so both neighbours exist.
        let prev = node.prev.unreachable();
        let next = node.next.unreachable();
        *prev.next_mut() = Some(next);
        *next.prev_mut() = Some(prev);
        // UNREACHABLE: A middle node exists, so the length was at least 3.
        contents.len = contents.len.checked_sub(1).unreachable();

        Ok(node.value)
    }

    /// Returns a reference to the value at `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the value at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index).value())
    }

    /// Removes every node from the list, leaving it empty. Each node is released exactly once.
    pub fn clear(&mut self) {
        if let Full(contents) = mem::take(&mut self.state) {
            contents.release();
        }
    }

    /// Returns an iterator over the values in the list. It runs from head to tail, or from tail to
    /// head when reversed.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns the index of the first node holding a value equal to `item`.
    pub fn find(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if any node holds a value equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Walks the list in both directions and panics if any link disagrees with its neighbour, the
    /// stored ends or the stored length.
    #[allow(dead_code)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "head has a predecessor");
                assert!(tail.next().is_none(), "tail has a successor");

                let mut curr = *head;
                let mut steps = 0;
                while let Some(next) = curr.next() {
                    assert!(*next.prev() == Some(curr), "back link doesn't match forward link");
                    curr = *next;
                    steps += 1;
                    assert!(steps < len.get(), "forward links run past the stored length");
                }
                assert!(curr == *tail, "forward links don't end at the tail");
                assert_eq!(steps, len.last_index(), "tail reached in the wrong number of steps");
            },
        }
    }
}

impl<T> ListContents<T> {
    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    /// Returns the node at `index`, walking from whichever end is closer. The index must be in
    /// bounds.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        if index < self.len.get() / 2 {
            let mut node = self.head;
            for _ in 0..index {
                // UNREACHABLE: The caller checks the index against the length.
                node = node.next().unreachable();
            }
            node
        } else {
            let mut node = self.tail;
            for _ in 0..(self.len.last_index() - index) {
                // UNREACHABLE: As above.
                node = node.prev().unreachable();
            }
            node
        }
    }

    pub fn append_head(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn append_tail(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    /// Releases every node, following the owning direction from head to tail.
    pub fn release(self) {
        let mut curr = Some(self.head);
        while let Some(ptr) = curr {
            curr = *ptr.next();
            // SAFETY: Each node is visited once and the contents are consumed.
            drop(unsafe { ptr.take_node() });
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append_tail(item);
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") <-> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
