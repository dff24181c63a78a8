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

/// A list with forward links only. Each node owns its successor and the list keeps an additional
/// pointer to the tail, so that appending to either end is `O(1)`.
///
/// See [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList) if removing from the
/// tail is common, it avoids the forward scan required here to find the new tail.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `head/tail` | `O(1)` |
/// | `append_head/tail` | `O(1)` |
/// | `pop_head` | `O(1)` |
/// | `pop_tail` | `O(n)` |
/// | `append_at` | `O(i)` |
/// | `delete_at` | `O(i)` |
/// | `get` | `O(i)` |
/// | `find` | `O(n)` |
///
/// The list holds raw pointers to its nodes and so is neither [`Send`] nor [`Sync`].
pub struct SinglyLinkedList<T> {
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

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Creates a SinglyLinkedList holding a single node, which is both the head and the tail.
    ///
    /// # Examples
    /// ```
    /// # use classic_containers::collections::linked::SinglyLinkedList;
    /// let list = SinglyLinkedList::init(10);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.head(), list.tail());
    /// ```
    pub fn init(value: T) -> SinglyLinkedList<T> {
        SinglyLinkedList {
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
    /// Index 0 is refused: inserting at the head goes through [`append_head`](Self::append_head).
    /// Inserting into an empty list is refused for the same reason.
    ///
    /// # Examples
    /// ```
    /// # use classic_containers::collections::linked::{AppendAtError, SinglyLinkedList};
    /// let mut list = SinglyLinkedList::from_iter([1, 3]);
    /// list.append_at(2, 1).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// assert_eq!(list.append_at(0, 0), Err(AppendAtError::HeadIndex));
    /// ```
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
        contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            next: *prev.next(),
        });
        *prev.next_mut() = Some(node);

        Ok(())
    }

    /// Removes the head of the list and returns its value, or None if the list is empty.
    pub fn pop_head(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is unlinked from the list below, so no handle to it survives.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // UNREACHABLE: The previous length is greater than 1, so the head has a
                        // successor.
                        *head = node.next.unreachable();
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the tail of the list and returns its value, or None if the list is empty.
    ///
    /// Without back links, the node before the tail has to be found by walking from the head.
    pub fn pop_tail(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => match contents.len.checked_sub(1) {
                Some(new_len) => {
                    let new_tail = contents.seek(new_len.get() - 1);
                    // SAFETY: The tail is unlinked from its predecessor immediately after.
                    let node = unsafe { contents.tail.take_node() };
                    *new_tail.next_mut() = None;
                    contents.tail = new_tail;
                    contents.len = new_len;
                    Some(node.value)
                },
                None => {
                    let head = contents.head;
                    self.state = Empty;
                    // SAFETY: The state no longer references the only node.
                    Some(unsafe { head.take_node() }.value)
                },
            },
        }
    }

    /// Removes the node at `index` and returns its value. Head and tail are repaired when either
    /// end is removed.
    ///
    /// # Examples
    /// ```
    /// # use classic_containers::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from_iter([1, 2, 3]);
    /// assert_eq!(list.delete_at(2), Ok(3));
    /// assert_eq!(list.tail(), Some(&2));
    /// assert!(list.delete_at(2).is_err());
    /// ```
    pub fn delete_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if let Err(err) = self.checked_contents_for_index(index) {
            debug!(index, len = err.len, "positional delete out of bounds");
            return Err(err);
        }

        if index == 0 {
            // UNREACHABLE: Index 0 is in bounds, so the list isn't empty.
            return Ok(self.pop_head().unreachable());
        }

        let contents = self.checked_contents_for_index_mut(index)?;
        let prev = contents.seek(index - 1);
        // UNREACHABLE: Index is in bounds, so the node before it has a successor.
        let target = prev.next().unreachable();
        // SAFETY: The target is unlinked from its predecessor below and never used again.
        let node = unsafe { target.take_node() };

        *prev.next_mut() = node.next;
        if node.next.is_none() {
            contents.tail = prev;
        }
        // UNREACHABLE: Index 0 was handled above, so the length was at least 2.
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

    /// Returns an iterator over the values in the list, from head to tail. The iterator doesn't
    /// modify the list and can be cloned to restart the traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the index of the first node holding a value equal to `item`.
    pub fn find(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if any node holds a value equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }
}

impl<T> SinglyLinkedList<T> {
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

    /// Walks the forward links and panics if they disagree with the stored tail or length.
    #[allow(dead_code)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut curr = *head;
                let mut steps = 0;
                while let Some(next) = curr.next() {
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
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    /// Returns the node `index` steps after the head. The index must be in bounds.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        let mut node = self.head;
        for _ in 0..index {
            // UNREACHABLE: The caller checks the index against the length.
            node = node.next().unreachable();
        }
        node
    }

    pub fn append_head(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        self.head = NodeRef::from_node(Node {
            value,
            next: Some(self.head),
        });
    }

    pub fn append_tail(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    /// Releases every node, walking forward from the head.
    pub fn release(self) {
        let mut curr = Some(self.head);
        while let Some(ptr) = curr {
            curr = *ptr.next();
            // SAFETY: Each node is visited once and the contents are consumed, so no handles
            // remain afterwards.
            drop(unsafe { ptr.take_node() });
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
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

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Empty
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

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append_tail(item);
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
