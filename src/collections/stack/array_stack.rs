use std::array;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use tracing::debug;

use crate::util::fmt::DebugIter;

/// The capacity of an [`ArrayStack`] unless another is specified.
pub const STACK_CAPACITY: usize = 10;

/// A stack of at most `N` values, stored inline. Pushing onto a full stack is refused and the
/// value is handed back.
pub struct ArrayStack<T, const N: usize = STACK_CAPACITY> {
    pub(crate) items: [Option<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> ArrayStack<T, N> {
    /// Creates a new, empty ArrayStack.
    pub fn new() -> ArrayStack<T, N> {
        ArrayStack {
            items: array::from_fn(|_| None),
            len: 0,
        }
    }

    /// Returns the number of values on the stack.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum number of values the stack can hold, which is always `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Pushes `value` onto the top of the stack, or returns it inside [`StackFull`] if there is no
    /// room left.
    pub fn push(&mut self, value: T) -> Result<(), StackFull<T>> {
        if self.is_full() {
            debug!(capacity = N, "push rejected, stack full");
            return Err(StackFull(value));
        }

        self.items[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value on top of the stack, or None if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.len = self.len.checked_sub(1)?;
        self.items[self.len].take()
    }

    /// Returns a reference to the value on top of the stack, if there is one.
    pub fn peek(&self) -> Option<&T> {
        self.items[..self.len].last()?.as_ref()
    }

    /// Drops every value on the stack.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Returns an iterator over the values on the stack, from the bottom to the top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + Clone {
        self.items[..self.len].iter().flatten()
    }
}

impl<T, const N: usize> Default for ArrayStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, const N: usize> Debug for ArrayStack<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &N)
            .finish()
    }
}

/// The stack was full, so the value couldn't be pushed. The value is returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackFull<T>(pub T);

impl<T> StackFull<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Display for StackFull<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to push onto a full stack!")
    }
}

impl<T: Debug> Error for StackFull<T> {}
