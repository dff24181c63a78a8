use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use tracing::debug;

use super::Iter;
use crate::util::fmt::DebugIter;

/// A first-in first-out queue with a capacity fixed at construction.
///
/// Values are written at the tail cursor and read from the head cursor, both wrapping modulo the
/// capacity, so the queue never moves or reallocates its contents. Enqueuing into a full queue is
/// refused rather than overwriting the oldest value.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `clear` | `O(n)` |
pub struct CircularQueue<T> {
    pub(crate) buf: Box<[Option<T>]>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty CircularQueue able to hold `capacity` values. A capacity of 0 creates a
    /// queue that is always both empty and full.
    ///
    /// # Examples
    /// ```
    /// # use classic_containers::collections::circ::CircularQueue;
    /// let mut queue = CircularQueue::new(2);
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    /// assert!(queue.enqueue(3).is_err());
    /// assert_eq!(queue.dequeue(), Some(1));
    /// ```
    pub fn new(capacity: usize) -> CircularQueue<T> {
        CircularQueue {
            buf: (0..capacity).map(|_| None).collect(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Returns the number of values in the queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum number of values the queue can hold.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Adds `value` at the back of the queue. If the queue is full, the value is returned inside
    /// [`QueueFull`] and the queue is unchanged.
    pub fn enqueue(&mut self, value: T) -> Result<(), QueueFull<T>> {
        if self.is_full() {
            debug!(capacity = self.capacity(), "enqueue rejected, queue full");
            return Err(QueueFull(value));
        }

        self.buf[self.tail] = Some(value);
        self.tail = (self.tail + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at the front of the queue, or None if it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.buf[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        value
    }

    /// Returns a reference to the value at the front of the queue, if there is one.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    /// Drops every value in the queue and resets both cursors. The capacity is kept.
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Returns an iterator over the values in the queue, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}

/// The queue was full, so the value couldn't be enqueued. The value is returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull<T>(pub T);

impl<T> QueueFull<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Display for QueueFull<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to enqueue into a full queue!")
    }
}

impl<T: Debug> Error for QueueFull<T> {}
