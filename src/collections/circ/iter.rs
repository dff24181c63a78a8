use std::iter::FusedIterator;

use super::CircularQueue;

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buf: &self.buf,
            pos: self.head,
            remaining: self.len,
        }
    }
}

/// An iterator over the values of a [`CircularQueue`], in the order they would be dequeued.
pub struct Iter<'a, T> {
    pub(crate) buf: &'a [Option<T>],
    pub(crate) pos: usize,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let value = self.buf[self.pos].as_ref();
        self.pos = (self.pos + 1) % self.buf.len();
        self.remaining -= 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            buf: self.buf,
            pos: self.pos,
            remaining: self.remaining,
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}
