use std::iter::{Enumerate, FusedIterator};
use std::slice;

use super::{FixedHashTable, Record, Slot};

impl<'a, P, const SIZE: usize> IntoIterator for &'a FixedHashTable<P, SIZE> {
    type Item = (usize, &'a Record<P>);

    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.slots.iter().enumerate(),
            len: self.len(),
        }
    }
}

/// An iterator over the occupied slots of a [`FixedHashTable`], yielding each slot's index with
/// its record.
pub struct Iter<'a, P> {
    pub(crate) inner: Enumerate<slice::Iter<'a, Slot<P>>>,
    pub(crate) len: usize,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = (usize, &'a Record<P>);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.inner.by_ref() {
            if let Some(record) = slot {
                self.len -= 1;
                return Some((index, record));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<P> FusedIterator for Iter<'_, P> {}

impl<P> ExactSizeIterator for Iter<'_, P> {}

impl<P> Clone for Iter<'_, P> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}
