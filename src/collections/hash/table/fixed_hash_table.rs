use std::array;
use std::fmt::{self, Debug, Display, Formatter};

use tracing::{debug, trace};

use super::{DeleteError, Iter, Name, Occupied, Record};
use crate::util::fmt::{DebugIter, DebugRaw};
use crate::util::option::OptionExtension;

/// The number of slots in a [`FixedHashTable`] unless another size is specified.
pub const TABLE_SIZE: usize = 20;

pub(crate) type Slot<P> = Option<Record<P>>;

/// A table of `SIZE` slots mapping [`Name`]s to [`Record`]s, where each name hashes to exactly one
/// slot.
///
/// Collisions are never resolved: inserting a record whose slot is already taken fails and hands
/// the record back, even if every other slot is free. The table never grows or rehashes, so its
/// capacity is fixed for its whole lifetime.
///
/// Records are moved into the table, which owns them until they are deleted.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `s`: The number of slots, `SIZE`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `hash` | `O(1)`* |
/// | `insert` | `O(1)` |
/// | `delete` | `O(1)` |
/// | `lookup` | `O(s)` |
/// | `find` | `O(s)` |
/// | `clear` | `O(s)` |
///
/// \* Hashing reads at most [`NAME_SIZE`](super::NAME_SIZE) bytes.
///
/// Note that `lookup` and `find` scan every slot in order rather than checking the hashed slot.
/// Because insertion never places a record anywhere other than its hashed slot, both approaches
/// find the same record.
pub struct FixedHashTable<P, const SIZE: usize = TABLE_SIZE> {
    pub(crate) slots: [Slot<P>; SIZE],
    pub(crate) len: usize,
}

impl<P, const SIZE: usize> FixedHashTable<P, SIZE> {
    const NON_ZERO_SIZE: () = assert!(SIZE > 0, "A FixedHashTable needs at least one slot!");

    /// Creates a new FixedHashTable with every slot empty.
    ///
    /// # Examples
    /// ```
    /// # use classic_containers::collections::hash::{FixedHashTable, Name, Record};
    /// let mut table = FixedHashTable::<u32>::new();
    /// let berkay = Name::new("Berkay").unwrap();
    ///
    /// assert!(table.insert(Record::new(berkay, 26)).is_ok());
    /// assert!(table.insert(Record::new(berkay, 27)).is_err());
    /// assert_eq!(table.lookup(&berkay).map(|r| r.payload), Some(26));
    /// ```
    pub fn new() -> FixedHashTable<P, SIZE> {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO_SIZE;

        FixedHashTable {
            slots: array::from_fn(|_| None),
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if every slot is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the table, which is always `SIZE`.
    pub const fn capacity(&self) -> usize {
        SIZE
    }

    /// Calculates the slot that `name` belongs in. Each byte of the name is folded into the
    /// accumulator as `acc = (acc + byte) * byte % SIZE`, starting from zero.
    ///
    /// This is a simple combinatorial hash: it is deterministic but neither cryptographic nor
    /// collision resistant.
    pub fn hash(name: &Name) -> usize {
        let size = SIZE as u128;
        let hash = name
            .as_bytes()
            .iter()
            .fold(0_u128, |acc, &byte| (acc + byte as u128) * byte as u128 % size);

        // The hash is reduced modulo SIZE, so it always fits back into a usize.
        hash as usize
    }

    /// Moves `record` into the slot its name hashes to, returning the index of that slot.
    ///
    /// If the slot is already occupied, by any name, nothing is overwritten and the record is
    /// returned inside the [`Occupied`] error.
    pub fn insert(&mut self, record: Record<P>) -> Result<usize, Occupied<P>> {
        let index = Self::hash(&record.name);

        if let Some(occupant) = self.slots[index].as_ref().map(|existing| existing.name) {
            debug!(index, name = %record.name, %occupant, "insert rejected, slot occupied");
            return Err(Occupied { index, occupant, record });
        }

        trace!(index, name = %record.name, "record inserted");
        self.slots[index] = Some(record);
        self.len += 1;
        Ok(index)
    }

    /// Removes and returns the record with the name of `key`, where `key` is a [`Name`] or
    /// another [`Record`]. Only the slot the name hashes to is checked, and its occupant must have
    /// exactly the same name.
    pub fn delete<K: AsRef<Name> + ?Sized>(&mut self, key: &K) -> Result<Record<P>, DeleteError> {
        let name = key.as_ref();
        let index = Self::hash(name);

        match self.slots[index].as_ref().map(|existing| existing.name) {
            None => {
                debug!(index, %name, "delete rejected, slot empty");
                Err(DeleteError::EmptySlot { index })
            },
            Some(occupant) if occupant != *name => {
                debug!(index, %name, %occupant, "delete rejected, name mismatch");
                Err(DeleteError::NameMismatch { index, occupant })
            },
            Some(_) => {
                trace!(index, %name, "record deleted");
                self.len -= 1;
                // UNREACHABLE: The slot was just checked to be occupied.
                Ok(self.slots[index].take().unreachable())
            },
        }
    }

    /// Returns the first record, in slot order, whose name matches `key`. Every slot is scanned.
    pub fn lookup<K: AsRef<Name> + ?Sized>(&self, key: &K) -> Option<&Record<P>> {
        let name = key.as_ref();
        self.slots.iter().flatten().find(|record| record.name == *name)
    }

    /// Returns the index of the first slot whose record's name matches `key`. Every slot is
    /// scanned.
    pub fn find<K: AsRef<Name> + ?Sized>(&self, key: &K) -> Option<usize> {
        let name = key.as_ref();
        self.slots.iter().position(|slot| match slot {
            Some(record) => record.name == *name,
            None => false,
        })
    }

    /// Returns the record in the slot at `index`, or None if the slot is empty or doesn't exist.
    pub fn slot(&self, index: usize) -> Option<&Record<P>> {
        self.slots.get(index)?.as_ref()
    }

    /// Empties every slot, dropping the records. Calling this on an empty table does nothing.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over the occupied slots, as `(index, record)` pairs in slot order.
    pub fn iter(&self) -> Iter<'_, P> {
        self.into_iter()
    }
}

impl<P, const SIZE: usize> Default for FixedHashTable<P, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone, const SIZE: usize> Clone for FixedHashTable<P, SIZE> {
    fn clone(&self) -> Self {
        FixedHashTable {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl<P: Debug, const SIZE: usize> Debug for FixedHashTable<P, SIZE> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedHashTable")
            .field(
                "slots",
                &DebugIter(self.slots.iter().map(|slot| DebugRaw(match slot {
                    Some(Record { name, payload }) => format!("({name:?}: {payload:?})"),
                    None => "-".into(),
                }))),
            )
            .field("len", &self.len)
            .field("size", &SIZE)
            .finish()
    }
}

/// Lists every slot on its own line with its index and occupant, `-` marking empty slots.
impl<P, const SIZE: usize> Display for FixedHashTable<P, SIZE> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = (SIZE - 1).to_string().len();
        for (index, slot) in self.slots.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            match slot {
                Some(record) => write!(f, "[{index:>width$}] {}", record.name)?,
                None => write!(f, "[{index:>width$}] -")?,
            }
        }
        Ok(())
    }
}
