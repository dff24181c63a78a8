use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, IsVariant};

use super::{Name, Record};

/// A name was longer than the maximum length a [`Name`] can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTooLong {
    pub len: usize,
    pub max: usize,
}

impl Display for NameTooLong {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Name of {} bytes exceeds the maximum of {} bytes!", self.len, self.max)
    }
}

impl Error for NameTooLong {}

/// The slot that a record hashes to is already taken. The rejected record is handed back
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupied<P> {
    pub index: usize,
    pub occupant: Name,
    pub record: Record<P>,
}

impl<P> Occupied<P> {
    /// Consumes the error, returning the record that couldn't be inserted.
    pub fn into_record(self) -> Record<P> {
        self.record
    }
}

impl<P> Display for Occupied<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to insert {}, slot {} is already occupied by {}!",
            self.record.name, self.index, self.occupant
        )
    }
}

impl<P: Debug> Error for Occupied<P> {}

/// The reasons that a delete from a [`FixedHashTable`](super::FixedHashTable) can fail. The
/// table is left untouched in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum DeleteError {
    #[display("Slot {index} is empty!")]
    EmptySlot { index: usize },
    #[display("Slot {index} is occupied by {occupant}, not the requested name!")]
    NameMismatch { index: usize, occupant: Name },
}
