use super::Name;

/// An entry of a [`FixedHashTable`](super::FixedHashTable): a [`Name`] used as the key and an
/// arbitrary payload that the table never inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<P> {
    pub name: Name,
    pub payload: P,
}

impl<P> Record<P> {
    pub const fn new(name: Name, payload: P) -> Record<P> {
        Record {
            name,
            payload,
        }
    }
}

impl<P> AsRef<Name> for Record<P> {
    fn as_ref(&self) -> &Name {
        &self.name
    }
}
