use std::fmt::{self, Debug, Display, Formatter};
use std::str::{self, FromStr};

use super::NameTooLong;
use crate::util::option::OptionExtension;

/// The maximum length of a [`Name`], in bytes.
pub const NAME_SIZE: usize = 20;

/// A short, bounded-length name stored inline, used as the key of a
/// [`FixedHashTable`](super::FixedHashTable).
///
/// Unused bytes are always zero, so two names are equal exactly when their contents are.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name {
    pub(crate) bytes: [u8; NAME_SIZE],
    pub(crate) len: usize,
}

impl Name {
    /// Creates a Name from the provided string, failing if it is longer than [`NAME_SIZE`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use classic_containers::collections::hash::Name;
    /// let name = Name::new("Berkay").unwrap();
    /// assert_eq!(name.as_str(), "Berkay");
    /// assert!(Name::new("A name that is far too long").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Name, NameTooLong> {
        let len = name.len();
        if len > NAME_SIZE {
            return Err(NameTooLong { len, max: NAME_SIZE });
        }

        let mut bytes = [0; NAME_SIZE];
        bytes[..len].copy_from_slice(name.as_bytes());
        Ok(Name { bytes, len })
    }

    /// Returns the length of the name in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the name is the empty string.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn as_str(&self) -> &str {
        // UNREACHABLE: Names are only ever constructed from a whole &str.
        str::from_utf8(self.as_bytes()).ok().unreachable()
    }
}

impl AsRef<Name> for Name {
    fn as_ref(&self) -> &Name {
        self
    }
}

impl TryFrom<&str> for Name {
    type Error = NameTooLong;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Name::new(value)
    }
}

impl FromStr for Name {
    type Err = NameTooLong;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::new(s)
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
