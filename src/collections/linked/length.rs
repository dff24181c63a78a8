use std::num::NonZero;

/// The length of a list that holds at least one node. Empty lists don't have a Length at all, so
/// a full list can never report zero elements.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn checked_add(self, other: usize) -> Option<Length> {
        match self.0.checked_add(other) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    /// Returns None if the result would be zero (or less), which means the list becomes empty.
    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(res) => match NonZero::new(res) {
                Some(res) => Some(Length(res)),
                None => None,
            },
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn last_index(self) -> usize {
        self.0.get() - 1
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
