use derive_more::{Display, Error, From, IsVariant};

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// The reasons that a positional insert (`append_at`) can be refused. The list is left untouched
/// in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum AppendAtError {
    /// The list has no nodes, so there is no position to insert after.
    #[display("Unable to insert by index into an empty list!")]
    EmptyList,
    /// Index 0 is the head position, which is only reachable through `append_head`.
    #[display("Index 0 is the head of the list, use append_head instead!")]
    HeadIndex,
    /// The index is greater than the length of the list.
    #[from]
    IndexOutOfBounds(IndexOutOfBounds),
}
