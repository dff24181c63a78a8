//! Hash based collections. At the moment this is only [`FixedHashTable`], a table with a fixed
//! number of slots that rejects collisions instead of resolving them.

pub mod table;

#[doc(inline)]
pub use table::{FixedHashTable, Name, Record};
