//! Last-in first-out collections. [`ArrayStack`] stores its values inline with a capacity fixed at
//! compile time, [`LinkedStack`] grows one node at a time.

mod array_stack;
mod linked_stack;
mod tests;

pub use array_stack::*;
pub use linked_stack::*;
