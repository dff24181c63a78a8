//! Node-based list types. [`SinglyLinkedList`] only links forward, [`DoublyLinkedList`] keeps an
//! additional back link per node for `O(1)` removal from the tail and backward traversal.
//!
//! Both lists own their nodes in the forward direction: dropping or clearing a list walks from
//! the head to the tail, releasing each node exactly once. Back links (and the tail pointer) only
//! observe nodes.
//!
//! Both lists hold raw node pointers, which makes them neither [`Send`] nor [`Sync`]. Share them
//! between threads by wrapping them in a lock, if at all.

pub mod doubly;
pub mod error;
pub mod singly;

pub(crate) mod length;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use error::AppendAtError;
#[doc(inline)]
pub use singly::SinglyLinkedList;
