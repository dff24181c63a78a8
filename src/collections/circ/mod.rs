//! Circular (ring buffer) collections. [`CircularQueue`] reuses a fixed block of slots by wrapping
//! its read and write cursors around the end of the buffer.

mod circular_queue;
mod iter;
mod tests;

pub use circular_queue::*;
pub use iter::*;
