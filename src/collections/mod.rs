//! Classic container types, each selectable through a Cargo feature of the same name.
//!
//! # Purpose
//! These types exist to work through the classic data structures properly: pointer-linked
//! sequences with ownership that flows in one direction, fixed-size tables with an explicit
//! collision policy, and bounded buffers that refuse rather than overwrite.

#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "stack")]
pub mod stack;
