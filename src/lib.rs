//! A collection of classic container types, written from scratch.
//!
//! # Purpose
//! Each container here is a standalone exercise in one data structure: singly and doubly linked
//! lists with index-addressable mutation, a fixed-capacity hash table, a circular queue and two
//! stacks. None of them depend on [`Vec`] or the standard collections for their storage.
//!
//! # Ownership
//! Every container exclusively owns what it stores. The linked lists own their nodes from head to
//! tail, with back links and tail pointers only observing, so teardown walks the list once and
//! releases each node exactly once. The hash table takes its records by value rather than
//! borrowing them from the caller.
//!
//! None of the containers are designed for concurrent use. The linked types hold raw pointers and
//! are neither [`Send`] nor [`Sync`], the others require `&mut` access for every mutation.
//!
//! # Error Handling
//! Running out of room, popping from something empty or indexing out of bounds is always
//! recoverable: these are reported through [`Option`]s or strongly typed [`Result`]s, and a
//! failed operation never modifies the container. Errors are plain structs implementing
//! [`Error`](std::error::Error), combined into enums where an operation can fail in more than one
//! way. A handful of convenience methods (such as `get`) panic instead, mirroring the standard
//! library, and each has a `try_` counterpart.
//!
//! Allocation failure is the one unrecoverable case. The linked types allocate nodes through a
//! single function, and the global allocator aborts if it can't satisfy the request.
//!
//! # Logging
//! Rejected operations emit [`tracing`] events at the `debug` level, successful table updates at
//! `trace`. No subscriber is installed by the library.
//!
//! # Features
//! Each container module is behind a feature of the same name: `linked`, `hash`, `circ` and
//! `stack` (which builds on `linked`). All of them are enabled by `collections-all`, the default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]

pub mod collections;

pub(crate) mod util;
