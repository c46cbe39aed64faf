//! # Sequence Module
//!
//! This module provides the singly-linked node sequence that the cycle
//! detectors traverse.
//!
//! ## Representation
//!
//! Nodes live in a [`SequenceArena`] and are addressed by stable [`NodeId`]
//! handles. A node's successor is a handle rather than an owning pointer, so a
//! tail can be linked back into its own sequence without fighting ownership.
//! The arena owns all storage; a [`Sequence`] is just a `Copy` handle to a head
//! node, or [`Sequence::EMPTY`].
//!
//! ## Example
//!
//! ```
//! use teleporting_turtle::sequence::{Sequence, SequenceArena};
//!
//! let mut arena = SequenceArena::new();
//! let seq = arena.make_sequence([1, 2, 3]);
//!
//! let head = seq.head().unwrap();
//! assert_eq!(*arena.value_of(head), 1);
//!
//! let second = arena.next(head).unwrap();
//! assert_eq!(*arena.value_of(second), 2);
//!
//! assert!(arena.make_sequence(Vec::<i32>::new()).is_empty());
//! assert_eq!(Sequence::EMPTY.head(), None);
//! ```

mod arena;
mod types;

pub use arena::{SequenceArena, Walk};
pub use types::{Node, NodeId, Sequence, Successors};
