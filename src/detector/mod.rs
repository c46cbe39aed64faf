//! # Cycle Detection Module
//!
//! This module implements constant-space loop detection over a singly-linked
//! [`Sequence`](crate::sequence::Sequence).
//!
//! ## Algorithms
//!
//! - **Floyd** ("tortoise and hare"): two cursors moving one and two nodes per
//!   round. They meet inside the cycle if there is one.
//! - **Brent** ("teleporting turtle"): the rabbit runs ahead in windows that
//!   double in length, and the turtle jumps to the rabbit at the end of each
//!   window. Fewer cursor advances on long tails.
//!
//! Both compare cursors by [`NodeId`](crate::sequence::NodeId) and never
//! write to a node. Both must agree on every input. A third, payload-based
//! variant ([`has_cycle_by_value`]) is kept for sequences with unique values.
//!
//! ## Key Components
//!
//! - **CycleDetector**: runs one or both algorithms, records traversal
//!   statistics and locates the cycle
//! - **CycleInfo**: entry node, tail length and period of a located cycle
//!
//! ## Example
//!
//! ```
//! use teleporting_turtle::detector::{Algorithm, CycleDetector};
//! use teleporting_turtle::sequence::SequenceArena;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut arena = SequenceArena::new();
//! let seq = arena.make_sequence(["a", "b", "c", "d"]);
//!
//! // Point d back at b: a -> b -> c -> d -> b
//! let b = arena.node_at(seq, 1).unwrap();
//! arena.force_append(seq, b)?;
//!
//! let mut detector = CycleDetector::new(Algorithm::Both);
//! detector.detect(&arena, seq)?;
//!
//! assert!(detector.has_cycle());
//! let cycle = detector.cycle().unwrap();
//! assert_eq!(cycle.entry, b);
//! assert_eq!(cycle.tail_len, 1);
//! assert_eq!(cycle.period, 3);
//! # Ok(())
//! # }
//! ```

mod brent;
mod by_value;
mod detector_impl;
mod floyd;

pub use brent::{has_cycle_brent, locate_cycle_brent};
pub use by_value::has_cycle_by_value;
pub use detector_impl::*;
pub use floyd::{has_cycle_floyd, locate_cycle_floyd};
