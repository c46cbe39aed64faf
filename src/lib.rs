//! # Teleporting Turtle - Constant-Space Cycle Detection
//!
//! Teleporting Turtle builds singly-linked sequences inside an arena, lets you
//! link a sequence's tail back into itself, and answers whether a sequence
//! ever reaches its terminator. Detection never allocates: Floyd's tortoise
//! and hare and Brent's teleporting turtle both use two cursors.
//!
//! ## Main Components
//!
//! - **Sequence**: Arena-backed nodes, handles and the empty sentinel
//! - **Mutator**: `force_append`, the only way to create a loop
//! - **Detector**: Floyd and Brent detection, plus cycle location
//! - **Graph**: Exports a sequence to petgraph and renders it
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Detecting a Loop
//!
//! ```
//! use teleporting_turtle::detector::{has_cycle_brent, has_cycle_floyd, locate_cycle_floyd};
//! use teleporting_turtle::sequence::{Sequence, SequenceArena};
//!
//! # fn main() -> miette::Result<()> {
//! let mut arena = SequenceArena::new();
//! let seq = arena.make_sequence(["a", "b", "c", "d"]);
//! assert!(!has_cycle_floyd(&arena, seq));
//!
//! // Link the tail back to "b"
//! let b = arena.node_at(seq, 1).unwrap();
//! arena.force_append(seq, b)?;
//!
//! assert!(has_cycle_floyd(&arena, seq));
//! assert!(has_cycle_brent(&arena, seq));
//!
//! let cycle = locate_cycle_floyd(&arena, seq).unwrap();
//! assert_eq!(cycle.entry, b);
//! assert_eq!(cycle.tail_len, 1);
//! assert_eq!(cycle.period, 3);
//!
//! // The empty sequence never loops
//! assert!(!has_cycle_floyd(&arena, Sequence::EMPTY));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Reporting
//!
//! ```
//! use teleporting_turtle::detector::{Algorithm, CycleDetector};
//! use teleporting_turtle::reports::{JsonReportGenerator, ReportGenerator};
//! use teleporting_turtle::sequence::SequenceArena;
//!
//! # fn main() -> miette::Result<()> {
//! let mut arena = SequenceArena::new();
//! let seq = arena.make_sequence(1..=3);
//! let head = arena.node_at(seq, 0).unwrap();
//! arena.force_append(seq, head)?;
//!
//! let mut detector = CycleDetector::new(Algorithm::Both);
//! detector.detect(&arena, seq)?;
//! assert!(detector.has_cycle());
//!
//! let json = JsonReportGenerator::new().generate_report(&detector)?;
//! assert!(json.contains("\"period\": 3"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Visualizing a Sequence
//!
//! ```
//! use teleporting_turtle::graph::{GraphRenderer, SequenceGraphBuilder};
//! use teleporting_turtle::sequence::SequenceArena;
//!
//! # fn main() -> miette::Result<()> {
//! let mut arena = SequenceArena::new();
//! let seq = arena.make_sequence(["x", "y", "z"]);
//! let y = arena.node_at(seq, 1).unwrap();
//! arena.force_append(seq, y)?;
//!
//! let mut builder = SequenceGraphBuilder::new();
//! builder.build_sequence_graph(&arena, seq)?;
//!
//! let mut dot = Vec::new();
//! GraphRenderer::new(true).render_dot(builder.graph(), builder.cycle(), &mut dot)?;
//! assert!(String::from_utf8_lossy(&dot).starts_with("digraph"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod carousel;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod fixture;
pub mod graph;
pub mod mutator;
pub mod reports;
pub mod sequence;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
