//! # Graph Export and Rendering Module
//!
//! This module exports a linked sequence into a petgraph graph and renders it
//! for humans. The exported graph also serves as an independent oracle:
//! petgraph's own cycle check must agree with the constant-space detectors.
//!
//! ## Components
//!
//! - **SequenceGraphBuilder**: walks a sequence and builds the graph, including
//!   the back-edge that closes a loop
//! - **GraphRenderer**: renders the graph as ASCII, Mermaid or DOT, optionally
//!   highlighting the cycle
//!
//! ## Example
//!
//! ```
//! use teleporting_turtle::graph::{GraphRenderer, SequenceGraphBuilder};
//! use teleporting_turtle::sequence::SequenceArena;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut arena = SequenceArena::new();
//! let seq = arena.make_sequence(["head", "middle", "tail"]);
//! arena.force_append(seq, seq)?;
//!
//! let mut builder = SequenceGraphBuilder::new();
//! builder.build_sequence_graph(&arena, seq)?;
//!
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_dot(builder.graph(), builder.cycle(), &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("loop"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::{SequenceGraph, SequenceGraphBuilder, graph_has_cycle};
pub use renderer::GraphRenderer;
pub use types::{LinkKind, SequenceNode};
