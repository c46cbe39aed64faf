//! Core graph types
//!
//! This module contains the node and edge weights of an exported sequence
//! graph.

use crate::sequence::NodeId;

/// A sequence node as seen by the graph renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceNode {
    /// Arena handle of the node
    pub id: NodeId,
    /// Steps from the head
    pub position: usize,
    /// Rendered payload
    pub label: String,
}

impl SequenceNode {
    pub fn new(id: NodeId, position: usize, label: impl Into<String>) -> Self {
        Self {
            id,
            position,
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Kind of successor link between two sequence nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LinkKind {
    /// Link to the node built right after this one
    Forward,
    /// Link from the last distinct node back to the cycle entry
    Back,
}
