//! Core sequence types
//!
//! This module contains the handle and node types shared by the arena, the
//! mutator and the detectors.

use std::fmt;

use serde::Serialize;

/// Stable handle to a node inside a [`SequenceArena`](super::SequenceArena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in its arena's allocation order
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One element of a sequence
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Successor handle, `None` for the empty terminator
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// Handle to the head of a sequence, or the empty sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sequence {
    head: Option<NodeId>,
}

impl Sequence {
    /// The empty sequence. Never equal to a sequence headed by a node.
    pub const EMPTY: Sequence = Sequence { head: None };

    pub fn head(self) -> Option<NodeId> {
        self.head
    }

    pub fn is_empty(self) -> bool {
        self.head.is_none()
    }
}

impl From<NodeId> for Sequence {
    fn from(node: NodeId) -> Self {
        Sequence { head: Some(node) }
    }
}

impl From<Option<NodeId>> for Sequence {
    fn from(head: Option<NodeId>) -> Self {
        Sequence { head }
    }
}

/// Read-only access to the successor relation
///
/// The detectors are generic over this trait so they only ever see `next`
/// links and can never write to a node.
pub trait Successors {
    /// Successor of `node`, or `None` when `node` is the last one
    fn successor(&self, node: NodeId) -> Option<NodeId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_is_distinct_from_any_node() {
        let node = NodeId::new(0);
        assert!(Sequence::EMPTY.is_empty());
        assert_ne!(Sequence::EMPTY, Sequence::from(node));
        assert_eq!(Sequence::default(), Sequence::EMPTY);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(42).to_string(), "#42");
    }

    #[test]
    fn test_sequence_from_option() {
        assert_eq!(Sequence::from(None), Sequence::EMPTY);
        assert_eq!(
            Sequence::from(Some(NodeId::new(3))).head(),
            Some(NodeId::new(3))
        );
    }
}
