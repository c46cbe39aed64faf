use log::debug;

use super::types::{Node, NodeId, Sequence, Successors};
use crate::detector::locate_cycle_brent;

/// Flat storage pool for sequence nodes
///
/// Every node of every sequence built through an arena lives in its `nodes`
/// vector; handles stay valid for the lifetime of the arena.
///
/// Accessors taking a [`NodeId`] panic when handed a handle that this arena
/// did not allocate.
#[derive(Debug, Clone)]
pub struct SequenceArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for SequenceArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequenceArena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Build a sequence from `values`, in order, terminated by the sentinel
    ///
    /// Empty input returns [`Sequence::EMPTY`] without allocating.
    pub fn make_sequence<I>(&mut self, values: I) -> Sequence
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.nodes.len();
        for value in values {
            let next = NodeId::new(self.nodes.len() + 1);
            self.nodes.push(Node {
                value,
                next: Some(next),
            });
        }

        let end = self.nodes.len();
        if end == start {
            return Sequence::EMPTY;
        }
        self.nodes[end - 1].next = None;

        debug!(
            "built sequence of {} nodes starting at {}",
            end - start,
            NodeId::new(start)
        );
        Sequence::from(NodeId::new(start))
    }

    /// Prepend a single node holding `value` in front of `rest`
    pub fn pair(&mut self, value: T, rest: Sequence) -> Sequence {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            value,
            next: rest.head(),
        });
        Sequence::from(id)
    }

    /// Successor of `node`, `None` for the sentinel
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].next
    }

    pub fn value_of(&self, node: NodeId) -> &T {
        &self.nodes[node.index()].value
    }

    pub fn node(&self, node: NodeId) -> Option<&Node<T>> {
        self.nodes.get(node.index())
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    /// Total number of nodes allocated, across all sequences
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node reached after `position` steps from the head
    ///
    /// The walk is bounded by `position`, so this is safe on cyclic input:
    /// positions past the cycle entry wrap around the loop.
    pub fn node_at(&self, seq: Sequence, position: usize) -> Option<NodeId> {
        let mut current = seq.head()?;
        for _ in 0..position {
            current = self.next(current)?;
        }
        Some(current)
    }

    /// Iterate the distinct nodes of `seq` in order
    ///
    /// Stops at the sentinel, or right before the first node that would be
    /// visited a second time.
    pub fn walk(&self, seq: Sequence) -> Walk<'_, T> {
        let remaining = locate_cycle_brent(self, seq).map(|info| info.node_count());
        Walk {
            arena: self,
            current: seq.head(),
            remaining,
        }
    }

    /// Payloads of the distinct nodes of `seq`, in order
    pub fn values(&self, seq: Sequence) -> impl Iterator<Item = &T> + '_ {
        self.walk(seq).map(move |id| self.value_of(id))
    }

    pub(crate) fn set_next(&mut self, node: NodeId, next: Option<NodeId>) {
        self.nodes[node.index()].next = next;
    }
}

impl<T> Successors for SequenceArena<T> {
    fn successor(&self, node: NodeId) -> Option<NodeId> {
        self.next(node)
    }
}

/// Iterator returned by [`SequenceArena::walk`]
pub struct Walk<'a, T> {
    arena: &'a SequenceArena<T>,
    current: Option<NodeId>,
    remaining: Option<usize>,
}

impl<T> Iterator for Walk<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        let current = self.current?;
        self.current = self.arena.next(current);
        Some(current)
    }
}
