use std::collections::HashMap;
use std::fmt::Display;

use log::debug;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::detector::{CycleInfo, locate_cycle_brent};
use crate::error::TurtleError;
use crate::graph::{LinkKind, SequenceNode};
use crate::sequence::{NodeId, Sequence, SequenceArena};

pub type SequenceGraph = DiGraph<SequenceNode, LinkKind>;

/// Exports a linked sequence into a petgraph graph
///
/// Every distinct reachable node becomes one graph node; every successor link
/// becomes one edge, including the link that closes a loop.
pub struct SequenceGraphBuilder {
    graph: SequenceGraph,
    cycle: Option<CycleInfo>,
}

impl Default for SequenceGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            cycle: None,
        }
    }

    pub fn build_sequence_graph<T>(
        &mut self,
        arena: &SequenceArena<T>,
        seq: Sequence,
    ) -> Result<(), TurtleError>
    where
        T: Display,
    {
        self.graph.clear();
        self.cycle = locate_cycle_brent(arena, seq);

        let mut indices: HashMap<NodeId, NodeIndex> = HashMap::new();
        let mut previous: Option<NodeIndex> = None;

        for (position, id) in arena.walk(seq).enumerate() {
            let index = self.graph.add_node(SequenceNode::new(
                id,
                position,
                arena.value_of(id).to_string(),
            ));
            indices.insert(id, index);

            if let Some(previous) = previous {
                self.graph.add_edge(previous, index, LinkKind::Forward);
            }
            previous = Some(index);
        }

        if let Some(cycle) = self.cycle {
            let entry = indices.get(&cycle.entry).copied().ok_or_else(|| {
                TurtleError::GraphError {
                    message: format!("Cycle entry {} was not visited", cycle.entry),
                }
            })?;
            let last = previous.ok_or_else(|| TurtleError::GraphError {
                message: "Cyclic sequence produced no nodes".to_string(),
            })?;
            self.graph.add_edge(last, entry, LinkKind::Back);
        }

        debug!(
            "exported sequence graph with {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(())
    }

    pub fn graph(&self) -> &SequenceGraph {
        &self.graph
    }

    /// Cycle located while building, if any
    pub fn cycle(&self) -> Option<&CycleInfo> {
        self.cycle.as_ref()
    }
}

/// Independent cycle check on an exported graph, via petgraph's DFS
pub fn graph_has_cycle(graph: &SequenceGraph) -> bool {
    is_cyclic_directed(graph)
}
