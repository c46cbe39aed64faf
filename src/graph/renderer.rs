use std::io::Write;

use miette::Result;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::detector::CycleInfo;
use crate::error::TurtleError;
use crate::graph::{LinkKind, SequenceGraph};
use crate::utils::string::pluralize;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(TurtleError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(TurtleError::from)
    };
}

pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_ascii(
        &self,
        graph: &SequenceGraph,
        cycle: Option<&CycleInfo>,
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.node_count() == 0 {
            writeln_out!(output, "Empty sequence: nothing to visualize")?;
            return Ok(());
        }

        writeln_out!(
            output,
            "\n🐢 Sequence of {} {}\n",
            graph.node_count(),
            pluralize("node", graph.node_count())
        )?;

        let nodes = ordered_nodes(graph);
        for (i, &index) in nodes.iter().enumerate() {
            let node = &graph[index];
            let marker = match cycle {
                Some(info) if self.highlight_cycles && node.id == info.entry => " ⟲ loop entry",
                Some(info) if self.highlight_cycles && info.contains_position(node.position) => {
                    " ⚠️  IN CYCLE"
                }
                _ => "",
            };

            writeln_out!(
                output,
                "[{}] {} ({}){}",
                node.position,
                node.label(),
                node.id,
                marker
            )?;

            if i + 1 < nodes.len() {
                writeln_out!(output, " │")?;
            }
        }

        match back_edge(graph) {
            Some((_, target)) => {
                let entry = &graph[target];
                writeln_out!(
                    output,
                    " └──→ back to [{}] {}",
                    entry.position,
                    entry.label()
                )?;
            }
            None => writeln_out!(output, " └── (end)")?,
        }

        if cycle.is_some() && self.highlight_cycles {
            writeln_out!(output, "\n⚠️  = Part of the cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &SequenceGraph,
        cycle: Option<&CycleInfo>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph LR")?;

        for index in ordered_nodes(graph) {
            let node = &graph[index];
            let node_id = self.mermaid_id(node.position);
            let in_cycle = self.in_cycle(cycle, node.position);

            if in_cycle {
                writeln_out!(output, "    {}((\"{}\"))", node_id, mermaid_label(node.label()))?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {}[\"{}\"]", node_id, mermaid_label(node.label()))?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        let mut link_index = 0;
        for (source, target, kind) in ordered_edges(graph) {
            let from = self.mermaid_id(graph[source].position);
            let to = self.mermaid_id(graph[target].position);

            match kind {
                LinkKind::Forward => writeln_out!(output, "    {} --> {}", from, to)?,
                LinkKind::Back => {
                    writeln_out!(output, "    {} -.->|loop| {}", from, to)?;
                    if self.highlight_cycles {
                        writeln_out!(
                            output,
                            "    linkStyle {} stroke:{},stroke-width:3px",
                            link_index,
                            colors::CYCLE_EDGE
                        )?;
                    }
                }
            }
            link_index += 1;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &SequenceGraph,
        cycle: Option<&CycleInfo>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph sequence {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for index in ordered_nodes(graph) {
            let node = &graph[index];
            let (fill_color, stroke_color) = if self.in_cycle(cycle, node.position) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };

            writeln_out!(
                output,
                r#"    "n{}" [label="{}", style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                node.position,
                escape(node.label()),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for (source, target, kind) in ordered_edges(graph) {
            let from = graph[source].position;
            let to = graph[target].position;

            match kind {
                LinkKind::Back if self.highlight_cycles => writeln_out!(
                    output,
                    r#"    "n{}" -> "n{}" [label="loop", style=dashed, color="{}", penwidth=3];"#,
                    from,
                    to,
                    colors::CYCLE_EDGE
                )?,
                LinkKind::Back => writeln_out!(
                    output,
                    r#"    "n{}" -> "n{}" [style=dashed, color="{}", penwidth=2];"#,
                    from,
                    to,
                    colors::NORMAL_EDGE
                )?,
                LinkKind::Forward => writeln_out!(
                    output,
                    r#"    "n{}" -> "n{}" [color="{}", penwidth=2];"#,
                    from,
                    to,
                    colors::NORMAL_EDGE
                )?,
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn in_cycle(&self, cycle: Option<&CycleInfo>, position: usize) -> bool {
        self.highlight_cycles && cycle.is_some_and(|info| info.contains_position(position))
    }

    fn mermaid_id(&self, position: usize) -> String {
        format!("n{position}")
    }
}

fn ordered_nodes(graph: &SequenceGraph) -> Vec<NodeIndex> {
    let mut nodes: Vec<NodeIndex> = graph.node_indices().collect();
    nodes.sort_by_key(|&index| graph[index].position);
    nodes
}

fn ordered_edges(graph: &SequenceGraph) -> Vec<(NodeIndex, NodeIndex, LinkKind)> {
    let mut edges: Vec<_> = graph
        .edge_references()
        .map(|edge| (edge.source(), edge.target(), *edge.weight()))
        .collect();
    edges.sort_by_key(|&(source, _, kind)| (kind, graph[source].position));
    edges
}

fn back_edge(graph: &SequenceGraph) -> Option<(NodeIndex, NodeIndex)> {
    graph
        .edge_references()
        .find(|edge| *edge.weight() == LinkKind::Back)
        .map(|edge| (edge.source(), edge.target()))
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

fn mermaid_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SequenceGraphBuilder;
    use crate::sequence::SequenceArena;

    fn looped_builder() -> SequenceGraphBuilder {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([1, 2, 3]);
        let second = arena.node_at(seq, 1).unwrap();
        arena.force_append(seq, second).unwrap();

        let mut builder = SequenceGraphBuilder::new();
        builder.build_sequence_graph(&arena, seq).unwrap();
        builder
    }

    #[test]
    fn test_dot_marks_back_edge() {
        let builder = looped_builder();
        let renderer = GraphRenderer::new(true);

        let mut output = Vec::new();
        renderer
            .render_dot(builder.graph(), builder.cycle(), &mut output)
            .unwrap();
        let dot = String::from_utf8(output).unwrap();

        assert!(dot.starts_with("digraph sequence {"));
        assert!(dot.contains(r#""n2" -> "n1" [label="loop""#));
        assert!(dot.contains(r#""n0" -> "n1""#));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_mermaid_without_highlight() {
        let builder = looped_builder();
        let renderer = GraphRenderer::new(false);

        let mut output = Vec::new();
        renderer
            .render_mermaid(builder.graph(), builder.cycle(), &mut output)
            .unwrap();
        let mermaid = String::from_utf8(output).unwrap();

        assert!(mermaid.contains("n2 -.->|loop| n1"));
        assert!(!mermaid.contains("linkStyle"));
        assert!(!mermaid.contains(colors::CYCLE_NODE_FILL));
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape(r"a\"), r"a\\");
        assert_eq!(escape(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn test_dot_label_with_trailing_backslash() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence(["a\\"]);

        let mut builder = SequenceGraphBuilder::new();
        builder.build_sequence_graph(&arena, seq).unwrap();

        let mut output = Vec::new();
        GraphRenderer::new(true)
            .render_dot(builder.graph(), builder.cycle(), &mut output)
            .unwrap();
        let dot = String::from_utf8(output).unwrap();

        assert!(dot.contains(r#""n0" [label="a\\", style=filled"#), "{dot}");
    }
}
