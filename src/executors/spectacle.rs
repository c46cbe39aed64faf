//! Spectacle command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::SpectacleConfig;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, SequenceGraphBuilder};

pub struct SpectacleExecutor;

impl CommandExecutor for SpectacleExecutor {
    type Config = SpectacleConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} sequence graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let (arena, seq) = config
            .source
            .load()
            .wrap_err("Failed to load sequence")?
            .materialize()
            .wrap_err("Failed to build sequence")?;

        let mut graph_builder = SequenceGraphBuilder::new();
        graph_builder
            .build_sequence_graph(&arena, seq)
            .wrap_err("Failed to build sequence graph")?;

        let cycle = if config.highlight_cycles {
            graph_builder.cycle()
        } else {
            None
        };

        let renderer = GraphRenderer::new(config.highlight_cycles);

        // Determine output destination
        let mut output_writer: Box<dyn Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        match config.format {
            GraphFormat::Ascii => {
                renderer
                    .render_ascii(graph_builder.graph(), cycle, output_writer.as_mut())
                    .wrap_err("Failed to render ASCII graph")?;
            }
            GraphFormat::Mermaid => {
                renderer
                    .render_mermaid(graph_builder.graph(), cycle, output_writer.as_mut())
                    .wrap_err("Failed to render Mermaid graph")?;
            }
            GraphFormat::Dot => {
                renderer
                    .render_dot(graph_builder.graph(), cycle, output_writer.as_mut())
                    .wrap_err("Failed to render DOT graph")?;
            }
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
