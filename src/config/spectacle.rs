//! Spectacle command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;
use crate::fixture::SequenceSource;

/// Configuration for the spectacle command
#[derive(Debug, Clone)]
pub struct SpectacleConfig {
    /// Where the sequence comes from
    pub source: SequenceSource,
    /// Graph format
    pub format: GraphFormat,
    /// Output file, stdout when `None`
    pub output: Option<PathBuf>,
    /// Highlight the cycle in the rendered graph
    pub highlight_cycles: bool,
}

impl SpectacleConfig {
    pub fn builder() -> SpectacleConfigBuilder {
        SpectacleConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SpectacleConfigBuilder {
    source: Option<SequenceSource>,
    format: Option<GraphFormat>,
    output: Option<PathBuf>,
    highlight_cycles: Option<bool>,
}

impl SpectacleConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: SequenceSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for SpectacleConfigBuilder {
    type Config = SpectacleConfig;

    fn build(self) -> Result<Self::Config, crate::error::TurtleError> {
        Ok(SpectacleConfig {
            source: self.source.ok_or_else(|| missing_field("source"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output,
            highlight_cycles: self
                .highlight_cycles
                .ok_or_else(|| missing_field("highlight_cycles"))?,
        })
    }
}
