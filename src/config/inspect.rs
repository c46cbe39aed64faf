//! Inspect command configuration

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::detector::Algorithm;
use crate::fixture::SequenceSource;

/// Configuration for the inspect command
///
/// This struct contains all options for building a sequence and reporting
/// whether it loops.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Where the sequence comes from
    pub source: SequenceSource,
    /// Output format for the report
    pub format: OutputFormat,
    /// Detector(s) to run
    pub algorithm: Algorithm,
    /// Whether to exit with error code if a cycle is found
    pub error_on_cycles: bool,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    source: Option<SequenceSource>,
    format: Option<OutputFormat>,
    algorithm: Option<Algorithm>,
    error_on_cycles: Option<bool>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: SequenceSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, crate::error::TurtleError> {
        Ok(InspectConfig {
            source: self.source.ok_or_else(|| missing_field("source"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            algorithm: self.algorithm.unwrap_or_default(),
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing_field("error_on_cycles"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::TurtleError;
    use crate::fixture::Fixture;

    #[test]
    fn test_build_with_default_algorithm() {
        let config = InspectConfig::builder()
            .with_source(SequenceSource::Inline(Fixture::default()))
            .with_format(OutputFormat::Json)
            .with_error_on_cycles(true)
            .build()
            .unwrap();

        assert_eq!(config.algorithm, Algorithm::Both);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.error_on_cycles);
    }

    #[test]
    fn test_missing_source() {
        let result = InspectConfig::builder()
            .with_format(OutputFormat::Human)
            .with_error_on_cycles(false)
            .build();

        match result {
            Err(TurtleError::ConfigurationError { message }) => {
                assert_eq!(message, "Missing required field: source");
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }
}
