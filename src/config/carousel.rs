//! Carousel command configuration

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::constants::carousel::MAX_MAX_LEN;
use crate::error::TurtleError;

/// Configuration for the carousel command
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Number of random sequences to check
    pub trials: usize,
    /// Maximum length of each random sequence
    pub max_len: usize,
    /// Seed of the first trial
    pub seed: u64,
    /// Output format for the summary
    pub format: OutputFormat,
}

impl CarouselConfig {
    pub fn builder() -> CarouselConfigBuilder {
        CarouselConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CarouselConfigBuilder {
    trials: Option<usize>,
    max_len: Option<usize>,
    seed: Option<u64>,
    format: Option<OutputFormat>,
}

impl CarouselConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for CarouselConfigBuilder {
    type Config = CarouselConfig;

    fn build(self) -> Result<Self::Config, TurtleError> {
        let trials = self.trials.ok_or_else(|| missing_field("trials"))?;
        if trials == 0 {
            return Err(TurtleError::ConfigurationError {
                message: "trials must be at least 1".to_string(),
            });
        }

        let max_len = self.max_len.ok_or_else(|| missing_field("max_len"))?;
        if max_len > MAX_MAX_LEN {
            return Err(TurtleError::ConfigurationError {
                message: format!("max_len must be at most {MAX_MAX_LEN}, got {max_len}"),
            });
        }

        Ok(CarouselConfig {
            trials,
            max_len,
            seed: self.seed.ok_or_else(|| missing_field("seed"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_zero_trials_rejected() {
        let result = CarouselConfig::builder()
            .with_trials(0)
            .with_max_len(10)
            .with_seed(1)
            .with_format(OutputFormat::Human)
            .build();

        assert!(matches!(result, Err(TurtleError::ConfigurationError { .. })));
    }

    #[test]
    fn test_oversized_max_len_rejected() {
        let result = CarouselConfig::builder()
            .with_trials(1)
            .with_max_len(usize::MAX)
            .with_seed(3)
            .with_format(OutputFormat::Human)
            .build();

        assert!(matches!(
            result,
            Err(TurtleError::ConfigurationError { message }) if message.contains("max_len")
        ));
    }

    #[test]
    fn test_max_len_at_limit_accepted() {
        let config = CarouselConfig::builder()
            .with_trials(1)
            .with_max_len(MAX_MAX_LEN)
            .with_seed(3)
            .with_format(OutputFormat::Human)
            .build()
            .unwrap();

        assert_eq!(config.max_len, MAX_MAX_LEN);
    }

    #[test]
    fn test_build() {
        let config = CarouselConfig::builder()
            .with_trials(5)
            .with_max_len(10)
            .with_seed(99)
            .with_format(OutputFormat::Json)
            .build()
            .unwrap();

        assert_eq!(config.trials, 5);
        assert_eq!(config.seed, 99);
    }
}
