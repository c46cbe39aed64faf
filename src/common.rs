//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::fixture::{Fixture, SequenceSource};

/// Arguments describing the sequence a command works on
#[derive(Args, Debug, Clone)]
pub struct SequenceArgs {
    /// Values of the sequence, head first
    #[arg(value_name = "VALUES", conflicts_with = "fixture")]
    pub values: Vec<String>,

    /// Link the tail back to the node at this zero-based position
    #[arg(
        long,
        value_name = "POSITION",
        conflicts_with = "fixture",
        env = "TELEPORTING_TURTLE_LOOP_TO"
    )]
    pub loop_to: Option<usize>,

    /// Read values and loop position from a TOML fixture file
    #[arg(long, value_name = "FILE", env = "TELEPORTING_TURTLE_FIXTURE")]
    pub fixture: Option<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "TELEPORTING_TURTLE_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl SequenceArgs {
    /// Fixture file if one was given, inline values otherwise
    pub fn get_source(&self) -> SequenceSource {
        match &self.fixture {
            Some(path) => SequenceSource::File(path.clone()),
            None => SequenceSource::Inline(Fixture::new(self.values.clone(), self.loop_to)),
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::TurtleError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::TurtleError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::TurtleError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(name: &str) -> crate::error::TurtleError {
    crate::error::TurtleError::ConfigurationError {
        message: format!("Missing required field: {name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_args_inline_source() {
        let args = SequenceArgs {
            values: vec!["a".to_string(), "b".to_string()],
            loop_to: Some(0),
            fixture: None,
        };

        assert_eq!(
            args.get_source(),
            SequenceSource::Inline(Fixture::new(
                vec!["a".to_string(), "b".to_string()],
                Some(0)
            ))
        );
    }

    #[test]
    fn test_sequence_args_fixture_source() {
        let args = SequenceArgs {
            values: vec![],
            loop_to: None,
            fixture: Some(PathBuf::from("/tmp/seq.toml")),
        };

        assert_eq!(
            args.get_source(),
            SequenceSource::File(PathBuf::from("/tmp/seq.toml"))
        );
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            missing_field("format").to_string(),
            "Configuration error: Missing required field: format"
        );
    }
}
