//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectConfig;
use crate::error::TurtleError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, TurtleError> {
        match command {
            Commands::Inspect {
                sequence,
                format,
                algorithm,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_source(sequence.get_source())
                .with_format(format.format)
                .with_algorithm(algorithm)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(TurtleError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for detecting a loop in one sequence
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};
    use crate::detector::Algorithm;
    use crate::fixture::{Fixture, SequenceSource};

    #[test]
    fn test_inspect_config_from_command() {
        let cli = Cli::try_parse_from([
            "teleporting-turtle",
            "inspect",
            "x",
            "y",
            "--loop-to",
            "0",
            "--format",
            "json",
        ])
        .unwrap();

        let config = InspectConfig::try_from(cli.command).unwrap();

        assert_eq!(
            config.source,
            SequenceSource::Inline(Fixture::new(vec!["x".into(), "y".into()], Some(0)))
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.algorithm, Algorithm::Both);
    }

    #[test]
    fn test_wrong_command_type() {
        let cli = Cli::try_parse_from(["teleporting-turtle", "carousel"]).unwrap();

        assert!(matches!(
            InspectConfig::from_command(cli.command),
            Err(TurtleError::ConfigurationError { .. })
        ));
    }
}
