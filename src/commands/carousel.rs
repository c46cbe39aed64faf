//! Carousel command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CarouselConfig;
use crate::error::TurtleError;

impl FromCommand for CarouselConfig {
    fn from_command(command: Commands) -> Result<Self, TurtleError> {
        match command {
            Commands::Carousel {
                trials,
                max_len,
                seed,
                format,
            } => CarouselConfig::builder()
                .with_trials(trials)
                .with_max_len(max_len)
                .with_seed(seed)
                .with_format(format.format)
                .build(),
            _ => Err(TurtleError::ConfigurationError {
                message: "Invalid command type for CarouselConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CarouselConfig);

/// Execute the carousel command for randomized detector agreement checks
pub fn execute_carousel_command(command: Commands) -> Result<()> {
    let config = CarouselConfig::from_command(command)
        .wrap_err("Failed to parse carousel command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::carousel::CarouselExecutor;
    CarouselExecutor::execute(config)
}
