//! Command implementations for teleporting-turtle CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Send the tortoise and the hare down a sequence
//! - spectacle: Draw the sequence and its loop
//! - carousel: Spin up random sequences and check every detector agrees

pub mod carousel;
pub mod inspect;
pub mod spectacle;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
        Commands::Carousel { .. } => carousel::execute_carousel_command(command),
    }
}
