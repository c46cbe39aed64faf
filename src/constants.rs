//! Configuration constants for teleporting-turtle
//!
//! This module contains the defaults and tunables used throughout the
//! application. Most of them can be overridden through command line flags or
//! the matching `TELEPORTING_TURTLE_*` environment variables.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the turtle animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🐢    ", // Resting
        "🐢·   ", // First step
        "🐢··  ", // Second step
        "🐢··· ", // Third step
        "🐢····", // Ready to teleport
        "  ✨🐢", // Teleported
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph format for the spectacle command
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Randomized agreement runner defaults
pub mod carousel {
    /// Number of random sequences checked per run
    pub const DEFAULT_TRIALS: usize = 1000;

    /// Upper bound on the length of each random sequence
    pub const DEFAULT_MAX_LEN: usize = 64;

    /// Largest accepted `--max-len`; every trial allocates up to this many nodes
    pub const MAX_MAX_LEN: usize = 1_000_000;

    /// Seed of the first trial; trial `i` uses `DEFAULT_SEED + i`
    pub const DEFAULT_SEED: u64 = 0x7e1e_7027;
}
