use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, SequenceArgs};
use crate::constants::carousel::{DEFAULT_MAX_LEN, DEFAULT_SEED, DEFAULT_TRIALS};
use crate::detector::Algorithm;

#[derive(Parser)]
#[command(
    name = "teleporting-turtle",
    about = "🐢 Tortoise, hare and teleporting turtle cycle detection",
    long_about = "teleporting-turtle builds singly-linked sequences, optionally links their tail \
                  back into themselves, and detects the resulting loop in constant space with \
                  Floyd's tortoise and hare and Brent's teleporting turtle.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send the tortoise and the hare down a sequence
    ///
    /// Builds the sequence, runs the selected detectors and reports whether
    /// the sequence loops, where the loop starts and how long it is.
    #[command(
        long_about = "Build a sequence from the given values (or a TOML fixture), optionally link \
                      its tail back to the node at --loop-to, and run Floyd's and/or Brent's \
                      detector over it. When both run, their answers must agree. The report \
                      includes the cycle entry, tail length and period when a loop exists, plus \
                      the number of cursor steps and comparisons each detector needed."
    )]
    Inspect {
        #[command(flatten)]
        sequence: SequenceArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Detector(s) to run
        #[arg(
            short,
            long,
            value_enum,
            default_value = "both",
            env = "TELEPORTING_TURTLE_ALGORITHM"
        )]
        algorithm: Algorithm,

        /// Exit with error code if a cycle is found
        #[arg(long, env = "TELEPORTING_TURTLE_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Draw the sequence and its loop
    ///
    /// Renders the sequence as ASCII art, a Mermaid diagram or a Graphviz DOT
    /// file, with the loop highlighted.
    #[command(
        long_about = "Export the sequence into a graph and render it. Every distinct node is drawn \
                      once; a looped sequence gets a dashed back-edge from its last distinct node \
                      to the cycle entry. Use --output to write the diagram to a file."
    )]
    Spectacle {
        #[command(flatten)]
        sequence: SequenceArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "TELEPORTING_TURTLE_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "TELEPORTING_TURTLE_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight the cycle in the graph
        #[arg(
            long,
            action = clap::ArgAction::Set,
            default_value_t = true,
            env = "TELEPORTING_TURTLE_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },

    /// Spin up random sequences and check every detector agrees
    ///
    /// Generates random sequences, loops about half of them, and checks that
    /// Floyd, Brent and a graph-based oracle all match the known answer.
    #[command(
        long_about = "Run randomized agreement trials. Each trial is seeded from --seed plus its \
                      index, so any disagreement can be replayed exactly. Trials run in parallel. \
                      The command exits with an error code if any detector disagrees."
    )]
    Carousel {
        /// Number of random sequences to check
        #[arg(long, default_value_t = DEFAULT_TRIALS, env = "TELEPORTING_TURTLE_TRIALS")]
        trials: usize,

        /// Maximum length of each random sequence (at most 1,000,000)
        #[arg(long, default_value_t = DEFAULT_MAX_LEN, env = "TELEPORTING_TURTLE_MAX_LEN")]
        max_len: usize,

        /// Seed of the first trial
        #[arg(long, default_value_t = DEFAULT_SEED, env = "TELEPORTING_TURTLE_SEED")]
        seed: u64,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
