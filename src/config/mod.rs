//! # Configuration Module
//!
//! This module provides configuration structures for all teleporting-turtle
//! commands. Each command has its own config module with a builder that
//! validates required fields.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command that runs the
//!   detectors
//! - **SpectacleConfig**: Configuration for the `spectacle` command that
//!   renders the sequence
//! - **CarouselConfig**: Configuration for the `carousel` command that runs
//!   randomized agreement trials
//!
//! ## Example
//!
//! ```
//! use teleporting_turtle::ConfigBuilder;
//! use teleporting_turtle::cli::{GraphFormat, OutputFormat};
//! use teleporting_turtle::config::{InspectConfig, SpectacleConfig};
//! use teleporting_turtle::detector::Algorithm;
//! use teleporting_turtle::fixture::{Fixture, SequenceSource};
//!
//! let source = SequenceSource::Inline(Fixture::new(vec!["a".into(), "b".into()], Some(0)));
//!
//! let inspect = InspectConfig::builder()
//!     .with_source(source.clone())
//!     .with_format(OutputFormat::Human)
//!     .with_algorithm(Algorithm::Brent)
//!     .with_error_on_cycles(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(inspect.algorithm, Algorithm::Brent);
//!
//! let spectacle = SpectacleConfig::builder()
//!     .with_source(source)
//!     .with_format(GraphFormat::Dot)
//!     .with_highlight_cycles(true)
//!     .build()
//!     .unwrap();
//! assert!(spectacle.output.is_none());
//! ```

pub mod carousel;
pub mod inspect;
pub mod spectacle;

pub use carousel::CarouselConfig;
pub use inspect::InspectConfig;
pub use spectacle::SpectacleConfig;
