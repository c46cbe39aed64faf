//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::carousel::CarouselSummary;
use crate::detector::CycleDetector;
use crate::error::TurtleError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from cycle detection results
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, TurtleError>;

    /// Generate a report from a randomized agreement run
    fn generate_carousel_report(&self, summary: &CarouselSummary) -> Result<String, TurtleError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
