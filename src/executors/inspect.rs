//! Inspect command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::InspectConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Inspecting sequence with {}...\n",
            style("🐢").green(),
            format!("{:?}", config.algorithm).to_lowercase()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let fixture = config
            .source
            .load()
            .wrap_err("Failed to load sequence")?;

        if let Some(p) = progress.as_ref() {
            p.building_sequence(fixture.values.len());
        }

        let (arena, seq) = fixture
            .materialize()
            .wrap_err("Failed to build sequence")?;

        if let Some(p) = progress.as_mut() {
            p.start_cycle_detection();
        }

        let mut detector = CycleDetector::new(config.algorithm);
        detector
            .detect(&arena, seq)
            .wrap_err("Failed to detect cycles")?;

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(detector.has_cycle());
        }

        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&detector),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&detector),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if a cycle was found and requested
        if config.error_on_cycles && detector.has_cycle() {
            std::process::exit(1);
        }

        Ok(())
    }
}
