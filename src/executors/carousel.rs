//! Carousel command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::carousel::Carousel;
use crate::cli::OutputFormat;
use crate::config::CarouselConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct CarouselExecutor;

impl CommandExecutor for CarouselExecutor {
    type Config = CarouselConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Spinning the carousel: {} trials starting at seed {}...\n",
            style("🎠").cyan(),
            style(config.trials).yellow(),
            style(config.seed).dim()
        );

        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };
        let bar = progress.as_mut().map(|p| p.start_carousel(config.trials));

        let summary = Carousel::new(config.seed, config.trials, config.max_len)
            .run(bar.as_ref())
            .wrap_err("Failed to run agreement trials")?;

        if let Some(p) = progress.as_mut() {
            p.finish_carousel(summary.disagreements.len());
        }

        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_carousel_report(&summary),
            OutputFormat::Json => JsonReportGenerator::new().generate_carousel_report(&summary),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        if !summary.all_agree() {
            std::process::exit(1);
        }

        Ok(())
    }
}
