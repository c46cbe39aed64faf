//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::carousel::CarouselSummary;
use crate::detector::CycleDetector;
use crate::error::TurtleError;
use crate::utils::string::{describe_loop_to, pluralize};

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }

    fn write_detections(
        &self,
        output: &mut String,
        detector: &CycleDetector,
    ) -> Result<(), TurtleError> {
        writeln!(output, "\n  {} Detectors:", style("🏁").cyan())?;
        for detection in detector.detections() {
            writeln!(
                output,
                "    {} {}: {} after {} {} and {} {}",
                style("•").dim(),
                style(detection.kind).bold(),
                if detection.has_cycle {
                    style("cycle").red()
                } else {
                    style("no cycle").green()
                },
                style(detection.steps).yellow(),
                pluralize("step", detection.steps),
                style(detection.comparisons).yellow(),
                pluralize("comparison", detection.comparisons)
            )?;
        }
        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, TurtleError> {
        let mut output = String::new();

        match detector.cycle() {
            None => {
                write!(
                    output,
                    "\n{} No cycle detected! The sequence ends after {} {}.\n",
                    style("✅").green().bold(),
                    style(detector.node_count()).yellow(),
                    pluralize("node", detector.node_count())
                )?;
            }
            Some(cycle) => {
                write!(
                    output,
                    "\n{} Found a cycle of {} {}:\n\n",
                    style("❌").red().bold(),
                    style(cycle.period).red().bold(),
                    pluralize("node", cycle.period)
                )?;
                writeln!(
                    output,
                    "  {} Entry: node {} at position {}",
                    style("🔄").yellow(),
                    style(cycle.entry).bold(),
                    style(cycle.tail_len).yellow()
                )?;
                writeln!(
                    output,
                    "  {} Tail length: {}",
                    style("→").dim(),
                    style(cycle.tail_len).yellow()
                )?;
                writeln!(
                    output,
                    "  {} Period: {}",
                    style("→").dim(),
                    style(cycle.period).yellow()
                )?;
                writeln!(
                    output,
                    "  {} Distinct nodes: {}",
                    style("→").dim(),
                    style(cycle.node_count()).yellow()
                )?;
            }
        }

        self.write_detections(&mut output, detector)?;

        if detector.has_cycle() {
            writeln!(
                output,
                "\n{} Walking this sequence never reaches the terminator. Bound any traversal by \
                 its distinct node count.",
                style("💡").yellow()
            )?;
        }

        Ok(output)
    }

    fn generate_carousel_report(&self, summary: &CarouselSummary) -> Result<String, TurtleError> {
        let mut output = String::new();

        writeln!(
            output,
            "\n{} Ran {} {} of up to {} {} (seed {})",
            style("🎠").cyan(),
            style(summary.trials).yellow(),
            pluralize("trial", summary.trials),
            style(summary.max_len).yellow(),
            pluralize("node", summary.max_len),
            style(summary.seed).dim()
        )?;
        writeln!(
            output,
            "  {} Cyclic: {}",
            style("→").dim(),
            style(summary.cyclic).yellow()
        )?;
        writeln!(
            output,
            "  {} Acyclic: {}",
            style("→").dim(),
            style(summary.acyclic).yellow()
        )?;

        if summary.all_agree() {
            writeln!(
                output,
                "\n{} Floyd, Brent and the graph oracle agreed on every trial.",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "\n{} {} {}:",
            style("❌").red().bold(),
            style(summary.disagreements.len()).red().bold(),
            pluralize("disagreement", summary.disagreements.len())
        )?;
        for trial in &summary.disagreements {
            writeln!(
                output,
                "    {} seed {} (len {}, loop to {}): expected {}, floyd {}, brent {}, oracle {}",
                style("•").dim(),
                style(trial.seed).bold(),
                trial.len,
                describe_loop_to(trial.loop_to),
                trial.expected(),
                trial.floyd,
                trial.brent,
                trial.oracle
            )?;
        }
        writeln!(
            output,
            "\n{} Replay a trial with --seed <SEED> --trials 1.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
