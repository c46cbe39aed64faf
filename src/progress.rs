use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        let term = Term::stderr();
        Self {
            term,
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn get_turtle_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn building_sequence(&self, len: usize) {
        let _ = self.term.clear_line();
        eprint!(
            "\r{} Building sequence of {} {}... ",
            style(self.get_turtle_frame()).green(),
            style(len).yellow(),
            pluralize("node", len)
        );
    }

    pub fn start_cycle_detection(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("\r{} Chasing the sequence...", style("🐇").yellow());
    }

    pub fn finish_cycle_detection(&self, has_cycle: bool) {
        if has_cycle {
            eprintln!(
                "{} The rabbit caught the turtle: {}",
                style("⚠").yellow().bold(),
                style("cycle found").red().bold()
            );
        } else {
            eprintln!(
                "{} The hare reached the end! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        }
    }

    pub fn start_carousel(&mut self, trials: usize) -> ProgressBar {
        let pb = self.create_progress_bar(trials as u64, "Spinning the carousel");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_carousel(&mut self, disagreements: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if disagreements == 0 {
            eprintln!("\r{} Every detector agreed", style("✓").green().bold());
        } else {
            eprintln!(
                "\r{} {} {}",
                style("✗").red().bold(),
                style(disagreements).red().bold(),
                pluralize("disagreement", disagreements)
            );
        }
    }
}
