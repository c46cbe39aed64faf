//! Randomized agreement runner
//!
//! Each trial builds a random sequence, loops it back on itself about half of
//! the time, and checks that Floyd, Brent and petgraph's DFS all match the
//! known ground truth. Trials are independent and run in parallel; each one
//! is fully determined by its seed so disagreements can be replayed.

use indicatif::{ParallelProgressIterator, ProgressBar};
use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::detector::{has_cycle_brent, has_cycle_floyd};
use crate::error::TurtleError;
use crate::graph::{SequenceGraphBuilder, graph_has_cycle};
use crate::sequence::SequenceArena;

/// Payloads are drawn from a small range so equal values at distinct nodes
/// are common.
const VALUE_RANGE: u32 = 8;

/// Outcome of one randomized trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trial {
    pub seed: u64,
    pub len: usize,
    pub loop_to: Option<usize>,
    pub floyd: bool,
    pub brent: bool,
    pub oracle: bool,
}

impl Trial {
    /// Ground truth: the sequence is cyclic exactly when a loop was added
    pub fn expected(&self) -> bool {
        self.loop_to.is_some()
    }

    pub fn agrees(&self) -> bool {
        let expected = self.expected();
        self.floyd == expected && self.brent == expected && self.oracle == expected
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CarouselSummary {
    pub seed: u64,
    pub trials: usize,
    pub max_len: usize,
    pub cyclic: usize,
    pub acyclic: usize,
    pub disagreements: Vec<Trial>,
}

impl CarouselSummary {
    pub fn all_agree(&self) -> bool {
        self.disagreements.is_empty()
    }
}

pub struct Carousel {
    seed: u64,
    trials: usize,
    max_len: usize,
}

impl Carousel {
    pub fn new(seed: u64, trials: usize, max_len: usize) -> Self {
        Self {
            seed,
            trials,
            max_len,
        }
    }

    /// Run every trial, ticking `progress` once per finished trial
    pub fn run(&self, progress: Option<&ProgressBar>) -> Result<CarouselSummary, TurtleError> {
        let progress = progress.cloned().unwrap_or_else(ProgressBar::hidden);

        let trials = (0..self.trials)
            .into_par_iter()
            .progress_with(progress)
            .map(|i| run_trial(self.seed.wrapping_add(i as u64), self.max_len))
            .collect::<Result<Vec<_>, _>>()?;

        let mut summary = CarouselSummary {
            seed: self.seed,
            trials: self.trials,
            max_len: self.max_len,
            ..CarouselSummary::default()
        };

        for trial in trials {
            if trial.expected() {
                summary.cyclic += 1;
            } else {
                summary.acyclic += 1;
            }

            if !trial.agrees() {
                warn!("trial with seed {} disagreed: {:?}", trial.seed, trial);
                summary.disagreements.push(trial);
            }
        }

        Ok(summary)
    }
}

/// Build and check a single random sequence
pub fn run_trial(seed: u64, max_len: usize) -> Result<Trial, TurtleError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let len = rng.gen_range(0..=max_len);
    let values: Vec<u32> = (0..len).map(|_| rng.gen_range(0..VALUE_RANGE)).collect();
    let loop_to = if len > 0 && rng.gen_bool(0.5) {
        Some(rng.gen_range(0..len))
    } else {
        None
    };

    let mut arena = SequenceArena::with_capacity(len);
    let seq = arena.make_sequence(values);
    if let Some(position) = loop_to {
        let target = arena
            .node_at(seq, position)
            .ok_or(TurtleError::PositionOutOfRange { position, len })?;
        arena.force_append(seq, target)?;
    }

    let mut builder = SequenceGraphBuilder::new();
    builder.build_sequence_graph(&arena, seq)?;

    Ok(Trial {
        seed,
        len,
        loop_to,
        floyd: has_cycle_floyd(&arena, seq),
        brent: has_cycle_brent(&arena, seq),
        oracle: graph_has_cycle(builder.graph()),
    })
}
