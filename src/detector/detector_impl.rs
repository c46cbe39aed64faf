use std::fmt;

use log::debug;
use serde::Serialize;

use super::{brent, floyd, locate_cycle_brent, locate_cycle_floyd};
use crate::error::TurtleError;
use crate::sequence::{NodeId, Sequence, Successors};

/// Which detectors a [`CycleDetector`] runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    Floyd,
    Brent,
    #[default]
    Both,
}

impl Algorithm {
    pub fn kinds(self) -> &'static [DetectorKind] {
        match self {
            Algorithm::Floyd => &[DetectorKind::Floyd],
            Algorithm::Brent => &[DetectorKind::Brent],
            Algorithm::Both => &[DetectorKind::Floyd, DetectorKind::Brent],
        }
    }
}

/// A single cycle detection algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    Floyd,
    Brent,
}

impl DetectorKind {
    pub fn run<S>(self, links: &S, seq: Sequence) -> Detection
    where
        S: Successors + ?Sized,
    {
        match self {
            DetectorKind::Floyd => floyd::traverse(links, seq),
            DetectorKind::Brent => brent::traverse(links, seq),
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorKind::Floyd => write!(f, "floyd"),
            DetectorKind::Brent => write!(f, "brent"),
        }
    }
}

/// Outcome of one detector run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub kind: DetectorKind,
    pub has_cycle: bool,
    /// Cursor advances performed
    pub steps: usize,
    /// Identity comparisons between cursors
    pub comparisons: usize,
}

impl Detection {
    pub(crate) fn new(kind: DetectorKind) -> Self {
        Self {
            kind,
            has_cycle: false,
            steps: 0,
            comparisons: 0,
        }
    }
}

/// Shape of a located cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleInfo {
    /// First node of the loop
    pub entry: NodeId,
    /// Nodes before the entry (μ)
    pub tail_len: usize,
    /// Nodes in the loop (λ)
    pub period: usize,
}

impl CycleInfo {
    /// Number of distinct nodes reachable from the head
    pub fn node_count(&self) -> usize {
        self.tail_len + self.period
    }

    /// Whether the node `position` steps from the head lies on the loop
    pub fn contains_position(&self, position: usize) -> bool {
        position >= self.tail_len && position < self.node_count()
    }
}

/// Runs one or both detectors over a sequence and keeps the results
pub struct CycleDetector {
    algorithm: Algorithm,
    detections: Vec<Detection>,
    cycle: Option<CycleInfo>,
    node_count: usize,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

impl CycleDetector {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            detections: Vec::new(),
            cycle: None,
            node_count: 0,
        }
    }

    /// Run the configured detectors over `seq`, replacing earlier results
    ///
    /// When a cycle is found it is also located, using the same algorithm
    /// family that found it.
    ///
    /// # Errors
    ///
    /// Fails with [`TurtleError::DetectorDisagreement`] if Floyd and Brent
    /// both ran and returned different answers.
    pub fn detect<S>(&mut self, links: &S, seq: Sequence) -> Result<(), TurtleError>
    where
        S: Successors + ?Sized,
    {
        let detections: Vec<Detection> = self
            .algorithm
            .kinds()
            .iter()
            .map(|kind| kind.run(links, seq))
            .collect();

        for detection in &detections {
            debug!(
                "{} reported cycle={} after {} steps and {} comparisons",
                detection.kind, detection.has_cycle, detection.steps, detection.comparisons
            );
        }

        if let [floyd, brent] = detections.as_slice()
            && floyd.has_cycle != brent.has_cycle
        {
            return Err(TurtleError::DetectorDisagreement {
                floyd: floyd.has_cycle,
                brent: brent.has_cycle,
            });
        }

        let cycle = if !detections.iter().any(|detection| detection.has_cycle) {
            None
        } else if self.algorithm == Algorithm::Floyd {
            locate_cycle_floyd(links, seq)
        } else {
            locate_cycle_brent(links, seq)
        };

        let node_count = match cycle {
            Some(info) => info.node_count(),
            None => count_to_terminator(links, seq),
        };

        self.detections = detections;
        self.cycle = cycle;
        self.node_count = node_count;

        Ok(())
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    /// Whether the detectors that ran found a cycle
    pub fn has_cycle(&self) -> bool {
        self.detections.iter().any(|detection| detection.has_cycle)
    }

    /// Location of the detected cycle, if any
    pub fn cycle(&self) -> Option<&CycleInfo> {
        self.cycle.as_ref()
    }

    /// Distinct nodes reachable from the head of the last inspected sequence
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

fn count_to_terminator<S>(links: &S, seq: Sequence) -> usize
where
    S: Successors + ?Sized,
{
    let mut count = 0;
    let mut current = seq.head();
    while let Some(node) = current {
        count += 1;
        current = links.successor(node);
    }
    count
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::sequence::SequenceArena;

    /// Successor relation that claims every node loops to itself
    struct SelfLoops;

    impl Successors for SelfLoops {
        fn successor(&self, node: NodeId) -> Option<NodeId> {
            Some(node)
        }
    }

    /// Self-loop for the first `budget` lookups, terminator afterwards, so
    /// Floyd (which runs first) sees a cycle and Brent does not
    struct LoopThenEnd {
        budget: Cell<usize>,
    }

    impl Successors for LoopThenEnd {
        fn successor(&self, node: NodeId) -> Option<NodeId> {
            let remaining = self.budget.get();
            if remaining == 0 {
                return None;
            }
            self.budget.set(remaining - 1);
            Some(node)
        }
    }

    #[test]
    fn test_no_cycle_in_linear_sequence() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence(["a", "b", "c"]);

        let mut detector = CycleDetector::new(Algorithm::Both);
        detector.detect(&arena, seq).unwrap();

        assert!(!detector.has_cycle());
        assert_eq!(detector.cycle(), None);
        assert_eq!(detector.node_count(), 3);
        assert_eq!(detector.detections().len(), 2);
    }

    #[test]
    fn test_cycle_is_located() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([1, 2, 3, 4, 5]);
        let second = arena.node_at(seq, 1).unwrap();
        arena.force_append(seq, second).unwrap();

        let mut detector = CycleDetector::new(Algorithm::Both);
        detector.detect(&arena, seq).unwrap();

        assert!(detector.has_cycle());
        let info = detector.cycle().unwrap();
        assert_eq!(info.entry, second);
        assert_eq!(info.tail_len, 1);
        assert_eq!(info.period, 4);
        assert_eq!(detector.node_count(), 5);
    }

    #[test]
    fn test_single_algorithm() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([1, 2]);
        arena.force_append(seq, seq).unwrap();

        for algorithm in [Algorithm::Floyd, Algorithm::Brent] {
            let mut detector = CycleDetector::new(algorithm);
            detector.detect(&arena, seq).unwrap();

            assert_eq!(detector.detections().len(), 1);
            assert_eq!(detector.detections()[0].kind, algorithm.kinds()[0]);
            assert_eq!(detector.cycle().map(|info| info.period), Some(2));
        }
    }

    #[test]
    fn test_detect_replaces_previous_results() {
        let mut arena = SequenceArena::new();
        let cyclic = arena.make_sequence([1]);
        arena.force_append(cyclic, cyclic).unwrap();
        let linear = arena.make_sequence([2, 3]);

        let mut detector = CycleDetector::default();
        detector.detect(&arena, cyclic).unwrap();
        assert!(detector.has_cycle());

        detector.detect(&arena, linear).unwrap();
        assert!(!detector.has_cycle());
        assert_eq!(detector.cycle(), None);
    }

    #[test]
    fn test_custom_successors() {
        let mut detector = CycleDetector::new(Algorithm::Both);
        detector
            .detect(&SelfLoops, Sequence::from(NodeId::new(5)))
            .unwrap();

        assert!(detector.has_cycle());
        assert_eq!(detector.cycle().map(|info| info.period), Some(1));
    }

    #[test]
    fn test_disagreement_keeps_previous_results() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence(["a", "b", "c"]);

        let mut detector = CycleDetector::new(Algorithm::Both);
        detector.detect(&arena, seq).unwrap();
        let previous = detector.detections().to_vec();

        let flaky = LoopThenEnd {
            budget: Cell::new(3),
        };
        let result = detector.detect(&flaky, Sequence::from(NodeId::new(0)));

        assert!(matches!(
            result,
            Err(TurtleError::DetectorDisagreement {
                floyd: true,
                brent: false
            })
        ));
        assert_eq!(detector.detections(), previous.as_slice());
        assert!(!detector.has_cycle());
        assert_eq!(detector.cycle(), None);
        assert_eq!(detector.node_count(), 3);
    }

    #[test]
    fn test_cycle_info_positions() {
        let info = CycleInfo {
            entry: NodeId::new(2),
            tail_len: 2,
            period: 3,
        };

        assert!(!info.contains_position(1));
        assert!(info.contains_position(2));
        assert!(info.contains_position(4));
        assert!(!info.contains_position(5));
        assert_eq!(info.node_count(), 5);
    }

    #[test]
    fn test_detector_kind_display() {
        assert_eq!(DetectorKind::Floyd.to_string(), "floyd");
        assert_eq!(DetectorKind::Brent.to_string(), "brent");
    }
}
