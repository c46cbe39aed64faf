//! Brent's teleporting turtle

use log::trace;

use super::{CycleInfo, Detection, DetectorKind};
use crate::sequence::{Sequence, Successors};

/// Report whether `seq` loops back on itself, using Brent's algorithm
///
/// The rabbit runs ahead for a window of `limit + 1` steps, checking after
/// each step whether it landed on the turtle. When a window completes, the
/// turtle teleports to the rabbit and the window doubles. A cycle of period
/// `p` is caught in the first window at least `p` steps long that starts
/// inside the cycle.
///
/// ```
/// use teleporting_turtle::detector::has_cycle_brent;
/// use teleporting_turtle::sequence::SequenceArena;
///
/// let mut arena = SequenceArena::new();
/// let seq = arena.make_sequence([1, 2, 3, 4, 5]);
/// assert!(!has_cycle_brent(&arena, seq));
///
/// arena.force_append(seq, seq).unwrap();
/// assert!(has_cycle_brent(&arena, seq));
/// ```
pub fn has_cycle_brent<S>(links: &S, seq: Sequence) -> bool
where
    S: Successors + ?Sized,
{
    traverse(links, seq).has_cycle
}

pub(crate) fn traverse<S>(links: &S, seq: Sequence) -> Detection
where
    S: Successors + ?Sized,
{
    let mut detection = Detection::new(DetectorKind::Brent);
    let Some(head) = seq.head() else {
        return detection;
    };

    let mut turtle = head;
    let mut rabbit = head;
    let mut limit: usize = 1;

    loop {
        for _ in 0..=limit {
            let Some(next) = links.successor(rabbit) else {
                return detection;
            };
            rabbit = next;
            detection.steps += 1;

            detection.comparisons += 1;
            if rabbit == turtle {
                detection.has_cycle = true;
                return detection;
            }
        }

        turtle = rabbit;
        limit = limit.saturating_mul(2);
        trace!("turtle teleported to {turtle}, next window is {limit} steps");
    }
}

/// Locate the cycle of `seq` with Brent's algorithm
///
/// The period falls out of the window in which the rabbit catches the
/// turtle. The tail length is then found by starting two cursors one period
/// apart at the head and advancing both until they coincide.
pub fn locate_cycle_brent<S>(links: &S, seq: Sequence) -> Option<CycleInfo>
where
    S: Successors + ?Sized,
{
    let head = seq.head()?;

    let mut power = 1;
    let mut period = 1;
    let mut turtle = head;
    let mut rabbit = links.successor(head)?;
    while turtle != rabbit {
        if power == period {
            turtle = rabbit;
            power *= 2;
            period = 0;
        }
        rabbit = links.successor(rabbit)?;
        period += 1;
    }

    let mut turtle = head;
    let mut rabbit = head;
    for _ in 0..period {
        rabbit = links.successor(rabbit)?;
    }

    let mut tail_len = 0;
    while turtle != rabbit {
        turtle = links.successor(turtle)?;
        rabbit = links.successor(rabbit)?;
        tail_len += 1;
    }

    Some(CycleInfo {
        entry: turtle,
        tail_len,
        period,
    })
}
