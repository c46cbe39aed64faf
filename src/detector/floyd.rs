//! Floyd's tortoise and hare

use super::{CycleInfo, Detection, DetectorKind};
use crate::sequence::{NodeId, Sequence, Successors};

/// Report whether `seq` loops back on itself, using Floyd's algorithm
///
/// The hare advances two nodes for every node the tortoise advances. The
/// terminator is checked before each hare step, so odd-length sequences end
/// cleanly. Cursors are compared by handle, never by payload.
///
/// ```
/// use teleporting_turtle::detector::has_cycle_floyd;
/// use teleporting_turtle::sequence::SequenceArena;
///
/// let mut arena = SequenceArena::new();
/// let seq = arena.make_sequence([1, 2, 3, 4, 5]);
/// assert!(!has_cycle_floyd(&arena, seq));
///
/// let third = arena.node_at(seq, 2).unwrap();
/// arena.force_append(seq, third).unwrap();
/// assert!(has_cycle_floyd(&arena, seq));
/// ```
pub fn has_cycle_floyd<S>(links: &S, seq: Sequence) -> bool
where
    S: Successors + ?Sized,
{
    traverse(links, seq).has_cycle
}

pub(crate) fn traverse<S>(links: &S, seq: Sequence) -> Detection
where
    S: Successors + ?Sized,
{
    let mut detection = Detection::new(DetectorKind::Floyd);
    if let Some(head) = seq.head() {
        detection.has_cycle = meet(links, head, &mut detection).is_some();
    }
    detection
}

/// Node where tortoise and hare meet, or `None` if the hare falls off the end
fn meet<S>(links: &S, head: NodeId, detection: &mut Detection) -> Option<NodeId>
where
    S: Successors + ?Sized,
{
    let mut slow = head;
    let mut fast = head;

    loop {
        fast = links.successor(fast)?;
        detection.steps += 1;
        fast = links.successor(fast)?;
        detection.steps += 1;

        // slow trails fast, so this step cannot reach the terminator
        slow = links.successor(slow)?;
        detection.steps += 1;

        detection.comparisons += 1;
        if slow == fast {
            return Some(slow);
        }
    }
}

/// Locate the cycle of `seq` with Floyd's algorithm
///
/// After the meeting point is found, one cursor restarts from the head and
/// both advance in lockstep; they meet again at the cycle entry. One more lap
/// from the entry measures the period.
pub fn locate_cycle_floyd<S>(links: &S, seq: Sequence) -> Option<CycleInfo>
where
    S: Successors + ?Sized,
{
    let head = seq.head()?;
    let mut detection = Detection::new(DetectorKind::Floyd);
    let meeting = meet(links, head, &mut detection)?;

    let mut tortoise = head;
    let mut hare = meeting;
    let mut tail_len = 0;
    while tortoise != hare {
        tortoise = links.successor(tortoise)?;
        hare = links.successor(hare)?;
        tail_len += 1;
    }

    let entry = tortoise;
    let mut period = 1;
    let mut cursor = links.successor(entry)?;
    while cursor != entry {
        cursor = links.successor(cursor)?;
        period += 1;
    }

    Some(CycleInfo {
        entry,
        tail_len,
        period,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceArena;

    #[test]
    fn test_empty_sequence() {
        let arena: SequenceArena<i32> = SequenceArena::new();
        assert!(!has_cycle_floyd(&arena, Sequence::EMPTY));
        assert_eq!(locate_cycle_floyd(&arena, Sequence::EMPTY), None);
    }

    #[test]
    fn test_single_node() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([7]);
        assert!(!has_cycle_floyd(&arena, seq));

        arena.force_append(seq, seq).unwrap();
        assert!(has_cycle_floyd(&arena, seq));
    }

    #[test]
    fn test_odd_and_even_lengths() {
        for len in 1..=12 {
            let mut arena = SequenceArena::new();
            let seq = arena.make_sequence(0..len);
            assert!(!has_cycle_floyd(&arena, seq), "length {len}");
        }
    }

    #[test]
    fn test_equal_payloads_are_not_a_cycle() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([1, 1, 1, 1]);
        assert!(!has_cycle_floyd(&arena, seq));
    }

    #[test]
    fn test_locate_cycle() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([1, 2, 3, 4, 5]);
        let third = arena.node_at(seq, 2).unwrap();
        arena.force_append(seq, third).unwrap();

        let info = locate_cycle_floyd(&arena, seq).unwrap();
        assert_eq!(info.entry, third);
        assert_eq!(info.tail_len, 2);
        assert_eq!(info.period, 3);
    }

    #[test]
    fn test_traversal_counts() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([1, 2, 3]);

        let detection = traverse(&arena, seq);
        assert!(!detection.has_cycle);
        // two hare steps, one tortoise step, one comparison, then the hare
        // finds the terminator on its next move
        assert_eq!(detection.steps, 3);
        assert_eq!(detection.comparisons, 1);
    }
}
