//! Payload-comparing tortoise and hare

use crate::sequence::{Sequence, SequenceArena};

/// Tortoise and hare that compares payloads instead of node identity
///
/// The hare starts one node ahead of the tortoise and the two payloads are
/// compared before and after each extra hare step. Any two distinct nodes
/// carrying equal values within reach of each other count as a loop, so this
/// only answers "is there a cycle" for sequences with unique payloads. Use
/// [`has_cycle_floyd`](super::has_cycle_floyd) when node identity matters.
pub fn has_cycle_by_value<T>(arena: &SequenceArena<T>, seq: Sequence) -> bool
where
    T: PartialEq,
{
    let Some(mut tortoise) = seq.head() else {
        return false;
    };
    let Some(mut hare) = arena.next(tortoise) else {
        return false;
    };

    loop {
        if arena.value_of(tortoise) == arena.value_of(hare) {
            return true;
        }

        let Some(next) = arena.next(hare) else {
            return false;
        };
        hare = next;

        if arena.value_of(tortoise) == arena.value_of(hare) {
            return true;
        }

        let (Some(next_tortoise), Some(next_hare)) = (arena.next(tortoise), arena.next(hare))
        else {
            return false;
        };
        tortoise = next_tortoise;
        hare = next_hare;
    }
}
