//! Destructive tail rewriting
//!
//! [`SequenceArena::force_append`] is the only operation allowed to change a
//! node's successor after construction, and so the only way to build a cyclic
//! sequence.

use log::debug;

use crate::error::SequenceError;
use crate::sequence::{NodeId, Sequence, SequenceArena};

impl<T> SequenceArena<T> {
    /// Link the tail of `target` to the head of `addition`
    ///
    /// `addition` may be another sequence, a node reachable from `target`
    /// (which closes a loop), or [`Sequence::EMPTY`]. Exactly one node is
    /// rewritten and nothing is allocated.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::EmptyTarget`] when `target` has no nodes.
    /// - [`SequenceError::NoTailFound`] when `target` is already cyclic.
    /// - [`SequenceError::UnknownNode`] when either handle is foreign to this
    ///   arena. Nothing is written in that case.
    pub fn force_append(
        &mut self,
        target: Sequence,
        addition: impl Into<Sequence>,
    ) -> Result<(), SequenceError> {
        let head = target.head().ok_or(SequenceError::EmptyTarget)?;
        let addition = addition.into();

        self.ensure_owned(head)?;
        if let Some(node) = addition.head() {
            self.ensure_owned(node)?;
        }

        let tail = self.find_tail(head)?;
        self.set_next(tail, addition.head());

        debug!(
            "linked tail {} of sequence {} to {}",
            tail,
            head,
            addition
                .head()
                .map_or_else(|| "the terminator".to_string(), |node| node.to_string())
        );
        Ok(())
    }

    fn ensure_owned(&self, node: NodeId) -> Result<(), SequenceError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(SequenceError::UnknownNode {
                node,
                len: self.node_count(),
            })
        }
    }

    /// Last node before the terminator
    ///
    /// Walks with a fast and a slow cursor; if they ever meet there is no
    /// tail, so the search is bounded even on cyclic input.
    fn find_tail(&self, head: NodeId) -> Result<NodeId, SequenceError> {
        let mut slow = head;
        let mut fast = head;

        loop {
            for _ in 0..2 {
                match self.next(fast) {
                    Some(next) => fast = next,
                    None => return Ok(fast),
                }
            }

            // slow trails fast, so it can never hit the terminator first
            if let Some(next) = self.next(slow) {
                slow = next;
            }
            if slow == fast {
                return Err(SequenceError::NoTailFound { head });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_append_joins_two_sequences() {
        let mut arena = SequenceArena::new();
        let first = arena.make_sequence([1, 2]);
        let second = arena.make_sequence([3, 4]);

        arena.force_append(first, second).unwrap();

        let values: Vec<_> = arena.values(first).copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!(arena.node_count(), 4);
    }

    #[test]
    fn test_force_append_empty_target() {
        let mut arena = SequenceArena::new();
        let other = arena.make_sequence([1]);

        assert_eq!(
            arena.force_append(Sequence::EMPTY, other),
            Err(SequenceError::EmptyTarget)
        );
    }

    #[test]
    fn test_force_append_twice_on_cyclic_target() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([1, 2, 3, 4, 5]);
        let third = arena.node_at(seq, 2).unwrap();

        arena.force_append(seq, third).unwrap();

        assert_eq!(
            arena.force_append(seq, third),
            Err(SequenceError::NoTailFound {
                head: seq.head().unwrap()
            })
        );
    }

    #[test]
    fn test_force_append_self_loop_then_again() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([7]);
        let head = seq.head().unwrap();

        arena.force_append(seq, seq).unwrap();
        assert_eq!(arena.next(head), Some(head));

        assert!(matches!(
            arena.force_append(seq, seq),
            Err(SequenceError::NoTailFound { .. })
        ));
    }

    #[test]
    fn test_force_append_rejects_foreign_handles() {
        let mut other = SequenceArena::new();
        let foreign = other.make_sequence([1, 2, 3]);
        let foreign_tail = other.node_at(foreign, 2).unwrap();

        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([1]);

        assert_eq!(
            arena.force_append(seq, foreign_tail),
            Err(SequenceError::UnknownNode {
                node: foreign_tail,
                len: 1
            })
        );
        assert_eq!(arena.next(seq.head().unwrap()), None);
    }

    #[test]
    fn test_force_append_empty_addition_is_a_no_op() {
        let mut arena = SequenceArena::new();
        let seq = arena.make_sequence([1, 2]);

        arena.force_append(seq, Sequence::EMPTY).unwrap();

        assert_eq!(arena.walk(seq).count(), 2);
    }
}
