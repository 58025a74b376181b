//! Property-based tests for the persistent undo/redo core.
//!
//! These tests use proptest to verify the history protocol and the
//! structural value semantics across many randomly generated inputs.

use hindsight::core::{Action, Chain, History};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Toggle-style test action: `apply` and `undo` are mutually inverse, so
/// undo-then-redo round trips restore equal histories.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
struct TestOp {
    id: u8,
    applied: bool,
}

impl Action for TestOp {
    fn apply(&self) -> Self {
        TestOp {
            applied: true,
            ..*self
        }
    }

    fn undo(&self) -> Self {
        TestOp {
            applied: false,
            ..*self
        }
    }
}

prop_compose! {
    fn arbitrary_op()(id in any::<u8>()) -> TestOp {
        TestOp { id, applied: false }
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Builds a history by applying every op in order.
fn history_of(ops: &[TestOp]) -> History<TestOp> {
    ops.iter()
        .fold(History::new(), |history, op| history.apply(op.clone()))
}

proptest! {
    #[test]
    fn apply_always_clears_the_redo_side(
        ops in prop::collection::vec(arbitrary_op(), 0..8),
        undos in 0..8usize,
        next in arbitrary_op(),
    ) {
        let mut history = history_of(&ops);
        for _ in 0..undos {
            history = history.undo();
        }

        let history = history.apply(next);

        prop_assert!(!history.can_redo());
        let mut undone = Vec::new();
        history.copy_undone_to(&mut undone);
        prop_assert!(undone.is_empty());
    }

    #[test]
    fn apply_then_undo_restores_the_done_side(
        ops in prop::collection::vec(arbitrary_op(), 0..8),
        next in arbitrary_op(),
    ) {
        let history = history_of(&ops);

        let mut before = Vec::new();
        history.copy_done_to(&mut before);

        let mut after = Vec::new();
        history.apply(next).undo().copy_done_to(&mut after);

        prop_assert_eq!(before, after);
    }

    #[test]
    fn undo_then_redo_is_identity_on_nonempty_histories(
        ops in prop::collection::vec(arbitrary_op(), 1..8),
    ) {
        let history = history_of(&ops);

        prop_assert!(history.can_undo());
        prop_assert_eq!(history.undo().redo(), history);
    }

    #[test]
    fn undo_and_redo_move_one_action_between_sides(
        ops in prop::collection::vec(arbitrary_op(), 1..8),
    ) {
        let history = history_of(&ops);
        let undone = history.undo();

        let mut done = Vec::new();
        undone.copy_done_to(&mut done);
        prop_assert_eq!(done.len(), ops.len() - 1);

        let mut reverted = Vec::new();
        undone.copy_undone_to(&mut reverted);
        prop_assert_eq!(reverted.len(), 1);
    }

    #[test]
    fn boundary_noops_hold_for_every_history(
        ops in prop::collection::vec(arbitrary_op(), 0..8),
    ) {
        let empty: History<TestOp> = History::new();
        prop_assert_eq!(empty.undo(), History::new());
        prop_assert_eq!(empty.redo(), History::new());

        let cleared = history_of(&ops).undo().clear_done();
        prop_assert_eq!(cleared.undo(), cleared.clone());
    }

    #[test]
    fn from_ordered_round_trips_chronological_order(
        done_items in prop::collection::vec(arbitrary_op(), 0..8),
        undone_items in prop::collection::vec(arbitrary_op(), 0..8),
    ) {
        let history = History::from_ordered(done_items.clone(), undone_items.clone());

        let mut done = Vec::new();
        let mut undone = Vec::new();
        history.copy_done_to(&mut done);
        history.copy_undone_to(&mut undone);

        prop_assert_eq!(done, done_items);
        prop_assert_eq!(undone, undone_items);
    }

    #[test]
    fn equality_and_hash_ignore_node_identity(
        done_items in prop::collection::vec(arbitrary_op(), 0..8),
        undone_items in prop::collection::vec(arbitrary_op(), 0..8),
    ) {
        let a = History::from_ordered(done_items.clone(), undone_items.clone());
        let b = History::from_ordered(done_items, undone_items);

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn snapshots_survive_later_transitions(
        ops in prop::collection::vec(arbitrary_op(), 1..8),
        later in prop::collection::vec(arbitrary_op(), 0..8),
    ) {
        let snapshot = history_of(&ops);
        let replay = history_of(&ops);

        // Drive the history onward from the snapshot in several directions.
        let mut moved = snapshot.clone();
        for op in later {
            moved = moved.apply(op).undo();
        }
        let _ = moved.redo();

        prop_assert_eq!(snapshot, replay);
    }

    #[test]
    fn chain_push_is_persistent(
        items in prop::collection::vec(any::<u8>(), 0..8),
        extra in any::<u8>(),
    ) {
        let chain = Chain::from_ordered(items.clone());
        let extended = chain.push(extra);

        prop_assert_eq!(chain.len(), items.len());
        prop_assert_eq!(extended.len(), items.len() + 1);
        prop_assert_eq!(extended.head(), Some(&extra));
        prop_assert_eq!(extended.next(), chain);
    }

    #[test]
    fn chain_equality_is_structural(
        items in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let a = Chain::from_ordered(items.clone());
        let b = Chain::from_ordered(items);

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn chain_copy_into_reverses_iteration_order(
        items in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let chain = Chain::from_ordered(items.clone());

        let mut exported = Vec::new();
        chain.copy_into(&mut exported);
        prop_assert_eq!(exported, items);

        let mut newest_first: Vec<u8> = chain.iter().copied().collect();
        newest_first.reverse();
        let mut chronological = Vec::new();
        chain.copy_into(&mut chronological);
        prop_assert_eq!(newest_first, chronological);
    }
}
