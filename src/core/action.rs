//! The reversible-action capability consumed by [`History`](super::History).
//!
//! Actions are external values the history never interprets: it only asks
//! them to produce their applied or reverted representation and keeps the
//! results in order.

use std::fmt::Debug;

/// Trait for reversible actions tracked by a history.
///
/// Both methods are pure - they return a new value describing the action
/// after the operation and never mutate the receiver. The history relies on
/// this purity: it keeps every returned value in an immutable chain shared
/// across snapshots.
///
/// # Required Traits
///
/// - `Clone`: actions must be cloneable for chain splicing and export
/// - `PartialEq`: actions must be comparable for history value equality
/// - `Debug`: actions must be debuggable for diagnostics
/// - `Send` + `Sync`: actions must be shareable across threads, so whole
///   histories stay safe to hold from multiple readers
///
/// # Example
///
/// ```rust
/// use hindsight::core::Action;
///
/// /// Moves a cursor by a fixed offset; `applied` records whether the
/// /// move is currently in effect.
/// #[derive(Clone, PartialEq, Debug)]
/// struct Move {
///     offset: i64,
///     applied: bool,
/// }
///
/// impl Action for Move {
///     fn apply(&self) -> Self {
///         Move { applied: true, ..*self }
///     }
///
///     fn undo(&self) -> Self {
///         Move { applied: false, ..*self }
///     }
/// }
///
/// let m = Move { offset: 3, applied: false };
/// assert!(m.apply().applied);
/// assert!(!m.apply().undo().applied);
/// ```
pub trait Action: Clone + PartialEq + Debug + Send + Sync {
    /// Returns a new action representing the result of performing this one.
    fn apply(&self) -> Self;

    /// Returns a new action representing the result of reverting this one.
    fn undo(&self) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Toggle {
        id: u32,
        on: bool,
    }

    impl Action for Toggle {
        fn apply(&self) -> Self {
            Toggle { on: true, ..*self }
        }

        fn undo(&self) -> Self {
            Toggle { on: false, ..*self }
        }
    }

    #[test]
    fn apply_returns_new_value() {
        let toggle = Toggle { id: 1, on: false };
        let applied = toggle.apply();

        assert!(applied.on);
        assert!(!toggle.on);
    }

    #[test]
    fn undo_reverses_apply() {
        let toggle = Toggle { id: 1, on: false };
        assert_eq!(toggle.apply().undo(), toggle);
    }

    #[test]
    fn apply_is_deterministic() {
        let toggle = Toggle { id: 7, on: false };
        assert_eq!(toggle.apply(), toggle.apply());
    }

    #[test]
    fn identity_is_preserved_through_transformations() {
        let toggle = Toggle { id: 42, on: false };
        assert_eq!(toggle.apply().id, 42);
        assert_eq!(toggle.apply().undo().id, 42);
    }
}
