//! Undo/redo history over two persistent chains.
//!
//! A [`History`] tracks which actions have been applied and which have been
//! reverted. Every transition returns a new history value - the receiver is
//! never mutated, so previously observed histories remain valid snapshots
//! for debugging, time-travel UIs, and concurrent readers.

use super::action::Action;
use super::chain::Chain;
use super::error::HistoryError;
use std::hash::{Hash, Hasher};
use tracing::trace;

/// Persistent undo/redo state: a chain of applied actions and a chain of
/// reverted ones.
///
/// The history never interprets its actions. `apply` asks the action for
/// its applied representation and records it; `undo` and `redo` hand the
/// most recent entry back to the action capability and move the result to
/// the other side. Bookkeeping of order and membership is the history's
/// whole job.
///
/// Equality and hashing are structural over the `(done, undone)` pair, so
/// two histories that went through equivalent transitions compare equal no
/// matter how their chains were allocated.
///
/// # Example
///
/// ```rust
/// use hindsight::core::{Action, History};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Insert {
///     text: &'static str,
///     present: bool,
/// }
///
/// impl Action for Insert {
///     fn apply(&self) -> Self {
///         Insert { present: true, ..*self }
///     }
///
///     fn undo(&self) -> Self {
///         Insert { present: false, ..*self }
///     }
/// }
///
/// let empty = History::new();
/// let one = empty.apply(Insert { text: "a", present: false });
/// let two = one.apply(Insert { text: "b", present: false });
///
/// let undone = two.undo();
/// assert!(undone.can_redo());
/// assert_eq!(undone.redo(), two);
///
/// // `empty`, `one` and `two` are all still valid snapshots.
/// assert!(!empty.can_undo());
/// ```
#[derive(Clone, Debug)]
pub struct History<A: Action> {
    done: Chain<A>,
    undone: Chain<A>,
}

impl<A: Action> History<A> {
    /// Creates an empty history with nothing to undo or redo.
    pub fn new() -> Self {
        History {
            done: Chain::empty(),
            undone: Chain::empty(),
        }
    }

    /// Creates a history from two oldest-first collections of actions.
    ///
    /// The items are recorded as given - no `apply`/`undo` transformation
    /// runs during construction. Exporting via [`copy_done_to`](Self::copy_done_to)
    /// and [`copy_undone_to`](Self::copy_undone_to) reproduces the inputs
    /// exactly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hindsight::core::{Action, History};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Step(i32);
    ///
    /// impl Action for Step {
    ///     fn apply(&self) -> Self { Step(self.0) }
    ///     fn undo(&self) -> Self { Step(self.0) }
    /// }
    ///
    /// let history = History::from_ordered([Step(1), Step(2)], [Step(3)]);
    ///
    /// let mut done = Vec::new();
    /// history.copy_done_to(&mut done);
    /// assert_eq!(done, vec![Step(1), Step(2)]);
    /// ```
    pub fn from_ordered<D, U>(done_items: D, undone_items: U) -> Self
    where
        D: IntoIterator<Item = A>,
        U: IntoIterator<Item = A>,
    {
        History {
            done: Chain::from_ordered(done_items),
            undone: Chain::from_ordered(undone_items),
        }
    }

    /// Performs `action` and returns the new history.
    ///
    /// The action's applied representation becomes the most recent done
    /// entry. The undone side is cleared: redo history is only meaningful
    /// immediately after an undo, and a fresh action invalidates it.
    pub fn apply(&self, action: A) -> Self {
        let applied = action.apply();
        trace!(action = ?applied, "applied action; redo side cleared");
        History {
            done: self.done.push(applied),
            undone: Chain::empty(),
        }
    }

    /// Reverts the most recently done action and returns the new history.
    ///
    /// The reverted representation becomes the most recent undone entry.
    /// When there is nothing to undo the result equals this history - the
    /// empty boundary is a defined no-op, not a failure.
    pub fn undo(&self) -> Self {
        match self.done.head() {
            None => {
                trace!("undo with empty done side is a no-op");
                self.clone()
            }
            Some(last) => {
                let reverted = last.undo();
                trace!(action = ?reverted, "reverted most recent action");
                History {
                    done: self.done.next(),
                    undone: self.undone.push(reverted),
                }
            }
        }
    }

    /// Re-performs the most recently undone action and returns the new
    /// history.
    ///
    /// Symmetric to [`undo`](Self::undo) with the two sides swapped; a
    /// no-op when there is nothing to redo.
    pub fn redo(&self) -> Self {
        match self.undone.head() {
            None => {
                trace!("redo with empty undone side is a no-op");
                self.clone()
            }
            Some(last) => {
                let reapplied = last.apply();
                trace!(action = ?reapplied, "re-applied most recently undone action");
                History {
                    done: self.done.push(reapplied),
                    undone: self.undone.next(),
                }
            }
        }
    }

    /// Like [`undo`](Self::undo), but reports the empty boundary instead
    /// of absorbing it.
    pub fn try_undo(&self) -> Result<Self, HistoryError> {
        if self.can_undo() {
            Ok(self.undo())
        } else {
            Err(HistoryError::NothingToUndo)
        }
    }

    /// Like [`redo`](Self::redo), but reports the empty boundary instead
    /// of absorbing it.
    pub fn try_redo(&self) -> Result<Self, HistoryError> {
        if self.can_redo() {
            Ok(self.redo())
        } else {
            Err(HistoryError::NothingToRedo)
        }
    }

    /// Returns a history with the done side emptied and the undone side
    /// unchanged.
    pub fn clear_done(&self) -> Self {
        History {
            done: Chain::empty(),
            undone: self.undone.clone(),
        }
    }

    /// Returns a history with the undone side emptied and the done side
    /// unchanged.
    pub fn clear_undone(&self) -> Self {
        History {
            done: self.done.clone(),
            undone: Chain::empty(),
        }
    }

    /// Returns `true` if there is at least one action to undo.
    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    /// Returns `true` if there is at least one action to redo.
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Returns the most recently done action, if any.
    pub fn last_done(&self) -> Option<&A> {
        self.done.head()
    }

    /// Returns the most recently undone action, if any.
    pub fn last_undone(&self) -> Option<&A> {
        self.undone.head()
    }

    /// Appends the done actions to `out` in chronological (oldest-first)
    /// order.
    pub fn copy_done_to(&self, out: &mut Vec<A>) {
        self.done.copy_into(out);
    }

    /// Appends the undone actions to `out` in chronological (oldest-first)
    /// order.
    pub fn copy_undone_to(&self, out: &mut Vec<A>) {
        self.undone.copy_into(out);
    }
}

impl<A: Action> Default for History<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> PartialEq for History<A> {
    fn eq(&self, other: &Self) -> bool {
        self.done == other.done && self.undone == other.undone
    }
}

impl<A: Action + Eq> Eq for History<A> {}

impl<A: Action + Hash> Hash for History<A> {
    /// Hashes the done chain then the undone chain; each chain's terminal
    /// marker keeps the two unambiguously framed, so moving an action from
    /// one side to the other changes the hash.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.done.hash(state);
        self.undone.hash(state);
    }
}
