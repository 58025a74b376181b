//! History error types.

use thiserror::Error;

/// Errors reported by the fallible history operations.
///
/// The plain [`undo`](super::History::undo) and [`redo`](super::History::redo)
/// absorb the empty boundary as a no-op; [`try_undo`](super::History::try_undo)
/// and [`try_redo`](super::History::try_redo) surface it as one of these
/// variants instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// The done side is empty; there is no action to undo
    #[error("nothing to undo")]
    NothingToUndo,

    /// The undone side is empty; there is no action to redo
    #[error("nothing to redo")]
    NothingToRedo,
}
