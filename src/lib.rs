//! Hindsight: a persistent undo/redo history library
//!
//! Hindsight tracks reversible actions in immutable, structurally-shared
//! values. Do, undo and redo each return a *new* history; any history you
//! have already observed stays valid and inspectable forever, which makes
//! snapshots safe to keep for debugging, time-travel UIs and concurrent
//! readers.
//!
//! # Core Concepts
//!
//! - **Action**: your reversible value, implementing the pure
//!   [`Action`](core::Action) `apply`/`undo` capability
//! - **Chain**: a persistent most-recent-first sequence with O(1) push and
//!   shared tails
//! - **History**: the done/undone pair with the undo/redo protocol
//!
//! # Example
//!
//! ```rust
//! use hindsight::core::{Action, History};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Rename {
//!     from: &'static str,
//!     to: &'static str,
//!     renamed: bool,
//! }
//!
//! impl Action for Rename {
//!     fn apply(&self) -> Self {
//!         Rename { renamed: true, ..*self }
//!     }
//!
//!     fn undo(&self) -> Self {
//!         Rename { renamed: false, ..*self }
//!     }
//! }
//!
//! let history = History::new();
//! let history = history.apply(Rename { from: "a.txt", to: "b.txt", renamed: false });
//!
//! let undone = history.undo();
//! assert!(undone.can_redo());
//! assert_eq!(undone.redo(), history);
//! ```

pub mod core;

// Re-export commonly used types
pub use core::{Action, Chain, History, HistoryError};
