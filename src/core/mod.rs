//! Core persistent undo/redo types.
//!
//! This module contains the pure functional core of the library:
//! - The `Action` capability for reversible values
//! - Persistent, structurally-shared chains via `Chain`
//! - The undo/redo state machine via `History`
//!
//! All logic in this module is pure (no side effects beyond trace-level
//! diagnostics); every operation returns a new value and leaves its
//! receiver untouched.

mod action;
mod chain;
mod error;
mod history;
mod value;

pub use action::Action;
pub use chain::Chain;
pub use error::HistoryError;
pub use history::History;
