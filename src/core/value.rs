//! Value-semantics helpers shared by chain equality and hashing.

use std::hash::Hasher;
use std::sync::Arc;

/// Compares two shared handles by identity first, falling back to content
/// comparison only when they are distinct allocations.
///
/// Identity implies equality here because shared nodes are immutable, so
/// the fast path can never disagree with the content walk.
pub(crate) fn eq_by_identity_or<T, F>(this: &Arc<T>, other: &Arc<T>, content_eq: F) -> bool
where
    F: FnOnce() -> bool,
{
    Arc::ptr_eq(this, other) || content_eq()
}

/// Fixed hash contributed by the empty terminal.
///
/// Feeding this after the element hashes keeps chains of different lengths
/// from colliding by truncation and gives the empty chain a stable hash.
pub(crate) const TERMINAL_HASH: u8 = 0;

/// Writes the terminal marker into a hasher.
pub(crate) fn hash_terminal<H: Hasher>(state: &mut H) {
    state.write_u8(TERMINAL_HASH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_handles_compare_equal_without_content_walk() {
        let a = Arc::new(5);
        let b = Arc::clone(&a);

        assert!(eq_by_identity_or(&a, &b, || panic!("content walk reached")));
    }

    #[test]
    fn distinct_handles_defer_to_content() {
        let a = Arc::new(5);
        let b = Arc::new(5);

        assert!(eq_by_identity_or(&a, &b, || a == b));
        assert!(!eq_by_identity_or(&a, &b, || false));
    }
}
