//! Persistent, structurally-shared chains of values.
//!
//! A [`Chain`] is an immutable singly-linked sequence ordered
//! most-recent-first, with a sentinel empty terminal that absorbs every
//! operation as a no-op. Tails are shared between chains rather than
//! copied - pushing allocates exactly one new head cell and reuses the
//! existing chain as its continuation, so arbitrarily many snapshots can
//! coexist at O(1) cost per divergence.

use super::value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One cell of a chain: either the shared empty terminal or a value plus
/// a shared continuation. Cells are never mutated after construction.
#[derive(Debug)]
enum Link<T> {
    Empty,
    Node { value: T, next: Arc<Link<T>> },
}

/// An immutable, structurally-shared sequence ordered most-recent-first.
///
/// All operations return a new `Chain` and leave the receiver untouched;
/// any previously obtained chain stays valid indefinitely. Operations on
/// the empty chain are total: inspecting yields nothing, transforming
/// yields the empty chain again, so callers never need an emptiness branch.
///
/// Equality and hashing are structural - two chains built independently
/// from equal values compare equal and hash identically, regardless of
/// which cells they share.
///
/// # Example
///
/// ```rust
/// use hindsight::core::Chain;
///
/// let base = Chain::empty().push(1).push(2);
/// let longer = base.push(3);
///
/// // `base` is unaffected by the push and both chains share its cells.
/// assert_eq!(base.head(), Some(&2));
/// assert_eq!(longer.head(), Some(&3));
/// assert_eq!(longer.next(), base);
/// ```
pub struct Chain<T> {
    link: Arc<Link<T>>,
}

impl<T> Chain<T> {
    /// Creates the empty chain.
    ///
    /// The empty chain is the identity for every operation: it has no
    /// head, is its own tail, and absorbs head transformations.
    pub fn empty() -> Self {
        Chain {
            link: Arc::new(Link::Empty),
        }
    }

    /// Returns a new chain with `value` as its head and this chain as its
    /// unchanged, shared continuation.
    ///
    /// O(1): only the new head cell is allocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hindsight::core::Chain;
    ///
    /// let chain = Chain::empty().push("older").push("newer");
    /// assert_eq!(chain.head(), Some(&"newer"));
    /// assert_eq!(chain.next().head(), Some(&"older"));
    /// ```
    pub fn push(&self, value: T) -> Self {
        Chain {
            link: Arc::new(Link::Node {
                value,
                next: Arc::clone(&self.link),
            }),
        }
    }

    /// Builds a chain from an oldest-first sequence of values.
    ///
    /// Folds [`push`](Self::push) over `items`, so the last item becomes
    /// the head and the chain ends up ordered most-recent-first. O(n).
    ///
    /// # Example
    ///
    /// ```rust
    /// use hindsight::core::Chain;
    ///
    /// let chain = Chain::from_ordered([1, 2, 3]);
    /// assert_eq!(chain.head(), Some(&3));
    /// ```
    pub fn from_ordered<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items
            .into_iter()
            .fold(Chain::empty(), |chain, value| chain.push(value))
    }

    /// Returns the most recent value, or `None` on the empty chain.
    pub fn head(&self) -> Option<&T> {
        match self.link.as_ref() {
            Link::Empty => None,
            Link::Node { value, .. } => Some(value),
        }
    }

    /// Returns `true` if this is the empty chain.
    pub fn is_empty(&self) -> bool {
        matches!(self.link.as_ref(), Link::Empty)
    }

    /// Returns the number of values in the chain. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the continuation of this chain, sharing it as-is.
    ///
    /// On the empty chain returns the empty chain itself - the sentinel
    /// self-return that lets callers pop unconditionally.
    pub fn next(&self) -> Self {
        match self.link.as_ref() {
            Link::Empty => self.clone(),
            Link::Node { next, .. } => Chain {
                link: Arc::clone(next),
            },
        }
    }

    /// Returns a new chain whose head is `f(head)` and whose continuation
    /// is unchanged.
    ///
    /// On the empty chain returns the empty chain; `f` is never invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hindsight::core::Chain;
    ///
    /// let chain = Chain::from_ordered([1, 2]).apply_to_head(|n| n * 10);
    /// let mut out = Vec::new();
    /// chain.copy_into(&mut out);
    /// assert_eq!(out, vec![1, 20]);
    /// ```
    pub fn apply_to_head<F>(&self, f: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        match self.link.as_ref() {
            Link::Empty => self.clone(),
            Link::Node { value, next } => Chain {
                link: Arc::new(Link::Node {
                    value: f(value),
                    next: Arc::clone(next),
                }),
            },
        }
    }

    /// Iterates over the values most-recent-first, head to terminal.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut current = self.link.as_ref();
        std::iter::from_fn(move || match current {
            Link::Empty => None,
            Link::Node { value, next } => {
                current = next.as_ref();
                Some(value)
            }
        })
    }
}

impl<T: Clone> Chain<T> {
    /// Returns a chain with the same head value as this one but with its
    /// continuation replaced wholesale by `new_tail`.
    ///
    /// Only the head cell is inspected and rewritten; the receiver's prior
    /// continuation is discarded entirely. On the empty chain this yields
    /// `new_tail` directly - splicing onto nothing is the other chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hindsight::core::Chain;
    ///
    /// let left = Chain::from_ordered([1, 2]);
    /// let right = Chain::from_ordered([8, 9]);
    ///
    /// let mut out = Vec::new();
    /// left.splice_onto(&right).copy_into(&mut out);
    /// assert_eq!(out, vec![8, 9, 2]);
    /// ```
    pub fn splice_onto(&self, new_tail: &Self) -> Self {
        match self.link.as_ref() {
            Link::Empty => new_tail.clone(),
            Link::Node { value, .. } => Chain {
                link: Arc::new(Link::Node {
                    value: value.clone(),
                    next: Arc::clone(&new_tail.link),
                }),
            },
        }
    }

    /// Attaches this chain as the continuation after `other`'s head.
    ///
    /// Equivalent to `other.splice_onto(self)`.
    pub fn prepend(&self, other: &Self) -> Self {
        other.splice_onto(self)
    }

    /// Appends all values to `out` in chronological (oldest-first) order.
    ///
    /// The chain is stored most-recent-first, so this collects the full
    /// head-to-terminal path and writes it reversed. O(n) time and O(n)
    /// auxiliary space.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hindsight::core::Chain;
    ///
    /// let chain = Chain::from_ordered(["a", "b", "c"]);
    /// let mut out = Vec::new();
    /// chain.copy_into(&mut out);
    /// assert_eq!(out, vec!["a", "b", "c"]);
    /// ```
    pub fn copy_into(&self, out: &mut Vec<T>) {
        let path: Vec<&T> = self.iter().collect();
        out.extend(path.into_iter().rev().cloned());
    }
}

impl<T> Clone for Chain<T> {
    /// Clones the handle, sharing the cells. O(1); no values are copied.
    fn clone(&self) -> Self {
        Chain {
            link: Arc::clone(&self.link),
        }
    }
}

impl<T> Drop for Chain<T> {
    /// Unlinks uniquely owned cells one at a time so that destruction is
    /// iterative no matter how long the chain is. The walk stops at the
    /// first cell still shared with another chain: releasing that handle
    /// is a reference-count decrement, and the surviving owner keeps the
    /// suffix alive unchanged.
    fn drop(&mut self) {
        if Arc::strong_count(&self.link) != 1 || matches!(self.link.as_ref(), Link::Empty) {
            return;
        }
        let mut link = std::mem::replace(&mut self.link, Arc::new(Link::Empty));
        while let Ok(Link::Node { next, .. }) = Arc::try_unwrap(link) {
            link = next;
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    /// Structural equality: both chains are walked in lockstep until both
    /// reach the terminal with equal values throughout. Shared cells short
    /// circuit the walk by identity, which cannot change the outcome since
    /// cells are immutable.
    fn eq(&self, other: &Self) -> bool {
        value::eq_by_identity_or(&self.link, &other.link, || {
            let mut a = &self.link;
            let mut b = &other.link;
            loop {
                if Arc::ptr_eq(a, b) {
                    return true;
                }
                match (a.as_ref(), b.as_ref()) {
                    (Link::Empty, Link::Empty) => return true,
                    (
                        Link::Node { value: va, next: na },
                        Link::Node { value: vb, next: nb },
                    ) => {
                        if va != vb {
                            return false;
                        }
                        a = na;
                        b = nb;
                    }
                    _ => return false,
                }
            }
        })
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: Hash> Hash for Chain<T> {
    /// Order-sensitive combination of all element hashes followed by the
    /// terminal's fixed hash, so equal chains hash equal regardless of
    /// cell identity and prefixes never collide with their extensions.
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self.iter() {
            item.hash(state);
        }
        value::hash_terminal(state);
    }
}
