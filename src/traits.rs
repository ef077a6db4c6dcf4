//! Common trait and error type for the priority queue
//!
//! - [`PriorityQueue`]: the queue interface, shaped after Rust's `BinaryHeap`
//!   (`push` / `peek` / `pop`) but surfacing the lowest-ranked item
//! - [`InvariantViolation`]: what a structural self-check reports when the
//!   forest is found in an inconsistent state
//!
//! Querying an empty queue is not an error: `peek` and `pop` return `None`.

use std::fmt;

/// A structural invariant of the binomial forest that did not hold
///
/// Produced by [`BinomialQueue::verify`](crate::binomial::BinomialQueue::verify).
/// A correct queue never produces one; the check exists for tests and for
/// callers who suspect a comparator that is not a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The tree stored in `slot` does not have order `slot`
    TreeOrder {
        /// Forest slot holding the tree
        slot: usize,
        /// Number of children the root actually has
        found: usize,
    },
    /// A child tree inside the tree at `slot` has the wrong order
    ChildOrder {
        /// Forest slot of the enclosing top-level tree
        slot: usize,
        /// Order the child should have (its position among its siblings)
        expected: usize,
        /// Order the child actually has
        found: usize,
    },
    /// A child ranks strictly before its parent in the tree at `slot`
    HeapOrder {
        /// Forest slot of the enclosing top-level tree
        slot: usize,
    },
    /// The reported length differs from the sum of 2^k over occupied slots
    CountMismatch {
        /// Length the queue reports
        expected: usize,
        /// Length implied by the forest shape
        found: usize,
    },
    /// The highest slot of the forest is empty
    TrailingEmptySlot {
        /// Index of the empty slot
        slot: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::TreeOrder { slot, found } => {
                write!(f, "tree in slot {slot} has order {found}")
            }
            InvariantViolation::ChildOrder {
                slot,
                expected,
                found,
            } => {
                write!(
                    f,
                    "child of order {found} found where order {expected} belongs (tree in slot {slot})"
                )
            }
            InvariantViolation::HeapOrder { slot } => {
                write!(f, "child ranks before its parent (tree in slot {slot})")
            }
            InvariantViolation::CountMismatch { expected, found } => {
                write!(f, "queue reports {expected} items but the forest holds {found}")
            }
            InvariantViolation::TrailingEmptySlot { slot } => {
                write!(f, "highest forest slot {slot} is empty")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Trait for priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an item and reports the new length
/// - `pop` removes and returns the lowest-ranked item
/// - `peek` returns the lowest-ranked item without removing it
///
/// Unlike `BinaryHeap`, which is a max-heap over `Ord`, implementors rank
/// items with an injected comparator and surface the *lowest* rank first.
///
/// # Example
///
/// ```rust
/// use binomial_queue::{BinomialQueue, PriorityQueue};
///
/// let mut queue = BinomialQueue::new();
/// queue.push(3);
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.pop(), Some(1));
/// ```
pub trait PriorityQueue<T> {
    /// Returns true if the queue holds no items
    fn is_empty(&self) -> bool;

    /// Returns the number of items in the queue
    fn len(&self) -> usize;

    /// Inserts an item, returning the new length
    ///
    /// # Time Complexity
    /// O(log n) worst case, O(1) amortized over a run of pushes.
    fn push(&mut self, item: T) -> usize;

    /// Returns the lowest-ranked item without removing it
    ///
    /// # Time Complexity
    /// O(log n)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the lowest-ranked item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Removes every item
    fn clear(&mut self);
}
