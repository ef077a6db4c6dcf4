//! Binomial Priority Queue for Rust
//!
//! This crate provides a priority queue built on a forest of binomial trees,
//! ordered by a comparator injected at construction instead of a hard-wired
//! `Ord`.
//!
//! # Features
//!
//! - **Binomial Queue**: O(log n) worst-case insert (O(1) amortized), peek and
//!   extract-min; the forest mirrors the binary representation of the length
//! - **Comparators**: natural order by default, closures, reversed order and
//!   signed-integer comparators (see [`comparator`])
//! - **Self-check**: [`BinomialQueue::verify`] reports any broken structural
//!   invariant as an [`InvariantViolation`]
//!
//! # Example
//!
//! ```rust
//! use binomial_queue::BinomialQueue;
//!
//! let mut queue = BinomialQueue::new();
//! queue.insert([5, 3, 8]);
//! queue.push(1);
//!
//! assert_eq!(queue.len(), 4);
//! assert_eq!(queue.peek_min(), Some(&1));
//! assert_eq!(queue.extract_min(), Some(1));
//! assert_eq!(queue.extract_min(), Some(3));
//!
//! queue.clear();
//! assert_eq!(queue.extract_min(), None);
//! ```

pub mod binomial;
pub mod comparator;
pub mod traits;

// Re-export the main types for convenience
pub use binomial::BinomialQueue;
pub use comparator::{natural, Compare, Natural, Rev, Signed};
pub use traits::{InvariantViolation, PriorityQueue};
