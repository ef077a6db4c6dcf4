//! Comparators for ordering queue items
//!
//! The queue never relies on `Ord` directly. It holds a value implementing
//! [`Compare`] from the `compare` crate, which decides how two items rank
//! against each other. The item ranked lowest is surfaced first.
//!
//! - [`Natural`] (built with [`natural`]): ascending order via `Ord`, the default
//! - [`Compare::rev`]: flips another comparator, e.g. for a max-queue
//! - [`Signed`]: adapts a comparator returning a signed integer
//! - Any `Fn(&T, &T) -> Ordering` closure is a comparator as-is
//!
//! # Example
//!
//! ```rust
//! use binomial_queue::comparator::{natural, Compare, Signed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(natural().compare(&1, &2), Ordering::Less);
//! assert_eq!(natural().rev().compare(&1, &2), Ordering::Greater);
//! assert_eq!(Signed(|a: &i32, b: &i32| a - b).compare(&7, &7), Ordering::Equal);
//! ```

use std::cmp::Ordering;

pub use compare::{natural, Compare, Natural, Rev};

/// Adapts a comparator returning a signed integer
///
/// Negative means the left item ranks first, zero means equal rank and
/// positive means the right item ranks first. Only the sign is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct Signed<F>(pub F);

impl<T: ?Sized, F> Compare<T> for Signed<F>
where
    F: Fn(&T, &T) -> i32,
{
    #[inline]
    fn compare(&self, l: &T, r: &T) -> Ordering {
        (self.0)(l, r).cmp(&0)
    }
}
