//! Binomial Queue implementation
//!
//! A binomial queue is a forest of binomial trees with:
//! - O(log n) insert worst case, O(1) amortized over a run of inserts
//! - O(log n) peek and extract-min
//!
//! # Algorithm Overview
//!
//! The forest is an array of slots indexed by *order*. Slot k is either empty
//! or holds exactly one binomial tree of order k, so the occupied slots spell
//! out the binary representation of the item count.
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and k children, of orders 0, 1, ..., k-1
//!
//! **Key Operations**:
//! - **Insert**: add a B₀ like adding 1 to a binary counter; each occupied slot
//!   on the way is linked with the carry and emptied
//! - **Peek**: scan the roots of the forest, O(log n) of them
//! - **Extract-min**: detach the tree with the lowest root and fold its
//!   children (one tree per order below its own) back into the forest with a
//!   single carry, exactly like binary addition
//!
//! Every tree is heap ordered: no node ranks before its parent. Trees are owned
//! values that move from slot to carry to child list; there is no reference
//! counting and no parent pointer.
//!
//! # Tie-breaking
//!
//! Ties are resolved deterministically:
//! - when two trees are linked, the one passed first keeps the root unless the
//!   other root ranks strictly lower. On insert the carry is passed first, so a
//!   newly inserted item wins ties against the tree it meets.
//! - when several roots rank equally lowest, the one in the lowest slot is
//!   surfaced.

use crate::traits::{InvariantViolation, PriorityQueue};
use compare::{natural, Compare, Natural};
use smallvec::SmallVec;
use std::fmt;

/// Slots kept inline before the forest spills to the heap (queues of up to 255 items)
const INLINE_ORDERS: usize = 8;

/// Forest slots indexed by tree order
type Forest<T> = SmallVec<[Option<Tree<T>>; INLINE_ORDERS]>;

/// A binomial tree
///
/// `children[i]` is a tree of order i, so the tree's own order is the number
/// of children it has.
#[derive(Clone)]
struct Tree<T> {
    item: T,
    children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    fn leaf(item: T) -> Self {
        Tree {
            item,
            children: Vec::new(),
        }
    }

    fn order(&self) -> usize {
        self.children.len()
    }
}

/// Binomial Queue
///
/// Holds items ranked by the comparator `C` and surfaces the lowest-ranked
/// one first. With the default [`Natural`] comparator this is a min-queue.
///
/// # Example
///
/// ```rust
/// use binomial_queue::BinomialQueue;
///
/// let mut queue = BinomialQueue::new();
/// assert_eq!(queue.insert([5, 3, 8, 1, 4]), 5);
/// assert_eq!(queue.peek_min(), Some(&1));
///
/// let drained: Vec<_> = std::iter::from_fn(|| queue.extract_min()).collect();
/// assert_eq!(drained, vec![1, 3, 4, 5, 8]);
/// assert_eq!(queue.extract_min(), None);
/// ```
///
/// Any `Fn(&T, &T) -> Ordering` works as a comparator:
///
/// ```rust
/// use binomial_queue::BinomialQueue;
///
/// let mut queue = BinomialQueue::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// queue.insert(["three", "a", "to"]);
/// assert_eq!(queue.extract_min(), Some("a"));
/// ```
#[derive(Clone)]
pub struct BinomialQueue<T, C = Natural<T>> {
    /// Slot k is empty or holds a tree of order k. The last slot is never empty.
    forest: Forest<T>,
    cmp: C,
    /// Number of items; equals the sum of 2^k over occupied slots
    len: usize,
}

impl<T: Ord> BinomialQueue<T> {
    /// Creates an empty queue ordered by `T`'s own `Ord` (smallest first)
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }
}

impl<T, C> BinomialQueue<T, C> {
    /// Returns the number of items in the queue
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every item, dropping the whole forest
    pub fn clear(&mut self) {
        self.forest.clear();
        self.len = 0;
    }

    /// Returns the comparator the queue was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the orders of the trees currently in the forest, ascending
    ///
    /// These are exactly the set bits of [`len`](Self::len):
    ///
    /// ```rust
    /// use binomial_queue::BinomialQueue;
    ///
    /// let queue: BinomialQueue<_> = (0..13).collect();
    /// assert_eq!(queue.orders().collect::<Vec<_>>(), vec![0, 2, 3]); // 13 = 0b1101
    /// ```
    pub fn orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.forest
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(order, _)| order)
    }

    /// Drops empty slots from the top of the forest
    fn trim(&mut self) {
        while let Some(None) = self.forest.last() {
            self.forest.pop();
        }
    }
}

impl<T, C: Compare<T>> BinomialQueue<T, C> {
    /// Creates an empty queue ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            forest: SmallVec::new(),
            cmp,
            len: 0,
        }
    }

    /// Inserts every item of `items`, in order, returning the new length
    ///
    /// **Time Complexity**: O(log n) worst case per item, O(1) amortized
    ///
    /// **Algorithm**: binary-counter increment, once per item
    /// 1. Wrap the item in a B₀ tree, the carry
    /// 2. Starting at slot 0, while the slot is occupied, link the carry with
    ///    its occupant, empty the slot and move one slot up
    /// 3. Drop the carry into the first empty slot
    ///
    /// An empty `items` leaves the queue untouched.
    pub fn insert<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        for item in items {
            self.carry_from(Tree::leaf(item), 0);
            self.len += 1;
        }
        self.len
    }

    /// Inserts a single item, returning the new length
    pub fn push(&mut self, item: T) -> usize {
        self.insert(std::iter::once(item))
    }

    /// Returns the lowest-ranked item without removing it
    ///
    /// **Time Complexity**: O(log n), one comparison per occupied slot
    ///
    /// When several roots rank equally lowest, the one in the lowest slot is
    /// returned. Repeated calls without an intervening mutation return the
    /// same item.
    pub fn peek_min(&self) -> Option<&T> {
        self.min_root().map(|(_, item)| item)
    }

    /// Alias for [`peek_min`](Self::peek_min)
    pub fn find(&self) -> Option<&T> {
        self.peek_min()
    }

    /// Removes and returns the lowest-ranked item
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// **Algorithm**:
    /// 1. Locate the lowest root exactly as [`peek_min`](Self::peek_min) does
    ///    and take its tree (the victim, of order k) out of the forest
    /// 2. Fold the victim's children, orders 0..k, into the remaining forest
    ///    from order 0 upward with a single carry:
    ///    - carry held: link it with the child; the forest slot is untouched
    ///    - no carry, slot occupied: link the occupant with the child into a
    ///      new carry and empty the slot
    ///    - no carry, slot empty: the child takes the slot
    /// 3. A carry left over at order k keeps propagating as in
    ///    [`insert`](Self::insert)
    ///
    /// Returns `None`, without touching the queue, when it is empty.
    pub fn extract_min(&mut self) -> Option<T> {
        let (slot, _) = self.min_root()?;
        let victim = self.forest.get_mut(slot).and_then(Option::take)?;
        self.trim();

        let Tree { item, children } = victim;
        let top = children.len();
        let mut carry: Option<Tree<T>> = None;

        for (order, child) in children.into_iter().enumerate() {
            carry = match carry {
                Some(held) => Some(Self::link(&self.cmp, held, child)),
                // With no carry so far every lower order was placed, so the
                // forest reaches at least up to `order`
                None => match self.forest.get_mut(order) {
                    Some(slot) => match slot.take() {
                        Some(resident) => Some(Self::link(&self.cmp, resident, child)),
                        None => {
                            *slot = Some(child);
                            None
                        }
                    },
                    None => {
                        self.forest.push(Some(child));
                        None
                    }
                },
            };
        }

        if let Some(carry) = carry {
            self.carry_from(carry, top);
        }

        self.len -= 1;
        Some(item)
    }

    /// Alias for [`extract_min`](Self::extract_min)
    pub fn delete(&mut self) -> Option<T> {
        self.extract_min()
    }

    /// Checks every structural invariant of the forest
    ///
    /// - the tree in slot k has order k, and each of its children has the
    ///   order of its position
    /// - no child ranks strictly before its parent
    /// - the sum of 2^k over occupied slots equals [`len`](Self::len)
    /// - the highest slot is occupied
    ///
    /// A queue driven by a comparator that is a total order always passes.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        if let Some(None) = self.forest.last() {
            return Err(InvariantViolation::TrailingEmptySlot {
                slot: self.forest.len() - 1,
            });
        }

        let mut total = 0usize;
        for (slot, tree) in self.forest.iter().enumerate() {
            if let Some(tree) = tree {
                if tree.order() != slot {
                    return Err(InvariantViolation::TreeOrder {
                        slot,
                        found: tree.order(),
                    });
                }
                self.verify_tree(slot, tree)?;
                total += 1 << slot;
            }
        }

        if total != self.len {
            return Err(InvariantViolation::CountMismatch {
                expected: self.len,
                found: total,
            });
        }
        Ok(())
    }

    fn verify_tree(&self, slot: usize, tree: &Tree<T>) -> Result<(), InvariantViolation> {
        for (expected, child) in tree.children.iter().enumerate() {
            if child.order() != expected {
                return Err(InvariantViolation::ChildOrder {
                    slot,
                    expected,
                    found: child.order(),
                });
            }
            if self.cmp.compares_lt(&child.item, &tree.item) {
                return Err(InvariantViolation::HeapOrder { slot });
            }
            self.verify_tree(slot, child)?;
        }
        Ok(())
    }

    /// Links two trees of the same order into one tree of the next order
    ///
    /// **Time Complexity**: O(1)
    ///
    /// `second` becomes the root only if it ranks strictly before `first`;
    /// on a tie `first` stays on top. The losing tree is appended as the
    /// winner's last child, which is the child slot of its order.
    fn link(cmp: &C, first: Tree<T>, second: Tree<T>) -> Tree<T> {
        debug_assert_eq!(first.order(), second.order());

        let (mut parent, child) = if cmp.compares_lt(&second.item, &first.item) {
            (second, first)
        } else {
            (first, second)
        };
        parent.children.push(child);
        parent
    }

    /// Drops `carry`, a tree of order `order`, into the forest at slot `order`
    ///
    /// Each occupied slot met on the way is linked with the carry (carry
    /// first) and emptied, moving one slot up, until an empty slot takes it.
    fn carry_from(&mut self, mut carry: Tree<T>, mut order: usize) {
        debug_assert_eq!(carry.order(), order);

        while self.forest.len() < order {
            self.forest.push(None);
        }

        loop {
            match self.forest.get_mut(order) {
                None => {
                    self.forest.push(Some(carry));
                    return;
                }
                Some(slot) => match slot.take() {
                    None => {
                        *slot = Some(carry);
                        return;
                    }
                    Some(occupant) => {
                        carry = Self::link(&self.cmp, carry, occupant);
                        order += 1;
                    }
                },
            }
        }
    }

    /// Finds the slot holding the lowest root, and that root's item
    ///
    /// Scans from the highest slot down, replacing the best so far whenever
    /// the candidate does not rank after it, so the lowest slot wins ties.
    fn min_root(&self) -> Option<(usize, &T)> {
        let mut best: Option<(usize, &T)> = None;

        for (order, tree) in self
            .forest
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(order, slot)| slot.as_ref().map(|tree| (order, tree)))
        {
            let replace = match best {
                Some((_, current)) => !self.cmp.compares_lt(current, &tree.item),
                None => true,
            };
            if replace {
                best = Some((order, &tree.item));
            }
        }

        best
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for BinomialQueue<T, C> {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, item: T) -> usize {
        BinomialQueue::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        self.peek_min()
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min()
    }

    fn clear(&mut self) {
        BinomialQueue::clear(self)
    }
}

impl<T, C: Compare<T> + Default> Default for BinomialQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinomialQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert(iter);
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinomialQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::default();
        queue.insert(iter);
        queue
    }
}

impl<T, C> fmt::Debug for BinomialQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialQueue")
            .field("len", &self.len)
            .field("orders", &self.orders().collect::<Vec<_>>())
            .finish()
    }
}
