//! Minimum-priority queue with deterministic tie-breaking.
//!
//! Items are ordered by a `u64` priority extracted with a caller-supplied
//! function. Items with equal priority come out in insertion order, so
//! repeated runs over the same input always merge nodes the same way.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap slot: priority and insertion sequence decide the order, the item
/// rides along.
#[derive(Debug)]
struct Slot<T> {
    priority: u64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Slot<T> {}

impl<T> PartialOrd for Slot<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Slot<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.seq).cmp(&(other.priority, other.seq))
    }
}

/// A min-priority queue keyed by `F`.
///
/// ```
/// use hfc_huffman::MinQueue;
///
/// let mut queue = MinQueue::new(|&(_, weight): &(char, u64)| weight);
/// queue.push(('b', 2));
/// queue.push(('a', 1));
/// queue.push(('c', 1));
///
/// assert_eq!(queue.pop(), Some(('a', 1)));
/// assert_eq!(queue.pop(), Some(('c', 1)));
/// assert_eq!(queue.pop(), Some(('b', 2)));
/// assert_eq!(queue.pop(), None);
/// ```
pub struct MinQueue<T, F> {
    heap: BinaryHeap<Reverse<Slot<T>>>,
    priority: F,
    next_seq: u64,
}

impl<T, F> MinQueue<T, F>
where
    F: Fn(&T) -> u64,
{
    /// Create an empty queue ordered by `priority`.
    pub fn new(priority: F) -> Self {
        Self::with_capacity(0, priority)
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize, priority: F) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            priority,
            next_seq: 0,
        }
    }

    /// Insert an item.
    pub fn push(&mut self, item: T) {
        let priority = (self.priority)(&item);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Slot {
            priority,
            seq,
            item,
        }));
    }

    /// Remove the item with the lowest priority (earliest inserted on ties).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(slot)| slot.item)
    }

    /// Look at the item `pop` would return.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(slot)| &slot.item)
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, F> Extend<T> for MinQueue<T, F>
where
    F: Fn(&T) -> u64,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, F> std::fmt::Debug for MinQueue<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinQueue")
            .field("len", &self.heap.len())
            .field("next_seq", &self.next_seq)
            .finish()
    }
}
