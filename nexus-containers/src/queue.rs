//! FIFO queue over an arena-backed chain.
//!
//! Elements [`join`](Queue::join) at the tail and are fetched from the head
//! in arrival order. Index 0 is the head.
//!
//! # Example
//!
//! ```
//! use nexus_containers::Queue;
//!
//! let mut queue: Queue<&str> = Queue::new();
//! queue.join("first");
//! queue.join("second");
//! queue.join("third");
//!
//! assert_eq!(queue.head(), Some(&"first"));
//! assert_eq!(queue.fetch_head(), Some("first"));
//! assert_eq!(queue.fetch_tail(), Some("third"));
//! assert_eq!(queue.len(), 1);
//! ```

use crate::owned::{Iter, IterMut, OwnedChain};
use crate::{Index, OutOfRange};

/// A first-in, first-out queue.
///
/// Fetching or peeking an empty queue returns `None` and changes nothing.
pub struct Queue<T, Idx: Index = u32> {
    inner: OwnedChain<T, Idx>,
}

impl<T, Idx: Index> Queue<T, Idx> {
    /// Creates an empty queue without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: OwnedChain::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the index type's range.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: OwnedChain::with_capacity(capacity),
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Enqueues an element at the tail.
    #[inline]
    pub fn join(&mut self, value: T) {
        self.inner.push_back(value);
    }

    /// Removes and returns the oldest element.
    #[inline]
    pub fn fetch_head(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Removes and returns the newest element.
    #[inline]
    pub fn fetch_tail(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    /// Returns the oldest element without removing it.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Returns the oldest element mutably.
    #[inline]
    pub fn head_mut(&mut self) -> Option<&mut T> {
        self.inner.front_mut()
    }

    /// Returns the newest element without removing it.
    #[inline]
    pub fn tail(&self) -> Option<&T> {
        self.inner.back()
    }

    /// Returns the newest element mutably.
    #[inline]
    pub fn tail_mut(&mut self) -> Option<&mut T> {
        self.inner.back_mut()
    }

    /// Returns the element `index` positions behind the head.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.inner.get(index)
    }

    /// Mutable form of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.inner.get_mut(index)
    }

    /// Replaces the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`; the queue is unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        self.inner.set(index, value)
    }

    /// Returns how far behind the head the first element equal to `value` is.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.inner.index_of(value)
    }

    /// Removes and returns the element at `index`, preserving the order of
    /// the rest.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`; the queue is unchanged.
    #[inline]
    pub fn erase_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        self.inner.remove_at(index)
    }

    /// Drops every queued element.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Overwrites every element with a clone of `value`.
    #[inline]
    pub fn reset_all(&mut self, value: T)
    where
        T: Clone,
    {
        self.inner.reset_all(value);
    }

    /// Iterates from head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Idx> {
        self.inner.iter()
    }

    /// Mutably iterates from head to tail.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, Idx> {
        self.inner.iter_mut()
    }

    /// Moves the contents into a new queue, leaving this one empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            inner: self.inner.take(),
        }
    }
}

linked_facade!(Queue, join);
