//! LIFO stack over an arena-backed chain.
//!
//! Index 0 is the top of the stack; iteration runs from the top down to the
//! bottom. Collecting or extending pushes items in iteration order, so the
//! last item ends on top.
//!
//! # Example
//!
//! ```
//! use nexus_containers::Stack;
//!
//! let mut stack: Stack<u64> = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! assert_eq!(stack.peek(), Some(&3));
//! assert_eq!(stack.bottom(), Some(&1));
//! assert_eq!(stack.to_string(), "3, 2, 1");
//!
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.pop(), Some(2));
//! ```

use crate::owned::{Iter, IterMut, OwnedChain};
use crate::{Index, OutOfRange};

/// A last-in, first-out stack.
///
/// Popping or peeking an empty stack returns `None` and changes nothing.
pub struct Stack<T, Idx: Index = u32> {
    inner: OwnedChain<T, Idx>,
}

impl<T, Idx: Index> Stack<T, Idx> {
    /// Creates an empty stack without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: OwnedChain::new(),
        }
    }

    /// Creates an empty stack with room for `capacity` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the index type's range.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: OwnedChain::with_capacity(capacity),
        }
    }

    /// Returns the number of stacked elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Places an element on top.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.inner.push_front(value);
    }

    /// Removes and returns the top element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Returns the top element mutably.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.inner.front_mut()
    }

    /// Returns the oldest element.
    #[inline]
    pub fn bottom(&self) -> Option<&T> {
        self.inner.back()
    }

    /// Returns the element `index` positions below the top.
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
    /// Returns [`OutOfRange`] if `index >= len`; the stack is unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        self.inner.set(index, value)
    }

    /// Returns the depth of the first element equal to `value`, counting
    /// from the top.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.inner.index_of(value)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`; the stack is unchanged.
    #[inline]
    pub fn erase_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        self.inner.remove_at(index)
    }

    /// Drops every element.
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

    /// Iterates from top to bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Idx> {
        self.inner.iter()
    }

    /// Mutably iterates from top to bottom.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, Idx> {
        self.inner.iter_mut()
    }

    /// Moves the contents into a new stack, leaving this one empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            inner: self.inner.take(),
        }
    }
}

linked_facade!(Stack, push);
