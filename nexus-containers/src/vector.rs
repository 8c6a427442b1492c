//! Growable contiguous array with explicit shrinking.
//!
//! [`Vector`] owns a single buffer of `capacity` slots, the first `len` of
//! which hold live elements. Pushing into a full buffer doubles it. Unlike
//! `std::vec::Vec`, capacity is a first-class part of the type's behaviour:
//! it is copied by [`Clone`], reset by [`Vector::take`], and only ever
//! reduced by [`Vector::shrink_to_fit`] or the `erase` family.
//!
//! # Example
//!
//! ```
//! use nexus_containers::Vector;
//!
//! let mut vector: Vector<u64> = Vector::new();
//! for i in 1..=5 {
//!     vector.push_back(i);
//! }
//! assert_eq!(vector.len(), 5);
//! assert_eq!(vector.capacity(), 8);
//!
//! vector.shrink_to_fit();
//! assert_eq!(vector.capacity(), 5);
//!
//! assert_eq!(vector.erase_at(0), Some(1));
//! assert_eq!(vector.capacity(), 4);
//! assert_eq!(vector.to_string(), "2, 3, 4, 5");
//! ```

use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ops;
use std::ptr;
use std::slice;

use tracing::{info, trace};

use crate::config::{DEFAULT_INITIAL_CAPACITY, VectorConfig};
use crate::{OutOfRange, render};

/// Report returned by [`Vector::preallocate`] when the request was below the
/// current length and had to be raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clamped {
    /// Capacity the caller asked for.
    pub requested: usize,
    /// Length the request was raised to.
    pub len: usize,
}

impl fmt::Display for Clamped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requested capacity {} is below length {}, clamped to {}",
            self.requested, self.len, self.len
        )
    }
}

/// A resizable array with doubling growth.
///
/// # Capacity
///
/// - Construction allocates the configured initial capacity
///   ([`DEFAULT_INITIAL_CAPACITY`] unless overridden).
/// - [`push_back`](Self::push_back) on a full vector reallocates to
///   `max(2 * capacity, 1)`.
/// - [`shrink_to_fit`](Self::shrink_to_fit), [`erase_at`](Self::erase_at)
///   and [`erase`](Self::erase) reduce capacity to `len`.
/// - Nothing else reduces capacity.
///
/// Every reallocation emits a `TRACE` event with `from` and `to` fields.
pub struct Vector<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector with [`DEFAULT_INITIAL_CAPACITY`].
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty vector with exactly `capacity` slots.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    /// Creates an empty vector from `config`.
    #[inline]
    pub fn with_config(config: &VectorConfig) -> Self {
        Self::with_capacity(config.capacity())
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an element, doubling the buffer first if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            let grown = match self.capacity().checked_mul(2) {
                Some(capacity) => capacity.max(1),
                None => panic!("capacity overflow"),
            };
            self.reallocate(grown);
        }
        self.buf[self.len].write(value);
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if empty.
    ///
    /// Capacity is unchanged.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // Safety: slot `len` was the last initialized slot and is now
        // outside the live prefix, so it is read exactly once.
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left. Capacity is unchanged.
    ///
    /// Returns `None` without touching the vector if `index >= len`.
    pub fn clear_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let tail = self.len - index - 1;
        // Safety: `index < len`, so the read is of a live element and the
        // `tail` elements after it are live and in bounds.
        let value = unsafe {
            let slot = self.buf.as_mut_ptr().cast::<T>().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, tail);
            value
        };
        self.len -= 1;
        Some(value)
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        let live = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), len);
        // Safety: the first `len` slots were initialized and `self.len` is
        // already zero, so a panicking destructor cannot cause a double drop.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Like [`clear_at`](Self::clear_at), then shrinks to fit.
    ///
    /// An out-of-range index removes nothing and does not shrink.
    pub fn erase_at(&mut self, index: usize) -> Option<T> {
        let value = self.clear_at(index)?;
        self.shrink_to_fit();
        Some(value)
    }

    /// Drops every element and releases the buffer.
    pub fn erase(&mut self) {
        self.clear();
        self.shrink_to_fit();
    }

    /// Reallocates to exactly `len` slots. No-op if already tight.
    pub fn shrink_to_fit(&mut self) {
        if self.len < self.capacity() {
            self.reallocate(self.len);
        }
    }

    /// Grows the buffer to at least `capacity` slots. Never shrinks.
    ///
    /// A request below `len` is raised to `len`, logged at `INFO`, and
    /// reported through the returned [`Clamped`].
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_containers::{Clamped, Vector};
    ///
    /// let mut vector: Vector<u64> = (0..5).collect();
    ///
    /// assert_eq!(vector.preallocate(2), Some(Clamped { requested: 2, len: 5 }));
    /// assert_eq!(vector.len(), 5);
    ///
    /// assert_eq!(vector.preallocate(64), None);
    /// assert_eq!(vector.capacity(), 64);
    /// ```
    pub fn preallocate(&mut self, capacity: usize) -> Option<Clamped> {
        let mut clamped = None;
        let target = if capacity < self.len {
            info!(
                requested = capacity,
                len = self.len,
                "preallocation below length, clamping"
            );
            clamped = Some(Clamped {
                requested: capacity,
                len: self.len,
            });
            self.len
        } else {
            capacity
        };

        if target > self.capacity() {
            self.reallocate(target);
        }
        clamped
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(OutOfRange { index, len })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(OutOfRange { index, len })
    }

    /// Replaces the element at `index`, dropping the old one.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`; the vector is unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Returns the position of the first element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Overwrites every live element with a clone of `value`.
    #[inline]
    pub fn reset_all(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Returns an iterator over the live elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the live elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Moves the buffer into a new vector, leaving this one with zero length
    /// and zero capacity.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::with_capacity(0))
    }

    /// Moves the live prefix into a fresh buffer of `capacity` slots.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        trace!(from = self.capacity(), to = capacity, "vector reallocated");

        let mut buf = Box::new_uninit_slice(capacity);
        // Safety: both buffers have at least `len` slots and are distinct
        // allocations. The old buffer is `MaybeUninit`, so dropping it below
        // does not drop the moved elements.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_mut_ptr(), self.len);
        }
        self.buf = buf;
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Clones into a buffer with the same capacity as `self`.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        for value in self.iter() {
            out.push_back(value.clone());
        }
        out
    }

    /// Keeps the existing buffer when it is at least as large as the
    /// source's, otherwise reallocates to the source's capacity.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if self.capacity() < source.capacity() {
            self.reallocate(source.capacity());
        }
        for value in source.iter() {
            self.push_back(value.clone());
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_joined(f, self.iter())
    }
}

impl<T> ops::Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> ops::IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        vector.extend(iter);
        vector
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
