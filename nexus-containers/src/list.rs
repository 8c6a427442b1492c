//! Doubly-linked list with arena-backed nodes.
//!
//! Nodes live in an [`Arena`](crate::Arena) owned by the list and are linked
//! by index. Pushing and popping at either end is O(1); positional access
//! walks from whichever end is closer.
//!
//! # Example
//!
//! ```
//! use nexus_containers::List;
//!
//! let mut list: List<u64> = List::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.to_string(), "0, 1, 2");
//! assert_eq!(list.get(1), Ok(&1));
//!
//! assert_eq!(list.pop_back(), Some(2));
//! assert_eq!(list.pop_front(), Some(0));
//! assert_eq!(list.len(), 1);
//! ```

use crate::owned::{Iter, IterMut, OwnedChain};
use crate::{Index, OutOfRange};

/// A doubly-linked list that owns its nodes.
///
/// Index 0 is the front. Popping from an empty list returns `None` and
/// changes nothing.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `Idx`: Arena index type (default `u32`); bounds the list at `Idx::MAX - 1` nodes
pub struct List<T, Idx: Index = u32> {
    inner: OwnedChain<T, Idx>,
}

impl<T, Idx: Index> List<T, Idx> {
    /// Creates an empty list without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: OwnedChain::new(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the index type's range.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: OwnedChain::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Appends an element at the back.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.inner.push_back(value);
    }

    /// Prepends an element at the front.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.inner.push_front(value);
    }

    /// Removes and returns the back element, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.inner.front_mut()
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.inner.back()
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.inner.back_mut()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.inner.get(index)
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.inner.get_mut(index)
    }

    /// Replaces the element at `index`, dropping the old one.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`; the list is unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        self.inner.set(index, value)
    }

    /// Returns the position of the first element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.inner.index_of(value)
    }

    /// Unlinks and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`; the list is unchanged.
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

    /// Returns an iterator from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Idx> {
        self.inner.iter()
    }

    /// Returns a mutable iterator from front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, Idx> {
        self.inner.iter_mut()
    }

    /// Moves the contents into a new list, leaving this one empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            inner: self.inner.take(),
        }
    }
}

linked_facade!(List, push_back);

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[u64]) -> List<u64> {
        values.iter().copied().collect()
    }

    fn values(list: &List<u64>) -> Vec<u64> {
        list.iter().copied().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: List<u64> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
    }

    #[test]
    fn push_and_pop_both_ends() {
        let mut list: List<u64> = List::new();

        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.to_string(), "1, 2, 3");

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        list.push_front(0);
        list.push_back(4);

        assert_eq!(values(&list), vec![0, 2, 4]);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&4));
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut list: List<u64> = List::new();

        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());

        list.push_back(1);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn front_and_back_mut() {
        let mut list = list_of(&[1, 2, 3]);

        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;

        assert_eq!(values(&list), vec![10, 2, 30]);
    }

    #[test]
    fn bounds() {
        let list = list_of(&[1, 2, 3]);

        assert_eq!(list.get(2), Ok(&3));
        assert_eq!(list.get(3), Err(OutOfRange { index: 3, len: 3 }));
        assert_eq!(list.get(usize::MAX).unwrap_err().index, usize::MAX);

        let empty: List<u64> = List::new();
        assert_eq!(empty.get(0), Err(OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn set_and_index_operators() {
        let mut list = list_of(&[1, 2, 3]);

        list.set(1, 20).unwrap();
        list[2] = 30;

        assert_eq!(list[0], 1);
        assert_eq!(list[1], 20);
        assert_eq!(values(&list), vec![1, 20, 30]);
        assert!(list.set(3, 40).is_err());
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for length 3")]
    fn index_operator_panics_out_of_range() {
        let list = list_of(&[1, 2, 3]);
        let _ = list[3];
    }

    #[test]
    fn index_of() {
        let list = list_of(&[3, 1, 3]);

        assert_eq!(list.index_of(&3), Some(0));
        assert_eq!(list.index_of(&1), Some(1));
        assert_eq!(list.index_of(&2), None);
    }

    #[test]
    fn erase_at_endpoints_and_middle() {
        let mut list = list_of(&[1, 2, 3, 4, 5]);

        assert_eq!(list.erase_at(0), Ok(1));
        assert_eq!(list.erase_at(3), Ok(5));
        assert_eq!(list.erase_at(1), Ok(3));
        assert_eq!(values(&list), vec![2, 4]);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&4));

        assert_eq!(list.erase_at(2), Err(OutOfRange { index: 2, len: 2 }));
        assert_eq!(values(&list), vec![2, 4]);
    }

    #[test]
    fn clear_then_reuse() {
        let mut list = list_of(&[1, 2, 3]);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");

        list.push_front(7);
        assert_eq!(values(&list), vec![7]);
    }

    #[test]
    fn reset_all() {
        let mut list = list_of(&[1, 2, 3]);
        list.reset_all(0);
        assert_eq!(values(&list), vec![0, 0, 0]);
    }

    #[test]
    fn clone_is_independent() {
        let original = list_of(&[1, 2, 3]);
        let mut copy = original.clone();

        copy.push_back(4);
        copy[0] = 100;

        assert_eq!(values(&original), vec![1, 2, 3]);
        assert_eq!(values(&copy), vec![100, 2, 3, 4]);
    }

    #[test]
    fn clone_from_overwrites() {
        let source = list_of(&[5, 6]);
        let mut target = list_of(&[1, 2, 3]);

        target.clone_from(&source);

        assert_eq!(target, source);
    }

    #[test]
    fn take_moves_and_resets_source() {
        let mut source = list_of(&[1, 2, 3]);

        let moved = source.take();

        assert_eq!(values(&moved), vec![1, 2, 3]);
        assert!(source.is_empty());
        assert_eq!(source, List::new());

        source.push_back(9);
        assert_eq!(values(&source), vec![9]);
    }

    #[test]
    fn equality() {
        assert_eq!(list_of(&[1, 2, 3]), list_of(&[1, 2, 3]));
        assert_ne!(list_of(&[1, 2, 3]), list_of(&[1, 2]));
        assert_ne!(list_of(&[1, 2, 3]), list_of(&[1, 2, 4]));
    }

    #[test]
    fn iterators() {
        let mut list = list_of(&[1, 2, 3]);

        for v in &mut list {
            *v += 1;
        }
        let borrowed: Vec<&u64> = (&list).into_iter().collect();
        assert_eq!(borrowed, vec![&2, &3, &4]);

        let reversed: Vec<u64> = list.iter().rev().copied().collect();
        assert_eq!(reversed, vec![4, 3, 2]);

        let owned: Vec<u64> = list.into_iter().collect();
        assert_eq!(owned, vec![2, 3, 4]);
    }

    #[test]
    fn owns_heap_values() {
        let mut list: List<String> = List::with_capacity(4);
        list.push_back("b".into());
        list.push_front("a".into());

        assert_eq!(list.index_of(&"b".to_string()), Some(1));
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
        assert_eq!(list.to_string(), "a, b");
    }

    #[test]
    fn small_index_type() {
        let mut list: List<u64, u8> = List::new();
        for i in 0..200 {
            list.push_back(i);
        }
        assert_eq!(list.get(150), Ok(&150));
        assert_eq!(list.erase_at(0), Ok(0));
        assert_eq!(list.len(), 199);
    }
}
