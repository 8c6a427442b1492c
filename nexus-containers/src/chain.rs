//! Doubly-linked chain threaded through a [`Storage`].
//!
//! A [`Chain`] holds only its two end keys and a length. The nodes, and the
//! `prev`/`next` keys inside them, live in storage the caller passes to every
//! call. Because links are slot numbers rather than addresses, a node that
//! has been removed leaves nothing dangling: a stale key simply resolves to
//! `None`.
//!
//! [`List`](crate::List), [`Queue`](crate::Queue) and [`Stack`](crate::Stack)
//! each pair one chain with one arena they own outright.
//!
//! # Storage Invariant
//!
//! Every call on a chain must pass the storage its nodes were inserted into,
//! and only keys the chain itself returned. Link walks go through checked
//! lookups, so a broken link ends a walk early instead of reading a vacant
//! slot.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;

use crate::{Index, Storage};

/// Storage slot for one chain element.
#[derive(Debug, Clone)]
pub struct ChainNode<T, K: Index = u32> {
    pub(crate) data: T,
    pub(crate) prev: K,
    pub(crate) next: K,
}

impl<T, K: Index> ChainNode<T, K> {
    #[inline]
    fn detached(data: T) -> Self {
        Self {
            data,
            prev: K::NONE,
            next: K::NONE,
        }
    }

    /// Returns the element.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }
}

/// Head, tail and length of a doubly-linked sequence of [`ChainNode`]s.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Node storage, e.g. [`Arena<ChainNode<T>>`](crate::Arena)
/// - `K`: Key type shared with `S` (default `u32`)
pub struct Chain<T, S, K: Index = u32>
where
    S: Storage<ChainNode<T, K>, Index = K>,
{
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<fn() -> (T, S)>,
}

impl<T, S, K: Index> Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Index = K>,
{
    /// Creates an empty chain.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Number of linked nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no node is linked.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Key of the first node.
    #[inline]
    pub fn front_key(&self) -> Option<K> {
        self.head.into_option()
    }

    /// Key of the last node.
    #[inline]
    pub fn back_key(&self) -> Option<K> {
        self.tail.into_option()
    }

    // ========================================================================
    // Store and link
    // ========================================================================

    /// Stores `value` as the new last node and returns its key.
    #[inline]
    pub fn push_back(&mut self, storage: &mut S, value: T) -> K {
        let key = storage.insert(ChainNode::detached(value));
        self.splice(storage, key, self.tail, K::NONE);
        key
    }

    /// Stores `value` as the new first node and returns its key.
    #[inline]
    pub fn push_front(&mut self, storage: &mut S, value: T) -> K {
        let key = storage.insert(ChainNode::detached(value));
        self.splice(storage, key, K::NONE, self.head);
        key
    }

    /// Writes the freshly stored `key` between `prev` and `next`, either of
    /// which may be `NONE` to mean the corresponding end of the chain.
    fn splice(&mut self, storage: &mut S, key: K, prev: K, next: K) {
        let Some(node) = storage.get_mut(key) else {
            return;
        };
        node.prev = prev;
        node.next = next;

        self.point_next(storage, prev, key);
        self.point_prev(storage, next, key);
        self.len += 1;
    }

    /// Sets `at.next = to`, or the head when `at` is `NONE`.
    #[inline]
    fn point_next(&mut self, storage: &mut S, at: K, to: K) {
        match at.into_option() {
            Some(at) => {
                if let Some(node) = storage.get_mut(at) {
                    node.next = to;
                }
            }
            None => self.head = to,
        }
    }

    /// Sets `at.prev = to`, or the tail when `at` is `NONE`.
    #[inline]
    fn point_prev(&mut self, storage: &mut S, at: K, to: K) {
        match at.into_option() {
            Some(at) => {
                if let Some(node) = storage.get_mut(at) {
                    node.prev = to;
                }
            }
            None => self.tail = to,
        }
    }

    // ========================================================================
    // Unlink and release
    // ========================================================================

    /// Unlinks and releases the node at `key`, returning its element.
    ///
    /// Returns `None` if `key` is not occupied.
    pub fn remove(&mut self, storage: &mut S, key: K) -> Option<T> {
        let node = storage.remove(key)?;
        self.point_next(storage, node.prev, node.next);
        self.point_prev(storage, node.next, node.prev);
        self.len = self.len.saturating_sub(1);
        Some(node.data)
    }

    /// Releases the first node.
    #[inline]
    pub fn pop_front(&mut self, storage: &mut S) -> Option<T> {
        let key = self.head.into_option()?;
        self.remove(storage, key)
    }

    /// Releases the last node.
    #[inline]
    pub fn pop_back(&mut self, storage: &mut S) -> Option<T> {
        let key = self.tail.into_option()?;
        self.remove(storage, key)
    }

    /// Releases every node in the chain. Other chains sharing `storage` are
    /// unaffected.
    pub fn clear(&mut self, storage: &mut S) {
        let mut cursor = mem::replace(&mut self.head, K::NONE);
        while let Some(key) = cursor.into_option() {
            cursor = storage.remove(key).map_or(K::NONE, |node| node.next);
        }
        self.tail = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Element stored at `key`.
    #[inline]
    pub fn get<'a>(&self, storage: &'a S, key: K) -> Option<&'a T> {
        storage.get(key).map(ChainNode::data)
    }

    /// Element stored at `key`, mutably.
    #[inline]
    pub fn get_mut<'a>(&self, storage: &'a mut S, key: K) -> Option<&'a mut T> {
        storage.get_mut(key).map(|node| &mut node.data)
    }

    /// First element.
    #[inline]
    pub fn front<'a>(&self, storage: &'a S) -> Option<&'a T> {
        self.get(storage, self.head)
    }

    /// First element, mutably.
    #[inline]
    pub fn front_mut<'a>(&self, storage: &'a mut S) -> Option<&'a mut T> {
        self.get_mut(storage, self.head)
    }

    /// Last element.
    #[inline]
    pub fn back<'a>(&self, storage: &'a S) -> Option<&'a T> {
        self.get(storage, self.tail)
    }

    /// Last element, mutably.
    #[inline]
    pub fn back_mut<'a>(&self, storage: &'a mut S) -> Option<&'a mut T> {
        self.get_mut(storage, self.tail)
    }

    // ========================================================================
    // Positional lookup
    // ========================================================================

    /// Key of the node at position `index`, counting from the head.
    ///
    /// Starts from whichever end is nearer, so at most `len / 2` links are
    /// followed. Returns `None` if `index >= len` or the walk runs off a
    /// broken link.
    pub fn key_at(&self, storage: &S, index: usize) -> Option<K> {
        if index >= self.len {
            return None;
        }
        let from_back = self.len - 1 - index;

        let mut key;
        if index <= from_back {
            key = self.head;
            for _ in 0..index {
                key = storage.get(key)?.next;
            }
        } else {
            key = self.tail;
            for _ in 0..from_back {
                key = storage.get(key)?.prev;
            }
        }
        key.into_option()
    }

    /// Position of the first element satisfying `pred`, counting from the head.
    pub fn position<F>(&self, storage: &S, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter(storage).position(pred)
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterates head to tail. Double-ended.
    #[inline]
    pub fn iter<'a>(&self, storage: &'a S) -> Iter<'a, T, S, K> {
        Iter {
            storage,
            cursor: Cursor::over(self),
            _marker: PhantomData,
        }
    }

    /// Mutably iterates head to tail. Double-ended.
    #[inline]
    pub fn iter_mut<'a>(&self, storage: &'a mut S) -> IterMut<'a, T, S, K> {
        IterMut {
            storage,
            cursor: Cursor::over(self),
            _marker: PhantomData,
        }
    }
}

impl<T, S, K: Index> Default for Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Index = K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, K> fmt::Debug for Chain<T, S, K>
where
    S: Storage<ChainNode<T, K>, Index = K>,
    K: Index + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("head", &self.front_key())
            .field("tail", &self.back_key())
            .field("len", &self.len)
            .finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// The not-yet-visited span of a chain, consumed from either end.
#[derive(Clone, Copy)]
struct Cursor<K> {
    front: K,
    back: K,
    remaining: usize,
}

impl<K: Index> Cursor<K> {
    fn over<T, S>(chain: &Chain<T, S, K>) -> Self
    where
        S: Storage<ChainNode<T, K>, Index = K>,
    {
        Self {
            front: chain.head,
            back: chain.tail,
            remaining: chain.len,
        }
    }

    #[inline]
    fn front(&self) -> Option<K> {
        (self.remaining > 0).then_some(self.front)
    }

    #[inline]
    fn back(&self) -> Option<K> {
        (self.remaining > 0).then_some(self.back)
    }

    #[inline]
    fn advance_front(&mut self, next: K) {
        self.front = next;
        self.remaining -= 1;
    }

    #[inline]
    fn advance_back(&mut self, prev: K) {
        self.back = prev;
        self.remaining -= 1;
    }
}

/// Borrowing iterator over a chain, head to tail.
pub struct Iter<'a, T, S, K: Index> {
    storage: &'a S,
    cursor: Cursor<K>,
    _marker: PhantomData<&'a T>,
}

impl<T, S, K: Index> Clone for Iter<'_, T, S, K> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            cursor: self.cursor,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, S, K: Index> Iterator for Iter<'a, T, S, K>
where
    S: Storage<ChainNode<T, K>, Index = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let node = self.storage.get(self.cursor.front()?)?;
        self.cursor.advance_front(node.next);
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<'a, T: 'a, S, K: Index> DoubleEndedIterator for Iter<'a, T, S, K>
where
    S: Storage<ChainNode<T, K>, Index = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        let node = self.storage.get(self.cursor.back()?)?;
        self.cursor.advance_back(node.prev);
        Some(&node.data)
    }
}

impl<'a, T: 'a, S, K: Index> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<ChainNode<T, K>, Index = K>
{
}

impl<'a, T: 'a, S, K: Index> FusedIterator for Iter<'a, T, S, K> where
    S: Storage<ChainNode<T, K>, Index = K>
{
}

/// Mutably borrowing iterator over a chain, head to tail.
pub struct IterMut<'a, T, S, K: Index> {
    storage: &'a mut S,
    cursor: Cursor<K>,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T: 'a, S, K: Index> Iterator for IterMut<'a, T, S, K>
where
    S: Storage<ChainNode<T, K>, Index = K>,
{
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        let node: *mut ChainNode<T, K> = self.storage.get_mut(self.cursor.front()?)?;
        // Safety: the cursor visits each linked node at most once, so the
        // returned references never alias, and the storage stays mutably
        // borrowed for 'a.
        let node = unsafe { &mut *node };
        self.cursor.advance_front(node.next);
        Some(&mut node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<'a, T: 'a, S, K: Index> DoubleEndedIterator for IterMut<'a, T, S, K>
where
    S: Storage<ChainNode<T, K>, Index = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        let node: *mut ChainNode<T, K> = self.storage.get_mut(self.cursor.back()?)?;
        // Safety: as in `next`; the two ends meet when `remaining` hits zero
        let node = unsafe { &mut *node };
        self.cursor.advance_back(node.prev);
        Some(&mut node.data)
    }
}

impl<'a, T: 'a, S, K: Index> ExactSizeIterator for IterMut<'a, T, S, K> where
    S: Storage<ChainNode<T, K>, Index = K>
{
}

impl<'a, T: 'a, S, K: Index> FusedIterator for IterMut<'a, T, S, K> where
    S: Storage<ChainNode<T, K>, Index = K>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arena;

    type Nodes = Arena<ChainNode<u64>>;
    type Links = Chain<u64, Nodes>;

    fn build(arena: &mut Nodes, values: &[u64]) -> (Links, Vec<u32>) {
        let mut chain = Links::new();
        let keys = values.iter().map(|&v| chain.push_back(arena, v)).collect();
        (chain, keys)
    }

    fn forward(chain: &Links, arena: &Nodes) -> Vec<u64> {
        chain.iter(arena).copied().collect()
    }

    fn backward(chain: &Links, arena: &Nodes) -> Vec<u64> {
        chain.iter(arena).rev().copied().collect()
    }

    #[test]
    fn empty_chain_has_no_ends() {
        let arena = Nodes::new();
        let chain = Links::default();

        assert!(chain.is_empty());
        assert_eq!(chain.front_key(), None);
        assert_eq!(chain.back_key(), None);
        assert_eq!(chain.front(&arena), None);
        assert_eq!(chain.back(&arena), None);
        assert_eq!(chain.iter(&arena).next(), None);
    }

    #[test]
    fn single_node_is_both_ends() {
        let mut arena = Nodes::new();
        let (chain, keys) = build(&mut arena, &[9]);

        assert_eq!(chain.front_key(), Some(keys[0]));
        assert_eq!(chain.back_key(), Some(keys[0]));
        assert_eq!(chain.key_at(&arena, 0), Some(keys[0]));
        assert_eq!(chain.key_at(&arena, 1), None);
    }

    #[test]
    fn links_agree_in_both_directions() {
        let mut arena = Nodes::new();
        let mut chain = Links::new();

        chain.push_back(&mut arena, 2);
        chain.push_front(&mut arena, 1);
        chain.push_back(&mut arena, 3);
        chain.push_front(&mut arena, 0);

        assert_eq!(forward(&chain, &arena), vec![0, 1, 2, 3]);
        assert_eq!(backward(&chain, &arena), vec![3, 2, 1, 0]);
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn pops_drain_from_each_end() {
        let mut arena = Nodes::new();
        let (mut chain, _) = build(&mut arena, &[1, 2, 3]);

        assert_eq!(chain.pop_back(&mut arena), Some(3));
        assert_eq!(chain.pop_front(&mut arena), Some(1));
        assert_eq!(chain.pop_front(&mut arena), Some(2));
        assert_eq!(chain.pop_front(&mut arena), None);
        assert_eq!(chain.pop_back(&mut arena), None);
        assert!(arena.is_empty());
        assert_eq!(chain.front_key(), None);
        assert_eq!(chain.back_key(), None);
    }

    #[test]
    fn remove_interior_and_ends() {
        let mut arena = Nodes::new();
        let (mut chain, keys) = build(&mut arena, &[10, 20, 30, 40]);

        assert_eq!(chain.remove(&mut arena, keys[1]), Some(20));
        assert_eq!(chain.remove(&mut arena, keys[3]), Some(40));
        assert_eq!(chain.remove(&mut arena, keys[0]), Some(10));

        assert_eq!(forward(&chain, &arena), vec![30]);
        assert_eq!(chain.front_key(), Some(keys[2]));
        assert_eq!(chain.back_key(), Some(keys[2]));
    }

    #[test]
    fn stale_key_is_rejected() {
        let mut arena = Nodes::new();
        let (mut chain, keys) = build(&mut arena, &[1, 2]);

        chain.remove(&mut arena, keys[0]);

        assert_eq!(chain.remove(&mut arena, keys[0]), None);
        assert_eq!(chain.get(&arena, keys[0]), None);
        assert_eq!(chain.len(), 1);
        assert_eq!(forward(&chain, &arena), vec![2]);
    }

    #[test]
    fn foreign_keys_never_walk_off_the_arena() {
        let mut arena = Nodes::new();
        let (a, a_keys) = build(&mut arena, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let (mut b, _) = build(&mut arena, &[10, 11, 12, 13, 14, 15]);

        // Releasing a's interior nodes through b leaves a's length stale.
        for &key in &a_keys[1..7] {
            assert!(b.remove(&mut arena, key).is_some());
        }
        assert_eq!(a.len(), 9);
        assert_eq!(b.len(), 0);

        assert_eq!(a.key_at(&arena, 4), None);
        assert_eq!(a.key_at(&arena, 8), Some(a_keys[8]));
        assert_eq!(forward(&a, &arena), vec![0, 7, 8]);
        assert_eq!(backward(&a, &arena), vec![8, 7, 0]);
    }

    #[test]
    fn key_at_from_either_end() {
        let mut arena = Nodes::new();
        let (chain, keys) = build(&mut arena, &[0, 1, 2, 3, 4, 5, 6, 7]);

        for (i, &key) in keys.iter().enumerate() {
            assert_eq!(chain.key_at(&arena, i), Some(key));
        }
        assert_eq!(chain.key_at(&arena, keys.len()), None);
        assert_eq!(chain.key_at(&arena, usize::MAX), None);
    }

    #[test]
    fn key_at_follows_current_order() {
        let mut arena = Nodes::new();
        let (mut chain, keys) = build(&mut arena, &[0, 1, 2, 3, 4]);

        chain.remove(&mut arena, keys[2]);
        chain.push_front(&mut arena, 9);
        chain.remove(&mut arena, keys[4]);
        chain.push_front(&mut arena, 4);

        let by_position: Vec<u64> = (0..chain.len())
            .filter_map(|i| chain.key_at(&arena, i))
            .filter_map(|key| chain.get(&arena, key).copied())
            .collect();
        assert_eq!(by_position, vec![4, 9, 0, 1, 3]);
    }

    #[test]
    fn position_of_first_match() {
        let mut arena = Nodes::new();
        let (chain, _) = build(&mut arena, &[3, 1, 3, 7]);

        assert_eq!(chain.position(&arena, |&v| v == 3), Some(0));
        assert_eq!(chain.position(&arena, |&v| v > 5), Some(3));
        assert_eq!(chain.position(&arena, |&v| v == 0), None);
    }

    #[test]
    fn clear_leaves_other_chains_alone() {
        let mut arena = Nodes::new();
        let (mut a, _) = build(&mut arena, &[1, 2, 3]);
        let (b, _) = build(&mut arena, &[4, 5]);

        a.clear(&mut arena);

        assert!(a.is_empty());
        assert_eq!(arena.len(), 2);
        assert_eq!(forward(&b, &arena), vec![4, 5]);
    }

    #[test]
    fn front_and_back_mut() {
        let mut arena = Nodes::new();
        let (chain, _) = build(&mut arena, &[1, 2, 3]);

        *chain.front_mut(&mut arena).unwrap() = 100;
        *chain.back_mut(&mut arena).unwrap() = 300;

        assert_eq!(forward(&chain, &arena), vec![100, 2, 300]);
    }

    #[test]
    fn iterators_meet_in_the_middle() {
        let mut arena = Nodes::new();
        let (chain, _) = build(&mut arena, &[1, 2, 3, 4]);

        let mut iter = chain.iter(&arena);
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.clone().count(), 2);
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_mut_from_both_ends() {
        let mut arena = Nodes::new();
        let (chain, _) = build(&mut arena, &[1, 2, 3, 4, 5]);

        let mut iter = chain.iter_mut(&mut arena);
        *iter.next().unwrap() += 10;
        *iter.next_back().unwrap() += 50;
        for v in iter {
            *v = 0;
        }

        assert_eq!(forward(&chain, &arena), vec![11, 0, 0, 0, 55]);
    }
}
