//! Node pools addressed by slot number.
//!
//! A [`Storage`] hands out an index on insert and keeps it meaningful until
//! that value is removed. The linked containers keep their nodes in one and
//! link them by these indices, so growing the pool never invalidates a link.

use crate::Index;

use std::mem;

/// A pool of values addressed by stable indices.
///
/// Contract for implementors:
/// - an index returned by `insert` names its value until `remove` is called
///   with it, regardless of other inserts and removes
/// - `insert` never returns [`Index::NONE`]
/// - lookups of a vacant or never-issued index return `None`
pub trait Storage<T> {
    /// Slot number type.
    type Index: Index;

    /// Stores `value` and returns the index that names it.
    fn insert(&mut self, value: T) -> Self::Index;

    /// Takes the value out of `index`, vacating the slot.
    fn remove(&mut self, index: Self::Index) -> Option<T>;

    /// Shared access to the value at `index`.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Exclusive access to the value at `index`.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Shared access without the occupancy check.
    ///
    /// # Safety
    ///
    /// `index` must name a stored value.
    unsafe fn get_unchecked(&self, index: Self::Index) -> &T;

    /// Exclusive access without the occupancy check.
    ///
    /// # Safety
    ///
    /// `index` must name a stored value.
    unsafe fn get_unchecked_mut(&mut self, index: Self::Index) -> &mut T;

    /// Number of stored values.
    fn len(&self) -> usize;

    /// `true` when nothing is stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value and forgets all indices.
    fn clear(&mut self);
}

// =============================================================================
// Arena - growable slot vector, intrusive free list
// =============================================================================

#[derive(Debug, Clone)]
enum Slot<T, Idx> {
    Occupied(T),
    Vacant { next_free: Idx },
}

/// Growable storage with a free list threaded through vacant slots.
///
/// Freed slots are reused LIFO before the slot vector grows. Growth follows
/// `Vec`, so an index stays valid across reallocations (it is a position,
/// not an address).
///
/// # Example
///
/// ```
/// use nexus_containers::{Arena, Storage};
///
/// let mut arena: Arena<u64> = Arena::with_capacity(16);
///
/// let a = arena.insert(42);
/// assert_eq!(arena.get(a), Some(&42));
///
/// assert_eq!(arena.remove(a), Some(42));
/// assert_eq!(arena.get(a), None);
///
/// // Slot is recycled
/// let b = arena.insert(7);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Arena<T, Idx: Index = u32> {
    slots: Vec<Slot<T, Idx>>,
    /// Most recently vacated slot, or `NONE`.
    free_head: Idx,
    len: usize,
}

impl<T, Idx: Index> Arena<T, Idx> {
    /// Creates an empty arena without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: Idx::NONE,
            len: 0,
        }
    }

    /// Creates an arena with room for `capacity` values before it grows.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the index type's addressable range.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= Idx::NONE.slot(),
            "capacity exceeds index type maximum"
        );

        Self {
            slots: Vec::with_capacity(capacity),
            free_head: Idx::NONE,
            len: 0,
        }
    }

    /// Returns the number of slots available before the slot vector grows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T, Idx: Index> Default for Arena<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> Storage<T> for Arena<T, Idx> {
    type Index = Idx;

    fn insert(&mut self, value: T) -> Idx {
        let idx = match self.free_head.into_option() {
            Some(idx) => {
                let slot = &mut self.slots[idx.slot()];
                if let Slot::Vacant { next_free } = *slot {
                    self.free_head = next_free;
                }
                *slot = Slot::Occupied(value);
                idx
            }
            None => {
                let Some(idx) = Idx::from_slot(self.slots.len()) else {
                    panic!("arena exceeds index type maximum");
                };
                self.slots.push(Slot::Occupied(value));
                idx
            }
        };

        self.len += 1;
        idx
    }

    fn remove(&mut self, index: Idx) -> Option<T> {
        let slot = self.slots.get_mut(index.slot())?;
        match mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        ) {
            Slot::Occupied(value) => {
                self.free_head = index;
                self.len -= 1;
                Some(value)
            }
            vacant => {
                // Already free: put the original link back untouched.
                *slot = vacant;
                None
            }
        }
    }

    #[inline]
    fn get(&self, index: Idx) -> Option<&T> {
        match self.slots.get(index.slot()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, index: Idx) -> Option<&mut T> {
        match self.slots.get_mut(index.slot()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: Idx) -> &T {
        match self.slots.get(index.slot()) {
            Some(Slot::Occupied(value)) => value,
            // Safety: caller guarantees `index` is occupied
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: Idx) -> &mut T {
        match self.slots.get_mut(index.slot()) {
            Some(Slot::Occupied(value)) => value,
            // Safety: caller guarantees `index` is occupied
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Idx::NONE;
        self.len = 0;
    }
}
