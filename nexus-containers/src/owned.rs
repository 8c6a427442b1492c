//! A chain bundled with the arena that owns its nodes.
//!
//! `OwnedChain` pairs a chain with the arena holding its nodes, maps
//! positional access onto chain traversal, and carries the behavior
//! [`List`](crate::List), [`Queue`](crate::Queue) and [`Stack`](crate::Stack)
//! have in common: bounds-checked indexing, search, deep copy, and
//! element-wise equality. `linked_facade!` stamps out the trait impls the
//! three wrappers share.

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::chain::{self, Chain, ChainNode};
use crate::{Arena, Index, OutOfRange, Storage};

pub(crate) type ChainArena<T, Idx = u32> = Arena<ChainNode<T, Idx>, Idx>;

/// Borrowing iterator over an owned linked container.
pub type Iter<'a, T, Idx = u32> = chain::Iter<'a, T, Arena<ChainNode<T, Idx>, Idx>, Idx>;

/// Mutably borrowing iterator over an owned linked container.
pub type IterMut<'a, T, Idx = u32> =
    chain::IterMut<'a, T, Arena<ChainNode<T, Idx>, Idx>, Idx>;

pub(crate) struct OwnedChain<T, Idx: Index = u32> {
    storage: ChainArena<T, Idx>,
    chain: Chain<T, ChainArena<T, Idx>, Idx>,
}

impl<T, Idx: Index> OwnedChain<T, Idx> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            storage: Arena::new(),
            chain: Chain::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arena::with_capacity(capacity),
            chain: Chain::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    #[inline]
    pub(crate) fn push_back(&mut self, value: T) {
        self.chain.push_back(&mut self.storage, value);
    }

    #[inline]
    pub(crate) fn push_front(&mut self, value: T) {
        self.chain.push_front(&mut self.storage, value);
    }

    #[inline]
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        self.chain.pop_front(&mut self.storage)
    }

    #[inline]
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        self.chain.pop_back(&mut self.storage)
    }

    #[inline]
    pub(crate) fn front(&self) -> Option<&T> {
        self.chain.front(&self.storage)
    }

    #[inline]
    pub(crate) fn front_mut(&mut self) -> Option<&mut T> {
        self.chain.front_mut(&mut self.storage)
    }

    #[inline]
    pub(crate) fn back(&self) -> Option<&T> {
        self.chain.back(&self.storage)
    }

    #[inline]
    pub(crate) fn back_mut(&mut self) -> Option<&mut T> {
        self.chain.back_mut(&mut self.storage)
    }

    #[inline]
    fn out_of_range(&self, index: usize) -> OutOfRange {
        OutOfRange {
            index,
            len: self.len(),
        }
    }

    fn key_at(&self, index: usize) -> Result<Idx, OutOfRange> {
        OutOfRange::check(index, self.len())?;
        self.chain
            .key_at(&self.storage, index)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub(crate) fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        let key = self.key_at(index)?;
        self.chain
            .get(&self.storage, key)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let key = self.key_at(index)?;
        let err = self.out_of_range(index);
        self.chain.get_mut(&mut self.storage, key).ok_or(err)
    }

    pub(crate) fn set(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub(crate) fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.chain.position(&self.storage, |item| item == value)
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        let key = self.key_at(index)?;
        let err = self.out_of_range(index);
        self.chain.remove(&mut self.storage, key).ok_or(err)
    }

    /// Drops every element. The arena keeps its slot capacity.
    pub(crate) fn clear(&mut self) {
        self.chain.clear(&mut self.storage);
        self.storage.clear();
    }

    pub(crate) fn reset_all(&mut self, value: T)
    where
        T: Clone,
    {
        for item in self.iter_mut() {
            item.clone_from(&value);
        }
    }

    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, T, Idx> {
        self.chain.iter(&self.storage)
    }

    #[inline]
    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T, Idx> {
        self.chain.iter_mut(&mut self.storage)
    }

    /// Moves every node out, leaving `self` empty with no allocation.
    #[inline]
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}

impl<T: Clone, Idx: Index> Clone for OwnedChain<T, Idx> {
    /// Rebuilds the chain in order; the copy shares nothing with `self`.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        for item in self.iter() {
            copy.push_back(item.clone());
        }
        copy
    }

    /// Reuses `self`'s arena slots where it can.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in source.iter() {
            self.push_back(item.clone());
        }
    }
}

impl<T: PartialEq, Idx: Index> PartialEq for OwnedChain<T, Idx> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, Idx: Index> Eq for OwnedChain<T, Idx> {}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for OwnedChain<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Owning iterator
// =============================================================================

/// Owning iterator over a linked container, in index order.
pub struct IntoIter<T, Idx: Index = u32> {
    inner: OwnedChain<T, Idx>,
}

impl<T, Idx: Index> IntoIter<T, Idx> {
    pub(crate) fn new(inner: OwnedChain<T, Idx>) -> Self {
        Self { inner }
    }
}

impl<T, Idx: Index> Iterator for IntoIter<T, Idx> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T, Idx: Index> DoubleEndedIterator for IntoIter<T, Idx> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T, Idx: Index> ExactSizeIterator for IntoIter<T, Idx> {}

impl<T, Idx: Index> FusedIterator for IntoIter<T, Idx> {}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for IntoIter<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

// =============================================================================
// Shared facade impls
// =============================================================================

/// Implements the traits [`List`](crate::List), [`Queue`](crate::Queue) and
/// [`Stack`](crate::Stack) share. `$push` is the inherent method `Extend`
/// and `FromIterator` feed each item to.
macro_rules! linked_facade {
    ($name:ident, $push:ident) => {
        impl<T, Idx: $crate::Index> Default for $name<T, Idx> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: Clone, Idx: $crate::Index> Clone for $name<T, Idx> {
            fn clone(&self) -> Self {
                Self {
                    inner: self.inner.clone(),
                }
            }

            fn clone_from(&mut self, source: &Self) {
                self.inner.clone_from(&source.inner);
            }
        }

        impl<T: PartialEq, Idx: $crate::Index> PartialEq for $name<T, Idx> {
            fn eq(&self, other: &Self) -> bool {
                self.inner == other.inner
            }
        }

        impl<T: Eq, Idx: $crate::Index> Eq for $name<T, Idx> {}

        impl<T: ::std::fmt::Debug, Idx: $crate::Index> ::std::fmt::Debug for $name<T, Idx> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.inner.fmt(f)
            }
        }

        impl<T: ::std::fmt::Display, Idx: $crate::Index> ::std::fmt::Display for $name<T, Idx> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::render::write_joined(f, self.iter())
            }
        }

        impl<T, Idx: $crate::Index> ::std::ops::Index<usize> for $name<T, Idx> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match self.get(index) {
                    Ok(value) => value,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl<T, Idx: $crate::Index> ::std::ops::IndexMut<usize> for $name<T, Idx> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match self.get_mut(index) {
                    Ok(value) => value,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl<T, Idx: $crate::Index> FromIterator<T> for $name<T, Idx> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut container = Self::new();
                container.extend(iter);
                container
            }
        }

        impl<T, Idx: $crate::Index> Extend<T> for $name<T, Idx> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for value in iter {
                    self.$push(value);
                }
            }
        }

        impl<T, Idx: $crate::Index> IntoIterator for $name<T, Idx> {
            type Item = T;
            type IntoIter = $crate::owned::IntoIter<T, Idx>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::owned::IntoIter::new(self.inner)
            }
        }

        impl<'a, T, Idx: $crate::Index> IntoIterator for &'a $name<T, Idx> {
            type Item = &'a T;
            type IntoIter = $crate::owned::Iter<'a, T, Idx>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<'a, T, Idx: $crate::Index> IntoIterator for &'a mut $name<T, Idx> {
            type Item = &'a mut T;
            type IntoIter = $crate::owned::IterMut<'a, T, Idx>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter_mut()
            }
        }
    };
}
