// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Growable contiguous array with an explicit capacity.
//!
//! `DynArray` keeps exactly `capacity` initialised slots. The first `len` hold
//! live elements; the rest hold default values (or stale ones left behind by
//! `clear`). Growth doubles the capacity, starting from [`DEFAULT_CAPACITY`]
//! when the array has none. Capacity never shrinks.
//!
//! Unlike `Vec`, every growing operation goes through `try_reserve_exact` and
//! reports [`ContainerError::AllocationFailed`] instead of aborting. A failed
//! call leaves the array untouched.

mod cursor;

pub use cursor::{ArrayCursor, ArrayRevCursor};

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::contracts::check_array_invariants;
use crate::error::{ContainerError, ContainerKind, Result};

/// Capacity of a default-constructed array, and of a zero-capacity array
/// after its first `push_back`.
pub const DEFAULT_CAPACITY: usize = 10;

/// A dynamic array.
pub struct DynArray<T> {
    /// Always exactly `capacity` slots long.
    storage: Vec<T>,
    len: usize,
}

impl<T> DynArray<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, live or not.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Forget every element. Storage and capacity are kept.
    pub fn clear(&mut self) {
        self.len = 0;
        check_array_invariants(self);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[..self.len]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// First element, by value.
    pub fn front(&self) -> Result<T>
    where
        T: Clone,
    {
        self.as_slice()
            .first()
            .cloned()
            .ok_or(ContainerError::Empty(ContainerKind::Array))
    }

    /// Last element, by value.
    pub fn back(&self) -> Result<T>
    where
        T: Clone,
    {
        self.as_slice()
            .last()
            .cloned()
            .ok_or(ContainerError::Empty(ContainerKind::Array))
    }

    /// Cursor at the first element, or at `end()` when empty.
    pub fn begin(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(self.as_slice(), 0)
    }

    /// One-past-the-last sentinel.
    pub fn end(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(self.as_slice(), self.len)
    }

    /// Reverse cursor at the last element, or at `rend()` when empty.
    pub fn rbegin(&self) -> ArrayRevCursor<'_, T> {
        ArrayRevCursor::new(self.as_slice(), self.len)
    }

    /// One-before-the-first sentinel.
    pub fn rend(&self) -> ArrayRevCursor<'_, T> {
        ArrayRevCursor::new(self.as_slice(), 0)
    }
}

impl<T: Default> DynArray<T> {
    /// An empty array with [`DEFAULT_CAPACITY`] slots. Aborts on allocation
    /// failure like `Vec::with_capacity`; [`with_capacity`](Self::with_capacity)
    /// reports it instead.
    pub fn new() -> Self {
        let mut storage = Vec::with_capacity(DEFAULT_CAPACITY);
        storage.resize_with(DEFAULT_CAPACITY, T::default);
        DynArray { storage, len: 0 }
    }

    /// An empty array with exactly `capacity` slots allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut array = DynArray {
            storage: Vec::new(),
            len: 0,
        };
        array.reserve(capacity)?;
        Ok(array)
    }

    /// Grow to exactly `new_capacity` slots. Smaller requests are ignored.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        let current = self.capacity();
        if new_capacity <= current {
            return Ok(());
        }
        self.storage
            .try_reserve_exact(new_capacity - current)
            .map_err(|e| ContainerError::allocation(ContainerKind::Array, new_capacity, &e))?;
        self.storage.resize_with(new_capacity, T::default);
        tracing::trace!(from = current, to = new_capacity, len = self.len, "array storage grown");
        check_array_invariants(self);
        Ok(())
    }

    /// Append `value`, doubling the capacity when the array is full.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity() {
            let target = match self.capacity() {
                0 => DEFAULT_CAPACITY,
                full => full.checked_mul(2).ok_or(ContainerError::AllocationFailed {
                    kind: ContainerKind::Array,
                    requested: usize::MAX,
                })?,
            };
            self.reserve(target)?;
        }
        self.storage[self.len] = value;
        self.len += 1;
        check_array_invariants(self);
        Ok(())
    }

    /// Remove and return the last element. Its slot keeps a default value.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(ContainerError::Empty(ContainerKind::Array));
        }
        self.len -= 1;
        let value = mem::take(&mut self.storage[self.len]);
        check_array_invariants(self);
        Ok(value)
    }
}

impl<T: Clone + Default> DynArray<T> {
    /// Replace the contents with a copy of `other`'s live elements.
    ///
    /// Capacity grows to at least `other.capacity()`. If that growth fails
    /// the array keeps its previous contents.
    pub fn assign(&mut self, other: &DynArray<T>) -> Result<()> {
        self.reserve(other.capacity())?;
        self.clear();
        self.storage[..other.len].clone_from_slice(other.as_slice());
        self.len = other.len;
        check_array_invariants(self);
        Ok(())
    }

    /// Deep copy with the same capacity as `self`.
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = DynArray::with_capacity(self.capacity())?;
        copy.assign(self)?;
        Ok(copy)
    }
}

impl<T: Default> Default for DynArray<T> {
    fn default() -> Self {
        DynArray::new()
    }
}

/// Copies keep the source's capacity. Aborts on allocation failure like
/// `Vec`; use [`DynArray::try_clone`] to get an error instead.
impl<T: Clone + Default> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut storage = Vec::with_capacity(self.capacity());
        storage.extend_from_slice(self.as_slice());
        storage.resize_with(self.capacity(), T::default);
        DynArray {
            storage,
            len: self.len,
        }
    }
}

/// Adopts the vector's elements; capacity equals their count.
impl<T> From<Vec<T>> for DynArray<T> {
    fn from(storage: Vec<T>) -> Self {
        let len = storage.len();
        DynArray { storage, len }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DynArray::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// Panics when `index >= len()`.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Serialize> Serialize for DynArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(DynArray::from)
    }
}
