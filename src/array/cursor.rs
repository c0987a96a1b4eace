// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random-access cursors over a `DynArray`.
//!
//! Both cursors hold the array's live slice plus a position, so they are
//! `Copy` and comparing them is two word comparisons. Beyond the shared
//! [`Cursor`] contract they can step backwards and jump by an offset.

use std::fmt;

use crate::cursor::Cursor;

/// Forward cursor. Position `len` is the `end()` sentinel.
pub struct ArrayCursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> ArrayCursor<'a, T> {
    pub(crate) fn new(items: &'a [T], index: usize) -> Self {
        ArrayCursor { items, index }
    }

    /// Position from the start of the array; `len()` at `end()`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_end(&self) -> bool {
        self.index >= self.items.len()
    }

    /// Step toward the beginning. Stays put at the first element.
    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Cursor `delta` steps away, or `None` if that leaves `[begin, end]`.
    pub fn offset(&self, delta: isize) -> Option<Self> {
        let index = self.index.checked_add_signed(delta)?;
        (index <= self.items.len()).then_some(ArrayCursor::new(self.items, index))
    }

    /// Signed number of steps from `self` to `other`.
    pub fn distance_to(&self, other: &Self) -> isize {
        other.index as isize - self.index as isize
    }
}

impl<'a, T> Cursor<'a> for ArrayCursor<'a, T> {
    type Item = T;

    fn get(&self) -> Option<&'a T> {
        self.items.get(self.index)
    }

    fn advance(&mut self) {
        if self.index < self.items.len() {
            self.index += 1;
        }
    }
}

/// Reverse cursor. Internally counts the elements still ahead of it, so
/// `rend()` is zero and the current element is `items[remaining - 1]`.
pub struct ArrayRevCursor<'a, T> {
    items: &'a [T],
    remaining: usize,
}

impl<'a, T> ArrayRevCursor<'a, T> {
    pub(crate) fn new(items: &'a [T], remaining: usize) -> Self {
        ArrayRevCursor { items, remaining }
    }

    /// Array index of the current element; `None` at `rend()`.
    pub fn index(&self) -> Option<usize> {
        self.remaining.checked_sub(1)
    }

    pub fn is_end(&self) -> bool {
        self.remaining == 0
    }

    /// Step back toward the last element. Stays put at `rbegin()`.
    pub fn retreat(&mut self) {
        if self.remaining < self.items.len() {
            self.remaining += 1;
        }
    }

    /// Cursor `delta` steps further along the reverse direction, or `None`
    /// if that leaves `[rbegin, rend]`.
    pub fn offset(&self, delta: isize) -> Option<Self> {
        let remaining = self.remaining.checked_add_signed(delta.checked_neg()?)?;
        (remaining <= self.items.len()).then_some(ArrayRevCursor::new(self.items, remaining))
    }
}

impl<'a, T> Cursor<'a> for ArrayRevCursor<'a, T> {
    type Item = T;

    fn get(&self) -> Option<&'a T> {
        self.items.get(self.index()?)
    }

    fn advance(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

macro_rules! impl_position_traits {
    ($cursor:ident, $field:ident) => {
        impl<T> Clone for $cursor<'_, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $cursor<'_, T> {}

        impl<T> PartialEq for $cursor<'_, T> {
            fn eq(&self, other: &Self) -> bool {
                self.items.as_ptr() == other.items.as_ptr() && self.$field == other.$field
            }
        }

        impl<T> Eq for $cursor<'_, T> {}

        impl<T> fmt::Debug for $cursor<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($cursor))
                    .field(stringify!($field), &self.$field)
                    .field("len", &self.items.len())
                    .finish()
            }
        }
    };
}

impl_position_traits!(ArrayCursor, index);
impl_position_traits!(ArrayRevCursor, remaining);
