// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Forward-only cursors over a `List`, one per direction, and a std iterator.

use std::fmt;
use std::iter::FusedIterator;

use super::{List, NodeHandle};
use crate::cursor::Cursor;

/// Cursor following `next` links. `None` is the `end()` sentinel.
pub struct ListCursor<'a, T> {
    list: &'a List<T>,
    slot: Option<usize>,
}

/// Cursor following `prev` links. `None` is the `rend()` sentinel.
pub struct ListRevCursor<'a, T> {
    list: &'a List<T>,
    slot: Option<usize>,
}

macro_rules! impl_list_cursor {
    ($cursor:ident, $link:ident) => {
        impl<'a, T> $cursor<'a, T> {
            pub(crate) fn new(list: &'a List<T>, slot: Option<usize>) -> Self {
                $cursor { list, slot }
            }

            /// Handle to the current node, usable with [`List::get_mut`].
            pub fn handle(&self) -> Option<NodeHandle> {
                self.list.arena.handle(self.slot?)
            }

            pub fn is_end(&self) -> bool {
                self.slot.is_none()
            }
        }

        impl<'a, T> Cursor<'a> for $cursor<'a, T> {
            type Item = T;

            fn get(&self) -> Option<&'a T> {
                let list: &'a List<T> = self.list;
                list.arena.node(self.slot?).map(|node| &node.value)
            }

            fn advance(&mut self) {
                if let Some(slot) = self.slot {
                    self.slot = self.list.arena.node(slot).and_then(|node| node.$link);
                }
            }
        }

        impl<T> Clone for $cursor<'_, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $cursor<'_, T> {}

        impl<T> PartialEq for $cursor<'_, T> {
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self.list, other.list) && self.slot == other.slot
            }
        }

        impl<T> Eq for $cursor<'_, T> {}

        impl<T> fmt::Debug for $cursor<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($cursor))
                    .field("slot", &self.slot)
                    .finish()
            }
        }
    };
}

impl_list_cursor!(ListCursor, next);
impl_list_cursor!(ListRevCursor, prev);

/// Double-ended iterator over a list's elements, front to back.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Iter {
            list,
            front: list.front,
            back: list.back,
            remaining: list.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}
