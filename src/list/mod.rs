// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Doubly-linked list stored in a slot arena.
//!
//! Nodes live in a [`NodeArena`] and link to each other by slot index. The
//! list itself only remembers the two boundary slots and a running length.
//! Pushing and popping at either end is O(1); popping frees exactly the
//! detached slot, which the next push reuses.

mod arena;
mod cursor;

pub use arena::NodeHandle;
pub use cursor::{Iter, ListCursor, ListRevCursor};

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::contracts::{check_list_boundaries, check_list_links};
use crate::error::{ContainerError, ContainerKind, Result};
use arena::{Node, NodeArena};

/// A doubly-linked list.
pub struct List<T> {
    arena: NodeArena<T>,
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<T> List<T> {
    pub const fn new() -> Self {
        List {
            arena: NodeArena::new(),
            front: None,
            back: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.front = None;
        self.back = None;
        self.len = 0;
        check_list_links(self);
    }

    /// First element, by value.
    pub fn front(&self) -> Result<T>
    where
        T: Clone,
    {
        self.value_at(self.front)
    }

    /// Last element, by value.
    pub fn back(&self) -> Result<T>
    where
        T: Clone,
    {
        self.value_at(self.back)
    }

    fn value_at(&self, slot: Option<usize>) -> Result<T>
    where
        T: Clone,
    {
        slot.and_then(|slot| self.arena.node(slot))
            .map(|node| node.value.clone())
            .ok_or(ContainerError::Empty(ContainerKind::List))
    }

    pub fn push_front(&mut self, value: T) -> Result<()> {
        let node = Node {
            value,
            prev: None,
            next: self.front,
        };
        let slot = self
            .arena
            .try_insert(node)
            .map_err(|e| ContainerError::allocation(ContainerKind::List, self.len + 1, &e))?;
        self.link_front(slot);
        Ok(())
    }

    pub fn push_back(&mut self, value: T) -> Result<()> {
        let node = Node {
            value,
            prev: self.back,
            next: None,
        };
        let slot = self
            .arena
            .try_insert(node)
            .map_err(|e| ContainerError::allocation(ContainerKind::List, self.len + 1, &e))?;
        self.link_back(slot);
        Ok(())
    }

    /// Splice an already-stored node, whose `next` is the old front, in
    /// front of the list.
    fn link_front(&mut self, slot: usize) {
        match self.front.and_then(|old| self.arena.node_mut(old)) {
            Some(old_front) => old_front.prev = Some(slot),
            None => self.back = Some(slot),
        }
        self.front = Some(slot);
        self.len += 1;
        check_list_boundaries(self);
    }

    fn link_back(&mut self, slot: usize) {
        match self.back.and_then(|old| self.arena.node_mut(old)) {
            Some(old_back) => old_back.next = Some(slot),
            None => self.front = Some(slot),
        }
        self.back = Some(slot);
        self.len += 1;
        check_list_boundaries(self);
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Result<T> {
        let node = self
            .front
            .and_then(|slot| self.arena.remove(slot))
            .ok_or(ContainerError::Empty(ContainerKind::List))?;
        self.front = node.next;
        match node.next.and_then(|slot| self.arena.node_mut(slot)) {
            Some(new_front) => new_front.prev = None,
            None => self.back = None,
        }
        self.len -= 1;
        check_list_boundaries(self);
        Ok(node.value)
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Result<T> {
        let node = self
            .back
            .and_then(|slot| self.arena.remove(slot))
            .ok_or(ContainerError::Empty(ContainerKind::List))?;
        self.back = node.prev;
        match node.prev.and_then(|slot| self.arena.node_mut(slot)) {
            Some(new_back) => new_back.next = None,
            None => self.front = None,
        }
        self.len -= 1;
        check_list_boundaries(self);
        Ok(node.value)
    }

    /// Live element behind a handle taken from a cursor. `None` once that
    /// node has been popped or the list cleared.
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        self.arena.resolve(handle).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        self.arena.resolve_mut(handle).map(|node| &mut node.value)
    }

    pub fn begin(&self) -> ListCursor<'_, T> {
        ListCursor::new(self, self.front)
    }

    pub fn end(&self) -> ListCursor<'_, T> {
        ListCursor::new(self, None)
    }

    pub fn rbegin(&self) -> ListRevCursor<'_, T> {
        ListRevCursor::new(self, self.back)
    }

    pub fn rend(&self) -> ListRevCursor<'_, T> {
        ListRevCursor::new(self, None)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub(crate) fn front_slot(&self) -> Option<usize> {
        self.front
    }

    pub(crate) fn back_slot(&self) -> Option<usize> {
        self.back
    }

    pub(crate) fn arena(&self) -> &NodeArena<T> {
        &self.arena
    }
}

impl<T: Clone> List<T> {
    /// Replace the contents with an element-wise copy of `other`.
    ///
    /// The copy is built aside and swapped in, so on allocation failure the
    /// list keeps its previous contents.
    pub fn assign(&mut self, other: &List<T>) -> Result<()> {
        *self = other.try_clone()?;
        Ok(())
    }

    /// Element-wise copy into a fresh list.
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = List::new();
        copy.arena
            .reserve(self.len)
            .map_err(|e| ContainerError::allocation(ContainerKind::List, self.len, &e))?;
        for value in self {
            copy.push_back(value.clone())?;
        }
        check_list_links(&copy);
        Ok(copy)
    }
}

/// Element-wise append into a fresh list, so the copy is compact whatever
/// slots the source has freed. Aborts on allocation failure like `Vec`; use
/// [`List::try_clone`] to get an error instead.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let copy: List<T> = self.iter().cloned().collect();
        check_list_links(&copy);
        copy
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Appends at the back. Aborts on allocation failure like `Vec::push`.
impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let slot = self.arena.insert(Node {
                value,
                prev: self.back,
                next: None,
            });
            self.link_back(slot);
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(List::from_iter)
    }
}
