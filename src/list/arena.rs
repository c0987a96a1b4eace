// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Slot arena owning every node of a `List`.
//!
//! Links between nodes are slot indices, so there are no reference cycles
//! and no node owns another. Removed slots go onto an intrusive free list
//! and get reused by later inserts. Each slot carries a generation that is
//! bumped on removal; a [`NodeHandle`] remembers the generation it was made
//! with, which is how stale handles are told apart from reused slots.

use std::collections::TryReserveError;

/// Stable reference to one list node, obtained from a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) slot: usize,
    pub(crate) generation: u32,
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied { generation: u32, node: Node<T> },
    Vacant { generation: u32, next_free: Option<usize> },
}

#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    occupied: usize,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    /// Slots ever allocated, occupied or vacant.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Store `node`, reusing a vacant slot when there is one.
    pub(crate) fn try_insert(&mut self, node: Node<T>) -> Result<usize, TryReserveError> {
        if self.free_head.is_none() {
            self.slots.try_reserve(1)?;
        }
        Ok(self.insert(node))
    }

    /// Like [`try_insert`](Self::try_insert) but aborts on allocation
    /// failure, as `Vec::push` does.
    pub(crate) fn insert(&mut self, node: Node<T>) -> usize {
        self.occupied += 1;
        if let Some(slot) = self.free_head {
            if let Slot::Vacant {
                generation,
                next_free,
            } = self.slots[slot]
            {
                self.free_head = next_free;
                self.slots[slot] = Slot::Occupied { generation, node };
                return slot;
            }
        }
        let grown_from = self.slots.capacity();
        self.slots.push(Slot::Occupied {
            generation: 0,
            node,
        });
        if self.slots.capacity() != grown_from {
            tracing::trace!(from = grown_from, to = self.slots.capacity(), "node arena grown");
        }
        self.slots.len() - 1
    }

    /// Take the node out of `slot`, freeing the slot for reuse.
    pub(crate) fn remove(&mut self, slot: usize) -> Option<Node<T>> {
        let generation = match self.slots.get(slot)? {
            Slot::Occupied { generation, .. } => *generation,
            Slot::Vacant { .. } => return None,
        };
        let vacated = Slot::Vacant {
            generation: generation.wrapping_add(1),
            next_free: self.free_head,
        };
        let Slot::Occupied { node, .. } = std::mem::replace(&mut self.slots[slot], vacated) else {
            return None;
        };
        self.free_head = Some(slot);
        self.occupied -= 1;
        Some(node)
    }

    /// Vacate every slot. Capacity is kept and generations move on, so no
    /// handle issued before the call stays valid.
    pub(crate) fn clear(&mut self) {
        let mut next_free = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            let generation = match slot {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => *generation,
            };
            *slot = Slot::Vacant {
                generation,
                next_free,
            };
            next_free = Some(index);
        }
        self.free_head = next_free;
        self.occupied = 0;
    }

    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let vacant = self.slots.len() - self.occupied;
        self.slots.try_reserve(additional.saturating_sub(vacant))
    }

    pub(crate) fn node(&self, slot: usize) -> Option<&Node<T>> {
        match self.slots.get(slot)? {
            Slot::Occupied { node, .. } => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        match self.slots.get_mut(slot)? {
            Slot::Occupied { node, .. } => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn handle(&self, slot: usize) -> Option<NodeHandle> {
        match self.slots.get(slot)? {
            Slot::Occupied { generation, .. } => Some(NodeHandle {
                slot,
                generation: *generation,
            }),
            Slot::Vacant { .. } => None,
        }
    }

    /// Resolve a handle, rejecting it if its node has since been removed.
    pub(crate) fn resolve(&self, handle: NodeHandle) -> Option<&Node<T>> {
        match self.slots.get(handle.slot)? {
            Slot::Occupied { generation, node } if *generation == handle.generation => Some(node),
            _ => None,
        }
    }

    pub(crate) fn resolve_mut(&mut self, handle: NodeHandle) -> Option<&mut Node<T>> {
        match self.slots.get_mut(handle.slot)? {
            Slot::Occupied { generation, node } if *generation == handle.generation => Some(node),
            _ => None,
        }
    }
}
