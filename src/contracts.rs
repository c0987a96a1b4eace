//! Runtime contracts for the container invariants.
//!
//! These are debug-mode assertions that re-check the structural invariants
//! after mutations. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Panic with a message naming the violated invariant
//!
//! # Invariants
//!
//! | Contract Function        | Invariant                                            |
//! |--------------------------|------------------------------------------------------|
//! | `check_array_invariants` | `len <= capacity`                                    |
//! | `check_list_boundaries`  | front absent ⇔ back absent ⇔ len 0; boundary links   |
//! | `check_list_links`       | every `next.prev == node`, walk length == len        |
//!
//! `check_list_boundaries` is O(1) and runs after every push and pop.
//! `check_list_links` walks the whole list and runs after bulk operations
//! (`clear`, copies) and from the tests.

use crate::array::DynArray;
use crate::list::List;

// ============================================================================
// ARRAY CONTRACTS
// ============================================================================

/// Check that the live prefix fits in the allocated slots.
///
/// # Panics (debug builds only)
/// Panics if `len() > capacity()`.
#[inline]
pub fn check_array_invariants<T>(array: &DynArray<T>) {
    debug_assert!(
        array.len() <= array.capacity(),
        "Contract violation: DynArray length {} exceeds capacity {}",
        array.len(),
        array.capacity()
    );
}

// ============================================================================
// LIST CONTRACTS
// ============================================================================

/// Check the boundary nodes and their outward links.
///
/// # Panics (debug builds only)
/// Panics if exactly one of front/back is present, if the presence of the
/// boundaries disagrees with `len`, or if the front has a `prev` / the back
/// has a `next`.
#[inline]
pub fn check_list_boundaries<T>(list: &List<T>) {
    let front = list.front_slot();
    let back = list.back_slot();

    debug_assert_eq!(
        front.is_none(),
        back.is_none(),
        "Contract violation: List front {:?} / back {:?} presence differs",
        front,
        back
    );
    debug_assert_eq!(
        front.is_none(),
        list.len() == 0,
        "Contract violation: List len {} but front {:?}",
        list.len(),
        front
    );
    debug_assert_eq!(
        list.arena().occupied(),
        list.len(),
        "Contract violation: List len {} but arena holds {} nodes",
        list.len(),
        list.arena().occupied()
    );

    if let Some(node) = front.and_then(|slot| list.arena().node(slot)) {
        debug_assert!(
            node.prev.is_none(),
            "Contract violation: List front {:?} has prev {:?}",
            front,
            node.prev
        );
    }
    if let Some(node) = back.and_then(|slot| list.arena().node(slot)) {
        debug_assert!(
            node.next.is_none(),
            "Contract violation: List back {:?} has next {:?}",
            back,
            node.next
        );
    }
}

/// Walk the list front to back checking every back-link.
///
/// # Panics (debug builds only)
/// Panics if a link points at a vacant slot, if `node.next.prev != node`,
/// if the walk does not end at `back`, or if its length differs from `len`.
pub fn check_list_links<T>(list: &List<T>) {
    if !cfg!(debug_assertions) {
        return;
    }
    check_list_boundaries(list);

    let arena = list.arena();
    let mut previous: Option<usize> = None;
    let mut current = list.front_slot();
    let mut steps = 0usize;

    while let Some(slot) = current {
        let node = arena.node(slot);
        debug_assert!(
            node.is_some(),
            "Contract violation: List link to vacant slot {} after {} steps",
            slot,
            steps
        );
        let Some(node) = node else { return };

        debug_assert_eq!(
            node.prev, previous,
            "Contract violation: List slot {} has prev {:?}, expected {:?}",
            slot, node.prev, previous
        );

        steps += 1;
        debug_assert!(
            steps <= list.len(),
            "Contract violation: List walk exceeds len {} (cycle?)",
            list.len()
        );
        if steps > list.len() {
            return;
        }

        previous = Some(slot);
        current = node.next;
    }

    debug_assert_eq!(
        previous,
        list.back_slot(),
        "Contract violation: List walk ends at {:?}, back is {:?}",
        previous,
        list.back_slot()
    );
    debug_assert_eq!(
        steps,
        list.len(),
        "Contract violation: List walk visits {} nodes, len is {}",
        steps,
        list.len()
    );
}
