//! Cursor-driven containers and generic sequence algorithms.
//!
//! This crate provides two containers, a growable array ([`DynArray`]) and a
//! doubly-linked list ([`List`]), plus algorithms that only ever see a pair
//! of cursors. Any algorithm runs unchanged over an array range, a list
//! range, or a reverse range of either.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌────────────────────┐
//! │  cursor.rs   │◀────│  array/, list/   │     │   algorithms/      │
//! │ (Cursor,     │     │ (DynArray, List, │     │ (length, find,     │
//! │  walk)       │     │  their cursors)  │     │  equal, search,    │
//! └──────────────┘     └──────────────────┘     │  edit_distance)    │
//!        ▲                      │               └────────────────────┘
//!        │                      ▼                         │
//!        │             ┌──────────────────┐               │
//!        │             │   contracts.rs   │               │
//!        │             │ (debug invariant │               │
//!        │             │  checks)         │               │
//!        │             └──────────────────┘               │
//!        └────────────────────────────────────────────────┘
//! ```
//!
//! | Module       | Provides                                               |
//! |--------------|--------------------------------------------------------|
//! | `cursor`     | `Cursor` trait, `walk` iterator adapter                |
//! | `array`      | `DynArray`, `ArrayCursor`, `ArrayRevCursor`            |
//! | `list`       | `List`, `ListCursor`, `ListRevCursor`, `NodeHandle`    |
//! | `algorithms` | `length`, `find`, `equal`, `search`, `ends_with`,      |
//! |              | `edit_distance`, `edit_distance_within`                |
//! | `contracts`  | Debug-build structural invariant checks                |
//! | `error`      | `ContainerError`, `ContainerKind`, `Result`            |
//!
//! # Usage
//!
//! ```
//! use cursorial::{edit_distance, search, DynArray, List};
//!
//! let mut list = List::new();
//! for c in "GUMBO".chars() {
//!     list.push_back(c)?;
//! }
//! let array: DynArray<char> = "GAMBOL".chars().collect();
//! assert_eq!(edit_distance(list.begin(), list.end(), array.begin(), array.end()), 2);
//!
//! let needle: List<char> = "MBO".chars().collect();
//! let found = search(array.begin(), array.end(), needle.begin(), needle.end());
//! assert_eq!(found.index(), 2);
//! # Ok::<(), cursorial::ContainerError>(())
//! ```

// Module declarations
pub mod algorithms;
pub mod array;
pub mod contracts;
pub mod cursor;
mod error;
pub mod list;
pub mod testing;

// Re-exports for public API
pub use algorithms::{edit_distance, edit_distance_within, ends_with, equal, find, length, search};
pub use array::{ArrayCursor, ArrayRevCursor, DynArray, DEFAULT_CAPACITY};
pub use cursor::{walk, Cursor, Walk};
pub use error::{ContainerError, ContainerKind, Result};
pub use list::{Iter as ListIter, List, ListCursor, ListRevCursor, NodeHandle};
