//! Error type shared by both containers.
//!
//! Two failure modes are signalled: reading or removing from an empty
//! container, and failing to obtain storage. Everything else (indexing past
//! the end, dereferencing a sentinel) is either a panic or an `Option`.

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// Which container produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Array,
    List,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Array => f.write_str("array"),
            ContainerKind::List => f.write_str("list"),
        }
    }
}

/// Errors returned by container operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// `front`, `back` or a pop on a container holding no elements.
    #[error("empty {0}")]
    Empty(ContainerKind),
    /// Storage for `requested` slots could not be obtained. The container
    /// is left exactly as it was before the call.
    #[error("{kind} could not allocate storage for {requested} slots")]
    AllocationFailed {
        kind: ContainerKind,
        requested: usize,
    },
}

impl ContainerError {
    pub(crate) fn allocation(kind: ContainerKind, requested: usize, source: &TryReserveError) -> Self {
        tracing::warn!(%kind, requested, error = %source, "allocation refused");
        ContainerError::AllocationFailed { kind, requested }
    }

    /// True for the empty-container condition.
    pub fn is_empty_container(&self) -> bool {
        matches!(self, ContainerError::Empty(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = ContainerError> = std::result::Result<T, E>;
