//! The cursor contract shared by every container.
//!
//! A cursor is a cheap position marker: it compares equal to another cursor
//! at the same position of the same container, it can be dereferenced, and
//! it can step once in its direction. That is all the generic algorithms
//! need, so that is all the trait asks for. Array cursors can also move
//! backwards and jump; those capabilities live on the concrete types.
//!
//! Ranges are half-open `[first, last)` pairs of the same cursor type, the
//! way `begin()`/`end()` and `rbegin()`/`rend()` hand them out.

use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Minimal position marker over a sequence of `Item`s borrowed for `'a`.
pub trait Cursor<'a>: Clone + PartialEq {
    type Item: 'a;

    /// Element under the cursor, or `None` at a sentinel (`end`/`rend`).
    fn get(&self) -> Option<&'a Self::Item>;

    /// Step once in the cursor's direction. A sentinel stays where it is.
    fn advance(&mut self);

    /// Cursor one step ahead, leaving `self` in place.
    fn next_position(&self) -> Self {
        let mut next = self.clone();
        next.advance();
        next
    }
}

/// Iterate the half-open range `[first, last)`.
///
/// `last` must be reachable from `first` by advancing; if it is not, the
/// walk stops at the first sentinel instead of looping forever.
pub fn walk<'a, C: Cursor<'a>>(first: C, last: C) -> Walk<'a, C> {
    Walk {
        current: first,
        last,
        _marker: PhantomData,
    }
}

/// Iterator over a cursor range, created by [`walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a, C> {
    current: C,
    last: C,
    _marker: PhantomData<&'a ()>,
}

impl<'a, C: Cursor<'a>> Iterator for Walk<'a, C> {
    type Item = &'a C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.last {
            return None;
        }
        let item = self.current.get()?;
        self.current.advance();
        Some(item)
    }
}

impl<'a, C: Cursor<'a>> FusedIterator for Walk<'a, C> {}
