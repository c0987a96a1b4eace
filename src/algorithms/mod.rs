// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Container-agnostic sequence algorithms.
//!
//! Everything here takes half-open cursor ranges and never looks behind
//! the [`Cursor`] trait, so an array range and a list range (or a reverse
//! range of either) mix freely. Element comparison goes through
//! `PartialEq` between the two item types.

mod edit_distance;

pub use edit_distance::{edit_distance, edit_distance_within};

use crate::cursor::{walk, Cursor};

/// Number of steps from `first` to `last`.
pub fn length<'a, C: Cursor<'a>>(first: C, last: C) -> usize {
    walk(first, last).count()
}

/// First position in `[first, last)` holding `value`, or `last`.
pub fn find<'a, C, Q>(mut first: C, last: C, value: &Q) -> C
where
    C: Cursor<'a>,
    C::Item: PartialEq<Q>,
    Q: ?Sized,
{
    while first != last {
        match first.get() {
            Some(item) if item == value => break,
            Some(_) => first.advance(),
            None => return last,
        }
    }
    first
}

/// Whether `[first, last)` matches, element by element, the range that
/// starts at `first2`. A second range that runs out first is a mismatch.
pub fn equal<'a, 'b, A, B>(mut first: A, last: A, mut first2: B) -> bool
where
    A: Cursor<'a>,
    B: Cursor<'b>,
    A::Item: PartialEq<B::Item>,
{
    while first != last {
        match (first.get(), first2.get()) {
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
        first.advance();
        first2.advance();
    }
    true
}

/// Position in `[first, last)` where `[first2, last2)` first occurs, or
/// `last`. An empty needle matches at `first`.
///
/// Naive O(n·m) scan: at every haystack position the comparison restarts
/// from `first2`.
pub fn search<'a, 'b, A, B>(mut first: A, last: A, first2: B, last2: B) -> A
where
    A: Cursor<'a>,
    B: Cursor<'b>,
    A::Item: PartialEq<B::Item>,
{
    if first2 == last2 {
        return first;
    }
    while first != last {
        let mut hay = first.clone();
        let mut needle = first2.clone();
        while hay != last && needle != last2 {
            match (hay.get(), needle.get()) {
                (Some(a), Some(b)) if a == b => {}
                _ => break,
            }
            hay.advance();
            needle.advance();
        }
        if needle == last2 {
            return first;
        }
        first.advance();
    }
    first
}

/// Whether `[first2, last2)` is a suffix of `[first, last)`.
///
/// Measures both ranges, skips the haystack's surplus and compares the
/// tails, so an earlier occurrence of the needle cannot hide the suffix.
pub fn ends_with<'a, 'b, A, B>(first: A, last: A, first2: B, last2: B) -> bool
where
    A: Cursor<'a>,
    B: Cursor<'b>,
    A::Item: PartialEq<B::Item>,
{
    let n = length(first.clone(), last.clone());
    let m = length(first2.clone(), last2);
    if m > n {
        return false;
    }
    let mut tail = first;
    for _ in 0..n - m {
        tail.advance();
    }
    equal(tail, last, first2)
}
