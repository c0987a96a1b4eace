// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance over cursor ranges.
//!
//! The recurrence is the classic one:
//!
//! ```text
//! T[i][0] = i
//! T[0][j] = j
//! T[i][j] = min(T[i-1][j] + 1,          // delete
//!               T[i][j-1] + 1,          // insert
//!               T[i-1][j-1] + cost)     // substitute (cost 0 on a match)
//! ```
//!
//! Only two rows of the `(n+1) × (m+1)` table are ever alive. The second
//! range is buffered as references once, then every row walks the buffer,
//! so each input range is stepped through exactly one time.

use crate::algorithms::length;
use crate::cursor::{walk, Cursor};

/// Minimum number of single-element insertions, deletions and
/// substitutions turning `[first, last)` into `[first2, last2)`.
pub fn edit_distance<'a, 'b, A, B>(first: A, last: A, first2: B, last2: B) -> usize
where
    A: Cursor<'a>,
    B: Cursor<'b>,
    A::Item: PartialEq<B::Item>,
{
    let n = length(first.clone(), last.clone());
    let m = length(first2.clone(), last2.clone());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let columns: Vec<&'b B::Item> = walk(first2, last2).collect();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0; m + 1];

    for (i, a) in walk(first, last).enumerate() {
        curr[0] = i + 1;
        for (j, b) in columns.iter().enumerate() {
            let cost = if a == *b { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Edit distance if it is at most `max`, otherwise `None`.
///
/// Two early exits keep the common "too far apart" case cheap:
/// 1. `|n - m|` is a lower bound on the distance, checked before any DP
/// 2. the row minimum never decreases, so once it exceeds `max` the DP stops
pub fn edit_distance_within<'a, 'b, A, B>(
    first: A,
    last: A,
    first2: B,
    last2: B,
    max: usize,
) -> Option<usize>
where
    A: Cursor<'a>,
    B: Cursor<'b>,
    A::Item: PartialEq<B::Item>,
{
    let n = length(first.clone(), last.clone());
    let m = length(first2.clone(), last2.clone());

    if n.abs_diff(m) > max {
        return None;
    }

    let columns: Vec<&'b B::Item> = walk(first2, last2).collect();
    let mut dp: Vec<usize> = (0..=m).collect();
    for (i, a) in walk(first, last).enumerate() {
        let mut diagonal = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, b) in columns.iter().enumerate() {
            let above = dp[j + 1];
            let cost = if a == *b { 0 } else { 1 };
            dp[j + 1] = (above + 1).min(dp[j] + 1).min(diagonal + cost);
            diagonal = above;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    (dp[m] <= max).then_some(dp[m])
}
