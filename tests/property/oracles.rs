//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations over slices. They serve as
//! ground truth for the cursor-based algorithms.

#![allow(dead_code)]

/// Levenshtein distance with the full `(n+1) × (m+1)` table.
///
/// O(nm) time and space, straight from the recurrence.
pub fn oracle_levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut table = vec![vec![0usize; m + 1]; n + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }
    table[n][m]
}

/// First index where `needle` occurs in `hay`, by brute-force windows.
pub fn oracle_search<T: PartialEq>(hay: &[T], needle: &[T]) -> Option<usize> {
    if needle.is_empty() {
        return (!hay.is_empty()).then_some(0);
    }
    hay.windows(needle.len()).position(|window| window == needle)
}
