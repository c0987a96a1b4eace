// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance over mixed containers.
//!
//! Checks the metric bounds, symmetry, and that the bounded variant agrees
//! with the full computation for every threshold it is given.

#![no_main]

use arbitrary::Arbitrary;
use cursorial::{edit_distance, edit_distance_within, DynArray, List};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: Vec<u8>,
    b: Vec<u8>,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let a = &input.a[..input.a.len().min(64)];
    let b = &input.b[..input.b.len().min(64)];

    let list: List<u8> = a.iter().copied().collect();
    let array: DynArray<u8> = b.iter().copied().collect();

    let d = edit_distance(list.begin(), list.end(), array.begin(), array.end());
    let reverse = edit_distance(array.begin(), array.end(), list.begin(), list.end());
    assert_eq!(d, reverse, "distance is not symmetric for {a:?} / {b:?}");

    assert!(d >= a.len().abs_diff(b.len()));
    assert!(d <= a.len().max(b.len()));
    assert_eq!(d == 0, a == b);

    let max = usize::from(input.max);
    let bounded = edit_distance_within(list.begin(), list.end(), array.begin(), array.end(), max);
    assert_eq!(bounded, (d <= max).then_some(d));
});
