// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for container operation sequences.
//!
//! Drives a DynArray and a List with arbitrary operations next to std
//! models. Any divergence in contents, length or error reporting is a bug,
//! and the debug contracts catch broken links or capacity bookkeeping.

#![no_main]

use std::collections::VecDeque;

use arbitrary::Arbitrary;
use cursorial::contracts::check_list_links;
use cursorial::{walk, DynArray, List};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    ArrayPush(u8),
    ArrayPop,
    ArrayReserve(u8),
    ArrayClear,
    ListPushFront(u8),
    ListPushBack(u8),
    ListPopFront,
    ListPopBack,
    ListClear,
    ListEditFront(u8),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut array = DynArray::new();
    let mut vec = Vec::new();
    let mut list = List::new();
    let mut deque = VecDeque::new();

    for op in ops.into_iter().take(512) {
        match op {
            Op::ArrayPush(x) => {
                array.push_back(x).unwrap();
                vec.push(x);
            }
            Op::ArrayPop => assert_eq!(array.pop_back().ok(), vec.pop()),
            Op::ArrayReserve(n) => {
                let before = array.capacity();
                array.reserve(usize::from(n)).unwrap();
                assert_eq!(array.capacity(), before.max(usize::from(n)));
            }
            Op::ArrayClear => {
                array.clear();
                vec.clear();
            }
            Op::ListPushFront(x) => {
                list.push_front(x).unwrap();
                deque.push_front(x);
            }
            Op::ListPushBack(x) => {
                list.push_back(x).unwrap();
                deque.push_back(x);
            }
            Op::ListPopFront => assert_eq!(list.pop_front().ok(), deque.pop_front()),
            Op::ListPopBack => assert_eq!(list.pop_back().ok(), deque.pop_back()),
            Op::ListClear => {
                list.clear();
                deque.clear();
            }
            Op::ListEditFront(x) => {
                if let Some(handle) = list.begin().handle() {
                    if let Some(value) = list.get_mut(handle) {
                        *value = x;
                    }
                    if let Some(front) = deque.front_mut() {
                        *front = x;
                    }
                }
            }
        }

        assert!(array.len() <= array.capacity());
        assert_eq!(array.as_slice(), vec.as_slice());
        assert_eq!(list.len(), deque.len());
    }

    check_list_links(&list);
    assert!(walk(list.begin(), list.end()).eq(deque.iter()));
    assert!(walk(list.rbegin(), list.rend()).eq(deque.iter().rev()));
    assert!(walk(array.rbegin(), array.rend()).eq(vec.iter().rev()));
});
