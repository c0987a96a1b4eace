//! DynArray behaviour on the numbers fixture.

use super::common::{numbers_array, BACKWARD, FORWARD};
use cursorial::testing::spaced;
use cursorial::{walk, ContainerError, ContainerKind, Cursor, DynArray, DEFAULT_CAPACITY};

#[test]
fn test_constructor() {
    let fresh: DynArray<String> = DynArray::new();
    assert!(fresh.is_empty());
    assert_eq!(fresh.capacity(), DEFAULT_CAPACITY);
    let default: DynArray<String> = DynArray::default();
    assert_eq!(default.capacity(), DEFAULT_CAPACITY);
    let bare: DynArray<String> = DynArray::with_capacity(0).unwrap();
    assert_eq!(bare.capacity(), 0);

    let v = numbers_array();
    let copy = v.try_clone().unwrap();
    assert_eq!(copy, v);
    assert_eq!(copy.capacity(), v.capacity());

    // Same contents, distinct storage.
    let mut a = v.begin();
    let mut b = copy.begin();
    while !a.is_end() {
        assert_eq!(a.get(), b.get());
        assert!(!std::ptr::eq(a.get().unwrap(), b.get().unwrap()));
        a.advance();
        b.advance();
    }
}

#[test]
fn test_assign_replaces_previous_contents() {
    let v = numbers_array();
    let mut copy = DynArray::new();
    copy.push_back("element to be erased".to_string()).unwrap();

    copy.assign(&v).unwrap();
    assert_eq!(copy, v);
    assert!(copy.capacity() >= v.capacity());
    assert!(!copy.iter().any(|word| word == "element to be erased"));
}

#[test]
fn test_empty_and_clear() {
    let empty: DynArray<String> = DynArray::new();
    assert!(empty.is_empty());

    let mut v = numbers_array();
    assert!(!v.is_empty());
    let capacity = v.capacity();
    v.clear();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), capacity);
}

#[test]
fn test_size_reserve_capacity() {
    let mut v = numbers_array();
    assert_eq!(v.len(), 11);
    assert_eq!(v.capacity(), 2 * DEFAULT_CAPACITY);

    v.push_back("undici".to_string()).unwrap();
    assert_eq!(v.len(), 12);
    assert!(v.capacity() >= v.len());

    v.reserve(30).unwrap();
    assert_eq!(v.capacity(), 30);
    v.reserve(5).unwrap();
    assert_eq!(v.capacity(), 30);
    assert_eq!(v.len(), 12);
}

#[test]
fn test_front_and_index() {
    let mut v = numbers_array();
    assert_eq!(v.front().unwrap(), "zero");
    assert_eq!(v[0], "zero");
    v[5] = "modificato".to_string();
    assert_eq!(v[5], "modificato");
}

#[test]
fn test_push_back_pop_back() {
    let mut v = numbers_array();
    let original = v.back().unwrap();
    v.push_back("undici".to_string()).unwrap();
    assert_eq!(v.back().unwrap(), "undici");
    assert_eq!(v.pop_back().unwrap(), "undici");
    assert_eq!(v.back().unwrap(), original);
}

#[test]
fn test_iterator() {
    let v = numbers_array();
    assert_eq!(spaced(walk(v.begin(), v.end())), FORWARD);
    assert_eq!(spaced(&v), FORWARD);
}

#[test]
fn test_reverse_iterator() {
    let v = numbers_array();
    assert_eq!(spaced(walk(v.rbegin(), v.rend())), BACKWARD);
}

#[test]
fn test_cursor_arithmetic() {
    let v = numbers_array();
    let middle = v.begin().offset(5).unwrap();
    assert_eq!(middle.get().map(String::as_str), Some("cinque"));
    assert_eq!(middle.distance_to(&v.end()), 6);
    assert!(v.begin().offset(-1).is_none());
    assert_eq!(v.begin().offset(11), Some(v.end()));

    let last = v.rbegin();
    assert_eq!(last.index(), Some(10));
    assert_eq!(v.rend().index(), None);
}

#[test]
fn test_exceptions() {
    let mut empty: DynArray<String> = DynArray::new();
    assert_eq!(empty.front(), Err(ContainerError::Empty(ContainerKind::Array)));
    assert_eq!(empty.back(), Err(ContainerError::Empty(ContainerKind::Array)));
    assert_eq!(empty.pop_back(), Err(ContainerError::Empty(ContainerKind::Array)));
    assert_eq!(empty.pop_back().unwrap_err().to_string(), "empty array");
}

#[test]
fn test_json_round_trip_keeps_live_prefix() {
    let mut v = numbers_array();
    v.pop_back().unwrap();
    let json = serde_json::to_string(&v).unwrap();
    assert!(json.starts_with("[\"zero\""));
    assert!(!json.contains("dieci"));
    let back: DynArray<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
