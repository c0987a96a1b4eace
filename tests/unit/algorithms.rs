//! Generic algorithms across both containers and both directions.

use super::common::{inverted_list, list_of, numbers_array};
use cursorial::{
    edit_distance, edit_distance_within, ends_with, equal, find, length, search, Cursor, DynArray,
    List,
};

#[test]
fn test_length() {
    let v = numbers_array();
    let l = inverted_list();
    assert_eq!(length(v.begin(), v.end()), 11);
    assert_eq!(length(l.rbegin(), l.rend()), 11);
    assert_eq!(length(v.end(), v.end()), 0);
}

#[test]
fn test_find() {
    let v = numbers_array();
    let hit = find(v.begin(), v.end(), "due");
    assert_eq!(hit.get(), Some(&v[2]));
    let hit = find(v.begin(), v.end(), "sei");
    assert_eq!(hit.get(), Some(&v[6]));
    assert_eq!(find(v.begin(), v.end(), "undici"), v.end());

    let rhit = find(v.rbegin(), v.rend(), "due");
    assert_eq!(rhit.get(), Some(&v[2]));

    let l = inverted_list();
    let hit = find(l.begin(), l.end(), "dieci");
    assert_eq!(hit.get().cloned(), l.front().ok());
    let hit = find(l.begin(), l.end(), "zero");
    assert_eq!(hit.get().cloned(), l.back().ok());

    let rhit = find(l.rbegin(), l.rend(), "dieci");
    assert_eq!(rhit.get().cloned(), l.front().ok());
}

#[test]
fn test_equal() {
    let v = numbers_array();
    let l = inverted_list();

    let empty_array: DynArray<String> = DynArray::new();
    let empty_list: List<String> = List::new();
    assert!(equal(empty_array.begin(), empty_array.end(), empty_list.begin()));

    assert!(equal(l.begin(), l.end(), l.begin()));

    let mut prefix = list_of(&["zero", "uno", "due"]);
    assert!(equal(prefix.begin(), prefix.end(), v.begin()));

    prefix.push_back("sei".to_string()).unwrap();
    assert!(!equal(prefix.begin(), prefix.end(), v.begin()));
}

#[test]
fn test_search() {
    let v = numbers_array();
    let mut needle = list_of(&["sei", "sette", "otto"]);

    let found = search(v.begin(), v.end(), needle.begin(), needle.end());
    assert_eq!(found.index(), 6);
    assert!(std::ptr::eq(found.get().unwrap(), &v[6]));

    let found = search(v.rbegin(), v.rend(), needle.rbegin(), needle.rend());
    assert_eq!(found.index(), Some(8));

    for word in ["nove", "dieci", "undici"] {
        needle.push_back(word.to_string()).unwrap();
    }
    assert_eq!(search(v.begin(), v.end(), needle.begin(), needle.end()), v.end());
    assert_eq!(
        search(v.rbegin(), v.rend(), needle.rbegin(), needle.rend()),
        v.rend()
    );
}

#[test]
fn test_ends_with() {
    let v = numbers_array();
    let tail = list_of(&["nove", "dieci"]);
    assert!(ends_with(v.begin(), v.end(), tail.begin(), tail.end()));
    assert!(!ends_with(v.rbegin(), v.rend(), tail.begin(), tail.end()));
    assert!(!ends_with(v.rbegin(), v.rend(), tail.rbegin(), tail.rend()));

    let head = list_of(&["uno", "zero"]);
    assert!(ends_with(v.rbegin(), v.rend(), head.begin(), head.end()));
}

#[test]
fn test_edit_distance() {
    let l: List<char> = "GUMBO".chars().collect();
    let v: DynArray<char> = "GAMBOL".chars().collect();
    assert_eq!(edit_distance(l.begin(), l.end(), v.begin(), v.end()), 2);
    assert_eq!(edit_distance(v.begin(), v.end(), l.begin(), l.end()), 2);
    assert_eq!(
        edit_distance_within(l.begin(), l.end(), v.begin(), v.end(), 2),
        Some(2)
    );
    assert_eq!(edit_distance_within(l.begin(), l.end(), v.begin(), v.end(), 1), None);
}

#[test]
fn test_edit_distance_over_words() {
    let v = numbers_array();
    let l = inverted_list();
    // Reversing 11 distinct words keeps only the middle one in place.
    assert_eq!(edit_distance(v.begin(), v.end(), l.begin(), l.end()), 10);
    assert_eq!(edit_distance(v.rbegin(), v.rend(), l.begin(), l.end()), 0);
}
