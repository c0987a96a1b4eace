//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical word fixtures so every suite drives the
//! containers with the same vocabulary.

#![doc(hidden)]

use crate::array::DynArray;
use crate::error::Result;
use crate::list::List;

/// The eleven number words the suites are built around, "zero" to "dieci".
pub const NUMBERS: [&str; 11] = [
    "zero", "uno", "due", "tre", "quattro", "cinque", "sei", "sette", "otto", "nove", "dieci",
];

/// Split text into whitespace-separated words.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_string)
}

/// Array filled by `push_back`, in order.
pub fn array_of<I>(items: I) -> Result<DynArray<String>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut array = DynArray::new();
    for item in items {
        array.push_back(item.into())?;
    }
    Ok(array)
}

/// List filled by `push_back`, in order.
pub fn list_of<I>(items: I) -> Result<List<String>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut list = List::new();
    for item in items {
        list.push_back(item.into())?;
    }
    Ok(list)
}

/// List filled by `push_front`, so it holds the items reversed.
pub fn reversed_list_of<I>(items: I) -> Result<List<String>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut list = List::new();
    for item in items {
        list.push_front(item.into())?;
    }
    Ok(list)
}

/// Join a sequence the way the suites print it: every word followed by a space.
pub fn spaced<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    items.into_iter().fold(String::new(), |mut out, word| {
        out.push_str(word);
        out.push(' ');
        out
    })
}
