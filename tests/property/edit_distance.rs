//! Edit-distance properties and differential checks.

use super::oracles::oracle_levenshtein;
use cursorial::{edit_distance, edit_distance_within, DynArray, List};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,8}").unwrap()
}

/// Words with diacritics and multi-byte characters.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "cafe".to_string(),
        "naïve".to_string(),
        "naive".to_string(),
        "harīṣh".to_string(),
        "harish".to_string(),
        "tōkyō".to_string(),
        "తెలుగు".to_string(),
        String::new(),
    ])
}

fn dist(a: &str, b: &str) -> usize {
    let a: List<char> = a.chars().collect();
    let b: DynArray<char> = b.chars().collect();
    edit_distance(a.begin(), a.end(), b.begin(), b.end())
}

fn dist_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: DynArray<char> = a.chars().collect();
    let b: List<char> = b.chars().collect();
    edit_distance_within(a.begin(), a.end(), b.begin(), b.end(), max)
}

// ============================================================================
// LEVENSHTEIN PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_matches_oracle(a in word_strategy(), b in word_strategy()) {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        prop_assert_eq!(dist(&a, &b), oracle_levenshtein(&ac, &bc));
    }

    #[test]
    fn prop_matches_strsim(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(dist(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_unicode_counts_chars_not_bytes(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        prop_assert_eq!(dist(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(dist(&a, &b), dist(&b, &a));
    }

    #[test]
    fn prop_zero_iff_equal(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(dist(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_bounded_by_lengths(a in word_strategy(), b in word_strategy()) {
        let (n, m) = (a.chars().count(), b.chars().count());
        let d = dist(&a, &b);
        prop_assert!(d >= n.abs_diff(m));
        prop_assert!(d <= n.max(m));
    }

    #[test]
    fn prop_triangle_inequality(a in word_strategy(), b in word_strategy(), c in word_strategy()) {
        prop_assert!(dist(&a, &c) <= dist(&a, &b) + dist(&b, &c));
    }

    #[test]
    fn prop_within_agrees_with_full(a in word_strategy(), b in word_strategy(), max in 0usize..6) {
        let full = dist(&a, &b);
        let bounded = dist_within(&a, &b, max);
        if full <= max {
            prop_assert_eq!(bounded, Some(full));
        } else {
            prop_assert_eq!(bounded, None);
        }
    }

    #[test]
    fn prop_reverse_ranges_preserve_distance(a in word_strategy(), b in word_strategy()) {
        let la: List<char> = a.chars().collect();
        let vb: DynArray<char> = b.chars().collect();
        prop_assert_eq!(
            edit_distance(la.rbegin(), la.rend(), vb.rbegin(), vb.rend()),
            dist(&a, &b)
        );
    }
}
