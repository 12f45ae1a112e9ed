//! Tests for finder/scanner

use std::collections::HashSet;

use proptest::prelude::*;

use super::*;
use crate::finder::spec::SearchSpec;
use crate::test_utils::test_helpers::{FakeEditor, TEST_TEXT};

fn set(offsets: &[usize]) -> HashSet<usize> {
    offsets.iter().copied().collect()
}

/// Reference scanner: every character boundary where the query matches
/// case-insensitively.
fn naive_scan(text: &str, query: &str) -> HashSet<usize> {
    if query.is_empty() {
        return HashSet::new();
    }
    text.char_indices()
        .map(|(i, _)| i)
        .filter(|&i| matches_at(text, i, query))
        .collect()
}

#[test]
fn test_full_scan_finds_all_occurrences() {
    let editor = FakeEditor::new(TEST_TEXT);
    let matcher = Matcher::literal("at");
    assert_eq!(scan(&editor, &matcher), set(&[5, 9, 20]));
}

#[test]
fn test_full_scan_excludes_folded_offsets() {
    // "sat" starts at 8; folding 8..11 hides the match at 9.
    let editor = FakeEditor::new(TEST_TEXT).with_fold(8..11);
    let matcher = Matcher::literal("at");
    assert_eq!(scan(&editor, &matcher), set(&[5, 20]));
}

#[test]
fn test_fold_excludes_match_inside_region() {
    // Match starting at offset 12, fold spanning [10, 15).
    let text = "............at........";
    let editor = FakeEditor::new(text).with_fold(10..15);
    let matcher = Matcher::literal("at");
    assert!(scan(&editor, &matcher).is_empty());
}

#[test]
fn test_fold_does_not_exclude_match_at_region_end() {
    let text = "..........at..";
    let editor = FakeEditor::new(text).with_fold(5..10);
    let matcher = Matcher::literal("at");
    assert_eq!(scan(&editor, &matcher), set(&[10]));
}

#[test]
fn test_narrow_keeps_continuing_matches_only() {
    // All three "at" sites continue under "at"; the one at the buffer end
    // (20) has no trailing space, so "at " drops it.
    let previous = set(&[5, 9, 20]);
    assert_eq!(narrow(TEST_TEXT, &previous, "at"), set(&[5, 9, 20]));
    assert_eq!(narrow(TEST_TEXT, &previous, "at "), set(&[5, 9]));
}

#[test]
fn test_narrow_is_case_insensitive() {
    let previous = set(&[0]);
    assert_eq!(narrow("The cat", &previous, "th"), set(&[0]));
}

#[test]
fn test_any_match_continues() {
    let cached = set(&[5, 9, 20]);
    assert!(any_match_continues(TEST_TEXT, &cached, "at"));
    assert!(!any_match_continues(TEST_TEXT, &cached, "atz"));
    assert!(!any_match_continues(TEST_TEXT, &HashSet::new(), "at"));
}

proptest! {
    // Literal search law: the scan equals the set of offsets where the
    // buffer text case-insensitively equals the query.
    #[test]
    fn prop_literal_scan_matches_reference(
        text in "[abAB ]{0,40}",
        query in "[ab]{1,3}",
    ) {
        let editor = FakeEditor::new(&text);
        let matcher = Matcher::literal(&query);
        prop_assert_eq!(scan(&editor, &matcher), naive_scan(&text, &query));
    }

    // Incremental refinement law: narrowing the previous result by the
    // grown query equals a full scan for the grown query, and is a subset
    // of the previous result.
    #[test]
    fn prop_narrow_equals_full_scan_on_growth(
        text in "[abAB ]{0,40}",
        base in "[ab]{1,2}",
        extension in "[ab]{1,2}",
    ) {
        let editor = FakeEditor::new(&text);
        let previous = scan(&editor, &Matcher::literal(&base));
        let grown = format!("{base}{extension}");

        let narrowed = narrow(&text, &previous, &grown);
        let rescanned = scan(&editor, &Matcher::literal(&grown));

        prop_assert!(narrowed.is_subset(&previous));
        prop_assert_eq!(narrowed, rescanned);
    }
}

#[test]
fn test_pattern_scan_through_editor() {
    let editor = FakeEditor::new("foo bar\nbaz");
    let matcher = SearchSpec::pattern(r"\bb\w+").compile().unwrap();
    assert_eq!(scan(&editor, &matcher), set(&[4, 8]));
}
