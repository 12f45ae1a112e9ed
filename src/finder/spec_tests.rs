//! Tests for finder/spec

use super::*;

#[test]
fn test_literal_find_starts_is_case_insensitive() {
    let matcher = Matcher::literal("t");
    assert_eq!(matcher.find_starts("The cat"), vec![0, 6]);
}

#[test]
fn test_literal_find_starts_multi_char() {
    let matcher = Matcher::literal("at");
    assert_eq!(matcher.find_starts("the cat sat on the mat"), vec![5, 9, 20]);
}

#[test]
fn test_literal_is_not_interpreted_as_regex() {
    // "a+" typed literally must only match the two-character text "a+".
    let matcher = Matcher::literal("a+");
    assert_eq!(matcher.find_starts("aaa a+ aa"), vec![4]);
}

#[test]
fn test_literal_empty_needle_matches_nothing() {
    let matcher = Matcher::literal("");
    assert!(matcher.find_starts("anything").is_empty());
}

#[test]
fn test_literal_non_ascii_needle() {
    let matcher = Matcher::literal("ä");
    // "Ä" is two bytes, so the second occurrence starts at byte 11.
    assert_eq!(matcher.find_starts("Äpfel und äpfel"), vec![0, 11]);
}

#[test]
fn test_literal_crossing_newline() {
    let matcher = Matcher::literal("b\nc");
    assert_eq!(matcher.find_starts("ab\ncd"), vec![1]);
}

#[test]
fn test_pattern_find_starts_multiline() {
    let spec = SearchSpec::pattern(r"^\w");
    let matcher = spec.compile().unwrap();
    assert_eq!(matcher.find_starts("foo\nbar"), vec![0, 4]);
}

#[test]
fn test_literal_spec_compiles_to_literal_matcher() {
    let matcher = SearchSpec::literal("At").compile().unwrap();
    assert!(!matcher.is_pattern());
    assert_eq!(matcher.find_starts("the cat"), vec![5]);
}

#[test]
fn test_pattern_compile_failure_surfaces() {
    let spec = SearchSpec::pattern("[unclosed");
    assert!(spec.compile().is_err());
}

#[test]
fn test_spec_records_regex_flag() {
    assert!(!SearchSpec::literal("at").is_regex());
    assert!(SearchSpec::pattern("a+").is_regex());
    assert_eq!(SearchSpec::pattern("a+").string_to_find(), "a+");
}

#[test]
fn test_default_spec_is_empty_literal() {
    let spec = SearchSpec::default();
    assert_eq!(spec.string_to_find(), "");
    assert!(!spec.is_regex());
}

#[test]
fn test_matches_at_case_insensitive() {
    assert!(matches_at("The CAT", 4, "cat"));
    assert!(matches_at("The CAT", 4, "CaT"));
    assert!(!matches_at("The CAT", 4, "cab"));
}

#[test]
fn test_matches_at_out_of_range() {
    assert!(!matches_at("abc", 2, "cd"));
    assert!(!matches_at("abc", 7, "a"));
}

#[test]
fn test_matches_at_non_boundary_offset() {
    // 1 is inside the two-byte "ä".
    assert!(!matches_at("äbc", 1, "b"));
}
