//! Match set computation
//!
//! Two paths: a full multiline-aware scan of the whole buffer, and an
//! incremental filter of the previous match set whose cost is proportional
//! to the previous match count rather than the buffer size.

use std::collections::HashSet;

use crate::finder::editor::EditorOps;
use crate::finder::spec::{matches_at, Matcher};

/// Full scan: every match start in the buffer, excluding offsets inside
/// folded regions.
pub fn scan<E: EditorOps>(editor: &E, matcher: &Matcher) -> HashSet<usize> {
    matcher
        .find_starts(editor.text())
        .into_iter()
        .filter(|&offset| !editor.is_folded(offset))
        .collect()
}

/// Incremental narrowing: keep a previous match iff the buffer text at its
/// offset still matches the (grown) query. Only valid for plain-text
/// refinement; pattern results are not comparable this way.
pub fn narrow(text: &str, previous: &HashSet<usize>, query: &str) -> HashSet<usize> {
    previous
        .iter()
        .copied()
        .filter(|&offset| matches_at(text, offset, query))
        .collect()
}

/// Whether any cached match still matches the query at its offset.
pub fn any_match_continues(text: &str, cached: &HashSet<usize>, query: &str) -> bool {
    cached
        .iter()
        .any(|&offset| matches_at(text, offset, query))
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod scanner_tests;
