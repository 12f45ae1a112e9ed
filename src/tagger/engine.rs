use std::collections::HashSet;

use crate::finder::editor::Tagger;
use crate::finder::spec::SearchSpec;

const TAG_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// One labeled jump candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMark {
    pub label: char,
    pub offset: usize,
}

/// Single-letter tag assignment over the match set.
///
/// Labels are handed out in offset order from a fixed alphabet; matches
/// beyond the alphabet stay unlabeled and count as discardable. A search
/// string ending in an assigned label selects that candidate once it no
/// longer continues any real text.
#[derive(Debug, Default)]
pub struct TagEngine {
    tags: Vec<TagMark>,
    pending_jump: Option<usize>,
}

impl TagEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[TagMark] {
        &self.tags
    }

    /// The jump decided by the last handoff, if any. Consuming it arms
    /// the caller to move the caret.
    pub fn take_pending_jump(&mut self) -> Option<usize> {
        self.pending_jump.take()
    }

    fn tag_selected_by(&self, string_to_find: &str) -> Option<usize> {
        if string_to_find.chars().count() < 2 {
            return None;
        }
        let label = string_to_find.chars().next_back()?;
        self.tags
            .iter()
            .find(|tag| tag.label == label)
            .map(|tag| tag.offset)
    }
}

impl Tagger for TagEngine {
    fn mark_or_jump(&mut self, spec: &SearchSpec, results: &HashSet<usize>) {
        // A trailing label selects its candidate, but only when the scanner
        // found nothing: a character that also continues real text is
        // treated as text, not as a selection.
        if !spec.is_regex() && results.is_empty() {
            if let Some(offset) = self.tag_selected_by(spec.string_to_find()) {
                self.pending_jump = Some(offset);
                self.tags.clear();
                return;
            }
        }

        // One candidate left: jump without making the user pick a tag.
        if results.len() == 1 {
            self.pending_jump = results.iter().next().copied();
            self.tags.clear();
            return;
        }

        let mut offsets: Vec<usize> = results.iter().copied().collect();
        offsets.sort_unstable();
        self.tags = offsets
            .into_iter()
            .zip(TAG_ALPHABET.chars())
            .map(|(offset, label)| TagMark { label, offset })
            .collect();
    }

    fn reset(&mut self) {
        self.tags.clear();
        self.pending_jump = None;
    }

    fn has_tag_suffix(&self, query: &str) -> bool {
        query.chars().count() >= 2
            && query
                .chars()
                .next_back()
                .is_some_and(|last| self.tags.iter().any(|tag| tag.label == last))
    }

    fn can_discard(&self, offset: usize) -> bool {
        !self.tags.iter().any(|tag| tag.offset == offset)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
