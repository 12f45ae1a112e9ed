//! Two-layer highlight bookkeeping
//!
//! Owns every decoration on the surface: a *text* record per match and, in
//! target mode, a *target* record over the enclosing word. Tracks which
//! text records were visible at creation time (the viewport subset) so the
//! tag handoff can prune the ones the tagger discards.

use std::collections::HashSet;
use std::mem;

use crate::finder::editor::{EditorOps, HighlightId, HighlightLayer, Tagger};
use crate::finder::spec::SearchSpec;

/// A text highlight that was inside the viewport when it was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMark {
    pub id: HighlightId,
    pub start: usize,
}

/// Exclusive owner of the decoration surface. No other component adds or
/// removes decorations.
#[derive(Debug, Default)]
pub struct HighlightManager {
    in_view: Vec<ViewMark>,
}

impl HighlightManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the surface's decorations and rebuild both layers from the
    /// match set. The viewport subset is replaced wholesale with a fresh
    /// snapshot of the visible text records.
    pub fn redraw<E: EditorOps>(
        &mut self,
        results: &HashSet<usize>,
        spec: &SearchSpec,
        query: &str,
        editor: &mut E,
    ) {
        editor.clear_highlights();

        let mut in_view = Vec::new();
        for &start in results {
            if editor.target_mode() {
                add_target_mark(editor, start);
            }
            let end = text_span_end(editor.text(), start, spec, query);
            let id = editor.add_highlight(start..end, HighlightLayer::Text);
            if editor.is_visible(start) {
                in_view.push(ViewMark { id, start });
            }
        }

        self.in_view = in_view;
    }

    /// Narrow the viewport subset to matches the tagger still considers
    /// jump candidates, removing the decorations of the discarded ones.
    /// Produces a new subset rather than mutating entries in place.
    pub fn prune_discarded<E: EditorOps, T: Tagger>(&mut self, tagger: &T, editor: &mut E) {
        let kept = mem::take(&mut self.in_view)
            .into_iter()
            .filter(|mark| {
                if tagger.can_discard(mark.start) {
                    editor.remove_highlight(mark.id);
                    false
                } else {
                    true
                }
            })
            .collect();
        self.in_view = kept;
    }

    /// Visible text highlights from the last redraw, minus pruned ones.
    pub fn in_view(&self) -> &[ViewMark] {
        &self.in_view
    }

    /// Forget all owned records. The caller clears the surface.
    pub fn clear(&mut self) {
        self.in_view.clear();
    }
}

/// Target records only cover words; a match on punctuation gets none even
/// in target mode.
fn add_target_mark<E: EditorOps>(editor: &mut E, start: usize) {
    let starts_in_word = editor
        .text()
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_alphanumeric);
    if !starts_in_word {
        return;
    }
    let word = editor.word_bounds(start);
    editor.add_highlight(word, HighlightLayer::Target);
}

/// Text spans cover one character for pattern matches (pattern match
/// lengths are unrelated to the pattern string's length) and the query's
/// character length otherwise, clamped to the buffer end.
fn text_span_end(text: &str, start: usize, spec: &SearchSpec, query: &str) -> usize {
    let span_chars = if spec.is_regex() {
        1
    } else {
        query.chars().count()
    };
    advance_chars(text, start, span_chars)
}

/// Byte offset `n` characters past `start`, clamped to the text end.
fn advance_chars(text: &str, start: usize, n: usize) -> usize {
    match text.get(start..) {
        Some(rest) => rest
            .char_indices()
            .nth(n)
            .map_or(text.len(), |(i, _)| start + i),
        None => text.len(),
    }
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
