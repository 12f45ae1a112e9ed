use std::ops::Range;

use crate::buffer::TextBuffer;
use crate::finder::editor::{EditorOps, HighlightId, HighlightLayer};
use crate::scroll::ScrollState;

/// One decoration on the pane's surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneHighlight {
    pub id: HighlightId,
    pub range: Range<usize>,
    pub layer: HighlightLayer,
}

/// The buffer pane: text, scroll position, and the decoration surface the
/// search session draws into.
pub struct EditorPane {
    pub buffer: TextBuffer,
    pub scroll: ScrollState,
    highlights: Vec<PaneHighlight>,
    next_highlight_id: u64,
    target_mode: bool,
    tags_dirty: bool,
}

impl EditorPane {
    pub fn new(buffer: TextBuffer, target_mode: bool) -> Self {
        Self {
            buffer,
            scroll: ScrollState::new(),
            highlights: Vec::new(),
            next_highlight_id: 0,
            target_mode,
            tags_dirty: false,
        }
    }

    /// Byte range currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        self.buffer
            .visible_byte_range(self.scroll.offset, self.scroll.viewport_height)
    }

    pub fn highlights(&self) -> &[PaneHighlight] {
        &self.highlights
    }

    /// Highest-priority layer decorating `offset`, if any.
    pub fn layer_at(&self, offset: usize) -> Option<HighlightLayer> {
        self.highlights
            .iter()
            .filter(|h| h.range.contains(&offset))
            .map(|h| h.layer)
            .max_by_key(|layer| layer.priority())
    }

    pub fn toggle_target_mode(&mut self) {
        self.target_mode = !self.target_mode;
    }

    /// Whether tag markers changed since the last take. Cleared on read.
    pub fn take_tags_dirty(&mut self) -> bool {
        std::mem::take(&mut self.tags_dirty)
    }
}

impl EditorOps for EditorPane {
    fn text(&self) -> &str {
        self.buffer.text()
    }

    fn is_folded(&self, offset: usize) -> bool {
        self.buffer.is_folded(offset)
    }

    fn word_bounds(&self, offset: usize) -> Range<usize> {
        self.buffer.word_bounds(offset)
    }

    fn is_visible(&self, offset: usize) -> bool {
        self.visible_range().contains(&offset)
    }

    fn target_mode(&self) -> bool {
        self.target_mode
    }

    fn add_highlight(&mut self, range: Range<usize>, layer: HighlightLayer) -> HighlightId {
        let id = HighlightId(self.next_highlight_id);
        self.next_highlight_id += 1;
        self.highlights.push(PaneHighlight { id, range, layer });
        id
    }

    fn remove_highlight(&mut self, id: HighlightId) {
        self.highlights.retain(|h| h.id != id);
    }

    fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    fn repaint_tag_markers(&mut self) {
        self.tags_dirty = true;
    }
}

#[cfg(test)]
#[path = "pane_tests.rs"]
mod pane_tests;
