use std::time::Instant;

use crate::app::pane::EditorPane;
use crate::buffer::TextBuffer;
use crate::config::Config;
use crate::finder::editor::Tagger;
use crate::finder::Session;
use crate::tagger::TagEngine;

/// Application state
pub struct App {
    pub pane: EditorPane,
    pub session: Session,
    pub tags: TagEngine,
    /// Caret position (byte offset).
    pub cursor: usize,
    /// Selection anchor when a shift-select jump extended a selection.
    pub selection_anchor: Option<usize>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance over the given buffer text
    pub fn new(text: String, config: &Config) -> Self {
        let buffer = TextBuffer::new(text);
        Self {
            pane: EditorPane::new(buffer, config.ui.target_mode),
            session: Session::with_skim_delay(config.skim_delay()),
            tags: TagEngine::new(),
            cursor: 0,
            selection_anchor: None,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Settle the engine after input: fire the due skim re-search, drain
    /// redraw/handoff effects, then act on any jump the tagger decided.
    pub fn after_input(&mut self, now: Instant) {
        self.session.tick(now, &self.pane, &self.tags);
        self.session.pump(&mut self.pane, &mut self.tags);

        if self.pane.take_tags_dirty() {
            log::trace!("repainting {} tag marker(s)", self.tags.tags().len());
        }

        if let Some(offset) = self.tags.take_pending_jump() {
            self.apply_jump(offset);
        }
    }

    /// Selection range implied by the anchor and caret, if any.
    pub fn selection(&self) -> Option<std::ops::Range<usize>> {
        let anchor = self.selection_anchor?;
        if anchor <= self.cursor {
            Some(anchor..self.cursor)
        } else {
            Some(self.cursor..anchor)
        }
    }

    fn apply_jump(&mut self, offset: usize) {
        if self.session.is_shift_select_enabled() {
            // Extend a selection from the old caret instead of moving it.
            self.selection_anchor = Some(self.selection_anchor.unwrap_or(self.cursor));
        } else {
            self.selection_anchor = None;
        }
        self.cursor = offset;

        let line = self.pane.buffer.line_of(offset);
        self.pane.scroll.ensure_line_visible(line);

        // The search is over once the jump lands.
        self.session.discard(&mut self.pane);
        self.tags.reset();
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
