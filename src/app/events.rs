use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::finder::editor::Tagger;

use super::state::App;

/// Pattern jumped to with Ctrl+W: the first character of every word.
const WORD_START_PATTERN: &str = r"\b\w";

impl App {
    /// Handle one key press
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key, now) {
            return;
        }

        match key.code {
            KeyCode::Esc => self.cancel_or_quit(),
            KeyCode::Backspace => self.shrink_query(now),
            KeyCode::Up => self.pane.scroll.scroll_up(1),
            KeyCode::Down => self.pane.scroll.scroll_down(1),
            KeyCode::PageUp => self.pane.scroll.page_up(),
            KeyCode::PageDown => self.pane.scroll.page_down(),
            KeyCode::Home => self.pane.scroll.jump_to_top(),
            KeyCode::End => self.pane.scroll.jump_to_bottom(),
            KeyCode::Char(c) => self.extend_query(c, now),
            _ => {}
        }
    }

    /// Control-key commands that work regardless of search state
    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            // Exit application
            KeyCode::Char('c') => {
                self.should_quit = true;
                true
            }
            // Jump to word starts
            KeyCode::Char('w') => {
                if let Err(err) =
                    self.session
                        .search_pattern(WORD_START_PATTERN, &self.pane, &mut self.tags)
                {
                    log::warn!("word-start search failed: {err}");
                }
                true
            }
            // Toggle whole-word target highlighting
            KeyCode::Char('t') => {
                self.pane.toggle_target_mode();
                self.refresh_search(now);
                true
            }
            // Fold the cursor line away; folding invalidates the running
            // search, so it ends here.
            KeyCode::Char('k') => {
                let line = self.pane.buffer.line_of(self.cursor);
                let range = self.pane.buffer.visible_byte_range(line, 1);
                self.pane.buffer.add_fold(range);
                self.end_search();
                true
            }
            // Unfold everything
            KeyCode::Char('u') => {
                self.pane.buffer.clear_folds();
                self.end_search();
                true
            }
            _ => false,
        }
    }

    fn extend_query(&mut self, c: char, now: Instant) {
        let mut query = self.session.query().to_string();
        query.push(c);
        self.session.set_query(&query, &self.pane, &mut self.tags, now);
    }

    fn shrink_query(&mut self, now: Instant) {
        let mut query = self.session.query().to_string();
        if query.pop().is_none() {
            return;
        }
        if query.is_empty() {
            self.end_search();
        } else {
            self.session.set_query(&query, &self.pane, &mut self.tags, now);
        }
    }

    /// Re-run the current query, e.g. after the target-mode toggle changed
    /// what a redraw produces.
    fn refresh_search(&mut self, now: Instant) {
        let query = self.session.query().to_string();
        if !query.is_empty() {
            self.session.set_query(&query, &self.pane, &mut self.tags, now);
        }
    }

    fn cancel_or_quit(&mut self) {
        if self.session.query().is_empty() && self.session.results().is_empty() {
            self.should_quit = true;
        } else {
            self.end_search();
        }
    }

    pub(super) fn end_search(&mut self) {
        self.session.discard(&mut self.pane);
        self.tags.reset();
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
