/// Lines kept visible above/below the cursor when scrolling to it.
const SCROLLOFF: usize = 2;

/// Vertical scroll position of the buffer pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-clamp against the buffer's line count and the pane height.
    /// Called every frame before rendering, since the terminal can resize.
    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: usize) {
        self.viewport_height = viewport_height;
        self.max_offset = content_lines.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height / 2);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height / 2);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Scroll the minimum amount that brings `line` into view with a small
    /// margin.
    pub fn ensure_line_visible(&mut self, line: usize) {
        if self.viewport_height == 0 {
            return;
        }
        let scrolloff = SCROLLOFF.min(self.viewport_height / 2);

        let visible_start = self.offset;
        let visible_end = self.offset + self.viewport_height;

        if line < visible_start + scrolloff {
            self.offset = line.saturating_sub(scrolloff);
        } else if line + scrolloff + 1 > visible_end {
            self.offset = (line + scrolloff + 1 - self.viewport_height).min(self.max_offset);
        }
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
