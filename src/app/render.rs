use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::finder::editor::{EditorOps, HighlightLayer};

use super::state::App;

impl App {
    /// Render the UI: buffer pane on top, query bar below
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());

        self.render_buffer_pane(frame, layout[0]);
        self.render_query_bar(frame, layout[1]);
    }

    fn render_buffer_pane(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" beacon ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);

        // The viewport feeds back into the engine's visibility checks, so
        // keep it current with the terminal size.
        self.pane
            .scroll
            .update_bounds(self.pane.buffer.line_count(), inner.height as usize);

        let top = self.pane.scroll.offset;
        let bottom = (top + inner.height as usize).min(self.pane.buffer.line_count());
        let lines: Vec<Line> = (top..bottom)
            .map(|line| self.buffer_line(line, inner.width as usize))
            .collect();

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_query_bar(&self, frame: &mut Frame, area: Rect) {
        let (line, col) = self.pane.buffer.line_col(self.cursor);
        let match_count = format!("{} · {}:{}", self.match_count_display(), line + 1, col + 1);
        let match_count_style = if self.session.results().is_empty()
            && !self.session.query().is_empty()
        {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut title = String::from(" Jump: ");
        if self.pane.target_mode() {
            title.push_str("[target] ");
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_top(
                Line::from(Span::styled(format!(" {match_count} "), match_count_style))
                    .alignment(Alignment::Right),
            )
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(self.query_bar_line()), inner);
    }

    /// Match counter for the query bar title.
    pub(super) fn match_count_display(&self) -> String {
        let count = self.session.results().len();
        if count == 1 {
            "1 match".to_string()
        } else {
            format!("{count} matches")
        }
    }

    pub(super) fn query_bar_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("/", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.session.query().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ];
        if self.session.is_skim() {
            spans.push(Span::styled(
                "  skimming…",
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }

    /// One buffer line styled with highlights, tag labels, selection, and
    /// the caret, clipped to `max_width` display columns.
    pub(super) fn buffer_line(&self, line: usize, max_width: usize) -> Line<'static> {
        if self.pane.buffer.is_line_folded(line) {
            return Line::from(Span::styled("⋯", Style::default().fg(Color::DarkGray)));
        }

        let start = self.pane.buffer.line_start(line);
        let text = self.pane.buffer.line_text(line);

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();
        let mut run_style = Style::default();
        let mut used_width = 0;

        for (i, ch) in text.char_indices() {
            let width = ch.width().unwrap_or(0);
            if used_width + width > max_width {
                break;
            }
            used_width += width;

            let (cell_char, style) = self.cell(start + i, ch);
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push(cell_char);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }

        Line::from(spans)
    }

    /// Character and style for one buffer position. Tag labels replace the
    /// underlying character.
    fn cell(&self, offset: usize, ch: char) -> (char, Style) {
        if let Some(tag) = self.tags.tags().iter().find(|t| t.offset == offset) {
            let style = Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD);
            return (tag.label, style);
        }

        let mut style = match self.pane.layer_at(offset) {
            Some(HighlightLayer::Target) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::UNDERLINED),
            Some(HighlightLayer::Text) => Style::default().fg(Color::Black).bg(Color::Yellow),
            None => Style::default(),
        };

        if self
            .selection()
            .is_some_and(|selection| selection.contains(&offset))
            || offset == self.cursor
        {
            style = style.add_modifier(Modifier::REVERSED);
        }

        (ch, style)
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
