use std::ops::Range;

/// An immutable text buffer with a line index and fold ranges.
///
/// All positions are byte offsets into the text. The line index is built
/// once up front with memchr, so offset/line mapping is a binary search.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    text: String,
    line_starts: Vec<usize>,
    folds: Vec<Range<usize>>,
}

impl TextBuffer {
    pub fn new(text: String) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1));
        Self {
            text,
            line_starts,
            folds: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where `line` starts; the text end for lines past the
    /// last one.
    pub fn line_start(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.text.len())
    }

    /// Line containing `offset` (0-indexed).
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Line and character column of `offset`.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self.line_of(offset);
        let start = self.line_start(line);
        let col = self
            .text
            .get(start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        (line, col)
    }

    /// Content of `line` without its trailing newline.
    pub fn line_text(&self, line: usize) -> &str {
        let start = self.line_start(line);
        let end = self.line_start(line + 1);
        self.text[start..end].trim_end_matches('\n')
    }

    /// Byte range covered by `height` lines starting at `top_line`.
    pub fn visible_byte_range(&self, top_line: usize, height: usize) -> Range<usize> {
        self.line_start(top_line)..self.line_start(top_line.saturating_add(height))
    }

    /// Collapse a region. Offsets inside it become invisible to search.
    pub fn add_fold(&mut self, range: Range<usize>) {
        if !range.is_empty() {
            self.folds.push(range);
        }
    }

    pub fn clear_folds(&mut self) {
        self.folds.clear();
    }

    pub fn folds(&self) -> &[Range<usize>] {
        &self.folds
    }

    pub fn is_folded(&self, offset: usize) -> bool {
        self.folds.iter().any(|fold| fold.contains(&offset))
    }

    /// Whether any part of `line` lies inside a fold.
    pub fn is_line_folded(&self, line: usize) -> bool {
        let start = self.line_start(line);
        let end = self.line_start(line + 1);
        self.folds.iter().any(|fold| fold.start < end && start < fold.end)
    }

    /// Byte range of the word (alphanumeric or underscore run) containing
    /// `offset`. Collapses to an empty range when the offset is not inside
    /// a word or not a character boundary.
    pub fn word_bounds(&self, offset: usize) -> Range<usize> {
        let (Some(head), Some(tail)) = (self.text.get(..offset), self.text.get(offset..)) else {
            return offset..offset;
        };

        let mut start = offset;
        for (i, ch) in head.char_indices().rev() {
            if !is_word_char(ch) {
                break;
            }
            start = i;
        }

        let mut end = offset;
        for (i, ch) in tail.char_indices() {
            if !is_word_char(ch) {
                break;
            }
            end = offset + i + ch.len_utf8();
        }

        start..end
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod text_tests;
