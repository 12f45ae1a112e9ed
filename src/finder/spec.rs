//! Search specifications and the two-variant matcher behind them

use regex::{Regex, RegexBuilder};

/// What to search for: a literal string or a regular expression.
///
/// Created fresh for every search invocation and never mutated afterwards.
/// A pattern spec additionally signals that prior tag state is invalid; the
/// session resets the tagger before running one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchSpec {
    string_to_find: String,
    is_regex: bool,
}

impl SearchSpec {
    /// Literal (plain-text, case-insensitive) search.
    pub fn literal(string_to_find: &str) -> Self {
        Self {
            string_to_find: string_to_find.to_string(),
            is_regex: false,
        }
    }

    /// Regular-expression search.
    pub fn pattern(pattern: &str) -> Self {
        Self {
            string_to_find: pattern.to_string(),
            is_regex: true,
        }
    }

    pub fn string_to_find(&self) -> &str {
        &self.string_to_find
    }

    pub fn is_regex(&self) -> bool {
        self.is_regex
    }

    /// Compile into a matcher.
    ///
    /// Only the pattern variant can fail; a malformed pattern surfaces to
    /// the caller rather than being swallowed here.
    pub fn compile(&self) -> Result<Matcher, regex::Error> {
        if self.is_regex {
            let regex = RegexBuilder::new(&self.string_to_find)
                .multi_line(true)
                .build()?;
            Ok(Matcher::Pattern(regex))
        } else {
            Ok(Matcher::literal(&self.string_to_find))
        }
    }
}

/// Compiled matching capability. The scanner is oblivious to which engine
/// sits underneath.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Case-insensitive plain-text needle.
    Literal(String),
    /// Multiline-aware regular expression.
    Pattern(Regex),
}

impl Matcher {
    /// Literal matcher; infallible by construction.
    pub fn literal(needle: &str) -> Self {
        Matcher::Literal(needle.to_lowercase())
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Matcher::Pattern(_))
    }

    /// Byte offsets of every match start in `text`, ascending.
    pub fn find_starts(&self, text: &str) -> Vec<usize> {
        match self {
            Matcher::Literal(needle) => literal_starts(text, needle),
            Matcher::Pattern(regex) => regex.find_iter(text).map(|m| m.start()).collect(),
        }
    }
}

/// Case-insensitive comparison of `needle` against the text starting at
/// `offset`. False when the offset is out of range or not a character
/// boundary.
pub(crate) fn matches_at(text: &str, offset: usize, needle: &str) -> bool {
    let Some(rest) = text.get(offset..) else {
        return false;
    };
    let mut haystack = rest.chars().flat_map(char::to_lowercase);
    let mut wanted = needle.chars().flat_map(char::to_lowercase);
    loop {
        match (wanted.next(), haystack.next()) {
            (None, _) => return true,
            (Some(w), Some(h)) if w == h => {}
            _ => return false,
        }
    }
}

/// All match starts of a literal needle.
///
/// ASCII first characters are located with memchr over both case variants;
/// an ASCII byte never occurs inside a multi-byte character, so every
/// candidate is a valid boundary. Non-ASCII first characters fall back to a
/// character walk.
fn literal_starts(text: &str, needle: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let Some(first) = needle.chars().next() else {
        return starts;
    };

    if first.is_ascii() {
        let lower = first.to_ascii_lowercase() as u8;
        let upper = first.to_ascii_uppercase() as u8;
        for pos in memchr::memchr2_iter(lower, upper, text.as_bytes()) {
            if matches_at(text, pos, needle) {
                starts.push(pos);
            }
        }
    } else {
        let folded: Vec<char> = first.to_lowercase().collect();
        for (pos, ch) in text.char_indices() {
            let ch_folded: Vec<char> = ch.to_lowercase().collect();
            if ch_folded == folded && matches_at(text, pos, needle) {
                starts.push(pos);
            }
        }
    }

    starts
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod spec_tests;
