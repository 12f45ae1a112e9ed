//! Tests for app/events
//!
//! Drive the app through key presses the way the run loop does.

use std::collections::HashSet;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::finder::editor::HighlightLayer;
use crate::test_utils::test_helpers::{key, key_with_mods, press, test_app, type_chars, TEST_TEXT};

fn ctrl(c: char) -> crossterm::event::KeyEvent {
    key_with_mods(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_typing_builds_query_and_marks_matches() {
    let mut app = test_app(TEST_TEXT);
    let now = Instant::now();

    type_chars(&mut app, "a", now);

    assert_eq!(app.session.query(), "a");
    let expected: HashSet<usize> = [5, 9, 20].into_iter().collect();
    assert_eq!(app.session.results(), &expected);
    assert_eq!(app.tags.tags().len(), 3);
}

#[test]
fn test_tag_character_jumps_to_its_candidate() {
    let mut app = test_app(TEST_TEXT);
    let now = Instant::now();

    type_chars(&mut app, "a", now);
    // Labels follow offset order: 'a' -> 5, 'b' -> 9, 'c' -> 20.
    type_chars(&mut app, "b", now);

    assert_eq!(app.cursor, 9);
    // The jump ends the search.
    assert_eq!(app.session.query(), "");
    assert!(app.pane.highlights().is_empty());
}

#[test]
fn test_unique_match_jumps_without_a_tag() {
    let mut app = test_app(TEST_TEXT);
    let now = Instant::now();

    // "c" occurs once, in "cat".
    type_chars(&mut app, "c", now);

    assert_eq!(app.cursor, 4);
    assert!(app.selection_anchor.is_none());
}

#[test]
fn test_uppercase_jump_extends_selection() {
    let mut app = test_app(TEST_TEXT);
    let now = Instant::now();

    type_chars(&mut app, "C", now);

    assert_eq!(app.cursor, 4);
    assert_eq!(app.selection(), Some(0..4));
}

#[test]
fn test_backspace_shrinks_then_ends_search() {
    let mut app = test_app(TEST_TEXT);
    let now = Instant::now();

    type_chars(&mut app, "at", now);
    assert_eq!(app.session.query(), "at");

    press(&mut app, key(KeyCode::Backspace), now);
    assert_eq!(app.session.query(), "a");
    assert_eq!(app.session.results().len(), 3);

    press(&mut app, key(KeyCode::Backspace), now);
    assert_eq!(app.session.query(), "");
    assert!(app.pane.highlights().is_empty());

    // Nothing left to delete.
    press(&mut app, key(KeyCode::Backspace), now);
    assert!(!app.should_quit());
}

#[test]
fn test_esc_cancels_search_then_quits() {
    let mut app = test_app(TEST_TEXT);
    let now = Instant::now();

    type_chars(&mut app, "at", now);
    press(&mut app, key(KeyCode::Esc), now);

    assert_eq!(app.session.query(), "");
    assert!(app.pane.highlights().is_empty());
    assert!(!app.should_quit());

    press(&mut app, key(KeyCode::Esc), now);
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_always_quits() {
    let mut app = test_app(TEST_TEXT);
    let now = Instant::now();

    type_chars(&mut app, "at", now);
    press(&mut app, ctrl('c'), now);
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_w_marks_word_starts() {
    let mut app = test_app("foo bar\nbaz");
    let now = Instant::now();

    press(&mut app, ctrl('w'), now);

    let expected: HashSet<usize> = [0, 4, 8].into_iter().collect();
    assert_eq!(app.session.results(), &expected);
    assert!(app.session.spec().is_regex());
    // Pattern spans are one character wide.
    for highlight in app.pane.highlights() {
        assert_eq!(highlight.range.len(), 1);
    }
}

#[test]
fn test_narrowing_word_starts_by_typing() {
    let mut app = test_app("foo bar\nbaz");
    let now = Instant::now();

    press(&mut app, ctrl('w'), now);
    type_chars(&mut app, "b", now);

    let expected: HashSet<usize> = [4, 8].into_iter().collect();
    assert_eq!(app.session.results(), &expected);
}

#[test]
fn test_ctrl_t_toggles_target_highlighting() {
    let mut app = test_app("abc abc");
    let now = Instant::now();

    type_chars(&mut app, "b", now);
    assert!(app
        .pane
        .highlights()
        .iter()
        .all(|h| h.layer == HighlightLayer::Text));

    press(&mut app, ctrl('t'), now);

    let targets: Vec<_> = app
        .pane
        .highlights()
        .iter()
        .filter(|h| h.layer == HighlightLayer::Target)
        .collect();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].range.len(), 3);
}

#[test]
fn test_folding_cursor_line_ends_search() {
    let mut app = test_app("foo\nbar");
    let now = Instant::now();

    type_chars(&mut app, "o", now);
    assert!(!app.session.results().is_empty());

    press(&mut app, ctrl('k'), now);

    assert!(app.pane.buffer.is_folded(1));
    assert_eq!(app.session.query(), "");

    // With line 0 folded, its matches are invisible to a new search.
    type_chars(&mut app, "o", now);
    assert!(app.session.results().is_empty());

    press(&mut app, ctrl('u'), now);
    assert!(!app.pane.buffer.is_folded(1));
}

#[test]
fn test_scroll_keys() {
    let text = "line\n".repeat(50);
    let mut app = test_app(&text);
    app.pane.scroll.update_bounds(51, 10);
    let now = Instant::now();

    press(&mut app, key(KeyCode::Down), now);
    assert_eq!(app.pane.scroll.offset, 1);
    press(&mut app, key(KeyCode::PageDown), now);
    assert_eq!(app.pane.scroll.offset, 6);
    press(&mut app, key(KeyCode::Up), now);
    assert_eq!(app.pane.scroll.offset, 5);
    press(&mut app, key(KeyCode::End), now);
    assert_eq!(app.pane.scroll.offset, 41);
    press(&mut app, key(KeyCode::Home), now);
    assert_eq!(app.pane.scroll.offset, 0);
}
