// Chunk: docs/chunks/grapheme_cluster_awareness - Grapheme cluster awareness integration tests

//! Integration tests for grapheme-aware stepping and deletion.
//!
//! The buffer itself edits bytes; these tests check that a caller stepping
//! with `next_grapheme`/`prev_grapheme` deletes and moves over whole
//! user-perceived characters.

use gaptext_buffer::{grapheme_boundary_left, grapheme_boundary_right, TextBuffer};

const FAMILY: &str = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";

fn backspace_grapheme(buf: &mut TextBuffer, cursor: usize) -> usize {
    let start = buf.prev_grapheme(cursor);
    buf.remove(start, cursor);
    start
}

fn delete_grapheme_forward(buf: &mut TextBuffer, cursor: usize) {
    let end = buf.next_grapheme(cursor);
    buf.remove(cursor, end);
}

// ==================== Backspace Tests ====================

#[test]
fn test_backspace_deletes_zwj_emoji_entirely() {
    let mut buf = TextBuffer::from_str(&format!("a{FAMILY}b"));
    let cursor = backspace_grapheme(&mut buf, 1 + FAMILY.len());
    assert_eq!(buf.text(), "ab");
    assert_eq!(cursor, 1);
}

#[test]
fn test_backspace_deletes_combining_character_sequence() {
    let mut buf = TextBuffer::from_str("ae\u{0301}b");
    let cursor = backspace_grapheme(&mut buf, 4);
    assert_eq!(buf.text(), "ab");
    assert_eq!(cursor, 1);
}

#[test]
fn test_backspace_deletes_regional_indicator_pair() {
    let mut buf = TextBuffer::from_str("a\u{1F1FA}\u{1F1F8}b");
    let cursor = backspace_grapheme(&mut buf, 9);
    assert_eq!(buf.text(), "ab");
    assert_eq!(cursor, 1);
}

#[test]
fn test_backspace_at_line_start_joins_lines() {
    let mut buf = TextBuffer::from_str("ab\ncd");
    let cursor = backspace_grapheme(&mut buf, 3);
    assert_eq!(buf.text(), "abcd");
    assert_eq!(cursor, 2);
}

#[test]
fn test_backspace_deletes_decomposed_hangul() {
    let mut buf = TextBuffer::from_str("a\u{1112}\u{1161}\u{11AB}b");
    let cursor = backspace_grapheme(&mut buf, 10);
    assert_eq!(buf.text(), "ab");
    assert_eq!(cursor, 1);
}

// ==================== Delete Forward Tests ====================

#[test]
fn test_delete_forward_removes_zwj_emoji_entirely() {
    let mut buf = TextBuffer::from_str(&format!("a{FAMILY}b"));
    delete_grapheme_forward(&mut buf, 1);
    assert_eq!(buf.text(), "ab");
}

#[test]
fn test_delete_forward_removes_combining_sequence() {
    let mut buf = TextBuffer::from_str("ae\u{0301}b");
    delete_grapheme_forward(&mut buf, 1);
    assert_eq!(buf.text(), "ab");
}

#[test]
fn test_delete_forward_at_end_joins_lines() {
    let mut buf = TextBuffer::from_str("ab\ncd");
    delete_grapheme_forward(&mut buf, 2);
    assert_eq!(buf.text(), "abcd");
}

#[test]
fn test_delete_forward_at_buffer_end_is_noop() {
    let mut buf = TextBuffer::from_str("ab");
    delete_grapheme_forward(&mut buf, 2);
    assert_eq!(buf.text(), "ab");
}

// ==================== Movement Tests ====================

#[test]
fn test_move_right_past_regional_indicator() {
    let buf = TextBuffer::from_str("a\u{1F1FA}\u{1F1F8}b");
    assert_eq!(buf.next_grapheme(1), 9);
    assert_eq!(buf.prev_grapheme(9), 1);
}

#[test]
fn test_move_right_ascii_unchanged() {
    let buf = TextBuffer::from_str("abc");
    assert_eq!(buf.next_grapheme(0), 1);
    assert_eq!(buf.prev_grapheme(3), 2);
}

#[test]
fn test_line_break_steps_one_character() {
    let buf = TextBuffer::from_str("a\r\nb");
    assert_eq!(buf.next_grapheme(1), 2);
    assert_eq!(buf.next_grapheme(2), 3);
    assert_eq!(buf.prev_grapheme(3), 2);
}

#[test]
fn test_navigate_through_mixed_content() {
    let text = "hi\u{1F44B}bye\u{0301}";
    let buf = TextBuffer::from_str(text);

    let mut stops = vec![0];
    let mut pos = 0;
    while pos < buf.len() {
        pos = buf.next_grapheme(pos);
        stops.push(pos);
    }
    assert_eq!(stops, vec![0, 1, 2, 6, 7, 8, 11]);

    let mut back = vec![buf.len()];
    let mut pos = buf.len();
    while pos > 0 {
        pos = buf.prev_grapheme(pos);
        back.push(pos);
    }
    back.reverse();
    assert_eq!(back, stops);
}

// ==================== Selection Tests ====================

#[test]
fn test_selecting_one_grapheme_covers_whole_cluster() {
    let mut buf = TextBuffer::from_str(&format!("{FAMILY} family"));
    let end = buf.next_grapheme(0);
    buf.select(0, end);
    assert_eq!(buf.selection_text(), FAMILY);
}

#[test]
fn test_free_functions_match_buffer_methods() {
    let text = format!("x{FAMILY}y");
    let buf = TextBuffer::from_str(&text);
    assert_eq!(grapheme_boundary_right(&text, 1), buf.next_grapheme(1));
    assert_eq!(
        grapheme_boundary_left(&text, 1 + FAMILY.len()),
        buf.prev_grapheme(1 + FAMILY.len())
    );
}
