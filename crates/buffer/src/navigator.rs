// Chunk: docs/chunks/navigation_queries - Read-only stepping, line, word, column and search queries

//! Stateless queries over gap buffer content.
//!
//! Nothing here mutates the buffer. Byte-level scans (newline search, line
//! counting) run on the one or two contiguous slices on either side of the
//! gap, so they never translate offsets byte by byte.

use memchr::{memchr, memchr_iter, memrchr, memrchr_iter};
use unicode_width::UnicodeWidthChar;

use crate::gap_buffer::{is_continuation_byte, utf8_char_len, GapBuffer};

/// Maximum number of display columns a single character can expand to.
pub const MAX_EXP_CHAR_LEN: usize = 20;

// ==================== UTF-8 stepping ====================

/// Iterates `(offset, char)` pairs forward from a character boundary.
pub(crate) struct CharIndices<'a> {
    buf: &'a GapBuffer,
    pos: usize,
}

impl<'a> CharIndices<'a> {
    pub fn new(buf: &'a GapBuffer, pos: usize) -> Self {
        Self { buf, pos }
    }
}

impl Iterator for CharIndices<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.buf.len() {
            return None;
        }
        let at = self.pos;
        let ch = self
            .buf
            .char_at(at)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.pos = next_char_clipped(self.buf, at);
        Some((at, ch))
    }
}

/// Offset of the character after the one at `pos`, or `None` at the end.
pub(crate) fn next_char(buf: &GapBuffer, pos: usize) -> Option<usize> {
    let len = buf.len();
    if pos >= len {
        return None;
    }
    Some((pos + utf8_char_len(buf.byte_at(pos))).min(len))
}

pub(crate) fn next_char_clipped(buf: &GapBuffer, pos: usize) -> usize {
    next_char(buf, pos).unwrap_or(buf.len())
}

/// Offset of the character before `pos`, or `None` at the start.
pub(crate) fn prev_char(buf: &GapBuffer, pos: usize) -> Option<usize> {
    let mut pos = pos.min(buf.len());
    if pos == 0 {
        return None;
    }
    pos -= 1;
    while pos > 0 && is_continuation_byte(buf.byte_at(pos)) {
        pos -= 1;
    }
    Some(pos)
}

pub(crate) fn prev_char_clipped(buf: &GapBuffer, pos: usize) -> usize {
    prev_char(buf, pos).unwrap_or(0)
}

/// Moves `pos` back to the start of the character it points into.
pub(crate) fn utf8_align(buf: &GapBuffer, pos: usize) -> usize {
    let len = buf.len();
    let mut pos = pos.min(len);
    while pos > 0 && pos < len && is_continuation_byte(buf.byte_at(pos)) {
        pos -= 1;
    }
    pos
}

// ==================== Single-character search ====================

/// Finds the first `ch` at or after `start`.
pub(crate) fn findchar_forward(buf: &GapBuffer, start: usize, ch: char) -> Option<usize> {
    let len = buf.len();
    let start = start.min(len);
    if ch.is_ascii() {
        let byte = ch as u8;
        let (first, second) = buf.segments(start, len);
        return memchr(byte, first)
            .map(|i| start + i)
            .or_else(|| memchr(byte, second).map(|i| start + first.len() + i));
    }
    CharIndices::new(buf, start)
        .find(|&(_, c)| c == ch)
        .map(|(pos, _)| pos)
}

/// Finds the last `ch` strictly before `start`.
pub(crate) fn findchar_backward(buf: &GapBuffer, start: usize, ch: char) -> Option<usize> {
    let start = start.min(buf.len());
    if ch.is_ascii() {
        let byte = ch as u8;
        let (first, second) = buf.segments(0, start);
        return memrchr(byte, second)
            .map(|i| first.len() + i)
            .or_else(|| memrchr(byte, first));
    }
    let mut pos = start;
    while let Some(prev) = prev_char(buf, pos) {
        if buf.char_at(prev) == Some(ch) {
            return Some(prev);
        }
        pos = prev;
    }
    None
}

// ==================== Lines ====================

pub(crate) fn line_start(buf: &GapBuffer, pos: usize) -> usize {
    findchar_backward(buf, pos, '\n').map_or(0, |nl| nl + 1)
}

pub(crate) fn line_end(buf: &GapBuffer, pos: usize) -> usize {
    findchar_forward(buf, pos, '\n').unwrap_or(buf.len())
}

/// Counts newline bytes in `[start, end)`.
pub(crate) fn count_lines(buf: &GapBuffer, start: usize, end: usize) -> usize {
    let (first, second) = buf.segments(start, end);
    bytecount::count(first, b'\n') + bytecount::count(second, b'\n')
}

/// Returns the start of the line `n_lines` below the line containing
/// `start`, or the buffer end if there are not that many lines.
pub(crate) fn skip_lines(buf: &GapBuffer, start: usize, n_lines: usize) -> usize {
    if n_lines == 0 {
        return start;
    }
    let len = buf.len();
    let start = start.min(len);
    let (first, second) = buf.segments(start, len);
    let mut newlines = memchr_iter(b'\n', first)
        .map(|i| start + i)
        .chain(memchr_iter(b'\n', second).map(|i| start + first.len() + i));
    newlines.nth(n_lines - 1).map_or(len, |nl| nl + 1)
}

/// Returns the start of the line `n_lines` above the line containing
/// `start`. A newline right at `start` belongs to the line it ends, so
/// `n_lines == 0` finds the beginning of the current line.
pub(crate) fn rewind_lines(buf: &GapBuffer, start: usize, n_lines: usize) -> usize {
    let (first, second) = buf.segments(0, start.min(buf.len()));
    let mut newlines = memrchr_iter(b'\n', second)
        .map(|i| first.len() + i)
        .chain(memrchr_iter(b'\n', first));
    newlines.nth(n_lines).map_or(0, |nl| nl + 1)
}

/// Estimates how many line breaks `[start, end)` needs when lines wrap
/// after `line_len` displayed characters. A `line_len` of 0 disables
/// wrapping.
pub(crate) fn estimate_lines(buf: &GapBuffer, start: usize, end: usize, line_len: usize) -> usize {
    let mut lines = 0;
    let mut col = 0;
    for (_, ch) in CharIndices::new(buf, start).take_while(|&(pos, _)| pos < end) {
        if ch == '\n' {
            lines += 1;
            col = 0;
            continue;
        }
        if line_len > 0 && col >= line_len {
            lines += 1;
            col = 0;
        }
        col += 1;
    }
    lines
}

// ==================== Words ====================

/// Word separators: ASCII other than alphanumerics and `_`, no-break
/// space, and CJK punctuation U+3000..U+301F.
pub fn is_word_separator_char(ch: char) -> bool {
    if ch.is_ascii() {
        !(ch.is_ascii_alphanumeric() || ch == '_')
    } else {
        ch == '\u{A0}' || ('\u{3000}'..='\u{301F}').contains(&ch)
    }
}

/// The end of the buffer counts as a separator.
pub(crate) fn is_word_separator(buf: &GapBuffer, pos: usize) -> bool {
    buf.char_at(pos).map_or(true, is_word_separator_char)
}

pub(crate) fn word_start(buf: &GapBuffer, pos: usize) -> usize {
    let mut pos = pos.min(buf.len());
    while let Some(prev) = prev_char(buf, pos) {
        if is_word_separator(buf, prev) {
            break;
        }
        pos = prev;
    }
    pos
}

pub(crate) fn word_end(buf: &GapBuffer, pos: usize) -> usize {
    let mut pos = pos.min(buf.len());
    while pos < buf.len() && !is_word_separator(buf, pos) {
        pos = next_char_clipped(buf, pos);
    }
    pos
}

// ==================== Display columns ====================

/// Number of display columns `ch` occupies when it starts at column
/// `indent`.
///
/// Tabs run to the next multiple of `tab_distance`, ASCII control
/// characters use caret notation (`^A`), other characters use their
/// Unicode width.
pub fn character_width(ch: char, indent: usize, tab_distance: usize) -> usize {
    let width = match ch {
        '\t' => {
            let tab = tab_distance.max(1);
            tab - indent % tab
        }
        c if c.is_ascii_control() => 2,
        c => c.width().unwrap_or(1),
    };
    width.min(MAX_EXP_CHAR_LEN)
}

/// The text displayed for `ch` at column `indent`.
pub fn expand_character(ch: char, indent: usize, tab_distance: usize) -> String {
    match ch {
        '\t' => " ".repeat(character_width(ch, indent, tab_distance)),
        c if c.is_ascii_control() => format!("^{}", char::from(c as u8 ^ 0x40)),
        c => c.to_string(),
    }
}

/// Display columns between `line_start` and `target`.
pub(crate) fn count_displayed_characters(
    buf: &GapBuffer,
    line_start: usize,
    target: usize,
    tab_distance: usize,
) -> usize {
    CharIndices::new(buf, line_start)
        .take_while(|&(pos, _)| pos < target)
        .fold(0, |col, (_, ch)| col + character_width(ch, col, tab_distance))
}

/// Byte offset reached after walking `n_cols` display columns from
/// `line_start`. Stops at the end of the line.
pub(crate) fn skip_displayed_characters(
    buf: &GapBuffer,
    line_start: usize,
    n_cols: usize,
    tab_distance: usize,
) -> usize {
    let mut col = 0;
    for (pos, ch) in CharIndices::new(buf, line_start) {
        if col >= n_cols || ch == '\n' {
            return pos;
        }
        col += character_width(ch, col, tab_distance);
    }
    buf.len()
}

// ==================== Substring search ====================

fn fold(ch: char, match_case: bool) -> char {
    if match_case {
        ch
    } else if ch.is_ascii() {
        ch.to_ascii_lowercase()
    } else {
        ch.to_lowercase().next().unwrap_or(ch)
    }
}

fn matches_at(buf: &GapBuffer, pos: usize, needle: &str, match_case: bool) -> bool {
    let mut hay = CharIndices::new(buf, pos);
    needle.chars().all(|n| {
        matches!(hay.next(), Some((_, h)) if fold(h, match_case) == fold(n, match_case))
    })
}

/// Finds the first match of `needle` starting at or after `start`.
pub(crate) fn search_forward(
    buf: &GapBuffer,
    start: usize,
    needle: &str,
    match_case: bool,
) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let len = buf.len();
    let mut pos = start.min(len);
    // Exact matching can jump straight to candidates for the first character
    let anchor = needle.chars().next().filter(|_| match_case);
    while pos < len {
        if let Some(anchor) = anchor {
            pos = findchar_forward(buf, pos, anchor)?;
        }
        if matches_at(buf, pos, needle, match_case) {
            return Some(pos);
        }
        pos = next_char_clipped(buf, pos);
    }
    None
}

/// Finds the last match of `needle` that starts at or before `start`.
pub(crate) fn search_backward(
    buf: &GapBuffer,
    start: usize,
    needle: &str,
    match_case: bool,
) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let mut pos = utf8_align(buf, start);
    loop {
        if matches_at(buf, pos, needle, match_case) {
            return Some(pos);
        }
        pos = prev_char(buf, pos)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(text: &str) -> GapBuffer {
        let mut buf = GapBuffer::from_str(text, 8);
        // Park the gap mid-text so scans cross it
        buf.move_gap_to(utf8_align(&buf, text.len() / 2));
        buf
    }

    // ==================== Stepping ====================

    #[test]
    fn steps_over_multibyte_characters() {
        let b = buf("a\u{20AC}b");
        assert_eq!(next_char(&b, 1), Some(4));
        assert_eq!(prev_char(&b, 4), Some(1));
        assert_eq!(next_char(&b, 5), None);
        assert_eq!(prev_char(&b, 0), None);
    }

    #[test]
    fn clipped_variants_saturate() {
        let b = buf("ab");
        assert_eq!(next_char_clipped(&b, 2), 2);
        assert_eq!(prev_char_clipped(&b, 0), 0);
    }

    #[test]
    fn align_moves_to_character_start() {
        let b = buf("x\u{1F600}y");
        assert_eq!(utf8_align(&b, 3), 1);
        assert_eq!(utf8_align(&b, 1), 1);
        assert_eq!(utf8_align(&b, 6), 6);
    }

    // ==================== Lines ====================

    #[test]
    fn line_boundaries() {
        let b = buf("abc\ndef\n");
        assert_eq!(line_start(&b, 5), 4);
        assert_eq!(line_start(&b, 4), 4);
        assert_eq!(line_start(&b, 2), 0);
        assert_eq!(line_end(&b, 1), 3);
        assert_eq!(line_end(&b, 3), 3);
        assert_eq!(count_lines(&b, 0, 8), 2);
        assert_eq!(count_lines(&b, 0, 3), 0);
    }

    #[test]
    fn skip_and_rewind_lines() {
        let b = buf("one\ntwo\nthree\nfour");
        assert_eq!(skip_lines(&b, 0, 0), 0);
        assert_eq!(skip_lines(&b, 0, 1), 4);
        assert_eq!(skip_lines(&b, 1, 2), 8);
        assert_eq!(skip_lines(&b, 0, 10), b.len());

        assert_eq!(rewind_lines(&b, 10, 0), 8);
        assert_eq!(rewind_lines(&b, 10, 1), 4);
        assert_eq!(rewind_lines(&b, 8, 0), 8);
        assert_eq!(rewind_lines(&b, 8, 1), 4);
        assert_eq!(rewind_lines(&b, 10, 5), 0);
    }

    #[test]
    fn estimate_lines_wraps_long_lines() {
        let b = buf("abcdefgh\nab");
        assert_eq!(estimate_lines(&b, 0, b.len(), 0), 1);
        assert_eq!(estimate_lines(&b, 0, b.len(), 8), 1);
        assert_eq!(estimate_lines(&b, 0, b.len(), 3), 3);
    }

    // ==================== Words ====================

    #[test]
    fn word_boundaries() {
        let b = buf("foo bar_baz, qux");
        assert_eq!(word_start(&b, 6), 4);
        assert_eq!(word_end(&b, 6), 11);
        assert_eq!(word_start(&b, 0), 0);
        assert_eq!(word_end(&b, 13), 16);
    }

    #[test]
    fn separator_classification() {
        assert!(is_word_separator_char(' '));
        assert!(is_word_separator_char('-'));
        assert!(!is_word_separator_char('_'));
        assert!(!is_word_separator_char('\u{E9}'));
        assert!(is_word_separator_char('\u{A0}'));
        assert!(is_word_separator_char('\u{3001}'));
    }

    // ==================== Display columns ====================

    #[test]
    fn tab_expands_to_next_stop() {
        assert_eq!(character_width('\t', 0, 8), 8);
        assert_eq!(character_width('\t', 3, 8), 5);
        assert_eq!(character_width('\t', 0, 50), MAX_EXP_CHAR_LEN);
        assert_eq!(expand_character('\t', 2, 4), "  ");
    }

    #[test]
    fn control_characters_use_caret_notation() {
        assert_eq!(character_width('\x01', 0, 8), 2);
        assert_eq!(expand_character('\x01', 0, 8), "^A");
        assert_eq!(expand_character('\0', 0, 8), "^@");
        assert_eq!(expand_character('\x7f', 0, 8), "^?");
    }

    #[test]
    fn wide_characters_take_two_columns() {
        assert_eq!(character_width('a', 0, 8), 1);
        assert_eq!(character_width('\u{4E2D}', 0, 8), 2);
    }

    #[test]
    fn displayed_columns_round_trip() {
        let b = buf("a\tb\u{4E2D}c\nxyz");
        assert_eq!(count_displayed_characters(&b, 0, 1, 4), 1);
        assert_eq!(count_displayed_characters(&b, 0, 2, 4), 4);
        assert_eq!(count_displayed_characters(&b, 0, 6, 4), 7);
        assert_eq!(skip_displayed_characters(&b, 0, 4, 4), 2);
        assert_eq!(skip_displayed_characters(&b, 0, 7, 4), 6);
        assert_eq!(skip_displayed_characters(&b, 0, 100, 4), 7);
    }

    // ==================== Search ====================

    #[test]
    fn findchar_both_directions() {
        let b = buf("a\nb\u{20AC}c\n");
        assert_eq!(findchar_forward(&b, 0, '\n'), Some(1));
        assert_eq!(findchar_forward(&b, 2, '\n'), Some(7));
        assert_eq!(findchar_forward(&b, 0, '\u{20AC}'), Some(3));
        assert_eq!(findchar_forward(&b, 0, 'z'), None);
        assert_eq!(findchar_backward(&b, 7, '\n'), Some(1));
        assert_eq!(findchar_backward(&b, 1, '\n'), None);
        assert_eq!(findchar_backward(&b, 8, '\u{20AC}'), Some(3));
    }

    #[test]
    fn search_forward_respects_case() {
        let b = buf("hello world");
        assert_eq!(search_forward(&b, 0, "world", true), Some(6));
        assert_eq!(search_forward(&b, 0, "WORLD", true), None);
        assert_eq!(search_forward(&b, 0, "WORLD", false), Some(6));
        assert_eq!(search_forward(&b, 7, "world", true), None);
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let b = buf("stra\u{DF}e \u{C4}PFEL");
        assert_eq!(search_forward(&b, 0, "\u{E4}pfel", false), Some(8));
        assert_eq!(search_forward(&b, 0, "\u{E4}pfel", true), None);
    }

    #[test]
    fn search_backward_finds_last_match_at_or_before_start() {
        let b = buf("abcabcabc");
        assert_eq!(search_backward(&b, 9, "abc", true), Some(6));
        assert_eq!(search_backward(&b, 5, "abc", true), Some(3));
        assert_eq!(search_backward(&b, 0, "abc", true), Some(0));
        assert_eq!(search_backward(&b, 9, "xyz", true), None);
    }

    #[test]
    fn search_does_not_run_past_end() {
        let b = buf("abc");
        assert_eq!(search_forward(&b, 0, "abcd", true), None);
        assert_eq!(search_backward(&b, 3, "c", true), Some(2));
    }

    #[test]
    fn empty_needle_never_matches() {
        let b = buf("abc");
        for start in 0..=3 {
            assert_eq!(search_forward(&b, start, "", true), None);
            assert_eq!(search_backward(&b, start, "", false), None);
        }
        assert_eq!(search_backward(&buf(""), 0, "", true), None);
    }
}
