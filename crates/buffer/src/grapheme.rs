// Chunk: docs/chunks/grapheme_cluster_awareness - Grapheme cluster boundary helpers

//! Grapheme cluster boundary detection over UTF-8 text.
//!
//! A grapheme cluster is what users perceive as a single "character":
//!
//! - ZWJ emoji sequences: 👨‍👩‍👧‍👦 (4 codepoints + 3 ZWJ, 25 bytes)
//! - Combining character sequences: é (e + combining acute, 3 bytes)
//! - Regional indicator pairs: 🇺🇸 (2 codepoints, 8 bytes)
//! - Hangul jamo sequences
//!
//! The buffer steps by Unicode scalar value; these helpers let callers step
//! by cluster instead. Offsets are byte offsets into `text` and must sit on
//! character boundaries.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the byte offset of the grapheme boundary immediately before
/// `offset`.
///
/// If `offset` is 0, returns 0. If `offset` is in the middle of a grapheme,
/// returns the start of that grapheme.
pub fn grapheme_boundary_left(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    if offset == 0 {
        return 0;
    }

    let bytes = text.as_bytes();
    // Fast path: an ASCII byte before the offset that is not preceded by a
    // carriage return ("\r\n" is one cluster) is a grapheme of its own.
    let prev = bytes[offset - 1];
    let crlf = prev == b'\n' && offset >= 2 && bytes[offset - 2] == b'\r';
    if prev.is_ascii() && !crlf {
        return offset - 1;
    }

    text.grapheme_indices(true)
        .map(|(start, _)| start)
        .take_while(|&start| start < offset)
        .last()
        .unwrap_or(0)
}

/// Returns the byte offset of the grapheme boundary immediately after
/// `offset`.
///
/// If `offset` is in the middle of a grapheme, returns the end of that
/// grapheme. At or past the end, returns `text.len()`.
pub fn grapheme_boundary_right(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }

    let bytes = text.as_bytes();
    // Fast path: two consecutive ASCII bytes (other than "\r\n") end a
    // single-byte grapheme.
    let current = bytes[offset];
    if current.is_ascii() {
        match bytes.get(offset + 1) {
            None => return offset + 1,
            Some(&next) if next.is_ascii() && !(current == b'\r' && next == b'\n') => {
                return offset + 1
            }
            _ => {}
        }
    }

    text.grapheme_indices(true)
        .map(|(start, g)| start + g.len())
        .find(|&end| end > offset)
        .unwrap_or(text.len())
}

/// Number of bytes in the grapheme cluster ending at `offset`.
pub fn grapheme_len_before(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    offset - grapheme_boundary_left(text, offset)
}

/// Number of bytes in the grapheme cluster starting at `offset`.
pub fn grapheme_len_at(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return 0;
    }
    grapheme_boundary_right(text, offset) - offset
}
