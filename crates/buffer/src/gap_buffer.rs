// Chunk: docs/chunks/gap_buffer_storage - UTF-8 gap buffer with a relocatable gap

//! Gap buffer implementation for efficient text editing.
//!
//! A gap buffer is a byte array with a movable gap at the edit point.
//! Insertions and deletions at the gap are O(1); moving the gap is
//! O(gap_distance) but amortizes well for typical editing patterns
//! (locality of edits).
//!
//! All positions are *logical* byte offsets into the gap-free text. The
//! bytes are UTF-8; callers keep offsets on character boundaries.

/// Default number of spare bytes left in the gap after a reallocation.
pub const DEFAULT_PREFERRED_GAP: usize = 1024;

/// A gap buffer holding UTF-8 encoded text.
///
/// ```text
///  [ text-before-gap | gap (unused) | text-after-gap ]
///    0..gap_start      gap_start..gap_end  gap_end..data.len()
/// ```
#[derive(Debug, Clone)]
pub struct GapBuffer {
    /// The underlying storage. Contains [pre-gap content | gap | post-gap content].
    data: Vec<u8>,
    /// Index where the gap starts (first unused byte).
    gap_start: usize,
    /// Index where the gap ends (first used byte after gap).
    gap_end: usize,
    /// Spare room added on top of the requested size when growing.
    preferred_gap: usize,
}

impl GapBuffer {
    /// Creates an empty gap buffer whose initial gap holds `requested_size`
    /// plus `preferred_gap` bytes.
    pub fn new(requested_size: usize, preferred_gap: usize) -> Self {
        let capacity = requested_size + preferred_gap;
        Self {
            data: vec![0; capacity],
            gap_start: 0,
            gap_end: capacity,
            preferred_gap,
        }
    }

    /// Creates a gap buffer initialized with the given text, gap at the end.
    pub fn from_str(text: &str, preferred_gap: usize) -> Self {
        let len = text.len();
        let capacity = len + preferred_gap;

        let mut data = Vec::with_capacity(capacity);
        data.extend_from_slice(text.as_bytes());
        data.resize(capacity, 0);

        Self {
            data,
            gap_start: len,
            gap_end: capacity,
            preferred_gap,
        }
    }

    /// Returns the logical length of the buffer (excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current gap size.
    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Returns the current gap position in logical coordinates.
    #[allow(dead_code)]
    pub fn gap_position(&self) -> usize {
        self.gap_start
    }

    /// Returns the size of the backing store.
    #[allow(dead_code)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn preferred_gap(&self) -> usize {
        self.preferred_gap
    }

    /// Translates a logical offset into an index of the backing store.
    ///
    /// Offsets at or past the gap start are pushed over the gap.
    pub fn physical(&self, pos: usize) -> usize {
        if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        }
    }

    /// Returns the contiguous physical slices covering the logical range
    /// `[start, end)`. The second slice is empty unless the range straddles
    /// the gap.
    pub fn segments(&self, start: usize, end: usize) -> (&[u8], &[u8]) {
        debug_assert!(start <= end && end <= self.len());
        let gap = self.gap_len();
        if end <= self.gap_start {
            (&self.data[start..end], &[])
        } else if start >= self.gap_start {
            (&self.data[start + gap..end + gap], &[])
        } else {
            (
                &self.data[start..self.gap_start],
                &self.data[self.gap_end..end + gap],
            )
        }
    }

    /// Moves the gap to the specified logical position.
    ///
    /// Only the bytes between the old and new gap position are copied.
    pub fn move_gap_to(&mut self, pos: usize) {
        debug_assert!(pos <= self.len());

        if pos < self.gap_start {
            // Move gap left: shift content from [pos..gap_start] to [gap_end - shift..gap_end]
            let shift = self.gap_start - pos;
            self.data
                .copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            // Move gap right: shift content from [gap_end..gap_end + shift] to [gap_start..]
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Replaces the backing store with one that has a gap of `new_gap_len`
    /// bytes starting at `new_gap_start`, preserving the content.
    fn reallocate_with_gap(&mut self, new_gap_start: usize, new_gap_len: usize) {
        let len = self.len();
        let new_gap_end = new_gap_start + new_gap_len;
        let mut data = vec![0; len + new_gap_len];

        self.copy_into(0, new_gap_start, &mut data[..new_gap_start]);
        self.copy_into(new_gap_start, len, &mut data[new_gap_end..]);

        tracing::trace!(
            old_capacity = self.data.len(),
            new_capacity = data.len(),
            gap_start = new_gap_start,
            "gap buffer reallocated"
        );

        self.data = data;
        self.gap_start = new_gap_start;
        self.gap_end = new_gap_end;
    }

    /// Copies the logical range `[start, end)` into `out`, which must have
    /// exactly `end - start` bytes.
    fn copy_into(&self, start: usize, end: usize, out: &mut [u8]) {
        let (first, second) = self.segments(start, end);
        out[..first.len()].copy_from_slice(first);
        out[first.len()..].copy_from_slice(second);
    }

    /// Inserts `bytes` at logical position `pos`.
    ///
    /// Grows the storage when the gap cannot absorb the insertion; the new
    /// storage keeps `preferred_gap` spare bytes after the inserted text.
    pub fn insert(&mut self, pos: usize, bytes: &[u8]) {
        debug_assert!(pos <= self.len());
        if bytes.is_empty() {
            return;
        }

        if bytes.len() > self.gap_len() {
            self.reallocate_with_gap(pos, bytes.len() + self.preferred_gap);
        } else if pos != self.gap_start {
            self.move_gap_to(pos);
        }

        let end = self.gap_start + bytes.len();
        self.data[self.gap_start..end].copy_from_slice(bytes);
        self.gap_start = end;
    }

    /// Removes the logical range `[start, end)`.
    ///
    /// The gap is only moved when it does not already touch the range; it
    /// is then widened to swallow the removed bytes.
    pub fn remove(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.len());
        if start == end {
            return;
        }

        if start > self.gap_start {
            self.move_gap_to(start);
        } else if end < self.gap_start {
            self.move_gap_to(end);
        }

        // start <= gap_start <= end from here on
        self.gap_end += end - self.gap_start;
        self.gap_start = start;
    }

    /// Discards all content and stores `text` with the gap after it.
    pub fn reset(&mut self, text: &str) {
        *self = Self::from_str(text, self.preferred_gap);
    }

    /// Returns the raw byte at the given logical position.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    pub fn byte_at(&self, pos: usize) -> u8 {
        assert!(
            pos < self.len(),
            "byte_at: position {pos} out of range (len {})",
            self.len()
        );
        self.data[self.physical(pos)]
    }

    /// Decodes the character starting at the given logical position.
    ///
    /// Returns `None` past the end, or when `pos` is not the start of a
    /// complete UTF-8 sequence.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let char_len = utf8_char_len(self.byte_at(pos));
        if pos + char_len > self.len() {
            return None;
        }
        let mut tmp = [0u8; 4];
        self.copy_into(pos, pos + char_len, &mut tmp[..char_len]);
        std::str::from_utf8(&tmp[..char_len])
            .ok()
            .and_then(|s| s.chars().next())
    }

    /// Returns true if `pos` is a valid character boundary (including the end).
    pub fn is_char_boundary(&self, pos: usize) -> bool {
        if pos == self.len() {
            return true;
        }
        pos < self.len() && !is_continuation_byte(self.byte_at(pos))
    }

    /// Returns the bytes of a logical range.
    pub fn bytes(&self, start: usize, end: usize) -> Vec<u8> {
        let mut out = vec![0; end - start];
        self.copy_into(start, end, &mut out);
        out
    }

    /// Returns the content of a range as a String.
    ///
    /// A range that splits a character is decoded lossily.
    pub fn slice(&self, start: usize, end: usize) -> String {
        match String::from_utf8(self.bytes(start, end)) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new(0, DEFAULT_PREFERRED_GAP)
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.slice(0, self.len()))
    }
}

/// Length of the UTF-8 sequence introduced by `first`.
///
/// Continuation and invalid lead bytes count as 1 so that scanning always
/// makes progress.
pub fn utf8_char_len(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

pub fn is_continuation_byte(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
