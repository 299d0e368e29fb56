// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! TextBuffer is the main public API for text editing operations.
//!
//! It combines a gap buffer (for efficient byte storage) with three
//! selections, observer lists and an undo history. Every edit funnels
//! through one primitive, which runs in this order:
//!
//! 1. pre-delete observers, while the doomed bytes are still readable
//! 2. the gap buffer edit
//! 3. an update of all three selections
//! 4. the undo journal entry
//! 5. modify observers, with the net delta and a copy of the removed text
//!
//! All offsets are byte offsets into the UTF-8 content and must sit on
//! character boundaries. Offsets that are out of range or split a
//! character are caller bugs and panic.

use std::fmt;
use std::rc::Rc;

use crate::config::BufferConfig;
use crate::file_io::{InputDecoder, Latin1Fallback};
use crate::gap_buffer::GapBuffer;
use crate::grapheme::{grapheme_boundary_left, grapheme_boundary_right};
use crate::navigator;
use crate::notify::{ChangeNotifier, ModifyObserver, PredeleteObserver};
use crate::selection::{Selection, SelectionKind};
use crate::types::ModifyEvent;
use crate::undo::{Journal, UndoAction, UndoEngine};

/// Callback run after a file load had to transcode its input.
pub type TranscodingWarningAction = Box<dyn Fn(&TextBuffer)>;

/// An editable UTF-8 document with selections, observers and undo.
pub struct TextBuffer {
    buffer: GapBuffer,
    /// Indexed by `SelectionKind as usize`.
    selections: [Selection; 3],
    notifier: ChangeNotifier,
    undo: UndoEngine,
    tab_distance: usize,
    pub(crate) input_file_was_transcoded: bool,
    pub(crate) input_decoder: Box<dyn InputDecoder>,
    pub(crate) transcoding_warning_action: Option<TranscodingWarningAction>,
}

impl TextBuffer {
    /// Creates a new empty text buffer with default settings.
    pub fn new() -> Self {
        Self::with_config(BufferConfig::default())
    }

    /// Creates an empty buffer from explicit settings.
    pub fn with_config(config: BufferConfig) -> Self {
        let config = config.validated();
        Self::from_parts(
            GapBuffer::new(config.requested_size, config.preferred_gap_size),
            &config,
        )
    }

    /// Creates a text buffer initialized with the given content.
    ///
    /// The initial content is not recorded in the undo history.
    ///
    /// Note: We don't implement `FromStr` because it requires returning `Result`,
    /// but parsing a string into a TextBuffer cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let config = BufferConfig::default();
        Self::from_parts(
            GapBuffer::from_str(content, config.preferred_gap_size),
            &config,
        )
    }

    fn from_parts(buffer: GapBuffer, config: &BufferConfig) -> Self {
        Self {
            buffer,
            selections: [Selection::default(); 3],
            notifier: ChangeNotifier::default(),
            undo: UndoEngine::new(config.undo_enabled),
            tab_distance: config.tab_distance,
            input_file_was_transcoded: false,
            input_decoder: Box::new(Latin1Fallback),
            transcoding_warning_action: None,
        }
    }

    // ==================== Accessors ====================

    /// Length of the document in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns a copy of the whole document.
    pub fn text(&self) -> String {
        self.buffer.slice(0, self.len())
    }

    /// Returns a copy of `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed, out of range, or splits a character.
    pub fn text_range(&self, start: usize, end: usize) -> String {
        self.check_range("text_range", start, end);
        self.buffer.slice(start, end)
    }

    /// Returns the raw byte at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.buffer.byte_at(pos)
    }

    /// Decodes the character starting at `pos`, or `None` at the end.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.buffer.char_at(pos)
    }

    /// Spare bytes kept after each reallocation.
    pub fn preferred_gap_size(&self) -> usize {
        self.buffer.preferred_gap()
    }

    pub(crate) fn storage(&self) -> &GapBuffer {
        &self.buffer
    }

    // ==================== Validation ====================

    pub(crate) fn check_offset(&self, op: &str, pos: usize) {
        assert!(
            pos <= self.len(),
            "{op}: position {pos} out of range (len {})",
            self.len()
        );
        assert!(
            self.buffer.is_char_boundary(pos),
            "{op}: position {pos} is not on a character boundary"
        );
    }

    pub(crate) fn check_range(&self, op: &str, start: usize, end: usize) {
        assert!(start <= end, "{op}: reversed range {start}..{end}");
        self.check_offset(op, start);
        self.check_offset(op, end);
    }

    /// Verifies that every active selection lies inside the document.
    #[cfg(debug_assertions)]
    fn assert_selections_consistent(&self) {
        for (kind, sel) in SelectionKind::ALL.iter().zip(&self.selections) {
            if let Some((start, end)) = sel.position() {
                debug_assert!(
                    start < end && end <= self.len(),
                    "{kind:?} selection {start}..{end} is out of bounds (len {})",
                    self.len()
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn assert_selections_consistent(&self) {}

    // ==================== Mutations ====================

    /// Inserts `text` at byte offset `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range or splits a character.
    pub fn insert(&mut self, pos: usize, text: &str) {
        self.check_offset("insert", pos);
        self.apply_edit(pos, pos, text, Journal::Edit);
    }

    /// Appends `text` to the end of the document.
    pub fn append(&mut self, text: &str) {
        let end = self.len();
        self.apply_edit(end, end, text, Journal::Edit);
    }

    /// Deletes `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed, out of range, or splits a character.
    pub fn remove(&mut self, start: usize, end: usize) {
        self.check_range("remove", start, end);
        self.apply_edit(start, end, "", Journal::Edit);
    }

    /// Replaces `[start, end)` with `text` as a single edit.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed, out of range, or splits a character.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) {
        self.check_range("replace", start, end);
        self.apply_edit(start, end, text, Journal::Edit);
    }

    /// Inserts a copy of `from[from_start..from_end]` at `to_pos`.
    pub fn copy_from(&mut self, from: &TextBuffer, from_start: usize, from_end: usize, to_pos: usize) {
        let text = from.text_range(from_start, from_end);
        self.insert(to_pos, &text);
    }

    /// Inserts a copy of `[from_start, from_end)` of this buffer at `to_pos`.
    pub fn copy_within(&mut self, from_start: usize, from_end: usize, to_pos: usize) {
        let text = self.text_range(from_start, from_end);
        self.insert(to_pos, &text);
    }

    /// Replaces the whole document and forgets the undo history.
    pub fn set_text(&mut self, text: &str) {
        let old_len = self.len();
        if old_len > 0 {
            self.notifier.call_predelete(self, 0, old_len);
        }
        let deleted = self.buffer.slice(0, old_len);
        self.buffer.reset(text);
        for sel in &mut self.selections {
            sel.update(0, old_len, text.len());
        }
        self.undo.clear();
        tracing::trace!(old_len, new_len = text.len(), "replaced buffer text");

        let deleted_text = (old_len > 0).then_some(deleted.as_str());
        let event = ModifyEvent::edit(0, old_len, text.len(), deleted_text);
        self.notifier.call_modify(self, &event);
        self.assert_selections_consistent();
    }

    /// The edit primitive every mutation goes through.
    fn apply_edit(&mut self, start: usize, end: usize, text: &str, journal: Journal) {
        let n_deleted = end - start;
        let n_inserted = text.len();
        if n_deleted == 0 && n_inserted == 0 {
            return;
        }

        if n_deleted > 0 {
            self.notifier.call_predelete(self, start, n_deleted);
        }

        let deleted = self.buffer.slice(start, end);
        self.buffer.remove(start, end);
        self.buffer.insert(start, text.as_bytes());

        for sel in &mut self.selections {
            sel.update(start, n_deleted, n_inserted);
        }

        self.undo
            .record(journal, UndoAction::reversing(start, deleted.clone(), text));

        let deleted_text = (n_deleted > 0).then_some(deleted.as_str());
        let event = ModifyEvent::edit(start, n_deleted, n_inserted, deleted_text);
        self.notifier.call_modify(self, &event);
        self.assert_selections_consistent();
    }

    // ==================== Selection ====================

    pub fn selection(&self, kind: SelectionKind) -> &Selection {
        &self.selections[kind as usize]
    }

    /// Selects `[start, end)` (in either order) and redisplays the
    /// difference. An empty range leaves the selection inactive.
    ///
    /// # Panics
    ///
    /// Panics if either offset is out of range or splits a character.
    pub fn set_selection(&mut self, kind: SelectionKind, start: usize, end: usize) {
        self.check_offset("select", start);
        self.check_offset("select", end);
        let old = self.selections[kind as usize];
        self.selections[kind as usize].set(start, end);
        self.redisplay_selection(&old, kind);
    }

    /// Deactivates the selection, keeping its stored offsets.
    pub fn clear_selection(&mut self, kind: SelectionKind) {
        let old = self.selections[kind as usize];
        self.selections[kind as usize].set_selected(false);
        self.redisplay_selection(&old, kind);
    }

    /// The selected text, or an empty string when inactive.
    pub fn selection_text_of(&self, kind: SelectionKind) -> String {
        match self.selection(kind).position() {
            Some((start, end)) => self.buffer.slice(start, end),
            None => String::new(),
        }
    }

    /// Deletes the selected text, if any.
    pub fn remove_selection_of(&mut self, kind: SelectionKind) {
        if let Some((start, end)) = self.selection(kind).position() {
            self.remove(start, end);
        }
    }

    /// Replaces the selected text with `text` and deactivates the
    /// selection. Does nothing when the selection is inactive.
    pub fn replace_selection_of(&mut self, kind: SelectionKind, text: &str) {
        let old = self.selections[kind as usize];
        let Some((start, end)) = old.position() else {
            return;
        };
        self.replace(start, end, text);
        self.selections[kind as usize].set_selected(false);
        self.redisplay_selection(&old, kind);
    }

    /// Sends restyle events covering only what changed between `old` and
    /// the current state of the `kind` selection.
    fn redisplay_selection(&self, old: &Selection, kind: SelectionKind) {
        let new = self.selection(kind);
        let (old_start, old_end) = (old.raw_start(), old.raw_end());
        let (new_start, new_end) = (new.raw_start(), new.raw_end());

        match (old.selected(), new.selected()) {
            (false, false) => {}
            (false, true) => self.notify_restyled(new_start, new_end - new_start),
            (true, false) => self.notify_restyled(old_start, old_end - old_start),
            (true, true) if old_end < new_start || new_end < old_start => {
                self.notify_restyled(old_start, old_end - old_start);
                self.notify_restyled(new_start, new_end - new_start);
            }
            (true, true) => {
                // Overlapping: only the moved edges need repainting
                let head = (old_start.min(new_start), old_start.max(new_start));
                let tail = (old_end.min(new_end), old_end.max(new_end));
                for (start, end) in [head, tail] {
                    if start != end {
                        self.notify_restyled(start, end - start);
                    }
                }
            }
        }
    }

    pub fn primary_selection(&self) -> &Selection {
        self.selection(SelectionKind::Primary)
    }

    pub fn secondary_selection(&self) -> &Selection {
        self.selection(SelectionKind::Secondary)
    }

    pub fn highlight_selection(&self) -> &Selection {
        self.selection(SelectionKind::Highlight)
    }

    pub fn select(&mut self, start: usize, end: usize) {
        self.set_selection(SelectionKind::Primary, start, end);
    }

    pub fn selected(&self) -> bool {
        self.primary_selection().selected()
    }

    pub fn unselect(&mut self) {
        self.clear_selection(SelectionKind::Primary);
    }

    pub fn selection_position(&self) -> Option<(usize, usize)> {
        self.primary_selection().position()
    }

    pub fn selection_text(&self) -> String {
        self.selection_text_of(SelectionKind::Primary)
    }

    pub fn remove_selection(&mut self) {
        self.remove_selection_of(SelectionKind::Primary);
    }

    pub fn replace_selection(&mut self, text: &str) {
        self.replace_selection_of(SelectionKind::Primary, text);
    }

    pub fn secondary_select(&mut self, start: usize, end: usize) {
        self.set_selection(SelectionKind::Secondary, start, end);
    }

    pub fn secondary_selected(&self) -> bool {
        self.secondary_selection().selected()
    }

    pub fn secondary_unselect(&mut self) {
        self.clear_selection(SelectionKind::Secondary);
    }

    pub fn secondary_selection_position(&self) -> Option<(usize, usize)> {
        self.secondary_selection().position()
    }

    pub fn secondary_selection_text(&self) -> String {
        self.selection_text_of(SelectionKind::Secondary)
    }

    pub fn remove_secondary_selection(&mut self) {
        self.remove_selection_of(SelectionKind::Secondary);
    }

    pub fn replace_secondary_selection(&mut self, text: &str) {
        self.replace_selection_of(SelectionKind::Secondary, text);
    }

    pub fn highlight(&mut self, start: usize, end: usize) {
        self.set_selection(SelectionKind::Highlight, start, end);
    }

    pub fn highlighted(&self) -> bool {
        self.highlight_selection().selected()
    }

    pub fn unhighlight(&mut self) {
        self.clear_selection(SelectionKind::Highlight);
    }

    pub fn highlight_position(&self) -> Option<(usize, usize)> {
        self.highlight_selection().position()
    }

    pub fn highlight_text(&self) -> String {
        self.selection_text_of(SelectionKind::Highlight)
    }

    // ==================== Observers ====================

    /// Registers an observer that runs after every change. Observers run
    /// in registration order.
    pub fn add_modify_callback(&mut self, observer: Rc<dyn ModifyObserver>) {
        self.notifier.add_modify(observer);
    }

    /// Unregisters `observer`, matched by `Rc` identity. Returns false if
    /// it was not registered.
    pub fn remove_modify_callback(&mut self, observer: &Rc<dyn ModifyObserver>) -> bool {
        self.notifier.remove_modify(observer)
    }

    /// Registers an observer that runs before bytes are removed.
    pub fn add_predelete_callback(&mut self, observer: Rc<dyn PredeleteObserver>) {
        self.notifier.add_predelete(observer);
    }

    pub fn remove_predelete_callback(&mut self, observer: &Rc<dyn PredeleteObserver>) -> bool {
        self.notifier.remove_predelete(observer)
    }

    /// Sends an empty modify event to every observer.
    pub fn call_modify_callbacks(&self) {
        self.notifier.call_modify(self, &ModifyEvent::default());
    }

    /// Sends an empty pre-delete event to every observer.
    pub fn call_predelete_callbacks(&self) {
        self.notifier.call_predelete(self, 0, 0);
    }

    /// Tells observers that the styling of `[pos, pos + n_restyled)` changed.
    pub fn notify_restyled(&self, pos: usize, n_restyled: usize) {
        self.notifier
            .call_modify(self, &ModifyEvent::restyle(pos, n_restyled));
    }

    // ==================== Undo ====================

    /// Reverts the most recent edit. Returns where the cursor belongs
    /// afterwards, or `None` if there is nothing to undo or undo is off.
    pub fn undo(&mut self) -> Option<usize> {
        let action = self.undo.pop_undo()?;
        tracing::debug!(
            pos = action.pos,
            removed = action.remove.len(),
            inserted = action.insert.len(),
            "undo"
        );
        self.apply_edit(action.pos, action.remove_end(), &action.insert, Journal::Undo);
        Some(action.cursor_hint())
    }

    /// Re-applies the most recently undone edit.
    pub fn redo(&mut self) -> Option<usize> {
        let action = self.undo.pop_redo()?;
        tracing::debug!(
            pos = action.pos,
            removed = action.remove.len(),
            inserted = action.insert.len(),
            "redo"
        );
        self.apply_edit(action.pos, action.remove_end(), &action.insert, Journal::Redo);
        Some(action.cursor_hint())
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    /// Number of edits that can currently be undone, ignoring the enabled flag.
    pub fn undo_depth(&self) -> usize {
        self.undo.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.undo.redo_depth()
    }

    pub fn undo_enabled(&self) -> bool {
        self.undo.enabled()
    }

    /// Turns recording and replay on or off. Toggling keeps the existing
    /// history, but any edit made while recording is off drops it.
    pub fn set_undo_enabled(&mut self, enabled: bool) {
        self.undo.set_enabled(enabled);
    }

    // ==================== Configuration ====================

    pub fn tab_distance(&self) -> usize {
        self.tab_distance
    }

    /// Sets the columns between tab stops, clamped to
    /// `1..=MAX_EXP_CHAR_LEN`.
    ///
    /// Tab width changes every line's layout, so modify observers get a
    /// whole-document change (same bytes deleted and inserted). No bytes
    /// go away, so pre-delete observers are not called. This is not
    /// recorded for undo.
    pub fn set_tab_distance(&mut self, tab_distance: usize) {
        self.tab_distance = tab_distance.clamp(1, navigator::MAX_EXP_CHAR_LEN);
        let len = self.len();
        let text = self.text();
        self.notifier
            .call_modify(self, &ModifyEvent::edit(0, len, len, Some(&text)));
    }

    /// Whether the last file read had to be converted to UTF-8.
    pub fn input_file_was_transcoded(&self) -> bool {
        self.input_file_was_transcoded
    }

    /// Replaces the decoder used when reading files.
    pub fn set_input_decoder(&mut self, decoder: Box<dyn InputDecoder>) {
        self.input_decoder = decoder;
    }

    /// Sets the callback run after a file read was transcoded. A UI
    /// typically shows `FILE_ENCODING_WARNING_MESSAGE`.
    pub fn set_transcoding_warning_action(&mut self, action: Option<TranscodingWarningAction>) {
        self.transcoding_warning_action = action;
    }

    // ==================== Character Navigation ====================

    /// Offset of the next character, or `None` at the end.
    pub fn next_char(&self, pos: usize) -> Option<usize> {
        self.check_offset("next_char", pos);
        navigator::next_char(&self.buffer, pos)
    }

    /// Offset of the previous character, or `None` at the start.
    pub fn prev_char(&self, pos: usize) -> Option<usize> {
        self.check_offset("prev_char", pos);
        navigator::prev_char(&self.buffer, pos)
    }

    pub fn next_char_clipped(&self, pos: usize) -> usize {
        navigator::next_char_clipped(&self.buffer, pos)
    }

    pub fn prev_char_clipped(&self, pos: usize) -> usize {
        navigator::prev_char_clipped(&self.buffer, pos)
    }

    /// Moves `pos` back to the start of the character it points into.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the end of the buffer.
    pub fn utf8_align(&self, pos: usize) -> usize {
        assert!(
            pos <= self.len(),
            "utf8_align: position {pos} out of range (len {})",
            self.len()
        );
        navigator::utf8_align(&self.buffer, pos)
    }

    /// Offset after the grapheme cluster at `pos`. Line breaks are stepped
    /// over one character at a time.
    pub fn next_grapheme(&self, pos: usize) -> usize {
        self.check_offset("next_grapheme", pos);
        let start = self.line_start(pos);
        let end = self.line_end(pos);
        if pos >= end {
            return self.next_char_clipped(pos);
        }
        let line = self.buffer.slice(start, end);
        start + grapheme_boundary_right(&line, pos - start)
    }

    /// Offset of the grapheme cluster before `pos`.
    pub fn prev_grapheme(&self, pos: usize) -> usize {
        self.check_offset("prev_grapheme", pos);
        let start = self.line_start(pos);
        if pos <= start {
            return self.prev_char_clipped(pos);
        }
        let end = self.line_end(pos);
        let line = self.buffer.slice(start, end);
        start + grapheme_boundary_left(&line, pos - start)
    }

    // ==================== Lines ====================

    pub fn line_start(&self, pos: usize) -> usize {
        self.check_offset("line_start", pos);
        navigator::line_start(&self.buffer, pos)
    }

    /// Offset of the newline ending the line at `pos`, or the buffer end.
    pub fn line_end(&self, pos: usize) -> usize {
        self.check_offset("line_end", pos);
        navigator::line_end(&self.buffer, pos)
    }

    /// The line containing `pos`, without its newline.
    pub fn line_text(&self, pos: usize) -> String {
        self.buffer.slice(self.line_start(pos), self.line_end(pos))
    }

    /// Counts newlines in `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed, out of range, or splits a
    /// character.
    pub fn count_lines(&self, start: usize, end: usize) -> usize {
        self.check_range("count_lines", start, end);
        navigator::count_lines(&self.buffer, start, end)
    }

    /// Start of the line `n_lines` below the one at `start`.
    pub fn skip_lines(&self, start: usize, n_lines: usize) -> usize {
        self.check_offset("skip_lines", start);
        navigator::skip_lines(&self.buffer, start, n_lines)
    }

    /// Start of the line `n_lines` above the one at `start`.
    pub fn rewind_lines(&self, start: usize, n_lines: usize) -> usize {
        self.check_offset("rewind_lines", start);
        navigator::rewind_lines(&self.buffer, start, n_lines)
    }

    /// Estimated line breaks in `[start, end)` when wrapping every
    /// `line_len` displayed characters.
    pub fn estimate_lines(&self, start: usize, end: usize, line_len: usize) -> usize {
        self.check_range("estimate_lines", start, end);
        navigator::estimate_lines(&self.buffer, start, end, line_len)
    }

    // ==================== Words ====================

    pub fn word_start(&self, pos: usize) -> usize {
        self.check_offset("word_start", pos);
        navigator::word_start(&self.buffer, pos)
    }

    pub fn word_end(&self, pos: usize) -> usize {
        self.check_offset("word_end", pos);
        navigator::word_end(&self.buffer, pos)
    }

    pub fn is_word_separator(&self, pos: usize) -> bool {
        self.check_offset("is_word_separator", pos);
        navigator::is_word_separator(&self.buffer, pos)
    }

    // ==================== Display Columns ====================

    /// Display columns from `line_start` up to `target`, with tabs and
    /// control characters expanded.
    pub fn count_displayed_characters(&self, line_start: usize, target: usize) -> usize {
        self.check_range("count_displayed_characters", line_start, target);
        navigator::count_displayed_characters(&self.buffer, line_start, target, self.tab_distance)
    }

    /// Offset reached after `n_cols` display columns from `line_start`,
    /// stopping at the end of the line.
    pub fn skip_displayed_characters(&self, line_start: usize, n_cols: usize) -> usize {
        self.check_offset("skip_displayed_characters", line_start);
        navigator::skip_displayed_characters(&self.buffer, line_start, n_cols, self.tab_distance)
    }

    // ==================== Search ====================

    pub fn findchar_forward(&self, start: usize, ch: char) -> Option<usize> {
        self.check_offset("findchar_forward", start);
        navigator::findchar_forward(&self.buffer, start, ch)
    }

    pub fn findchar_backward(&self, start: usize, ch: char) -> Option<usize> {
        self.check_offset("findchar_backward", start);
        navigator::findchar_backward(&self.buffer, start, ch)
    }

    /// First match of `needle` at or after `start`. An empty needle never
    /// matches.
    pub fn search_forward(&self, start: usize, needle: &str, match_case: bool) -> Option<usize> {
        self.check_offset("search_forward", start);
        navigator::search_forward(&self.buffer, start, needle, match_case)
    }

    /// Last match of `needle` starting at or before `start`. An empty
    /// needle never matches.
    pub fn search_backward(&self, start: usize, needle: &str, match_case: bool) -> Option<usize> {
        self.check_offset("search_backward", start);
        navigator::search_backward(&self.buffer, start, needle, match_case)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("buffer", &self.buffer)
            .field("selections", &self.selections)
            .field("notifier", &self.notifier)
            .field("undo", &self.undo)
            .field("tab_distance", &self.tab_distance)
            .field("input_file_was_transcoded", &self.input_file_was_transcoded)
            .finish_non_exhaustive()
    }
}

/// `write!` appends formatted text to the end of the buffer.
impl fmt::Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}
