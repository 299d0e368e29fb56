// Chunk: docs/chunks/selection_tracking - Primary, secondary and highlight selections

//! Byte-range selections tracked by the text buffer.
//!
//! A [`Selection`] stores its raw `start`/`end` separately from the
//! `selected` flag. Deactivating a selection only drops the flag, so the
//! raw offsets keep their last values while [`Selection::start`] and
//! [`Selection::end`] report 0.

/// Which of the buffer's three selections an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    /// The user's selection.
    Primary,
    /// An alternate selection (e.g. middle-button or rectangular style).
    Secondary,
    /// Visual emphasis that is not meant for editing (e.g. search matches).
    Highlight,
}

impl SelectionKind {
    pub const ALL: [SelectionKind; 3] = [
        SelectionKind::Primary,
        SelectionKind::Secondary,
        SelectionKind::Highlight,
    ];
}

/// A possibly-inactive byte range `[start, end)` over the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    start: usize,
    end: usize,
    selected: bool,
}

impl Selection {
    /// Sets the range, ordering the offsets. An empty range leaves the
    /// selection inactive.
    pub fn set(&mut self, start: usize, end: usize) {
        self.start = start.min(end);
        self.end = start.max(end);
        self.selected = start != end;
    }

    /// Byte offset of the first selected byte, or 0 when inactive.
    pub fn start(&self) -> usize {
        if self.selected {
            self.start
        } else {
            0
        }
    }

    /// Byte offset after the last selected byte, or 0 when inactive.
    pub fn end(&self) -> usize {
        if self.selected {
            self.end
        } else {
            0
        }
    }

    /// The stored start offset, whether or not the selection is active.
    pub fn raw_start(&self) -> usize {
        self.start
    }

    /// The stored end offset, whether or not the selection is active.
    pub fn raw_end(&self) -> usize {
        self.end
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Changes the active flag without touching the stored offsets.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Size of the selection in bytes, 0 when inactive.
    pub fn length(&self) -> usize {
        if self.selected {
            self.end - self.start
        } else {
            0
        }
    }

    /// Returns `(start, end)` when the selection is active.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.selected.then_some((self.start, self.end))
    }

    /// Returns true if `pos` lies inside an active selection.
    pub fn includes(&self, pos: usize) -> bool {
        self.selected && self.start <= pos && pos < self.end
    }

    /// Adjusts the range after `n_deleted` bytes at `pos` were replaced by
    /// `n_inserted` bytes.
    ///
    /// Boundaries at or after the end of the deleted range shift by the net
    /// delta; boundaries inside the deleted range collapse to `pos`;
    /// boundaries before `pos` stay. The selection is dropped when a
    /// deletion swallows it or when it ends up empty.
    pub fn update(&mut self, pos: usize, n_deleted: usize, n_inserted: usize) {
        if !self.selected {
            return;
        }

        let deleted_end = pos + n_deleted;
        if n_deleted > 0 && pos <= self.start && deleted_end >= self.end {
            self.start = pos;
            self.end = pos;
            self.selected = false;
            return;
        }

        let adjust = |offset: usize| {
            if offset >= deleted_end {
                offset - n_deleted + n_inserted
            } else if offset >= pos {
                pos
            } else {
                offset
            }
        };
        self.start = adjust(self.start);
        self.end = adjust(self.end);

        if self.start >= self.end {
            self.selected = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(start: usize, end: usize) -> Selection {
        let mut sel = Selection::default();
        sel.set(start, end);
        sel
    }

    // ==================== Set / accessors ====================

    #[test]
    fn set_marks_active() {
        let sel = selection(3, 7);
        assert!(sel.selected());
        assert_eq!(sel.start(), 3);
        assert_eq!(sel.end(), 7);
        assert_eq!(sel.length(), 4);
        assert_eq!(sel.position(), Some((3, 7)));
    }

    #[test]
    fn set_orders_offsets() {
        let sel = selection(9, 2);
        assert_eq!(sel.position(), Some((2, 9)));
    }

    #[test]
    fn set_empty_range_is_inactive() {
        let sel = selection(4, 4);
        assert!(!sel.selected());
        assert_eq!(sel.position(), None);
    }

    #[test]
    fn inactive_masks_offsets_but_keeps_raw_fields() {
        let mut sel = selection(5, 10);
        sel.set_selected(false);
        assert_eq!(sel.start(), 0);
        assert_eq!(sel.end(), 0);
        assert_eq!(sel.length(), 0);
        assert_eq!(sel.raw_start(), 5);
        assert_eq!(sel.raw_end(), 10);
    }

    #[test]
    fn includes_is_half_open() {
        let sel = selection(2, 4);
        assert!(!sel.includes(1));
        assert!(sel.includes(2));
        assert!(sel.includes(3));
        assert!(!sel.includes(4));

        let mut inactive = sel;
        inactive.set_selected(false);
        assert!(!inactive.includes(3));
    }

    // ==================== Update ====================

    #[test]
    fn insert_before_shifts_both() {
        let mut sel = selection(10, 20);
        sel.update(5, 0, 5);
        assert_eq!(sel.position(), Some((15, 25)));
    }

    #[test]
    fn insert_after_leaves_unchanged() {
        let mut sel = selection(10, 20);
        sel.update(25, 0, 5);
        assert_eq!(sel.position(), Some((10, 20)));
    }

    #[test]
    fn insert_inside_grows_end() {
        let mut sel = selection(10, 20);
        sel.update(15, 0, 3);
        assert_eq!(sel.position(), Some((10, 23)));
    }

    #[test]
    fn insert_at_start_shifts_both() {
        let mut sel = selection(10, 20);
        sel.update(10, 0, 2);
        assert_eq!(sel.position(), Some((12, 22)));
    }

    #[test]
    fn delete_before_shifts_back() {
        let mut sel = selection(10, 20);
        sel.update(2, 4, 0);
        assert_eq!(sel.position(), Some((6, 16)));
    }

    #[test]
    fn delete_overlapping_start_collapses_start() {
        let mut sel = selection(10, 20);
        sel.update(5, 10, 0);
        assert_eq!(sel.position(), Some((5, 10)));
    }

    #[test]
    fn delete_overlapping_end_collapses_end() {
        let mut sel = selection(10, 20);
        sel.update(15, 10, 0);
        assert_eq!(sel.position(), Some((10, 15)));
    }

    #[test]
    fn delete_covering_selection_deactivates() {
        let mut sel = selection(10, 20);
        sel.update(10, 10, 0);
        assert!(!sel.selected());

        let mut sel = selection(10, 20);
        sel.update(8, 15, 0);
        assert!(!sel.selected());
    }

    #[test]
    fn replace_covering_selection_deactivates() {
        let mut sel = selection(10, 20);
        sel.update(10, 10, 4);
        assert!(!sel.selected());
    }

    #[test]
    fn delete_inside_shrinks() {
        let mut sel = selection(10, 20);
        sel.update(12, 3, 0);
        assert_eq!(sel.position(), Some((10, 17)));
    }

    #[test]
    fn update_ignores_inactive_selection() {
        let mut sel = selection(10, 20);
        sel.set_selected(false);
        sel.update(0, 0, 5);
        assert_eq!(sel.raw_start(), 10);
        assert_eq!(sel.raw_end(), 20);
    }
}
