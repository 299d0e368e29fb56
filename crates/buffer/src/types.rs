// Chunk: docs/chunks/change_notification - Modify events delivered to buffer observers

/// Describes one change to the buffer, delivered to modify observers.
///
/// Text edits set `n_inserted`/`n_deleted`; selection redisplay and
/// style-only changes set `n_restyled` and leave the others at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifyEvent<'a> {
    /// Byte offset where the change starts.
    pub pos: usize,
    pub n_inserted: usize,
    pub n_deleted: usize,
    pub n_restyled: usize,
    /// A copy of the removed text, when the change removed any.
    pub deleted_text: Option<&'a str>,
}

impl<'a> ModifyEvent<'a> {
    pub fn edit(pos: usize, n_deleted: usize, n_inserted: usize, deleted_text: Option<&'a str>) -> Self {
        Self {
            pos,
            n_inserted,
            n_deleted,
            n_restyled: 0,
            deleted_text,
        }
    }

    pub fn restyle(pos: usize, n_restyled: usize) -> Self {
        Self {
            pos,
            n_restyled,
            ..Self::default()
        }
    }

    /// Returns true if this event changed text rather than only styling.
    pub fn is_text_change(&self) -> bool {
        self.n_inserted > 0 || self.n_deleted > 0
    }

    /// Net change in document length.
    pub fn delta(&self) -> isize {
        self.n_inserted as isize - self.n_deleted as isize
    }
}
