// Chunk: docs/chunks/undo_history - Undo and redo stacks of inverse edits

//! Undo/redo history for the text buffer.
//!
//! Every recorded entry is an [`UndoAction`]: the edit that, applied to the
//! current document, reverses an earlier one. Applying an action produces
//! its own inverse, which goes onto the opposite stack. The engine itself
//! never touches the document; `TextBuffer` replays actions through its
//! normal edit path so selections and observers stay consistent.

/// A recorded inverse edit: replace the `remove` text at `pos` with `insert`.
///
/// A pure insertion undoes a deletion (`remove` empty); a pure deletion
/// undoes an insertion (`insert` empty). `remove` keeps a copy of the bytes
/// the action will delete, so the action can be inverted for redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoAction {
    pub pos: usize,
    pub remove: String,
    pub insert: String,
}

impl UndoAction {
    /// The action that reverses an edit which replaced `removed` at `pos`
    /// with `inserted`.
    pub fn reversing(pos: usize, removed: String, inserted: &str) -> Self {
        Self {
            pos,
            remove: inserted.to_owned(),
            insert: removed,
        }
    }

    /// The action that reverses this one.
    #[cfg(test)]
    pub(crate) fn inverse(&self) -> Self {
        Self {
            pos: self.pos,
            remove: self.insert.clone(),
            insert: self.remove.clone(),
        }
    }

    /// End of the range this action deletes.
    pub fn remove_end(&self) -> usize {
        self.pos + self.remove.len()
    }

    /// Where the cursor belongs after applying the action: just past the
    /// restored text.
    pub fn cursor_hint(&self) -> usize {
        self.pos + self.insert.len()
    }
}

/// Which history stack receives the inverse of an applied edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Journal {
    /// A fresh edit: record on the undo stack and forget redo history.
    Edit,
    /// Replaying an undo: the inverse becomes redoable.
    Undo,
    /// Replaying a redo: the inverse becomes undoable again.
    Redo,
}

/// Two stacks of inverse edits plus the recording switch.
#[derive(Debug, Clone)]
pub(crate) struct UndoEngine {
    undo: Vec<UndoAction>,
    redo: Vec<UndoAction>,
    enabled: bool,
}

impl UndoEngine {
    pub fn new(enabled: bool) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Gates future recording and replay. Toggling alone keeps the history.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn can_undo(&self) -> bool {
        self.enabled && !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        self.enabled && !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Stores the inverse of an applied edit according to `journal`.
    ///
    /// An edit applied while recording is off shifts the text under every
    /// stored action, so both stacks are dropped.
    pub fn record(&mut self, journal: Journal, action: UndoAction) {
        if !self.enabled {
            if journal == Journal::Edit {
                self.clear();
            }
            return;
        }
        match journal {
            Journal::Edit => {
                self.undo.push(action);
                self.redo.clear();
            }
            Journal::Undo => self.redo.push(action),
            Journal::Redo => self.undo.push(action),
        }
    }

    pub fn pop_undo(&mut self) -> Option<UndoAction> {
        if !self.enabled {
            return None;
        }
        self.undo.pop()
    }

    pub fn pop_redo(&mut self) -> Option<UndoAction> {
        if !self.enabled {
            return None;
        }
        self.redo.pop()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
