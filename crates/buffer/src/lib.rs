// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! gaptext-buffer: the text storage engine behind an editing widget.
//!
//! This crate provides a gap buffer-backed UTF-8 document with three
//! selections, change observers and undo/redo. It keeps no layout or
//! rendering state; a display layer listens for modify events and asks the
//! buffer line, column and search questions.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Insert, remove and replace at byte offsets
//! - Primary, secondary and highlight selections that follow edits
//! - Modify and pre-delete observers
//! - Undo and redo of every edit
//! - Line, word, display-column and substring queries
//! - Chunked file loading and saving
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use gaptext_buffer::{ModifyEvent, TextBuffer};
//!
//! let mut buffer = TextBuffer::new();
//!
//! let changes = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&changes);
//! buffer.add_modify_callback(Rc::new(move |_: &TextBuffer, ev: &ModifyEvent<'_>| {
//!     if ev.is_text_change() {
//!         counter.set(counter.get() + 1);
//!     }
//! }));
//!
//! buffer.insert(0, "Hello, world!");
//! buffer.select(7, 12);
//! buffer.replace_selection("gap");
//! assert_eq!(buffer.text(), "Hello, gap!");
//! assert_eq!(changes.get(), 2);
//!
//! assert_eq!(buffer.undo(), Some(12));
//! assert_eq!(buffer.text(), "Hello, world!");
//! ```
//!
//! # Offsets
//!
//! Every offset is a byte offset into the UTF-8 text. Mutations, range
//! accessors and navigation queries panic on offsets that are out of range
//! or split a character. Only the `_clipped` stepping variants saturate.

mod config;
mod file_io;
mod gap_buffer;
mod grapheme;
mod navigator;
mod notify;
mod selection;
mod text_buffer;
mod types;
mod undo;

pub use config::{BufferConfig, DEFAULT_TAB_DISTANCE};
pub use file_io::{
    FileError, InputDecoder, Latin1Fallback, DEFAULT_IO_BUFLEN, FILE_ENCODING_WARNING_MESSAGE,
};
pub use gap_buffer::DEFAULT_PREFERRED_GAP;
pub use grapheme::{
    grapheme_boundary_left, grapheme_boundary_right, grapheme_len_at, grapheme_len_before,
};
pub use navigator::{character_width, expand_character, is_word_separator_char, MAX_EXP_CHAR_LEN};
pub use notify::{ModifyObserver, PredeleteObserver};
pub use selection::{Selection, SelectionKind};
pub use text_buffer::{TextBuffer, TranscodingWarningAction};
pub use types::ModifyEvent;
pub use undo::UndoAction;
