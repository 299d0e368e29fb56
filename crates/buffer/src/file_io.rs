// Chunk: docs/chunks/file_transfer - Chunked file load and save through the edit primitives

//! Moving bytes between files and the buffer.
//!
//! Loading reads the file in fixed-size chunks and feeds each chunk to
//! [`TextBuffer::insert`], so selections, observers and undo see ordinary
//! insertions. Encoding detection is not done here: the raw bytes go
//! through a pluggable [`InputDecoder`], and the buffer only remembers
//! whether the decoder reported a conversion.
//!
//! Failures come back as a [`FileError`]: `Open` means nothing changed,
//! `Partial` means part of the data was already transferred.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::text_buffer::TextBuffer;

/// Default chunk size for file transfers.
pub const DEFAULT_IO_BUFLEN: usize = 128 * 1024;

/// Message a UI can show when [`TextBuffer::input_file_was_transcoded`] is set.
pub const FILE_ENCODING_WARNING_MESSAGE: &str = "Displayed text contains the UTF-8 transcoding of\n\
     the input file which was not UTF-8 encoded.\n\
     Some changes may have occurred.";

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The file could not be opened; the buffer or file is untouched.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading or writing stopped part way; some data was transferred.
    #[error("transfer of {} stopped part way: {source}", path.display())]
    Partial {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Returns true if the failure left data partially transferred.
    pub fn is_partial(&self) -> bool {
        matches!(self, FileError::Partial { .. })
    }

    fn open(path: &Path, source: io::Error) -> Self {
        FileError::Open {
            path: path.to_path_buf(),
            source,
        }
    }

    fn partial(path: &Path, source: io::Error) -> Self {
        FileError::Partial {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Turns raw file bytes into UTF-8 text.
pub trait InputDecoder {
    /// Returns the decoded text and whether the bytes had to be converted.
    ///
    /// `raw` never ends inside a valid but incomplete UTF-8 sequence unless
    /// it is the last chunk of the file.
    fn decode(&self, raw: &[u8]) -> (String, bool);
}

/// Passes UTF-8 through unchanged and maps anything else byte-for-byte to
/// U+0000..U+00FF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1Fallback;

impl InputDecoder for Latin1Fallback {
    fn decode(&self, raw: &[u8]) -> (String, bool) {
        match std::str::from_utf8(raw) {
            Ok(text) => (text.to_owned(), false),
            Err(_) => (raw.iter().map(|&b| char::from(b)).collect(), true),
        }
    }
}

/// Length of the prefix of `bytes` that does not end in a truncated UTF-8
/// sequence.
fn complete_prefix_len(bytes: &[u8]) -> usize {
    match std::str::from_utf8(bytes) {
        Err(e) if e.error_len().is_none() => e.valid_up_to(),
        _ => bytes.len(),
    }
}

impl TextBuffer {
    /// Inserts the contents of the file at `path` at byte offset `pos`,
    /// reading `buflen` bytes at a time.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the end of the buffer or inside a
    /// character.
    pub fn insert_file(
        &mut self,
        path: impl AsRef<Path>,
        pos: usize,
        buflen: usize,
    ) -> Result<(), FileError> {
        let path = path.as_ref();
        self.check_offset("insert_file", pos);
        let mut file = File::open(path).map_err(|e| FileError::open(path, e))?;

        let mut chunk = vec![0; buflen.max(4)];
        let mut pending: Vec<u8> = Vec::new();
        let mut at = pos;
        let mut transcoded = false;
        let mut failure = None;

        loop {
            let n = match file.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            };
            pending.extend_from_slice(&chunk[..n]);
            let ready = complete_prefix_len(&pending);
            at += self.insert_decoded(at, &pending[..ready], &mut transcoded);
            pending.drain(..ready);
        }
        // A truncated sequence at end of file is handed over as-is
        self.insert_decoded(at, &pending, &mut transcoded);

        self.input_file_was_transcoded = transcoded;
        tracing::debug!(path = %path.display(), bytes = at - pos, transcoded, "inserted file");
        if transcoded {
            tracing::warn!(path = %path.display(), "input file was transcoded to UTF-8");
            if let Some(action) = &self.transcoding_warning_action {
                action(self);
            }
        }

        match failure {
            Some(e) => Err(FileError::partial(path, e)),
            None => Ok(()),
        }
    }

    /// Decodes `raw` and inserts it at `pos`, returning the inserted length.
    fn insert_decoded(&mut self, pos: usize, raw: &[u8], transcoded: &mut bool) -> usize {
        if raw.is_empty() {
            return 0;
        }
        let (text, converted) = self.input_decoder.decode(raw);
        *transcoded |= converted;
        self.insert(pos, &text);
        text.len()
    }

    /// Appends the file at `path` to the end of the buffer.
    pub fn append_file(&mut self, path: impl AsRef<Path>, buflen: usize) -> Result<(), FileError> {
        let end = self.len();
        self.insert_file(path, end, buflen)
    }

    /// Replaces the buffer content with the file at `path`.
    pub fn load_file(&mut self, path: impl AsRef<Path>, buflen: usize) -> Result<(), FileError> {
        let path = path.as_ref();
        // Probe first so a missing file leaves the buffer alone
        File::open(path).map_err(|e| FileError::open(path, e))?;
        let len = self.len();
        self.remove(0, len);
        self.append_file(path, buflen)
    }

    /// Writes the byte range `[start, end)` to the file at `path`, `buflen`
    /// bytes at a time.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or past the end of the buffer.
    pub fn output_file(
        &self,
        path: impl AsRef<Path>,
        start: usize,
        end: usize,
        buflen: usize,
    ) -> Result<(), FileError> {
        let path = path.as_ref();
        self.check_range("output_file", start, end);
        let mut file = File::create(path).map_err(|e| FileError::open(path, e))?;

        let step = buflen.max(1);
        let mut pos = start;
        while pos < end {
            let chunk_end = (pos + step).min(end);
            let (first, second) = self.storage().segments(pos, chunk_end);
            file.write_all(first)
                .and_then(|()| file.write_all(second))
                .map_err(|e| FileError::partial(path, e))?;
            pos = chunk_end;
        }
        file.flush().map_err(|e| FileError::partial(path, e))?;

        tracing::debug!(path = %path.display(), bytes = end - start, "wrote file");
        Ok(())
    }

    /// Writes the whole buffer to the file at `path`.
    pub fn save_file(&self, path: impl AsRef<Path>, buflen: usize) -> Result<(), FileError> {
        self.output_file(path, 0, self.len(), buflen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_fallback_passes_utf8_through() {
        let (text, transcoded) = Latin1Fallback.decode("caf\u{E9}".as_bytes());
        assert_eq!(text, "caf\u{E9}");
        assert!(!transcoded);
    }

    #[test]
    fn latin1_fallback_converts_invalid_bytes() {
        let (text, transcoded) = Latin1Fallback.decode(b"caf\xE9");
        assert_eq!(text, "caf\u{E9}");
        assert!(transcoded);
    }

    #[test]
    fn complete_prefix_stops_before_truncated_sequence() {
        let bytes = "a\u{20AC}".as_bytes();
        assert_eq!(complete_prefix_len(bytes), 4);
        assert_eq!(complete_prefix_len(&bytes[..3]), 1);
        // Invalid (not merely truncated) data is handed over whole
        assert_eq!(complete_prefix_len(b"a\xFFb"), 3);
    }

    #[test]
    fn error_kinds() {
        let open = FileError::open(Path::new("x"), io::Error::from(ErrorKind::NotFound));
        assert!(!open.is_partial());
        assert!(open.to_string().starts_with("cannot open x"));
        let partial = FileError::partial(Path::new("x"), io::Error::from(ErrorKind::Other));
        assert!(partial.is_partial());
    }
}
