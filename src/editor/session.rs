use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::clipboard::{Clipboard, ClipboardError};

use super::{EditorBuffer, StatusSummary};

/// Name shown in the window title.
pub const APP_NAME: &str = "SpudPad";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8 text", .path.display())]
    InvalidText { path: PathBuf },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Result of a plain Save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to the associated file.
    Saved(PathBuf),
    /// No file is associated yet; the caller has to ask for a target.
    NeedsTarget,
}

/// One editing session: the buffer plus the file it belongs to.
///
/// All I/O failures leave the buffer and file identity as they were.
#[derive(Debug, Default)]
pub struct Session {
    buffer: EditorBuffer,
    file: Option<PathBuf>,
}

impl Session {
    /// An empty, untitled session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session over existing text, optionally tied to a file.
    pub fn with_text(text: &str, file: Option<PathBuf>) -> Self {
        Self {
            buffer: EditorBuffer::from_text(text),
            file,
        }
    }

    pub const fn buffer(&self) -> &EditorBuffer {
        &self.buffer
    }

    pub const fn buffer_mut(&mut self) -> &mut EditorBuffer {
        &mut self.buffer
    }

    /// The associated file, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Associate a file without reading it (e.g. a path that does not exist yet).
    pub fn attach_file(&mut self, path: PathBuf) {
        self.file = Some(path);
    }

    /// File name for display, or "Untitled".
    pub fn display_name(&self) -> String {
        self.file
            .as_ref()
            .and_then(|p| p.file_name())
            .map_or_else(
                || "Untitled".to_string(),
                |name| name.to_string_lossy().to_string(),
            )
    }

    /// Window title, e.g. `SpudPad - notes.txt`.
    pub fn title(&self) -> String {
        format!("{APP_NAME} - {}", self.display_name())
    }

    /// Starting a new document throws away text, so it needs confirming first.
    pub fn needs_discard_confirmation(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Clear the document, the cursor and the file identity.
    pub fn new_document(&mut self) {
        self.buffer = EditorBuffer::empty();
        self.file = None;
    }

    /// Replace the document with the contents of `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not UTF-8 text.
    pub fn open(&mut self, path: &Path) -> Result<(), SessionError> {
        let bytes = std::fs::read(path).map_err(|source| SessionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.open_bytes(path.to_path_buf(), bytes)
    }

    /// Replace the document with `bytes` decoded as text and adopt `path`.
    ///
    /// # Errors
    /// Returns [`SessionError::InvalidText`] if `bytes` is not valid UTF-8.
    pub fn open_bytes(&mut self, path: PathBuf, bytes: Vec<u8>) -> Result<(), SessionError> {
        let Ok(text) = String::from_utf8(bytes) else {
            return Err(SessionError::InvalidText { path });
        };
        tracing::info!(path = %path.display(), chars = text.chars().count(), "opened file");
        self.buffer = EditorBuffer::from_text(&text);
        self.file = Some(path);
        Ok(())
    }

    /// Write to the associated file, or report that a target is needed.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&mut self) -> Result<SaveOutcome, SessionError> {
        let Some(path) = self.file.clone() else {
            return Ok(SaveOutcome::NeedsTarget);
        };
        self.write_file(&path)?;
        Ok(SaveOutcome::Saved(path))
    }

    /// Write to `target` and make it the associated file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written; the previous file
    /// identity is kept in that case.
    pub fn save_as(&mut self, target: PathBuf) -> Result<(), SessionError> {
        self.write_file(&target)?;
        self.file = Some(target);
        Ok(())
    }

    /// Move the selection to the clipboard.
    ///
    /// Returns `Ok(false)` when nothing is selected. If the clipboard refuses
    /// the text the document is left untouched.
    ///
    /// # Errors
    /// Returns an error if the clipboard write fails.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) -> Result<bool, SessionError> {
        let Some(text) = self.buffer.copy() else {
            return Ok(false);
        };
        clipboard.set_text(&text)?;
        self.buffer.cut();
        Ok(true)
    }

    /// Copy the selection to the clipboard. `Ok(false)` when nothing is selected.
    ///
    /// # Errors
    /// Returns an error if the clipboard write fails.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> Result<bool, SessionError> {
        let Some(text) = self.buffer.copy() else {
            return Ok(false);
        };
        clipboard.set_text(&text)?;
        Ok(true)
    }

    /// Insert the clipboard contents at the cursor, replacing any selection.
    /// `Ok(false)` when the clipboard is empty.
    ///
    /// # Errors
    /// Returns an error if the clipboard cannot be read.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> Result<bool, SessionError> {
        let Some(text) = clipboard.get_text()? else {
            return Ok(false);
        };
        Ok(self.buffer.paste(&text))
    }

    pub fn status(&self) -> StatusSummary {
        self.buffer.status()
    }

    fn write_file(&mut self, path: &Path) -> Result<(), SessionError> {
        let write_err = |source| SessionError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        self.buffer.write_to(&mut writer).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
        self.buffer.mark_clean();
        tracing::info!(path = %path.display(), chars = self.buffer.len_chars(), "saved file");
        Ok(())
    }
}
