//! Clipboard collaborators.
//!
//! The editor only ever sets and gets a single text slot. [`SystemClipboard`]
//! talks to the OS clipboard (OSC 52 for writes, `arboard` for reads and
//! writes) and keeps an internal copy so paste works even when the system
//! clipboard is unreachable. [`MemoryClipboard`] is purely in-process.

use std::io::{Write, stdout};
use std::sync::Mutex;

use base64::Engine;
use thiserror::Error;

/// Native clipboard handle kept alive for the process lifetime.
/// On X11 the owner must stay alive to answer paste requests from other apps.
static NATIVE_CLIPBOARD: Mutex<Option<arboard::Clipboard>> = Mutex::new(None);

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A single opaque text slot, set and read by content.
pub trait Clipboard {
    /// Replace the clipboard contents.
    ///
    /// # Errors
    /// Returns an error if the text could not be delivered anywhere.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Current clipboard contents, or `None` when there is nothing to paste.
    ///
    /// # Errors
    /// Returns an error if the clipboard could not be read.
    fn get_text(&mut self) -> Result<Option<String>, ClipboardError>;
}

/// In-process clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    slot: Option<String>,
}

impl MemoryClipboard {
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Peek at the stored text without going through the trait.
    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.slot = Some(text.to_string());
        Ok(())
    }

    fn get_text(&mut self) -> Result<Option<String>, ClipboardError> {
        Ok(self.slot.clone().filter(|text| !text.is_empty()))
    }
}

/// OS clipboard with an internal fallback slot.
#[derive(Debug, Default)]
pub struct SystemClipboard {
    internal: MemoryClipboard,
}

impl SystemClipboard {
    pub const fn new() -> Self {
        Self {
            internal: MemoryClipboard::new(),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.internal.set_text(text)?;

        let native = with_native_clipboard(|clipboard| clipboard.set_text(text));
        if let Err(err) = &native {
            tracing::debug!("native clipboard copy failed: {err}");
        }

        // OSC 52 reaches the terminal's clipboard even over SSH.
        if let Err(err) = write_osc52(text) {
            tracing::debug!("OSC 52 clipboard copy failed: {err}");
            if native.is_err() {
                return Err(err.into());
            }
        }
        Ok(())
    }

    fn get_text(&mut self) -> Result<Option<String>, ClipboardError> {
        match with_native_clipboard(arboard::Clipboard::get_text) {
            Ok(text) if !text.is_empty() => {
                self.internal.set_text(&text)?;
                return Ok(Some(text));
            }
            Ok(_) => {}
            Err(err) => tracing::debug!("native clipboard read failed: {err}"),
        }
        self.internal.get_text()
    }
}

fn with_native_clipboard<T>(
    f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, arboard::Error>,
) -> Result<T, ClipboardError> {
    let mut guard = NATIVE_CLIPBOARD
        .lock()
        .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;
    if guard.is_none() {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        *guard = Some(clipboard);
    }
    let Some(clipboard) = guard.as_mut() else {
        return Err(ClipboardError::Unavailable(
            "clipboard not initialized".to_string(),
        ));
    };
    match f(clipboard) {
        Ok(value) => Ok(value),
        Err(err) => {
            // Drop the handle so the next call starts from a fresh connection.
            *guard = None;
            Err(ClipboardError::Unavailable(err.to_string()))
        }
    }
}

fn write_osc52(text: &str) -> std::io::Result<()> {
    let mut out = stdout();
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}
