//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod prompt;
mod update;

pub use model::{Model, ToastLevel};
pub use prompt::{Prompt, PromptOutcome};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::editor::Session;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    word_wrap: bool,
    clipboard: Box<dyn Clipboard>,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application, optionally opening `file_path` at startup.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            word_wrap: false,
            clipboard: Box::new(SystemClipboard::new()),
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Set the initial word wrap mode.
    #[must_use]
    pub const fn with_word_wrap(mut self, enabled: bool) -> Self {
        self.word_wrap = enabled;
        self
    }

    /// Replace the clipboard used by cut, copy and paste.
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Set config paths to show in help.
    #[must_use]
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }

    /// Build the starting state for a terminal of `size`.
    ///
    /// A start-up file that does not exist yet becomes the target of the
    /// first save. One that cannot be read leaves an untitled document and an
    /// error toast.
    pub fn initial_model(&self, size: (u16, u16)) -> Model {
        let mut session = Session::new();
        let mut open_error = None;
        if let Some(path) = &self.file_path {
            if path.exists() {
                if let Err(err) = session.open(path) {
                    tracing::warn!("initial open failed: {err}");
                    open_error = Some(err);
                }
            } else {
                tracing::info!(path = %path.display(), "starting new file");
                session.attach_file(path.clone());
            }
        }

        let mut model = Model::new(session, size);
        model.word_wrap = self.word_wrap;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        if let Some(err) = open_error {
            model.show_toast(ToastLevel::Error, format!("Open failed: {err}"));
        }
        model
    }
}

#[cfg(test)]
mod tests;
