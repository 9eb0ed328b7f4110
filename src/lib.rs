// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # SpudPad
//!
//! An ultra-minimal terminal text editor. No Markdown, no nonsense.
//!
//! SpudPad edits a single plain-text document with:
//! - Cut, copy and paste through the system clipboard
//! - New, Open, Save and Save As with verbatim file contents
//! - A `Ln, Col | characters` status line
//! - Optional word wrap
//!
//! ## Architecture
//!
//! SpudPad uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Text buffer, selection and file session
//! - [`clipboard`]: System and in-memory clipboards
//! - [`config`]: Persisted command-line defaults
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
    pub use crate::editor::{EditorBuffer, Session};
}
