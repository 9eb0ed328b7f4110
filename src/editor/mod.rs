//! Text editing core.
//!
//! Provides a rope-backed text buffer indexed by code point, with a single
//! linear cursor, an optional selection, and clipboard-style editing.
//! [`Session`] pairs the buffer with the file it was loaded from.

mod buffer;
mod session;
mod status;

pub use buffer::{Direction, EditorBuffer, Position, Selection};
pub use session::{APP_NAME, SaveOutcome, Session, SessionError};
pub use status::StatusSummary;
