use std::path::Path;

use crate::app::{App, Message, Model, PromptOutcome, ToastLevel};
use crate::editor::{SaveOutcome, SessionError};

impl App {
    /// Run the I/O a message implies, after [`update`](crate::app::update).
    pub(super) fn handle_message_side_effects(&mut self, model: &mut Model, msg: &Message) {
        match msg {
            Message::Save => match model.session.save() {
                Ok(SaveOutcome::Saved(path)) => show_saved(model, &path),
                // update already opened the Save As prompt.
                Ok(SaveOutcome::NeedsTarget) => {}
                Err(err) => report_save_failure(model, &err),
            },
            Message::Cut => match model.session.cut(self.clipboard.as_mut()) {
                Ok(_) => model.ensure_cursor_visible(),
                Err(err) => report(model, "Cut", &err),
            },
            Message::Copy => {
                if let Err(err) = model.session.copy(self.clipboard.as_mut()) {
                    report(model, "Copy", &err);
                }
            }
            Message::Paste => match model.session.paste(self.clipboard.as_mut()) {
                Ok(_) => model.ensure_cursor_visible(),
                Err(err) => report(model, "Paste", &err),
            },
            Message::PromptDone(PromptOutcome::Open(path)) => match model.session.open(path) {
                Ok(()) => model.reset_view(),
                Err(err) => report(model, "Open", &err),
            },
            Message::PromptDone(PromptOutcome::SaveAs(path)) => {
                match model.session.save_as(path.clone()) {
                    Ok(()) => show_saved(model, path),
                    Err(err) => report_save_failure(model, &err),
                }
            }
            _ => {}
        }
    }
}

fn show_saved(model: &mut Model, path: &Path) {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());
    model.show_toast(ToastLevel::Info, format!("Saved {name}"));
}

/// A failed save leaves the text unsaved, so the next Quit must warn again.
fn report_save_failure(model: &mut Model, err: &SessionError) {
    model.quit_confirmed = false;
    report(model, "Save", err);
}

fn report(model: &mut Model, action: &str, err: &SessionError) {
    tracing::warn!("{action} failed: {err}");
    model.show_toast(ToastLevel::Error, format!("{action} failed: {err}"));
}
