use crate::app::Model;
use crate::editor::Direction;

use super::model::ToastLevel;
use super::prompt::{Prompt, PromptOutcome};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // File
    /// Start a new document (asks first when the current one is non-empty)
    NewDocument,
    /// Ask for a file to open
    Open,
    /// Save to the current file, or ask for a path
    Save,
    /// Always ask for a path, then save
    SaveAs,

    // Clipboard
    Cut,
    Copy,
    Paste,

    // View
    /// Toggle word wrap
    ToggleWrap,
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Prompt
    /// Replace the prompt's input text
    PromptInput(String),
    /// The prompt was answered or dismissed
    PromptDone(PromptOutcome),

    // Editor
    /// Insert a character at the cursor
    EditorInsertChar(char),
    /// Insert pasted text at the cursor
    EditorInsertText(String),
    /// Split line at cursor (Enter)
    EditorSplitLine,
    /// Delete character before cursor (Backspace)
    EditorDeleteBack,
    /// Delete character at cursor (Delete)
    EditorDeleteForward,
    /// Move cursor in a direction
    EditorMoveCursor(Direction),
    /// Move cursor, extending the selection
    EditorExtendSelection(Direction),
    /// Move cursor to start of line
    EditorMoveHome,
    /// Move cursor to end of line
    EditorMoveEnd,
    /// Move cursor one word left
    EditorMoveWordLeft,
    /// Move cursor one word right
    EditorMoveWordRight,
    /// Move cursor to start of document
    EditorMoveToStart,
    /// Move cursor to end of document
    EditorMoveToEnd,
    /// Move cursor one text-area height up
    EditorPageUp,
    /// Move cursor one text-area height down
    EditorPageDown,
    EditorSelectAll,
    EditorClearSelection,
    /// Place the cursor at a document offset (mouse press)
    EditorMoveTo(usize),
    /// Extend the selection to a document offset (mouse drag)
    EditorSelectTo(usize),
    /// Mouse button released
    EditorEndMouseSelection,
    /// Scroll the view up by n rows
    EditorScrollUp(usize),
    /// Scroll the view down by n rows
    EditorScrollDown(usize),

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Force redraw
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// Clipboard and file I/O happen afterwards in
/// [`App::handle_message_side_effects`](crate::app::App).
pub fn update(mut model: Model, msg: Message) -> Model {
    // Reset the quit confirmation on any action other than Quit.
    // Save keeps it so Ctrl+S can be followed by the confirming Ctrl+Q.
    if !matches!(msg, Message::Quit | Message::Save | Message::Redraw) {
        model.quit_confirmed = false;
    }

    match msg {
        // File
        Message::NewDocument => {
            if model.session.needs_discard_confirmation() {
                model.prompt = Some(Prompt::ConfirmDiscard);
            } else {
                model.session.new_document();
                model.reset_view();
            }
        }
        Message::Open => model.prompt = Some(Prompt::open()),
        Message::Save => {
            if model.session.file_path().is_none() {
                model.prompt = Some(Prompt::save_as(None));
            }
        }
        Message::SaveAs => {
            model.prompt = Some(Prompt::save_as(model.session.file_path()));
        }

        // Clipboard operations mutate the buffer in side effects.
        Message::Cut | Message::Copy | Message::Paste => {}

        // View
        Message::ToggleWrap => {
            model.word_wrap = !model.word_wrap;
            model.horizontal_offset = 0;
            model.ensure_cursor_visible();
        }
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,

        // Prompt
        Message::PromptInput(value) => {
            if let Some(prompt) = &mut model.prompt {
                prompt.set_input(value);
            }
        }
        Message::PromptDone(outcome) => {
            model.prompt = None;
            if outcome == PromptOutcome::DiscardConfirmed {
                model.session.new_document();
                model.reset_view();
            }
        }

        // Editor
        Message::EditorInsertChar(ch) => {
            model.session.buffer_mut().insert_char(ch);
            model.ensure_cursor_visible();
        }
        Message::EditorInsertText(text) => {
            model.session.buffer_mut().insert_str(&text);
            model.ensure_cursor_visible();
        }
        Message::EditorSplitLine => {
            model.session.buffer_mut().split_line();
            model.ensure_cursor_visible();
        }
        Message::EditorDeleteBack => {
            model.session.buffer_mut().delete_back();
            model.ensure_cursor_visible();
        }
        Message::EditorDeleteForward => {
            model.session.buffer_mut().delete_forward();
            model.ensure_cursor_visible();
        }
        Message::EditorMoveCursor(dir) => {
            model.session.buffer_mut().move_cursor(dir);
            model.ensure_cursor_visible();
        }
        Message::EditorExtendSelection(dir) => {
            model.session.buffer_mut().extend_selection(dir);
            model.ensure_cursor_visible();
        }
        Message::EditorMoveHome => {
            model.session.buffer_mut().move_home();
            model.ensure_cursor_visible();
        }
        Message::EditorMoveEnd => {
            model.session.buffer_mut().move_end();
            model.ensure_cursor_visible();
        }
        Message::EditorMoveWordLeft => {
            model.session.buffer_mut().move_word_left();
            model.ensure_cursor_visible();
        }
        Message::EditorMoveWordRight => {
            model.session.buffer_mut().move_word_right();
            model.ensure_cursor_visible();
        }
        Message::EditorMoveToStart => {
            model.session.buffer_mut().move_to_start();
            model.ensure_cursor_visible();
        }
        Message::EditorMoveToEnd => {
            model.session.buffer_mut().move_to_end();
            model.ensure_cursor_visible();
        }
        Message::EditorPageUp => move_page(&mut model, Direction::Up),
        Message::EditorPageDown => move_page(&mut model, Direction::Down),
        Message::EditorSelectAll => {
            model.session.buffer_mut().select_all();
            model.ensure_cursor_visible();
        }
        Message::EditorClearSelection => model.session.buffer_mut().clear_selection(),
        Message::EditorMoveTo(offset) => {
            let buf = model.session.buffer_mut();
            buf.clear_selection();
            buf.set_cursor(offset);
            model.mouse_selecting = true;
            model.ensure_cursor_visible();
        }
        Message::EditorSelectTo(offset) => {
            model.session.buffer_mut().extend_to(offset);
            model.ensure_cursor_visible();
        }
        Message::EditorEndMouseSelection => model.mouse_selecting = false,
        Message::EditorScrollUp(n) => model.scroll_up(n),
        Message::EditorScrollDown(n) => model.scroll_down(n),

        // Window
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.ensure_cursor_visible();
        }
        Message::Redraw => {}

        // Application
        Message::Quit => {
            if model.session.buffer().is_dirty() && !model.quit_confirmed {
                model.show_toast(
                    ToastLevel::Warning,
                    "Unsaved changes! Press Ctrl+Q again to quit, or Ctrl+S to save",
                );
                model.quit_confirmed = true;
            } else {
                model.should_quit = true;
            }
        }
    }

    model
}

fn move_page(model: &mut Model, dir: Direction) {
    let page = model.text_area_height().max(1);
    let buf = model.session.buffer_mut();
    for _ in 0..page {
        buf.move_cursor(dir);
    }
    model.ensure_cursor_visible();
}
