use std::path::PathBuf;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tempfile::tempdir;

use crate::clipboard::MemoryClipboard;
use crate::editor::{Direction, Session};

use super::{App, Message, Model, Prompt, PromptOutcome, ToastLevel, update};

fn create_test_model(text: &str) -> Model {
    Model::new(Session::with_text(text, None), (80, 24))
}

fn create_test_app() -> App {
    App::new(None).with_clipboard(Box::new(MemoryClipboard::new()))
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// --- update ---

#[test]
fn test_typing_marks_document_dirty() {
    let model = create_test_model("");
    let model = update(model, Message::EditorInsertChar('h'));
    let model = update(model, Message::EditorInsertChar('i'));
    assert_eq!(model.session.buffer().text(), "hi");
    assert!(model.session.buffer().is_dirty());
}

#[test]
fn test_new_document_on_empty_clears_immediately() {
    let mut model = create_test_model("");
    model.session.attach_file(PathBuf::from("old.txt"));
    let model = update(model, Message::NewDocument);
    assert!(model.prompt.is_none());
    assert!(model.session.file_path().is_none());
}

#[test]
fn test_new_document_with_text_asks_first() {
    let model = update(create_test_model("keep"), Message::NewDocument);
    assert_eq!(model.prompt, Some(Prompt::ConfirmDiscard));
    assert_eq!(model.session.buffer().text(), "keep");

    let model = update(model, Message::PromptDone(PromptOutcome::Cancelled));
    assert!(model.prompt.is_none());
    assert_eq!(model.session.buffer().text(), "keep");

    let model = update(model, Message::NewDocument);
    let model = update(model, Message::PromptDone(PromptOutcome::DiscardConfirmed));
    assert!(model.session.buffer().is_empty());
    assert_eq!(model.session.buffer().cursor(), 0);
}

#[test]
fn test_save_without_file_opens_save_as_prompt() {
    let model = update(create_test_model("text"), Message::Save);
    assert!(matches!(model.prompt, Some(Prompt::SaveAs { .. })));
}

#[test]
fn test_prompt_input_replaces_text() {
    let model = update(create_test_model(""), Message::Open);
    let model = update(model, Message::PromptInput("a.txt".to_string()));
    assert_eq!(model.prompt.as_ref().and_then(Prompt::input), Some("a.txt"));
}

#[test]
fn test_toggle_wrap_flips_state() {
    let model = create_test_model("");
    assert!(!model.word_wrap);
    let model = update(model, Message::ToggleWrap);
    assert!(model.word_wrap);
    let model = update(model, Message::ToggleWrap);
    assert!(!model.word_wrap);
}

#[test]
fn test_quit_with_unsaved_changes_needs_confirmation() {
    let model = update(create_test_model(""), Message::EditorInsertChar('x'));
    let model = update(model, Message::Quit);
    assert!(!model.should_quit);
    assert!(model.quit_confirmed);
    assert_eq!(
        model.active_toast().map(|(_, level)| level),
        Some(ToastLevel::Warning)
    );
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_quit_confirmation_resets_after_other_action() {
    let model = update(create_test_model(""), Message::EditorInsertChar('x'));
    let model = update(model, Message::Quit);
    let model = update(model, Message::EditorMoveCursor(Direction::Left));
    let model = update(model, Message::Quit);
    assert!(!model.should_quit);
}

#[test]
fn test_clean_document_quits_immediately() {
    let model = update(create_test_model("saved"), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_cursor_below_view_scrolls_down() {
    let text = (0..100).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
    let model = update(create_test_model(&text), Message::EditorMoveToEnd);
    // 24 rows minus toolbar and status bar.
    assert_eq!(model.text_area_height(), 22);
    assert_eq!(model.scroll_top, (78, 0));

    let model = update(model, Message::EditorMoveToStart);
    assert_eq!(model.scroll_top, (0, 0));
}

#[test]
fn test_page_down_moves_by_text_height() {
    let text = (0..100).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
    let model = update(create_test_model(&text), Message::EditorPageDown);
    assert_eq!(model.session.buffer().position().line, 22);
}

#[test]
fn test_scroll_stops_at_last_line() {
    let model = update(create_test_model("a\nb\nc"), Message::EditorScrollDown(10));
    assert_eq!(model.scroll_top, (2, 0));
    let model = update(model, Message::EditorScrollUp(1));
    assert_eq!(model.scroll_top, (1, 0));
}

#[test]
fn test_mouse_drag_selects_text() {
    let model = update(create_test_model("hello world"), Message::EditorMoveTo(6));
    assert!(model.mouse_selecting);
    let model = update(model, Message::EditorSelectTo(11));
    let model = update(model, Message::EditorEndMouseSelection);
    assert!(!model.mouse_selecting);
    assert_eq!(
        model.session.buffer().selected_text().as_deref(),
        Some("world")
    );
}

#[test]
fn test_resize_updates_text_area() {
    let model = update(create_test_model(""), Message::Resize(40, 10));
    assert_eq!(model.text_area_width(), 40);
    assert_eq!(model.text_area_height(), 8);
}

// --- side effects ---

#[test]
fn test_cut_then_paste_through_app_clipboard() {
    let mut app = create_test_app();
    let mut model = create_test_model("hello\nworld");
    model.session.buffer_mut().select_range(6, 11);

    app.dispatch(&mut model, Message::Cut);
    assert_eq!(model.session.buffer().text(), "hello\n");
    assert_eq!(model.session.buffer().cursor(), 6);

    app.dispatch(&mut model, Message::EditorMoveToStart);
    app.dispatch(&mut model, Message::Paste);
    assert_eq!(model.session.buffer().text(), "worldhello\n");
    assert_eq!(model.session.buffer().cursor(), 5);
}

#[test]
fn test_copy_leaves_document_unchanged() {
    let mut app = create_test_app();
    let mut model = create_test_model("abc");
    model.session.buffer_mut().select_all();
    app.dispatch(&mut model, Message::Copy);
    assert_eq!(model.session.buffer().text(), "abc");
    assert!(!model.session.buffer().is_dirty());

    app.dispatch(&mut model, Message::EditorMoveToEnd);
    app.dispatch(&mut model, Message::Paste);
    assert_eq!(model.session.buffer().text(), "abcabc");
}

#[test]
fn test_paste_with_empty_clipboard_is_noop() {
    let mut app = create_test_app();
    let mut model = create_test_model("abc");
    app.dispatch(&mut model, Message::Paste);
    assert_eq!(model.session.buffer().text(), "abc");
    assert!(model.active_toast().is_none());
}

#[test]
fn test_save_as_then_save_writes_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("note.txt");
    let mut app = create_test_app();
    let mut model = create_test_model("");

    app.dispatch(&mut model, Message::EditorInsertChar('a'));
    app.dispatch(&mut model, Message::Save);
    assert!(matches!(model.prompt, Some(Prompt::SaveAs { .. })));
    app.dispatch(&mut model, Message::PromptDone(PromptOutcome::SaveAs(path.clone())));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a");
    assert_eq!(model.session.file_path(), Some(path.as_path()));
    assert_eq!(
        model.active_toast(),
        Some(("Saved note.txt", ToastLevel::Info))
    );

    app.dispatch(&mut model, Message::EditorInsertChar('b'));
    app.dispatch(&mut model, Message::Save);
    assert!(model.prompt.is_none());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "ab");
    assert!(!model.session.buffer().is_dirty());
}

#[test]
fn test_open_through_prompt_replaces_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("in.txt");
    std::fs::write(&path, "from disk").unwrap();
    let mut app = create_test_app();
    let mut model = create_test_model("old");

    app.dispatch(&mut model, Message::Open);
    app.dispatch(&mut model, Message::PromptDone(PromptOutcome::Open(path.clone())));
    assert_eq!(model.session.buffer().text(), "from disk");
    assert_eq!(model.session.buffer().cursor(), 0);
    assert_eq!(model.session.title(), "SpudPad - in.txt");
}

#[test]
fn test_open_failure_keeps_document_and_shows_error() {
    let dir = tempdir().unwrap();
    let mut app = create_test_app();
    let mut model = create_test_model("old");

    let missing = dir.path().join("missing.txt");
    app.dispatch(&mut model, Message::PromptDone(PromptOutcome::Open(missing)));
    assert_eq!(model.session.buffer().text(), "old");
    assert!(model.session.file_path().is_none());
    let (message, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Error);
    assert!(message.starts_with("Open failed"));
}

#[test]
fn test_save_failure_keeps_identity() {
    let dir = tempdir().unwrap();
    let mut app = create_test_app();
    let mut model = create_test_model("text");

    // A directory cannot be written as a file.
    let target = dir.path().to_path_buf();
    app.dispatch(&mut model, Message::PromptDone(PromptOutcome::SaveAs(target)));
    assert!(model.session.file_path().is_none());
    assert_eq!(
        model.active_toast().map(|(_, level)| level),
        Some(ToastLevel::Error)
    );
}

#[test]
fn test_failed_save_rearms_quit_warning() {
    let dir = tempdir().unwrap();
    let mut app = create_test_app();
    let mut model = create_test_model("");
    // A directory cannot be written as a file.
    model.session.attach_file(dir.path().to_path_buf());
    model = update(model, Message::EditorInsertChar('x'));

    app.dispatch(&mut model, Message::Quit);
    assert!(model.quit_confirmed);
    app.dispatch(&mut model, Message::Save);
    assert!(
        model
            .active_toast()
            .is_some_and(|(message, _)| message.starts_with("Save failed"))
    );
    assert!(!model.quit_confirmed);

    app.dispatch(&mut model, Message::Quit);
    assert!(!model.should_quit);
    assert!(model.session.buffer().is_dirty());
}

#[test]
fn test_initial_model_with_missing_file_adopts_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("new.txt");
    let app = App::new(Some(path.clone())).with_word_wrap(true);
    let model = app.initial_model((80, 24));
    assert!(model.session.buffer().is_empty());
    assert_eq!(model.session.file_path(), Some(path.as_path()));
    assert!(model.word_wrap);
}

#[test]
fn test_initial_model_loads_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("existing.txt");
    std::fs::write(&path, "line one\nline two").unwrap();
    let model = App::new(Some(path)).initial_model((80, 24));
    assert_eq!(model.session.buffer().line_count(), 2);
    assert!(model.active_toast().is_none());
}

#[test]
fn test_initial_model_with_binary_file_shows_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.bin");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    let model = App::new(Some(path)).initial_model((80, 24));
    assert!(model.session.buffer().is_empty());
    assert!(model.session.file_path().is_none());
    assert_eq!(
        model.active_toast().map(|(_, level)| level),
        Some(ToastLevel::Error)
    );
}

// --- input mapping ---

#[test]
fn test_control_shortcuts_map_to_actions() {
    let model = create_test_model("");
    let ctrl = KeyModifiers::CONTROL;
    let cases = [
        ('n', Message::NewDocument),
        ('o', Message::Open),
        ('s', Message::Save),
        ('x', Message::Cut),
        ('c', Message::Copy),
        ('v', Message::Paste),
        ('w', Message::ToggleWrap),
        ('q', Message::Quit),
    ];
    for (c, expected) in cases {
        assert_eq!(
            App::handle_event(&key(KeyCode::Char(c), ctrl), &model),
            Some(expected),
            "Ctrl+{c}"
        );
    }
}

#[test]
fn test_save_as_shortcuts() {
    let model = create_test_model("");
    let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('S'), ctrl_shift), &model),
        Some(Message::SaveAs)
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::F(12), KeyModifiers::NONE), &model),
        Some(Message::SaveAs)
    );
}

#[test]
fn test_alt_z_toggles_wrap_and_f1_toggles_help() {
    let model = create_test_model("");
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('z'), KeyModifiers::ALT), &model),
        Some(Message::ToggleWrap)
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::F(1), KeyModifiers::NONE), &model),
        Some(Message::ToggleHelp)
    );
}

#[test]
fn test_plain_and_shifted_characters_insert() {
    let model = create_test_model("");
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('A'), KeyModifiers::SHIFT), &model),
        Some(Message::EditorInsertChar('A'))
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::Left, KeyModifiers::SHIFT), &model),
        Some(Message::EditorExtendSelection(Direction::Left))
    );
}

#[test]
fn test_key_release_is_ignored() {
    let model = create_test_model("");
    let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(App::handle_event(&Event::Key(release), &model), None);
}

#[test]
fn test_any_key_hides_help() {
    let model = update(create_test_model(""), Message::ToggleHelp);
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('a'), KeyModifiers::NONE), &model),
        Some(Message::HideHelp)
    );
}

#[test]
fn test_prompt_keys_edit_input() {
    let mut model = create_test_model("");
    model.prompt = Some(Prompt::Open {
        input: "ab".to_string(),
    });
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('c'), KeyModifiers::NONE), &model),
        Some(Message::PromptInput("abc".to_string()))
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::Backspace, KeyModifiers::NONE), &model),
        Some(Message::PromptInput("a".to_string()))
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::Enter, KeyModifiers::NONE), &model),
        Some(Message::PromptDone(PromptOutcome::Open(PathBuf::from("ab"))))
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::Esc, KeyModifiers::NONE), &model),
        Some(Message::PromptDone(PromptOutcome::Cancelled))
    );
}

#[test]
fn test_discard_prompt_answers() {
    let mut model = create_test_model("text");
    model.prompt = Some(Prompt::ConfirmDiscard);
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('y'), KeyModifiers::NONE), &model),
        Some(Message::PromptDone(PromptOutcome::DiscardConfirmed))
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('n'), KeyModifiers::NONE), &model),
        Some(Message::PromptDone(PromptOutcome::Cancelled))
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('x'), KeyModifiers::NONE), &model),
        None
    );
}

#[test]
fn test_toolbar_click_maps_to_action() {
    let model = create_test_model("");
    assert_eq!(
        App::handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 0), &model),
        Some(Message::NewDocument)
    );
    assert_eq!(
        App::handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 40, 0), &model),
        Some(Message::ToggleWrap)
    );
}

#[test]
fn test_text_click_maps_to_offset() {
    let model = create_test_model("hello\nworld");
    // Row 1 is the first text row.
    assert_eq!(
        App::handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 2), &model),
        Some(Message::EditorMoveTo(9))
    );
    // Past the end of the line lands at its end.
    assert_eq!(
        App::handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 30, 1), &model),
        Some(Message::EditorMoveTo(5))
    );
    // Below the last line lands at the end of the document.
    assert_eq!(
        App::handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 10), &model),
        Some(Message::EditorMoveTo(11))
    );
}

#[test]
fn test_bracketed_paste_normalizes_line_breaks() {
    let model = create_test_model("");
    assert_eq!(
        App::handle_event(&Event::Paste("a\r\nb\rc".to_string()), &model),
        Some(Message::EditorInsertText("a\nb\nc".to_string()))
    );
}
