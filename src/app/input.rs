use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;

use crate::app::{App, Message, Model, Prompt, PromptOutcome};
use crate::editor::Direction;
use crate::ui::toolbar;

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: usize = 3;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Paste(text) => Self::handle_paste(text, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        if let Some(prompt) = &model.prompt {
            return handle_prompt_key(prompt, key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if ctrl && let KeyCode::Char(c) = key.code {
            return match c {
                'n' | 'N' => Some(Message::NewDocument),
                'o' | 'O' => Some(Message::Open),
                's' if shift => Some(Message::SaveAs),
                'S' => Some(Message::SaveAs),
                's' => Some(Message::Save),
                'x' | 'X' => Some(Message::Cut),
                'c' | 'C' => Some(Message::Copy),
                'v' | 'V' => Some(Message::Paste),
                'w' | 'W' => Some(Message::ToggleWrap),
                'a' | 'A' => Some(Message::EditorSelectAll),
                'q' | 'Q' => Some(Message::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('z' | 'Z') if alt => Some(Message::ToggleWrap),
            KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::F(12) => Some(Message::SaveAs),

            // Editing
            KeyCode::Enter => Some(Message::EditorSplitLine),
            KeyCode::Backspace => Some(Message::EditorDeleteBack),
            KeyCode::Delete => Some(Message::EditorDeleteForward),
            KeyCode::Tab => Some(Message::EditorInsertChar('\t')),
            KeyCode::Char(c) if !alt => Some(Message::EditorInsertChar(c)),

            // Navigation
            KeyCode::Left if ctrl => Some(Message::EditorMoveWordLeft),
            KeyCode::Right if ctrl => Some(Message::EditorMoveWordRight),
            KeyCode::Home if ctrl => Some(Message::EditorMoveToStart),
            KeyCode::End if ctrl => Some(Message::EditorMoveToEnd),
            KeyCode::Left => Some(arrow(Direction::Left, shift)),
            KeyCode::Right => Some(arrow(Direction::Right, shift)),
            KeyCode::Up => Some(arrow(Direction::Up, shift)),
            KeyCode::Down => Some(arrow(Direction::Down, shift)),
            KeyCode::Home => Some(Message::EditorMoveHome),
            KeyCode::End => Some(Message::EditorMoveEnd),
            KeyCode::PageUp => Some(Message::EditorPageUp),
            KeyCode::PageDown => Some(Message::EditorPageDown),
            KeyCode::Esc => Some(Message::EditorClearSelection),

            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return matches!(mouse.kind, MouseEventKind::Down(_)).then_some(Message::HideHelp);
        }
        if model.prompt.is_some() {
            return None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row == 0 {
                    return toolbar::action_at(model.word_wrap, mouse.column)
                        .map(toolbar::ToolbarAction::message);
                }
                model
                    .offset_at_cell(mouse.column, mouse.row)
                    .map(Message::EditorMoveTo)
            }
            MouseEventKind::Drag(MouseButton::Left) if model.mouse_selecting => {
                // Dragging past the text area edges keeps selecting at the edge.
                let area = model.text_area();
                if area.height == 0 || area.width == 0 {
                    return None;
                }
                let row = mouse.row.clamp(area.y, area.y + area.height - 1);
                let col = mouse.column.clamp(area.x, area.x + area.width - 1);
                model
                    .offset_at_cell(col, row)
                    .map(Message::EditorSelectTo)
            }
            MouseEventKind::Up(MouseButton::Left) if model.mouse_selecting => {
                Some(Message::EditorEndMouseSelection)
            }
            MouseEventKind::ScrollUp => Some(Message::EditorScrollUp(WHEEL_ROWS)),
            MouseEventKind::ScrollDown => Some(Message::EditorScrollDown(WHEEL_ROWS)),
            _ => None,
        }
    }

    fn handle_paste(text: &str, model: &Model) -> Option<Message> {
        if model.help_visible {
            return None;
        }
        let text = normalize_newlines(text);
        match &model.prompt {
            Some(prompt) => {
                let input = prompt.input()?;
                let first_line = text.lines().next().unwrap_or_default();
                Some(Message::PromptInput(format!("{input}{first_line}")))
            }
            None if text.is_empty() => None,
            None => Some(Message::EditorInsertText(text)),
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

fn handle_prompt_key(prompt: &Prompt, key: KeyEvent) -> Option<Message> {
    if prompt.input().is_none() {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => {
                Some(Message::PromptDone(PromptOutcome::DiscardConfirmed))
            }
            KeyCode::Esc | KeyCode::Char('n' | 'N') => {
                Some(Message::PromptDone(PromptOutcome::Cancelled))
            }
            _ => None,
        };
    }

    let input = prompt.input().unwrap_or_default();
    match key.code {
        KeyCode::Esc => Some(Message::PromptDone(PromptOutcome::Cancelled)),
        KeyCode::Enter => Some(Message::PromptDone(prompt.accept())),
        KeyCode::Backspace => {
            let mut next = input.to_string();
            next.pop();
            Some(Message::PromptInput(next))
        }
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            let mut next = input.to_string();
            next.push(c);
            Some(Message::PromptInput(next))
        }
        _ => None,
    }
}

const fn arrow(direction: Direction, shift: bool) -> Message {
    if shift {
        Message::EditorExtendSelection(direction)
    } else {
        Message::EditorMoveCursor(direction)
    }
}

/// Terminals deliver pasted line breaks as `\r` or `\r\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

