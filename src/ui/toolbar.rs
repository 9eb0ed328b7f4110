use std::ops::Range;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::{Message, Model};

/// A clickable toolbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    New,
    Open,
    Save,
    Cut,
    Copy,
    Paste,
    WordWrap,
    Help,
}

const GROUPS: &[&[ToolbarAction]] = &[
    &[ToolbarAction::New, ToolbarAction::Open, ToolbarAction::Save],
    &[ToolbarAction::Cut, ToolbarAction::Copy, ToolbarAction::Paste],
    &[ToolbarAction::WordWrap],
    &[ToolbarAction::Help],
];

const SEPARATOR: &str = "\u{2502}";

impl ToolbarAction {
    pub fn label(self, word_wrap: bool) -> &'static str {
        match self {
            Self::New => "New",
            Self::Open => "Open",
            Self::Save => "Save",
            Self::Cut => "Cut",
            Self::Copy => "Copy",
            Self::Paste => "Paste",
            Self::WordWrap if word_wrap => "[x] Word Wrap",
            Self::WordWrap => "[ ] Word Wrap",
            Self::Help => "Help",
        }
    }

    pub const fn message(self) -> Message {
        match self {
            Self::New => Message::NewDocument,
            Self::Open => Message::Open,
            Self::Save => Message::Save,
            Self::Cut => Message::Cut,
            Self::Copy => Message::Copy,
            Self::Paste => Message::Paste,
            Self::WordWrap => Message::ToggleWrap,
            Self::Help => Message::ToggleHelp,
        }
    }
}

/// Column span of every toolbar button, left to right.
pub fn toolbar_layout(word_wrap: bool) -> Vec<(ToolbarAction, Range<u16>)> {
    let mut out = Vec::new();
    let mut x: u16 = 0;
    for (idx, group) in GROUPS.iter().enumerate() {
        if idx > 0 {
            x = x.saturating_add(1);
        }
        for &action in *group {
            #[allow(clippy::cast_possible_truncation)]
            let width = action.label(word_wrap).width() as u16 + 2;
            out.push((action, x..x.saturating_add(width)));
            x = x.saturating_add(width);
        }
    }
    out
}

/// The button under column `col` (relative to the toolbar's left edge).
pub fn action_at(word_wrap: bool, col: u16) -> Option<ToolbarAction> {
    toolbar_layout(word_wrap)
        .into_iter()
        .find(|(_, span)| span.contains(&col))
        .map(|(action, _)| action)
}

pub fn render_toolbar(model: &Model, frame: &mut Frame, area: Rect) {
    let bar_style = Style::default().bg(Color::Blue).fg(Color::White);
    let sep_style = bar_style.fg(Color::Gray);
    let wrap_style = if model.word_wrap {
        bar_style.add_modifier(Modifier::BOLD)
    } else {
        bar_style
    };

    let mut spans: Vec<Span> = Vec::new();
    for (idx, group) in GROUPS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(SEPARATOR, sep_style));
        }
        for &action in *group {
            let style = if action == ToolbarAction::WordWrap {
                wrap_style
            } else {
                bar_style
            };
            spans.push(Span::styled(
                format!(" {} ", action.label(model.word_wrap)),
                style,
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), area);

    let title = if model.session.buffer().is_dirty() {
        format!("{} [modified] ", model.session.title())
    } else {
        format!("{} ", model.session.title())
    };
    #[allow(clippy::cast_possible_truncation)]
    let title_width = title.width() as u16;
    let used = toolbar_layout(model.word_wrap)
        .last()
        .map_or(0, |(_, span)| span.end);
    // Only draw the title when it fits beside the buttons.
    if used + 1 + title_width <= area.width {
        let title_area = Rect {
            x: area.x + area.width - title_width,
            width: title_width,
            ..area
        };
        frame.render_widget(
            Paragraph::new(title).style(bar_style.add_modifier(Modifier::BOLD)),
            title_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_layout_is_contiguous_with_separators() {
        let layout = toolbar_layout(false);
        assert_eq!(layout[0], (ToolbarAction::New, 0..5));
        assert_eq!(layout[1], (ToolbarAction::Open, 5..11));
        assert_eq!(layout[2], (ToolbarAction::Save, 11..17));
        // One separator cell between groups.
        assert_eq!(layout[3], (ToolbarAction::Cut, 18..23));
    }

    #[test]
    fn test_action_at_hits_buttons_and_misses_separators() {
        assert_eq!(action_at(false, 0), Some(ToolbarAction::New));
        assert_eq!(action_at(false, 16), Some(ToolbarAction::Save));
        assert_eq!(action_at(false, 17), None);
        assert_eq!(action_at(false, 18), Some(ToolbarAction::Cut));
        assert_eq!(action_at(false, 500), None);
    }

    #[test]
    fn test_wrap_label_reflects_state() {
        assert_eq!(ToolbarAction::WordWrap.label(true), "[x] Word Wrap");
        assert_eq!(ToolbarAction::WordWrap.label(false), "[ ] Word Wrap");
        assert_eq!(ToolbarAction::WordWrap.message(), Message::ToggleWrap);
    }
}
