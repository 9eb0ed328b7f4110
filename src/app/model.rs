use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::editor::Session;
use crate::ui::layout;

use super::prompt::Prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The document being edited and the file it belongs to
    pub session: Session,
    /// Whether long lines wrap at the text area edge
    pub word_wrap: bool,
    /// Terminal size as (width, height)
    pub terminal_size: (u16, u16),
    /// First visible row as (line, wrapped segment)
    pub scroll_top: (usize, usize),
    /// Display columns scrolled off the left edge (no-wrap mode only)
    pub horizontal_offset: usize,
    pub help_visible: bool,
    /// Active modal prompt, if any
    pub prompt: Option<Prompt>,
    toast: Option<Toast>,
    /// A mouse drag selection is in progress
    pub mouse_selecting: bool,
    pub should_quit: bool,
    /// Quit was pressed once with unsaved changes
    pub quit_confirmed: bool,
    pub config_global_path: Option<PathBuf>,
    pub config_local_path: Option<PathBuf>,
}

impl Model {
    /// Create a new model around a session.
    pub const fn new(session: Session, terminal_size: (u16, u16)) -> Self {
        Self {
            session,
            word_wrap: false,
            terminal_size,
            scroll_top: (0, 0),
            horizontal_offset: 0,
            help_visible: false,
            prompt: None,
            toast: None,
            mouse_selecting: false,
            should_quit: false,
            quit_confirmed: false,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Screen area used for document text in the current frame layout.
    pub fn text_area(&self) -> Rect {
        let (width, height) = self.terminal_size;
        layout::regions(Rect::new(0, 0, width, height), self.toast.is_some()).text
    }

    pub fn text_area_height(&self) -> usize {
        usize::from(self.text_area().height)
    }

    pub fn text_area_width(&self) -> usize {
        usize::from(self.text_area().width)
    }

    /// Scroll back to the top-left, as after replacing the document.
    pub fn reset_view(&mut self) {
        self.scroll_top = (0, 0);
        self.horizontal_offset = 0;
        self.mouse_selecting = false;
    }

    /// Adjust scrolling so the cursor is on screen.
    pub fn ensure_cursor_visible(&mut self) {
        self.clamp_scroll();
        let height = self.text_area_height();
        let width = self.text_area_width();
        let wrap = self.word_wrap;
        let buf = self.session.buffer();
        let pos = buf.position();

        let segment = if wrap {
            let segments = layout::line_segments(buf, pos.line, width, true);
            layout::segment_for_col(&segments, pos.col)
        } else {
            0
        };
        if (pos.line, segment) < self.scroll_top {
            self.scroll_top = (pos.line, segment);
        } else {
            let lowest = layout::lowest_top_for(buf, pos.line, segment, height, width, wrap);
            if self.scroll_top < lowest {
                self.scroll_top = lowest;
            }
        }

        if wrap {
            self.horizontal_offset = 0;
            return;
        }
        let line = buf.line_at(pos.line).unwrap_or_default();
        let col = layout::display_col(&line, pos.col);
        if col < self.horizontal_offset {
            self.horizontal_offset = col;
        } else if width > 0 && col >= self.horizontal_offset + width {
            self.horizontal_offset = col + 1 - width;
        }
    }

    /// Keep the scroll position on an existing row after edits or a wrap toggle.
    fn clamp_scroll(&mut self) {
        let width = self.text_area_width();
        let buf = self.session.buffer();
        let last_line = buf.line_count().saturating_sub(1);
        let (line, segment) = self.scroll_top;
        if line > last_line {
            self.scroll_top = (last_line, 0);
            return;
        }
        let count = layout::line_segments(buf, line, width, self.word_wrap).len();
        self.scroll_top = (line, segment.min(count.saturating_sub(1)));
    }

    /// Scroll the view down by `rows` visual rows without moving the cursor.
    pub fn scroll_down(&mut self, rows: usize) {
        let width = self.text_area_width();
        let buf = self.session.buffer();
        for _ in 0..rows {
            let (line, segment) = self.scroll_top;
            let count = layout::line_segments(buf, line, width, self.word_wrap).len();
            if segment + 1 < count {
                self.scroll_top = (line, segment + 1);
            } else if line + 1 < buf.line_count() {
                self.scroll_top = (line + 1, 0);
            } else {
                break;
            }
        }
    }

    /// Scroll the view up by `rows` visual rows without moving the cursor.
    pub fn scroll_up(&mut self, rows: usize) {
        let width = self.text_area_width();
        let buf = self.session.buffer();
        for _ in 0..rows {
            match self.scroll_top {
                (line, segment) if segment > 0 => self.scroll_top = (line, segment - 1),
                (0, _) => break,
                (line, _) => {
                    let prev = line - 1;
                    let count = layout::line_segments(buf, prev, width, self.word_wrap).len();
                    self.scroll_top = (prev, count.saturating_sub(1));
                }
            }
        }
    }

    /// Document offset under a screen cell, if the cell is in the text area.
    ///
    /// Cells below the last line map to the end of the document.
    pub fn offset_at_cell(&self, col: u16, row: u16) -> Option<usize> {
        let area = self.text_area();
        if !layout::contains(area, col, row) {
            return None;
        }
        let buf = self.session.buffer();
        let rows = layout::visible_rows(
            buf,
            self.scroll_top,
            usize::from(area.height),
            usize::from(area.width),
            self.word_wrap,
        );
        let Some(visual) = rows.get(usize::from(row - area.y)) else {
            return Some(buf.len_chars());
        };
        let chars: Vec<char> = buf.line_at(visual.line).unwrap_or_default().chars().collect();
        let hscroll = if self.word_wrap {
            0
        } else {
            self.horizontal_offset
        };
        let x = usize::from(col - area.x) + hscroll;
        Some(buf.line_start(visual.line) + layout::col_at_display_x(&chars, visual, x))
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
        // The toast row takes a line from the text area.
        self.ensure_cursor_visible();
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Session::new(), (80, 24))
    }
}
