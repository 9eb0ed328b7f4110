use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;
use crate::editor::Selection;

use super::layout::{self, VisualRow};
use super::{overlays, status, toolbar};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let regions = layout::regions(area, model.active_toast().is_some());

    toolbar::render_toolbar(model, frame, regions.toolbar);
    render_text_area(model, frame, regions.text);
    if let Some(toast_area) = regions.toast {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, regions.status);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    } else if let Some(prompt) = &model.prompt {
        overlays::render_prompt_overlay(prompt, frame, area);
    }
}

fn render_text_area(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = model.session.buffer();
    let rows = layout::visible_rows(
        buf,
        model.scroll_top,
        usize::from(area.height),
        usize::from(area.width),
        model.word_wrap,
    );
    let hscroll = if model.word_wrap {
        0
    } else {
        model.horizontal_offset
    };
    let highlight = Highlight {
        cursor: buf.cursor(),
        selection: buf.selection(),
        len: buf.len_chars(),
    };

    let mut content: Vec<Line> = Vec::with_capacity(rows.len());
    let mut line_cache: Option<(usize, usize, Vec<char>)> = None;
    for row in &rows {
        if line_cache.as_ref().is_none_or(|(idx, _, _)| *idx != row.line) {
            let chars = buf.line_at(row.line).unwrap_or_default().chars().collect();
            line_cache = Some((row.line, buf.line_start(row.line), chars));
        }
        if let Some((_, line_start, chars)) = &line_cache {
            content.push(row_line(&highlight, row, *line_start, chars, hscroll));
        }
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

struct Highlight {
    cursor: usize,
    selection: Option<Selection>,
    len: usize,
}

impl Highlight {
    fn style_at(&self, offset: usize) -> Style {
        if offset == self.cursor {
            Style::default().bg(Color::White).fg(Color::Black)
        } else if self
            .selection
            .is_some_and(|sel| sel.start <= offset && offset < sel.end)
        {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        } else {
            Style::default()
        }
    }
}

fn row_line(
    highlight: &Highlight,
    row: &VisualRow,
    line_start: usize,
    chars: &[char],
    hscroll: usize,
) -> Line<'static> {
    let mut cells: Vec<(String, Style)> = Vec::new();
    let mut display_col = 0;
    for col in row.cols.clone() {
        let ch = chars[col];
        let offset = line_start + col;
        let width = layout::char_width(ch);
        let start = display_col;
        display_col += width;
        if start < hscroll {
            if display_col <= hscroll {
                continue;
            }
            // Wide character cut by the left edge: keep its visible columns blank.
            cells.push((" ".repeat(display_col - hscroll), highlight.style_at(offset)));
            continue;
        }
        let mut text = layout::display_text(ch);
        if text.is_empty() && offset == highlight.cursor {
            text.push(' ');
        }
        cells.push((text, highlight.style_at(offset)));
    }

    // The cell after the last character shows the cursor or a selected newline.
    if row.last && display_col >= hscroll {
        let offset = line_start + row.cols.end;
        let style = highlight.style_at(offset);
        if offset == highlight.cursor || (offset < highlight.len && style != Style::default()) {
            cells.push((" ".to_string(), style));
        }
    }

    Line::from(merge_cells(cells))
}

fn merge_cells(cells: Vec<(String, Style)>) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current: Option<(String, Style)> = None;
    for (text, style) in cells {
        match &mut current {
            Some((acc, acc_style)) if *acc_style == style => acc.push_str(&text),
            _ => {
                if let Some((acc, acc_style)) = current.take() {
                    spans.push(Span::styled(acc, acc_style));
                }
                current = Some((text, style));
            }
        }
    }
    if let Some((acc, style)) = current {
        spans.push(Span::styled(acc, style));
    }
    spans
}
