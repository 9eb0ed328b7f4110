//! Screen geometry shared by rendering, scrolling and mouse hit-testing.
//!
//! The text area is a list of visual rows. Without word wrap every line is
//! one row; with word wrap a line is split into segments that each fit the
//! text area width.

use std::ops::Range;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

use crate::editor::EditorBuffer;

/// Display columns a tab occupies.
pub const TAB_WIDTH: usize = 4;

/// Terminal columns used to draw `ch`.
pub fn char_width(ch: char) -> usize {
    match ch {
        '\t' => TAB_WIDTH,
        _ => ch.width().unwrap_or(0),
    }
}

/// The text drawn for `ch`. Control characters draw as nothing.
pub fn display_text(ch: char) -> String {
    match ch {
        '\t' => " ".repeat(TAB_WIDTH),
        c if c.is_control() => String::new(),
        c => c.to_string(),
    }
}

/// Split a line into segments no wider than `width` display columns.
///
/// Breaks after the last whitespace that fits; a word wider than the whole
/// row is broken mid-word. Always returns at least one (possibly empty)
/// segment, and segments cover `0..chars.len()` without gaps.
pub fn wrap_segments(chars: &[char], width: usize) -> Vec<Range<usize>> {
    let width = width.max(1);
    let mut segments = Vec::new();
    let mut start = 0;
    let mut col = 0;
    let mut last_break: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        let w = char_width(chars[i]);
        if col + w > width && i > start {
            // Whitespace may hang past the edge so breaks land after it.
            if chars[i].is_whitespace() {
                col += w;
                last_break = Some(i + 1);
                i += 1;
                continue;
            }
            let brk = match last_break {
                Some(b) if b > start => b,
                _ => i,
            };
            segments.push(start..brk);
            start = brk;
            col = chars[start..i].iter().map(|&c| char_width(c)).sum();
            last_break = None;
            continue;
        }
        col += w;
        if chars[i].is_whitespace() {
            last_break = Some(i + 1);
        }
        i += 1;
    }
    segments.push(start..chars.len());
    segments
}

/// Index of the segment that shows column `col`.
///
/// A column equal to a segment's end belongs to the following segment,
/// except at the end of the line.
pub fn segment_for_col(segments: &[Range<usize>], col: usize) -> usize {
    segments
        .iter()
        .position(|seg| col < seg.end)
        .unwrap_or_else(|| segments.len().saturating_sub(1))
}

/// One row of the text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualRow {
    /// Zero-based line index.
    pub line: usize,
    /// Segment index within the line.
    pub segment: usize,
    /// Columns of the line shown on this row.
    pub cols: Range<usize>,
    /// Whether this row ends the line.
    pub last: bool,
}

/// Segments for a whole line, honoring the wrap mode.
pub fn line_segments(
    buffer: &EditorBuffer,
    line: usize,
    width: usize,
    wrap: bool,
) -> Vec<Range<usize>> {
    let chars: Vec<char> = buffer.line_at(line).unwrap_or_default().chars().collect();
    if wrap {
        wrap_segments(&chars, width)
    } else {
        vec![0..chars.len()]
    }
}

/// Rows visible from the top position `(top_line, top_segment)`.
pub fn visible_rows(
    buffer: &EditorBuffer,
    top: (usize, usize),
    height: usize,
    width: usize,
    wrap: bool,
) -> Vec<VisualRow> {
    let mut rows = Vec::with_capacity(height);
    let (mut line, mut skip) = top;
    while rows.len() < height && line < buffer.line_count() {
        let segments = line_segments(buffer, line, width, wrap);
        let count = segments.len();
        for (segment, cols) in segments.into_iter().enumerate().skip(skip) {
            if rows.len() == height {
                break;
            }
            rows.push(VisualRow {
                line,
                segment,
                cols,
                last: segment + 1 == count,
            });
        }
        skip = 0;
        line += 1;
    }
    rows
}

/// Earliest top position that still shows `(line, segment)` on the last row
/// of a `height`-row text area.
pub fn lowest_top_for(
    buffer: &EditorBuffer,
    line: usize,
    segment: usize,
    height: usize,
    width: usize,
    wrap: bool,
) -> (usize, usize) {
    let height = height.max(1);
    let mut used = segment + 1;
    if used >= height {
        return (line, used - height);
    }
    for prev in (0..line).rev() {
        let count = line_segments(buffer, prev, width, wrap).len();
        if used + count >= height {
            return (prev, used + count - height);
        }
        used += count;
    }
    (0, 0)
}

/// Display column of code-point column `col` within `line`.
pub fn display_col(line: &str, col: usize) -> usize {
    line.chars().take(col).map(char_width).sum()
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub toolbar: Rect,
    pub text: Rect,
    pub toast: Option<Rect>,
    pub status: Rect,
}

/// Toolbar on top, status bar at the bottom, optional toast row above it.
pub fn regions(area: Rect, toast_active: bool) -> Regions {
    let toolbar = Rect {
        height: area.height.min(1),
        ..area
    };
    let status = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.saturating_sub(1).min(1),
        ..area
    };
    let footer_rows = 1 + u16::from(toast_active);
    let toast = toast_active.then(|| Rect {
        y: area.y + area.height.saturating_sub(2),
        height: 1,
        ..area
    });
    let text = Rect {
        y: area.y + toolbar.height,
        height: area.height.saturating_sub(toolbar.height + footer_rows),
        ..area
    };
    Regions {
        toolbar,
        text,
        toast: toast.filter(|_| text.height > 0),
        status,
    }
}

/// Whether a cell lies inside `rect`.
pub const fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// Column within a row's segment under display column `x` (relative to the
/// row start). Clicks past the end land on the end of the segment.
pub fn col_at_display_x(chars: &[char], row: &VisualRow, x: usize) -> usize {
    let mut acc = 0;
    for col in row.cols.clone() {
        let w = char_width(chars[col]);
        if x < acc + w.max(1) {
            return col;
        }
        acc += w;
    }
    if row.last || row.cols.is_empty() {
        row.cols.end
    } else {
        row.cols.end - 1
    }
}
