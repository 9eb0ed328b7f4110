use ropey::Rope;

use super::status::StatusSummary;

/// Line/column view of the cursor, both zero-based and counted in code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (code points since the start of the line).
    pub col: usize,
}

impl Position {
    /// Create a position at a specific line and column.
    pub const fn at(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A `[start, end)` range of code-point offsets into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Build a selection from two offsets in either order.
    pub const fn between(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Number of code points covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A text buffer backed by a rope data structure.
///
/// The cursor is a single linear offset into the document's code points.
/// A selection, when present, spans from `anchor` to the cursor.
pub struct EditorBuffer {
    rope: Rope,
    cursor: usize,
    anchor: Option<usize>,
    /// Remembered column for vertical movement (sticky column).
    col_memory: Option<usize>,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: 0,
            anchor: None,
            col_memory: None,
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The cursor as a code-point offset.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The cursor as a line/column pair.
    pub fn position(&self) -> Position {
        let line = self.rope.char_to_line(self.cursor);
        Position::at(line, self.cursor - self.rope.line_to_char(line))
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of code points in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without its trailing `\n`).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let s = line.to_string();
        Some(s.strip_suffix('\n').map_or_else(|| s.clone(), ToOwned::to_owned))
    }

    /// Code-point offset of the first character of a line.
    pub fn line_start(&self, line_idx: usize) -> usize {
        self.rope
            .line_to_char(line_idx.min(self.rope.len_lines().saturating_sub(1)))
    }

    /// Length of a line in code points (without trailing `\n`).
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Write the full text, byte for byte, to `writer`.
    ///
    /// # Errors
    /// Returns any error produced by the writer.
    pub fn write_to<W: std::io::Write>(&self, writer: W) -> std::io::Result<()> {
        self.rope.write_to(writer)
    }

    /// Line, column and character count for the status line.
    pub fn status(&self) -> StatusSummary {
        let position = self.position();
        StatusSummary {
            line: position.line + 1,
            column: position.col + 1,
            characters: self.rope.len_chars(),
        }
    }

    // --- Selection ---

    /// The active selection, if any. Empty ranges count as no selection.
    pub fn selection(&self) -> Option<Selection> {
        let anchor = self.anchor?;
        let selection = Selection::between(anchor, self.cursor);
        (!selection.is_empty()).then_some(selection)
    }

    /// Text covered by the active selection.
    pub fn selected_text(&self) -> Option<String> {
        let selection = self.selection()?;
        Some(self.rope.slice(selection.start..selection.end).to_string())
    }

    /// Select `[start, end)`, leaving the cursor at `end`. Offsets are clamped.
    pub fn select_range(&mut self, start: usize, end: usize) {
        let len = self.rope.len_chars();
        self.anchor = Some(start.min(len));
        self.cursor = end.min(len);
        self.col_memory = None;
    }

    /// Select the whole document.
    pub fn select_all(&mut self) {
        self.select_range(0, self.rope.len_chars());
    }

    /// Establish a selection from a substring a host widget reports as
    /// selected, assuming the selection ends at the cursor.
    ///
    /// This is the library entry point for embedders whose text widget only
    /// reports selected text. The terminal front end tracks the anchor
    /// itself and never calls it.
    ///
    /// If the reported text is longer than everything before the cursor the
    /// bounds cannot be right, and the whole document is selected instead.
    pub fn select_reported(&mut self, selected: &str) {
        let count = selected.chars().count();
        if count == 0 {
            self.clear_selection();
            return;
        }
        let len = self.rope.len_chars();
        let end = self.cursor.min(len);
        match end.checked_sub(count) {
            Some(start) => self.select_range(start, end),
            None => self.select_all(),
        }
    }

    /// Move the cursor to `offset` while keeping (or starting) a selection,
    /// as when dragging with the mouse.
    pub fn extend_to(&mut self, offset: usize) {
        if self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        }
        self.cursor = offset.min(self.rope.len_chars());
        self.col_memory = None;
    }

    pub const fn clear_selection(&mut self) {
        self.anchor = None;
    }

    // --- Clipboard editing ---

    /// Remove the selected text and return it. Cursor moves to the start of
    /// the removed range. Returns `None` when nothing is selected.
    pub fn cut(&mut self) -> Option<String> {
        self.delete_selection()
    }

    /// The selected text, leaving the buffer untouched.
    pub fn copy(&self) -> Option<String> {
        self.selected_text()
    }

    /// Insert `text` at the cursor, replacing the selection if there is one.
    ///
    /// Returns `false` (and changes nothing) when `text` is empty.
    pub fn paste(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let len = self.rope.len_chars();
        let (start, end) = self
            .selection()
            .map_or((self.cursor, self.cursor), |sel| (sel.start, sel.end));
        let start = start.min(len);
        let end = end.clamp(start, len);
        if end > start {
            self.rope.remove(start..end);
        }
        self.rope.insert(start, text);
        self.cursor = start + text.chars().count();
        self.anchor = None;
        self.col_memory = None;
        self.dirty = true;
        true
    }

    // --- Typing ---

    /// Insert a character at the cursor, replacing any selection.
    pub fn insert_char(&mut self, ch: char) {
        self.delete_selection();
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
        self.col_memory = None;
        self.dirty = true;
    }

    /// Insert a string at the cursor, replacing any selection.
    pub fn insert_str(&mut self, s: &str) {
        self.paste(s);
    }

    /// Split the current line at the cursor (Enter key).
    pub fn split_line(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the selection, or the character before the cursor (Backspace).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.delete_selection().is_some() {
            return true;
        }
        self.anchor = None;
        if self.cursor == 0 {
            return false;
        }
        self.rope.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        self.col_memory = None;
        self.dirty = true;
        true
    }

    /// Delete the selection, or the character at the cursor (Delete key).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection().is_some() {
            return true;
        }
        self.anchor = None;
        if self.cursor >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(self.cursor..=self.cursor);
        self.col_memory = None;
        self.dirty = true;
        true
    }

    // --- Cursor movement ---

    /// Move the cursor in the given direction, collapsing any selection.
    ///
    /// With a selection active, Left and Right land on its start and end.
    pub fn move_cursor(&mut self, direction: Direction) {
        if let Some(selection) = self.selection() {
            match direction {
                Direction::Left => {
                    self.cursor = selection.start;
                    self.anchor = None;
                    self.col_memory = None;
                    return;
                }
                Direction::Right => {
                    self.cursor = selection.end;
                    self.anchor = None;
                    self.col_memory = None;
                    return;
                }
                Direction::Up | Direction::Down => {}
            }
        }
        self.anchor = None;
        self.step(direction);
    }

    /// Move the cursor while growing the selection (Shift+arrow).
    pub fn extend_selection(&mut self, direction: Direction) {
        if self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        }
        self.step(direction);
    }

    /// Move cursor to the beginning of the line (Home).
    pub fn move_home(&mut self) {
        let line = self.position().line;
        self.set_cursor(self.rope.line_to_char(line));
    }

    /// Move cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        let line = self.position().line;
        self.set_cursor(self.rope.line_to_char(line) + self.line_len(line));
    }

    /// Move cursor one word to the left (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        let Position { line, col } = self.position();
        if col == 0 {
            // Step back over the newline onto the end of the previous line.
            self.set_cursor(self.cursor.saturating_sub(1));
            return;
        }
        let chars = self.line_chars(line);
        let mut i = col;
        while i > 0 && !is_word_char(chars[i - 1]) {
            i -= 1;
        }
        while i > 0 && is_word_char(chars[i - 1]) {
            i -= 1;
        }
        self.set_cursor(self.rope.line_to_char(line) + i);
    }

    /// Move cursor one word to the right (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        let Position { line, col } = self.position();
        let chars = self.line_chars(line);
        if col >= chars.len() {
            if line + 1 < self.line_count() {
                self.set_cursor(self.rope.line_to_char(line + 1));
            }
            return;
        }
        let mut i = col;
        while i < chars.len() && is_word_char(chars[i]) {
            i += 1;
        }
        while i < chars.len() && !is_word_char(chars[i]) {
            i += 1;
        }
        self.set_cursor(self.rope.line_to_char(line) + i);
    }

    /// Move cursor to a specific line and column, clamping both.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        let line = line.min(max_line);
        let col = col.min(self.line_len(line));
        self.set_cursor(self.rope.line_to_char(line) + col);
    }

    /// Place the cursor at a code-point offset, clamped to the document.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.rope.len_chars());
        self.anchor = None;
        self.col_memory = None;
    }

    /// Move cursor to the start of the buffer (Ctrl+Home).
    pub fn move_to_start(&mut self) {
        self.set_cursor(0);
    }

    /// Move cursor to the end of the buffer (Ctrl+End).
    pub fn move_to_end(&mut self) {
        self.set_cursor(self.rope.len_chars());
    }

    // --- Private helpers ---

    fn delete_selection(&mut self) -> Option<String> {
        let selection = self.selection()?;
        let removed = self.rope.slice(selection.start..selection.end).to_string();
        self.rope.remove(selection.start..selection.end);
        self.cursor = selection.start;
        self.anchor = None;
        self.col_memory = None;
        self.dirty = true;
        Some(removed)
    }

    fn line_chars(&self, line_idx: usize) -> Vec<char> {
        self.rope
            .line(line_idx)
            .chars()
            .take(self.line_len(line_idx))
            .collect()
    }

    fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                self.col_memory = None;
            }
            Direction::Right => {
                self.cursor = (self.cursor + 1).min(self.rope.len_chars());
                self.col_memory = None;
            }
            Direction::Up => self.step_vertical(false),
            Direction::Down => self.step_vertical(true),
        }
    }

    fn step_vertical(&mut self, down: bool) {
        let Position { line, col } = self.position();
        let target = if down {
            if line + 1 >= self.line_count() {
                return;
            }
            line + 1
        } else {
            if line == 0 {
                return;
            }
            line - 1
        };
        let wanted = *self.col_memory.get_or_insert(col);
        self.cursor = self.rope.line_to_char(target) + wanted.min(self.line_len(target));
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!(
                    "Rope({} lines, {} chars)",
                    self.rope.len_lines(),
                    self.rope.len_chars()
                ),
            )
            .field("cursor", &self.cursor)
            .field("anchor", &self.anchor)
            .field("dirty", &self.dirty)
            .finish()
    }
}
