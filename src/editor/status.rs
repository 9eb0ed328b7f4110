use std::fmt;

/// Cursor position and document size as shown in the status line.
///
/// Line and column are 1-based; the column counts code points since the
/// last `\n` before the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSummary {
    pub line: usize,
    pub column: usize,
    pub characters: usize,
}

impl fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ln {}, Col {}   |   {} characters",
            self.line, self.column, self.characters
        )
    }
}
