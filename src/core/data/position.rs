use std::fmt;

use serde::Serialize;

/// Zero-based line and column in a document.
///
/// Columns count Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    /// One-based `line:col`, as printed in terminal output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Half-open range `[start, end)` in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// True if the cursor sits on the range, including right after its last character.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }
}

/// Where the key token of a flat key sits in one document's raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPosition {
    pub path: String,
    pub range: TextRange,
}

impl KeyPosition {
    pub fn new(path: impl Into<String>, range: TextRange) -> Self {
        Self {
            path: path.into(),
            range,
        }
    }
}
