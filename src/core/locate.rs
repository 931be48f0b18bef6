//! Key locator: maps flat keys back to the text of a translation document.
//!
//! One scan over the document collects every string token written as an
//! object key (`"name"` followed by `:`), decodes JSON escapes, and keeps the
//! first occurrence of each name. A key is then located by its last segment
//! only. The parent path is not followed, so when the same leaf name appears
//! under several parents every one of them anchors to the first occurrence in
//! the text. The returned range covers the key name between the quotes, as
//! spelled in the source.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::core::{KeyPosition, Position, TextRange, leaf_segment};

/// A complete JSON string token, escapes included.
static STRING_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\]|\\.)*""#).unwrap());

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 0 starts at offset 0, line 1 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the zero-based line for a byte offset using binary search.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line,
        Err(line) => line - 1,
    }
}

/// Locates keys in one document. Key tokens are indexed once on creation.
pub struct KeyLocator<'a> {
    content: &'a str,
    line_index: Vec<usize>,
    /// Decoded key name → byte span of its first occurrence, between the quotes.
    key_tokens: HashMap<String, (usize, usize)>,
}

impl<'a> KeyLocator<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            line_index: build_line_index(content),
            key_tokens: index_key_tokens(content),
        }
    }

    /// Range of the first `"<last segment>":` key token in the document.
    pub fn locate(&self, path: &str) -> Option<TextRange> {
        let (start, end) = *self.key_tokens.get(leaf_segment(path))?;
        Some(TextRange::new(self.position(start), self.position(end)))
    }

    /// Positions for every path that can be located, in input order.
    pub fn locate_all<'p>(&self, paths: impl IntoIterator<Item = &'p str>) -> Vec<KeyPosition> {
        paths
            .into_iter()
            .filter_map(|path| self.locate(path).map(|range| KeyPosition::new(path, range)))
            .collect()
    }

    fn position(&self, offset: usize) -> Position {
        let line = offset_to_line(&self.line_index, offset);
        let line_start = self.line_index[line];
        let character = self.content[line_start..offset].chars().count();
        Position::new(line, character)
    }
}

/// First occurrence of every object key in `content`.
///
/// Outside strings JSON contains no quotes, so scanning string tokens left to
/// right never starts inside one. Tokens that fail to decode are skipped.
fn index_key_tokens(content: &str) -> HashMap<String, (usize, usize)> {
    let mut tokens = HashMap::new();
    for token in STRING_TOKEN_REGEX.find_iter(content) {
        if !content[token.end()..].trim_start().starts_with(':') {
            continue;
        }
        let Ok(name) = serde_json::from_str::<String>(token.as_str()) else {
            continue;
        };
        tokens
            .entry(name)
            .or_insert((token.start() + 1, token.end() - 1));
    }
    tokens
}

/// Locate a single key. See [`KeyLocator::locate`].
pub fn locate(content: &str, path: &str) -> Option<TextRange> {
    KeyLocator::new(content).locate(path)
}

/// First key position whose range contains `position`.
pub fn key_at(positions: &[KeyPosition], position: Position) -> Option<&KeyPosition> {
    positions.iter().find(|p| p.range.contains(position))
}
