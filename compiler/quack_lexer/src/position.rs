//! Source positions.
//!
//! A [`Position`] is the scanner's cursor value: 1-based line and column,
//! plus the absolute byte offset into the source. Token boundaries are
//! remembered by cloning the live cursor; the live cursor itself is only
//! ever moved forward with [`Position::advance`].

use std::fmt;
use std::sync::Arc;

/// Name of the source a position belongs to.
///
/// Shared between every position of a scan, so cloning a [`Position`] never
/// copies the file name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceId(Arc<str>);

impl SourceId {
    /// Name used when the caller does not provide one.
    pub const UNKNOWN: &'static str = "<unknown>";

    pub fn new(name: &str) -> Self {
        SourceId(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SourceId {
    fn default() -> Self {
        SourceId::new(Self::UNKNOWN)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cursor position inside a source text.
///
/// # Invariants
///
/// - `line` and `column` start at 1, `index` at 0.
/// - `index` is a byte offset and only grows during a scan.
/// - `line`/`column` are exactly what replaying [`advance`](Self::advance)
///   over the consumed characters from the start produces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub index: usize,
    pub source_id: SourceId,
}

impl Position {
    /// Position of the first character of `source_id`.
    pub fn start(source_id: SourceId) -> Self {
        Position {
            line: 1,
            column: 1,
            index: 0,
            source_id,
        }
    }

    /// Step over `consumed`.
    ///
    /// A newline moves to column 1 of the next line; any other character
    /// moves one column right. The byte offset grows by the UTF-8 width of
    /// the character.
    #[inline]
    pub fn advance(&mut self, consumed: char) {
        self.index += consumed.len_utf8();
        if consumed == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Returns `true` at the first column of a line.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.column == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source_id, self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
