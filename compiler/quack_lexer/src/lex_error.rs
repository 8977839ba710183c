//! Lexer error types.
//!
//! Every failure carries WHERE (`source_id`, `line`, `column`, byte
//! `index`), WHAT (`kind` and its rendered `message`) and a bounded
//! `context` snippet of the failing line. Errors are terminal: the scan
//! that produced one is abandoned and its partial tokens are dropped.

use crate::nesting::BracketKind;
use crate::position::{Position, SourceId};
use crate::syntax::ConfigError;

/// Characters of context kept on each side of the failure column.
pub const CONTEXT_RADIUS: usize = 32;

/// A lexer error with its location and a snippet of the failing line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "{source_id}:{line}:{column}: {message}\n{}",
    render_context(.context, .caret)
)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub message: String,
    pub source_id: SourceId,
    pub line: u32,
    pub column: u32,
    pub index: usize,
    /// The failing line, clipped to [`CONTEXT_RADIUS`] characters around the
    /// failure column.
    pub context: String,
    /// Character offset of the failure inside `context`.
    pub caret: usize,
}

impl LexError {
    /// Build an error located at `at` inside `source`.
    #[cold]
    pub fn at(kind: LexErrorKind, at: &Position, source: &str) -> Self {
        let (context, caret) = context_snippet(source, at.index);
        LexError {
            message: kind.to_string(),
            kind,
            source_id: at.source_id.clone(),
            line: at.line,
            column: at.column,
            index: at.index,
            context,
            caret,
        }
    }

    /// Error raised before any source was looked at.
    #[cold]
    pub fn configuration(error: ConfigError, source_id: SourceId) -> Self {
        let kind = LexErrorKind::InvalidConfiguration(error);
        LexError {
            message: kind.to_string(),
            kind,
            source_id,
            line: 1,
            column: 1,
            index: 0,
            context: String::new(),
            caret: 0,
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    /// A string, bytes literal or block comment reached end of input.
    #[error("unterminated {0}")]
    UnterminatedLiteral(Unterminated),
    /// A numeral that does not form a valid number.
    #[error("invalid number `{raw}`: {reason}")]
    InvalidNumber { raw: String, reason: NumberError },
    /// A bracket closed without an opener, or never closed.
    #[error("{0}")]
    UnmatchedDelimiter(DelimiterError),
    /// Indentation that does not line up with an enclosing block.
    #[error("inconsistent indentation: {0}")]
    InconsistentIndentation(IndentError),
    /// No handler recognizes the character under the cursor.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char },
    /// The keyword configuration was rejected.
    #[error("invalid syntax configuration: {0}")]
    InvalidConfiguration(ConfigError),
}

/// Which construct was left open.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Unterminated {
    #[error("string literal (missing closing `{quote}`)")]
    String { quote: char },
    #[error("bytes literal (missing closing `{quote}`)")]
    Bytes { quote: char },
    #[error("block comment (missing closing `*/`)")]
    BlockComment,
}

/// Why a numeral was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    #[error("invalid digit {digit:?} for base {radix}")]
    InvalidDigit { digit: char, radix: u32 },
    #[error("expected digits after `{prefix}`")]
    MissingDigits { prefix: &'static str },
    #[error("expected digits after the decimal point")]
    MissingFraction,
    #[error("more than one decimal point")]
    RepeatedDecimalPoint,
    #[error("expected digits in the exponent")]
    EmptyExponent,
    #[error("misplaced `_` separator")]
    MisplacedSeparator,
    #[error("integer does not fit in 64 bits")]
    IntegerOverflow,
    #[error("float is out of range")]
    FloatOutOfRange,
}

/// Bracket bookkeeping failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DelimiterError {
    #[error("unmatched closing {bracket} bracket `{}`", .bracket.close())]
    Unopened { bracket: BracketKind },
    #[error(
        "unclosed {bracket} bracket `{}` opened at {line}:{column}",
        .bracket.open()
    )]
    Unclosed {
        bracket: BracketKind,
        line: u32,
        column: u32,
    },
}

/// Indentation failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IndentError {
    #[error("dedent to {width} spaces does not match any enclosing level (nearest is {nearest})")]
    Misaligned { width: usize, nearest: usize },
    #[error("indentation stack could not be unwound (levels left: {levels:?})")]
    Unresolved { levels: Vec<usize> },
}

/// Cut the line around byte `index` down to a bounded snippet.
///
/// Returns the snippet and the character offset of `index` inside it.
pub fn context_snippet(source: &str, index: usize) -> (String, usize) {
    let mut index = index.min(source.len());
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    let line_start = source[..index].rfind('\n').map_or(0, |nl| nl + 1);
    let line_end = source[index..]
        .find('\n')
        .map_or(source.len(), |nl| index + nl);

    let before: Vec<char> = source[line_start..index].chars().collect();
    let kept_before = &before[before.len().saturating_sub(CONTEXT_RADIUS)..];
    let after = source[index..line_end].trim_end_matches('\r');

    let mut snippet: String = kept_before.iter().collect();
    snippet.extend(after.chars().take(CONTEXT_RADIUS));
    (snippet, kept_before.len())
}

fn render_context(context: &str, caret: &usize) -> String {
    format!("  | {context}\n  | {:>width$}", "^", width = caret + 1)
}

#[cfg(test)]
mod tests;
