//! Bracket nesting.
//!
//! Tracks how many round, square and curly brackets are open, in which
//! order, and where each one was opened. Each kind is counted on its own:
//! a closer pops the most recent opener of its kind, wherever it sits, so
//! crossed brackets like `[(])` balance. A closer takes the token kind its
//! opener chose (a `}` closes a dict or a set depending on how its `{` was
//! classified).
//!
//! The module also hosts the two bounded lookaheads the scanner needs:
//! [`classify_brace`] (dict or set) and [`find_call_close`] (end of a
//! print-command call). Both step over string literals and comments so a
//! quoted `:` or `)` never counts.

use std::fmt;
use std::ops::ControlFlow;

use smallvec::SmallVec;

use crate::lex_error::DelimiterError;
use crate::literal::string::{literal_prefix, quoted_len};
use crate::position::Position;
use crate::token::TokenKind;

/// The three bracket families.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BracketKind {
    Round,
    Square,
    Curly,
}

impl BracketKind {
    pub fn from_open(c: char) -> Option<Self> {
        match c {
            '(' => Some(BracketKind::Round),
            '[' => Some(BracketKind::Square),
            '{' => Some(BracketKind::Curly),
            _ => None,
        }
    }

    pub fn from_close(c: char) -> Option<Self> {
        match c {
            ')' => Some(BracketKind::Round),
            ']' => Some(BracketKind::Square),
            '}' => Some(BracketKind::Curly),
            _ => None,
        }
    }

    pub fn open(self) -> char {
        match self {
            BracketKind::Round => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            BracketKind::Round => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
        }
    }

    fn slot(self) -> usize {
        match self {
            BracketKind::Round => 0,
            BracketKind::Square => 1,
            BracketKind::Curly => 2,
        }
    }
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BracketKind::Round => "round",
            BracketKind::Square => "square",
            BracketKind::Curly => "curly",
        })
    }
}

/// What an open bracket delimits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Tuple,
    List,
    Dict,
    Set,
    /// Argument list of a print-command call. Its parentheses belong to
    /// the command token and emit no delimiter tokens of their own.
    Call,
}

impl Shape {
    pub fn bracket(self) -> BracketKind {
        match self {
            Shape::Tuple | Shape::Call => BracketKind::Round,
            Shape::List => BracketKind::Square,
            Shape::Dict | Shape::Set => BracketKind::Curly,
        }
    }

    /// Token emitted for the opener, if any.
    pub fn open_kind(self) -> Option<TokenKind> {
        match self {
            Shape::Tuple => Some(TokenKind::TupleStart),
            Shape::List => Some(TokenKind::ListStart),
            Shape::Dict => Some(TokenKind::DictStart),
            Shape::Set => Some(TokenKind::SetStart),
            Shape::Call => None,
        }
    }

    /// Token emitted for the closer, if any.
    pub fn close_kind(self) -> Option<TokenKind> {
        match self {
            Shape::Tuple => Some(TokenKind::TupleEnd),
            Shape::List => Some(TokenKind::ListEnd),
            Shape::Dict => Some(TokenKind::DictEnd),
            Shape::Set => Some(TokenKind::SetEnd),
            Shape::Call => None,
        }
    }
}

#[derive(Clone, Debug)]
struct OpenBracket {
    shape: Shape,
    at: Position,
}

/// Open brackets of one scan.
///
/// # Invariants
///
/// - `counts[k]` equals the number of entries in `open` whose bracket is `k`.
/// - Counts never go negative: a closer with nothing open is an error and
///   leaves the tracker untouched.
#[derive(Clone, Debug, Default)]
pub struct NestingTracker {
    counts: [u32; 3],
    open: SmallVec<[OpenBracket; 8]>,
}

impl NestingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an opener at `at`.
    pub fn open(&mut self, shape: Shape, at: Position) {
        self.counts[shape.bracket().slot()] += 1;
        self.open.push(OpenBracket { shape, at });
    }

    /// Pop the most recent opener of `bracket`'s kind.
    ///
    /// Fails without changing anything when no bracket of that kind is open.
    pub fn close(&mut self, bracket: BracketKind) -> Result<Shape, DelimiterError> {
        let Some(index) = self
            .open
            .iter()
            .rposition(|open| open.shape.bracket() == bracket)
        else {
            return Err(DelimiterError::Unopened { bracket });
        };
        let closed = self.open.remove(index);
        self.counts[bracket.slot()] -= 1;
        Ok(closed.shape)
    }

    /// Number of currently open brackets of one kind.
    pub fn count(&self, bracket: BracketKind) -> u32 {
        self.counts[bracket.slot()]
    }

    /// Total number of open brackets.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Shape and opening position of the innermost open bracket.
    pub fn innermost(&self) -> Option<(Shape, &Position)> {
        self.open.last().map(|open| (open.shape, &open.at))
    }

    /// Report the innermost bracket still open, located at its opener.
    pub fn check_closed(&self) -> Result<(), (DelimiterError, Position)> {
        match self.open.last() {
            None => Ok(()),
            Some(open) => Err((
                DelimiterError::Unclosed {
                    bracket: open.shape.bracket(),
                    line: open.at.line,
                    column: open.at.column,
                },
                open.at.clone(),
            )),
        }
    }
}

/// Visit every character of `text` that lies outside string literals and
/// comments, until `visit` breaks.
///
/// `visit` receives the byte offset and the remaining text. Returns `None`
/// if the text ends first, or if a literal or block comment is left open
/// (the lookahead cannot tell what follows it).
fn walk_code<T>(text: &str, mut visit: impl FnMut(usize, &str) -> ControlFlow<T>) -> Option<T> {
    let mut i = 0;
    while i < text.len() {
        let rest = &text[i..];
        if let Some(prefix) = literal_prefix(rest) {
            i += prefix.len + quoted_len(&rest[prefix.len..])?;
            continue;
        }
        if rest.starts_with('#') {
            i += rest.find(['\n', '\r']).unwrap_or(rest.len());
            continue;
        }
        if let Some(body) = rest.strip_prefix("/*") {
            i += 2 + body.find("*/")? + 2;
            continue;
        }
        if let ControlFlow::Break(found) = visit(i, rest) {
            return Some(found);
        }
        i += rest.chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Decide whether the `{` just before `text` opens a dict or a set.
///
/// A `:` at the brace's own depth (not inside nested brackets, and not the
/// first half of `:=`) means keyed pairs. Anything else, including `{}` and
/// a brace that is never closed, is a set.
pub fn classify_brace(text: &str) -> Shape {
    let mut depth = 0u32;
    let found = walk_code(text, |_, rest| {
        let b = rest.as_bytes();
        match b[0] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => {
                if depth == 0 {
                    return ControlFlow::Break(Shape::Set);
                }
                depth -= 1;
            }
            b':' if depth == 0 && b.get(1) != Some(&b'=') => {
                return ControlFlow::Break(Shape::Dict);
            }
            _ => {}
        }
        ControlFlow::Continue(())
    });
    found.unwrap_or(Shape::Set)
}

/// Byte offset in `text` of the `)` closing the `(` just before it.
///
/// Only parentheses are counted; other brackets are checked by the scan
/// of the arguments itself.
pub fn find_call_close(text: &str) -> Option<usize> {
    let mut depth = 0u32;
    walk_code(text, |i, rest| {
        match rest.as_bytes()[0] {
            b'(' => depth += 1,
            b')' if depth == 0 => return ControlFlow::Break(i),
            b')' => depth -= 1,
            _ => {}
        }
        ControlFlow::Continue(())
    })
}
