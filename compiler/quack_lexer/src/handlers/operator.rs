use crate::dispatch::Handler;
use crate::lex_error::{DelimiterError, LexError, LexErrorKind};
use crate::nesting::{classify_brace, BracketKind, Shape};
use crate::position::Position;
use crate::state::ScanState;
use crate::token::{TokenKind, TokenValue};

/// Operators and punctuation, longest spelling first.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("**", TokenKind::Power),
    ("//", TokenKind::FloorDivide),
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("->", TokenKind::Arrow),
    (":=", TokenKind::Walrus),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Multiply),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Modulo),
    ("<", TokenKind::LessThan),
    (">", TokenKind::GreaterThan),
    ("=", TokenKind::Assign),
    ("!", TokenKind::Not),
    (",", TokenKind::Comma),
    (".", TokenKind::Dot),
    (":", TokenKind::Colon),
    (";", TokenKind::Semicolon),
];

fn operator_at(text: &str) -> Option<(&'static str, TokenKind)> {
    OPERATORS
        .iter()
        .copied()
        .find(|(spelling, _)| text.starts_with(spelling))
}

/// Operators, punctuation and brackets.
///
/// Openers are recorded in the nesting tracker; `{` is classified as a
/// dict or a set by looking ahead. A closer pops the most recent opener of
/// its own kind and takes that opener's token kind.
pub struct OperatorHandler;

impl OperatorHandler {
    fn open(state: &mut ScanState<'_>, bracket: BracketKind, start: Position) {
        state.advance();
        let shape = match bracket {
            BracketKind::Round => Shape::Tuple,
            BracketKind::Square => Shape::List,
            BracketKind::Curly => classify_brace(state.rest()),
        };
        state.nesting.open(shape, start.clone());
        if let Some(kind) = shape.open_kind() {
            let raw = state.slice_from(&start);
            state.emit(kind, TokenValue::text(raw), start);
        }
    }

    fn close(
        state: &mut ScanState<'_>,
        bracket: BracketKind,
        start: Position,
    ) -> Result<(), LexError> {
        let closed = state.nesting.close(bracket);
        let kind = match closed.map(Shape::close_kind) {
            Ok(Some(kind)) => kind,
            // A call's `)` lies past the scan limit, so it never gets here.
            Ok(None) => {
                return Err(state.error(
                    LexErrorKind::UnmatchedDelimiter(DelimiterError::Unopened { bracket }),
                    &start,
                ))
            }
            Err(error) => {
                return Err(state.error(LexErrorKind::UnmatchedDelimiter(error), &start))
            }
        };
        state.advance();
        let raw = state.slice_from(&start);
        state.emit(kind, TokenValue::text(raw), start);
        Ok(())
    }
}

impl Handler for OperatorHandler {
    fn name(&self) -> &'static str {
        "operator"
    }

    fn can_handle(&self, state: &ScanState<'_>) -> bool {
        state.current().is_some_and(|c| {
            BracketKind::from_open(c).is_some() || BracketKind::from_close(c).is_some()
        }) || operator_at(state.rest()).is_some()
    }

    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError> {
        let Some(c) = state.current() else {
            return Ok(());
        };
        if let Some(bracket) = BracketKind::from_open(c) {
            Self::open(state, bracket, start);
            return Ok(());
        }
        if let Some(bracket) = BracketKind::from_close(c) {
            return Self::close(state, bracket, start);
        }
        let Some((spelling, kind)) = operator_at(state.rest()) else {
            return Err(state.error(LexErrorKind::UnexpectedCharacter { found: c }, &start));
        };
        state.eat(spelling);
        state.emit(kind, TokenValue::text(spelling), start);
        Ok(())
    }
}
