//! Identifiers and keywords.

use crate::dispatch::Handler;
use crate::lex_error::LexError;
use crate::literal::reserved_literal;
use crate::position::Position;
use crate::state::ScanState;
use crate::token::{TokenKind, TokenValue};

/// First character of an identifier: a letter or `_`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Any later character: a letter, digit or `_`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte length of the identifier at the start of `text` (0 if none).
pub fn ident_len(text: &str) -> usize {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if is_ident_start(c) => {}
        _ => return 0,
    }
    chars
        .find(|&(_, c)| !is_ident_continue(c))
        .map_or(text.len(), |(i, _)| i)
}

/// Keyword kind of a reserved word.
pub fn keyword(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "for" => TokenKind::For,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "elif" => TokenKind::Elif,
        "while" => TokenKind::While,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "return" => TokenKind::Return,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        "in" => TokenKind::In,
        "is" => TokenKind::Is,
        "lambda" => TokenKind::Lambda,
        _ => return None,
    };
    Some(kind)
}

/// Length of spaces/tabs then `word` as a whole word, if `text` starts so.
fn fused_tail(text: &str, word: &str) -> Option<usize> {
    let after_gap = text.trim_start_matches([' ', '\t']);
    let gap = text.len() - after_gap.len();
    if gap == 0 || ident_len(after_gap) != word.len() || !after_gap.starts_with(word) {
        return None;
    }
    Some(gap + word.len())
}

/// Identifiers, keywords and the reserved literals `True`, `False`, `None`.
///
/// `not in` and `is not` become single `NOT_IN` / `IS_NOT` tokens when the
/// two words sit on the same line.
pub struct IdentifierHandler;

impl Handler for IdentifierHandler {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn can_handle(&self, state: &ScanState<'_>) -> bool {
        state.current().is_some_and(is_ident_start)
    }

    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError> {
        let rest = state.rest();
        let ident = &rest[..ident_len(rest)];
        state.advance_bytes(ident.len());

        if let Some((kind, value)) = reserved_literal(ident) {
            state.emit(kind, TokenValue::Literal(value), start);
            return Ok(());
        }

        let fused = match keyword(ident) {
            Some(TokenKind::Not) => {
                fused_tail(state.rest(), "in").map(|len| (len, TokenKind::NotIn, "not in"))
            }
            Some(TokenKind::Is) => {
                fused_tail(state.rest(), "not").map(|len| (len, TokenKind::IsNot, "is not"))
            }
            _ => None,
        };
        if let Some((len, kind, text)) = fused {
            state.advance_bytes(len);
            state.emit(kind, TokenValue::text(text), start);
            return Ok(());
        }

        let kind = keyword(ident).unwrap_or(TokenKind::Identifier);
        state.emit(kind, TokenValue::text(ident), start);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ident_chars() {
        assert!(is_ident_start('_'));
        assert!(is_ident_start('é'));
        assert!(!is_ident_start('1'));
        assert!(is_ident_continue('1'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn ident_len_stops_at_non_ident() {
        assert_eq!(ident_len("my_count = 1"), 8);
        assert_eq!(ident_len("x1.y"), 2);
        assert_eq!(ident_len("café"), "café".len());
        assert_eq!(ident_len("1abc"), 0);
    }

    #[test]
    fn keywords() {
        assert_eq!(keyword("elif"), Some(TokenKind::Elif));
        assert_eq!(keyword("lambda"), Some(TokenKind::Lambda));
        assert_eq!(keyword("If"), None);
        assert_eq!(keyword("let"), None);
    }

    #[test]
    fn fused_tail_needs_a_gap_and_a_whole_word() {
        assert_eq!(fused_tail(" in x", "in"), Some(3));
        assert_eq!(fused_tail(" \t not y", "not"), Some(6));
        assert_eq!(fused_tail("in x", "in"), None);
        assert_eq!(fused_tail(" inner", "in"), None);
        assert_eq!(fused_tail("\nin", "in"), None);
    }
}
