//! Literal recognizers.
//!
//! Pure functions that measure and decode literal lexemes. They never touch
//! the scan state: the handlers cut the lexeme out of the source, hand it
//! here, and turn a rejection into a located [`LexError`](crate::LexError).
//!
//! - [`number`]: integer and float numerals in bases 2, 8, 10 and 16
//! - [`string`]: quoted strings and bytes, raw or escaped
//! - [`escape`]: backslash escape resolution shared by both

pub mod escape;
pub mod number;
pub mod string;

use crate::token::{LiteralValue, TokenKind};

/// Classify the reserved identifiers that spell literals.
///
/// `True`/`False` are booleans and `None` is the none literal; every other
/// identifier is left alone.
pub fn reserved_literal(ident: &str) -> Option<(TokenKind, LiteralValue)> {
    match ident {
        "True" => Some((TokenKind::Boolean, LiteralValue::Bool(true))),
        "False" => Some((TokenKind::Boolean, LiteralValue::Bool(false))),
        "None" => Some((TokenKind::None, LiteralValue::None)),
        _ => None,
    }
}
