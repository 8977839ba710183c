use super::*;
use crate::position::SourceId;
use pretty_assertions::assert_eq;

fn token(kind: TokenKind, value: TokenValue, start: usize, raw: &str) -> Token {
    let mut begin = Position::start(SourceId::default());
    for _ in 0..start {
        begin.advance(' ');
    }
    let mut end = begin.clone();
    for c in raw.chars() {
        end.advance(c);
    }
    Token {
        kind,
        value,
        start: begin,
        end,
        raw: raw.to_string(),
    }
}

#[test]
fn kind_names_are_screaming_snake() {
    assert_eq!(TokenKind::PrintCommand.name(), "PRINT_COMMAND");
    assert_eq!(TokenKind::FloorDivide.name(), "FLOOR_DIVIDE");
    assert_eq!(TokenKind::BlockStart.to_string(), "BLOCK_START");
    assert_eq!(TokenKind::IsNot.name(), "IS_NOT");
}

#[test]
fn structural_kinds() {
    for kind in [
        TokenKind::Indent,
        TokenKind::Dedent,
        TokenKind::BlockStart,
        TokenKind::BlockEnd,
    ] {
        assert!(kind.is_structural(), "{kind} should be structural");
    }
    assert!(!TokenKind::LineContinuation.is_structural());
    assert!(!TokenKind::Whitespace.is_structural());
}

#[test]
fn trivia_and_literal_kinds() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Comment.is_trivia());
    assert!(!TokenKind::Identifier.is_trivia());
    assert!(TokenKind::Bytes.is_literal());
    assert!(TokenKind::None.is_literal());
    assert!(!TokenKind::Identifier.is_literal());
}

#[test]
fn external_form_uses_start_offset() {
    let tok = token(
        TokenKind::Integer,
        TokenValue::Literal(LiteralValue::Integer {
            value: 5,
            base: Base::Decimal,
        }),
        8,
        "5",
    );
    let ext = tok.to_external();
    assert_eq!(ext.kind, "INTEGER");
    assert_eq!(ext.position, 8);
    assert_eq!(ext.value, tok.value);
    assert_eq!(tok.offset(), 8);
}

#[test]
fn value_display() {
    assert_eq!(TokenValue::Unit.to_string(), "");
    assert_eq!(TokenValue::text("x").to_string(), "x");
    assert_eq!(TokenValue::Width(4).to_string(), "4");
    assert_eq!(
        TokenValue::Literal(LiteralValue::Float(2.5)).to_string(),
        "2.5"
    );
    assert_eq!(
        TokenValue::Literal(LiteralValue::Bytes(b"a\n".to_vec())).to_string(),
        "b'a\\n'"
    );
    assert_eq!(
        TokenValue::Literal(LiteralValue::Bool(false)).to_string(),
        "False"
    );
    assert_eq!(TokenValue::Literal(LiteralValue::None).to_string(), "None");
}

#[test]
fn value_accessors() {
    let text = TokenValue::text("let");
    assert_eq!(text.as_text(), Some("let"));
    assert_eq!(text.as_literal(), None);
    let lit = TokenValue::Literal(LiteralValue::Str("hi".into()));
    assert_eq!(lit.as_literal(), Some(&LiteralValue::Str("hi".into())));
    assert_eq!(lit.as_text(), None);
}

#[test]
fn base_radix_and_prefix() {
    assert_eq!(Base::Hexadecimal.radix(), 16);
    assert_eq!(Base::Octal.prefix(), "0o");
    assert_eq!(Base::Decimal.prefix(), "");
}

#[test]
fn token_display() {
    let tok = token(TokenKind::Identifier, TokenValue::text("x"), 4, "x");
    assert_eq!(tok.to_string(), "IDENTIFIER x @ 4");
}
