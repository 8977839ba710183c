use super::*;
use pretty_assertions::assert_eq;

fn pos_of(source: &str, index: usize) -> Position {
    let mut pos = Position::start(SourceId::new("demo.qk"));
    for c in source[..index].chars() {
        pos.advance(c);
    }
    pos
}

#[test]
fn error_carries_location_and_message() {
    let source = "let x = \"abc";
    let err = LexError::at(
        LexErrorKind::UnterminatedLiteral(Unterminated::String { quote: '"' }),
        &pos_of(source, 8),
        source,
    );
    assert_eq!((err.line, err.column, err.index), (1, 9, 8));
    assert_eq!(
        err.message,
        "unterminated string literal (missing closing `\"`)"
    );
    assert_eq!(err.context, "let x = \"abc");
    assert_eq!(err.caret, 8);
}

#[test]
fn display_renders_caret_under_failure() {
    let source = "a = 1\nb = $\n";
    let err = LexError::at(
        LexErrorKind::UnexpectedCharacter { found: '$' },
        &pos_of(source, 10),
        source,
    );
    assert_eq!(
        err.to_string(),
        "demo.qk:2:5: unexpected character '$'\n  | b = $\n  |     ^"
    );
}

#[test]
fn snippet_is_limited_to_the_failing_line() {
    let source = "first\nsecond line\nthird";
    let (snippet, caret) = context_snippet(source, 13);
    assert_eq!(snippet, "second line");
    assert_eq!(caret, 7);
}

#[test]
fn snippet_is_bounded() {
    let line = "x".repeat(200);
    let (snippet, caret) = context_snippet(&line, 100);
    assert_eq!(snippet.chars().count(), 2 * CONTEXT_RADIUS);
    assert_eq!(caret, CONTEXT_RADIUS);
}

#[test]
fn snippet_at_end_of_input() {
    let (snippet, caret) = context_snippet("(1 + 2", 6);
    assert_eq!(snippet, "(1 + 2");
    assert_eq!(caret, 6);
}

#[test]
fn snippet_strips_carriage_return() {
    let (snippet, _) = context_snippet("ab\r\ncd", 1);
    assert_eq!(snippet, "ab");
}

#[test]
fn snippet_handles_multibyte_offsets() {
    // Offset 1 falls inside `é`; the snippet starts from the char boundary.
    let (snippet, caret) = context_snippet("é!", 1);
    assert_eq!(snippet, "é!");
    assert_eq!(caret, 0);
}

#[test]
fn delimiter_messages() {
    let unclosed = DelimiterError::Unclosed {
        bracket: BracketKind::Round,
        line: 1,
        column: 1,
    };
    assert_eq!(
        unclosed.to_string(),
        "unclosed round bracket `(` opened at 1:1"
    );
    let unopened = DelimiterError::Unopened {
        bracket: BracketKind::Square,
    };
    assert_eq!(
        unopened.to_string(),
        "unmatched closing square bracket `]`"
    );
}

#[test]
fn number_message_includes_raw_text() {
    let kind = LexErrorKind::InvalidNumber {
        raw: "0b102".into(),
        reason: NumberError::InvalidDigit {
            digit: '2',
            radix: 2,
        },
    };
    assert_eq!(
        kind.to_string(),
        "invalid number `0b102`: invalid digit '2' for base 2"
    );
}

#[test]
fn configuration_error_has_no_context() {
    let err = LexError::configuration(
        ConfigError::EmptyKeyword { role: "print" },
        SourceId::default(),
    );
    assert_eq!(err.context, "");
    assert!(matches!(err.kind, LexErrorKind::InvalidConfiguration(_)));
}

#[test]
fn errors_compare_by_value() {
    let source = "@";
    let a = LexError::at(
        LexErrorKind::UnexpectedCharacter { found: '@' },
        &pos_of(source, 0),
        source,
    );
    let b = a.clone();
    assert_eq!(a, b);
}
