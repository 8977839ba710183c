//! Property-based tests for the Quack scanner.
//!
//! Generated programs check that:
//! 1. Reconstruction: the raw text of the top-level tokens, trivia included,
//!    is the source again
//! 2. Balance: a successful scan closes every block and bracket it opens
//! 3. Idempotence: scanning the same text twice gives the same result
//! 4. Numerals decode to the value they spell
//! 5. A decoded string holds the quote character only where it was escaped

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use quack_lexer::{
    tokenize, Base, LiteralValue, ScanOptions, Scanner, Token, TokenKind, TokenValue,
};

// -- Code Generation Strategies --

/// One logical line of a well-formed program.
const STATEMENTS: &[&str] = &[
    "let count = 0",
    "quack(\"hello\", count)",
    "quack(b'\\x00', [1, (2, 3)])",
    "names = ['a', \"b\"]  # trailing note",
    "table = {'a': 1, 'b': {2, 3}}",
    "empty = {}",
    "if count >= 10 and name not in names:",
    "while x is not None:",
    "elif flag or not done:",
    "else:",
    "total = 0x1F + 0b10 * 2.5e3 // 7 % 3 ** 2",
    "total = 1 + \\\n    2",
    "pair = (first,\n        second)",
    "text = r'raw \\d' + 'it\\'s'",
    "f = lambda y: y != 1.5",
    "x += 1; y -= 2",
    "/* block */ z = .5",
    "# comment only",
    "",
];

/// Lines with consistent indentation: each code line is at most one level
/// deeper than the code line before it, and every level is a multiple of 4.
/// Blank and comment-only lines get any indentation.
fn program_strategy() -> impl Strategy<Value = String> {
    let line = (0usize..4, 0..STATEMENTS.len());
    (prop::collection::vec(line, 0..12), any::<bool>(), any::<bool>()).prop_map(
        |(lines, crlf, trailing_newline)| {
            let newline = if crlf { "\r\n" } else { "\n" };
            let mut depth = 0;
            let mut out = Vec::with_capacity(lines.len());
            for (wanted, statement) in lines {
                let statement = STATEMENTS[statement];
                let width = if statement.is_empty() || statement.starts_with('#') {
                    wanted
                } else {
                    depth = wanted.min(depth + 1);
                    depth
                };
                out.push(format!("{}{statement}", " ".repeat(width * 4)));
            }
            let mut source = out.join(newline);
            if trailing_newline && !source.is_empty() {
                source.push_str(newline);
            }
            source
        },
    )
}

/// Short text over an alphabet that hits every handler, well-formed or not.
fn noise_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_ \t\r\n(){}:,.'\"#=+*/<>!\\[\\]\\\\-]{0,48}")
        .expect("valid regex")
}

fn scanner() -> Scanner {
    Scanner::default().with_options(ScanOptions {
        retain_trivia: true,
    })
}

/// Raw text of every top-level, non-structural token.
///
/// Argument tokens of a print call start inside the call token's span and
/// are skipped.
fn reconstruct(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut end = 0;
    for token in tokens {
        if token.kind.is_structural() || token.start.index < end {
            continue;
        }
        out.push_str(&token.raw);
        end = token.end.index;
    }
    out
}

fn count(tokens: &[Token], kind: TokenKind) -> usize {
    tokens.iter().filter(|t| t.kind == kind).count()
}

fn assert_balanced(tokens: &[Token]) {
    let pairs = [
        (TokenKind::Indent, TokenKind::Dedent),
        (TokenKind::BlockStart, TokenKind::BlockEnd),
        (TokenKind::TupleStart, TokenKind::TupleEnd),
        (TokenKind::ListStart, TokenKind::ListEnd),
        (TokenKind::DictStart, TokenKind::DictEnd),
        (TokenKind::SetStart, TokenKind::SetEnd),
    ];
    for (open, close) in pairs {
        assert_eq!(count(tokens, open), count(tokens, close), "{open} vs {close}");
    }
    let last_dedent = tokens.iter().rev().find(|t| t.kind == TokenKind::Dedent);
    if let Some(token) = last_dedent {
        assert_eq!(token.value, TokenValue::Width(0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn programs_reconstruct_from_raw(source in program_strategy()) {
        let tokens = scanner().tokenize(&source, None).expect("well-formed program");
        prop_assert_eq!(reconstruct(&tokens), source);
    }

    #[test]
    fn programs_close_what_they_open(source in program_strategy()) {
        let tokens = tokenize(&source, None, "quack", "let").expect("well-formed program");
        assert_balanced(&tokens);
    }

    #[test]
    fn successful_scans_are_balanced(source in noise_strategy()) {
        if let Ok(tokens) = scanner().tokenize(&source, None) {
            assert_balanced(&tokens);
            prop_assert_eq!(reconstruct(&tokens), source);
        }
    }

    #[test]
    fn scanning_is_idempotent(source in noise_strategy()) {
        let scanner = scanner();
        prop_assert_eq!(scanner.tokenize(&source, None), scanner.tokenize(&source, None));
    }

    #[test]
    fn integers_decode_to_their_value(value in any::<u64>(), base in 0usize..4) {
        let (spelled, base) = match base {
            0 => (format!("{value}"), Base::Decimal),
            1 => (format!("0x{value:X}"), Base::Hexadecimal),
            2 => (format!("0o{value:o}"), Base::Octal),
            _ => (format!("0b{value:b}"), Base::Binary),
        };
        let tokens = tokenize(&spelled, None, "quack", "let").expect("valid integer");
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(
            tokens[0].value.as_literal(),
            Some(&LiteralValue::Integer { value, base })
        );
    }

    #[test]
    fn separated_integers_ignore_underscores(groups in prop::collection::vec(0u32..1000, 1..5)) {
        let spelled = groups
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join("_");
        let expected: u64 = spelled.replace('_', "").parse().expect("digits");
        let tokens = tokenize(&spelled, None, "quack", "let").expect("valid integer");
        prop_assert_eq!(
            tokens[0].value.as_literal(),
            Some(&LiteralValue::Integer { value: expected, base: Base::Decimal })
        );
    }

    #[test]
    fn floats_decode_to_their_value(value in 0.0f64..1e12) {
        let spelled = format!("{value:?}");
        let tokens = tokenize(&spelled, None, "quack", "let").expect("valid float");
        prop_assert_eq!(tokens[0].kind, TokenKind::Float);
        prop_assert_eq!(tokens[0].value.as_literal(), Some(&LiteralValue::Float(value)));
    }

    #[test]
    fn quotes_survive_only_where_escaped(
        pieces in prop::collection::vec(
            prop_oneof![
                prop::string::string_regex("[a-z \"]{1,4}").expect("valid regex"),
                Just("\\'".to_string()),
                Just("\\n".to_string()),
                Just("\\\\".to_string()),
            ],
            0..8,
        )
    ) {
        let body = pieces.concat();
        let escaped_quotes = pieces.iter().filter(|p| *p == "\\'").count();
        let source = format!("'{body}'");
        let tokens = tokenize(&source, None, "quack", "let").expect("terminated string");
        prop_assert_eq!(tokens.len(), 1);
        let Some(LiteralValue::Str(decoded)) = tokens[0].value.as_literal() else {
            panic!("not a string: {:?}", tokens[0]);
        };
        prop_assert_eq!(decoded.matches('\'').count(), escaped_quotes);
    }
}
