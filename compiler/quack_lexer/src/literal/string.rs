//! Quoted literal recognition.
//!
//! A quoted literal is an optional prefix (`r`, `b`, `rb`, any case), an
//! opening quote (`'` or `"`), a body and the same quote again. A backslash
//! always protects the next character from closing the literal, even in raw
//! literals; raw literals simply skip escape decoding afterwards.

use super::escape::{unescape_bytes, unescape_string};
use crate::token::{LiteralValue, TokenKind};

/// Prefix letters in front of an opening quote.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LiteralPrefix {
    /// `r`/`R`: escapes are not decoded.
    pub raw: bool,
    /// `b`/`B`: the literal is a byte string.
    pub bytes: bool,
    /// Byte length of the prefix letters.
    pub len: usize,
}

impl LiteralPrefix {
    pub fn kind(self) -> TokenKind {
        if self.bytes {
            TokenKind::Bytes
        } else {
            TokenKind::String
        }
    }
}

#[inline]
fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}

/// Recognize a literal prefix followed by a quote at the start of `text`.
///
/// Returns `None` when `text` does not open a quoted literal, e.g. for the
/// identifier `rb` or for `br"..."`, which is not a valid prefix order.
pub fn literal_prefix(text: &str) -> Option<LiteralPrefix> {
    let b = text.as_bytes();
    let (raw, bytes, len) = match b {
        [q, ..] if is_quote(*q) => (false, false, 0),
        [b'r' | b'R', q, ..] if is_quote(*q) => (true, false, 1),
        [b'b' | b'B', q, ..] if is_quote(*q) => (false, true, 1),
        [b'r' | b'R', b'b' | b'B', q, ..] if is_quote(*q) => (true, true, 2),
        _ => return None,
    };
    Some(LiteralPrefix { raw, bytes, len })
}

/// Byte length of the quoted section at the start of `text`, quotes
/// included.
///
/// `text` must start at the opening quote. Returns `None` if input ends
/// before the closing quote.
pub fn quoted_len(text: &str) -> Option<usize> {
    let b = text.as_bytes();
    let quote = *b.first()?;
    let mut i = 1;
    while let Some(&c) = b.get(i) {
        if c == quote {
            return Some(i + 1);
        }
        // The escaped character may be multi-byte; skipping only its first
        // byte is fine because continuation bytes are never quotes.
        i += if c == b'\\' { 2 } else { 1 };
    }
    None
}

/// Decode a complete literal lexeme (prefix and quotes included).
///
/// `prefix` must be what [`literal_prefix`] returned for `lexeme`, and the
/// lexeme must have been cut with [`quoted_len`].
pub fn decode_literal(lexeme: &str, prefix: LiteralPrefix) -> LiteralValue {
    let quoted = &lexeme[prefix.len..];
    let body = &quoted[1..quoted.len() - 1];
    match (prefix.bytes, prefix.raw) {
        (false, false) => LiteralValue::Str(unescape_string(body)),
        (false, true) => LiteralValue::Str(body.to_string()),
        (true, false) => LiteralValue::Bytes(unescape_bytes(body)),
        (true, true) => LiteralValue::Bytes(body.as_bytes().to_vec()),
    }
}
