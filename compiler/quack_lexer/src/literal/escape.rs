//! Escape Sequence Processing
//!
//! Handles backslash escapes in string and bytes literals.
//! Recognized escapes: `\n`, `\r`, `\t`, `\\`, `\'`, `\"`, `\0`, `\a`, `\b`,
//! `\f`, `\v`, `\xHH`, `\uXXXX` (strings only) and backslash-newline, which
//! joins lines. Unrecognized or malformed escapes are kept literally.

/// Resolve a single-character escape to its replacement.
///
/// Returns `None` for escapes that take operands or are not recognized.
#[inline]
pub fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '0' => Some('\0'),
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'v' => Some('\u{0B}'),
        _ => None,
    }
}

/// Parse exactly `digits` hex digits at the start of `s`.
fn hex_prefix(s: &str, digits: usize) -> Option<u32> {
    let hex = s.get(..digits)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

/// One decoded step of an escape sequence.
enum Escape {
    Char(char),
    Byte(u8),
    /// Backslash-newline: contributes nothing.
    Join,
    /// Not an escape; keep the backslash and what follows.
    Literal,
}

/// Decode the escape that follows a backslash.
///
/// `rest` starts right after the backslash. Returns the decoded escape and
/// how many bytes of `rest` it used.
fn decode_escape(rest: &str, bytes_mode: bool) -> (Escape, usize) {
    let Some(c) = rest.chars().next() else {
        return (Escape::Literal, 0);
    };
    if let Some(resolved) = resolve_escape(c) {
        return (Escape::Char(resolved), 1);
    }
    match c {
        '\n' => (Escape::Join, 1),
        '\r' if rest[1..].starts_with('\n') => (Escape::Join, 2),
        'x' => match hex_prefix(&rest[1..], 2) {
            // Two hex digits never exceed 0xFF.
            Some(value) => (Escape::Byte(value.to_le_bytes()[0]), 3),
            None => (Escape::Literal, 0),
        },
        'u' if !bytes_mode => match hex_prefix(&rest[1..], 4).and_then(char::from_u32) {
            Some(ch) => (Escape::Char(ch), 5),
            None => (Escape::Literal, 0),
        },
        _ => (Escape::Literal, 0),
    }
}

/// Decode the body of a string literal (between the quotes).
pub fn unescape_string(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(backslash) = rest.find('\\') {
        result.push_str(&rest[..backslash]);
        let after = &rest[backslash + 1..];
        let (escape, used) = decode_escape(after, false);
        match escape {
            Escape::Char(c) => result.push(c),
            Escape::Byte(b) => result.push(char::from(b)),
            Escape::Join => {}
            Escape::Literal => result.push('\\'),
        }
        rest = &after[used..];
    }
    result.push_str(rest);
    result
}

/// Decode the body of a bytes literal (between the quotes).
///
/// Characters outside ASCII contribute their UTF-8 encoding.
pub fn unescape_bytes(body: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(body.len());
    let mut rest = body;
    while let Some(backslash) = rest.find('\\') {
        result.extend_from_slice(rest[..backslash].as_bytes());
        let after = &rest[backslash + 1..];
        let (escape, used) = decode_escape(after, true);
        match escape {
            Escape::Char(c) => {
                let mut buf = [0u8; 4];
                result.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
            Escape::Byte(b) => result.push(b),
            Escape::Join => {}
            Escape::Literal => result.push(b'\\'),
        }
        rest = &after[used..];
    }
    result.extend_from_slice(rest.as_bytes());
    result
}
