//! Numeric literal recognition.
//!
//! [`numeral_len`] measures how much of the input a numeral claims (greedy,
//! including any letters glued to it), and [`recognize_number`] decides what
//! that text is. Splitting the two keeps malformed numerals like `0b102` or
//! `12abc` in one lexeme so they are reported whole instead of being split
//! into a number and an identifier.

use crate::lex_error::NumberError;
use crate::token::{Base, LiteralValue, TokenKind};

/// Returns `true` if `text` starts a numeral: a digit, or `.` then a digit.
pub fn starts_numeral(text: &str) -> bool {
    let b = text.as_bytes();
    match b.first() {
        Some(c) if c.is_ascii_digit() => true,
        Some(b'.') => b.get(1).is_some_and(u8::is_ascii_digit),
        _ => false,
    }
}

/// Byte length of the numeral at the start of `text`.
///
/// Consumes digits and `_`, one fractional part, one exponent with an
/// optional sign, further `.digits` groups after a fraction (so `1.2.3`
/// is one malformed numeral), and any ASCII letters or digits glued to the
/// end.
pub fn numeral_len(text: &str) -> usize {
    let b = text.as_bytes();
    let glued = |i: usize| b.get(i).is_some_and(|c| c.is_ascii_alphanumeric() || *c == b'_');

    if radix_prefix(text).is_some() {
        let mut i = 2;
        while glued(i) {
            i += 1;
        }
        return i;
    }

    let digits = |mut i: usize| {
        while b.get(i).is_some_and(|c| c.is_ascii_digit() || *c == b'_') {
            i += 1;
        }
        i
    };

    let mut i = digits(0);
    let fraction = b.get(i) == Some(&b'.');
    if fraction {
        i = digits(i + 1);
    }
    if matches!(b.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        i = digits(i);
    }
    while fraction && b.get(i) == Some(&b'.') && b.get(i + 1).is_some_and(u8::is_ascii_digit) {
        i = digits(i + 1);
    }
    while glued(i) {
        i += 1;
    }
    i
}

/// Classify and decode a numeral cut by [`numeral_len`].
pub fn recognize_number(raw: &str) -> Result<(TokenKind, LiteralValue), NumberError> {
    if let Some(base) = radix_prefix(raw) {
        let digits = &raw[2..];
        if digits.is_empty() {
            return Err(NumberError::MissingDigits {
                prefix: base.prefix(),
            });
        }
        let value = parse_digits(digits, base.radix())?;
        return Ok((TokenKind::Integer, LiteralValue::Integer { value, base }));
    }

    let parts = split_decimal(raw)?;
    if parts.is_float {
        let value = parse_float(raw)?;
        Ok((TokenKind::Float, LiteralValue::Float(value)))
    } else {
        let value = parse_digits(parts.integer, 10)?;
        Ok((
            TokenKind::Integer,
            LiteralValue::Integer {
                value,
                base: Base::Decimal,
            },
        ))
    }
}

/// Base chosen by a `0x`/`0b`/`0o` prefix (either case).
fn radix_prefix(text: &str) -> Option<Base> {
    let b = text.as_bytes();
    if b.first() != Some(&b'0') {
        return None;
    }
    match b.get(1) {
        Some(b'x' | b'X') => Some(Base::Hexadecimal),
        Some(b'b' | b'B') => Some(Base::Binary),
        Some(b'o' | b'O') => Some(Base::Octal),
        _ => None,
    }
}

/// Decimal numeral split into its digit groups.
struct DecimalParts<'a> {
    integer: &'a str,
    is_float: bool,
}

fn split_decimal(raw: &str) -> Result<DecimalParts<'_>, NumberError> {
    let end_of_digits =
        |s: &str| s.find(|c: char| !(c.is_ascii_digit() || c == '_')).unwrap_or(s.len());

    let int_end = end_of_digits(raw);
    let integer = &raw[..int_end];
    check_separators(integer)?;
    let mut rest = &raw[int_end..];
    let mut is_float = false;

    if let Some(after_dot) = rest.strip_prefix('.') {
        let frac_end = end_of_digits(after_dot);
        let fraction = &after_dot[..frac_end];
        if fraction.is_empty() {
            return Err(NumberError::MissingFraction);
        }
        check_separators(fraction)?;
        is_float = true;
        rest = &after_dot[frac_end..];
    }

    if let Some(after_e) = rest.strip_prefix(['e', 'E']) {
        let unsigned = after_e.strip_prefix(['+', '-']).unwrap_or(after_e);
        let exp_end = end_of_digits(unsigned);
        let exponent = &unsigned[..exp_end];
        if exponent.is_empty() {
            return Err(NumberError::EmptyExponent);
        }
        check_separators(exponent)?;
        is_float = true;
        rest = &unsigned[exp_end..];
    }

    if rest.starts_with('.') {
        return Err(NumberError::RepeatedDecimalPoint);
    }
    if let Some(digit) = rest.chars().next() {
        return Err(NumberError::InvalidDigit { digit, radix: 10 });
    }
    Ok(DecimalParts { integer, is_float })
}

/// `_` may only sit between two digits.
fn check_separators(group: &str) -> Result<(), NumberError> {
    if group.starts_with('_') || group.ends_with('_') || group.contains("__") {
        return Err(NumberError::MisplacedSeparator);
    }
    Ok(())
}

/// Parse digits in `radix`, skipping `_` separators.
fn parse_digits(digits: &str, radix: u32) -> Result<u64, NumberError> {
    check_separators(digits)?;
    let mut result: u64 = 0;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let digit = c
            .to_digit(radix)
            .ok_or(NumberError::InvalidDigit { digit: c, radix })?;
        result = result
            .checked_mul(u64::from(radix))
            .and_then(|r| r.checked_add(u64::from(digit)))
            .ok_or(NumberError::IntegerOverflow)?;
    }
    Ok(result)
}

/// Parse a float, allocating only if separators are present.
fn parse_float(raw: &str) -> Result<f64, NumberError> {
    let parsed = if raw.contains('_') {
        raw.replace('_', "").parse::<f64>()
    } else {
        raw.parse::<f64>()
    };
    match parsed {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(NumberError::FloatOutOfRange),
    }
}
