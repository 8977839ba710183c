//! Token types produced by the scanner.
//!
//! A [`Token`] pairs a [`TokenKind`] with its decoded [`TokenValue`], the
//! start/end [`Position`]s and the raw source slice it was cut from.
//! Structural tokens (indentation and block markers) carry an empty `raw`.

use std::fmt;

use crate::position::Position;

/// A token with its boundaries in the source.
///
/// `raw` is `source[start.index..end.index]`, except for structural tokens
/// which have an empty `raw` and `start == end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub start: Position,
    pub end: Position,
    pub raw: String,
}

impl Token {
    /// Byte offset of the first byte of the token.
    #[inline]
    pub fn offset(&self) -> usize {
        self.start.index
    }

    /// Convert to the flat form handed to downstream consumers.
    pub fn to_external(&self) -> ExternalToken {
        ExternalToken {
            kind: self.kind.name(),
            value: self.value.clone(),
            position: self.start.index,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}", self.kind, self.value, self.start.index)
    }
}

/// Flat token representation: kind name, decoded value, byte offset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExternalToken {
    pub kind: &'static str,
    pub value: TokenValue,
    pub position: usize,
}

/// Decoded payload of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// Markers with nothing to carry (`BLOCK_START`, `BLOCK_END`).
    Unit,
    /// Source text of identifiers, keywords, operators and commands.
    Text(String),
    /// Decoded literal.
    Literal(LiteralValue),
    /// Indentation width for `INDENT` and `DEDENT`.
    Width(usize),
}

impl TokenValue {
    pub fn text(text: impl Into<String>) -> Self {
        TokenValue::Text(text.into())
    }

    /// The literal payload, if this is a literal token.
    pub fn as_literal(&self) -> Option<&LiteralValue> {
        match self {
            TokenValue::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Unit => Ok(()),
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Literal(lit) => write!(f, "{lit}"),
            TokenValue::Width(width) => write!(f, "{width}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TokenValue::Unit => serializer.serialize_unit(),
            TokenValue::Text(text) => serializer.serialize_str(text),
            TokenValue::Literal(lit) => serde::Serialize::serialize(lit, serializer),
            TokenValue::Width(width) => serializer.serialize_u64(*width as u64),
        }
    }
}

/// Numeric base of an integer literal, chosen by its prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Prefix spelled before the digits (`""` for decimal).
    pub fn prefix(self) -> &'static str {
        match self {
            Base::Binary => "0b",
            Base::Octal => "0o",
            Base::Decimal => "",
            Base::Hexadecimal => "0x",
        }
    }
}

/// Decoded literal value.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Integer { value: u64, base: Base },
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Bool(bool),
    None,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Integer { value, .. } => write!(f, "{value}"),
            LiteralValue::Float(value) => write!(f, "{value:?}"),
            LiteralValue::Str(text) => f.write_str(text),
            LiteralValue::Bytes(bytes) => {
                f.write_str("b'")?;
                for &b in bytes {
                    write!(f, "{}", std::ascii::escape_default(b))?;
                }
                f.write_str("'")
            }
            LiteralValue::Bool(true) => f.write_str("True"),
            LiteralValue::Bool(false) => f.write_str("False"),
            LiteralValue::None => f.write_str("None"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LiteralValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LiteralValue::Integer { value, .. } => serializer.serialize_u64(*value),
            LiteralValue::Float(value) => serializer.serialize_f64(*value),
            LiteralValue::Str(text) => serializer.serialize_str(text),
            LiteralValue::Bytes(bytes) => serde::Serialize::serialize(bytes, serializer),
            LiteralValue::Bool(value) => serializer.serialize_bool(*value),
            LiteralValue::None => serializer.serialize_none(),
        }
    }
}

/// Every kind of token the scanner can produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Configured commands
    PrintCommand,
    VariableDeclare,

    // Names and literals
    Identifier,
    Integer,
    Float,
    String,
    Bytes,
    Boolean,
    None,

    // Collection delimiters
    ListStart,
    ListEnd,
    TupleStart,
    TupleEnd,
    DictStart,
    DictEnd,
    SetStart,
    SetEnd,

    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,
    FloorDivide,
    Power,
    Modulo,

    // Comparison
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,

    // Logical and membership
    And,
    Or,
    Not,
    In,
    NotIn,
    Is,
    IsNot,

    // Control flow
    For,
    If,
    Else,
    Elif,
    While,
    Break,
    Continue,
    Return,

    // Punctuation
    Comma,
    Dot,
    Colon,
    Semicolon,
    Assign,
    Arrow,
    Lambda,
    Walrus,

    // Structure
    Indent,
    Dedent,
    BlockStart,
    BlockEnd,
    LineContinuation,

    // Trivia (only with `ScanOptions::retain_trivia`)
    Whitespace,
    Comment,
}

impl TokenKind {
    /// Stable upper-case name used by the external representation.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::PrintCommand => "PRINT_COMMAND",
            TokenKind::VariableDeclare => "VARIABLE_DECLARE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Bytes => "BYTES",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::None => "NONE",
            TokenKind::ListStart => "LIST_START",
            TokenKind::ListEnd => "LIST_END",
            TokenKind::TupleStart => "TUPLE_START",
            TokenKind::TupleEnd => "TUPLE_END",
            TokenKind::DictStart => "DICT_START",
            TokenKind::DictEnd => "DICT_END",
            TokenKind::SetStart => "SET_START",
            TokenKind::SetEnd => "SET_END",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::FloorDivide => "FLOOR_DIVIDE",
            TokenKind::Power => "POWER",
            TokenKind::Modulo => "MODULO",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOT_EQUALS",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::In => "IN",
            TokenKind::NotIn => "NOT_IN",
            TokenKind::Is => "IS",
            TokenKind::IsNot => "IS_NOT",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Elif => "ELIF",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Return => "RETURN",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Arrow => "ARROW",
            TokenKind::Lambda => "LAMBDA",
            TokenKind::Walrus => "WALRUS",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::BlockStart => "BLOCK_START",
            TokenKind::BlockEnd => "BLOCK_END",
            TokenKind::LineContinuation => "LINE_CONTINUATION",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Comment => "COMMENT",
        }
    }

    /// Tokens with no source text of their own.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::Indent | TokenKind::Dedent | TokenKind::BlockStart | TokenKind::BlockEnd
        )
    }

    /// Whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Bytes
                | TokenKind::Boolean
                | TokenKind::None
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
