use crate::dispatch::Handler;
use crate::lex_error::{LexError, LexErrorKind, Unterminated};
use crate::literal::string::{decode_literal, literal_prefix, quoted_len};
use crate::position::Position;
use crate::state::ScanState;
use crate::token::TokenValue;

/// Quoted string or bytes literals, with their prefixes.
#[derive(Copy, Clone, Debug)]
pub struct QuotedHandler {
    bytes: bool,
}

impl QuotedHandler {
    /// `'...'`, `"..."`, `r'...'`.
    pub const STRING: Self = QuotedHandler { bytes: false };
    /// `b'...'`, `rb'...'`.
    pub const BYTES: Self = QuotedHandler { bytes: true };
}

impl Handler for QuotedHandler {
    fn name(&self) -> &'static str {
        if self.bytes {
            "bytes"
        } else {
            "string"
        }
    }

    fn can_handle(&self, state: &ScanState<'_>) -> bool {
        literal_prefix(state.rest()).is_some_and(|prefix| prefix.bytes == self.bytes)
    }

    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError> {
        let rest = state.rest();
        let Some(prefix) = literal_prefix(rest) else {
            let found = state.current().unwrap_or('\0');
            return Err(state.error(LexErrorKind::UnexpectedCharacter { found }, &start));
        };
        state.advance_bytes(prefix.len);
        let Some(len) = quoted_len(&rest[prefix.len..]) else {
            let quote = state.current().unwrap_or('"');
            let what = if prefix.bytes {
                Unterminated::Bytes { quote }
            } else {
                Unterminated::String { quote }
            };
            return Err(state.error(LexErrorKind::UnterminatedLiteral(what), state.position()));
        };
        state.advance_bytes(len);
        let value = decode_literal(state.slice_from(&start), prefix);
        state.emit(prefix.kind(), TokenValue::Literal(value), start);
        Ok(())
    }
}
