use crate::dispatch::Handler;
use crate::lex_error::{LexError, LexErrorKind};
use crate::literal::number::{numeral_len, recognize_number, starts_numeral};
use crate::position::Position;
use crate::state::ScanState;
use crate::token::TokenValue;

/// Integer and float numerals.
pub struct NumberHandler;

impl Handler for NumberHandler {
    fn name(&self) -> &'static str {
        "number"
    }

    fn can_handle(&self, state: &ScanState<'_>) -> bool {
        starts_numeral(state.rest())
    }

    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError> {
        let rest = state.rest();
        let raw = &rest[..numeral_len(rest)];
        match recognize_number(raw) {
            Ok((kind, value)) => {
                state.advance_bytes(raw.len());
                state.emit(kind, TokenValue::Literal(value), start);
                Ok(())
            }
            Err(reason) => Err(state.error(
                LexErrorKind::InvalidNumber {
                    raw: raw.to_string(),
                    reason,
                },
                &start,
            )),
        }
    }
}
