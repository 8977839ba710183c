use crate::dispatch::Handler;
use crate::lex_error::LexError;
use crate::position::Position;
use crate::state::ScanState;
use crate::token::{TokenKind, TokenValue};

/// `\` followed by a line break joins the next line onto this one.
///
/// The line break is part of the token, so the next line is not an
/// indentation line.
pub struct LineContinuationHandler;

impl Handler for LineContinuationHandler {
    fn name(&self) -> &'static str {
        "line-continuation"
    }

    fn can_handle(&self, state: &ScanState<'_>) -> bool {
        state.starts_with("\\\n") || state.starts_with("\\\r\n")
    }

    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError> {
        if !state.eat("\\\r\n") {
            state.eat("\\\n");
        }
        state.emit(TokenKind::LineContinuation, TokenValue::Unit, start);
        Ok(())
    }
}
