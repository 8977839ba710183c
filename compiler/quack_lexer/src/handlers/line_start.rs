use crate::dispatch::Handler;
use crate::indent::{measure, LineIndent};
use crate::lex_error::{LexError, LexErrorKind};
use crate::position::Position;
use crate::state::ScanState;
use crate::token::TokenKind;

/// Compares each line's leading spaces with the indentation stack.
///
/// Armed at the start of input and after every line break outside
/// brackets. Blank and comment-only lines only have their leading
/// whitespace consumed. Anything after the leading spaces, tabs included,
/// is left to the other handlers.
pub struct LineStartHandler;

impl Handler for LineStartHandler {
    fn name(&self) -> &'static str {
        "line-start"
    }

    fn can_handle(&self, state: &ScanState<'_>) -> bool {
        state.at_line_start
    }

    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError> {
        state.at_line_start = false;
        let (len, width) = match measure(state.rest()) {
            LineIndent::Blank { len } => (len, None),
            LineIndent::Code { width } => (width, Some(width)),
        };
        state.advance_bytes(len);
        if len > 0 {
            state.emit_trivia(TokenKind::Whitespace, start);
        }
        if let Some(width) = width {
            let transition = state
                .indent
                .transition(width)
                .map_err(|e| {
                    state.error(LexErrorKind::InconsistentIndentation(e), state.position())
                })?;
            state.emit_transition(transition);
        }
        Ok(())
    }
}
