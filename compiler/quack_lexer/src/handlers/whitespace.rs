use crate::dispatch::Handler;
use crate::lex_error::LexError;
use crate::position::Position;
use crate::state::ScanState;
use crate::token::TokenKind;

#[inline]
fn is_horizontal(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0C')
}

/// A run of horizontal whitespace, or exactly one line break.
///
/// A line break outside brackets arms the line-start check; inside
/// brackets lines are joined implicitly.
pub struct WhitespaceHandler;

impl Handler for WhitespaceHandler {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn can_handle(&self, state: &ScanState<'_>) -> bool {
        state
            .current()
            .is_some_and(|c| c == '\n' || is_horizontal(c))
    }

    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError> {
        if state.eat("\n") || state.eat("\r\n") {
            if state.nesting.is_empty() {
                state.at_line_start = true;
            }
        } else {
            while state
                .current()
                .is_some_and(|c| is_horizontal(c) && !(c == '\r' && state.peek(1) == Some('\n')))
            {
                state.advance();
            }
        }
        state.emit_trivia(TokenKind::Whitespace, start);
        Ok(())
    }
}
