use crate::dispatch::Handler;
use crate::lex_error::{LexError, LexErrorKind, Unterminated};
use crate::position::Position;
use crate::state::ScanState;
use crate::token::TokenKind;

/// `#` line comments and `/* */` block comments.
///
/// A line comment stops before its line break. Block comments do not
/// nest and may span lines.
pub struct CommentHandler;

impl Handler for CommentHandler {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn can_handle(&self, state: &ScanState<'_>) -> bool {
        state.starts_with("#") || state.starts_with("/*")
    }

    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError> {
        let rest = state.rest();
        let len = if let Some(body) = rest.strip_prefix("/*") {
            match body.find("*/") {
                Some(end) => 2 + end + 2,
                None => {
                    return Err(state.error(
                        LexErrorKind::UnterminatedLiteral(Unterminated::BlockComment),
                        &start,
                    ))
                }
            }
        } else {
            rest.find(['\n', '\r']).unwrap_or(rest.len())
        };
        state.advance_bytes(len);
        state.emit_trivia(TokenKind::Comment, start);
        Ok(())
    }
}
