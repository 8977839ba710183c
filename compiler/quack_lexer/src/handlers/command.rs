use crate::dispatch::Handler;
use crate::handlers::identifier::is_ident_continue;
use crate::lex_error::{LexError, LexErrorKind};
use crate::nesting::{find_call_close, BracketKind, Shape};
use crate::position::Position;
use crate::state::ScanState;
use crate::token::{Token, TokenKind, TokenValue};

/// Returns `true` if the input starts with `keyword` as a whole word.
fn at_keyword(state: &ScanState<'_>, keyword: &str) -> bool {
    state
        .rest()
        .strip_prefix(keyword)
        .is_some_and(|after| !after.chars().next().is_some_and(is_ident_continue))
}

/// The configured print command.
///
/// Directly followed by `(`, the whole call is one `PRINT_COMMAND` token
/// whose value is the call text, followed by the tokens of the arguments.
/// The arguments are scanned by the same dispatch chain, bounded by the
/// call's closing parenthesis. Otherwise only the word is emitted.
pub struct PrintCommandHandler {
    keyword: String,
}

impl PrintCommandHandler {
    pub fn new(keyword: &str) -> Self {
        PrintCommandHandler {
            keyword: keyword.to_string(),
        }
    }

    fn consume_call(&self, state: &mut ScanState<'_>, start: Position) -> Result<bool, LexError> {
        let open = state.position().clone();
        let Some(close) = state.rest().get(1..).and_then(find_call_close) else {
            return Ok(false);
        };
        let slot = state.token_count();
        state.advance();
        state.nesting.open(Shape::Call, open);
        let close_index = state.position().index + close;

        let outer = state.set_limit(close_index);
        let chain = state.chain();
        let scanned = chain.run(state);
        state.set_limit(outer);
        scanned?;

        if !matches!(state.nesting.innermost(), Some((Shape::Call, _))) {
            if let Err((error, at)) = state.nesting.check_closed() {
                return Err(state.error(LexErrorKind::UnmatchedDelimiter(error), &at));
            }
        }
        let closer = state.position().clone();
        state
            .nesting
            .close(BracketKind::Round)
            .map_err(|e| state.error(LexErrorKind::UnmatchedDelimiter(e), &closer))?;
        state.advance();

        let raw = state.slice_from(&start);
        let token = Token {
            kind: TokenKind::PrintCommand,
            value: TokenValue::text(raw),
            start,
            end: state.position().clone(),
            raw: raw.to_string(),
        };
        state.insert_token(slot, token);
        Ok(true)
    }
}

impl Handler for PrintCommandHandler {
    fn name(&self) -> &'static str {
        "print-command"
    }

    fn can_handle(&self, state: &ScanState<'_>) -> bool {
        at_keyword(state, &self.keyword)
    }

    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError> {
        state.advance_bytes(self.keyword.len());
        if state.starts_with("(") && self.consume_call(state, start.clone())? {
            return Ok(());
        }
        // Without a findable `)`, the `(` is scanned as an ordinary bracket
        // and reported unclosed at end of input.
        state.emit(
            TokenKind::PrintCommand,
            TokenValue::text(&self.keyword),
            start,
        );
        Ok(())
    }
}

/// The configured declare command.
pub struct DeclareCommandHandler {
    keyword: String,
}

impl DeclareCommandHandler {
    pub fn new(keyword: &str) -> Self {
        DeclareCommandHandler {
            keyword: keyword.to_string(),
        }
    }
}

impl Handler for DeclareCommandHandler {
    fn name(&self) -> &'static str {
        "declare-command"
    }

    fn can_handle(&self, state: &ScanState<'_>) -> bool {
        at_keyword(state, &self.keyword)
    }

    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError> {
        state.advance_bytes(self.keyword.len());
        state.emit(
            TokenKind::VariableDeclare,
            TokenValue::text(&self.keyword),
            start,
        );
        Ok(())
    }
}
