//! Handler dispatch.
//!
//! The scanner recognizes lexemes by asking an ordered list of handlers,
//! highest priority first, whether they can handle the input under the
//! cursor. The first one that answers yes consumes the lexeme. The order
//! resolves overlaps: the configured print command is tried before
//! identifiers, comments before operators, line-start indentation before
//! everything.

use crate::handlers::{
    CommentHandler, DeclareCommandHandler, IdentifierHandler, LineContinuationHandler,
    LineStartHandler, NumberHandler, OperatorHandler, PrintCommandHandler, QuotedHandler,
    WhitespaceHandler,
};
use crate::lex_error::{LexError, LexErrorKind};
use crate::position::Position;
use crate::state::ScanState;
use crate::syntax::SyntaxConfig;

/// A lexeme recognizer.
///
/// `can_handle` must not mutate anything. `consume` may emit any number
/// of tokens; it must either move the cursor or change state so that
/// `can_handle` turns false, or the scan would not progress.
pub trait Handler: Send + Sync {
    /// Short name used in traces.
    fn name(&self) -> &'static str;

    fn can_handle(&self, state: &ScanState<'_>) -> bool;

    /// Consume the lexeme starting at `start` (the cursor on entry).
    fn consume(&self, state: &mut ScanState<'_>, start: Position) -> Result<(), LexError>;
}

/// Handlers in priority order.
pub struct DispatchChain {
    handlers: Vec<Box<dyn Handler>>,
}

impl DispatchChain {
    pub fn new(handlers: Vec<Box<dyn Handler>>) -> Self {
        DispatchChain { handlers }
    }

    /// The full chain for `config`.
    pub fn standard(config: &SyntaxConfig) -> Self {
        Self::new(vec![
            Box::new(LineStartHandler),
            Box::new(LineContinuationHandler),
            Box::new(CommentHandler),
            Box::new(WhitespaceHandler),
            Box::new(PrintCommandHandler::new(config.print_command())),
            Box::new(DeclareCommandHandler::new(config.declare_command())),
            Box::new(NumberHandler),
            Box::new(QuotedHandler::STRING),
            Box::new(QuotedHandler::BYTES),
            Box::new(IdentifierHandler),
            Box::new(OperatorHandler),
        ])
    }

    /// Handler names in priority order.
    pub fn names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|handler| handler.name()).collect()
    }

    /// First handler that accepts the input under the cursor.
    pub fn select(&self, state: &ScanState<'_>) -> Option<&dyn Handler> {
        self.handlers
            .iter()
            .map(|handler| handler.as_ref())
            .find(|handler| handler.can_handle(state))
    }

    /// Dispatch until the state's read limit is reached.
    pub fn run(&self, state: &mut ScanState<'_>) -> Result<(), LexError> {
        while state.has_more() {
            let start = state.position().clone();
            let Some(handler) = self.select(state) else {
                let found = state.current().unwrap_or('\0');
                return Err(state.error(LexErrorKind::UnexpectedCharacter { found }, &start));
            };
            tracing::trace!(
                handler = handler.name(),
                line = start.line,
                column = start.column,
                "dispatch"
            );
            handler.consume(state, start)?;
        }
        Ok(())
    }
}
