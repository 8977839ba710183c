//! The standard handlers, one module per lexeme family.
//!
//! Listed in dispatch priority order:
//!
//! 1. [`LineStartHandler`]: indentation at the start of a line
//! 2. [`LineContinuationHandler`]: `\` before a line break
//! 3. [`CommentHandler`]: `#` and `/* */` comments
//! 4. [`WhitespaceHandler`]: horizontal runs and line breaks
//! 5. [`PrintCommandHandler`]: the configured print command and its call form
//! 6. [`DeclareCommandHandler`]: the configured declare command
//! 7. [`NumberHandler`]: numerals
//! 8. [`QuotedHandler::STRING`] and [`QuotedHandler::BYTES`]: quoted literals
//! 9. [`IdentifierHandler`]: identifiers, keywords, `True`/`False`/`None`
//! 10. [`OperatorHandler`]: operators, punctuation and brackets

mod command;
mod comment;
mod continuation;
pub mod identifier;
mod line_start;
mod number;
mod operator;
mod quoted;
mod whitespace;

pub use command::{DeclareCommandHandler, PrintCommandHandler};
pub use comment::CommentHandler;
pub use continuation::LineContinuationHandler;
pub use identifier::IdentifierHandler;
pub use line_start::LineStartHandler;
pub use number::NumberHandler;
pub use operator::OperatorHandler;
pub use quoted::QuotedHandler;
pub use whitespace::WhitespaceHandler;
