//! Scanner for the Quack scripting language.
//!
//! Turns source text into a sequence of [`Token`]s: literals, identifiers
//! and keywords, operators, collection brackets, the two configurable
//! command keywords, and structural markers for indentation-based blocks.
//!
//! # Architecture
//!
//! A single pass over the source. [`Scanner::tokenize`] builds a
//! [`ScanState`] and hands it to the [`DispatchChain`], which repeatedly
//! picks the first [`Handler`] that accepts the input under the cursor and
//! lets it consume one lexeme. After the last character the indentation
//! stack is unwound and every bracket must be closed.
//!
//! - [`position`]: cursor positions (line, column, byte offset)
//! - [`token`]: token kinds, values and the external representation
//! - [`lex_error`]: located errors with a source snippet
//! - [`syntax`]: keyword configuration and scan options
//! - [`literal`]: numeral, string and escape recognizers
//! - [`nesting`]: bracket tracking and the dict/set lookahead
//! - [`indent`]: the indentation stack
//! - [`dispatch`] and [`handlers`]: the ordered handler chain
//!
//! # Example
//!
//! ```
//! use quack_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("let x = 5", None, "quack", "let")?;
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::VariableDeclare, TokenKind::Identifier, TokenKind::Assign, TokenKind::Integer]
//! );
//! # Ok::<(), quack_lexer::LexError>(())
//! ```

pub mod dispatch;
pub mod handlers;
pub mod indent;
pub mod lex_error;
pub mod literal;
pub mod nesting;
pub mod position;
pub mod state;
pub mod syntax;
pub mod token;

pub use dispatch::{DispatchChain, Handler};
pub use lex_error::{LexError, LexErrorKind};
pub use position::{Position, SourceId};
pub use state::ScanState;
pub use syntax::{ConfigError, ScanOptions, SyntaxConfig};
pub use token::{Base, ExternalToken, LiteralValue, Token, TokenKind, TokenValue};

use indent::Transition;
use lex_error::IndentError;

/// A configured scanner.
///
/// Holds the keyword configuration and the dispatch chain built from it.
/// Immutable once built, so one scanner can serve any number of scans,
/// from any number of threads.
pub struct Scanner {
    config: SyntaxConfig,
    options: ScanOptions,
    chain: DispatchChain,
}

impl Scanner {
    pub fn new(config: SyntaxConfig) -> Self {
        let chain = DispatchChain::standard(&config);
        Scanner {
            config,
            options: ScanOptions::default(),
            chain,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn config(&self) -> &SyntaxConfig {
        &self.config
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Handler names in dispatch order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.chain.names()
    }

    /// Scan `source` into tokens.
    ///
    /// `filename` names the source in positions and errors; `None` means
    /// [`SourceId::UNKNOWN`]. On failure no tokens are returned.
    #[tracing::instrument(level = "debug", skip_all, fields(
        file = filename.unwrap_or(SourceId::UNKNOWN),
        bytes = source.len(),
    ))]
    pub fn tokenize(&self, source: &str, filename: Option<&str>) -> Result<Vec<Token>, LexError> {
        let source_id = filename.map_or_else(SourceId::default, SourceId::new);
        let mut state = ScanState::new(source, source_id, &self.chain, self.options);

        self.chain.run(&mut state)?;
        finish(&mut state)?;

        let tokens = state.into_tokens();
        tracing::debug!(tokens = tokens.len(), "scan complete");
        Ok(tokens)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new(SyntaxConfig::default())
    }
}

/// End-of-input checks: unwind open blocks, then require every bracket to
/// be closed.
fn finish(state: &mut ScanState<'_>) -> Result<(), LexError> {
    let pops = state.indent.unwind().map_err(|e| {
        state.error(LexErrorKind::InconsistentIndentation(e), state.position())
    })?;
    state.emit_transition(Transition::Pop(pops));
    if !state.indent.is_base() {
        let levels = state.indent.levels().to_vec();
        return Err(state.error(
            LexErrorKind::InconsistentIndentation(IndentError::Unresolved { levels }),
            state.position(),
        ));
    }
    if let Err((error, at)) = state.nesting.check_closed() {
        return Err(state.error(LexErrorKind::UnmatchedDelimiter(error), &at));
    }
    Ok(())
}

/// Scan `source` with the given command keywords.
///
/// Convenience over [`Scanner`]; a rejected keyword configuration is
/// reported as [`LexErrorKind::InvalidConfiguration`].
pub fn tokenize(
    source: &str,
    filename: Option<&str>,
    print_command: &str,
    declare_command: &str,
) -> Result<Vec<Token>, LexError> {
    let config = SyntaxConfig::new(print_command, declare_command).map_err(|e| {
        LexError::configuration(e, filename.map_or_else(SourceId::default, SourceId::new))
    })?;
    Scanner::new(config).tokenize(source, filename)
}
