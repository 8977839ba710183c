//! Scan state.
//!
//! One [`ScanState`] exists per scan. It owns the cursor, the tokens
//! emitted so far, the indentation stack and the bracket tracker, and is
//! handed by exclusive reference to each handler in turn. Nothing in it
//! outlives the scan.

use crate::dispatch::DispatchChain;
use crate::indent::{IndentStack, Transition};
use crate::lex_error::{LexError, LexErrorKind};
use crate::nesting::NestingTracker;
use crate::position::{Position, SourceId};
use crate::syntax::ScanOptions;
use crate::token::{Token, TokenKind, TokenValue};

/// Mutable state of one scan.
///
/// Reads are bounded by an exclusive byte `limit`, normally the end of the
/// source. A handler may lower the limit to scan a sub-span with the same
/// dispatch chain, and must restore it afterwards.
pub struct ScanState<'s> {
    source: &'s str,
    cursor: Position,
    limit: usize,
    tokens: Vec<Token>,
    chain: &'s DispatchChain,
    options: ScanOptions,
    pub(crate) indent: IndentStack,
    pub(crate) nesting: NestingTracker,
    /// Set after a line break outside brackets, and at the start of input.
    pub(crate) at_line_start: bool,
}

impl<'s> ScanState<'s> {
    pub fn new(
        source: &'s str,
        source_id: SourceId,
        chain: &'s DispatchChain,
        options: ScanOptions,
    ) -> Self {
        ScanState {
            source,
            cursor: Position::start(source_id),
            limit: source.len(),
            tokens: Vec::new(),
            chain,
            options,
            indent: IndentStack::new(),
            nesting: NestingTracker::new(),
            at_line_start: true,
        }
    }

    // === Reading ===

    /// The live cursor.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.cursor
    }

    /// Unconsumed input up to the limit.
    #[inline]
    pub fn rest(&self) -> &'s str {
        self.source.get(self.cursor.index..self.limit).unwrap_or("")
    }

    /// Character under the cursor, `None` at the limit.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character `offset` characters past the cursor.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    #[inline]
    pub fn has_more(&self) -> bool {
        self.cursor.index < self.limit
    }

    #[inline]
    pub fn starts_with(&self, text: &str) -> bool {
        self.rest().starts_with(text)
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: &Position) -> &'s str {
        self.source.get(start.index..self.cursor.index).unwrap_or("")
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    pub fn chain(&self) -> &'s DispatchChain {
        self.chain
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn indent_levels(&self) -> &[usize] {
        self.indent.levels()
    }

    pub fn nesting(&self) -> &NestingTracker {
        &self.nesting
    }

    // === Moving ===

    /// Consume one character.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.cursor.advance(c);
        Some(c)
    }

    /// Consume whole characters until `len` bytes have been consumed.
    pub fn advance_bytes(&mut self, len: usize) {
        let end = self.cursor.index + len;
        while self.cursor.index < end && self.advance().is_some() {}
    }

    /// Consume `text` if the input continues with it.
    pub fn eat(&mut self, text: &str) -> bool {
        if self.starts_with(text) {
            self.advance_bytes(text.len());
            true
        } else {
            false
        }
    }

    /// Lower (or restore) the read limit, returning the previous one.
    pub fn set_limit(&mut self, limit: usize) -> usize {
        std::mem::replace(&mut self.limit, limit.min(self.source.len()))
    }

    // === Emitting ===

    /// Append a token spanning `start` to the cursor.
    pub fn emit(&mut self, kind: TokenKind, value: TokenValue, start: Position) {
        let raw = self.slice_from(&start).to_string();
        self.tokens.push(Token {
            kind,
            value,
            start,
            end: self.cursor.clone(),
            raw,
        });
    }

    /// Append a zero-width token at the cursor.
    pub fn emit_structural(&mut self, kind: TokenKind, value: TokenValue) {
        self.tokens.push(Token {
            kind,
            value,
            start: self.cursor.clone(),
            end: self.cursor.clone(),
            raw: String::new(),
        });
    }

    /// Append a whitespace or comment token, if trivia is retained.
    pub fn emit_trivia(&mut self, kind: TokenKind, start: Position) {
        if self.options.retain_trivia {
            let text = self.slice_from(&start);
            self.emit(kind, TokenValue::text(text), start);
        }
    }

    /// Emit the structural tokens of an indentation transition.
    pub(crate) fn emit_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Push(width) => {
                self.emit_structural(TokenKind::Indent, TokenValue::Width(width));
                self.emit_structural(TokenKind::BlockStart, TokenValue::Unit);
            }
            Transition::Pop(pops) => {
                for width in pops {
                    self.emit_structural(TokenKind::BlockEnd, TokenValue::Unit);
                    self.emit_structural(TokenKind::Dedent, TokenValue::Width(width));
                }
            }
        }
    }

    /// Number of tokens emitted so far; a slot for [`insert_token`](Self::insert_token).
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Insert a token before those emitted after `slot` was taken.
    pub fn insert_token(&mut self, slot: usize, token: Token) {
        let slot = slot.min(self.tokens.len());
        self.tokens.insert(slot, token);
    }

    /// Build an error located at `at`.
    #[cold]
    pub fn error(&self, kind: LexErrorKind, at: &Position) -> LexError {
        LexError::at(kind, at, self.source)
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
