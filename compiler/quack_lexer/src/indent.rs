//! Indentation tracking.
//!
//! Keeps the stack of enclosing indentation widths and turns the width of
//! each logical line into block transitions. The stack starts at `[0]`,
//! grows strictly upward, and is unwound back to `[0]` at end of input.

use smallvec::{smallvec, SmallVec};

use crate::lex_error::IndentError;

/// New tops left behind by successive pops, innermost first.
pub type Pops = SmallVec<[usize; 4]>;

/// What a line's indentation does to the block structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Same level as the enclosing block.
    Stay,
    /// Opens a block at this width.
    Push(usize),
    /// Closes one block per entry; each entry is the width returned to.
    Pop(Pops),
}

/// Stack of enclosing indentation widths.
///
/// # Invariants
///
/// - Never empty; the bottom entry is `0`.
/// - Strictly increasing from bottom to top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentStack {
    levels: SmallVec<[usize; 8]>,
}

impl Default for IndentStack {
    fn default() -> Self {
        IndentStack {
            levels: smallvec![0],
        }
    }
}

impl IndentStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Innermost width.
    pub fn top(&self) -> usize {
        self.levels.last().copied().unwrap_or(0)
    }

    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// Returns `true` when no block is open.
    pub fn is_base(&self) -> bool {
        self.levels.as_slice() == [0]
    }

    /// Apply the indentation `width` of a new line.
    ///
    /// A dedent must land exactly on an enclosing width; otherwise the
    /// stack is left untouched and the nearest enclosing width is reported.
    pub fn transition(&mut self, width: usize) -> Result<Transition, IndentError> {
        let top = self.top();
        if width == top {
            return Ok(Transition::Stay);
        }
        if width > top {
            self.levels.push(width);
            return Ok(Transition::Push(width));
        }
        if !self.levels.contains(&width) {
            let nearest = self
                .levels
                .iter()
                .copied()
                .filter(|&level| level < width)
                .max()
                .unwrap_or(0);
            return Err(IndentError::Misaligned { width, nearest });
        }
        let mut pops = Pops::new();
        while self.top() > width {
            self.levels.pop();
            pops.push(self.top());
        }
        Ok(Transition::Pop(pops))
    }

    /// Close every open block, returning the widths returned to.
    pub fn unwind(&mut self) -> Result<Pops, IndentError> {
        if self.levels.first() != Some(&0) {
            return Err(IndentError::Unresolved {
                levels: self.levels.to_vec(),
            });
        }
        let mut pops = Pops::new();
        while self.levels.len() > 1 {
            self.levels.pop();
            pops.push(self.top());
        }
        Ok(pops)
    }
}

/// Leading indentation of a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineIndent {
    /// Only spaces, tabs and comments before a line break or end of input.
    /// `len` covers the leading spaces and tabs. Such lines leave the block
    /// structure alone.
    Blank { len: usize },
    /// Code preceded by `width` spaces. Tabs are not indentation; they end
    /// the measured run and are scanned as whitespace.
    Code { width: usize },
}

/// Measure the indentation at the start of `line`.
pub fn measure(line: &str) -> LineIndent {
    let len = line.len() - line.trim_start_matches([' ', '\t']).len();
    if is_comment_only(&line[len..]) {
        return LineIndent::Blank { len };
    }
    let width = line.len() - line.trim_start_matches(' ').len();
    LineIndent::Code { width }
}

/// Returns `true` if `text` holds nothing but whitespace and comments up to
/// the end of its line. A block comment counts only if it closes on the
/// same line.
fn is_comment_only(mut text: &str) -> bool {
    loop {
        text = text.trim_start_matches([' ', '\t']);
        if text.is_empty() || text.starts_with(['\n', '\r', '#']) {
            return true;
        }
        let Some(body) = text.strip_prefix("/*") else {
            return false;
        };
        let Some(end) = body.find("*/") else {
            return false;
        };
        if body[..end].contains(['\n', '\r']) {
            return false;
        }
        text = &body[end + 2..];
    }
}

#[cfg(test)]
mod tests;
