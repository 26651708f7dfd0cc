//! Scan state and structural checks
//!
//! `ScanState` holds the counters a scan mutates: lines, bracket and brace
//! depth, quote parity and the bookkeeping behind the statement-terminator
//! lint. It is owned by the caller and threaded through every
//! [`Scanner::next_token`](super::Scanner::next_token) call, so independent
//! scans never share state.
//!
//! # Terminator lint
//!
//! Every newline consumed between tokens ends a line that has to justify the
//! break. A line is accepted when it is blank, ends in `;`, `{` or `}`, ends
//! in a comment, or is a preprocessor directive. Otherwise the break stays
//! pending until the next significant character: a `{` (brace on its own
//! line) accepts it, anything else is a missing `;`.
//!
//! This is a line-window heuristic, not a grammar. Statements that legally
//! span several lines are reported too.

use tracing::debug;

use crate::common::{LexError, LexResult, Span};

use super::token::{Token, TokenKind};

/// Unjustified line break waiting for the next significant character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingBreak {
    line: u32,
    span: Span,
}

/// Mutable counters for one scan session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Newlines consumed so far
    line: u32,
    paren_depth: i32,
    brace_depth: i32,
    quote_parity: u8,
    last_construct_was_comment: bool,
    last_construct_was_directive: bool,
    /// Last character of the last token on the current line, with its end offset
    line_tail: Option<(char, usize)>,
    pending_break: Option<PendingBreak>,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of newlines consumed so far
    pub fn newlines(&self) -> u32 {
        self.line
    }

    /// 1-based line the scanner is currently on
    pub fn current_line(&self) -> u32 {
        self.line + 1
    }

    pub fn paren_depth(&self) -> i32 {
        self.paren_depth
    }

    pub fn brace_depth(&self) -> i32 {
        self.brace_depth
    }

    pub fn quote_parity(&self) -> u8 {
        self.quote_parity
    }

    pub fn last_construct_was_comment(&self) -> bool {
        self.last_construct_was_comment
    }

    pub(crate) fn toggle_quote(&mut self) {
        self.quote_parity ^= 1;
    }

    /// Count a newline inside a comment, literal or directive continuation
    pub(crate) fn count_newline(&mut self) {
        self.line += 1;
    }

    /// Depth bookkeeping for punctuation; other characters are ignored
    pub(crate) fn track_punctuation(&mut self, ch: char) {
        match ch {
            '(' => self.paren_depth += 1,
            ')' => self.paren_depth -= 1,
            '{' => self.brace_depth += 1,
            '}' => self.brace_depth -= 1,
            _ => {}
        }
    }

    /// Record an emitted token as the latest construct on the current line
    pub(crate) fn note_token(&mut self, token: &Token) {
        self.last_construct_was_comment = token.kind == TokenKind::Comment;
        self.last_construct_was_directive = token.kind == TokenKind::PreprocessorDirective;
        self.line_tail = token.lexeme.last_char().map(|ch| (ch, token.span.end));
    }

    /// Handle a newline consumed between tokens. With `lint` off only the
    /// line counter moves.
    pub(crate) fn end_line(&mut self, lint: bool) -> LexResult<()> {
        let finished = self.current_line();
        self.line += 1;

        let tail = self.line_tail.take();
        let comment = std::mem::take(&mut self.last_construct_was_comment);
        let directive = std::mem::take(&mut self.last_construct_was_directive);

        if !lint || comment || directive {
            return Ok(());
        }

        match tail {
            None | Some((';' | '{' | '}', _)) => Ok(()),
            Some((ch, end)) => {
                debug!(line = finished, tail = %ch, "line break pending terminator check");
                self.pending_break = Some(PendingBreak {
                    line: finished,
                    span: Span::new(end - ch.len_utf8(), end),
                });
                Ok(())
            }
        }
    }

    /// Settle a pending line break once the next significant character is known.
    ///
    /// `None` means the input ended.
    pub(crate) fn resolve_pending(&mut self, next: Option<char>) -> LexResult<()> {
        match self.pending_break.take() {
            Some(_) if next == Some('{') => Ok(()),
            Some(pending) => Err(LexError::missing_terminator(pending.line, pending.span)),
            None => Ok(()),
        }
    }

    /// End-of-scan balance check. `offset` is the end of the source.
    pub fn finish(&self, offset: usize) -> LexResult<()> {
        let line = self.current_line();
        if self.brace_depth != 0 {
            return Err(LexError::unbalanced_brace(
                self.brace_depth,
                line,
                Span::point(offset),
            ));
        }
        if self.paren_depth != 0 {
            return Err(LexError::unbalanced_paren(
                self.paren_depth,
                line,
                Span::point(offset),
            ));
        }
        Ok(())
    }
}
