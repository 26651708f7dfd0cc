//! Token scanner
//!
//! Hand-written state machine over a [`CharSource`]: skip whitespace, dispatch
//! on the first significant character, accumulate the lexeme, classify.

use tracing::trace;

use super::classify::{classify_symbol, classify_word};
use super::config::{Overflow, ScanConfig};
use super::source::CharSource;
use super::state::ScanState;
use super::token::{Lexeme, Token, TokenKind};
use crate::common::{LexError, LexResult, Span};

/// Scanner for C-like source text
pub struct Scanner<'a> {
    text: &'a str,
    source: CharSource<'a>,
    config: ScanConfig,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over `source`
    pub fn new(source: &'a str, config: ScanConfig) -> Self {
        Self {
            text: source,
            source: CharSource::new(source),
            config,
        }
    }

    /// Byte offset of the next unread character
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Get the next token, updating `state`.
    ///
    /// Returns [`TokenKind::EndOfInput`] once the source is exhausted, and
    /// keeps returning it on further calls.
    pub fn next_token(&mut self, state: &mut ScanState) -> LexResult<Token> {
        let Some(first) = self.skip_whitespace(state)? else {
            state.resolve_pending(None)?;
            return Ok(Token::eof(self.source.position(), state.current_line()));
        };
        state.resolve_pending(Some(first))?;

        let start = self.source.position() - first.len_utf8();
        let line = state.current_line();
        let mut lexeme = Lexeme::with_limit(self.config.max_lexeme_len);
        lexeme.push(first);

        let next = self.source.peek();
        let kind = match first {
            '/' if next == Some('/') => {
                self.line_comment(&mut lexeme);
                TokenKind::Comment
            }
            '/' if next == Some('*') => {
                self.block_comment(&mut lexeme, state);
                TokenKind::Comment
            }
            '#' => {
                self.directive(&mut lexeme, state);
                TokenKind::PreprocessorDirective
            }
            '"' | '\'' => self.quoted(first, &mut lexeme, state, line, start)?,
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.word(&mut lexeme);
                // Classify the whole word; the lexeme may have been cut at the cap.
                classify_word(&self.text[start..self.source.position()], state)
            }
            c if c.is_ascii_digit() => {
                self.number(&mut lexeme, false);
                TokenKind::NumericConstant
            }
            '.' if next.is_some_and(|c| c.is_ascii_digit()) => {
                self.number(&mut lexeme, true);
                TokenKind::NumericConstant
            }
            c => classify_symbol(c, state),
        };

        let span = Span::new(start, self.source.position());
        if lexeme.is_truncated() && self.config.overflow == Overflow::Reject {
            return Err(LexError::lexeme_too_long(self.config.max_lexeme_len, line, span));
        }

        let token = Token::new(kind, lexeme, span, line);
        trace!(kind = %token.kind, lexeme = %token.lexeme, line, "token");
        state.note_token(&token);
        Ok(token)
    }

    /// Tokenize the rest of the source, including the final end-of-input token
    pub fn tokenize_all(mut self, state: &mut ScanState) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token(state)?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Skip blanks, running the line-end check on every newline.
    /// Returns the first significant character.
    fn skip_whitespace(&mut self, state: &mut ScanState) -> LexResult<Option<char>> {
        while let Some(ch) = self.source.read() {
            match ch {
                '\n' => state.end_line(self.config.lint_terminators)?,
                ' ' | '\t' | '\r' => {}
                _ => return Ok(Some(ch)),
            }
        }
        Ok(None)
    }

    /// `//` comment up to, not including, the newline
    fn line_comment(&mut self, lexeme: &mut Lexeme) {
        while let Some(ch) = self.source.read() {
            if ch == '\n' {
                self.source.unread(1);
                break;
            }
            lexeme.push(ch);
        }
    }

    /// `/* */` comment. Running into end of input just ends the comment.
    fn block_comment(&mut self, lexeme: &mut Lexeme, state: &mut ScanState) {
        // The opening `*` cannot close the comment, so `/*/` stays open.
        let mut prev = None;
        if let Some(star) = self.source.read() {
            lexeme.push(star);
        }
        while let Some(ch) = self.source.read() {
            lexeme.push(ch);
            if ch == '\n' {
                state.count_newline();
            }
            if prev == Some('*') && ch == '/' {
                return;
            }
            prev = Some(ch);
        }
    }

    /// Directive line up to the newline, following `\` continuations
    fn directive(&mut self, lexeme: &mut Lexeme, state: &mut ScanState) {
        while let Some(ch) = self.source.read() {
            match ch {
                '\n' => {
                    self.source.unread(1);
                    return;
                }
                '\\' => {
                    lexeme.push(ch);
                    if self.source.eat('\r') {
                        lexeme.push('\r');
                    }
                    if self.source.eat('\n') {
                        lexeme.push('\n');
                        state.count_newline();
                    }
                }
                _ => {
                    lexeme.push(ch);
                }
            }
        }
    }

    /// String or char literal. `\` keeps the following character verbatim.
    fn quoted(
        &mut self,
        quote: char,
        lexeme: &mut Lexeme,
        state: &mut ScanState,
        line: u32,
        start: usize,
    ) -> LexResult<TokenKind> {
        state.toggle_quote();
        while let Some(ch) = self.source.read() {
            lexeme.push(ch);
            match ch {
                '\\' => {
                    if let Some(escaped) = self.source.read() {
                        lexeme.push(escaped);
                        if escaped == '\n' {
                            state.count_newline();
                        }
                    }
                }
                '\n' => state.count_newline(),
                c if c == quote => {
                    state.toggle_quote();
                    break;
                }
                _ => {}
            }
        }

        if state.quote_parity() != 0 {
            let span = Span::new(start, start + quote.len_utf8());
            return Err(LexError::unterminated_quote(quote, line, span));
        }

        Ok(if quote == '"' {
            TokenKind::StringLiteral
        } else {
            TokenKind::CharLiteral
        })
    }

    fn word(&mut self, lexeme: &mut Lexeme) {
        while let Some(ch) = self.source.read() {
            if !(ch.is_ascii_alphanumeric() || ch == '_') {
                self.source.unread(1);
                break;
            }
            lexeme.push(ch);
        }
    }

    /// Digits with at most one decimal point
    fn number(&mut self, lexeme: &mut Lexeme, mut seen_dot: bool) {
        while let Some(ch) = self.source.read() {
            if ch.is_ascii_digit() {
                lexeme.push(ch);
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                lexeme.push(ch);
            } else {
                self.source.unread(1);
                break;
            }
        }
    }
}
