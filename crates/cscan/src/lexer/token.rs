//! Token definitions

use std::borrow::Cow;
use std::fmt;

use crate::common::Span;

/// Default hard cap on lexeme length, in characters
pub const MAX_LEXEME_LEN: usize = 100;

/// Token with its text and source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Lexeme,
    pub span: Span,
    /// 1-based line the token starts on
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: Lexeme, span: Span, line: u32) -> Self {
        Self {
            kind,
            lexeme,
            span,
            line,
        }
    }

    pub fn eof(offset: usize, line: u32) -> Self {
        Self::new(TokenKind::EndOfInput, Lexeme::default(), Span::point(offset), line)
    }

    pub fn text(&self) -> &str {
        self.lexeme.as_str()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Numeric text with a bare leading `.` normalized to `0.`
    ///
    /// Returns `None` for tokens that are not numeric constants.
    pub fn numeric_value_text(&self) -> Option<Cow<'_, str>> {
        if self.kind != TokenKind::NumericConstant {
            return None;
        }
        let text = self.text();
        if text.starts_with('.') {
            Some(Cow::Owned(format!("0{text}")))
        } else {
            Some(Cow::Borrowed(text))
        }
    }
}

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// `#include <stdio.h>`, `#define N 10`
    PreprocessorDirective,
    Keyword,
    /// Single-character operator such as `+` or `=`
    Operator,
    /// `, ; { } ( ) [ ]`
    Punctuation,
    NumericConstant,
    /// Well-known library identifier (`main`, `printf`, `scanf`)
    Identifier,
    StringLiteral,
    CharLiteral,
    /// Any other user-defined name
    UserVariable,
    Comment,
    EndOfInput,
    /// Character that matches no category
    Malformed,
}

impl TokenKind {
    /// Name used in token dumps
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::PreprocessorDirective => "PREPROCESSOR_DIRECTIVE",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "SPECIAL_CHARACTER",
            TokenKind::NumericConstant => "CONSTANT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::UserVariable => "VARIABLE",
            TokenKind::Comment => "COMMENT",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Malformed => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Lexeme text with a hard length cap.
///
/// Characters pushed past the cap are dropped and the lexeme is marked
/// truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    text: String,
    chars: usize,
    limit: usize,
    truncated: bool,
}

impl Lexeme {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            text: String::new(),
            chars: 0,
            limit,
            truncated: false,
        }
    }

    /// Append `ch`, returning `false` if it was dropped by the cap
    pub fn push(&mut self, ch: char) -> bool {
        if self.chars >= self.limit {
            self.truncated = true;
            return false;
        }
        self.text.push(ch);
        self.chars += 1;
        true
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }
}

impl Default for Lexeme {
    fn default() -> Self {
        Self::with_limit(MAX_LEXEME_LEN)
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
