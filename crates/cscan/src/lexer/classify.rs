//! Token classification tables
//!
//! Lookup order, first match wins: keyword, operator, punctuation, known
//! identifier. Words that match nothing are user variables; single characters
//! that match nothing are malformed.

use super::state::ScanState;
use super::token::TokenKind;

/// Reserved words
pub const KEYWORDS: [&str; 27] = [
    "int", "float", "return", "if", "else", "while", "for", "do", "break", "continue", "char",
    "double", "void", "switch", "case", "default", "const", "static", "sizeof", "struct", "short",
    "signed", "unsigned", "enum", "union", "long", "typedef",
];

/// Well-known library identifiers
pub const KNOWN_IDENTIFIERS: [&str; 3] = ["main", "printf", "scanf"];

pub const OPERATORS: [char; 12] = ['+', '-', '*', '/', '%', '=', '!', '<', '>', '|', '&', '^'];

pub const PUNCTUATION: [char; 8] = [',', ';', '{', '}', '(', ')', '[', ']'];

pub fn is_keyword(text: &str) -> bool {
    matches!(
        text,
        "int"
            | "float"
            | "return"
            | "if"
            | "else"
            | "while"
            | "for"
            | "do"
            | "break"
            | "continue"
            | "char"
            | "double"
            | "void"
            | "switch"
            | "case"
            | "default"
            | "const"
            | "static"
            | "sizeof"
            | "struct"
            | "short"
            | "signed"
            | "unsigned"
            | "enum"
            | "union"
            | "long"
            | "typedef"
    )
}

pub fn is_known_identifier(text: &str) -> bool {
    matches!(text, "main" | "printf" | "scanf")
}

pub fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '%' | '=' | '!' | '<' | '>' | '|' | '&' | '^')
}

pub fn is_punctuation(ch: char) -> bool {
    matches!(ch, ',' | ';' | '{' | '}' | '(' | ')' | '[' | ']')
}

/// The single character of `text`, if it has exactly one
fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Table lookup in priority order. Punctuation updates the depth counters.
fn lookup(text: &str, state: &mut ScanState) -> Option<TokenKind> {
    if is_keyword(text) {
        return Some(TokenKind::Keyword);
    }
    if let Some(ch) = single_char(text) {
        if is_operator(ch) {
            return Some(TokenKind::Operator);
        }
        if is_punctuation(ch) {
            state.track_punctuation(ch);
            return Some(TokenKind::Punctuation);
        }
    }
    if is_known_identifier(text) {
        return Some(TokenKind::Identifier);
    }
    None
}

/// Classify a bare word (letters, digits, `_`)
pub fn classify_word(text: &str, state: &mut ScanState) -> TokenKind {
    lookup(text, state).unwrap_or(TokenKind::UserVariable)
}

/// Classify a single character that starts no longer token
pub fn classify_symbol(ch: char, state: &mut ScanState) -> TokenKind {
    let mut buf = [0u8; 4];
    lookup(ch.encode_utf8(&mut buf), state).unwrap_or(TokenKind::Malformed)
}
