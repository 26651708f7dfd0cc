//! Lexer module for tokenizing C-like source code
//!
//! - `config`: lexeme cap, overflow policy and lint switch
//! - `source`: character stream with bounded pushback
//! - `token`: tokens, kinds and bounded lexemes
//! - `classify`: keyword/operator/punctuation/identifier tables
//! - `state`: scan counters and structural checks
//! - `scanner`: the scanning state machine

pub mod classify;
mod config;
mod scanner;
mod source;
mod state;
mod token;

pub use config::{Overflow, ScanConfig};
pub use scanner::Scanner;
pub use source::{CharSource, PUSHBACK_LIMIT, SourceFile};
pub use state::ScanState;
pub use token::{Lexeme, MAX_LEXEME_LEN, Token, TokenKind};
