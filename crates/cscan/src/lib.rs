//! cscan - lexical analyzer for C-like source files
//!
//! This library turns a source buffer into a stream of classified tokens and
//! performs lightweight structural checks while scanning.
//!
//! ## Architecture
//!
//! The crate is organized into:
//! - **Lexer** (`lexer/`): character source, token scanner, classifier tables
//!   the structural checker and scan configuration
//! - **Driver** (`driver/`): scan sessions over files and reports
//! - **Common** (`common/`): shared infrastructure (errors, spans)

pub mod common;
pub mod driver;
pub mod lexer;

// Re-exports for convenience
pub use common::{DiagnosticReporter, LexError, LexResult, Span};
pub use driver::{ScanReport, Session, tokenize};
pub use lexer::{Overflow, ScanConfig, ScanState, Scanner, Token, TokenKind};
