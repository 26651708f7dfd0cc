//! Common infrastructure shared by the lexer and the driver

mod error;
mod span;

pub use error::{DiagnosticReporter, LexError, LexResult};
pub use span::Span;
