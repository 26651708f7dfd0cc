//! Error types and diagnostic reporting

use std::io;
use std::path::PathBuf;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};
use thiserror::Error;

use super::Span;

/// Fatal scan error. Every variant terminates the run at the point of detection.
///
/// Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum LexError {
    #[error("unable to open {}: {source}", .path.display())]
    CannotOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("in line {line} expecting ';' token")]
    MissingTerminator { line: u32, span: Span },

    #[error("in line {line} expecting '{quote}' token")]
    UnterminatedQuote { quote: char, line: u32, span: Span },

    #[error("in line {line} expecting '{expected}' token")]
    UnbalancedBrace {
        expected: char,
        depth: i32,
        line: u32,
        span: Span,
    },

    #[error("in line {line} expecting '{expected}' token")]
    UnbalancedParen {
        expected: char,
        depth: i32,
        line: u32,
        span: Span,
    },

    #[error("in line {line} token longer than {limit} characters")]
    LexemeTooLong { limit: usize, line: u32, span: Span },
}

impl LexError {
    pub fn cannot_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CannotOpen {
            path: path.into(),
            source,
        }
    }

    pub fn missing_terminator(line: u32, span: Span) -> Self {
        Self::MissingTerminator { line, span }
    }

    pub fn unterminated_quote(quote: char, line: u32, span: Span) -> Self {
        Self::UnterminatedQuote { quote, line, span }
    }

    /// Brace imbalance; a negative depth means a `}` had no opener.
    pub fn unbalanced_brace(depth: i32, line: u32, span: Span) -> Self {
        Self::UnbalancedBrace {
            expected: if depth > 0 { '}' } else { '{' },
            depth,
            line,
            span,
        }
    }

    /// Parenthesis imbalance; a negative depth means a `)` had no opener.
    pub fn unbalanced_paren(depth: i32, line: u32, span: Span) -> Self {
        Self::UnbalancedParen {
            expected: if depth > 0 { ')' } else { '(' },
            depth,
            line,
            span,
        }
    }

    pub fn lexeme_too_long(limit: usize, line: u32, span: Span) -> Self {
        Self::LexemeTooLong { limit, line, span }
    }

    /// Line the error was detected on, if it has one
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::CannotOpen { .. } => None,
            Self::MissingTerminator { line, .. }
            | Self::UnterminatedQuote { line, .. }
            | Self::UnbalancedBrace { line, .. }
            | Self::UnbalancedParen { line, .. }
            | Self::LexemeTooLong { line, .. } => Some(*line),
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::CannotOpen { .. } => None,
            Self::MissingTerminator { span, .. }
            | Self::UnterminatedQuote { span, .. }
            | Self::UnbalancedBrace { span, .. }
            | Self::UnbalancedParen { span, .. }
            | Self::LexemeTooLong { span, .. } => Some(*span),
        }
    }

    /// The token the scanner expected to find, for structural violations
    pub fn expected(&self) -> Option<char> {
        match self {
            Self::MissingTerminator { .. } => Some(';'),
            Self::UnterminatedQuote { quote, .. } => Some(*quote),
            Self::UnbalancedBrace { expected, .. } | Self::UnbalancedParen { expected, .. } => {
                Some(*expected)
            }
            Self::CannotOpen { .. } | Self::LexemeTooLong { .. } => None,
        }
    }

    /// Process exit status for this error. Each kind gets its own status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CannotOpen { .. } => 2,
            Self::MissingTerminator { .. } => 3,
            Self::UnterminatedQuote { .. } => 4,
            Self::UnbalancedBrace { .. } => 5,
            Self::UnbalancedParen { .. } => 6,
            Self::LexemeTooLong { .. } => 7,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::CannotOpen { .. } => "cannot open source",
            Self::MissingTerminator { .. } => "missing statement terminator",
            Self::UnterminatedQuote { .. } => "unterminated quote",
            Self::UnbalancedBrace { .. } => "unbalanced braces",
            Self::UnbalancedParen { .. } => "unbalanced parentheses",
            Self::LexemeTooLong { .. } => "token too long",
        }
    }
}

pub type LexResult<T> = Result<T, LexError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    fn diagnostic(file_id: usize, error: &LexError) -> Diagnostic<usize> {
        let diagnostic = Diagnostic::error()
            .with_message(error.title())
            .with_notes(vec![error.to_string()]);

        match error.span() {
            Some(span) => diagnostic.with_labels(vec![
                Label::primary(file_id, span.range()).with_message(error.to_string()),
            ]),
            None => diagnostic,
        }
    }

    /// Write the diagnostic for `error` to any color-capable writer
    pub fn emit(&self, writer: &mut dyn WriteColor, file_id: usize, error: &LexError) {
        let diagnostic = Self::diagnostic(file_id, error);
        let _ = term::emit(writer, &self.config, &self.files, &diagnostic);
    }

    /// Report `error` on stderr
    pub fn report_error(&self, file_id: usize, error: &LexError) {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        self.emit(&mut writer.lock(), file_id, error);
    }

    /// Render `error` as plain text
    pub fn render(&self, file_id: usize, error: &LexError) -> String {
        let mut buffer = NoColor::new(Vec::new());
        self.emit(&mut buffer, file_id, error);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
