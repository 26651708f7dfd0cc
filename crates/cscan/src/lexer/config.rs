//! Scanner configuration

use super::token::MAX_LEXEME_LEN;

/// What to do with a lexeme longer than the configured cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Keep the first `max_lexeme_len` characters and mark the lexeme truncated
    #[default]
    Truncate,
    /// Fail the scan
    Reject,
}

/// Configuration options for a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Hard cap on lexeme length, in characters
    pub max_lexeme_len: usize,
    pub overflow: Overflow,
    /// Run the statement-terminator lint on every line break
    pub lint_terminators: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_lexeme_len: MAX_LEXEME_LEN,
            overflow: Overflow::Truncate,
            lint_terminators: true,
        }
    }
}
