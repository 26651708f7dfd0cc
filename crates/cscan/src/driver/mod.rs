//! Scan sessions
//!
//! A [`Session`] owns one source and runs it through the [`Scanner`] with a
//! fresh [`ScanState`], then applies the end-of-scan balance check.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::common::LexResult;
use crate::lexer::{ScanState, Scanner, SourceFile, Token, TokenKind};

pub use crate::lexer::{Overflow, ScanConfig};

/// Tokens and final counters of a completed scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub tokens: Vec<Token>,
    pub state: ScanState,
}

impl ScanReport {
    /// Number of tokens per kind, end-of-input included
    pub fn count_by_kind(&self) -> BTreeMap<TokenKind, usize> {
        let mut counts = BTreeMap::new();
        for token in &self.tokens {
            *counts.entry(token.kind).or_insert(0) += 1;
        }
        counts
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }
}

/// One scan over one source
pub struct Session {
    source: SourceFile,
    config: ScanConfig,
}

impl Session {
    pub fn open(path: impl AsRef<Path>, config: ScanConfig) -> LexResult<Self> {
        Ok(Self::new(SourceFile::open(path)?, config))
    }

    pub fn new(source: SourceFile, config: ScanConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    /// Scan to end of input, handing each token to `on_token` as it is produced.
    ///
    /// Tokens before a fatal error have already been delivered when the error
    /// is returned. Returns the final state after the balance check.
    pub fn run(&self, mut on_token: impl FnMut(&Token)) -> LexResult<ScanState> {
        info!(source = self.source.name(), "scanning");
        let mut state = ScanState::new();
        let mut scanner = Scanner::new(self.source.text(), self.config);
        let mut count = 0usize;

        loop {
            let token = scanner.next_token(&mut state)?;
            on_token(&token);
            count += 1;
            if token.is_eof() {
                break;
            }
        }

        debug!(
            tokens = count,
            lines = state.current_line(),
            paren_depth = state.paren_depth(),
            brace_depth = state.brace_depth(),
            "end of input"
        );
        state.finish(scanner.position())?;
        Ok(state)
    }

    /// Scan to end of input and collect every token
    pub fn tokenize(&self) -> LexResult<ScanReport> {
        let mut tokens = Vec::new();
        let state = self.run(|token| tokens.push(token.clone()))?;
        Ok(ScanReport { tokens, state })
    }
}

/// Tokenize in-memory source text
pub fn tokenize(source: &str, config: ScanConfig) -> LexResult<ScanReport> {
    Session::new(SourceFile::from_text("<input>", source), config).tokenize()
}
