//! Character source over a source buffer
//!
//! `SourceFile` owns the text read from disk; `CharSource` walks it one
//! character at a time with a small bounded pushback instead of seeking.

use std::fs;
use std::path::Path;
use std::str::Chars;

use tracing::debug;

use crate::common::{LexError, LexResult};

/// Maximum number of characters that can be pushed back with [`CharSource::unread`]
pub const PUSHBACK_LIMIT: usize = 3;

/// Source text loaded into memory
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    text: String,
}

impl SourceFile {
    /// Read `path` into memory. Invalid UTF-8 is replaced with U+FFFD.
    pub fn open(path: impl AsRef<Path>) -> LexResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| LexError::cannot_open(path, err))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        debug!(path = %path.display(), bytes = bytes.len(), "opened source");

        Ok(Self {
            name: path.display().to_string(),
            text,
        })
    }

    /// In-memory source, not backed by a file
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Forward-only character stream with up to [`PUSHBACK_LIMIT`] characters of pushback
#[derive(Debug, Clone)]
pub struct CharSource<'a> {
    chars: Chars<'a>,
    /// Byte offset of the next character `read` delivers
    offset: usize,
    /// Most recently read characters, oldest first
    history: [char; PUSHBACK_LIMIT],
    history_len: usize,
    /// Pushed-back characters; the last element is delivered next
    pending: [char; PUSHBACK_LIMIT],
    pending_len: usize,
}

impl<'a> CharSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            offset: 0,
            history: ['\0'; PUSHBACK_LIMIT],
            history_len: 0,
            pending: ['\0'; PUSHBACK_LIMIT],
            pending_len: 0,
        }
    }

    /// Read one character, or `None` at end of input
    pub fn read(&mut self) -> Option<char> {
        let ch = if self.pending_len > 0 {
            self.pending_len -= 1;
            self.pending[self.pending_len]
        } else {
            self.chars.next()?
        };

        if self.history_len == PUSHBACK_LIMIT {
            self.history.rotate_left(1);
            self.history_len -= 1;
        }
        self.history[self.history_len] = ch;
        self.history_len += 1;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// Push back up to `n` of the most recently read characters.
    ///
    /// Returns how many were pushed back; this is less than `n` when fewer
    /// characters are remembered.
    pub fn unread(&mut self, n: usize) -> usize {
        let count = n.min(self.history_len);
        for _ in 0..count {
            self.history_len -= 1;
            let ch = self.history[self.history_len];
            self.pending[self.pending_len] = ch;
            self.pending_len += 1;
            self.offset -= ch.len_utf8();
        }
        count
    }

    /// Look at the next character without consuming it
    pub fn peek(&mut self) -> Option<char> {
        let ch = self.read()?;
        self.unread(1);
        Some(ch)
    }

    /// Consume the next character if it equals `expected`
    pub fn eat(&mut self, expected: char) -> bool {
        match self.read() {
            Some(ch) if ch == expected => true,
            Some(_) => {
                self.unread(1);
                false
            }
            None => false,
        }
    }

    /// Byte offset of the next character to be read
    pub fn position(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_until_end() {
        let mut src = CharSource::new("ab");
        assert_eq!(src.read(), Some('a'));
        assert_eq!(src.read(), Some('b'));
        assert_eq!(src.read(), None);
        assert_eq!(src.read(), None);
        assert_eq!(src.position(), 2);
    }

    #[test]
    fn test_unread_redelivers_in_order() {
        let mut src = CharSource::new("abcd");
        src.read();
        src.read();
        src.read();
        assert_eq!(src.unread(2), 2);
        assert_eq!(src.position(), 1);
        assert_eq!(src.read(), Some('b'));
        assert_eq!(src.read(), Some('c'));
        assert_eq!(src.read(), Some('d'));
    }

    #[test]
    fn test_unread_is_bounded() {
        let mut src = CharSource::new("abcdef");
        for _ in 0..5 {
            src.read();
        }
        assert_eq!(src.unread(10), PUSHBACK_LIMIT);
        assert_eq!(src.read(), Some('c'));
    }

    #[test]
    fn test_unread_at_start_does_nothing() {
        let mut src = CharSource::new("x");
        assert_eq!(src.unread(1), 0);
        assert_eq!(src.read(), Some('x'));
    }

    #[test]
    fn test_position_counts_bytes() {
        let mut src = CharSource::new("é;");
        src.read();
        assert_eq!(src.position(), 2);
        src.unread(1);
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn test_peek_and_eat() {
        let mut src = CharSource::new("/*");
        assert_eq!(src.peek(), Some('/'));
        assert!(!src.eat('*'));
        assert!(src.eat('/'));
        assert!(src.eat('*'));
        assert_eq!(src.peek(), None);
    }

    #[test]
    fn test_open_missing_file() {
        let err = SourceFile::open("/definitely/not/here.c").unwrap_err();
        assert!(matches!(err, LexError::CannotOpen { .. }));
    }
}
