use std::path::PathBuf;

use cscan::{LexError, ScanConfig, Session, TokenKind};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn scan_fixture(name: &str) -> Result<cscan::ScanReport, LexError> {
    Session::open(fixture(name), ScanConfig::default())?.tokenize()
}

#[test]
fn test_hello_scans_cleanly() {
    let report = scan_fixture("hello.c").unwrap();

    assert_eq!(report.state.brace_depth(), 0);
    assert_eq!(report.state.paren_depth(), 0);
    assert_eq!(report.state.quote_parity(), 0);
    assert_eq!(report.state.newlines(), 17);

    assert_eq!(report.count(TokenKind::PreprocessorDirective), 2);
    assert_eq!(report.count(TokenKind::Comment), 2);
    assert_eq!(report.count(TokenKind::StringLiteral), 2);
    assert_eq!(report.count(TokenKind::CharLiteral), 1);
    assert_eq!(report.count(TokenKind::Identifier), 3);
    assert_eq!(report.count(TokenKind::Malformed), 0);

    let scale = report
        .tokens
        .iter()
        .find(|t| t.kind == TokenKind::NumericConstant && t.text() == ".5")
        .unwrap();
    assert_eq!(scale.line, 9);
    assert_eq!(scale.numeric_value_text().as_deref(), Some("0.5"));
}

#[test]
fn test_hello_round_trips() {
    let source = std::fs::read_to_string(fixture("hello.c")).unwrap();
    let report = scan_fixture("hello.c").unwrap();

    let mut rebuilt = String::new();
    let mut end = 0;
    for token in &report.tokens {
        rebuilt.push_str(&source[end..token.span.start]);
        rebuilt.push_str(token.text());
        end = token.span.end;
    }
    assert_eq!(rebuilt, source);
}

#[test]
fn test_missing_semicolon() {
    let err = scan_fixture("missing_semicolon.c").unwrap_err();
    assert!(matches!(err, LexError::MissingTerminator { line: 2, .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_unclosed_brace() {
    let err = scan_fixture("unclosed_brace.c").unwrap_err();
    assert!(matches!(err, LexError::UnbalancedBrace { expected: '}', .. }));
    assert_eq!(err.line(), Some(5));
}

#[test]
fn test_unterminated_string() {
    let err = scan_fixture("unterminated_string.c").unwrap_err();
    assert!(matches!(
        err,
        LexError::UnterminatedQuote {
            quote: '"',
            line: 2,
            ..
        }
    ));
}

#[test]
fn test_missing_file() {
    let err = scan_fixture("does_not_exist.c").unwrap_err();
    assert!(matches!(err, LexError::CannotOpen { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_invalid_utf8_becomes_malformed() {
    let report = scan_fixture("invalid_utf8.c").unwrap();

    let tokens: Vec<_> = report.tokens.iter().map(|t| (t.kind, t.text())).collect();
    assert_eq!(
        tokens,
        vec![
            (TokenKind::UserVariable, "x"),
            (TokenKind::Operator, "="),
            (TokenKind::Malformed, "\u{FFFD}"),
            (TokenKind::Punctuation, ";"),
            (TokenKind::EndOfInput, ""),
        ]
    );
    assert_eq!(report.state.newlines(), 1);
}
