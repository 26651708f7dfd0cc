use cscan::lexer::classify::KEYWORDS;
use cscan::{ScanConfig, ScanState, Scanner, Token, TokenKind};
use proptest::prelude::*;

fn lossless_config() -> ScanConfig {
    ScanConfig {
        max_lexeme_len: 4096,
        lint_terminators: false,
        ..ScanConfig::default()
    }
}

/// Source fragments that never trigger a fatal error when concatenated
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,8}",
        "[0-9]{1,4}(\\.[0-9]{1,3})?",
        "\\.[0-9]{1,3}",
        "[-+*/%=!<>|&^,;{}()\\[\\]@$.~?:]",
        "[ \t\r\n]{1,3}",
        Just("\"hi \\\" there\"".to_string()),
        Just("'c'".to_string()),
        Just("'\\n'".to_string()),
        Just("// note\n".to_string()),
        Just("/* block\n */".to_string()),
        Just("#include <stdio.h>\n".to_string()),
        Just("#define X 1 \\\n  + 2\n".to_string()),
    ]
}

fn source() -> impl Strategy<Value = String> {
    proptest::collection::vec(fragment(), 0..48).prop_map(|parts| parts.concat())
}

fn scan(source: &str) -> Vec<Token> {
    let mut state = ScanState::new();
    Scanner::new(source, lossless_config())
        .tokenize_all(&mut state)
        .unwrap()
}

proptest! {
    #[test]
    fn whitespace_only_yields_end_of_input(ws in "[ \t\r\n]{0,64}") {
        let mut state = ScanState::new();
        let mut scanner = Scanner::new(&ws, ScanConfig::default());
        let token = scanner.next_token(&mut state).unwrap();
        prop_assert_eq!(token.kind, TokenKind::EndOfInput);
    }

    #[test]
    fn lexemes_and_whitespace_rebuild_source(src in source()) {
        let tokens = scan(&src);
        prop_assert!(tokens.last().is_some_and(Token::is_eof));

        let mut rebuilt = String::new();
        let mut end = 0;
        for token in &tokens {
            let gap = &src[end..token.span.start];
            prop_assert!(gap.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n')), "gap {:?}", gap);
            prop_assert_eq!(&src[token.span.range()], token.text());
            rebuilt.push_str(gap);
            rebuilt.push_str(token.text());
            end = token.span.end;
        }
        prop_assert_eq!(rebuilt, src);
    }

    #[test]
    fn single_keyword_is_one_token(index in 0..KEYWORDS.len(), pad in "[ \t]{0,3}") {
        let keyword = KEYWORDS[index];
        let tokens = scan(&format!("{pad}{keyword}{pad}"));
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Keyword);
        prop_assert_eq!(tokens[0].text(), keyword);
    }

    #[test]
    fn terminated_lines_pass_the_lint(
        lines in proptest::collection::vec(
            prop_oneof![
                "[a-z]{1,6} = [0-9]{1,3};",
                "[a-z]{1,6}\\(\\) \\{",
                Just("}".to_string()),
                "[a-z]{1,6}; // [a-z ]{0,10}",
                Just(String::new()),
            ],
            0..24,
        )
    ) {
        let src = lines.join("\n") + "\n";
        let mut state = ScanState::new();
        let result = Scanner::new(&src, ScanConfig::default()).tokenize_all(&mut state);
        prop_assert!(result.is_ok(), "{:?}", result.err());
    }
}
