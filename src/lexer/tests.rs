//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric and string literals
//! - Symbols and newlines
//! - Comments
//! - Error cases

use super::{
    lexer::{check_source_len, tokenize},
    tokens::{Keyword, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn values(source: &str) -> Vec<String> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.value)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("let var if else for as return function class"),
        vec![
            TokenKind::Identifier(Some(Keyword::Let)),
            TokenKind::Identifier(Some(Keyword::Var)),
            TokenKind::Identifier(Some(Keyword::If)),
            TokenKind::Identifier(Some(Keyword::Else)),
            TokenKind::Identifier(Some(Keyword::For)),
            TokenKind::Identifier(Some(Keyword::As)),
            TokenKind::Identifier(Some(Keyword::Return)),
            TokenKind::Identifier(Some(Keyword::Function)),
            TokenKind::Identifier(Some(Keyword::Class)),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_1 _x letter asx".to_string(), None).unwrap();

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier(None));
    }
    assert_eq!(tokens[3].value, "letter");
    assert_eq!(tokens[4].value, "asx");
}

#[test]
fn test_tokenize_numbers() {
    assert_eq!(values("42 3.14"), vec!["42", "3.14", "EOF"]);
    assert_eq!(kinds("7")[0], TokenKind::Number);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""a\tb\"c\n""#.to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\tb\"c\n");
    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 11);
}

#[test]
fn test_tokenize_newlines_are_tokens() {
    assert_eq!(
        kinds("a\n\nb"),
        vec![
            TokenKind::Identifier(None),
            TokenKind::NewLine,
            TokenKind::NewLine,
            TokenKind::Identifier(None),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_symbols_longest_first() {
    assert_eq!(
        values("== != <= >= && || -> += -= = < > ! . , :"),
        vec![
            "==", "!=", "<=", ">=", "&&", "||", "->", "+=", "-=", "=", "<", ">", "!", ".", ",",
            ":", "EOF"
        ]
    );
    assert!(kinds("{}()[]+-*/%")[..11]
        .iter()
        .all(|kind| *kind == TokenKind::Symbol));
}

#[test]
fn test_tokenize_skips_comments_and_carriage_returns() {
    assert_eq!(
        kinds("a // trailing words\r\nb"),
        vec![
            TokenKind::Identifier(None),
            TokenKind::NewLine,
            TokenKind::Identifier(None),
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("let x\n  = 1".to_string(), Some("pos.lang".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[2].kind, TokenKind::NewLine);
    assert_eq!(tokens[3].span.start.0, 8);
    assert_eq!(tokens[3].span.start.1.as_str(), "pos.lang");
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("let a = #".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_token(), Some("#"));
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("\"abc".to_string(), None).unwrap_err();

    assert_eq!(error.get_token(), Some("\""));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_source_length_limit() {
    let file = std::rc::Rc::new("big.lang".to_string());

    assert!(check_source_len(u32::MAX as usize, &file).is_ok());

    let error = check_source_len(u32::MAX as usize + 1, &file).unwrap_err();
    assert_eq!(error.get_error_name(), "SourceTooLarge");
    assert_eq!(error.get_token(), None);
}
