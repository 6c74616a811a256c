//! Tests for single-character punctuation tokens.

use super::*;

#[test]
fn test_empty_input() {
    let kinds = tokenize_kinds("");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_only() {
    let kinds = tokenize_kinds("   \r\n\t");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_parens() {
    let kinds = tokenize_kinds("()");
    assert_eq!(
        kinds,
        vec![TokenKind::LeftParen, TokenKind::RightParen, TokenKind::Eof]
    );
}

#[test]
fn test_braces() {
    let kinds = tokenize_kinds("{}");
    assert_eq!(
        kinds,
        vec![TokenKind::LeftBrace, TokenKind::RightBrace, TokenKind::Eof]
    );
}

#[test]
fn test_right_brace_is_not_right_paren() {
    // The brace and paren closers are distinct kinds
    let kinds = tokenize_kinds("}");
    assert_eq!(kinds, vec![TokenKind::RightBrace, TokenKind::Eof]);
    assert_ne!(kinds[0], TokenKind::RightParen);
}

#[test]
fn test_arithmetic_punctuation() {
    let kinds = tokenize_kinds("+-*/");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_comma_dot_semicolon() {
    let kinds = tokenize_kinds(",.;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_punctuation_with_spaces() {
    let kinds = tokenize_kinds("( , )");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParen,
            TokenKind::Comma,
            TokenKind::RightParen,
            TokenKind::Eof
        ]
    );
}
