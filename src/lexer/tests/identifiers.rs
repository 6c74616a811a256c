//! Tests for identifier recognition.

use super::*;

#[test]
fn test_simple_identifier() {
    let kinds = tokenize_kinds("foo");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("foo".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_identifier_with_underscore() {
    let kinds = tokenize_kinds("_private_name");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("_private_name".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_identifier_with_digits() {
    let kinds = tokenize_kinds("x2");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("x2".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_identifier_with_keyword_prefix() {
    // `and_is_a_var` starts with the `and` keyword but is one identifier
    let kinds = tokenize_kinds("and_is_a_var");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("and_is_a_var".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_identifier_cannot_start_with_digit() {
    // `2x` lexes as a number followed by an identifier
    let kinds = tokenize_kinds("2x");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number(2.0),
            TokenKind::Identifier("x".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_adjacent_identifiers_split_by_space() {
    let kinds = tokenize_kinds("a b");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("a".to_string()),
            TokenKind::Identifier("b".to_string()),
            TokenKind::Eof
        ]
    );
}
