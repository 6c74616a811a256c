//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors that can occur
//! during tokenization.

use crate::token::Span;

/// The kind of lexical analysis error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching, which is fragile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A string literal was not terminated before the end of input.
    UnterminatedString,
    /// A character that cannot start any token was encountered.
    UnexpectedCharacter,
    /// A number literal could not be parsed as a 64-bit float.
    InvalidNumberLiteral,
}

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting with tools
/// like [`ariadne`].
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    message: String,
    /// The source location where the error occurred.
    span: Span,
    /// The kind of error, for structured error handling.
    kind: LexErrorKind,
}

impl LexError {
    /// Creates a new error with the given kind, message, and location.
    pub fn new(kind: LexErrorKind, message: impl Into<String>, span: Span) -> Self {
        LexError {
            message: message.into(),
            span,
            kind,
        }
    }

    /// Creates an "unterminated string" error spanning from the opening
    /// quote to the end of input.
    pub fn unterminated_string(span: Span) -> Self {
        LexError::new(
            LexErrorKind::UnterminatedString,
            "Unterminated string literal",
            span,
        )
    }

    /// Creates an "unexpected character" error for `c`.
    pub fn unexpected_character(c: char, span: Span) -> Self {
        LexError::new(
            LexErrorKind::UnexpectedCharacter,
            format!("Unexpected character: '{}'", c),
            span,
        )
    }

    /// Creates an error for a number literal that failed to parse.
    pub fn invalid_number_literal(literal: &str, span: Span) -> Self {
        LexError::new(
            LexErrorKind::InvalidNumberLiteral,
            format!("Invalid number literal: '{}'", literal),
            span,
        )
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a short message suitable for report titles.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnterminatedString => "unterminated string",
            LexErrorKind::UnexpectedCharacter => "unexpected character",
            LexErrorKind::InvalidNumberLiteral => "invalid number literal",
        }
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
