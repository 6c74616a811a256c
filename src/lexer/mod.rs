//! Lexical analyzer for the Tern language.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes punctuation, operators, literals, identifiers, and keywords
//! - Tracks source positions for error reporting
//! - Produces whitespace and comments as [`TokenKind::Discard`] tokens and
//!   filters them out before returning
//!
//! # Supported Tokens
//!
//! - **Keywords**: `and class else false def for if nil or print return
//!   super this true var while debug` (`class`, `super`, `this`, `debug`
//!   are reserved and rejected later, by the parser)
//! - **Identifiers**: ASCII alphabetic or underscore start, then ASCII
//!   alphanumerics and underscores
//! - **Number literals**: `digits ('.' digits)?`, stored as `f64`
//! - **String literals**: double-quoted raw text; newlines allowed, no
//!   escape sequences
//! - **Comments**: line comments starting with `//`
//!
//! # Examples
//!
//! ```
//! use tern::lexer::Lexer;
//! use tern::token::TokenKind;
//!
//! let mut lexer = Lexer::new("print 1 + 2;");
//! let tokens = lexer.tokenize().unwrap();
//!
//! assert!(matches!(tokens[0].kind, TokenKind::Print));
//! assert!(matches!(tokens[1].kind, TokenKind::Number(_)));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - [`cursor`] - Position tracking and character navigation
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::{LexError, LexErrorKind};

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Tern source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. It is designed to be used
/// once per source string.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// Whitespace and comments are scanned as [`TokenKind::Discard`]
    /// tokens and dropped before appending. The returned vector always
    /// ends with exactly one [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A character that cannot start any token is encountered
    /// - A string literal is not terminated before the end of input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_eof() {
            let token = self.next_token()?;
            if token.kind != TokenKind::Discard {
                tokens.push(token);
            }
        }

        let span = Span::new(self.pos, self.pos, self.line, self.column);
        tokens.push(Token::new(TokenKind::Eof, span));

        Ok(tokens)
    }
}
