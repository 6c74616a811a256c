//! Token reading and recognition for the lexer.
//!
//! This module provides methods for scanning single tokens from the input,
//! including punctuation, the two-character operators, string and number
//! literals, identifiers, and keywords.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans and returns the next token from the input.
    ///
    /// This method is called repeatedly by [`tokenize`](super::Lexer::tokenize)
    /// until the end of input. Whitespace and comments are returned as
    /// [`TokenKind::Discard`] tokens; the caller filters them out.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if an unexpected character is encountered or
    /// if a string literal is not terminated.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        // next_token is only called when input remains
        let c = self.current_char().expect("next_token called at end of input");
        self.advance();

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '!' => {
                if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }
            '=' => {
                if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            '<' => {
                if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '/' => {
                if self.match_char('/') {
                    // Line comment: consume to end of line, newline excluded
                    while let Some(c) = self.current_char() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                    TokenKind::Discard
                } else {
                    TokenKind::Slash
                }
            }
            ' ' | '\r' | '\t' | '\n' => TokenKind::Discard,
            '"' => {
                return self.read_string(start_pos, start_line, start_column);
            }
            _ if c.is_ascii_digit() => {
                return self.read_number(start_pos, start_line, start_column);
            }
            _ if c.is_ascii_alphabetic() || c == '_' => {
                return Ok(self.read_identifier(start_pos, start_line, start_column));
            }
            _ => {
                return Err(LexError::unexpected_character(
                    c,
                    Span::new(start_pos, self.pos, start_line, start_column),
                ));
            }
        };

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Ok(Token::new(kind, span))
    }

    /// Reads a string literal from the input.
    ///
    /// The opening double quote has already been consumed. The literal
    /// value is the raw inner text; newlines are allowed and tracked, and
    /// there are no escape sequences.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the end of input is reached before a
    /// closing quote.
    fn read_string(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance(); // closing quote
                    let value = self.input[start_pos + 1..self.pos - 1].to_string();
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Ok(Token::new(TokenKind::Str(value), span));
                }
                Some(_) => {
                    // advance() tracks newlines inside the string
                    self.advance();
                }
                None => {
                    return Err(LexError::unterminated_string(Span::new(
                        start_pos,
                        self.pos,
                        start_line,
                        start_column,
                    )));
                }
            }
        }
    }

    /// Reads a number literal from the input.
    ///
    /// The first digit has already been consumed. Numbers are
    /// `digits ('.' digits)?` and are stored as `f64`. A dot not followed
    /// by a digit is left for the next token.
    fn read_number(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let has_fraction = self.current_char() == Some('.')
            && self
                .input
                .get(self.pos..)
                .and_then(|s| s.chars().nth(1))
                .is_some_and(|c| c.is_ascii_digit());

        if has_fraction {
            self.advance(); // consume '.'
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let value_str = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let value: f64 = value_str.parse().map_err(|_: std::num::ParseFloatError| {
            LexError::invalid_number_literal(value_str, span)
        })?;

        Ok(Token::new(TokenKind::Number(value), span))
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// The first character has already been consumed. If the lexeme is in
    /// the keyword table, the keyword kind is returned instead of
    /// [`TokenKind::Identifier`].
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let name = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = TokenKind::keyword(name)
            .unwrap_or_else(|| TokenKind::Identifier(name.to_string()));

        Token::new(kind, span)
    }
}
