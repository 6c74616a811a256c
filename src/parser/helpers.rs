//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a user-friendly display string for a token kind.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::LeftParen => "'('".to_string(),
            TokenKind::RightParen => "')'".to_string(),
            TokenKind::LeftBrace => "'{'".to_string(),
            TokenKind::RightBrace => "'}'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Dot => "'.'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Bang => "'!'".to_string(),
            TokenKind::BangEqual => "'!='".to_string(),
            TokenKind::Equal => "'='".to_string(),
            TokenKind::EqualEqual => "'=='".to_string(),
            TokenKind::Greater => "'>'".to_string(),
            TokenKind::GreaterEqual => "'>='".to_string(),
            TokenKind::Less => "'<'".to_string(),
            TokenKind::LessEqual => "'<='".to_string(),
            TokenKind::Identifier(name) => format!("identifier '{}'", name),
            TokenKind::Str(s) => {
                if s.len() > 20 {
                    format!("string \"{}...\"", &s[..20])
                } else {
                    format!("string \"{}\"", s)
                }
            }
            TokenKind::Number(n) => format!("number '{}'", n),
            TokenKind::And => "'and' keyword".to_string(),
            TokenKind::Class => "'class' keyword".to_string(),
            TokenKind::Else => "'else' keyword".to_string(),
            TokenKind::False => "'false' keyword".to_string(),
            TokenKind::Func => "'def' keyword".to_string(),
            TokenKind::For => "'for' keyword".to_string(),
            TokenKind::If => "'if' keyword".to_string(),
            TokenKind::Nil => "'nil' keyword".to_string(),
            TokenKind::Or => "'or' keyword".to_string(),
            TokenKind::Print => "'print' keyword".to_string(),
            TokenKind::Return => "'return' keyword".to_string(),
            TokenKind::Super => "'super' keyword".to_string(),
            TokenKind::This => "'this' keyword".to_string(),
            TokenKind::True => "'true' keyword".to_string(),
            TokenKind::Var => "'var' keyword".to_string(),
            TokenKind::While => "'while' keyword".to_string(),
            TokenKind::Debug => "'debug' keyword".to_string(),
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Discard => "discarded token".to_string(),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which should be `Eof`).
    pub(super) fn current(&self) -> &Token {
        // new() ensures tokens is non-empty and advance() does not move
        // past Eof, so the index is always in bounds
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns the kind of the token after the current one, if any.
    ///
    /// Used for the two-token lookaheads (`IDENT "="` for assignment,
    /// `IDENT "("` for calls).
    pub(super) fn next_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos + 1).map(|token| &token.kind)
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Expects the current token to match `expected` and advances.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the current token matches and was consumed
    /// * `Err(ParseError)` - If the current token does not match
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<(), ParseError> {
        if self.current_kind() == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                &Self::token_kind_display(expected),
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Expects an identifier token and returns its name.
    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::unexpected_token(
                "identifier",
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }
}
