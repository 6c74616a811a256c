//! Expression parsing using precedence climbing.
//!
//! This module implements expression parsing with proper operator
//! precedence. The parser handles:
//! - Primary expressions (literals, identifiers, function calls,
//!   parenthesized expressions)
//! - Unary operators (right-associative)
//! - Binary operations with correct precedence and left-associativity,
//!   including the short-circuit `and`/`or` operators

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::token::{Span, TokenKind};

/// Operator precedence levels (higher number = lower precedence = looser
/// binding).
///
/// Lower precedence operators are parsed later, forming parent nodes in
/// the AST. For example, `2 + 3 * 4` is parsed as `2 + (3 * 4)` because
/// multiplication (precedence 2) binds tighter than addition
/// (precedence 3).
///
/// - Level 1: `-`, `!` (unary) - tightest binding
/// - Level 2: `*`, `/` (multiplicative)
/// - Level 3: `+`, `-` (additive)
/// - Level 4: `<`, `>`, `<=`, `>=` (comparison)
/// - Level 5: `==`, `!=` (equality)
/// - Level 6: `and`
/// - Level 7: `or` - loosest binding
const PRECEDENCE_UNARY: u8 = 1;
const PRECEDENCE_MULTIPLICATIVE: u8 = 2;
const PRECEDENCE_ADDITIVE: u8 = 3;
const PRECEDENCE_COMPARISON: u8 = 4;
const PRECEDENCE_EQUALITY: u8 = 5;
const PRECEDENCE_LOGICAL_AND: u8 = 6;
const PRECEDENCE_LOGICAL_OR: u8 = 7;

/// Returns the precedence of a binary operator token, if it is one.
fn binary_op_precedence(kind: &TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Star | TokenKind::Slash => Some(PRECEDENCE_MULTIPLICATIVE),
        TokenKind::Plus | TokenKind::Minus => Some(PRECEDENCE_ADDITIVE),
        TokenKind::Less | TokenKind::Greater | TokenKind::LessEqual | TokenKind::GreaterEqual => {
            Some(PRECEDENCE_COMPARISON)
        }
        TokenKind::EqualEqual | TokenKind::BangEqual => Some(PRECEDENCE_EQUALITY),
        TokenKind::And => Some(PRECEDENCE_LOGICAL_AND),
        TokenKind::Or => Some(PRECEDENCE_LOGICAL_OR),
        _ => None,
    }
}

/// Converts a token kind to a binary operator.
fn token_to_binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::EqualEqual => Some(BinaryOp::Equal),
        TokenKind::BangEqual => Some(BinaryOp::NotEqual),
        TokenKind::Less => Some(BinaryOp::Less),
        TokenKind::LessEqual => Some(BinaryOp::LessEqual),
        TokenKind::Greater => Some(BinaryOp::Greater),
        TokenKind::GreaterEqual => Some(BinaryOp::GreaterEqual),
        TokenKind::And => Some(BinaryOp::And),
        TokenKind::Or => Some(BinaryOp::Or),
        _ => None,
    }
}

impl Parser {
    /// Parses an expression.
    ///
    /// This is the main entry point for expression parsing. It handles
    /// operator precedence and associativity correctly.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_climbing(u8::MAX)
    }

    /// Parses an expression, respecting a minimum precedence.
    ///
    /// The core precedence climbing algorithm:
    /// 1. Parse a primary expression (atom)
    /// 2. While the current token is a binary operator that binds at least
    ///    as tightly as `min_precedence`: consume it, parse the right-hand
    ///    side at a tighter level, and fold into a Binary node
    ///
    /// # Arguments
    ///
    /// * `min_precedence` - The loosest precedence level accepted at this
    ///   level. Lower numbers bind tighter.
    fn parse_expr_climbing(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary_expr()?;

        loop {
            let Some(precedence) = binary_op_precedence(self.current_kind()) else {
                break;
            };

            if precedence > min_precedence {
                break;
            }

            // binary_op_precedence and token_to_binary_op cover the same kinds
            let op = token_to_binary_op(self.current_kind())
                .expect("operator token without a BinaryOp mapping");
            self.advance();

            // Parse the right-hand side with `precedence - 1` so the
            // operator binds tighter than itself: `a - b - c` parses as
            // `(a - b) - c` rather than `a - (b - c)`.
            let right = self.parse_expr_climbing(precedence - 1)?;

            let span = left.span.to(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    /// Parses a primary expression (atom).
    ///
    /// Primary expressions are the basic building blocks:
    /// - Unary operations (`-`, `!`), right-associative
    /// - Number, string, boolean, and nil literals
    /// - Identifiers (variable references)
    /// - Function calls (`IDENT "("` lookahead)
    /// - Parenthesized expressions
    fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();

        match self.current_kind() {
            TokenKind::Minus | TokenKind::Bang => {
                let op = if matches!(self.current_kind(), TokenKind::Minus) {
                    UnaryOp::Neg
                } else {
                    UnaryOp::Not
                };
                self.advance();

                let operand = self.parse_expr_climbing(PRECEDENCE_UNARY)?;
                let span = start_span.to(operand.span);

                Ok(Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;

                let close_span = self.current_span();
                self.expect(&TokenKind::RightParen)?;

                Ok(Expr::new(
                    ExprKind::Grouping(Box::new(inner)),
                    start_span.to(close_span),
                ))
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();

                if matches!(self.current_kind(), TokenKind::LeftParen) {
                    self.parse_call(name, start_span)
                } else {
                    Ok(Expr::new(ExprKind::Identifier(name), start_span))
                }
            }
            TokenKind::Number(value) => {
                let value = *value;
                self.advance();
                Ok(Expr::new(ExprKind::Number(value), start_span))
            }
            TokenKind::Str(value) => {
                let value = value.clone();
                self.advance();
                Ok(Expr::new(ExprKind::Str(value), start_span))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(true), start_span))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(false), start_span))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::new(ExprKind::Nil, start_span))
            }
            kind if kind.is_reserved() => Err(ParseError::reserved_keyword(
                &Self::token_kind_display(kind),
                start_span,
            )),
            kind => Err(ParseError::expected_expression(
                &Self::token_kind_display(kind),
                start_span,
            )),
        }
    }

    /// Parses a function call expression.
    ///
    /// The callee identifier has already been consumed. This method parses
    /// the argument list within parentheses.
    ///
    /// # Grammar
    ///
    /// ```text
    /// funcCall → IDENT "(" args? ")"
    /// args     → expression ("," expression)*
    /// ```
    fn parse_call(&mut self, callee: String, start_span: Span) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let mut args = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if matches!(self.current_kind(), TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        let end_span = self.current_span();
        self.expect(&TokenKind::RightParen)?;

        Ok(Expr::new(
            ExprKind::Call { callee, args },
            start_span.to(end_span),
        ))
    }
}
