//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement → printStmt | declStmt | funcDecl | block | ifStmt
    ///           | whileStmt | forStmt | returnStmt | assignStmt | exprStmt
    /// ```
    ///
    /// At statement start, a leading keyword determines the form.
    /// Otherwise, an `IDENT "="` lookahead selects an assignment; anything
    /// else is an expression statement.
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Print => self.parse_print_stmt(),
            TokenKind::Var => self.parse_decl_stmt(),
            TokenKind::Func => self.parse_func_decl(),
            TokenKind::LeftBrace => self.parse_block(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            kind if kind.is_reserved() => Err(ParseError::reserved_keyword(
                &Self::token_kind_display(kind),
                self.current_span(),
            )),
            _ => {
                if matches!(self.current_kind(), TokenKind::Identifier(_))
                    && matches!(self.next_kind(), Some(TokenKind::Equal))
                {
                    return self.parse_assign_stmt();
                }

                let expr = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                let span = expr.span;
                Ok(Stmt::new(StmtKind::Expr(expr), span))
            }
        }
    }

    /// Parses a print statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// printStmt → "print" expression ";"
    /// ```
    pub(super) fn parse_print_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Print)?;

        let expr = self.parse_expr()?;
        let span = start_span.to(expr.span);
        self.expect(&TokenKind::Semicolon)?;

        Ok(Stmt::new(StmtKind::Print(expr), span))
    }

    /// Parses a variable declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// declStmt → "var" IDENT ("=" expression)? ";"
    /// ```
    pub(super) fn parse_decl_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Var)?;

        let name = self.expect_identifier()?;

        let init = if matches!(self.current_kind(), TokenKind::Equal) {
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };

        let end = init.as_ref().map(|e| e.span).unwrap_or(start_span);
        let span = start_span.to(end);
        self.expect(&TokenKind::Semicolon)?;

        Ok(Stmt::new(StmtKind::Decl { name, init }, span))
    }

    /// Parses a reassignment statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// assignStmt → IDENT "=" expression ";"
    /// ```
    pub(super) fn parse_assign_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::Equal)?;
        let value = self.parse_expr()?;

        let span = start_span.to(value.span);
        self.expect(&TokenKind::Semicolon)?;

        Ok(Stmt::new(StmtKind::Assign { name, value }, span))
    }

    /// Parses a brace-delimited block.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block → "{" statement* "}"
    /// ```
    pub(super) fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::LeftBrace)?;

        let mut statements = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RightBrace) && !self.is_eof() {
            statements.push(self.parse_stmt()?);
        }

        let end_span = self.current_span();
        self.expect(&TokenKind::RightBrace)?;

        Ok(Stmt::new(
            StmtKind::Block(statements),
            start_span.to(end_span),
        ))
    }

    /// Parses an if statement.
    ///
    /// The condition is a bare expression; parentheses are allowed but not
    /// required (they parse as a grouping).
    ///
    /// # Grammar
    ///
    /// ```text
    /// ifStmt → "if" expression statement ("else" statement)?
    /// ```
    pub(super) fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::If)?;

        let condition = self.parse_expr()?;
        let then_branch = Box::new(self.parse_stmt()?);

        let else_branch = if matches!(self.current_kind(), TokenKind::Else) {
            self.advance();
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };

        let end = else_branch
            .as_ref()
            .map(|stmt| stmt.span)
            .unwrap_or(then_branch.span);
        let span = start_span.to(end);

        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// Parses a while statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// whileStmt → "while" "(" expression ")" statement
    /// ```
    pub(super) fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::While)?;

        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;

        let body = Box::new(self.parse_stmt()?);
        let span = start_span.to(body.span);

        Ok(Stmt::new(StmtKind::While { condition, body }, span))
    }

    /// Parses a C-style for statement.
    ///
    /// The update clause is parsed as a full assignment statement, so it
    /// carries its own trailing `;` inside the parentheses:
    /// `for (var i = 0; i < 3; i = i + 1;) { ... }`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// forStmt → "for" "(" (declStmt | expression ";") expression ";" assignStmt ")" statement
    /// ```
    pub(super) fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LeftParen)?;

        let init = if matches!(self.current_kind(), TokenKind::Var) {
            self.parse_decl_stmt()?
        } else {
            let expr = self.parse_expr()?;
            self.expect(&TokenKind::Semicolon)?;
            let span = expr.span;
            Stmt::new(StmtKind::Expr(expr), span)
        };

        let condition = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)?;

        let update = self.parse_assign_stmt()?;
        self.expect(&TokenKind::RightParen)?;

        let body = Box::new(self.parse_stmt()?);
        let span = start_span.to(body.span);

        Ok(Stmt::new(
            StmtKind::For {
                init: Box::new(init),
                condition,
                update: Box::new(update),
                body,
            },
            span,
        ))
    }

    /// Parses a function declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// funcDecl → "def" IDENT "(" params? ")" block
    /// params   → IDENT ("," IDENT)*
    /// ```
    pub(super) fn parse_func_decl(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Func)?;

        let name = self.expect_identifier()?;

        self.expect(&TokenKind::LeftParen)?;
        let mut params = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                params.push(self.expect_identifier()?);
                if matches!(self.current_kind(), TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen)?;

        let body = Box::new(self.parse_block()?);
        let span = start_span.to(body.span);

        Ok(Stmt::new(StmtKind::FuncDecl { name, params, body }, span))
    }

    /// Parses a return statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// returnStmt → "return" expression? ";"
    /// ```
    pub(super) fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Return)?;

        let value = if matches!(self.current_kind(), TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };

        let end = value.as_ref().map(|e| e.span).unwrap_or(start_span);
        let span = start_span.to(end);
        self.expect(&TokenKind::Semicolon)?;

        Ok(Stmt::new(StmtKind::Return(value), span))
    }
}
