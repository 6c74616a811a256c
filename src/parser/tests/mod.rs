//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`expr`]: Expression parsing (precedence, associativity, calls)
//! - [`stmt`]: Statement parsing (declarations, control flow, blocks)
//! - [`func`]: Function declaration parsing
//! - [`errors`]: Error detection and message quality

use super::*;
use crate::ast::{BinaryOp, Expr, ExprKind, Stmt, StmtKind, UnaryOp};
use crate::lexer::Lexer;

mod func;

/// Helper function to parse input and return the Program.
pub(super) fn parse(input: &str) -> Result<Program, ParseError> {
    let mut lexer = Lexer::new(input);
    let tokens = lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on parser test input {:?}: {}", input, e));
    let mut parser = Parser::new(tokens);
    parser.parse()
}

/// Helper function to parse input and return the first statement.
pub(super) fn parse_first_stmt(input: &str) -> Stmt {
    let program =
        parse(input).unwrap_or_else(|e| panic!("Failed to parse input {:?}: {}", input, e));
    program
        .statements
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("Input {:?} produced no statements", input))
}

/// Helper function to parse an expression statement and return its
/// expression.
pub(super) fn parse_first_expr(expr_code: &str) -> Expr {
    let input = format!("{};", expr_code);
    match parse_first_stmt(&input).kind {
        StmtKind::Expr(expr) => expr,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

/// Helper function to parse input and return the error.
pub(super) fn parse_error(input: &str) -> ParseError {
    match parse(input) {
        Ok(program) => panic!(
            "Expected parsing to fail for input {:?}, but it succeeded with {} statements",
            input,
            program.statements.len()
        ),
        Err(e) => e,
    }
}

#[test]
#[should_panic(expected = "Token list must not be empty")]
fn test_parser_new_panics_on_empty() {
    Parser::new(vec![]);
}

#[test]
fn test_parse_empty_input() {
    let program = parse("").unwrap();
    assert!(program.statements.is_empty());
}

#[test]
fn test_parse_comment_only_input() {
    let program = parse("// nothing here\n").unwrap();
    assert!(program.statements.is_empty());
}
