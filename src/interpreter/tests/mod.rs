//! Unit tests for the interpreter.
//!
//! Tests are organized by language area:
//! - [`arithmetic`]: Operator evaluation and type rules
//! - [`logic`]: Truthiness, comparisons, and short-circuiting
//! - [`control_flow`]: if/while/for and early return
//! - [`scopes`]: Block scoping and the scope stack invariants
//! - [`functions`]: Declarations, calls, recursion, built-ins
//! - [`errors`]: Runtime error detection

use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;


/// Helper function to run a program and return its raw output.
pub(super) fn run_source(source: &str) -> String {
    let tokens = Lexer::new(source)
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on test input {:?}: {}", source, e));
    let program = Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Parser failed on test input {:?}: {}", source, e));

    let mut interpreter = Interpreter::with_output(Vec::new());
    interpreter
        .run(&program)
        .unwrap_or_else(|e| panic!("Interpreter failed on test input {:?}: {}", source, e));

    String::from_utf8(interpreter.into_output()).expect("print output was not UTF-8")
}

/// Helper function to run a program and return the printed lines with the
/// interpreter tag stripped.
pub(super) fn printed_lines(source: &str) -> Vec<String> {
    run_source(source)
        .lines()
        .map(|line| {
            line.strip_prefix(PRINT_TAG)
                .unwrap_or_else(|| panic!("Line missing interpreter tag: {:?}", line))
                .to_string()
        })
        .collect()
}

/// Helper function to run a program and return the runtime error.
pub(super) fn run_error(source: &str) -> RuntimeError {
    let tokens = Lexer::new(source)
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on test input {:?}: {}", source, e));
    let program = Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Parser failed on test input {:?}: {}", source, e));

    let mut interpreter = Interpreter::with_output(Vec::new());
    match interpreter.run(&program) {
        Ok(()) => panic!("Expected a runtime error for input {:?}", source),
        Err(e) => e,
    }
}

#[test]
fn test_print_output_carries_interpreter_tag() {
    assert_eq!(run_source("print 3;"), "[interpreter] 3\n");
}

#[test]
fn test_empty_program_runs() {
    assert_eq!(run_source(""), "");
}
