//! End-to-end tests for `tern ast`.

mod common;

use common::{print_ast, run_program_error};

#[test]
fn test_ast_renders_source_form() {
    let output = print_ast("var   a=1;   print a+2;");
    assert_eq!(output, "var a = 1;\nprint a + 2;\n");
}

#[test]
fn test_ast_output_is_runnable() {
    // The printed AST is valid source: feeding it back to `ast` is stable
    let first = print_ast("if x > 0 { print x; } else { print 0; }");
    let second = print_ast(&first);
    assert_eq!(first, second);
}

#[test]
fn test_ast_keeps_for_update_semicolon() {
    let output = print_ast("for (var i=0; i<3; i = i+1;) { print i; }");
    assert!(
        output.starts_with("for (var i = 0; i < 3; i = i + 1;)"),
        "Unexpected for rendering:\n{}",
        output
    );
}

#[test]
fn test_ast_reports_parse_errors() {
    let output = common::run_subcommand("ast", "print ;");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_ast_does_not_run_the_program() {
    let output = print_ast("print 1;");
    // Source form only, no interpreter output
    assert_eq!(output, "print 1;\n");
}

#[test]
fn test_run_error_does_not_affect_ast() {
    // A program that fails at runtime still pretty-prints
    let (_code, _stderr) = run_program_error("print missing;");
    let output = print_ast("print missing;");
    assert_eq!(output, "print missing;\n");
}
