//! Function declaration parsing tests.

use super::*;

#[test]
fn test_func_decl_no_params() {
    let stmt = parse_first_stmt("def greet() { print \"hi\"; }");
    match stmt.kind {
        StmtKind::FuncDecl { name, params, body } => {
            assert_eq!(name, "greet");
            assert!(params.is_empty());
            assert!(matches!(body.kind, StmtKind::Block(_)));
        }
        _ => panic!("Expected FuncDecl"),
    }
}

#[test]
fn test_func_decl_single_param() {
    let stmt = parse_first_stmt("def square(n) { return n * n; }");
    match stmt.kind {
        StmtKind::FuncDecl { params, .. } => assert_eq!(params, vec!["n".to_string()]),
        _ => panic!("Expected FuncDecl"),
    }
}

#[test]
fn test_func_decl_multiple_params() {
    let stmt = parse_first_stmt("def add(a, b, c) { return a + b + c; }");
    match stmt.kind {
        StmtKind::FuncDecl { params, .. } => {
            assert_eq!(
                params,
                vec!["a".to_string(), "b".to_string(), "c".to_string()]
            );
        }
        _ => panic!("Expected FuncDecl"),
    }
}

#[test]
fn test_func_decl_empty_body() {
    let stmt = parse_first_stmt("def noop() { }");
    match stmt.kind {
        StmtKind::FuncDecl { body, .. } => match body.kind {
            StmtKind::Block(stmts) => assert!(stmts.is_empty()),
            _ => panic!("Expected Block body"),
        },
        _ => panic!("Expected FuncDecl"),
    }
}

#[test]
fn test_func_decl_requires_block_body() {
    let err = parse_error("def f() return 1;");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
}

#[test]
fn test_func_decl_requires_name() {
    let err = parse_error("def () { }");
    assert!(
        err.message().contains("identifier"),
        "Expected identifier error, got: {}",
        err.message()
    );
}

#[test]
fn test_recursive_body_parses() {
    let program = parse(
        "def fib(n) { if (n <= 1) { return n; } return fib(n-1) + fib(n-2); } print fib(10);",
    )
    .unwrap();
    assert_eq!(program.statements.len(), 2);
    assert!(matches!(
        program.statements[0].kind,
        StmtKind::FuncDecl { .. }
    ));
}

#[test]
fn test_params_missing_comma_is_an_error() {
    let err = parse_error("def f(a b) { }");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
}
