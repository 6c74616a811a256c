//! End-to-end tests for fatal errors and exit codes.

mod common;

use common::{run_program_error, tagged_lines, run_subcommand};

#[test]
fn test_scan_error_unterminated_string() {
    let (code, stderr) = run_program_error("print \"never closed;");
    assert_eq!(code, 1);
    assert!(
        stderr.contains("Unterminated"),
        "Expected 'Unterminated' in stderr:\n{}",
        stderr
    );
}

#[test]
fn test_scan_error_unexpected_character() {
    let (code, stderr) = run_program_error("print 1 @ 2;");
    assert_eq!(code, 1);
    assert!(
        stderr.contains("Unexpected character"),
        "Expected 'Unexpected character' in stderr:\n{}",
        stderr
    );
}

#[test]
fn test_parse_error_missing_semicolon() {
    let (code, stderr) = run_program_error("print 1");
    assert_eq!(code, 1);
    assert!(
        stderr.contains("';'"),
        "Expected missing-semicolon diagnostic in stderr:\n{}",
        stderr
    );
}

#[test]
fn test_parse_error_reserved_keyword() {
    let (code, stderr) = run_program_error("class Thing {}");
    assert_eq!(code, 1);
    assert!(
        stderr.contains("reserved"),
        "Expected 'reserved' in stderr:\n{}",
        stderr
    );
}

#[test]
fn test_runtime_error_undefined_variable() {
    let (code, stderr) = run_program_error("print missing;");
    assert_eq!(code, 1);
    assert!(
        stderr.contains("Undefined variable") && stderr.contains("'missing'"),
        "Expected the offending name in stderr:\n{}",
        stderr
    );
}

#[test]
fn test_runtime_error_arity_mismatch() {
    let (code, stderr) = run_program_error(
        "def fib(n) { if (n <= 1) { return n; } return fib(n-1) + fib(n-2); } fib(1, 2);",
    );
    assert_eq!(code, 1);
    assert!(
        stderr.contains("'fib'"),
        "Expected the function name in stderr:\n{}",
        stderr
    );
}

#[test]
fn test_runtime_error_type_mismatch() {
    let (code, stderr) = run_program_error(r#"print 1 + "one";"#);
    assert_eq!(code, 1);
    assert!(
        stderr.contains("'+'"),
        "Expected the operator in stderr:\n{}",
        stderr
    );
}

#[test]
fn test_output_before_error_reaches_stdout() {
    let temp_source = "print 1; print missing;";
    let output = run_subcommand("run", temp_source);
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        tagged_lines(&["1"])
    );
}

#[test]
fn test_missing_file_fails() {
    let output = std::process::Command::new(common::tern_binary())
        .args(["run", "no/such/file.tern"])
        .output()
        .expect("Failed to run tern binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read file"),
        "Expected file-read diagnostic in stderr:\n{}",
        stderr
    );
}
