//! Common test utilities for Tern integration tests.
//!
//! This module provides shared helper functions used across all
//! integration test files. Programs are written to a temporary file and
//! executed through the real `tern` binary.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::fs;
use std::process::{Command, Output};

use tempfile::tempdir;

/// Returns the path to the tern binary built by cargo.
pub fn tern_binary() -> String {
    env!("CARGO_BIN_EXE_tern").to_string()
}

/// Runs a subcommand of the tern binary against a temporary source file
/// and returns the raw process output.
pub fn run_subcommand(subcommand: &str, source: &str) -> Output {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let source_path = temp_dir.path().join("program.tern");
    fs::write(&source_path, source).expect("Failed to write source file");

    Command::new(tern_binary())
        .arg(subcommand)
        .arg(&source_path)
        .output()
        .expect("Failed to run tern binary")
}

/// Runs a program and returns its stdout.
///
/// Panics if the process exits nonzero.
pub fn run_program(source: &str) -> String {
    let output = run_subcommand("run", source);
    assert!(
        output.status.success(),
        "tern run failed (exit {:?}) for source {:?}\n[stderr]\n{}",
        output.status.code(),
        source,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Runs a program expected to fail and returns its exit code and stderr.
pub fn run_program_error(source: &str) -> (i32, String) {
    let output = run_subcommand("run", source);
    assert!(
        !output.status.success(),
        "Expected tern run to fail for source {:?}, but it succeeded with stdout:\n{}",
        source,
        String::from_utf8_lossy(&output.stdout)
    );
    let code = output.status.code().unwrap_or(-1);
    (code, String::from_utf8_lossy(&output.stderr).to_string())
}

/// Runs `tern ast` on a program and returns its stdout.
pub fn print_ast(source: &str) -> String {
    let output = run_subcommand("ast", source);
    assert!(
        output.status.success(),
        "tern ast failed (exit {:?}) for source {:?}\n[stderr]\n{}",
        output.status.code(),
        source,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Builds the expected stdout for a sequence of printed values.
pub fn tagged_lines(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| format!("[interpreter] {}\n", line))
        .collect()
}
