//! End-to-end tests for `tern run`.

mod common;

use common::{run_program, tagged_lines};

#[test]
fn test_arithmetic_with_variables() {
    let output = run_program("var a=1; var b=2; print a+b;");
    assert_eq!(output, tagged_lines(&["3"]));
}

#[test]
fn test_block_shadowing() {
    let output = run_program("var a=1; { var a=4; print a; } print a;");
    assert_eq!(output, tagged_lines(&["4", "1"]));
}

#[test]
fn test_while_loop() {
    let output = run_program("var i=0; while (i<3) { print i; i = i+1; }");
    assert_eq!(output, tagged_lines(&["0", "1", "2"]));
}

#[test]
fn test_for_loop() {
    let output = run_program("for (var i=0; i<3; i = i+1;) { print i; }");
    assert_eq!(output, tagged_lines(&["0", "1", "2"]));
}

#[test]
fn test_recursion() {
    let output = run_program(
        r#"
def fib(n) { if (n <= 1) { return n; } return fib(n-1) + fib(n-2); }
print fib(10);
"#,
    );
    assert_eq!(output, tagged_lines(&["55"]));
}

#[test]
fn test_strings_and_concatenation() {
    let output = run_program(r#"var greeting = "hello" + ", " + "world"; print greeting;"#);
    assert_eq!(output, tagged_lines(&["hello, world"]));
}

#[test]
fn test_short_circuit_observable_via_side_effects() {
    let output = run_program(
        r#"
def touched() { print "touched"; return true; }
print false and touched();
print 1 or touched();
"#,
    );
    assert_eq!(output, tagged_lines(&["false", "1"]));
}

#[test]
fn test_globals_snapshot_purity() {
    let output = run_program(
        r#"
var g = 1;
def mutate() { g = 99; }
mutate();
print g;
"#,
    );
    assert_eq!(output, tagged_lines(&["1"]));
}

#[test]
fn test_comments_are_ignored() {
    let output = run_program("// heading\nprint 1; // trailing\n// footer");
    assert_eq!(output, tagged_lines(&["1"]));
}

#[test]
fn test_empty_program_succeeds_silently() {
    let output = run_program("");
    assert_eq!(output, "");
}

#[test]
fn test_builtin_time_in_program() {
    let output = run_program("print time() > 0;");
    assert_eq!(output, tagged_lines(&["true"]));
}

#[test]
fn test_larger_program() {
    let output = run_program(
        r#"
def square(n) { return n * n; }

var total = 0;
for (var i = 1; i <= 4; i = i + 1;) {
    total = total + square(i);
}
print total;

if total == 30 { print "ok"; } else { print "bad"; }
"#,
    );
    assert_eq!(output, tagged_lines(&["30", "ok"]));
}
