//! Tree-walking evaluator for the Tern language.
//!
//! This module provides the [`Interpreter`] struct which executes a parsed
//! [`Program`] by walking its AST.
//!
//! # Overview
//!
//! The interpreter dispatches on each node's kind with a single match per
//! node family (statements and expressions) rather than a visitor. It
//! carries two pieces of state:
//!
//! - A [`ScopeStack`](env::ScopeStack) of call frames, each a stack of
//!   lookup tables (see [`env`])
//! - An output sink for `print`, generic over [`std::io::Write`] so tests
//!   can capture output
//!
//! Execution is single-threaded and synchronous; the `sleep` built-in
//! blocks the whole interpreter. Every scope or frame pushed is popped on
//! all exit paths, including errors and early returns.
//!
//! # Examples
//!
//! ```
//! use tern::interpreter::Interpreter;
//! use tern::lexer::Lexer;
//! use tern::parser::Parser;
//!
//! let tokens = Lexer::new("print 1 + 2;").tokenize().unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//!
//! let mut interpreter = Interpreter::with_output(Vec::new());
//! interpreter.run(&program).unwrap();
//!
//! let output = String::from_utf8(interpreter.into_output()).unwrap();
//! assert_eq!(output, "[interpreter] 3\n");
//! ```
//!
//! # Module Structure
//!
//! - [`value`] - The dynamically-typed value domain
//! - [`env`] - The frame/table scope stack
//! - [`error`] - Runtime error types
//! - `builtins` - The `time` and `sleep` native functions
//! - `expr` - Expression evaluation
//! - `stmt` - Statement execution and control flow
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST consumed here
//! * [`crate::ast`] - The AST definitions

mod builtins;
mod env;
mod error;
mod expr;
mod stmt;
mod value;

#[cfg(test)]
mod tests;

pub use env::ScopeStack;
pub use error::{RuntimeError, RuntimeErrorKind};
pub use value::{FuncKind, FuncValue, NativeFn, Value};

use std::io::{self, Write};

use crate::ast::Program;

use stmt::Flow;

/// The tag prepended to every `print` line.
const PRINT_TAG: &str = "[interpreter] ";

/// A tree-walking interpreter for Tern programs.
///
/// The type parameter `W` is the output sink for `print` statements;
/// [`Interpreter::new`] wires it to stdout, while tests typically use
/// [`Interpreter::with_output`] with a `Vec<u8>`.
pub struct Interpreter<W: Write> {
    /// The scope stack: frames of lookup tables.
    state: ScopeStack,
    /// Where `print` output goes.
    out: W,
}

impl Interpreter<io::Stdout> {
    /// Creates an interpreter that prints to stdout, with the built-in
    /// functions pre-defined in globals.
    pub fn new() -> Self {
        Interpreter::with_output(io::stdout())
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter writing `print` output to `out`, with the
    /// built-in functions pre-defined in globals.
    pub fn with_output(out: W) -> Self {
        let mut state = ScopeStack::new();
        builtins::install(&mut state);
        Interpreter { state, out }
    }

    /// Executes a program from its first statement.
    ///
    /// A `return` at the top level stops execution; there is no enclosing
    /// call to unwind to.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuntimeError`] raised. Errors are fatal to the
    /// program; the scope stack is still balanced afterwards, so the
    /// embedder may reuse the interpreter for a REPL-style session.
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for stmt in &program.statements {
            match self.exec_stmt(stmt)? {
                Flow::Normal => {}
                Flow::Return(_) => break,
            }
        }
        Ok(())
    }

    /// Consumes the interpreter and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Returns the scope stack, for depth assertions in tests.
    #[cfg(test)]
    pub(crate) fn scope_stack(&self) -> &ScopeStack {
        &self.state
    }
}
