//! The Tern language interpreter library.
//!
//! Tern is a small dynamically-typed imperative language in the Lox
//! family. This library provides the full pipeline: lexical analysis,
//! parsing, and tree-walking evaluation, plus an AST pretty-printer.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`interpreter`] - Tree-walking evaluator
//! - [`printer`] - AST-to-source rendering
//!
//! # Example
//!
//! ```
//! use tern::interpreter::Interpreter;
//! use tern::lexer::Lexer;
//! use tern::parser::Parser;
//!
//! let source = r#"
//! def fib(n) { if (n <= 1) { return n; } return fib(n-1) + fib(n-2); }
//! print fib(10);
//! "#;
//!
//! // Lexical analysis
//! let tokens = Lexer::new(source).tokenize().expect("lex error");
//!
//! // Parsing
//! let program = Parser::new(tokens).parse().expect("parse error");
//!
//! // Evaluation, capturing output
//! let mut interpreter = Interpreter::with_output(Vec::new());
//! interpreter.run(&program).expect("runtime error");
//!
//! let output = String::from_utf8(interpreter.into_output()).unwrap();
//! assert_eq!(output, "[interpreter] 55\n");
//! ```

pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;
