//! Pipeline orchestration for the Tern CLI.
//!
//! The driver reads a source file, runs it through the lexer, parser, and
//! interpreter, and unifies the errors of every phase into a single type
//! for reporting. Error reporting itself lives in the `diagnostics`
//! module; the driver functions are pure apart from the program's own
//! output.

use tern::interpreter::{Interpreter, RuntimeError};
use tern::lexer::{LexError, Lexer};
use tern::parser::{ParseError, Parser};
use tern::printer;

/// An error from any phase of running a program.
///
/// This enum unifies file I/O, lexing, parsing, and runtime errors to
/// simplify error handling in the CLI.
pub(crate) enum RunError {
    /// Failed to read the source file.
    FileRead {
        path: String,
        source: std::io::Error,
    },
    /// An error during lexical analysis.
    Lex(LexError),
    /// An error during parsing.
    Parse(ParseError),
    /// An error raised while the program was executing.
    Runtime(RuntimeError),
}

impl RunError {
    fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        RunError::FileRead {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::FileRead { path, source } => {
                write!(f, "Failed to read file '{}': {}", path, source)
            }
            RunError::Lex(e) => write!(f, "{}", e),
            RunError::Parse(e) => write!(f, "{}", e),
            RunError::Runtime(e) => write!(f, "{}", e),
        }
    }
}

/// A run error paired with the context needed for reporting.
pub(crate) struct RunErrorWithContext {
    filename: String,
    source: String,
    error: RunError,
}

impl RunErrorWithContext {
    fn new(filename: impl Into<String>, source: impl Into<String>, error: RunError) -> Self {
        RunErrorWithContext {
            filename: filename.into(),
            source: source.into(),
            error,
        }
    }

    pub(crate) fn filename(&self) -> &str {
        &self.filename
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn error(&self) -> &RunError {
        &self.error
    }
}

/// Reads a source file and parses it, reporting lex and parse failures
/// with the file's context attached.
fn load_program(file: &str) -> Result<(String, tern::ast::Program), Box<RunErrorWithContext>> {
    let source = std::fs::read_to_string(file).map_err(|e| {
        Box::new(RunErrorWithContext::new(
            file,
            "",
            RunError::file_read(file, e),
        ))
    })?;

    let tokens = Lexer::new(&source)
        .tokenize()
        .map_err(|e| Box::new(RunErrorWithContext::new(file, source.clone(), RunError::Lex(e))))?;

    let program = Parser::new(tokens).parse().map_err(|e| {
        Box::new(RunErrorWithContext::new(
            file,
            source.clone(),
            RunError::Parse(e),
        ))
    })?;

    Ok((source, program))
}

/// Runs a Tern source file.
///
/// This function orchestrates the entire pipeline:
///
/// 1. Read the source file
/// 2. Tokenize
/// 3. Parse
/// 4. Interpret, with `print` output going to stdout
///
/// # Errors
///
/// Returns the first error of any phase, paired with the filename and
/// source text so the caller can render a diagnostic.
pub(crate) fn run(file: &str) -> Result<(), Box<RunErrorWithContext>> {
    let (source, program) = load_program(file)?;

    let mut interpreter = Interpreter::new();
    interpreter.run(&program).map_err(|e| {
        Box::new(RunErrorWithContext::new(
            file,
            source.clone(),
            RunError::Runtime(e),
        ))
    })?;

    Ok(())
}

/// Parses a Tern source file and prints its AST in source form to stdout.
pub(crate) fn print_ast(file: &str) -> Result<(), Box<RunErrorWithContext>> {
    let (_source, program) = load_program(file)?;
    print!("{}", printer::program_to_source(&program));
    Ok(())
}
