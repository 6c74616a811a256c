//! Runtime error types.
//!
//! This module defines [`RuntimeError`], which represents errors raised
//! while evaluating a program. All runtime errors are fatal to the
//! currently-executing program; none are caught internally.

use crate::token::Span;

/// The kind of runtime error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching, which is fragile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// An operator was applied to operands of the wrong type.
    TypeMismatch,
    /// A name was read or assigned before being defined.
    UndefinedVariable,
    /// A name was defined twice in the same scope table.
    AlreadyDefined,
    /// A call target did not resolve to a function value.
    NotCallable,
    /// A function was called with the wrong number of arguments.
    ArityMismatch,
    /// A built-in function rejected an argument value.
    InvalidArgument,
}

/// An error raised during evaluation.
///
/// Contains a human-readable message naming the offending token or value,
/// and optionally the source location where the error occurred. Built-in
/// functions construct errors without a span; the call site attaches one.
#[derive(Debug)]
pub struct RuntimeError {
    /// A human-readable description of the error.
    message: String,
    /// The source location where the error occurred, if available.
    span: Option<Span>,
    /// The kind of error, for structured error handling.
    kind: RuntimeErrorKind,
}

impl RuntimeError {
    /// Creates a new error with a source location.
    pub fn new(kind: RuntimeErrorKind, message: impl Into<String>, span: Span) -> Self {
        RuntimeError {
            message: message.into(),
            span: Some(span),
            kind,
        }
    }

    /// Creates a new error without a source location.
    ///
    /// Used by built-in functions, which have no view of the call site;
    /// the interpreter attaches the call span via [`with_span`](Self::with_span).
    pub fn without_span(kind: RuntimeErrorKind, message: impl Into<String>) -> Self {
        RuntimeError {
            message: message.into(),
            span: None,
            kind,
        }
    }

    /// Creates an "undefined variable" error for `name`.
    pub fn undefined_variable(name: &str, span: Span) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::UndefinedVariable,
            format!("Undefined variable: '{}'", name),
            span,
        )
    }

    /// Creates an "already defined" error for `name`.
    pub fn already_defined(name: &str, span: Span) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::AlreadyDefined,
            format!("Variable already defined in this scope: '{}'", name),
            span,
        )
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(message: impl Into<String>, span: Span) -> Self {
        RuntimeError::new(RuntimeErrorKind::TypeMismatch, message, span)
    }

    /// Creates a "not callable" error for `name`.
    pub fn not_callable(name: &str, span: Span) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::NotCallable,
            format!("'{}' is not a function", name),
            span,
        )
    }

    /// Creates an arity mismatch error for a call to `name`.
    pub fn arity_mismatch(name: &str, expected: usize, got: usize, span: Span) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::ArityMismatch,
            format!(
                "Function '{}' takes {} argument(s) but {} were given",
                name, expected, got
            ),
            span,
        )
    }

    /// Attaches `span` if the error does not already carry one.
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a short message suitable for report titles.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            RuntimeErrorKind::TypeMismatch => "type mismatch",
            RuntimeErrorKind::UndefinedVariable => "undefined variable",
            RuntimeErrorKind::AlreadyDefined => "variable already defined",
            RuntimeErrorKind::NotCallable => "not a function",
            RuntimeErrorKind::ArityMismatch => "wrong number of arguments",
            RuntimeErrorKind::InvalidArgument => "invalid argument",
        }
    }

    /// Returns the source location where the error occurred, if available.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> RuntimeErrorKind {
        self.kind
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(span) = &self.span {
            write!(f, "{}:{}: {}", span.line, span.column, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for RuntimeError {}
