//! Abstract Syntax Tree definitions for the Tern language.
//!
//! This module defines the data structures that represent parsed Tern
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::interpreter`] and [`crate::printer`].
//!
//! # Structure
//!
//! The AST has a hierarchical structure:
//! - [`Program`] - The root node, an ordered sequence of statements
//! - [`Stmt`] - Statements (declarations, control flow, blocks, print, ...)
//! - [`Expr`] - Expressions (literals, identifiers, operators, calls)
//!
//! Each AST node includes source location information
//! ([`Span`](crate::token::Span)) for error reporting. Nodes are immutable
//! after construction and form a tree; no node is shared between parents.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes and operator enums
//! - [`stmt`] - Statement nodes
//! - [`program`] - Top-level program structure
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::interpreter`] - Evaluates the AST
//! * [`crate::printer`] - Renders the AST back to source text

mod expr;
mod program;
mod stmt;


pub use expr::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use program::Program;
pub use stmt::{Stmt, StmtKind};
