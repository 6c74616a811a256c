//! Top-level program structure for the Tern AST.

use super::stmt::Stmt;

/// The root node of a Tern program's AST.
///
/// A `Program` is the ordered sequence of top-level statements. There is
/// no required entry point; execution starts at the first statement.
#[derive(Debug, Clone)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Stmt>,
}
