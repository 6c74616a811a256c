//! Statement nodes for the Tern AST.

use crate::token::Span;

use super::expr::Expr;

/// The kind of a statement in the Tern language.
///
/// This enum represents the different types of statements without source
/// location information. Use [`Stmt`] for the full AST node with span
/// information.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// An expression statement.
    ///
    /// Evaluates the expression for its side effects. The result value
    /// (if any) is discarded.
    Expr(Expr),

    /// A print statement.
    ///
    /// Evaluates the expression and writes its stringification, with the
    /// interpreter tag and a trailing newline, to the output sink.
    Print(Expr),

    /// A variable declaration with `var`.
    ///
    /// Declares a new name in the innermost scope table. A missing
    /// initializer binds the name to `nil`.
    Decl {
        /// The name of the variable being declared.
        name: String,
        /// The optional initializer expression.
        init: Option<Expr>,
    },

    /// A reassignment of an existing variable.
    ///
    /// The name is looked up through the current frame's tables; assigning
    /// an undefined name is a runtime error.
    Assign {
        /// The name of the variable being assigned.
        name: String,
        /// The value expression.
        value: Expr,
    },

    /// A brace-delimited block.
    ///
    /// Introduces a new scope table for its duration.
    Block(Vec<Stmt>),

    /// A conditional statement with optional `else` branch.
    If {
        /// The condition expression, tested for truthiness.
        condition: Expr,
        /// The statement executed when the condition is truthy.
        then_branch: Box<Stmt>,
        /// The statement executed when the condition is falsy, if any.
        else_branch: Option<Box<Stmt>>,
    },

    /// A while loop.
    While {
        /// The loop condition, tested for truthiness before each iteration.
        condition: Expr,
        /// The loop body.
        body: Box<Stmt>,
    },

    /// A C-style for loop.
    ///
    /// The initializer runs once; then while the condition is truthy the
    /// body runs followed by the update statement.
    For {
        /// The initializer: a `var` declaration or an expression statement.
        init: Box<Stmt>,
        /// The loop condition.
        condition: Expr,
        /// The update clause, parsed as a full assignment statement.
        update: Box<Stmt>,
        /// The loop body.
        body: Box<Stmt>,
    },

    /// A function declaration with `def`.
    ///
    /// Binds a function value under `name` in the innermost scope table.
    FuncDecl {
        /// The function name.
        name: String,
        /// The ordered parameter names.
        params: Vec<String>,
        /// The body block.
        body: Box<Stmt>,
    },

    /// A return statement.
    ///
    /// `return;` is represented as `None` and yields `nil`. Unwinds
    /// through any enclosing blocks and loops up to the nearest call.
    Return(Option<Expr>),
}

/// A statement in the Tern language with source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}
