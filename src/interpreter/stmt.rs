//! Statement execution and control flow.

use std::io::Write;
use std::rc::Rc;

use crate::ast::{Expr, Stmt, StmtKind};

use super::error::RuntimeError;
use super::value::{FuncValue, Value};
use super::{Interpreter, PRINT_TAG};

/// The result of executing a statement.
///
/// Early return is the only non-local control transfer in the language.
/// It is modelled as a dedicated flow value, never as an error: block and
/// loop evaluators pass `Return` upward, and the nearest enclosing call
/// converts it into the call's result.
#[derive(Debug)]
pub(super) enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// An early return carrying the return value.
    Return(Value),
}

impl<W: Write> Interpreter<W> {
    /// Executes a single statement.
    pub(super) fn exec_stmt(&mut self, stmt: &Stmt) -> Result<Flow, RuntimeError> {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(Flow::Normal)
            }
            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr)?;
                // Matches println!'s behavior on a broken stdout
                writeln!(self.out, "{}{}", PRINT_TAG, value)
                    .expect("failed to write print output");
                Ok(Flow::Normal)
            }
            StmtKind::Decl { name, init } => {
                let value = match init {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Nil,
                };
                if !self.state.define(name, value) {
                    return Err(RuntimeError::already_defined(name, stmt.span));
                }
                Ok(Flow::Normal)
            }
            StmtKind::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                if !self.state.assign(name, value) {
                    return Err(RuntimeError::undefined_variable(name, stmt.span));
                }
                Ok(Flow::Normal)
            }
            StmtKind::Block(statements) => self.exec_block(statements),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(condition)?.is_truthy() {
                    self.exec_stmt(then_branch)
                } else if let Some(else_stmt) = else_branch {
                    self.exec_stmt(else_stmt)
                } else {
                    Ok(Flow::Normal)
                }
            }
            StmtKind::While { condition, body } => {
                while self.eval_expr(condition)?.is_truthy() {
                    match self.exec_stmt(body)? {
                        Flow::Normal => {}
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }
                Ok(Flow::Normal)
            }
            StmtKind::For {
                init,
                condition,
                update,
                body,
            } => {
                // The loop gets its own table so the init declaration does
                // not leak into the enclosing scope
                self.state.push_table();
                let result = self.exec_for(init, condition, update, body);
                self.state.pop_table();
                result
            }
            StmtKind::FuncDecl { name, params, body } => {
                let func = FuncValue::user(name, params.clone(), Rc::new((**body).clone()));
                if !self.state.define(name, Value::Func(Rc::new(func))) {
                    return Err(RuntimeError::already_defined(name, stmt.span));
                }
                Ok(Flow::Normal)
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            }
        }
    }

    /// Executes a block inside a fresh table.
    ///
    /// The table is popped on every exit path: normal completion, early
    /// return, and error.
    fn exec_block(&mut self, statements: &[Stmt]) -> Result<Flow, RuntimeError> {
        self.state.push_table();
        let result = self.exec_stmts(statements);
        self.state.pop_table();
        result
    }

    /// Executes statements in order, stopping at the first early return.
    fn exec_stmts(&mut self, statements: &[Stmt]) -> Result<Flow, RuntimeError> {
        for stmt in statements {
            match self.exec_stmt(stmt)? {
                Flow::Normal => {}
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    /// Runs a C-style for loop inside an already-pushed table.
    fn exec_for(
        &mut self,
        init: &Stmt,
        condition: &Expr,
        update: &Stmt,
        body: &Stmt,
    ) -> Result<Flow, RuntimeError> {
        match self.exec_stmt(init)? {
            Flow::Normal => {}
            flow @ Flow::Return(_) => return Ok(flow),
        }

        while self.eval_expr(condition)?.is_truthy() {
            match self.exec_stmt(body)? {
                Flow::Normal => {}
                flow @ Flow::Return(_) => return Ok(flow),
            }
            match self.exec_stmt(update)? {
                Flow::Normal => {}
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }

        Ok(Flow::Normal)
    }
}
