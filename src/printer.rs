//! AST pretty-printer.
//!
//! This module renders a parsed [`Program`] back to source form. The
//! output is valid Tern source: reparsing it yields an equivalent AST,
//! which makes the printer usable both as a debugging aid (the `ast` CLI
//! subcommand) and as the round-trip check in tests.
//!
//! Formatting is canonical rather than faithful to the input: one
//! statement per line, a single space around binary operators, and 4-space
//! indentation inside blocks. Comments are not part of the AST and do not
//! survive.

use crate::ast::{Expr, ExprKind, Program, Stmt, StmtKind};

/// Number of spaces per indentation level.
const INDENT_WIDTH: usize = 4;

/// Renders a program as source text.
///
/// Each top-level statement ends with a newline.
pub fn program_to_source(program: &Program) -> String {
    let mut out = String::new();
    for stmt in &program.statements {
        write_stmt(&mut out, stmt, 0);
        out.push('\n');
    }
    out
}

/// Renders a single expression as source text.
pub fn expr_to_source(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

fn pad(out: &mut String, indent: usize) {
    for _ in 0..indent * INDENT_WIDTH {
        out.push(' ');
    }
}

fn write_stmt(out: &mut String, stmt: &Stmt, indent: usize) {
    match &stmt.kind {
        StmtKind::Expr(expr) => {
            write_expr(out, expr);
            out.push(';');
        }
        StmtKind::Print(expr) => {
            out.push_str("print ");
            write_expr(out, expr);
            out.push(';');
        }
        StmtKind::Decl { name, init } => {
            out.push_str("var ");
            out.push_str(name);
            if let Some(init) = init {
                out.push_str(" = ");
                write_expr(out, init);
            }
            out.push(';');
        }
        StmtKind::Assign { name, value } => {
            out.push_str(name);
            out.push_str(" = ");
            write_expr(out, value);
            out.push(';');
        }
        StmtKind::Block(statements) => {
            if statements.is_empty() {
                out.push_str("{}");
            } else {
                out.push_str("{\n");
                for inner in statements {
                    pad(out, indent + 1);
                    write_stmt(out, inner, indent + 1);
                    out.push('\n');
                }
                pad(out, indent);
                out.push('}');
            }
        }
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            out.push_str("if ");
            write_expr(out, condition);
            out.push(' ');
            write_stmt(out, then_branch, indent);
            if let Some(else_stmt) = else_branch {
                out.push_str(" else ");
                write_stmt(out, else_stmt, indent);
            }
        }
        StmtKind::While { condition, body } => {
            out.push_str("while (");
            write_expr(out, condition);
            out.push_str(") ");
            write_stmt(out, body, indent);
        }
        StmtKind::For {
            init,
            condition,
            update,
            body,
        } => {
            out.push_str("for (");
            write_stmt(out, init, indent);
            out.push(' ');
            write_expr(out, condition);
            out.push_str("; ");
            write_stmt(out, update, indent);
            out.push_str(") ");
            write_stmt(out, body, indent);
        }
        StmtKind::FuncDecl { name, params, body } => {
            out.push_str("def ");
            out.push_str(name);
            out.push('(');
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(param);
            }
            out.push_str(") ");
            write_stmt(out, body, indent);
        }
        StmtKind::Return(value) => {
            out.push_str("return");
            if let Some(expr) = value {
                out.push(' ');
                write_expr(out, expr);
            }
            out.push(';');
        }
    }
}

fn write_expr(out: &mut String, expr: &Expr) {
    match &expr.kind {
        ExprKind::Number(n) => {
            out.push_str(&n.to_string());
        }
        ExprKind::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        ExprKind::Bool(b) => {
            out.push_str(if *b { "true" } else { "false" });
        }
        ExprKind::Nil => {
            out.push_str("nil");
        }
        ExprKind::Identifier(name) => {
            out.push_str(name);
        }
        ExprKind::Grouping(inner) => {
            out.push('(');
            write_expr(out, inner);
            out.push(')');
        }
        ExprKind::Unary { op, operand } => {
            out.push_str(&op.to_string());
            write_expr(out, operand);
        }
        ExprKind::Binary { left, op, right } => {
            write_expr(out, left);
            out.push(' ');
            out.push_str(&op.to_string());
            out.push(' ');
            write_expr(out, right);
        }
        ExprKind::Call { callee, args } => {
            out.push_str(callee);
            out.push('(');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expr(out, arg);
            }
            out.push(')');
        }
    }
}
