//! Expression evaluation.

use std::io::Write;
use std::rc::Rc;

use crate::ast::{BinaryOp, Expr, ExprKind, Stmt, UnaryOp};
use crate::token::Span;

use super::Interpreter;
use super::error::RuntimeError;
use super::stmt::Flow;
use super::value::{FuncKind, FuncValue, Value};

impl<W: Write> Interpreter<W> {
    /// Evaluates an expression to a value.
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Nil => Ok(Value::Nil),
            ExprKind::Identifier(name) => self
                .state
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::undefined_variable(name, expr.span)),
            ExprKind::Grouping(inner) => self.eval_expr(inner),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                self.eval_unary(*op, value, expr.span)
            }
            ExprKind::Binary { left, op, right } => match op {
                // Short-circuit operators evaluate the right operand lazily
                BinaryOp::And => {
                    let left_value = self.eval_expr(left)?;
                    if !left_value.is_truthy() {
                        Ok(Value::Bool(false))
                    } else {
                        self.eval_expr(right)
                    }
                }
                BinaryOp::Or => {
                    let left_value = self.eval_expr(left)?;
                    if left_value.is_truthy() {
                        Ok(left_value)
                    } else {
                        self.eval_expr(right)
                    }
                }
                _ => {
                    let left_value = self.eval_expr(left)?;
                    let right_value = self.eval_expr(right)?;
                    self.eval_binary(left_value, *op, right_value, expr.span)
                }
            },
            ExprKind::Call { callee, args } => self.eval_call(callee, args, expr.span),
        }
    }

    /// Applies a unary operator.
    ///
    /// `-` requires a number; `!` coerces any value via truthiness.
    fn eval_unary(&self, op: UnaryOp, value: Value, span: Span) -> Result<Value, RuntimeError> {
        match op {
            UnaryOp::Neg => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(RuntimeError::type_mismatch(
                    format!("Operand of '-' must be a number, got {}", other.type_name()),
                    span,
                )),
            },
            UnaryOp::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }

    /// Applies a non-short-circuit binary operator to evaluated operands.
    fn eval_binary(
        &self,
        left: Value,
        op: BinaryOp,
        right: Value,
        span: Span,
    ) -> Result<Value, RuntimeError> {
        match op {
            BinaryOp::Add => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
                (left, right) => Err(self.binary_type_error(&left, op, &right, span)),
            },
            BinaryOp::Sub => self.numeric_op(left, op, right, span, |a, b| a - b),
            BinaryOp::Mul => self.numeric_op(left, op, right, span, |a, b| a * b),
            // Division by zero follows IEEE-754 semantics
            BinaryOp::Div => self.numeric_op(left, op, right, span, |a, b| a / b),
            BinaryOp::Equal => Ok(Value::Bool(left == right)),
            BinaryOp::NotEqual => Ok(Value::Bool(left != right)),
            BinaryOp::Less => self.ordering_op(left, op, right, span),
            BinaryOp::LessEqual => self.ordering_op(left, op, right, span),
            BinaryOp::Greater => self.ordering_op(left, op, right, span),
            BinaryOp::GreaterEqual => self.ordering_op(left, op, right, span),
            BinaryOp::And | BinaryOp::Or => {
                unreachable!("short-circuit operators are handled in eval_expr")
            }
        }
    }

    /// Applies an arithmetic operator that requires two numbers.
    fn numeric_op(
        &self,
        left: Value,
        op: BinaryOp,
        right: Value,
        span: Span,
        apply: fn(f64, f64) -> f64,
    ) -> Result<Value, RuntimeError> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(apply(a, b))),
            (left, right) => Err(self.binary_type_error(&left, op, &right, span)),
        }
    }

    /// Applies an ordering operator to two numbers or two strings.
    fn ordering_op(
        &self,
        left: Value,
        op: BinaryOp,
        right: Value,
        span: Span,
    ) -> Result<Value, RuntimeError> {
        let result = match (&left, &right) {
            (Value::Number(a), Value::Number(b)) => match op {
                BinaryOp::Less => a < b,
                BinaryOp::LessEqual => a <= b,
                BinaryOp::Greater => a > b,
                BinaryOp::GreaterEqual => a >= b,
                _ => unreachable!("ordering_op called with a non-ordering operator"),
            },
            (Value::Str(a), Value::Str(b)) => match op {
                BinaryOp::Less => a < b,
                BinaryOp::LessEqual => a <= b,
                BinaryOp::Greater => a > b,
                BinaryOp::GreaterEqual => a >= b,
                _ => unreachable!("ordering_op called with a non-ordering operator"),
            },
            _ => return Err(self.binary_type_error(&left, op, &right, span)),
        };
        Ok(Value::Bool(result))
    }

    /// Builds the type mismatch error for a binary operator.
    fn binary_type_error(
        &self,
        left: &Value,
        op: BinaryOp,
        right: &Value,
        span: Span,
    ) -> RuntimeError {
        RuntimeError::type_mismatch(
            format!(
                "Operator '{}' cannot be applied to {} and {}",
                op,
                left.type_name(),
                right.type_name()
            ),
            span,
        )
    }

    /// Evaluates a function call.
    ///
    /// The callee name must resolve to a function value. Arguments are
    /// evaluated strictly left to right before the arity check. User calls
    /// push a call frame (globals snapshot plus a fresh table holding the
    /// parameter bindings); the frame is popped on every exit path.
    fn eval_call(
        &mut self,
        callee: &str,
        args: &[Expr],
        span: Span,
    ) -> Result<Value, RuntimeError> {
        let func = match self.state.get(callee) {
            Some(Value::Func(func)) => Rc::clone(func),
            Some(_) => return Err(RuntimeError::not_callable(callee, span)),
            None => return Err(RuntimeError::undefined_variable(callee, span)),
        };

        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.eval_expr(arg)?);
        }

        if arg_values.len() != func.arity() {
            return Err(RuntimeError::arity_mismatch(
                &func.name,
                func.arity(),
                arg_values.len(),
                span,
            ));
        }

        match &func.kind {
            FuncKind::Native(native) => native(&arg_values).map_err(|e| e.with_span(span)),
            FuncKind::User(body) => {
                self.state.push_frame();
                let result = self.call_user(&func, arg_values, body, span);
                self.state.pop_frame();
                result
            }
        }
    }

    /// Runs a user function body inside an already-pushed call frame.
    ///
    /// Split out of [`eval_call`](Self::eval_call) so the caller can pop
    /// the frame regardless of how this returns.
    fn call_user(
        &mut self,
        func: &FuncValue,
        arg_values: Vec<Value>,
        body: &Stmt,
        span: Span,
    ) -> Result<Value, RuntimeError> {
        for (param, value) in func.params.iter().zip(arg_values) {
            if !self.state.define(param, value) {
                return Err(RuntimeError::already_defined(param, span));
            }
        }

        match self.exec_stmt(body)? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Nil),
        }
    }
}
