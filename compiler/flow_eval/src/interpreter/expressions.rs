//! Expression evaluation.

use flow_ir::{Expr, ExprId, ExprKind};

use super::Interpreter;
use crate::errors::undeclared_variable;
use crate::operators::{evaluate_binary, evaluate_comparison, evaluate_negate, to_string_value};
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;
use crate::EvalResult;

impl<'a> Interpreter<'a> {
    /// Evaluate an expression. Faults without a span get this expression's.
    pub(crate) fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        let expr = self.expr(id);
        ensure_sufficient_stack(|| self.eval_expr_inner(expr)).map_err(|err| err.or_span(expr.span))
    }

    fn eval_expr_inner(&mut self, expr: &'a Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Double(d) => Ok(Value::Double(*d)),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Char(c) => Ok(Value::Char(*c)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),

            ExprKind::Ident(name) => self
                .table
                .resolve(name)
                .map(|symbol| symbol.value().clone())
                .ok_or_else(|| undeclared_variable(name)),

            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(*left)?;
                let right = self.eval_expr(*right)?;
                evaluate_binary(&left, &right, *op)
            }
            ExprKind::Compare { op, left, right } => {
                let left = self.eval_expr(*left)?;
                let right = self.eval_expr(*right)?;
                evaluate_comparison(&left, &right, *op).map(Value::Bool)
            }
            ExprKind::Negate(operand) => {
                let value = self.eval_expr(*operand)?;
                evaluate_negate(&value)
            }

            ExprKind::Call {
                receiver,
                method,
                args,
            } => self.eval_call(receiver.as_deref(), method, args),
            ExprKind::FieldGet { object, field } => self.eval_field_get(object, field),

            ExprKind::ToString(operand) => {
                let value = self.eval_expr(*operand)?;
                to_string_value(&value)
            }
            ExprKind::ReadChar => self.eval_read_char(),
            ExprKind::ReadLine => self.eval_read_line(),
            ExprKind::ReadFile(path) => self.eval_read_file(*path),
        }
    }
}
