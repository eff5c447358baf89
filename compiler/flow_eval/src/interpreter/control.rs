//! Control flow: conditionals, loops and try/catch.

use flow_ir::{Block, CatchClause, Condition, ExprId, ParsedType};
use tracing::debug;

use super::statements::assign_error;
use super::{Completion, ExecResult, Interpreter};
use crate::errors::{type_mismatch, EvalError};
use crate::operators::evaluate_comparison;
use crate::symbol::{Mutability, Symbol};
use crate::value::Value;

impl<'a> Interpreter<'a> {
    /// `if (left op right) { .. } else { .. }`
    pub(super) fn exec_if(
        &mut self,
        cond: &'a Condition,
        then_branch: &'a Block,
        else_branch: Option<&'a Block>,
    ) -> ExecResult {
        let left = self.eval_expr(cond.left)?;
        let right = self.eval_expr(cond.right)?;
        if evaluate_comparison(&left, &right, cond.op)? {
            self.exec_block(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.exec_block(else_branch)
        } else {
            Ok(Completion::Normal)
        }
    }

    /// `while (cond) { .. }`. The condition must be a Boolean.
    pub(super) fn exec_while(&mut self, cond: ExprId, body: &'a Block) -> ExecResult {
        loop {
            match self.eval_expr(cond)? {
                Value::Bool(true) => {}
                Value::Bool(false) => return Ok(Completion::Normal),
                other => return Err(type_mismatch("Boolean", other.type_name())),
            }
            let completion = self.exec_block(body)?;
            if completion.is_return() {
                return Ok(completion);
            }
        }
    }

    /// `for (var in start..end) { .. }` over the half-open range.
    ///
    /// One mutable loop variable lives in a scope around the whole loop and
    /// is reassigned before each iteration.
    pub(super) fn exec_for(
        &mut self,
        var: &str,
        start: ExprId,
        end: ExprId,
        body: &'a Block,
    ) -> ExecResult {
        let start = self.eval_int(start)?;
        let end = self.eval_int(end)?;

        self.with_scope(|scoped| {
            scoped.table.define(Symbol::new(
                var,
                ParsedType::Int,
                Mutability::Mutable,
                Value::Int(start),
            ))?;
            for i in start..end {
                scoped
                    .table
                    .assign(var, Value::Int(i))
                    .map_err(|err| assign_error(var, err))?;
                let completion = scoped.exec_block(body)?;
                if completion.is_return() {
                    return Ok(completion);
                }
            }
            Ok(Completion::Normal)
        })
    }

    fn eval_int(&mut self, id: ExprId) -> Result<i64, EvalError> {
        match self.eval_expr(id)? {
            Value::Int(n) => Ok(n),
            other => Err(type_mismatch("Int", other.type_name())),
        }
    }

    /// `try { .. } catch (name: String) { .. }`
    ///
    /// Only recoverable faults are intercepted. Without a catch clause the
    /// fault is reported in the output and execution continues.
    pub(super) fn exec_try(&mut self, body: &'a Block, catch: Option<&'a CatchClause>) -> ExecResult {
        let err = match self.exec_block(body) {
            Ok(completion) => return Ok(completion),
            Err(err) if err.is_recoverable() => err,
            Err(err) => return Err(err),
        };
        debug!(kind = ?err.kind, message = %err.message, "recovered from fault");

        match catch {
            Some(clause) => self.exec_catch(clause, err),
            None => {
                self.output
                    .println(&format!("exception caught: {}", err.message));
                Ok(Completion::Normal)
            }
        }
    }

    /// Bind the fault message to the catch variable in a fresh scope and run
    /// the handler.
    fn exec_catch(&mut self, clause: &'a CatchClause, err: EvalError) -> ExecResult {
        if clause.ty != ParsedType::String {
            return Err(type_mismatch("String", clause.ty.name()).with_span(clause.span));
        }
        self.with_scope(|scoped| {
            scoped.table.define(Symbol::new(
                clause.name.as_str(),
                ParsedType::String,
                Mutability::Immutable,
                Value::Str(err.message),
            ))?;
            scoped.exec_block(&clause.body)
        })
    }
}
