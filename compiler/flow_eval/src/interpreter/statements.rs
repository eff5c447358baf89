//! Statement dispatch, declarations and assignment.

use flow_ir::{Block, ExprId, ParsedType, Stmt, StmtKind};
use tracing::trace;

use super::{Completion, ExecResult, Interpreter};
use crate::errors::{immutable_assignment, type_mismatch, undeclared_variable, EvalError};
use crate::symbol::{AssignError, Mutability, Symbol};
use crate::value::Value;

/// Translate a symbol-table assignment failure for `name`.
pub(super) fn assign_error(name: &str, err: AssignError) -> EvalError {
    match err {
        AssignError::Immutable => immutable_assignment(name),
        AssignError::Undefined => undeclared_variable(name),
    }
}

/// Reject storing `value` into `symbol`: mutability first, then type.
pub(super) fn check_assignable(symbol: &Symbol, value: &Value) -> Result<(), EvalError> {
    if !symbol.is_mutable() {
        return Err(immutable_assignment(symbol.name()));
    }
    if !value.matches(symbol.declared_type()) {
        return Err(type_mismatch(
            symbol.declared_type().name(),
            value.type_name(),
        ));
    }
    Ok(())
}

impl<'a> Interpreter<'a> {
    /// Execute one statement. Faults without a span get the statement's.
    pub(crate) fn exec_stmt(&mut self, stmt: &'a Stmt) -> ExecResult {
        trace!(span = %stmt.span, "exec statement");
        self.exec_stmt_inner(stmt)
            .map_err(|err| err.or_span(stmt.span))
    }

    fn exec_stmt_inner(&mut self, stmt: &'a Stmt) -> ExecResult {
        match &stmt.kind {
            StmtKind::VarDecl {
                name,
                ty,
                init,
                mutable,
            } => {
                self.exec_var_decl(name, ty.as_ref(), *init, *mutable)?;
                Ok(Completion::Normal)
            }
            StmtKind::ObjectDecl {
                name,
                class,
                args,
                mutable,
            } => {
                self.declare_object(name, class, args, *mutable)?;
                Ok(Completion::Normal)
            }
            StmtKind::ObjectAssign { name, class, args } => {
                self.reassign_object(name, class, args)?;
                Ok(Completion::Normal)
            }
            StmtKind::Assign { name, value } => {
                let value = self.eval_expr(*value)?;
                self.assign_checked(name, value)?;
                Ok(Completion::Normal)
            }
            StmtKind::FieldAssign {
                object,
                field,
                value,
            } => {
                self.exec_field_assign(object, field, *value)?;
                Ok(Completion::Normal)
            }

            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.exec_if(cond, then_branch, else_branch.as_ref()),
            StmtKind::While { cond, body } => self.exec_while(*cond, body),
            StmtKind::For {
                var,
                start,
                end,
                body,
            } => self.exec_for(var, *start, *end, body),
            StmtKind::Try { body, catch } => self.exec_try(body, catch.as_ref()),

            StmtKind::Return(value) => {
                let value = match value {
                    Some(id) => self.eval_expr(*id)?,
                    None => Value::Unit,
                };
                Ok(Completion::Return(value))
            }

            StmtKind::Print(value) => {
                self.exec_print(*value)?;
                Ok(Completion::Normal)
            }
            StmtKind::WriteFile { path, content } => {
                self.exec_write_file(*path, *content)?;
                Ok(Completion::Normal)
            }
            StmtKind::Expr(id) => {
                self.eval_expr(*id)?;
                Ok(Completion::Normal)
            }
        }
    }

    /// Execute statements in the current scope until one returns.
    pub(crate) fn exec_stmts(&mut self, stmts: &'a [Stmt]) -> ExecResult {
        for stmt in stmts {
            let completion = self.exec_stmt(stmt)?;
            if completion.is_return() {
                return Ok(completion);
            }
        }
        Ok(Completion::Normal)
    }

    /// Execute a control-structure body in its own local scope.
    pub(crate) fn exec_block(&mut self, block: &'a Block) -> ExecResult {
        self.with_scope(|scoped| scoped.exec_stmts(&block.stmts))
    }

    /// `var`/`val` declaration.
    ///
    /// The declared type is the annotation if present, otherwise the type of
    /// the initial value. Without an initializer the symbol gets the type's
    /// default value.
    fn exec_var_decl(
        &mut self,
        name: &str,
        ty: Option<&ParsedType>,
        init: Option<ExprId>,
        mutable: bool,
    ) -> Result<(), EvalError> {
        let (declared_type, value) = match (ty, init) {
            (Some(ty), Some(init)) => {
                let value = self.eval_expr(init)?;
                if !value.matches(ty) {
                    return Err(type_mismatch(ty.name(), value.type_name()));
                }
                (ty.clone(), value)
            }
            (None, Some(init)) => {
                let value = self.eval_expr(init)?;
                (value.parsed_type(), value)
            }
            (Some(ty), None) => (ty.clone(), Value::default_for(ty)),
            (None, None) => (ParsedType::Unit, Value::Unit),
        };

        self.table.define(Symbol::new(
            name,
            declared_type,
            Mutability::from_flag(mutable),
            value,
        ))
    }

    /// Store `value` into the visible symbol `name`.
    pub(super) fn assign_checked(&mut self, name: &str, value: Value) -> Result<(), EvalError> {
        let symbol = self
            .table
            .resolve(name)
            .ok_or_else(|| undeclared_variable(name))?;
        check_assignable(symbol, &value)?;
        self.table
            .assign(name, value)
            .map_err(|err| assign_error(name, err))
    }
}
