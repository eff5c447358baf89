//! Function and method invocation.
//!
//! A call body runs in a fresh local scope whose parent is fixed by the
//! callee, not the caller: the global scope for free functions, the object's
//! instance scope for methods. Arguments are evaluated in the caller's scope
//! before that scope is pushed.

use flow_ir::{ExprId, Param, StmtKind};
use tracing::instrument;

use super::classes::ArgValues;
use super::{Completion, Interpreter};
use crate::declarations::MethodDeclaration;
use crate::errors::{arity_mismatch, missing_return, type_mismatch, unknown_method, EvalError};
use crate::scope::ScopeId;
use crate::stack::ensure_sufficient_stack;
use crate::symbol::{Mutability, Symbol};
use crate::value::Value;
use crate::EvalResult;

/// Fail unless exactly one argument was supplied per parameter.
pub(super) fn check_arity(name: &str, params: &[Param], got: usize) -> Result<(), EvalError> {
    if params.len() == got {
        Ok(())
    } else {
        Err(arity_mismatch(name, params.len(), got))
    }
}

/// Whether the last statement of the body is a `return`.
fn ends_with_return(decl: MethodDeclaration<'_>) -> bool {
    matches!(
        decl.body().stmts.last().map(|stmt| &stmt.kind),
        Some(StmtKind::Return(_))
    )
}

impl<'a> Interpreter<'a> {
    /// `name(args)` or `object.name(args)`.
    pub(super) fn eval_call(
        &mut self,
        receiver: Option<&str>,
        method: &str,
        args: &[ExprId],
    ) -> EvalResult {
        // The receiver's handle is held until the call returns, so the
        // instance survives even if the arguments or the body reassign the
        // variable that named it.
        let (decl, parent, _receiver) = match receiver {
            Some(object) => {
                let handle = self.object_handle(object)?;
                let decl = self
                    .table
                    .get_scope(handle.scope)
                    .and_then(|scope| scope.method(method))
                    .ok_or_else(|| unknown_method(method))?;
                (decl, handle.scope, Some(handle))
            }
            None => {
                let (decl, parent) = self.resolve_unqualified(method)?;
                (decl, parent, None)
            }
        };
        let args = self.eval_args(args)?;
        self.invoke(decl, parent, args)
    }

    /// Inside a method, an unqualified name first means a method of the
    /// nearest enclosing instance; otherwise a free function.
    fn resolve_unqualified(
        &self,
        method: &str,
    ) -> Result<(MethodDeclaration<'a>, ScopeId), EvalError> {
        let enclosing = self
            .table
            .enclosing_instance(self.table.current_scope())
            .and_then(|instance| {
                self.table
                    .get_scope(instance)
                    .and_then(|scope| scope.method(method))
                    .map(|decl| (decl, instance))
            });
        if let Some(found) = enclosing {
            return Ok(found);
        }
        self.table
            .function(method)
            .map(|decl| (decl, ScopeId::GLOBAL))
            .ok_or_else(|| unknown_method(method))
    }

    pub(super) fn eval_args(&mut self, args: &[ExprId]) -> Result<ArgValues, EvalError> {
        args.iter().map(|&arg| self.eval_expr(arg)).collect()
    }

    /// Run `decl` with its body scope parented to `parent`.
    #[instrument(level = "debug", skip_all, fields(method = decl.name(), depth = self.call_depth))]
    fn invoke(&mut self, decl: MethodDeclaration<'a>, parent: ScopeId, args: ArgValues) -> EvalResult {
        check_arity(decl.name(), decl.params(), args.len())?;
        let return_type = decl.return_type();
        if !return_type.is_unit() && !ends_with_return(decl) {
            return Err(missing_return(decl.name()));
        }
        self.enter_call()?;
        let completion = ensure_sufficient_stack(|| {
            self.with_scope_in(parent, |scoped| {
                scoped.bind_params(decl.params(), args)?;
                scoped.exec_stmts(&decl.body().stmts)
            })
        });
        self.leave_call();

        match completion? {
            Completion::Return(value) if value.matches(return_type) => Ok(value),
            Completion::Return(value) => Err(type_mismatch(return_type.name(), value.type_name())),
            Completion::Normal if return_type.is_unit() => Ok(Value::Unit),
            Completion::Normal => Err(missing_return(decl.name())),
        }
    }

    /// Bind arguments as mutable symbols in the current scope. A `Unit`
    /// parameter accepts any value.
    pub(super) fn bind_params(&mut self, params: &[Param], args: ArgValues) -> Result<(), EvalError> {
        for (param, value) in params.iter().zip(args) {
            if !param.ty.is_unit() && !value.matches(&param.ty) {
                return Err(type_mismatch(param.ty.name(), value.type_name()));
            }
            self.table.define(Symbol::new(
                param.name.as_str(),
                param.ty.clone(),
                Mutability::Mutable,
                value,
            ))?;
        }
        Ok(())
    }
}
