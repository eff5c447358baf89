//! Object construction and field access.
//!
//! Every object owns a class-instance scope holding its fields and its
//! method table. Construction runs field initializers and the constructor
//! with the instance scope active, then re-anchors the instance scope to the
//! global scope so that later method calls never see the creator's locals.

use flow_ir::{ExprId, ParsedType};
use smallvec::SmallVec;
use tracing::instrument;

use super::calls::check_arity;
use super::statements::{assign_error, check_assignable};
use super::Interpreter;
use crate::declarations::ClassDeclaration;
use crate::errors::{
    duplicate_symbol, immutable_assignment, type_mismatch, undeclared_variable, unexpected_arguments,
    unknown_class, unknown_object, EvalError,
};
use crate::scope::ScopeId;
use crate::stack::ensure_sufficient_stack;
use crate::symbol::{Mutability, Symbol};
use crate::value::{ObjectHandle, Value};
use crate::EvalResult;

/// Evaluated call or constructor arguments.
pub(super) type ArgValues = SmallVec<[Value; 4]>;

impl<'a> Interpreter<'a> {
    /// `val p = new Class(args);`
    ///
    /// The object symbol is bound before field initializers run.
    pub(super) fn declare_object(
        &mut self,
        name: &str,
        class_name: &str,
        args: &[ExprId],
        mutable: bool,
    ) -> Result<(), EvalError> {
        let class = self
            .table
            .class(class_name)
            .ok_or_else(|| unknown_class(class_name))?;
        let current = self.table.current_scope();
        if self
            .table
            .get_scope(current)
            .is_some_and(|scope| scope.contains(name))
        {
            return Err(duplicate_symbol(name));
        }

        let args = self.eval_args(args)?;
        let handle = self.table.new_class_scope(class.name());
        let instance = handle.scope;
        self.table.define(Symbol::new(
            name,
            ParsedType::Class(class.name().to_string()),
            Mutability::from_flag(mutable),
            Value::Object(handle),
        ))?;
        self.construct(class, instance, args)
    }

    /// `p = new Class(args);` on an existing, mutable symbol declared with
    /// the same class.
    pub(super) fn reassign_object(
        &mut self,
        name: &str,
        class_name: &str,
        args: &[ExprId],
    ) -> Result<(), EvalError> {
        let symbol = self
            .table
            .resolve(name)
            .ok_or_else(|| undeclared_variable(name))?;
        if !symbol.is_mutable() {
            return Err(immutable_assignment(name));
        }
        if symbol.declared_type().name() != class_name {
            return Err(type_mismatch(symbol.declared_type().name(), class_name));
        }
        let class = self
            .table
            .class(class_name)
            .ok_or_else(|| unknown_class(class_name))?;

        let args = self.eval_args(args)?;
        let handle = self.table.new_class_scope(class.name());
        self.construct(class, handle.scope, args)?;
        self.table
            .assign(name, Value::Object(handle))
            .map_err(|err| assign_error(name, err))
    }

    /// Populate `instance`: fields in declaration order, then the method
    /// table, then the constructor.
    #[instrument(level = "debug", skip_all, fields(class = class.name(), scope = instance.raw()))]
    fn construct(
        &mut self,
        class: ClassDeclaration<'a>,
        instance: ScopeId,
        args: ArgValues,
    ) -> Result<(), EvalError> {
        self.enter_call()?;
        let result = ensure_sufficient_stack(|| {
            self.with_entered_scope(instance, |scoped| {
                for field in class.fields() {
                    scoped.exec_stmt(field)?;
                }
                if let Some(scope) = scoped.table.get_scope_mut(instance) {
                    for method in class.methods() {
                        scope
                            .define_method(method)
                            .map_err(|rejected| duplicate_symbol(rejected.name()))?;
                    }
                }
                match class.constructor() {
                    Some(ctor) => {
                        check_arity(class.name(), &ctor.params, args.len())?;
                        scoped.with_scope(|ctor_scope| {
                            ctor_scope.bind_params(&ctor.params, args)?;
                            ctor_scope.exec_block(&ctor.body)
                        })?;
                        Ok(())
                    }
                    None if !args.is_empty() => Err(unexpected_arguments(class.name())),
                    None => Ok(()),
                }
            })
        });
        self.table.set_parent(instance, ScopeId::GLOBAL);
        self.leave_call();
        result
    }

    /// Instance scope of the object bound to `object`.
    pub(super) fn object_scope(&self, object: &str) -> Result<ScopeId, EvalError> {
        self.object_handle(object).map(|handle| handle.scope)
    }

    /// A new handle to the object bound to `object`.
    pub(super) fn object_handle(&self, object: &str) -> Result<ObjectHandle, EvalError> {
        self.table
            .resolve(object)
            .and_then(|symbol| symbol.value().as_object())
            .cloned()
            .ok_or_else(|| unknown_object(object))
    }

    /// `object.field`, looked up in the instance's own fields only.
    pub(super) fn eval_field_get(&self, object: &str, field: &str) -> EvalResult {
        let instance = self.object_scope(object)?;
        self.table
            .get_scope(instance)
            .and_then(|scope| scope.lookup_local(field))
            .map(|symbol| symbol.value().clone())
            .ok_or_else(|| undeclared_variable(field))
    }

    /// `object.field = value;`
    pub(super) fn exec_field_assign(
        &mut self,
        object: &str,
        field: &str,
        value: ExprId,
    ) -> Result<(), EvalError> {
        let value = self.eval_expr(value)?;
        let instance = self.object_scope(object)?;
        let symbol = self
            .table
            .get_scope_mut(instance)
            .and_then(|scope| scope.lookup_local_mut(field))
            .ok_or_else(|| undeclared_variable(field))?;
        check_assignable(symbol, &value)?;
        symbol.assign(value).map_err(|err| assign_error(field, err))?;
        self.table.free_released();
        Ok(())
    }
}
