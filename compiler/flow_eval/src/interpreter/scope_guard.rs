//! RAII-style scope guards for Interpreter scope management.
//!
//! [`ScopedInterpreter`] pops the scope it activated when dropped, so every
//! exit path out of a block, call or construction (including `?` on a fault)
//! leaves the scope stack exactly as it found it.
//!
//! # Usage
//!
//! ```text
//! // Closure-based
//! interpreter.with_scope(|scoped| {
//!     scoped.table.define(symbol)?;
//!     scoped.exec_stmts(&block.stmts)
//! })
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::scope::ScopeId;

/// Guard holding the interpreter while a scope is active.
///
/// Access the interpreter through this guard; it implements `Deref` and
/// `DerefMut`.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    /// Whether a scope was actually pushed and must be popped.
    active: bool,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        if self.active {
            self.interpreter.table.pop_scope();
        }
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a local scope nested in the current one.
    pub(crate) fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.table.push_local();
        ScopedInterpreter {
            interpreter: self,
            active: true,
        }
    }

    /// Push a local scope whose parent is `parent` instead of the current
    /// scope. Call bodies use this so they cannot see the caller's locals.
    pub(crate) fn scoped_in(&mut self, parent: ScopeId) -> ScopedInterpreter<'_, 'a> {
        let id = self.table.push_local();
        self.table.set_parent(id, parent);
        ScopedInterpreter {
            interpreter: self,
            active: true,
        }
    }

    /// Re-activate an existing scope, such as a freshly created instance
    /// scope.
    pub(crate) fn entered(&mut self, id: ScopeId) -> ScopedInterpreter<'_, 'a> {
        let active = self.table.enter_scope(id);
        ScopedInterpreter {
            interpreter: self,
            active,
        }
    }

    /// Run `f` inside a new local scope.
    pub(crate) fn with_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` inside a new local scope parented to `parent`.
    pub(crate) fn with_scope_in<T, F>(&mut self, parent: ScopeId, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped_in(parent);
        f(&mut scoped)
    }

    /// Run `f` with the existing scope `id` active.
    pub(crate) fn with_entered_scope<T, F>(&mut self, id: ScopeId, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.entered(id);
        f(&mut scoped)
    }
}
