//! Scope manager.
//!
//! Owns every scope of one evaluation in an id-keyed arena, the stack of
//! active scopes, and the global class and function tables.
//!
//! Local scopes are destroyed when popped. Instance scopes stay in the arena
//! after being popped because an object symbol still refers to them by id.
//! They are freed once the last [`ObjectHandle`] to them is dropped and no
//! active scope depends on them. Instances that reach each other in a cycle
//! stay until [`SymbolTable::clear`].

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::declarations::{ClassDeclaration, MethodDeclaration};
use crate::errors::{duplicate_symbol, EvalError};
use crate::scope::{Scope, ScopeId, ScopeKind};
use crate::symbol::{AssignError, Symbol};
use crate::value::{ObjectHandle, ReleaseQueue, Value};

pub struct SymbolTable<'a> {
    scopes: FxHashMap<ScopeId, Scope<'a>>,
    /// Active scopes; the last one is the current scope.
    stack: Vec<ScopeId>,
    next_id: u32,
    classes: FxHashMap<String, ClassDeclaration<'a>>,
    functions: FxHashMap<String, MethodDeclaration<'a>>,
    /// Instance scopes whose last handle is gone.
    releases: ReleaseQueue,
    /// Released instance scopes still in use by an active scope.
    deferred: Vec<ScopeId>,
}

impl<'a> SymbolTable<'a> {
    /// Create a table holding only the global scope.
    pub fn new() -> Self {
        let mut scopes = FxHashMap::default();
        scopes.insert(
            ScopeId::GLOBAL,
            Scope::new(ScopeId::GLOBAL, ScopeKind::Global, None, None),
        );
        SymbolTable {
            scopes,
            stack: vec![ScopeId::GLOBAL],
            next_id: 1,
            classes: FxHashMap::default(),
            functions: FxHashMap::default(),
            releases: ReleaseQueue::default(),
            deferred: Vec::new(),
        }
    }

    /// Discard every scope and declaration, leaving a fresh global scope.
    ///
    /// Ids keep counting up, so handles from before the reset never resolve.
    pub fn clear(&mut self) {
        let next_id = self.next_id;
        *self = SymbolTable::new();
        self.next_id = next_id;
    }

    // ===== Scope stack =====

    /// The scope new symbols go into and name resolution starts from.
    #[inline]
    pub fn current_scope(&self) -> ScopeId {
        self.stack.last().copied().unwrap_or(ScopeId::GLOBAL)
    }

    /// Number of active scopes, including the global scope.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of scopes alive in the arena.
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    fn alloc(&mut self, kind: ScopeKind, display_name: Option<String>) -> ScopeId {
        let id = ScopeId::new(self.next_id);
        self.next_id += 1;
        let parent = Some(self.current_scope());
        self.scopes
            .insert(id, Scope::new(id, kind, parent, display_name));
        id
    }

    /// Push a local scope nested in the current one.
    pub fn push_local(&mut self) -> ScopeId {
        let id = self.alloc(ScopeKind::Local, None);
        self.stack.push(id);
        trace!(scope = id.raw(), depth = self.stack.len(), "push local scope");
        id
    }

    /// Create an instance scope parented to the current scope, without
    /// activating it, and the first handle to it.
    pub fn new_class_scope(&mut self, class: &str) -> ObjectHandle {
        let id = self.alloc(ScopeKind::ClassInstance, Some(class.to_string()));
        trace!(scope = id.raw(), class, "new class scope");
        ObjectHandle::tracked(class, id, &self.releases)
    }

    /// Re-activate an existing scope. Returns `false` if it does not exist.
    pub fn enter_scope(&mut self, id: ScopeId) -> bool {
        if !self.scopes.contains_key(&id) {
            return false;
        }
        self.stack.push(id);
        trace!(scope = id.raw(), "enter scope");
        true
    }

    /// Deactivate the current scope, destroying it if it is a local scope.
    /// The global scope is never popped.
    pub fn pop_scope(&mut self) -> Option<ScopeId> {
        if self.stack.len() <= 1 {
            return None;
        }
        let id = self.stack.pop()?;
        if self
            .scopes
            .get(&id)
            .is_some_and(|scope| scope.kind() == ScopeKind::Local)
        {
            self.scopes.remove(&id);
        }
        trace!(scope = id.raw(), depth = self.stack.len(), "pop scope");
        self.free_released();
        Some(id)
    }

    /// Free instance scopes whose last handle has been dropped.
    ///
    /// Freeing a scope drops its fields, which can release further
    /// instances. Scopes that an active scope still runs in or resolves
    /// through are kept until a later call.
    pub(crate) fn free_released(&mut self) {
        if !self.deferred.is_empty() {
            let deferred = std::mem::take(&mut self.deferred);
            self.releases.borrow_mut().extend(deferred);
        }
        loop {
            let next = self.releases.borrow_mut().pop();
            let Some(id) = next else {
                break;
            };
            if self.is_in_use(id) {
                self.deferred.push(id);
                continue;
            }
            if self.scopes.remove(&id).is_some() {
                trace!(scope = id.raw(), "free instance scope");
            }
        }
    }

    /// Whether `id` is active or on the parent chain of an active scope.
    fn is_in_use(&self, id: ScopeId) -> bool {
        self.stack.iter().any(|&active| {
            let mut next = Some(active);
            while let Some(scope) = next {
                if scope == id {
                    return true;
                }
                next = self.scopes.get(&scope).and_then(Scope::parent);
            }
            false
        })
    }

    /// Overwrite the parent link of `id`. Returns `false` if either scope is
    /// gone.
    pub fn set_parent(&mut self, id: ScopeId, parent: ScopeId) -> bool {
        if !self.scopes.contains_key(&parent) {
            return false;
        }
        match self.scopes.get_mut(&id) {
            Some(scope) => {
                scope.set_parent(Some(parent));
                true
            }
            None => false,
        }
    }

    /// Look up a scope by id.
    #[inline]
    pub fn get_scope(&self, id: ScopeId) -> Option<&Scope<'a>> {
        self.scopes.get(&id)
    }

    #[inline]
    pub(crate) fn get_scope_mut(&mut self, id: ScopeId) -> Option<&mut Scope<'a>> {
        self.scopes.get_mut(&id)
    }

    /// Nearest instance scope on the parent chain starting at `from`
    /// (inclusive).
    pub fn enclosing_instance(&self, from: ScopeId) -> Option<ScopeId> {
        let mut next = Some(from);
        while let Some(id) = next {
            let scope = self.scopes.get(&id)?;
            if scope.kind() == ScopeKind::ClassInstance {
                return Some(id);
            }
            next = scope.parent();
        }
        None
    }

    // ===== Symbols =====

    /// Scope on the parent chain of `from` that defines `name`.
    fn owner_of(&self, from: ScopeId, name: &str) -> Option<ScopeId> {
        let mut next = Some(from);
        while let Some(id) = next {
            let scope = self.scopes.get(&id)?;
            if scope.contains(name) {
                return Some(id);
            }
            next = scope.parent();
        }
        None
    }

    /// Resolve `name` from the current scope toward the root.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.resolve_from(self.current_scope(), name)
    }

    /// Resolve `name` starting at `from`.
    pub fn resolve_from(&self, from: ScopeId, name: &str) -> Option<&Symbol> {
        let owner = self.owner_of(from, name)?;
        self.scopes.get(&owner)?.lookup_local(name)
    }

    pub(crate) fn resolve_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        let owner = self.owner_of(self.current_scope(), name)?;
        self.scopes.get_mut(&owner)?.lookup_local_mut(name)
    }

    /// Define `symbol` in the current scope. Shadowing an outer scope is
    /// fine; redefining within the same scope is `DuplicateSymbol`.
    pub fn define(&mut self, symbol: Symbol) -> Result<(), EvalError> {
        self.current_mut()
            .insert(symbol)
            .map_err(|rejected| duplicate_symbol(rejected.name()))
    }

    fn current_mut(&mut self) -> &mut Scope<'a> {
        let id = self.current_scope();
        // The stack only holds ids that are alive in the arena.
        self.scopes
            .entry(id)
            .or_insert_with(|| Scope::new(id, ScopeKind::Local, Some(ScopeId::GLOBAL), None))
    }

    /// Assign through the scope chain. Only immutability is checked here.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        self.resolve_mut(name)
            .ok_or(AssignError::Undefined)?
            .assign(value)?;
        self.free_released();
        Ok(())
    }

    // ===== Declarations =====

    /// Register a class in the global class table.
    pub fn define_class(&mut self, class: ClassDeclaration<'a>) -> Result<(), EvalError> {
        if self.classes.contains_key(class.name()) {
            return Err(duplicate_symbol(class.name()));
        }
        self.classes.insert(class.name().to_string(), class);
        Ok(())
    }

    /// Register a free function in the global function table.
    pub fn define_function(&mut self, function: MethodDeclaration<'a>) -> Result<(), EvalError> {
        if self.functions.contains_key(function.name()) {
            return Err(duplicate_symbol(function.name()));
        }
        self.functions.insert(function.name().to_string(), function);
        Ok(())
    }

    pub fn class(&self, name: &str) -> Option<ClassDeclaration<'a>> {
        self.classes.get(name).copied()
    }

    pub fn function(&self, name: &str) -> Option<MethodDeclaration<'a>> {
        self.functions.get(name).copied()
    }
}

impl Default for SymbolTable<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
