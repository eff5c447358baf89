//! A single scope: name-to-symbol map plus a parent link by id.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::declarations::MethodDeclaration;
use crate::symbol::Symbol;

/// Handle to a scope owned by the [`SymbolTable`](crate::SymbolTable).
///
/// Ids are handed out monotonically and never reused within one table, so a
/// stale id can only miss, never alias a different scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The global scope; always present.
    pub const GLOBAL: ScopeId = ScopeId(0);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        ScopeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}

/// What created a scope, which also decides its lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    /// The program root. Owns the class and function tables.
    Global,
    /// Field storage of one object. Outlives the call that created it.
    ClassInstance,
    /// A block, call or loop body. Destroyed when popped.
    Local,
}

/// A name-to-symbol mapping with an optional parent.
#[derive(Debug)]
pub struct Scope<'a> {
    id: ScopeId,
    kind: ScopeKind,
    /// Class name for instance scopes.
    display_name: Option<String>,
    parent: Option<ScopeId>,
    symbols: FxHashMap<String, Symbol>,
    /// Per-instance method table; empty for other kinds.
    methods: FxHashMap<String, MethodDeclaration<'a>>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(
        id: ScopeId,
        kind: ScopeKind,
        parent: Option<ScopeId>,
        display_name: Option<String>,
    ) -> Self {
        Scope {
            id,
            kind,
            display_name,
            parent,
            symbols: FxHashMap::default(),
            methods: FxHashMap::default(),
        }
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ScopeId>) {
        self.parent = parent;
    }

    /// Look up `name` in this scope only.
    #[inline]
    pub fn lookup_local(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    #[inline]
    pub(crate) fn lookup_local_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.symbols.get_mut(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Insert `symbol`, returning it back if the name is already taken here.
    pub(crate) fn insert(&mut self, mut symbol: Symbol) -> Result<(), Symbol> {
        if self.symbols.contains_key(symbol.name()) {
            return Err(symbol);
        }
        symbol.set_owner(self.id);
        self.symbols.insert(symbol.name().to_string(), symbol);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Add a method to this instance's table, returning it back if the name
    /// is already taken.
    pub(crate) fn define_method(
        &mut self,
        method: MethodDeclaration<'a>,
    ) -> Result<(), MethodDeclaration<'a>> {
        if self.methods.contains_key(method.name()) {
            return Err(method);
        }
        self.methods.insert(method.name().to_string(), method);
        Ok(())
    }

    pub fn method(&self, name: &str) -> Option<MethodDeclaration<'a>> {
        self.methods.get(name).copied()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}
