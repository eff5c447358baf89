//! Named, typed storage cells.

use flow_ir::ParsedType;

use crate::scope::ScopeId;
use crate::value::Value;

/// Whether a binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// `var x = ...`, parameters.
    Mutable,
    /// `val x = ...`, catch variables.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }

    /// `var` is mutable, `val` is not.
    #[inline]
    pub fn from_flag(mutable: bool) -> Self {
        if mutable {
            Mutability::Mutable
        } else {
            Mutability::Immutable
        }
    }
}

/// Error returned by assignment through the symbol table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Symbol exists but is immutable.
    Immutable,
    /// No symbol with that name is visible.
    Undefined,
}

/// A declared variable, field, parameter or object binding.
///
/// The declared type never changes. Keeping the value consistent with it is
/// the evaluator's job; the symbol only enforces immutability.
#[derive(Clone, Debug)]
pub struct Symbol {
    name: String,
    declared_type: ParsedType,
    mutability: Mutability,
    value: Value,
    /// Scope the symbol was defined in. Set by `SymbolTable::define`.
    owner: ScopeId,
}

impl Symbol {
    pub fn new(
        name: impl Into<String>,
        declared_type: ParsedType,
        mutability: Mutability,
        value: Value,
    ) -> Self {
        Symbol {
            name: name.into(),
            declared_type,
            mutability,
            value,
            owner: ScopeId::GLOBAL,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type(&self) -> &ParsedType {
        &self.declared_type
    }

    pub fn is_mutable(&self) -> bool {
        self.mutability.is_mutable()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn owner(&self) -> ScopeId {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: ScopeId) {
        self.owner = owner;
    }

    /// Replace the value, refusing if the symbol is immutable.
    pub fn assign(&mut self, value: Value) -> Result<(), AssignError> {
        if !self.is_mutable() {
            return Err(AssignError::Immutable);
        }
        self.value = value;
        Ok(())
    }
}
