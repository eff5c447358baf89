//! Flat expression storage.
//!
//! Expressions are allocated into a single `ExprArena` and referenced by
//! `ExprId(u32)` instead of `Box<Expr>`. Statements keep owning their
//! children directly since they are not shared or rewritten.

use std::fmt;

use crate::ast::Expr;

/// Index into an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Owner of every expression node of one program.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an expression and return its id.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` expressions are allocated.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX entries"));
        self.exprs.push(expr);
        ExprId(index)
    }

    /// Get an expression by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
