//! Flow IR - syntax tree consumed by the evaluator.
//!
//! The front end translates source text into this shape once; the evaluator
//! never re-parses and never sees tokens. Contents:
//! - Spans for source locations
//! - Parsed type names (`ParsedType`)
//! - Operators
//! - Statements, blocks and top-level items (classes, functions)
//! - A flat expression arena (`ExprId` indices instead of `Box<Expr>`)

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod parsed_type;
mod span;

pub use arena::{ExprArena, ExprId};
pub use ast::{
    BinaryOp, Block, CatchClause, ClassDef, ClassMember, Condition, ConstructorDef, Expr,
    ExprKind, FunctionDef, Item, Param, Program, RelOp, Stmt, StmtKind,
};
pub use parsed_type::ParsedType;
pub use span::Span;
