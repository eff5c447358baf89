//! Syntax tree nodes.
//!
//! One tagged variant per construct the evaluator understands; the evaluator
//! matches over these exhaustively instead of double-dispatching through a
//! visitor.

mod expr;
mod items;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use items::{ClassDef, ClassMember, ConstructorDef, FunctionDef, Item, Param, Program};
pub use operators::{BinaryOp, RelOp};
pub use stmt::{Block, CatchClause, Condition, Stmt, StmtKind};
