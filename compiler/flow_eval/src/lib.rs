//! Flow Eval - tree-walking evaluator for Flow programs.
//!
//! # Architecture
//!
//! - `Value`: closed tagged union over every runtime value
//! - `Symbol` / `Scope` / `SymbolTable`: arena-indexed lexical scopes; objects
//!   keep a `ScopeId` to their instance scope instead of a pointer
//! - `ClassDeclaration` / `MethodDeclaration`: borrowed views of the syntax
//!   tree, registered once per program
//! - `evaluate_binary` / `evaluate_comparison`: enum-dispatched operator tables
//! - `Interpreter`: the statement/expression walker, split by concern under
//!   `interpreter/`
//! - `HostIo`: console and file primitives the evaluator calls but does not own
//!
//! Faults are `EvalError`s; `EvalError::is_recoverable` separates the ones an
//! in-language `try` may catch from host-fatal ones.

mod declarations;
pub mod errors;
pub mod interpreter;
pub mod io;
mod operators;
mod output;
mod scope;
mod stack;
mod symbol;
mod symbol_table;
mod value;

pub use declarations::{ClassDeclaration, MethodDeclaration};
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{Completion, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use io::{HostIo, IoError, ScriptedIo, StdHostIo};
pub use operators::{evaluate_binary, evaluate_comparison, evaluate_negate, to_string_value};
pub use output::OutputBuffer;
pub use scope::{Scope, ScopeId, ScopeKind};
pub use symbol::{AssignError, Mutability, Symbol};
pub use symbol_table::SymbolTable;
pub use value::{ObjectHandle, Value};

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

#[cfg(test)]
mod tests;
