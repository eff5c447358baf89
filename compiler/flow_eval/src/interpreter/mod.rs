//! Tree-walking interpreter for Flow programs.
//!
//! # Module Structure
//!
//! - `builder`: `InterpreterBuilder` (host I/O, call-depth limit, symbol table)
//! - `scope_guard`: RAII scope management
//! - `expressions`: expression evaluation
//! - `statements`: declarations, assignment and statement dispatch
//! - `control`: if/while/for/try
//! - `classes`: object construction and field access
//! - `calls`: function and method invocation
//! - `io_statements`: print and the host I/O builtins
//!
//! # Early exit
//!
//! Statements produce a [`Completion`]. A `return` yields
//! `Completion::Return`, which stops every enclosing statement list up to the
//! nearest method call (or the end of the program at top level). Faults travel
//! separately as `Err(EvalError)`.

mod builder;
mod calls;
mod classes;
mod control;
mod expressions;
mod io_statements;
mod scope_guard;
mod statements;

pub use builder::InterpreterBuilder;

use flow_ir::{Expr, ExprArena, ExprId, Item, Program};
use tracing::debug;

use crate::declarations::{ClassDeclaration, MethodDeclaration};
use crate::errors::{recursion_limit_exceeded, EvalError};
use crate::io::HostIo;
use crate::output::OutputBuffer;
use crate::symbol_table::SymbolTable;
use crate::value::Value;

/// Nested call limit used when none is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 2048;

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// Fell through to the next statement.
    Normal,
    /// A `return` executed; remaining statements are skipped.
    Return(Value),
}

impl Completion {
    #[inline]
    pub fn is_return(&self) -> bool {
        matches!(self, Completion::Return(_))
    }
}

/// Result of executing a statement or statement list.
pub(crate) type ExecResult = Result<Completion, EvalError>;

/// Evaluator for one program.
pub struct Interpreter<'a> {
    program: &'a Program,
    arena: &'a ExprArena,
    table: SymbolTable<'a>,
    output: OutputBuffer,
    io: Box<dyn HostIo + 'a>,
    /// Method, function and constructor invocations currently in progress.
    call_depth: usize,
    max_call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Interpreter over `program` with console and file access on the host.
    pub fn new(program: &'a Program) -> Self {
        InterpreterBuilder::new(program).build()
    }

    /// Run the program and return its accumulated output.
    ///
    /// On failure the partial output is discarded. The symbol table is reset
    /// afterwards either way, so the same interpreter can run again.
    pub fn run(&mut self) -> Result<String, EvalError> {
        self.output.clear();
        let result = self.execute();
        self.table.clear();
        self.call_depth = 0;
        match result {
            Ok(()) => Ok(self.output.take()),
            Err(err) => {
                debug!(kind = ?err.kind, "program failed");
                self.output.clear();
                Err(err)
            }
        }
    }

    /// Register declarations and execute top-level statements in program
    /// order, leaving the symbol table and output in place.
    ///
    /// A top-level `return` stops the program.
    pub fn execute(&mut self) -> Result<(), EvalError> {
        let program = self.program;
        for item in &program.items {
            match item {
                Item::Class(def) => self
                    .table
                    .define_class(ClassDeclaration::new(def))
                    .map_err(|err| err.with_span(def.span))?,
                Item::Function(def) => self
                    .table
                    .define_function(MethodDeclaration::new(def))
                    .map_err(|err| err.with_span(def.span))?,
                Item::Stmt(stmt) => {
                    if self.exec_stmt(stmt)?.is_return() {
                        debug!("top-level return");
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Output accumulated so far.
    pub fn output(&self) -> &str {
        self.output.get_output()
    }

    pub fn symbol_table(&self) -> &SymbolTable<'a> {
        &self.table
    }

    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    #[inline]
    fn expr(&self, id: ExprId) -> &'a Expr {
        self.arena.get(id)
    }

    /// Count one more active invocation, failing at the configured limit.
    fn enter_call(&mut self) -> Result<(), EvalError> {
        if self.call_depth >= self.max_call_depth {
            return Err(recursion_limit_exceeded(self.max_call_depth));
        }
        self.call_depth += 1;
        Ok(())
    }

    fn leave_call(&mut self) {
        self.call_depth = self.call_depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests;
