//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use flow_ir::Program;

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::io::{HostIo, StdHostIo};
use crate::output::OutputBuffer;
use crate::symbol_table::SymbolTable;

/// Builder for creating Interpreter instances with various configurations.
///
/// Defaults: the process console and file system for I/O, a call-depth limit
/// of [`DEFAULT_MAX_CALL_DEPTH`], and an empty symbol table.
pub struct InterpreterBuilder<'a> {
    program: &'a Program,
    io: Option<Box<dyn HostIo + 'a>>,
    max_call_depth: usize,
    table: Option<SymbolTable<'a>>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            io: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            table: None,
        }
    }

    /// Set the host I/O provider used by `readChar`, `readLine`, `readFile`
    /// and `writeFile`.
    #[must_use]
    pub fn host_io(mut self, io: impl HostIo + 'a) -> Self {
        self.io = Some(Box::new(io));
        self
    }

    /// Set the maximum number of nested calls before `RecursionLimit`.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Start from an existing symbol table instead of an empty one.
    #[must_use]
    pub fn symbol_table(mut self, table: SymbolTable<'a>) -> Self {
        self.table = Some(table);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            program: self.program,
            arena: &self.program.arena,
            table: self.table.unwrap_or_default(),
            output: OutputBuffer::new(),
            io: self
                .io
                .unwrap_or_else(|| Box::new(StdHostIo::new())),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        }
    }
}
