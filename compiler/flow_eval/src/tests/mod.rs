//! Program-level tests: Flow source in, output or fault kind out.

mod classes_tests;

use crate::{EvalError, EvalErrorKind, InterpreterBuilder, ScriptedIo};

/// Run `source` against `io` and return its output.
pub(crate) fn run_with_io(source: &str, io: &mut ScriptedIo) -> Result<String, EvalError> {
    let program = flow_parse::parse(source).unwrap_or_else(|err| panic!("parse error: {err}"));
    let mut interpreter = InterpreterBuilder::new(&program).host_io(io).build();
    interpreter.run()
}

pub(crate) fn run(source: &str) -> Result<String, EvalError> {
    run_with_io(source, &mut ScriptedIo::new(""))
}

/// Output of a program expected to succeed.
pub(crate) fn run_ok(source: &str) -> String {
    match run(source) {
        Ok(output) => output,
        Err(err) => panic!("program failed: {err}\n{source}"),
    }
}

/// Fault kind of a program expected to fail.
pub(crate) fn run_err(source: &str) -> EvalErrorKind {
    match run(source) {
        Ok(output) => panic!("program succeeded with output {output:?}\n{source}"),
        Err(err) => err.kind,
    }
}

pub(crate) fn name(name: &str) -> String {
    name.to_string()
}
