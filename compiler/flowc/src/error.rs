//! Front-end error type.

use std::io;

use flow_eval::EvalError;
use flow_ir::Span;
use flow_parse::ParseError;
use thiserror::Error;

/// Anything that stops a Flow program from producing output.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
}

impl FlowError {
    /// Source location to point at, if there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            FlowError::Read { .. } => None,
            FlowError::Parse(err) => Some(err.span()),
            FlowError::Eval(err) => err.span,
        }
    }

    /// Short text for the diagnostic label.
    pub fn label(&self) -> &'static str {
        match self {
            FlowError::Read { .. } => "",
            FlowError::Parse(err) if err.is_incomplete() => "input ends here",
            FlowError::Parse(_) => "unexpected input",
            FlowError::Eval(err) if err.is_recoverable() => "raised here",
            FlowError::Eval(_) => "aborted here",
        }
    }
}
