//! Parse errors.

use flow_ir::Span;
use thiserror::Error;

/// A syntax error. Parsing stops at the first one.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid token `{text}`")]
    InvalidToken { text: String, span: Span },

    #[error("expected {expected}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str, span: Span },

    #[error("declaration of `{name}` needs a type annotation or an initializer")]
    MissingType { name: String, span: Span },
}

impl ParseError {
    /// Location of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ParseError::InvalidToken { span, .. }
            | ParseError::Expected { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::MissingType { span, .. } => *span,
        }
    }

    /// `true` when more input could still make the program valid.
    ///
    /// The REPL keeps reading lines while this holds.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ParseError::UnexpectedEof { .. })
    }
}
