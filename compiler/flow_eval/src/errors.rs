//! Runtime faults raised by the evaluator.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the language-level fault taxonomy plus a handful of
//! host-fatal kinds. Factory functions (e.g. `undeclared_variable()`) are the
//! only way faults are built; they populate both `kind` and `message`.
//!
//! # Recoverability
//!
//! An in-language `try` only ever observes faults for which
//! [`EvalError::is_recoverable`] holds. Arithmetic faults and the recursion
//! limit terminate the whole evaluation.

use std::fmt;

use flow_ir::Span;

/// Typed fault category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    UnknownClass {
        name: String,
    },
    UnknownMethod {
        name: String,
    },
    UnknownObject {
        name: String,
    },
    UndeclaredVariable {
        name: String,
    },

    // Binding
    DuplicateSymbol {
        name: String,
    },
    ImmutableAssignment {
        name: String,
    },

    // Calls and construction
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    UnexpectedArguments {
        class: String,
    },
    MissingReturn {
        method: String,
    },

    // Types and operators
    TypeMismatch {
        expected: String,
        got: String,
    },
    InvalidOperator {
        op: &'static str,
        type_name: String,
    },
    NullConversion,

    // Host I/O
    IoFailure {
        target: String,
        reason: String,
    },

    // Host-fatal
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: &'static str,
    },
    RecursionLimit {
        limit: usize,
    },
}

impl EvalErrorKind {
    /// Host-fatal kinds are never caught by `try`.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero
                | Self::ModuloByZero
                | Self::IntegerOverflow { .. }
                | Self::RecursionLimit { .. }
        )
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownClass { name } => write!(f, "unknown class: {name}"),
            Self::UnknownMethod { name } => write!(f, "unknown method: {name}"),
            Self::UnknownObject { name } => write!(f, "unknown object: {name}"),
            Self::UndeclaredVariable { name } => write!(f, "undeclared variable: {name}"),

            Self::DuplicateSymbol { name } => write!(f, "duplicate symbol: {name}"),
            Self::ImmutableAssignment { name } => {
                write!(f, "cannot assign to immutable variable: {name}")
            }

            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::UnexpectedArguments { class } => {
                write!(f, "class {class} has no constructor but arguments were given")
            }
            Self::MissingReturn { method } => {
                write!(f, "method {method} must end with a return statement")
            }

            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::InvalidOperator { op, type_name } => {
                write!(f, "operator `{op}` cannot be applied to {type_name}")
            }
            Self::NullConversion => write!(f, "cannot convert Unit to String"),

            Self::IoFailure { target, reason } => write!(f, "I/O failure on {target}: {reason}"),

            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::RecursionLimit { limit } => {
                write!(f, "maximum call depth exceeded (limit: {limit})")
            }
        }
    }
}

/// A runtime fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; what a `catch` variable is bound to.
    pub message: String,
    /// Statement or expression that raised the fault.
    pub span: Option<Span>,
}

impl EvalError {
    /// Create an error from a structured kind. The message is the kind's
    /// `Display` output.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already present.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    /// Whether an in-language `try` may recover from this fault.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        !self.kind.is_fatal()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Lookup Errors

#[cold]
pub fn unknown_class(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownClass {
        name: name.to_string(),
    })
}

#[cold]
pub fn unknown_method(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownMethod {
        name: name.to_string(),
    })
}

/// Qualified access through a name that is unbound or not an object.
#[cold]
pub fn unknown_object(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownObject {
        name: name.to_string(),
    })
}

#[cold]
pub fn undeclared_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndeclaredVariable {
        name: name.to_string(),
    })
}

// Binding Errors

/// Name already defined in the same scope, or class/function re-registration.
#[cold]
pub fn duplicate_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateSymbol {
        name: name.to_string(),
    })
}

#[cold]
pub fn immutable_assignment(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ImmutableAssignment {
        name: name.to_string(),
    })
}

// Call Errors

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Constructor arguments given to a class without a constructor.
#[cold]
pub fn unexpected_arguments(class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnexpectedArguments {
        class: class.to_string(),
    })
}

/// A non-`Unit` method finished without executing a `return`.
#[cold]
pub fn missing_return(method: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingReturn {
        method: method.to_string(),
    })
}

// Type Errors

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn invalid_operator(op: &'static str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperator {
        op,
        type_name: type_name.to_string(),
    })
}

/// `Unit` where text is required.
#[cold]
pub fn null_conversion() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NullConversion)
}

// I/O Errors

#[cold]
pub fn io_failure(target: &str, reason: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IoFailure {
        target: target.to_string(),
        reason: reason.to_string(),
    })
}

// Host-fatal Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}
