//! Expression nodes.

use std::fmt;

use super::operators::{BinaryOp, RelOp};
use crate::{ExprId, Span};

/// Expression node.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Int(i64),
    Double(f64),
    Bool(bool),
    Char(char),
    Str(String),

    /// Variable reference.
    Ident(String),

    /// `left op right` over numbers and strings.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `left op right` producing a Boolean.
    Compare {
        op: RelOp,
        left: ExprId,
        right: ExprId,
    },

    /// `-operand`
    Negate(ExprId),

    /// `name(args)` or `object.name(args)`.
    Call {
        receiver: Option<String>,
        method: String,
        args: Vec<ExprId>,
    },

    /// `object.field`
    FieldGet { object: String, field: String },

    /// `toString(expr)`
    ToString(ExprId),

    /// `readChar()`
    ReadChar,
    /// `readLine()`
    ReadLine,
    /// `readFile(path)`
    ReadFile(ExprId),
}
