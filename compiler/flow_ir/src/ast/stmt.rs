//! Statement nodes and control-structure bodies.

use std::fmt;

use super::operators::RelOp;
use crate::{ExprId, ParsedType, Span};

/// Statement node.
#[derive(Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// `true` for `return` statements.
    pub fn is_return(&self) -> bool {
        matches!(self.kind, StmtKind::Return(_))
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// A braced statement list: the body of a branch, loop, try, method or
/// constructor.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Block { stmts, span }
    }

    /// Last statement of the block, if any.
    pub fn last(&self) -> Option<&Stmt> {
        self.stmts.last()
    }
}

/// `left op right` as written in an `if` header.
#[derive(Clone, PartialEq, Debug)]
pub struct Condition {
    pub left: ExprId,
    pub op: RelOp,
    pub right: ExprId,
}

/// `catch (name: Type) { body }`
#[derive(Clone, PartialEq, Debug)]
pub struct CatchClause {
    pub name: String,
    pub ty: ParsedType,
    pub body: Block,
    pub span: Span,
}

/// Statement kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// `var x: T = e;` / `val x = e;` / `var x: T;`
    VarDecl {
        name: String,
        ty: Option<ParsedType>,
        init: Option<ExprId>,
        mutable: bool,
    },

    /// `val p = new Point(args);`
    ObjectDecl {
        name: String,
        class: String,
        args: Vec<ExprId>,
        mutable: bool,
    },

    /// `p = new Point(args);`
    ObjectAssign {
        name: String,
        class: String,
        args: Vec<ExprId>,
    },

    /// `x = e;`
    Assign { name: String, value: ExprId },

    /// `p.x = e;`
    FieldAssign {
        object: String,
        field: String,
        value: ExprId,
    },

    If {
        cond: Condition,
        then_branch: Block,
        else_branch: Option<Block>,
    },

    While { cond: ExprId, body: Block },

    /// `for (var in start..end) body`, half-open.
    For {
        var: String,
        start: ExprId,
        end: ExprId,
        body: Block,
    },

    Try {
        body: Block,
        catch: Option<CatchClause>,
    },

    Return(Option<ExprId>),

    Print(Option<ExprId>),

    /// `writeFile(path, content);`
    WriteFile { path: ExprId, content: ExprId },

    /// Expression evaluated for its effects (method invocation).
    Expr(ExprId),
}
