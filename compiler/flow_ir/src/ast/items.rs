//! Top-level items: classes, functions and the program root.

use super::stmt::{Block, Stmt};
use crate::{ExprArena, ParsedType, Span};

/// A typed parameter of a function or constructor.
#[derive(Clone, PartialEq, Debug)]
pub struct Param {
    pub name: String,
    pub ty: ParsedType,
    pub span: Span,
}

/// `fun name(params): ReturnType { body }`. Used for free functions and
/// instance methods alike.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<Param>,
    /// `Unit` when no return type was written.
    pub return_type: ParsedType,
    pub body: Block,
    pub span: Span,
}

/// `constructor(params) { body }`
#[derive(Clone, PartialEq, Debug)]
pub struct ConstructorDef {
    pub params: Vec<Param>,
    pub body: Block,
    pub span: Span,
}

/// One member of a class body, in declaration order.
#[derive(Clone, PartialEq, Debug)]
pub enum ClassMember {
    /// A field declaration (`StmtKind::VarDecl` or `StmtKind::ObjectDecl`).
    Field(Stmt),
    Constructor(ConstructorDef),
    Method(FunctionDef),
}

/// `class Name { members }`
#[derive(Clone, PartialEq, Debug)]
pub struct ClassDef {
    pub name: String,
    pub members: Vec<ClassMember>,
    pub span: Span,
}

impl ClassDef {
    /// Field declarations in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Stmt> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Field(stmt) => Some(stmt),
            _ => None,
        })
    }

    /// Method declarations in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &FunctionDef> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Method(method) => Some(method),
            _ => None,
        })
    }

    /// The first method with the given name.
    pub fn method(&self, name: &str) -> Option<&FunctionDef> {
        self.methods().find(|method| method.name == name)
    }

    /// The constructor, if the class declares one. Only the first counts.
    pub fn constructor(&self) -> Option<&ConstructorDef> {
        self.members.iter().find_map(|member| match member {
            ClassMember::Constructor(ctor) => Some(ctor),
            _ => None,
        })
    }
}

/// A top-level program item.
#[derive(Clone, PartialEq, Debug)]
pub enum Item {
    Class(ClassDef),
    Function(FunctionDef),
    Stmt(Stmt),
}

/// A parsed program: its items in source order plus the arena owning every
/// expression they reference.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub items: Vec<Item>,
    pub arena: ExprArena,
}

impl Program {
    pub fn new(items: Vec<Item>, arena: ExprArena) -> Self {
        Program { items, arena }
    }
}
