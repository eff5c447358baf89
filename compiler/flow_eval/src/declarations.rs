//! Declaration registry entries: borrowed views of class and function
//! definitions in the syntax tree.
//!
//! Both are `Copy`; registering a class or populating an instance's method
//! table stores a reference, never a copy of the tree.

use flow_ir::{Block, ClassDef, ConstructorDef, FunctionDef, Param, ParsedType, Span, Stmt};

/// A registered class.
#[derive(Copy, Clone, Debug)]
pub struct ClassDeclaration<'a> {
    def: &'a ClassDef,
}

impl<'a> ClassDeclaration<'a> {
    pub fn new(def: &'a ClassDef) -> Self {
        ClassDeclaration { def }
    }

    pub fn name(&self) -> &'a str {
        &self.def.name
    }

    pub fn span(&self) -> Span {
        self.def.span
    }

    /// Field declarations in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &'a Stmt> {
        self.def.fields()
    }

    /// Method declarations in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = MethodDeclaration<'a>> {
        self.def.methods().map(MethodDeclaration::new)
    }

    pub fn method(&self, name: &str) -> Option<MethodDeclaration<'a>> {
        self.def.method(name).map(MethodDeclaration::new)
    }

    pub fn constructor(&self) -> Option<&'a ConstructorDef> {
        self.def.constructor()
    }
}

/// A free function or an instance method.
#[derive(Copy, Clone, Debug)]
pub struct MethodDeclaration<'a> {
    def: &'a FunctionDef,
}

impl<'a> MethodDeclaration<'a> {
    pub fn new(def: &'a FunctionDef) -> Self {
        MethodDeclaration { def }
    }

    pub fn name(&self) -> &'a str {
        &self.def.name
    }

    /// `Unit` when none was declared.
    pub fn return_type(&self) -> &'a ParsedType {
        &self.def.return_type
    }

    pub fn params(&self) -> &'a [Param] {
        &self.def.params
    }

    pub fn body(&self) -> &'a Block {
        &self.def.body
    }

    pub fn span(&self) -> Span {
        self.def.span
    }
}
