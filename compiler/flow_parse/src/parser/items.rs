//! Item parsing: classes, functions, constructors, parameters, types.

use flow_ir::{Block, ClassDef, ClassMember, ConstructorDef, FunctionDef, Item, Param, ParsedType};

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;

impl Parser<'_> {
    pub(super) fn item(&mut self) -> Result<Item, ParseError> {
        match self.current_kind() {
            TokenKind::Class => Ok(Item::Class(self.class()?)),
            TokenKind::Fun => Ok(Item::Function(self.function()?)),
            _ => Ok(Item::Stmt(self.statement()?)),
        }
    }

    /// `class Name { (field | constructor | method)* }`
    fn class(&mut self) -> Result<ClassDef, ParseError> {
        let start = self.consume(&TokenKind::Class, "`class`")?;
        let (name, _) = self.ident("class name")?;
        self.consume(&TokenKind::LBrace, "`{`")?;

        let mut members = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::RBrace => break,
                TokenKind::Var | TokenKind::Val => {
                    members.push(ClassMember::Field(self.var_or_object_decl()?));
                }
                TokenKind::Constructor => {
                    members.push(ClassMember::Constructor(self.constructor()?));
                }
                TokenKind::Fun => members.push(ClassMember::Method(self.function()?)),
                _ => return Err(self.error("field, constructor, method or `}`")),
            }
        }
        let end = self.consume(&TokenKind::RBrace, "`}`")?;

        Ok(ClassDef {
            name,
            members,
            span: start.merge(end),
        })
    }

    /// `fun name(params) (: Type)? { body }`
    fn function(&mut self) -> Result<FunctionDef, ParseError> {
        let start = self.consume(&TokenKind::Fun, "`fun`")?;
        let (name, _) = self.ident("function name")?;
        let params = self.params()?;
        let return_type = if self.eat(&TokenKind::Colon) {
            self.parsed_type()?
        } else {
            ParsedType::Unit
        };
        let body = self.block()?;

        Ok(FunctionDef {
            name,
            params,
            return_type,
            span: start.merge(body.span),
            body,
        })
    }

    /// `constructor(params) { body }`
    fn constructor(&mut self) -> Result<ConstructorDef, ParseError> {
        let start = self.consume(&TokenKind::Constructor, "`constructor`")?;
        let params = self.params()?;
        let body = self.block()?;

        Ok(ConstructorDef {
            params,
            span: start.merge(body.span),
            body,
        })
    }

    /// `( (name: Type (, name: Type)*)? )`
    fn params(&mut self) -> Result<Vec<Param>, ParseError> {
        self.consume(&TokenKind::LParen, "`(`")?;
        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                let (name, start) = self.ident("parameter name")?;
                self.consume(&TokenKind::Colon, "`:`")?;
                let end = self.current_span();
                let ty = self.parsed_type()?;
                params.push(Param {
                    name,
                    ty,
                    span: start.merge(end),
                });
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(&TokenKind::RParen, "`)`")?;
        Ok(params)
    }

    pub(super) fn parsed_type(&mut self) -> Result<ParsedType, ParseError> {
        let (name, _) = self.ident("type name")?;
        Ok(ParsedType::from_name(&name))
    }

    /// `{ statement* }`
    pub(super) fn block(&mut self) -> Result<Block, ParseError> {
        let start = self.consume(&TokenKind::LBrace, "`{`")?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            if self.at_end() {
                return Err(self.error("`}`"));
            }
            stmts.push(self.statement()?);
        }
        let end = self.consume(&TokenKind::RBrace, "`}`")?;
        Ok(Block::new(stmts, start.merge(end)))
    }
}

