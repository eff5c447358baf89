//! Statement parsing.

use flow_ir::{Block, CatchClause, Condition, ExprId, Stmt, StmtKind};

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;

impl Parser<'_> {
    pub(super) fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Var | TokenKind::Val => self.var_or_object_decl(),
            TokenKind::If => self.if_stmt(),
            TokenKind::While => self.while_stmt(),
            TokenKind::For => self.for_stmt(),
            TokenKind::Try => self.try_stmt(),
            TokenKind::Return => self.return_stmt(),
            TokenKind::Print => self.print_stmt(),
            TokenKind::WriteFile => self.write_file_stmt(),
            TokenKind::Ident(_) if matches!(self.peek(1), TokenKind::Eq) => self.assignment(),
            TokenKind::Ident(_)
                if matches!(self.peek(1), TokenKind::Dot)
                    && matches!(self.peek(2), TokenKind::Ident(_))
                    && matches!(self.peek(3), TokenKind::Eq) =>
            {
                self.field_assignment()
            }
            _ => {
                let expr = self.expression()?;
                let start = self.arena.get(expr).span;
                let end = self.consume(&TokenKind::Semicolon, "`;`")?;
                Ok(Stmt::new(StmtKind::Expr(expr), start.merge(end)))
            }
        }
    }

    /// `var|val name (: Type)? (= expr | = new Class(args))? ;`
    pub(super) fn var_or_object_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let mutable = matches!(self.advance().kind, TokenKind::Var);
        let (name, name_span) = self.ident("variable name")?;
        let ty = if self.eat(&TokenKind::Colon) {
            Some(self.parsed_type()?)
        } else {
            None
        };

        let kind = if self.eat(&TokenKind::Eq) {
            if self.check(&TokenKind::New) {
                let new_span = self.current_span();
                let (class, args) = self.new_object()?;
                if let Some(ty) = &ty {
                    if ty.name() != class {
                        return Err(ParseError::Expected {
                            expected: "`new` of the annotated class",
                            found: format!("`new {class}`"),
                            span: new_span,
                        });
                    }
                }
                StmtKind::ObjectDecl {
                    name,
                    class,
                    args,
                    mutable,
                }
            } else {
                StmtKind::VarDecl {
                    name,
                    ty,
                    init: Some(self.expression()?),
                    mutable,
                }
            }
        } else {
            if ty.is_none() {
                return Err(ParseError::MissingType {
                    name,
                    span: name_span,
                });
            }
            StmtKind::VarDecl {
                name,
                ty,
                init: None,
                mutable,
            }
        };

        let end = self.consume(&TokenKind::Semicolon, "`;`")?;
        Ok(Stmt::new(kind, start.merge(end)))
    }

    /// `new Class(args)`
    fn new_object(&mut self) -> Result<(String, Vec<ExprId>), ParseError> {
        self.consume(&TokenKind::New, "`new`")?;
        let (class, _) = self.ident("class name")?;
        let (args, _) = self.args()?;
        Ok((class, args))
    }

    /// `name = expr;` or `name = new Class(args);`
    fn assignment(&mut self) -> Result<Stmt, ParseError> {
        let (name, start) = self.ident("variable name")?;
        self.consume(&TokenKind::Eq, "`=`")?;
        let kind = if self.check(&TokenKind::New) {
            let (class, args) = self.new_object()?;
            StmtKind::ObjectAssign { name, class, args }
        } else {
            StmtKind::Assign {
                name,
                value: self.expression()?,
            }
        };
        let end = self.consume(&TokenKind::Semicolon, "`;`")?;
        Ok(Stmt::new(kind, start.merge(end)))
    }

    /// `object.field = expr;`
    fn field_assignment(&mut self) -> Result<Stmt, ParseError> {
        let (object, start) = self.ident("object name")?;
        self.consume(&TokenKind::Dot, "`.`")?;
        let (field, _) = self.ident("field name")?;
        self.consume(&TokenKind::Eq, "`=`")?;
        let value = self.expression()?;
        let end = self.consume(&TokenKind::Semicolon, "`;`")?;
        Ok(Stmt::new(
            StmtKind::FieldAssign {
                object,
                field,
                value,
            },
            start.merge(end),
        ))
    }

    /// `if (a op b) { .. } (else { .. } | else if ..)?`
    fn if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(&TokenKind::If, "`if`")?;
        self.consume(&TokenKind::LParen, "`(`")?;
        let left = self.additive()?;
        let Some(op) = self.rel_op() else {
            return Err(self.error("comparison operator"));
        };
        self.advance();
        let right = self.additive()?;
        self.consume(&TokenKind::RParen, "`)`")?;
        let then_branch = self.block()?;

        let else_branch = if self.eat(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                let nested = self.if_stmt()?;
                let span = nested.span;
                Some(Block::new(vec![nested], span))
            } else {
                Some(self.block()?)
            }
        } else {
            None
        };

        let end = else_branch.as_ref().map_or(then_branch.span, |b| b.span);
        Ok(Stmt::new(
            StmtKind::If {
                cond: Condition { left, op, right },
                then_branch,
                else_branch,
            },
            start.merge(end),
        ))
    }

    /// `while (expr) { .. }`
    fn while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(&TokenKind::While, "`while`")?;
        self.consume(&TokenKind::LParen, "`(`")?;
        let cond = self.expression()?;
        self.consume(&TokenKind::RParen, "`)`")?;
        let body = self.block()?;
        let span = start.merge(body.span);
        Ok(Stmt::new(StmtKind::While { cond, body }, span))
    }

    /// `for (var in start..end) { .. }`
    fn for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.consume(&TokenKind::For, "`for`")?;
        self.consume(&TokenKind::LParen, "`(`")?;
        let (var, _) = self.ident("loop variable")?;
        self.consume(&TokenKind::In, "`in`")?;
        let start = self.additive()?;
        self.consume(&TokenKind::DotDot, "`..`")?;
        let end = self.additive()?;
        self.consume(&TokenKind::RParen, "`)`")?;
        let body = self.block()?;
        let span = start_span.merge(body.span);
        Ok(Stmt::new(
            StmtKind::For {
                var,
                start,
                end,
                body,
            },
            span,
        ))
    }

    /// `try { .. } (catch (name: Type) { .. })?`
    fn try_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(&TokenKind::Try, "`try`")?;
        let body = self.block()?;

        let catch = if self.check(&TokenKind::Catch) {
            let catch_start = self.advance().span;
            self.consume(&TokenKind::LParen, "`(`")?;
            let (name, _) = self.ident("catch variable")?;
            self.consume(&TokenKind::Colon, "`:`")?;
            let ty = self.parsed_type()?;
            self.consume(&TokenKind::RParen, "`)`")?;
            let catch_body = self.block()?;
            Some(CatchClause {
                name,
                ty,
                span: catch_start.merge(catch_body.span),
                body: catch_body,
            })
        } else {
            None
        };

        let end = catch.as_ref().map_or(body.span, |c| c.span);
        Ok(Stmt::new(StmtKind::Try { body, catch }, start.merge(end)))
    }

    /// `return expr?;`
    fn return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(&TokenKind::Return, "`return`")?;
        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        let end = self.consume(&TokenKind::Semicolon, "`;`")?;
        Ok(Stmt::new(StmtKind::Return(value), start.merge(end)))
    }

    /// `print(expr?);`
    fn print_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(&TokenKind::Print, "`print`")?;
        self.consume(&TokenKind::LParen, "`(`")?;
        let value = if self.check(&TokenKind::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(&TokenKind::RParen, "`)`")?;
        let end = self.consume(&TokenKind::Semicolon, "`;`")?;
        Ok(Stmt::new(StmtKind::Print(value), start.merge(end)))
    }

    /// `writeFile(path, content);`
    fn write_file_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.consume(&TokenKind::WriteFile, "`writeFile`")?;
        self.consume(&TokenKind::LParen, "`(`")?;
        let path = self.expression()?;
        self.consume(&TokenKind::Comma, "`,`")?;
        let content = self.expression()?;
        self.consume(&TokenKind::RParen, "`)`")?;
        let end = self.consume(&TokenKind::Semicolon, "`;`")?;
        Ok(Stmt::new(StmtKind::WriteFile { path, content }, start.merge(end)))
    }
}
