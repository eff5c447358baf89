//! Expression parsing: precedence climbing over `+ - * / %`, one optional
//! comparison on top, unary minus, calls, field access and builtins.

use flow_ir::{BinaryOp, Expr, ExprId, ExprKind, RelOp, Span};

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// `additive (relop additive)?`
    pub(super) fn expression(&mut self) -> Result<ExprId, ParseError> {
        let left = self.additive()?;
        let Some(op) = self.rel_op() else {
            return Ok(left);
        };
        self.advance();
        let right = self.additive()?;
        let span = self.span_of(left).merge(self.span_of(right));
        Ok(self.alloc(ExprKind::Compare { op, left, right }, span))
    }

    /// Arithmetic without comparison; `if` headers and `for` bounds use this.
    pub(super) fn additive(&mut self) -> Result<ExprId, ParseError> {
        self.binary(1)
    }

    fn binary(&mut self, min_prec: u8) -> Result<ExprId, ParseError> {
        let mut left = self.unary()?;

        while let Some(op) = self.binary_op() {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.advance();
            // Left-associative: the right operand only takes tighter operators.
            let right = self.binary(prec + 1)?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Binary { op, left, right }, span);
        }

        Ok(left)
    }

    fn binary_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub(super) fn rel_op(&self) -> Option<RelOp> {
        match self.current_kind() {
            TokenKind::EqEq => Some(RelOp::Eq),
            TokenKind::NotEq => Some(RelOp::NotEq),
            TokenKind::Lt => Some(RelOp::Lt),
            TokenKind::Gt => Some(RelOp::Gt),
            TokenKind::LtEq => Some(RelOp::LtEq),
            TokenKind::GtEq => Some(RelOp::GtEq),
            _ => None,
        }
    }

    fn unary(&mut self) -> Result<ExprId, ParseError> {
        if self.check(&TokenKind::Minus) {
            let start = self.advance().span;
            let operand = self.unary()?;
            let span = start.merge(self.span_of(operand));
            return Ok(self.alloc(ExprKind::Negate(operand), span));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.current();
        let span = token.span;
        let kind = match &token.kind {
            TokenKind::Int(n) => ExprKind::Int(*n),
            TokenKind::Double(d) => ExprKind::Double(*d),
            TokenKind::Str(s) => ExprKind::Str(s.clone()),
            TokenKind::Char(c) => ExprKind::Char(*c),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Ident(_) => return self.name_expr(),
            TokenKind::LParen => {
                self.advance();
                let inner = self.expression()?;
                self.consume(&TokenKind::RParen, "`)`")?;
                return Ok(inner);
            }
            TokenKind::ToString => {
                self.advance();
                self.consume(&TokenKind::LParen, "`(`")?;
                let operand = self.expression()?;
                let end = self.consume(&TokenKind::RParen, "`)`")?;
                return Ok(self.alloc(ExprKind::ToString(operand), span.merge(end)));
            }
            TokenKind::ReadChar | TokenKind::ReadLine => {
                let kind = if matches!(token.kind, TokenKind::ReadChar) {
                    ExprKind::ReadChar
                } else {
                    ExprKind::ReadLine
                };
                self.advance();
                self.consume(&TokenKind::LParen, "`(`")?;
                let end = self.consume(&TokenKind::RParen, "`)`")?;
                return Ok(self.alloc(kind, span.merge(end)));
            }
            TokenKind::ReadFile => {
                self.advance();
                self.consume(&TokenKind::LParen, "`(`")?;
                let path = self.expression()?;
                let end = self.consume(&TokenKind::RParen, "`)`")?;
                return Ok(self.alloc(ExprKind::ReadFile(path), span.merge(end)));
            }
            _ => return Err(self.error("expression")),
        };
        self.advance();
        Ok(self.alloc(kind, span))
    }

    /// `name`, `name(args)`, `object.field` or `object.method(args)`.
    fn name_expr(&mut self) -> Result<ExprId, ParseError> {
        let (name, start) = self.ident("identifier")?;

        if self.check(&TokenKind::LParen) {
            let (args, end) = self.args()?;
            let kind = ExprKind::Call {
                receiver: None,
                method: name,
                args,
            };
            return Ok(self.alloc(kind, start.merge(end)));
        }

        if self.eat(&TokenKind::Dot) {
            let (member, member_span) = self.ident("field or method name")?;
            if self.check(&TokenKind::LParen) {
                let (args, end) = self.args()?;
                let kind = ExprKind::Call {
                    receiver: Some(name),
                    method: member,
                    args,
                };
                return Ok(self.alloc(kind, start.merge(end)));
            }
            let kind = ExprKind::FieldGet {
                object: name,
                field: member,
            };
            return Ok(self.alloc(kind, start.merge(member_span)));
        }

        Ok(self.alloc(ExprKind::Ident(name), start))
    }

    /// `( (expr (, expr)*)? )`, returning the arguments and the span of `)`.
    pub(super) fn args(&mut self) -> Result<(Vec<ExprId>, Span), ParseError> {
        self.consume(&TokenKind::LParen, "`(`")?;
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        let end = self.consume(&TokenKind::RParen, "`)`")?;
        Ok((args, end))
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc(Expr::new(kind, span))
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get(id).span
    }
}
