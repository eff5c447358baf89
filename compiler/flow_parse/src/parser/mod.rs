//! Recursive-descent parser producing a [`flow_ir::Program`].
//!
//! Expressions are allocated into the program's arena and referenced by
//! `ExprId`; statements and items own their children. There is no error
//! recovery: the first syntax error ends the parse.

mod expr;
mod items;
mod stmt;

use flow_ir::{ExprArena, Program, Span};

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};

/// Parser state.
pub struct Parser<'t> {
    /// Source text, for quoting invalid tokens.
    source: &'t str,
    /// Token list from the lexer, terminated by `Eof`.
    tokens: &'t [Token],
    /// Expression arena.
    arena: ExprArena,
    /// Current token index.
    pos: usize,
}

impl<'t> Parser<'t> {
    /// Create a parser over tokens produced by [`crate::lex`].
    pub fn new(source: &'t str, tokens: &'t [Token]) -> Self {
        Parser {
            source,
            tokens,
            arena: ExprArena::new(),
            pos: 0,
        }
    }

    /// Parse a complete program.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut items = Vec::new();
        while !self.at_end() {
            items.push(self.item()?);
        }
        Ok(Program::new(items, self.arena))
    }

    // ===== Token access =====

    fn current(&self) -> &'t Token {
        self.token_at(self.pos)
    }

    fn token_at(&self, index: usize) -> &'t Token {
        let tokens: &'t [Token] = self.tokens;
        match tokens.get(index).or_else(|| tokens.last()) {
            Some(token) => token,
            None => &EOF_TOKEN,
        }
    }

    fn current_kind(&self) -> &'t TokenKind {
        &self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn peek(&self, offset: usize) -> &'t TokenKind {
        &self.token_at(self.pos + offset).kind
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Consume the current token, returning it.
    fn advance(&mut self) -> &'t Token {
        let token = self.current();
        if !self.at_end() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Consume the current token if it matches `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail with `expected`, returning its span.
    fn consume(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.error(expected))
        }
    }

    fn ident(&mut self, expected: &'static str) -> Result<(String, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name.clone(), span))
        } else {
            Err(self.error(expected))
        }
    }

    /// Error describing the current token as not being `expected`.
    fn error(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        match &token.kind {
            TokenKind::Eof => ParseError::UnexpectedEof {
                expected,
                span: token.span,
            },
            TokenKind::Error => ParseError::InvalidToken {
                text: self
                    .source
                    .get(token.span.to_range())
                    .unwrap_or_default()
                    .to_string(),
                span: token.span,
            },
            other => ParseError::Expected {
                expected,
                found: other.describe(),
                span: token.span,
            },
        }
    }
}

static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};
