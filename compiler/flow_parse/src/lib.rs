//! Flow front end: source text to [`flow_ir::Program`].
//!
//! The evaluator only consumes the tree; nothing here is needed at run time.

mod error;
mod lexer;
mod parser;

pub use error::ParseError;
pub use lexer::{lex, Token, TokenKind};
pub use parser::Parser;

use flow_ir::Program;

/// Parse a complete program.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = lex(source);
    let program = Parser::new(source, &tokens).parse_program()?;
    tracing::debug!(items = program.items.len(), exprs = program.arena.len(), "parsed program");
    Ok(program)
}
