//! Lexer for Flow using logos.
//!
//! Whitespace (including newlines) and `//` line comments are skipped; the
//! parser only ever sees significant tokens followed by a single `Eof`.

use std::fmt;

use flow_ir::Span;
use logos::Logos;

/// Raw token from logos, before literal payloads are decoded.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    // === Keywords ===
    #[token("class")]
    Class,
    #[token("fun")]
    Fun,
    #[token("constructor")]
    Constructor,
    #[token("var")]
    Var,
    #[token("val")]
    Val,
    #[token("new")]
    New,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("in")]
    In,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("return")]
    Return,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // === Builtins ===
    #[token("print")]
    Print,
    #[token("toString")]
    ToString,
    #[token("readChar")]
    ReadChar,
    #[token("readLine")]
    ReadLine,
    #[token("readFile")]
    ReadFile,
    #[token("writeFile")]
    WriteFile,

    // === Symbols ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("..")]
    DotDot,
    #[token(".")]
    Dot,

    // === Operators ===
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // === Literals ===
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Double(f64),

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\]|\\.)'")]
    Char,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Token kinds seen by the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Double(f64),
    Str(String),
    Char(char),
    Ident(String),

    // Keywords
    Class,
    Fun,
    Constructor,
    Var,
    Val,
    New,
    If,
    Else,
    While,
    For,
    In,
    Try,
    Catch,
    Return,
    True,
    False,

    // Builtins
    Print,
    ToString,
    ReadChar,
    ReadLine,
    ReadFile,
    WriteFile,

    // Symbols
    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    Comma,
    Semicolon,
    DotDot,
    Dot,

    // Operators
    EqEq,
    Eq,
    NotEq,
    LtEq,
    Lt,
    GtEq,
    Gt,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    /// Text logos could not match, or a numeric literal out of range.
    Error,
    Eof,
}

impl TokenKind {
    /// Short human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::Double(d) => format!("double `{d}`"),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::Char(_) => "char literal".to_string(),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Error => "invalid token".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("`{}`", other.symbol()),
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            TokenKind::Class => "class",
            TokenKind::Fun => "fun",
            TokenKind::Constructor => "constructor",
            TokenKind::Var => "var",
            TokenKind::Val => "val",
            TokenKind::New => "new",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::In => "in",
            TokenKind::Try => "try",
            TokenKind::Catch => "catch",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Print => "print",
            TokenKind::ToString => "toString",
            TokenKind::ReadChar => "readChar",
            TokenKind::ReadLine => "readLine",
            TokenKind::ReadFile => "readFile",
            TokenKind::WriteFile => "writeFile",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::DotDot => "..",
            TokenKind::Dot => ".",
            TokenKind::EqEq => "==",
            TokenKind::Eq => "=",
            TokenKind::NotEq => "!=",
            TokenKind::LtEq => "<=",
            TokenKind::Lt => "<",
            TokenKind::GtEq => ">=",
            TokenKind::Gt => ">",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Int(_)
            | TokenKind::Double(_)
            | TokenKind::Str(_)
            | TokenKind::Char(_)
            | TokenKind::Ident(_)
            | TokenKind::Error
            | TokenKind::Eof => "",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// A token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lex `source` into tokens. The result always ends with `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match result {
            Ok(raw) => convert_token(raw, logos.slice()),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, eof));
    tokens
}

fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Double(d) => TokenKind::Double(d),
        RawToken::String => TokenKind::Str(unescape_string(&slice[1..slice.len() - 1])),
        RawToken::Char => TokenKind::Char(unescape_char(&slice[1..slice.len() - 1])),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),

        RawToken::Class => TokenKind::Class,
        RawToken::Fun => TokenKind::Fun,
        RawToken::Constructor => TokenKind::Constructor,
        RawToken::Var => TokenKind::Var,
        RawToken::Val => TokenKind::Val,
        RawToken::New => TokenKind::New,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::For => TokenKind::For,
        RawToken::In => TokenKind::In,
        RawToken::Try => TokenKind::Try,
        RawToken::Catch => TokenKind::Catch,
        RawToken::Return => TokenKind::Return,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,

        RawToken::Print => TokenKind::Print,
        RawToken::ToString => TokenKind::ToString,
        RawToken::ReadChar => TokenKind::ReadChar,
        RawToken::ReadLine => TokenKind::ReadLine,
        RawToken::ReadFile => TokenKind::ReadFile,
        RawToken::WriteFile => TokenKind::WriteFile,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::DotDot => TokenKind::DotDot,
        RawToken::Dot => TokenKind::Dot,

        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
    }
}

/// Process escape sequences in a string literal body.
fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('0') => result.push('\0'),
                Some(other) => {
                    // Unknown escape, kept as written
                    result.push('\\');
                    result.push(other);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Process a char literal body (one char or one escape).
fn unescape_char(s: &str) -> char {
    let mut chars = s.chars();
    match chars.next() {
        Some('\\') => match chars.next() {
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('0') => '\0',
            Some(c) => c,
            None => '\\',
        },
        Some(c) => c,
        None => '\0',
    }
}
