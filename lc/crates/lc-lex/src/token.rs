//! Token kinds produced by the lexer.

use lc_util::{Span, Spanned, Symbol};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Func,
    Return,
    If,
    Else,
    While,

    // Primitive type keywords
    IntType,
    BoolType,

    // Literals
    IntLit(i64),
    BoolLit(bool),
    Ident(Symbol),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    DoubleEquals,
    Equals,

    // Punctuation
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Colon,
    DoubleColon,
    Arrow,

    Eof,
}

impl TokenKind {
    /// Human-readable label for diagnostics ("expected `,`, found `}`").
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Func => "`func`".to_string(),
            TokenKind::Return => "`return`".to_string(),
            TokenKind::If => "`if`".to_string(),
            TokenKind::Else => "`else`".to_string(),
            TokenKind::While => "`while`".to_string(),
            TokenKind::IntType => "`int`".to_string(),
            TokenKind::BoolType => "`bool`".to_string(),
            TokenKind::IntLit(n) => format!("integer literal `{}`", n),
            TokenKind::BoolLit(b) => format!("boolean literal `{}`", b),
            TokenKind::Ident(s) => format!("identifier `{}`", s),
            TokenKind::Plus => "`+`".to_string(),
            TokenKind::Minus => "`-`".to_string(),
            TokenKind::Star => "`*`".to_string(),
            TokenKind::Slash => "`/`".to_string(),
            TokenKind::DoubleEquals => "`==`".to_string(),
            TokenKind::Equals => "`=`".to_string(),
            TokenKind::Comma => "`,`".to_string(),
            TokenKind::LParen => "`(`".to_string(),
            TokenKind::RParen => "`)`".to_string(),
            TokenKind::LBrace => "`{`".to_string(),
            TokenKind::RBrace => "`}`".to_string(),
            TokenKind::Semicolon => "`;`".to_string(),
            TokenKind::Colon => "`:`".to_string(),
            TokenKind::DoubleColon => "`::`".to_string(),
            TokenKind::Arrow => "`->`".to_string(),
            TokenKind::Eof => "end of file".to_string(),
        }
    }
}

/// A lexeme together with its source span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub span: Span<'src>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, span: Span<'src>) -> Self {
        Self { kind, span }
    }
}

impl<'src> Spanned<'src> for Token<'src> {
    fn span(&self) -> Span<'src> {
        self.span
    }
}
