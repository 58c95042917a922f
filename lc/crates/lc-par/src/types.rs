//! The type vocabulary shared by the parser, symbol table, and type
//! checker.
//!
//! A closed enum rather than string comparison against the source text:
//! there are exactly three types in L, and `Unit` exists purely to give the
//! type checker something to hand a function with no `->` clause.

use lc_lex::TokenKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Bool,
    Unit,
}

impl Type {
    /// Recognize a primitive-type keyword token. Returns `None` for
    /// anything else — `Unit` is never spelled in source.
    pub fn from_token(kind: &TokenKind) -> Option<Type> {
        match kind {
            TokenKind::IntType => Some(Type::Int),
            TokenKind::BoolType => Some(Type::Bool),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Bool => "bool",
            Type::Unit => "unit",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
