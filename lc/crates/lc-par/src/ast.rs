//! AST node definitions.
//!
//! Sequences (parameters, statements) are contiguous `Vec<T>` rather than
//! linked lists — the tree is a tagged-union of owned data, not a pointer
//! graph. The one place nodes legitimately reference each other is
//! expressions (a binary expression's operands are themselves
//! expressions), and those live in [`crate::Parser`]'s [`lc_util::Arena`]
//! behind [`ExprId`] handles so the tree can be built bottom-up without
//! reallocation ever invalidating an earlier handle.

use lc_util::{Arena, ArenaId, Span, Symbol};

pub use crate::types::Type;

/// A compilation unit: an ordered sequence of top-level functions.
#[derive(Debug)]
pub struct Program<'src> {
    pub functions: Vec<Function<'src>>,
}

#[derive(Debug)]
pub struct Function<'src> {
    pub name: Symbol,
    pub params: Vec<Param>,
    pub return_type: Type,
    pub body: Scope<'src>,
    pub span: Span<'src>,
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: Symbol,
    pub ty: Type,
}

/// A monotonically assigned scope identifier, unique within one parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

#[derive(Debug)]
pub struct Scope<'src> {
    pub id: ScopeId,
    pub stmts: Vec<Stmt<'src>>,
    pub span: Span<'src>,
}

#[derive(Debug)]
pub enum Stmt<'src> {
    Return {
        expr: ExprId<'src>,
        span: Span<'src>,
    },
    Declaration {
        name: Symbol,
        ty: Type,
        span: Span<'src>,
    },
    Assignment {
        name: Symbol,
        expr: ExprId<'src>,
        span: Span<'src>,
    },
    If {
        condition: ExprId<'src>,
        then_scope: Scope<'src>,
        else_scope: Option<Scope<'src>>,
        span: Span<'src>,
    },
    While {
        condition: ExprId<'src>,
        scope: Scope<'src>,
        span: Span<'src>,
    },
    Nested(Scope<'src>),
}

/// A handle into the expression arena. Never holds data directly — always
/// go through [`crate::Parser::expr`] (or the checker/emitter's own arena
/// reference) to read the node.
pub type ExprId<'src> = ArenaId<Expr<'src>>;

#[derive(Debug)]
pub struct Expr<'src> {
    pub kind: ExprKind<'src>,
    pub span: Span<'src>,
}

#[derive(Debug)]
pub enum ExprKind<'src> {
    IntLit(i64),
    BoolLit(bool),
    Ident(Symbol),
    Binary {
        op: BinaryOp,
        left: ExprId<'src>,
        right: ExprId<'src>,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId<'src>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Plus,
    Minus,
    Times,
    Divide,
    IsEqual,
}

impl BinaryOp {
    /// `==` = 10, `+`/`-` = 20, `*`/`/` = 30.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::IsEqual => 10,
            BinaryOp::Plus | BinaryOp::Minus => 20,
            BinaryOp::Times | BinaryOp::Divide => 30,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
            BinaryOp::Divide => "/",
            BinaryOp::IsEqual => "==",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

impl UnaryOp {
    /// Unary `-` binds at 40, tighter than every binary operator.
    pub fn precedence(self) -> u8 {
        match self {
            UnaryOp::Neg => 40,
        }
    }
}

/// The expression arena backing every [`ExprId`] produced by a single parse.
pub type ExprArena<'src> = Arena<Expr<'src>>;
