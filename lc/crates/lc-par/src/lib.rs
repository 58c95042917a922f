//! Recursive-descent parser with precedence climbing for expressions.
//!
//! The grammar:
//!
//! ```text
//! program    := function*
//! function   := IDENT '::' 'func' arg-list ('->' type)? scope
//! arg-list   := '(' (IDENT ':' type (',' IDENT ':' type)*)? ')'
//! type       := 'int' | 'bool'
//! scope      := '{' statement* '}'
//! statement  := 'return' expr ';'
//!             | IDENT ':' type ';'           // declaration
//!             | IDENT '=' expr ';'           // assignment
//!             | 'if' expr scope ('else' scope)?
//!             | 'while' expr scope
//!             | scope
//! expr       := unary (op unary)*
//! unary      := '-' unary | term
//! term       := INT | BOOL | IDENT | '(' expr ')'
//! op         := '+' | '-' | '*' | '/' | '=='
//! ```
//!
//! Errors are collected rather than raised eagerly: a failed expectation
//! emits a [`Diagnostic`], marks the parse as failed, and recovers to a
//! synchronization point so later constructs still get a chance to parse.

mod ast;
mod expr;
mod items;
mod stmt;
mod types;

pub use ast::*;
pub use types::Type;

use lc_lex::{Lexer, Token, TokenKind};
use lc_util::{span_of_token, Diagnostic, DiagnosticKind, Span};

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
    next_scope_id: u32,
    arena: ExprArena<'src>,
    diagnostics: Vec<Diagnostic<'src>>,
    failed: bool,
}

/// Result of a full parse: the program (however much of it survived) plus
/// the expression arena it references, and any diagnostics collected along
/// the way.
pub struct ParseResult<'src> {
    pub program: Program<'src>,
    pub arena: ExprArena<'src>,
    pub diagnostics: Vec<Diagnostic<'src>>,
}

impl<'src> ParseResult<'src> {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn expr(&self, id: ExprId<'src>) -> &Expr<'src> {
        self.arena.get(id)
    }
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            next_scope_id: 0,
            arena: ExprArena::new(),
            diagnostics: Vec::new(),
            failed: false,
        }
    }

    /// Parse a whole source file into a [`ParseResult`].
    pub fn parse(mut self) -> ParseResult<'src> {
        let mut functions = Vec::new();

        while !self.at_eof() {
            self.failed = false;
            match self.parse_function() {
                Some(f) => functions.push(f),
                None => {
                    self.recover_eat_until(|k| matches!(k, TokenKind::RBrace));
                }
            }
        }

        ParseResult {
            program: Program { functions },
            arena: self.arena,
            diagnostics: self.diagnostics,
        }
    }

    // -- token stream -----------------------------------------------------

    pub(crate) fn current(&self) -> &Token<'src> {
        &self.current
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    pub(crate) fn advance(&mut self) -> Token<'src> {
        let prev = self.current;
        self.current = self.lexer.next_token();
        prev
    }

    /// Consume the current token if it matches `kind`, returning it.
    /// Otherwise emit a diagnostic and return `None` without consuming.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Token<'src>> {
        if self.current.kind == kind {
            Some(self.advance())
        } else {
            self.error_here(format!(
                "expected {}, found {}",
                kind.describe(),
                self.current.kind.describe()
            ));
            None
        }
    }

    pub(crate) fn fresh_scope_id(&mut self) -> ScopeId {
        let id = ScopeId(self.next_scope_id);
        self.next_scope_id += 1;
        id
    }

    pub(crate) fn alloc_expr(&mut self, kind: ExprKind<'src>, span: Span<'src>) -> ExprId<'src> {
        self.arena.alloc(Expr { kind, span })
    }

    // -- diagnostics --------------------------------------------------------

    pub(crate) fn error_at(&mut self, span: Span<'src>, message: impl Into<String>) {
        self.failed = true;
        self.diagnostics
            .push(Diagnostic::new(DiagnosticKind::Parse, message, span));
    }

    pub(crate) fn error_here(&mut self, message: impl Into<String>) {
        let span = span_of_token(&self.current);
        self.error_at(span, message);
    }

    // -- recovery -----------------------------------------------------------

    /// Consume tokens until one matching `is_sync` is itself consumed.
    pub(crate) fn recover_eat_until(&mut self, is_sync: impl Fn(&TokenKind) -> bool) {
        loop {
            if self.at_eof() {
                break;
            }
            let matched = is_sync(&self.current.kind);
            self.advance();
            if matched {
                break;
            }
        }
    }

    /// Consume tokens while the look-ahead does not match `is_sync`,
    /// leaving the matching token for the caller.
    pub(crate) fn recover_eat_up_to(&mut self, is_sync: impl Fn(&TokenKind) -> bool) {
        while !self.at_eof() && !is_sync(&self.current.kind) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_empty_unit_function() {
        let result = Parser::new("f :: func () {}").parse();
        assert!(result.is_ok());
        assert_eq!(result.program.functions.len(), 1);
        assert_eq!(result.program.functions[0].return_type, Type::Unit);
    }

    #[test]
    fn multiple_top_level_functions_coexist() {
        let result = Parser::new("a :: func () {} b :: func () {}").parse();
        assert!(result.is_ok());
        assert_eq!(result.program.functions.len(), 2);
    }

    #[test]
    fn recovers_after_a_malformed_function_and_keeps_parsing() {
        let src = "a :: func ( {} b :: func () {}";
        let result = Parser::new(src).parse();
        assert!(!result.diagnostics.is_empty());
        assert!(result.program.functions.iter().any(|f| f.name.as_str() == "b"));
    }
}
