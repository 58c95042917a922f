//! Statement and scope parsing.

use crate::ast::*;
use crate::Parser;
use lc_lex::TokenKind;
use lc_util::{span_between, span_of_token};

impl<'src> Parser<'src> {
    /// `'{' statement* '}'`. Draws a fresh scope id before parsing the
    /// body, so nested scopes receive ids in pre-order.
    pub(crate) fn parse_scope(&mut self) -> Option<Scope<'src>> {
        let id = self.fresh_scope_id();
        let open = self.expect(TokenKind::LBrace)?;

        let mut stmts = Vec::new();
        while self.current().kind != TokenKind::RBrace && !self.at_eof() {
            match self.parse_stmt() {
                Some(stmt) => stmts.push(stmt),
                None => self.recover_eat_until(|k| matches!(k, TokenKind::Semicolon | TokenKind::RBrace)),
            }
        }

        let close = self.expect(TokenKind::RBrace)?;
        Some(Scope {
            id,
            stmts,
            span: span_between(open.span, close.span),
        })
    }

    fn parse_stmt(&mut self) -> Option<Stmt<'src>> {
        match self.current().kind {
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::LBrace => self.parse_scope().map(Stmt::Nested),
            TokenKind::Ident(_) => self.parse_declaration_or_assignment(),
            TokenKind::Else => {
                let span = span_of_token(self.current());
                self.error_at(span, "`else` without a matching `if`");
                self.recover_eat_up_to(|k| matches!(k, TokenKind::LBrace));
                None
            }
            _ => {
                self.error_here(format!(
                    "expected a statement, found {}",
                    self.current().kind.describe()
                ));
                None
            }
        }
    }

    fn parse_return_stmt(&mut self) -> Option<Stmt<'src>> {
        let kw = self.expect(TokenKind::Return)?;
        let expr = self.parse_expr()?;
        let semi = self.expect(TokenKind::Semicolon)?;
        Some(Stmt::Return {
            expr,
            span: span_between(kw.span, semi.span),
        })
    }

    /// `IDENT ':' type ';'` (declaration) or `IDENT '=' expr ';'`
    /// (assignment), disambiguated by the token after the identifier.
    fn parse_declaration_or_assignment(&mut self) -> Option<Stmt<'src>> {
        let start = span_of_token(self.current());
        let name = self.expect_ident()?;

        match self.current().kind {
            TokenKind::Colon => {
                self.advance();
                let ty = match Type::from_token(&self.current().kind) {
                    Some(ty) => {
                        self.advance();
                        ty
                    }
                    None => {
                        self.error_here(format!("expected a type, found {}", self.current().kind.describe()));
                        return None;
                    }
                };
                let semi = self.expect(TokenKind::Semicolon)?;
                Some(Stmt::Declaration {
                    name,
                    ty,
                    span: span_between(start, semi.span),
                })
            }
            TokenKind::Equals => {
                self.advance();
                let expr = self.parse_expr()?;
                let semi = self.expect(TokenKind::Semicolon)?;
                Some(Stmt::Assignment {
                    name,
                    expr,
                    span: span_between(start, semi.span),
                })
            }
            _ => {
                self.error_here(format!(
                    "expected `:` or `=` after identifier, found {}",
                    self.current().kind.describe()
                ));
                None
            }
        }
    }

    fn parse_if_stmt(&mut self) -> Option<Stmt<'src>> {
        let kw = self.expect(TokenKind::If)?;
        let condition = self.parse_expr()?;
        let then_scope = self.parse_scope()?;

        let (else_scope, end_span) = if self.current().kind == TokenKind::Else {
            self.advance();
            let scope = self.parse_scope()?;
            let span = scope.span;
            (Some(scope), span)
        } else {
            (None, then_scope.span)
        };

        Some(Stmt::If {
            condition,
            then_scope,
            else_scope,
            span: span_between(kw.span, end_span),
        })
    }

    fn parse_while_stmt(&mut self) -> Option<Stmt<'src>> {
        let kw = self.expect(TokenKind::While)?;
        let condition = self.parse_expr()?;
        let scope = self.parse_scope()?;
        let span = span_between(kw.span, scope.span);
        Some(Stmt::While { condition, scope, span })
    }
}
