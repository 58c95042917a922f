//! Top-level function parsing: `IDENT '::' 'func' arg-list ('->' type)? scope`.

use crate::ast::*;
use crate::Parser;
use lc_lex::TokenKind;
use lc_util::{span_between, Symbol};

impl<'src> Parser<'src> {
    pub(crate) fn parse_function(&mut self) -> Option<Function<'src>> {
        let name_tok = self.current().clone();
        let name = match name_tok.kind {
            TokenKind::Ident(sym) => {
                self.advance();
                sym
            }
            _ => {
                self.error_here(format!(
                    "expected a function name, found {}",
                    name_tok.kind.describe()
                ));
                return None;
            }
        };

        self.expect(TokenKind::DoubleColon)?;
        self.expect(TokenKind::Func)?;

        let params = self.parse_param_list()?;

        let return_type = if self.current().kind == TokenKind::Arrow {
            self.advance();
            self.parse_primitive_type()?
        } else {
            Type::Unit
        };

        let body = self.parse_scope()?;
        let span = span_between(name_tok.span, body.span);

        Some(Function {
            name,
            params,
            return_type,
            body,
            span,
        })
    }

    /// `'(' (IDENT ':' type (',' IDENT ':' type)*)? ')'`. Accepts any
    /// recognized primitive-type token for a parameter's type, not just
    /// `int`.
    fn parse_param_list(&mut self) -> Option<Vec<Param>> {
        self.expect(TokenKind::LParen)?;

        let mut params = Vec::new();
        if self.current().kind != TokenKind::RParen {
            loop {
                let name = self.expect_ident()?;
                self.expect(TokenKind::Colon)?;
                let ty = self.parse_primitive_type()?;
                params.push(Param { name, ty });

                if self.current().kind == TokenKind::Comma {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        self.expect(TokenKind::RParen)?;
        Some(params)
    }

    fn parse_primitive_type(&mut self) -> Option<Type> {
        match Type::from_token(&self.current().kind) {
            Some(ty) => {
                self.advance();
                Some(ty)
            }
            None => {
                self.error_here(format!("expected a type, found {}", self.current().kind.describe()));
                None
            }
        }
    }

    pub(crate) fn expect_ident(&mut self) -> Option<Symbol> {
        match self.current().kind {
            TokenKind::Ident(sym) => {
                self.advance();
                Some(sym)
            }
            _ => {
                self.error_here(format!("expected an identifier, found {}", self.current().kind.describe()));
                None
            }
        }
    }
}
