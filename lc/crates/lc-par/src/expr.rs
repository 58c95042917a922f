//! Expression parsing: precedence climbing over a unary-prefixed atom.
//!
//! `==` = 10, `+`/`-` = 20, `*`/`/` = 30, unary `-` = 40. All binary
//! operators are left-associative, which falls out of recursing with
//! `min_prec = p` (not `p + 1`) — equal-precedence operators never get
//! absorbed by the recursive call, so the outer loop picks them up and
//! nests them to the left.

use crate::ast::*;
use crate::Parser;
use lc_lex::TokenKind;
use lc_util::span_between;

impl<'src> Parser<'src> {
    pub(crate) fn parse_expr(&mut self) -> Option<ExprId<'src>> {
        self.parse_expr_min_prec(0)
    }

    fn parse_expr_min_prec(&mut self, min_prec: u8) -> Option<ExprId<'src>> {
        let mut lhs = self.parse_unary()?;

        while let Some(op) = binary_op_for(&self.current().kind) {
            let prec = op.precedence();
            if prec <= min_prec {
                break;
            }
            self.advance();

            let rhs = self.parse_expr_min_prec(prec)?;
            let span = span_between(self.expr_span(lhs), self.expr_span(rhs));
            lhs = self.alloc_expr(ExprKind::Binary { op, left: lhs, right: rhs }, span);
        }

        Some(lhs)
    }

    /// `'-' unary | term`. Recurses for chained signs (`- - x`).
    fn parse_unary(&mut self) -> Option<ExprId<'src>> {
        if self.current().kind == TokenKind::Minus {
            let minus = self.advance();
            let operand = self.parse_unary()?;
            let span = span_between(minus.span, self.expr_span(operand));
            return Some(self.alloc_expr(ExprKind::Unary { op: UnaryOp::Neg, operand }, span));
        }
        self.parse_term()
    }

    /// `INT | BOOL | IDENT | '(' expr ')'`.
    fn parse_term(&mut self) -> Option<ExprId<'src>> {
        match self.current().kind {
            TokenKind::IntLit(n) => {
                let tok = self.advance();
                Some(self.alloc_expr(ExprKind::IntLit(n), tok.span))
            }
            TokenKind::BoolLit(b) => {
                let tok = self.advance();
                Some(self.alloc_expr(ExprKind::BoolLit(b), tok.span))
            }
            TokenKind::Ident(sym) => {
                let tok = self.advance();
                Some(self.alloc_expr(ExprKind::Ident(sym), tok.span))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr_min_prec(0)?;
                self.expect(TokenKind::RParen)?;
                Some(inner)
            }
            _ => {
                self.error_here(format!(
                    "expected an expression, found {}",
                    self.current().kind.describe()
                ));
                None
            }
        }
    }

    fn expr_span(&self, id: ExprId<'src>) -> lc_util::Span<'src> {
        self.arena.get(id).span
    }
}

fn binary_op_for(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Plus),
        TokenKind::Minus => Some(BinaryOp::Minus),
        TokenKind::Star => Some(BinaryOp::Times),
        TokenKind::Slash => Some(BinaryOp::Divide),
        TokenKind::DoubleEquals => Some(BinaryOp::IsEqual),
        _ => None,
    }
}
