//! Type checker. Types are the closed set `{int, bool, unit}`; every
//! statement is checked against an expected type threaded down from the
//! enclosing function's declared return type.

use crate::scope::SymbolTable;
use lc_par::{BinaryOp, Expr, ExprArena, ExprId, ExprKind, Function, Program, Scope, Stmt, Type, UnaryOp};
use lc_util::{Diagnostic, DiagnosticKind, Span};

pub struct TypeckResult<'src> {
    pub diagnostics: Vec<Diagnostic<'src>>,
}

impl<'src> TypeckResult<'src> {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub fn typecheck<'src>(
    program: &Program<'src>,
    arena: &ExprArena<'src>,
    table: &SymbolTable,
) -> TypeckResult<'src> {
    let mut checker = Checker {
        arena,
        table,
        diagnostics: Vec::new(),
    };
    for function in &program.functions {
        checker.visit_function(function);
    }
    TypeckResult {
        diagnostics: checker.diagnostics,
    }
}

struct Checker<'a, 'src> {
    arena: &'a ExprArena<'src>,
    table: &'a SymbolTable,
    diagnostics: Vec<Diagnostic<'src>>,
}

impl<'a, 'src> Checker<'a, 'src> {
    fn visit_function(&mut self, function: &Function<'src>) {
        self.visit_scope(&function.body, function.return_type);
    }

    fn visit_scope(&mut self, scope: &Scope<'src>, expected: Type) {
        for stmt in &scope.stmts {
            match stmt {
                Stmt::Return { expr, span } => {
                    if let Some(actual) = self.expr_type(scope.id, *expr) {
                        if actual != expected {
                            self.mismatch("return", expected, actual, *span);
                        }
                    }
                }
                Stmt::Declaration { .. } => {}
                Stmt::Assignment { name, expr, span } => {
                    let target_ty = self.table.lookup(scope.id, *name);
                    if let (Some(target_ty), Some(actual)) = (target_ty, self.expr_type(scope.id, *expr)) {
                        if target_ty != actual {
                            self.mismatch("assignment", target_ty, actual, *span);
                        }
                    }
                }
                Stmt::If {
                    condition,
                    then_scope,
                    else_scope,
                    ..
                } => {
                    self.expect_condition(scope.id, *condition);
                    self.visit_scope(then_scope, Type::Unit);
                    if let Some(else_scope) = else_scope {
                        self.visit_scope(else_scope, Type::Unit);
                    }
                }
                Stmt::While { condition, scope: body, .. } => {
                    self.expect_condition(scope.id, *condition);
                    self.visit_scope(body, Type::Unit);
                }
                Stmt::Nested(inner) => self.visit_scope(inner, Type::Unit),
            }
        }
    }

    fn expect_condition(&mut self, scope: lc_par::ScopeId, id: ExprId<'src>) {
        if let Some(ty) = self.expr_type(scope, id) {
            if ty != Type::Bool {
                let span = self.arena.get(id).span;
                self.mismatch("condition", Type::Bool, ty, span);
            }
        }
    }

    /// Returns `None` only when the sub-expression already failed to
    /// resolve (no diagnostic is added here in that case — resolution
    /// already reported it).
    fn expr_type(&mut self, scope: lc_par::ScopeId, id: ExprId<'src>) -> Option<Type> {
        let node: &Expr<'src> = self.arena.get(id);
        match &node.kind {
            ExprKind::IntLit(_) => Some(Type::Int),
            ExprKind::BoolLit(_) => Some(Type::Bool),
            ExprKind::Ident(name) => self.table.lookup(scope, *name),
            ExprKind::Unary { op: UnaryOp::Neg, operand } => {
                let operand_ty = self.expr_type(scope, *operand)?;
                if operand_ty != Type::Int {
                    self.mismatch("unary `-`", Type::Int, operand_ty, node.span);
                    return None;
                }
                Some(Type::Int)
            }
            ExprKind::Binary { op, left, right } => self.binary_type(scope, *op, *left, *right, node.span),
        }
    }

    fn binary_type(
        &mut self,
        scope: lc_par::ScopeId,
        op: BinaryOp,
        left: ExprId<'src>,
        right: ExprId<'src>,
        span: Span<'src>,
    ) -> Option<Type> {
        let left_ty = self.expr_type(scope, left)?;
        let right_ty = self.expr_type(scope, right)?;

        match op {
            BinaryOp::Plus | BinaryOp::Minus | BinaryOp::Times | BinaryOp::Divide => {
                if left_ty != Type::Int || right_ty != Type::Int {
                    self.diagnostics.push(Diagnostic::new(
                        DiagnosticKind::Type,
                        format!(
                            "arithmetic operator `{}` requires `int` operands, found `{}` and `{}`",
                            op.as_str(),
                            left_ty,
                            right_ty
                        ),
                        span,
                    ));
                    return None;
                }
                Some(Type::Int)
            }
            BinaryOp::IsEqual => {
                if left_ty != right_ty {
                    self.diagnostics.push(Diagnostic::new(
                        DiagnosticKind::Type,
                        format!("cannot compare `{}` with `{}`", left_ty, right_ty),
                        span,
                    ));
                    return None;
                }
                Some(Type::Bool)
            }
        }
    }

    fn mismatch(&mut self, what: &str, expected: Type, actual: Type, span: Span<'src>) {
        self.diagnostics.push(Diagnostic::new(
            DiagnosticKind::Type,
            format!("{} expects `{}`, found `{}`", what, expected, actual),
            span,
        ));
    }
}
