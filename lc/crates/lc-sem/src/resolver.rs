//! Name resolver: walks each function body, checking that every
//! identifier reference resolves to a symbol visible from its scope.

use crate::scope::SymbolTable;
use lc_par::{Expr, ExprArena, ExprId, ExprKind, Function, Program, Scope, Stmt};
use lc_util::{Diagnostic, DiagnosticKind, Symbol};

pub struct ResolveResult<'src> {
    pub diagnostics: Vec<Diagnostic<'src>>,
}

impl<'src> ResolveResult<'src> {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub fn resolve<'src>(
    program: &Program<'src>,
    arena: &ExprArena<'src>,
    table: &SymbolTable,
) -> ResolveResult<'src> {
    let mut resolver = Resolver {
        arena,
        table,
        diagnostics: Vec::new(),
    };
    for function in &program.functions {
        resolver.visit_function(function);
    }
    ResolveResult {
        diagnostics: resolver.diagnostics,
    }
}

struct Resolver<'a, 'src> {
    arena: &'a ExprArena<'src>,
    table: &'a SymbolTable,
    diagnostics: Vec<Diagnostic<'src>>,
}

impl<'a, 'src> Resolver<'a, 'src> {
    fn visit_function(&mut self, function: &Function<'src>) {
        self.visit_scope(&function.body);
    }

    fn visit_scope(&mut self, scope: &Scope<'src>) {
        for stmt in &scope.stmts {
            match stmt {
                Stmt::Return { expr, .. } => self.visit_expr(scope.id, *expr),
                Stmt::Declaration { .. } => {}
                Stmt::Assignment { name, expr, span } => {
                    if self.table.lookup(scope.id, *name).is_none() {
                        self.undeclared(*name, *span);
                    }
                    self.visit_expr(scope.id, *expr);
                }
                Stmt::If {
                    condition,
                    then_scope,
                    else_scope,
                    ..
                } => {
                    self.visit_expr(scope.id, *condition);
                    self.visit_scope(then_scope);
                    if let Some(else_scope) = else_scope {
                        self.visit_scope(else_scope);
                    }
                }
                Stmt::While { condition, scope: body, .. } => {
                    self.visit_expr(scope.id, *condition);
                    self.visit_scope(body);
                }
                Stmt::Nested(inner) => self.visit_scope(inner),
            }
        }
    }

    fn visit_expr(&mut self, scope: lc_par::ScopeId, id: ExprId<'src>) {
        let node: &Expr<'src> = self.arena.get(id);
        match &node.kind {
            ExprKind::IntLit(_) | ExprKind::BoolLit(_) => {}
            ExprKind::Ident(name) => {
                if self.table.lookup(scope, *name).is_none() {
                    self.undeclared(*name, node.span);
                }
            }
            ExprKind::Unary { operand, .. } => self.visit_expr(scope, *operand),
            ExprKind::Binary { left, right, .. } => {
                self.visit_expr(scope, *left);
                self.visit_expr(scope, *right);
            }
        }
    }

    fn undeclared(&mut self, name: Symbol, span: lc_util::Span<'src>) {
        self.diagnostics.push(Diagnostic::new(
            DiagnosticKind::Resolution,
            format!("use of undeclared identifier `{}`", name),
            span,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_symbol_table;
    use lc_par::Parser;

    #[test]
    fn undeclared_identifier_in_return_is_reported() {
        let result = Parser::new("f :: func () -> int { return y; }").parse();
        let built = build_symbol_table(&result.program);
        let resolved = resolve(&result.program, &result.arena, &built.table);
        assert!(!resolved.is_ok());
    }

    #[test]
    fn declared_parameter_resolves_cleanly() {
        let result = Parser::new("f :: func (x: int) -> int { return x; }").parse();
        let built = build_symbol_table(&result.program);
        let resolved = resolve(&result.program, &result.arena, &built.table);
        assert!(resolved.is_ok());
    }

    #[test]
    fn assignment_to_undeclared_name_is_reported() {
        let result = Parser::new("f :: func () { y = 1; }").parse();
        let built = build_symbol_table(&result.program);
        let resolved = resolve(&result.program, &result.arena, &built.table);
        assert!(!resolved.is_ok());
    }

    #[test]
    fn else_branch_is_visited() {
        let src = "f :: func () { if 1 == 1 { } else { z : int; z = w; } }";
        let result = Parser::new(src).parse();
        let built = build_symbol_table(&result.program);
        let resolved = resolve(&result.program, &result.arena, &built.table);
        assert!(!resolved.is_ok());
    }
}
