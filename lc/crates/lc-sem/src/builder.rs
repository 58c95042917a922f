//! Symbol table builder: walks the parsed program once, registering every
//! declared name (parameters and `Declaration` statements) against the
//! scope it's declared in, and linking each scope to its enclosing one.

use crate::scope::SymbolTable;
use lc_par::{Function, Program, Scope, ScopeId, Stmt};
use lc_util::{Diagnostic, DiagnosticKind};

pub struct BuildResult<'src> {
    pub table: SymbolTable,
    pub diagnostics: Vec<Diagnostic<'src>>,
}

pub fn build_symbol_table<'src>(program: &Program<'src>) -> BuildResult<'src> {
    let mut builder = Builder {
        table: SymbolTable::new(),
        diagnostics: Vec::new(),
    };
    for function in &program.functions {
        builder.visit_function(function);
    }
    BuildResult {
        table: builder.table,
        diagnostics: builder.diagnostics,
    }
}

struct Builder<'src> {
    table: SymbolTable,
    diagnostics: Vec<Diagnostic<'src>>,
}

impl<'src> Builder<'src> {
    fn visit_function(&mut self, function: &Function<'src>) {
        let body = &function.body;
        self.table.set_parent(body.id, None);
        for param in &function.params {
            self.declare(body.id, param.name, param.ty, function.span);
        }
        self.visit_scope_stmts(body);
    }

    fn visit_scope(&mut self, scope: &Scope<'src>, parent: ScopeId) {
        self.table.set_parent(scope.id, Some(parent));
        self.visit_scope_stmts(scope);
    }

    fn visit_scope_stmts(&mut self, scope: &Scope<'src>) {
        for stmt in &scope.stmts {
            match stmt {
                Stmt::Declaration { name, ty, span } => {
                    self.declare(scope.id, *name, *ty, *span);
                }
                Stmt::If {
                    then_scope,
                    else_scope,
                    ..
                } => {
                    self.visit_scope(then_scope, scope.id);
                    if let Some(else_scope) = else_scope {
                        self.visit_scope(else_scope, scope.id);
                    }
                }
                Stmt::While { scope: body, .. } => {
                    self.visit_scope(body, scope.id);
                }
                Stmt::Nested(inner) => {
                    self.visit_scope(inner, scope.id);
                }
                Stmt::Return { .. } | Stmt::Assignment { .. } => {}
            }
        }
    }

    fn declare(&mut self, scope: ScopeId, name: lc_util::Symbol, ty: lc_par::Type, span: lc_util::Span<'src>) {
        if !self.table.declare(scope, name, ty) {
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::Resolution,
                format!("duplicate declaration of `{}`", name),
                span,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_par::Parser;

    #[test]
    fn parameters_are_visible_in_the_function_body() {
        let result = Parser::new("f :: func (x: int) -> int { return x; }").parse();
        let built = build_symbol_table(&result.program);
        assert!(built.diagnostics.is_empty());
        let body_scope = result.program.functions[0].body.id;
        assert_eq!(built.table.lookup(body_scope, lc_util::Symbol::intern("x")), Some(lc_par::Type::Int));
    }

    #[test]
    fn duplicate_declaration_in_the_same_scope_is_flagged() {
        let src = "f :: func () { x : int; x : bool; }";
        let result = Parser::new(src).parse();
        let built = build_symbol_table(&result.program);
        assert_eq!(built.diagnostics.len(), 1);
    }

    #[test]
    fn nested_if_scopes_link_to_their_enclosing_scope() {
        let src = "f :: func () { x : int; if x == 1 { y : int; } }";
        let result = Parser::new(src).parse();
        let built = build_symbol_table(&result.program);
        assert!(built.diagnostics.is_empty());

        let Stmt::If { then_scope, .. } = &result.program.functions[0].body.stmts[1] else {
            panic!("expected an if statement");
        };
        assert_eq!(
            built.table.lookup(then_scope.id, lc_util::Symbol::intern("x")),
            Some(lc_par::Type::Int)
        );
    }
}
