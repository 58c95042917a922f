//! Translates a checked program into a C translation unit. One pass over
//! the AST, writing directly into a growing `String`; expression
//! precedence is carried down recursively so parentheses are added only
//! where the target's own precedence would otherwise misparse.

use std::fmt::Write as _;

use lc_par::{Expr, ExprArena, ExprId, ExprKind, Function, Program, Stmt, Type, UnaryOp};

use crate::error::Result;

const INDENT: &str = "    ";

/// Precedence assigned to atoms (literals, identifiers): higher than any
/// operator, so an atom is never parenthesized as someone else's child.
const ATOM_PRECEDENCE: u8 = u8::MAX;

pub fn emit<'src>(program: &Program<'src>, arena: &ExprArena<'src>) -> Result<String> {
    let mut emitter = Emitter { arena, out: String::new() };
    emitter.emit_program(program)?;
    Ok(emitter.out)
}

struct Emitter<'a, 'src> {
    arena: &'a ExprArena<'src>,
    out: String,
}

impl<'a, 'src> Emitter<'a, 'src> {
    fn emit_program(&mut self, program: &Program<'src>) -> Result<()> {
        writeln!(self.out, "#include <stdbool.h>")?;
        writeln!(self.out)?;
        for (i, function) in program.functions.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            self.emit_function(function)?;
        }
        Ok(())
    }

    fn emit_function(&mut self, function: &Function<'src>) -> Result<()> {
        let return_type = if function.name.as_str() == "main" {
            "int"
        } else if function.return_type == Type::Unit {
            "void"
        } else {
            function.return_type.as_str()
        };

        let params = function
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty.as_str(), p.name))
            .collect::<Vec<_>>()
            .join(", ");

        write!(self.out, "{} {}({}) {{\n", return_type, function.name, params)?;
        self.emit_block(&function.body.stmts, 1)?;
        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn emit_block(&mut self, stmts: &[Stmt<'src>], indent: usize) -> Result<()> {
        for stmt in stmts {
            self.emit_stmt(stmt, indent)?;
        }
        Ok(())
    }

    fn emit_stmt(&mut self, stmt: &Stmt<'src>, indent: usize) -> Result<()> {
        let pad = INDENT.repeat(indent);
        match stmt {
            Stmt::Return { expr, .. } => {
                writeln!(self.out, "{}return {};", pad, self.render_expr(*expr, 0, false))?;
            }
            Stmt::Declaration { name, ty, .. } => {
                writeln!(self.out, "{}{} {};", pad, ty.as_str(), name)?;
            }
            Stmt::Assignment { name, expr, .. } => {
                writeln!(self.out, "{}{} = {};", pad, name, self.render_expr(*expr, 0, false))?;
            }
            Stmt::If {
                condition,
                then_scope,
                else_scope,
                ..
            } => {
                write!(self.out, "{}if ({}) {{\n", pad, self.render_expr(*condition, 0, false))?;
                self.emit_block(&then_scope.stmts, indent + 1)?;
                match else_scope {
                    Some(else_scope) => {
                        write!(self.out, "{}}} else {{\n", pad)?;
                        self.emit_block(&else_scope.stmts, indent + 1)?;
                        writeln!(self.out, "{}}}", pad)?;
                    }
                    None => writeln!(self.out, "{}}}", pad)?,
                }
            }
            Stmt::While { condition, scope, .. } => {
                write!(self.out, "{}while ({}) {{\n", pad, self.render_expr(*condition, 0, false))?;
                self.emit_block(&scope.stmts, indent + 1)?;
                writeln!(self.out, "{}}}", pad)?;
            }
            Stmt::Nested(inner) => {
                writeln!(self.out, "{}{{", pad)?;
                self.emit_block(&inner.stmts, indent + 1)?;
                writeln!(self.out, "{}}}", pad)?;
            }
        }
        Ok(())
    }

    /// Renders `id` as it would appear nested inside a construct of
    /// surrounding precedence `ctx_prec`, wrapping it in parentheses if
    /// its own precedence is too low to be emitted bare there.
    ///
    /// `wrap_if_equal` distinguishes the right operand of a binary op from
    /// the left: operators are left-associative, so a left child at the
    /// same precedence nests without parens (`1 - 2 - 3` stays flat), but a
    /// right child at the same precedence only got there through explicit
    /// source grouping (`1 - (2 - 3)`) and must keep its parens or the
    /// emitted C would silently re-associate it.
    fn render_expr(&self, id: ExprId<'src>, ctx_prec: u8, wrap_if_equal: bool) -> String {
        let node: &Expr<'src> = self.arena.get(id);
        let (text, own_prec) = match &node.kind {
            ExprKind::IntLit(n) => (n.to_string(), ATOM_PRECEDENCE),
            ExprKind::BoolLit(b) => ((if *b { "1" } else { "0" }).to_string(), ATOM_PRECEDENCE),
            ExprKind::Ident(name) => (name.to_string(), ATOM_PRECEDENCE),
            ExprKind::Unary { op: UnaryOp::Neg, operand } => {
                let prec = UnaryOp::Neg.precedence();
                let inner = self.render_expr(*operand, prec, false);
                // Guard against "--x": two adjacent minus signs lex in C as
                // the decrement operator, not as nested unary negation.
                let rendered = if inner.starts_with('-') {
                    format!("-({})", inner)
                } else {
                    format!("-{}", inner)
                };
                (rendered, prec)
            }
            ExprKind::Binary { op, left, right } => {
                let prec = op.precedence();
                (
                    format!(
                        "{} {} {}",
                        self.render_expr(*left, prec, false),
                        op.as_str(),
                        self.render_expr(*right, prec, true)
                    ),
                    prec,
                )
            }
        };

        let should_wrap = if wrap_if_equal { own_prec <= ctx_prec } else { own_prec < ctx_prec };
        if should_wrap {
            format!("({})", text)
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_par::Parser;

    fn emit_src(src: &str) -> String {
        let result = Parser::new(src).parse();
        assert!(result.is_ok(), "expected a clean parse: {:?}", result.diagnostics);
        emit(&result.program, &result.arena).expect("emission never fails for a valid AST")
    }

    #[test]
    fn empty_unit_function() {
        let c = emit_src("f :: func () {}");
        assert!(c.contains("void f() {\n}\n"), "{c}");
    }

    #[test]
    fn return_constant() {
        let c = emit_src("f :: func () -> int { return 42; }");
        assert!(c.contains("int f() {\n    return 42;\n}\n"), "{c}");
    }

    #[test]
    fn declaration_and_assignment_keep_precedence_implicit() {
        let c = emit_src(
            "g :: func () -> int { x : int; x = 1 + 2 * 3; return x; }",
        );
        assert!(c.contains("x = 1 + 2 * 3;"), "{c}");
        assert!(c.contains("return x;"), "{c}");
    }

    #[test]
    fn explicit_grouping_forces_parens_when_precedence_would_otherwise_drop_them() {
        let c = emit_src("g :: func () -> int { return (1 + 2) * 3; }");
        assert!(c.contains("return (1 + 2) * 3;"), "{c}");
    }

    #[test]
    fn while_with_equality_condition() {
        let c = emit_src(
            "h :: func () { x : int; x = 0; while x == 10 { x = x + 1; } }",
        );
        assert!(c.contains("while (x == 10) {\n        x = x + 1;\n    }"), "{c}");
    }

    #[test]
    fn chained_unary_minus_is_not_over_parenthesized() {
        let c = emit_src("f :: func () -> int { x : int; x = 3 - -5; return x; }");
        assert!(c.contains("x = 3 - -5;"), "{c}");
    }

    #[test]
    fn if_else_emits_braces_on_the_same_line_as_the_keywords() {
        let c = emit_src(
            "f :: func () { if 1 == 1 { } else { x : int; x = 1; } }",
        );
        assert!(
            c.contains("if (1 == 1) {\n    } else {\n        int x;\n        x = 1;\n    }"),
            "{c}"
        );
    }

    #[test]
    fn explicit_grouping_on_the_right_of_a_non_associative_op_keeps_its_parens() {
        let c = emit_src("g :: func () -> int { return 10 - (2 - 3); }");
        assert!(c.contains("return 10 - (2 - 3);"), "{c}");
    }

    #[test]
    fn main_always_returns_int_even_with_a_unit_declared_return() {
        let c = emit_src("main :: func () { }");
        assert!(c.starts_with("#include <stdbool.h>\n\nint main() {\n}\n"), "{c}");
    }

    #[test]
    fn parameters_are_emitted_as_type_name_pairs() {
        let c = emit_src("add :: func (a: int, b: int) -> int { return a + b; }");
        assert!(c.contains("int add(int a, int b) {"), "{c}");
    }

    #[test]
    fn bool_literals_emit_as_zero_and_one() {
        let c = emit_src("f :: func () -> bool { return true; }");
        assert!(c.contains("return 1;"), "{c}");
    }
}
