//! Semantic analysis: symbol table construction, name resolution, and type
//! checking. Each pass fully completes (and its diagnostics are flushed)
//! before the next runs, so every pass sees a stable AST and — from the
//! second pass on — a stable, read-only symbol table.

mod builder;
mod resolver;
mod scope;
mod typeck;

pub use builder::{build_symbol_table, BuildResult};
pub use resolver::{resolve, ResolveResult};
pub use scope::SymbolTable;
pub use typeck::{typecheck, TypeckResult};

use lc_par::{ExprArena, Program};
use lc_util::Diagnostic;

/// Run the builder, resolver, and type checker in sequence, stopping at
/// the first pass that reports any diagnostic.
pub fn analyze<'src>(program: &Program<'src>, arena: &ExprArena<'src>) -> AnalysisResult<'src> {
    let built = build_symbol_table(program);
    if !built.diagnostics.is_empty() {
        return AnalysisResult {
            diagnostics: built.diagnostics,
            table: built.table,
        };
    }

    let resolved = resolve(program, arena, &built.table);
    if !resolved.diagnostics.is_empty() {
        return AnalysisResult {
            diagnostics: resolved.diagnostics,
            table: built.table,
        };
    }

    let checked = typecheck(program, arena, &built.table);
    AnalysisResult {
        diagnostics: checked.diagnostics,
        table: built.table,
    }
}

pub struct AnalysisResult<'src> {
    pub diagnostics: Vec<Diagnostic<'src>>,
    pub table: SymbolTable,
}

impl<'src> AnalysisResult<'src> {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
