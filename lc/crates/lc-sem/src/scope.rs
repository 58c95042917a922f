//! The symbol table: two flat mappings rather than a tree of owned scope
//! objects, closely mirroring a rib-chain resolver's bindings-plus-parent
//! shape but keyed directly by the parser's pre-assigned [`ScopeId`]s
//! instead of allocating its own.

use lc_par::{ScopeId, Type};
use lc_util::Symbol;
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct SymbolTable {
    symbols: FxHashMap<(ScopeId, Symbol), Type>,
    parent: FxHashMap<ScopeId, Option<ScopeId>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_parent(&mut self, scope: ScopeId, parent: Option<ScopeId>) {
        self.parent.insert(scope, parent);
    }

    /// Record `(scope, name) -> ty`. Returns `false` if the binding already
    /// existed (a duplicate declaration); the existing type is left intact.
    pub fn declare(&mut self, scope: ScopeId, name: Symbol, ty: Type) -> bool {
        if self.symbols.contains_key(&(scope, name)) {
            return false;
        }
        self.symbols.insert((scope, name), ty);
        true
    }

    /// Resolve `name` starting at `scope` and walking parent links.
    pub fn lookup(&self, scope: ScopeId, name: Symbol) -> Option<Type> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(&ty) = self.symbols.get(&(id, name)) {
                return Some(ty);
            }
            current = *self.parent.get(&id).unwrap_or(&None);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_up_through_parent_scopes() {
        let mut table = SymbolTable::new();
        let outer = ScopeId(0);
        let inner = ScopeId(1);
        table.set_parent(outer, None);
        table.set_parent(inner, Some(outer));
        table.declare(outer, Symbol::intern("x"), Type::Int);

        assert_eq!(table.lookup(inner, Symbol::intern("x")), Some(Type::Int));
    }

    #[test]
    fn duplicate_declaration_in_same_scope_is_rejected() {
        let mut table = SymbolTable::new();
        let scope = ScopeId(0);
        table.set_parent(scope, None);
        assert!(table.declare(scope, Symbol::intern("x"), Type::Int));
        assert!(!table.declare(scope, Symbol::intern("x"), Type::Bool));
    }

    #[test]
    fn unresolved_name_returns_none() {
        let table = SymbolTable::new();
        assert_eq!(table.lookup(ScopeId(0), Symbol::intern("missing")), None);
    }
}
