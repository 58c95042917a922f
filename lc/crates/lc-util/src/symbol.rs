//! Symbol module - string interning for identifiers.
//!
//! A [`Symbol`] is a compact handle to an interned string. Since the
//! compiler is single-threaded end to end (spec §5), the table behind it is
//! a plain `RefCell`-guarded map rather than the concurrent `DashMap` a
//! multi-threaded front-end would need.
//!
//! # Examples
//!
//! ```
//! use lc_util::symbol::Symbol;
//!
//! let a = Symbol::intern("x");
//! let b = Symbol::intern("x");
//! let c = Symbol::intern("y");
//!
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! assert_eq!(a.as_str(), "x");
//! ```

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;

/// An interned string identifier.
///
/// Comparison and hashing are O(1) index operations regardless of the
/// underlying string's length.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Intern `s`, returning a handle that compares equal to every other
    /// handle interned from the same string content.
    pub fn intern(s: &str) -> Self {
        INTERNER.with(|i| i.borrow_mut().intern(s))
    }

    /// Look up the original string. Always succeeds for a `Symbol` obtained
    /// from [`Symbol::intern`].
    pub fn as_str(self) -> &'static str {
        INTERNER.with(|i| i.borrow().get(self))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct Interner {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl Interner {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::new(),
        }
    }

    fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&id) = self.map.get(s) {
            return Symbol(id);
        }

        // Leaked once per unique identifier; bounded by source size, freed
        // when the process exits. Mirrors the arena's compile-lifetime reach.
        let leaked: &'static str = Box::leak(s.to_string().into_boxed_str());
        let id = self.strings.len() as u32;
        self.strings.push(leaked);
        self.map.insert(leaked, id);
        Symbol(id)
    }

    fn get(&self, sym: Symbol) -> &'static str {
        self.strings[sym.0 as usize]
    }
}

thread_local! {
    static INTERNER: RefCell<Interner> = RefCell::new(Interner::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_interns_to_the_same_symbol() {
        assert_eq!(Symbol::intern("foo"), Symbol::intern("foo"));
    }

    #[test]
    fn different_text_interns_to_different_symbols() {
        assert_ne!(Symbol::intern("foo_sym_test"), Symbol::intern("bar_sym_test"));
    }

    #[test]
    fn round_trips_through_as_str() {
        let s = Symbol::intern("round_trip_test");
        assert_eq!(s.as_str(), "round_trip_test");
    }
}
