//! Interned symbols
//!
//! Symbols are interned globally: each unique name exists exactly once in the
//! registry, and every handle to it shares the same key. Equality and hashing
//! go through the key, so comparing two symbols never touches their names.
//!
//! # Example
//! ```
//! use symb_visit::symbol;
//!
//! let x = symbol("doc_example_x");
//! let x2 = symbol("doc_example_x");
//! assert_eq!(x, x2);
//! assert_eq!(x.name(), "doc_example_x");
//! ```

pub mod registry;

pub use registry::symbol;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use slotmap::DefaultKey;

use crate::core::expr::{Expr, ExprKind};

/// An atomic named indeterminate.
///
/// Cloning is cheap (a key plus a shared name). Two symbols are equal exactly
/// when they were interned under the same name.
#[derive(Clone)]
pub struct Symbol {
    key: DefaultKey,
    name: Arc<str>,
}

impl Symbol {
    pub(crate) fn from_parts(key: DefaultKey, name: Arc<str>) -> Self {
        Self { key, name }
    }

    /// Get the symbol's name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wrap this symbol in an expression node
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        Expr::new(ExprKind::Symbol(self.clone()))
    }
}

impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

// Ordered by name so canonical dictionaries iterate the same way in every run,
// independent of interning order.
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.key == other.key {
            return Ordering::Equal;
        }
        self.name
            .cmp(&other.name)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        s.to_expr()
    }
}

impl From<&Symbol> for Expr {
    fn from(s: &Symbol) -> Self {
        s.to_expr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interning_gives_equal_symbols() {
        let a = symbol("sym_test_a");
        let b = symbol("sym_test_a");
        assert_eq!(a, b);
        assert_eq!(a.to_expr(), b.to_expr());
    }

    #[test]
    fn test_distinct_names_distinct_symbols() {
        let a = symbol("sym_test_p");
        let b = symbol("sym_test_q");
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn test_to_expr_roundtrip() {
        let a = symbol("sym_test_r");
        let e = a.to_expr();
        assert_eq!(e.as_symbol(), Some(&a));
    }
}
