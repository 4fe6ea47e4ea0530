//! Free-symbol collection

use rustc_hash::FxHashSet;

use crate::core::{Expr, Symbol};
use crate::visitor::{preorder_traversal, BaseVisitor};

/// Collects every symbol reachable in a tree
#[derive(Debug, Default)]
pub struct FreeSymbolsVisitor {
    symbols: FxHashSet<Symbol>,
}

impl FreeSymbolsVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The symbols of `e` alone
    pub fn apply(&mut self, e: &Expr) -> FxHashSet<Symbol> {
        self.symbols.clear();
        self.collect(e);
        std::mem::take(&mut self.symbols)
    }

    /// Add the symbols of `e` to what has been collected so far
    pub fn collect(&mut self, e: &Expr) {
        preorder_traversal(e, self);
    }

    #[must_use]
    pub fn into_symbols(self) -> FxHashSet<Symbol> {
        self.symbols
    }
}

impl BaseVisitor for FreeSymbolsVisitor {
    fn bvisit_symbol(&mut self, _node: &Expr, x: &Symbol) {
        self.symbols.insert(x.clone());
    }

    fn bvisit_basic(&mut self, _node: &Expr) {}
}

/// Every symbol occurring in `e`
///
/// # Example
/// ```
/// use symb_visit::{free_symbols, symbol, Expr};
///
/// let e = Expr::symbol("x") * Expr::symbol("y").sin() + Expr::symbol("x");
/// let syms = free_symbols(&e);
/// assert_eq!(syms.len(), 2);
/// assert!(syms.contains(&symbol("y")));
/// ```
#[must_use]
pub fn free_symbols(e: &Expr) -> FxHashSet<Symbol> {
    tracing::trace!(type_code = %e.type_code(), "free_symbols");
    FreeSymbolsVisitor::new().apply(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::symbol;

    #[test]
    fn test_collects_and_dedupes() {
        let x = symbol("x");
        let y = symbol("y");
        let e = x.to_expr().pow(y.to_expr()) + x.to_expr().cos() * y.to_expr();
        let syms = free_symbols(&e);
        assert_eq!(syms.len(), 2);
        assert!(syms.contains(&x));
        assert!(syms.contains(&y));
    }

    #[test]
    fn test_numbers_and_constants_have_none() {
        assert!(free_symbols(&Expr::integer(4)).is_empty());
        assert!(free_symbols(&(Expr::pi() + Expr::e())).is_empty());
    }

    #[test]
    fn test_function_arguments() {
        let e = Expr::function_symbol("f", vec![Expr::symbol("a"), Expr::symbol("b").log()]);
        let syms = free_symbols(&e);
        assert_eq!(syms.len(), 2);
        assert!(syms.contains(&symbol("a")));
        assert!(syms.contains(&symbol("b")));
    }

    #[test]
    fn test_collect_accumulates() {
        let mut v = FreeSymbolsVisitor::new();
        v.collect(&Expr::symbol("p"));
        v.collect(&Expr::symbol("q").sin());
        let syms = v.into_symbols();
        assert_eq!(syms.len(), 2);
    }
}
