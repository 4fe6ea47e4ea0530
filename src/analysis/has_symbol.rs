//! Symbol presence query

use crate::core::{Expr, Symbol};
use crate::visitor::{preorder_traversal_stop, BaseVisitor, StopVisitor};

/// Stops at the first occurrence of its target symbol
#[derive(Debug)]
pub struct HasSymbolVisitor<'a> {
    x: &'a Symbol,
    found: bool,
}

impl<'a> HasSymbolVisitor<'a> {
    #[must_use]
    pub fn new(x: &'a Symbol) -> Self {
        Self { x, found: false }
    }

    /// Whether the target occurs anywhere in `e`
    pub fn apply(&mut self, e: &Expr) -> bool {
        self.found = false;
        preorder_traversal_stop(e, self);
        self.found
    }
}

impl BaseVisitor for HasSymbolVisitor<'_> {
    fn bvisit_symbol(&mut self, _node: &Expr, x: &Symbol) {
        if x == self.x {
            self.found = true;
        }
    }

    fn bvisit_basic(&mut self, _node: &Expr) {}
}

impl StopVisitor for HasSymbolVisitor<'_> {
    fn stop(&self) -> bool {
        self.found
    }
}

/// Whether `x` occurs anywhere in `e`
///
/// # Example
/// ```
/// use symb_visit::{has_symbol, symbol, Expr};
///
/// let x = symbol("x");
/// let e = x.to_expr().sin() + Expr::symbol("y");
/// assert!(has_symbol(&e, &x));
/// assert!(!has_symbol(&e, &symbol("z")));
/// ```
#[must_use]
pub fn has_symbol(e: &Expr, x: &Symbol) -> bool {
    tracing::trace!(symbol = %x, type_code = %e.type_code(), "has_symbol");
    HasSymbolVisitor::new(x).apply(e)
}
