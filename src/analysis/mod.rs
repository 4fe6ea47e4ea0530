//! Analyses built on the dispatch framework
//!
//! - [`has_symbol`]: stoppable preorder search for one symbol
//! - [`coeff`]: coefficient of `x^n` by explicit structural recursion
//! - [`needs_symbolic_expansion`]: stoppable check for singular or
//!   branch-sensitive subexpressions at `x = 0`
//! - [`free_symbols`]: full preorder collection of symbols
//!
//! Each analysis owns its accumulator; the visitor types are public so other
//! passes can reuse them.

mod coeff;
mod expansion;
mod free_symbols;
mod has_symbol;

pub use coeff::{coeff, coeff_of, CoeffVisitor};
pub use expansion::{needs_symbolic_expansion, NeedsSymbolicExpansionVisitor};
pub use free_symbols::{free_symbols, FreeSymbolsVisitor};
pub use has_symbol::{has_symbol, HasSymbolVisitor};

use rustc_hash::FxHashSet;

use crate::core::{Expr, Symbol};

impl Expr {
    /// Whether `x` occurs in this expression
    #[inline]
    #[must_use]
    pub fn has_symbol(&self, x: &Symbol) -> bool {
        has_symbol(self, x)
    }

    /// Coefficient of `x^n` in this expression
    #[inline]
    #[must_use]
    pub fn coeff(&self, x: &Symbol, n: &Self) -> Self {
        coeff(self, x, n)
    }

    /// Every symbol occurring in this expression
    #[inline]
    #[must_use]
    pub fn free_symbols(&self) -> FxHashSet<Symbol> {
        free_symbols(self)
    }
}
