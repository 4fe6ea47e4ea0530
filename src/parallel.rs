//! Parallel batch analyses using Rayon
//!
//! Trees are immutable and shared, so any number of analyses may read them at
//! once. Every task builds its own visitor; no accumulator is shared between
//! threads. Results come back in input order.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! symb_visit = { version = "0.1", features = ["parallel"] }
//! ```

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::analysis::{coeff, free_symbols, has_symbol, needs_symbolic_expansion};
use crate::core::{Expr, ExprError, Symbol};

/// Free symbols of each tree
#[must_use]
pub fn free_symbols_batch(exprs: &[Expr]) -> Vec<FxHashSet<Symbol>> {
    exprs.par_iter().map(free_symbols).collect()
}

/// Presence of each symbol in one shared tree
///
/// # Example
/// ```ignore
/// use symb_visit::parallel::has_symbol_batch;
/// use symb_visit::{symbol, Expr};
///
/// let e = Expr::symbol("x") + Expr::symbol("y");
/// let found = has_symbol_batch(&e, &[symbol("x"), symbol("z")]);
/// assert_eq!(found, vec![true, false]);
/// ```
#[must_use]
pub fn has_symbol_batch(e: &Expr, symbols: &[Symbol]) -> Vec<bool> {
    symbols.par_iter().map(|x| has_symbol(e, x)).collect()
}

/// Coefficient of `x^n` in each tree
#[must_use]
pub fn coeff_batch(exprs: &[Expr], x: &Symbol, n: &Expr) -> Vec<Expr> {
    exprs.par_iter().map(|e| coeff(e, x, n)).collect()
}

/// Expansion check of each tree at `x = 0`
///
/// Each entry carries its own result; one failing tree does not affect the
/// others.
#[must_use]
pub fn needs_symbolic_expansion_batch(exprs: &[Expr], x: &Symbol) -> Vec<Result<bool, ExprError>> {
    exprs
        .par_iter()
        .map(|e| needs_symbolic_expansion(e, x))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Standard test relaxations")]
mod tests {
    use super::*;
    use crate::core::symbol;

    fn trees() -> Vec<Expr> {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        vec![
            &x + &y,
            Expr::integer(3) * x.pow(2) * &y,
            x.log(),
            (Expr::one() / &x).sin(),
            Expr::integer(7),
        ]
    }

    #[test]
    fn test_batches_match_sequential() {
        let x = symbol("x");
        let two = Expr::integer(2);
        let es = trees();

        let syms = free_symbols_batch(&es);
        let coeffs = coeff_batch(&es, &x, &two);
        let needs = needs_symbolic_expansion_batch(&es, &x);
        for (i, e) in es.iter().enumerate() {
            assert_eq!(syms[i], free_symbols(e));
            assert_eq!(coeffs[i], coeff(e, &x, &two));
            assert_eq!(needs[i], needs_symbolic_expansion(e, &x));
        }
    }

    #[test]
    fn test_failures_stay_per_entry() {
        let x = symbol("x");
        let needs = needs_symbolic_expansion_batch(&trees(), &x);
        assert_eq!(needs[2], Ok(true));
        assert_eq!(needs[3], Err(ExprError::DivisionByZero));
        assert_eq!(needs[4], Ok(false));
    }

    #[test]
    fn test_one_tree_many_symbols() {
        let e = Expr::symbol("x") * Expr::symbol("y").cos();
        let found = has_symbol_batch(&e, &[symbol("x"), symbol("y"), symbol("z")]);
        assert_eq!(found, vec![true, true, false]);
    }
}
