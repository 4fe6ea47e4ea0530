//! Coefficient extraction from canonical sums, products and powers
//!
//! Recursion is explicit: each handler descends only into the substructure it
//! needs, so no traversal driver is involved. Everything that is not a sum,
//! product, power or symbol has coefficient zero, including for `n = 0`:
//! `coeff(5, x, 0)` is `0`, not `5`.

use std::collections::BTreeMap;

use crate::core::{Add, Expr, ExprError, Mul, Number, Pow, Symbol};
use crate::visitor::BaseVisitor;

/// Computes the coefficient of `x^n`
#[derive(Debug)]
pub struct CoeffVisitor<'a> {
    x: Expr,
    n: &'a Expr,
    result: Expr,
}

impl<'a> CoeffVisitor<'a> {
    #[must_use]
    pub fn new(x: &Symbol, n: &'a Expr) -> Self {
        Self {
            x: x.to_expr(),
            n,
            result: Expr::zero(),
        }
    }

    /// Coefficient of `x^n` in `e`
    pub fn apply(&mut self, e: &Expr) -> Expr {
        e.accept(self);
        std::mem::replace(&mut self.result, Expr::zero())
    }
}

impl BaseVisitor for CoeffVisitor<'_> {
    fn bvisit_add(&mut self, _node: &Expr, add: &Add) {
        let mut coef = Number::integer(0);
        let mut dict = BTreeMap::new();
        for (term, c) in add.dict() {
            let inner = self.apply(term);
            if !inner.is_zero() {
                Add::coef_dict_add_term(&mut coef, &mut dict, c, &inner);
            }
        }
        self.result = Add::from_dict(coef, dict);
    }

    fn bvisit_mul(&mut self, _node: &Expr, mul: &Mul) {
        let matched = mul
            .dict()
            .iter()
            .any(|(base, exp)| *base == self.x && exp == self.n);
        self.result = if matched {
            let mut rest = mul.dict().clone();
            rest.remove(&self.x);
            Mul::from_dict(mul.coef().clone(), rest)
        } else {
            Expr::zero()
        };
    }

    fn bvisit_pow(&mut self, _node: &Expr, pow: &Pow) {
        self.result = if *pow.base() == self.x && pow.exp() == self.n {
            Expr::one()
        } else {
            Expr::zero()
        };
    }

    fn bvisit_symbol(&mut self, node: &Expr, _x: &Symbol) {
        self.result = if *node == self.x && self.n.is_one() {
            Expr::one()
        } else {
            Expr::zero()
        };
    }

    fn bvisit_basic(&mut self, _node: &Expr) {
        self.result = Expr::zero();
    }
}

/// Coefficient of `x^n` in the canonical expression `e`
///
/// # Example
/// ```
/// use symb_visit::{coeff, symbol, Expr};
///
/// let x = symbol("x");
/// let y = Expr::symbol("y");
/// let e = Expr::integer(3) * x.to_expr().pow(2) * &y;
/// assert_eq!(coeff(&e, &x, &Expr::integer(2)), Expr::integer(3) * &y);
/// assert!(coeff(&e, &x, &Expr::integer(1)).is_zero());
/// ```
#[must_use]
pub fn coeff(e: &Expr, x: &Symbol, n: &Expr) -> Expr {
    tracing::trace!(symbol = %x, power = ?n, type_code = %e.type_code(), "coeff");
    CoeffVisitor::new(x, n).apply(e)
}

/// [`coeff`] with the variable given as an expression
///
/// # Errors
/// Returns `ExprError::NotASymbol` if `x` is not a symbol node.
pub fn coeff_of(e: &Expr, x: &Expr, n: &Expr) -> Result<Expr, ExprError> {
    let sym = x
        .as_symbol()
        .ok_or_else(|| ExprError::NotASymbol(format!("{x:?}")))?;
    Ok(coeff(e, sym, n))
}
