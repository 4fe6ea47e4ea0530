//! Structural children of a node.

use super::{Expr, ExprKind, Mul, Pow};

impl Expr {
    /// The node's structural children, in the order every traversal visits them.
    ///
    /// - `Add`: the constant (when nonzero), then `coef*term` per entry (`term`
    ///   alone when the coefficient is one), in dictionary order
    /// - `Mul`: the coefficient (when not the exact one), then `base^exp` per entry (`base`
    ///   alone when the exponent is one), in dictionary order
    /// - `Pow`: base, then exponent
    /// - functions: their arguments in positional order
    /// - `Derivative`: the differentiated expression, then its symbols
    /// - series: the series variable, then the coefficients
    ///
    /// The series variable is a child, so `free_symbols` and `has_symbol` report
    /// it, while [`Expr::subs`] treats it as bound and leaves the series alone.
    ///
    /// Sums and products are presented through their summands and factors so a
    /// power absorbed into a product (`x^-1` in `2/x`) is still seen as a power.
    #[must_use]
    pub fn args(&self) -> Vec<Self> {
        match self.kind() {
            ExprKind::Number(_) | ExprKind::Constant(_) | ExprKind::Symbol(_) => Vec::new(),
            ExprKind::Add(add) => {
                let mut args = Vec::with_capacity(add.dict().len() + 1);
                if !add.coef().is_zero() {
                    args.push(Self::number(add.coef().clone()));
                }
                for (term, c) in add.dict() {
                    if c.is_one() {
                        args.push(term.clone());
                    } else {
                        args.push(Mul::from_number_and_term(c.clone(), term));
                    }
                }
                args
            }
            ExprKind::Mul(mul) => {
                let mut args = Vec::with_capacity(mul.dict().len() + 1);
                if !mul.coef().is_one() {
                    args.push(Self::number(mul.coef().clone()));
                }
                for (base, exp) in mul.dict() {
                    if exp.is_one() {
                        args.push(base.clone());
                    } else {
                        args.push(Pow::raw(base.clone(), exp.clone()));
                    }
                }
                args
            }
            ExprKind::Pow(p) => vec![p.base().clone(), p.exp().clone()],
            ExprKind::Trig(f) => vec![f.arg().clone()],
            ExprKind::Hyperbolic(f) => vec![f.arg().clone()],
            ExprKind::Log(a)
            | ExprKind::LambertW(a)
            | ExprKind::Abs(a)
            | ExprKind::Gamma(a)
            | ExprKind::DirichletEta(a) => vec![a.clone()],
            ExprKind::LowerGamma(a, b)
            | ExprKind::UpperGamma(a, b)
            | ExprKind::Zeta(a, b)
            | ExprKind::KroneckerDelta(a, b) => vec![a.clone(), b.clone()],
            ExprKind::FunctionSymbol(f) => f.args().to_vec(),
            ExprKind::Derivative(d) => std::iter::once(d.arg().clone())
                .chain(d.symbols().iter().map(|s| s.to_expr()))
                .collect(),
            ExprKind::Series(s) => std::iter::once(s.var().to_expr())
                .chain(s.coeffs().iter().cloned())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_children() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let s = Expr::integer(1) + Expr::integer(2) * &x + &y;
        let args = s.args();
        assert_eq!(args.len(), 3);
        assert_eq!(args[0], Expr::integer(1));
        assert!(args.contains(&(Expr::integer(2) * &x)));
        assert!(args.contains(&y));
    }

    #[test]
    fn test_product_children_expose_powers() {
        let x = Expr::symbol("x");
        let q = Expr::integer(2) / &x;
        let args = q.args();
        assert_eq!(args[0], Expr::integer(2));
        assert_eq!(args[1], x.pow(-1));
        assert!(args[1].as_pow().is_some());
    }

    #[test]
    fn test_leaf_has_no_children() {
        assert!(Expr::symbol("x").args().is_empty());
        assert!(Expr::integer(4).args().is_empty());
        assert!(Expr::pi().args().is_empty());
    }
}
