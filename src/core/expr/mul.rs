//! Canonical products.

use std::collections::BTreeMap;

use num_traits::One;

use super::{Expr, ExprKind, Pow};
use crate::core::error::ExprError;
use crate::core::number::Number;

/// Canonical product: `coef * Π base^dict[base]`.
///
/// Invariants, established by [`Mul::from_dict`]:
/// - no exponent is zero
/// - no base is a number raised to an integer (those fold into `coef`)
/// - `coef` is never zero and the node has at least two factors
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mul {
    coef: Number,
    dict: BTreeMap<Expr, Expr>,
}

impl Mul {
    /// The numeric coefficient
    #[inline]
    #[must_use]
    pub fn coef(&self) -> &Number {
        &self.coef
    }

    /// Base to exponent
    #[inline]
    #[must_use]
    pub fn dict(&self) -> &BTreeMap<Expr, Expr> {
        &self.dict
    }

    /// Build the canonical expression for `coef * Π dict`.
    ///
    /// Collapses to a number when `coef` is zero or `dict` is empty, and to the
    /// lone factor (`base` or `base^exp`) when `coef` is one.
    #[must_use]
    pub fn from_dict(coef: Number, dict: BTreeMap<Expr, Expr>) -> Expr {
        if coef.is_zero() || dict.is_empty() {
            return Expr::number(coef);
        }
        if dict.len() == 1 && coef.is_one() {
            if let Some((base, exp)) = dict.into_iter().next() {
                return if exp.is_one() {
                    base
                } else {
                    Pow::raw(base, exp)
                };
            }
            return Expr::number(coef);
        }
        Expr::new(ExprKind::Mul(Self { coef, dict }))
    }

    /// `c * term` for a number `c`, keeping `term`'s structure when it is a product
    #[must_use]
    pub fn from_number_and_term(c: Number, term: &Expr) -> Expr {
        Self::product([&Expr::number(c), term])
    }

    /// Multiply `base^exp` into `dict`. Exponents that cancel to zero remove the entry.
    pub fn dict_add_term(dict: &mut BTreeMap<Expr, Expr>, exp: Expr, base: Expr) {
        if exp.is_zero() {
            return;
        }
        match dict.get(&base) {
            Some(existing) => {
                let updated = Expr::add_expr(existing, &exp);
                if updated.is_zero() {
                    dict.remove(&base);
                } else {
                    dict.insert(base, updated);
                }
            }
            None => {
                dict.insert(base, exp);
            }
        }
    }

    /// Multiply an arbitrary `factor` into the pair `(coef, dict)`.
    pub fn coef_dict_mul_term(coef: &mut Number, dict: &mut BTreeMap<Expr, Expr>, factor: &Expr) {
        match factor.kind() {
            ExprKind::Number(n) => {
                *coef = coef.mul_num(n);
            }
            ExprKind::Mul(mul) => {
                *coef = coef.mul_num(&mul.coef);
                for (base, exp) in &mul.dict {
                    Self::dict_add_term(dict, exp.clone(), base.clone());
                }
            }
            ExprKind::Pow(pow) => {
                Self::dict_add_term(dict, pow.exp().clone(), pow.base().clone());
            }
            _ => Self::dict_add_term(dict, Expr::one(), factor.clone()),
        }
    }

    /// Fold numeric bases with integer exponents into the coefficient.
    /// Poles (`0^negative`) stay in the dictionary unevaluated.
    fn fold_numeric_bases(coef: &mut Number, dict: &mut BTreeMap<Expr, Expr>) {
        let foldable: Vec<(Expr, Number)> = dict
            .iter()
            .filter_map(|(base, exp)| {
                let n = base.as_number()?;
                let e = exp.as_number()?.as_i64()?;
                n.pow_i64(e).ok().map(|value| (base.clone(), value))
            })
            .collect();
        for (base, value) in foldable {
            dict.remove(&base);
            *coef = coef.mul_num(&value);
        }
    }

    fn product<'a>(factors: impl IntoIterator<Item = &'a Expr>) -> Expr {
        let mut coef = Number::one();
        let mut dict = BTreeMap::new();
        for factor in factors {
            Self::coef_dict_mul_term(&mut coef, &mut dict, factor);
        }
        Self::fold_numeric_bases(&mut coef, &mut dict);
        Self::from_dict(coef, dict)
    }
}

impl Expr {
    /// Canonical product of two expressions
    #[must_use]
    pub fn mul_expr(left: &Self, right: &Self) -> Self {
        Mul::product([left, right])
    }

    /// Canonical product of any number of expressions
    #[must_use]
    pub fn product<'a>(factors: impl IntoIterator<Item = &'a Self>) -> Self {
        Mul::product(factors)
    }

    /// Canonical quotient `left * right^-1`.
    ///
    /// Division by an exact zero is left unevaluated; use [`Expr::try_div_expr`]
    /// to have it reported.
    #[must_use]
    pub fn div_expr(left: &Self, right: &Self) -> Self {
        Mul::product([left, &right.pow(Self::minus_one())])
    }

    /// Canonical quotient, failing on an exact zero divisor
    ///
    /// # Errors
    /// Returns `ExprError::DivisionByZero` if `right` is an exact zero.
    pub fn try_div_expr(left: &Self, right: &Self) -> Result<Self, ExprError> {
        let inverse = right.try_pow(Self::minus_one())?;
        Ok(Mul::product([left, &inverse]))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "Standard test relaxations")]
mod tests {
    use super::*;

    #[test]
    fn test_powers_of_same_base_combine() {
        let x = Expr::symbol("x");
        let x2 = Expr::mul_expr(&x, &x);
        let p = x2.as_pow().expect("x*x should be x^2");
        assert_eq!(*p.base(), x);
        assert_eq!(*p.exp(), Expr::integer(2));
    }

    #[test]
    fn test_coefficient_kept_apart() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let t = Expr::product([&Expr::integer(3), &x, &x, &y]);
        let m = t.as_mul().unwrap();
        assert_eq!(*m.coef(), Number::from(3));
        assert_eq!(m.dict().get(&x), Some(&Expr::integer(2)));
        assert_eq!(m.dict().get(&y), Some(&Expr::integer(1)));
    }

    #[test]
    fn test_inexact_unit_coefficient_is_kept() {
        let x = Expr::symbol("x");
        let t = Expr::real_double(1.0) * &x;
        assert_ne!(t, x);
        assert_eq!(*t.as_mul().unwrap().coef(), Number::from(1.0));
        // and it is still presented as a child
        assert_eq!(t.args(), vec![Expr::real_double(1.0), x]);
    }

    #[test]
    fn test_inverse_cancels() {
        let x = Expr::symbol("x");
        assert!(Expr::div_expr(&x, &x).is_one());
    }

    #[test]
    fn test_zero_annihilates() {
        let x = Expr::symbol("x");
        assert!(Expr::mul_expr(&Expr::zero(), &x).is_zero());
    }

    #[test]
    fn test_division_by_zero() {
        let x = Expr::symbol("x");
        assert_eq!(
            Expr::try_div_expr(&x, &Expr::zero()),
            Err(ExprError::DivisionByZero)
        );
        // The infallible form keeps the pole as a power node
        let q = Expr::div_expr(&Expr::one(), &Expr::zero());
        assert!(q.as_pow().is_some());
    }
}
