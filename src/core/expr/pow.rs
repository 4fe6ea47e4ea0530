//! Canonical powers.

use std::collections::BTreeMap;

use super::{Expr, ExprKind, Mul};
use crate::core::error::ExprError;

/// `base^exp` for a pair not absorbed into a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pow {
    base: Expr,
    exp: Expr,
}

impl Pow {
    #[inline]
    #[must_use]
    pub fn base(&self) -> &Expr {
        &self.base
    }

    #[inline]
    #[must_use]
    pub fn exp(&self) -> &Expr {
        &self.exp
    }

    /// Wrap without any evaluation. Callers guarantee `exp` is neither zero nor one.
    pub(crate) fn raw(base: Expr, exp: Expr) -> Expr {
        Expr::new(ExprKind::Pow(Self { base, exp }))
    }
}

impl Expr {
    /// Canonical power.
    ///
    /// Evaluates what canonical form requires (`x^0 = 1`, `x^1 = x`, numeric
    /// bases with integer exponents, integer powers of products and of integer
    /// powers). A pole such as `0^-1` is left as an unevaluated power; use
    /// [`Expr::try_pow`] to have it reported.
    #[must_use]
    pub fn pow(&self, exp: impl Into<Self>) -> Self {
        let exp = exp.into();
        match self.try_pow(exp.clone()) {
            Ok(result) => result,
            Err(_) => Pow::raw(self.clone(), exp),
        }
    }

    /// Canonical power, failing on poles
    ///
    /// # Errors
    /// Returns `ExprError::DivisionByZero` when an exact zero is raised to a
    /// negative power.
    pub fn try_pow(&self, exp: impl Into<Self>) -> Result<Self, ExprError> {
        let exp = exp.into();
        if exp.is_zero() {
            return Ok(Self::one());
        }
        if exp.is_one() {
            return Ok(self.clone());
        }

        if let Some(e) = exp.as_number() {
            if self.is_zero() {
                if e.is_negative() {
                    return Err(ExprError::DivisionByZero);
                }
                if e.is_positive() {
                    return Ok(Self::zero());
                }
            }
            if self.is_one() && e.is_exact() {
                return Ok(Self::one());
            }
        }

        let int_exp = exp.as_number().and_then(|n| n.as_i64());
        if let Some(n) = int_exp {
            match self.kind() {
                ExprKind::Number(b) => return b.pow_i64(n).map(Self::number),
                ExprKind::Mul(m) => {
                    let coef = m.coef().pow_i64(n)?;
                    let mut dict = BTreeMap::new();
                    for (base, e) in m.dict() {
                        let scaled = Self::mul_expr(e, &exp);
                        Mul::dict_add_term(&mut dict, scaled, base.clone());
                    }
                    return Ok(Mul::from_dict(coef, dict));
                }
                ExprKind::Pow(p) if p.exp().as_number().and_then(|k| k.as_i64()).is_some() => {
                    let combined = Self::mul_expr(p.exp(), &exp);
                    return p.base().try_pow(combined);
                }
                _ => {}
            }
        }

        Ok(Pow::raw(self.clone(), exp))
    }

    /// `e^self`
    #[must_use]
    pub fn exp(&self) -> Self {
        Self::e().pow(self.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "Standard test relaxations")]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_exponents() {
        let x = Expr::symbol("x");
        assert!(x.pow(0).is_one());
        assert_eq!(x.pow(1), x);
    }

    #[test]
    fn test_numeric_powers_evaluate() {
        assert_eq!(Expr::integer(2).pow(3), Expr::integer(8));
        assert_eq!(Expr::integer(2).pow(-1), Expr::rational(1, 2).unwrap());
    }

    #[test]
    fn test_pole_is_reported_by_try_pow() {
        assert_eq!(Expr::zero().try_pow(-2), Err(ExprError::DivisionByZero));
        assert!(Expr::zero().pow(-2).as_pow().is_some());
        assert!(Expr::zero().pow(3).is_zero());
    }

    #[test]
    fn test_power_of_product_distributes() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let p = (Expr::integer(2) * &x * &y).pow(2);
        let m = p.as_mul().unwrap();
        assert_eq!(*m.coef(), crate::core::number::Number::from(4));
        assert_eq!(m.dict().get(&x), Some(&Expr::integer(2)));
    }

    #[test]
    fn test_power_of_power() {
        let x = Expr::symbol("x");
        assert_eq!(x.pow(2).pow(3), x.pow(6));
    }

    #[test]
    fn test_exp_is_power_of_e() {
        let x = Expr::symbol("x");
        let p = x.exp();
        assert_eq!(*p.as_pow().unwrap().base(), Expr::e());
    }
}
