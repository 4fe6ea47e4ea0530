//! Operator overloading for ergonomic expression building.
//!
//! Every operator goes through the canonical constructors, so `x + x` is `2*x`
//! and `x * x` is `x^2`. Implemented for owned and borrowed operands.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Expr;

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $ctor:path) => {
        impl $trait<Expr> for Expr {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr {
                $ctor(&self, &rhs)
            }
        }

        impl $trait<&Expr> for Expr {
            type Output = Expr;
            fn $method(self, rhs: &Expr) -> Expr {
                $ctor(&self, rhs)
            }
        }

        impl $trait<Expr> for &Expr {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr {
                $ctor(self, &rhs)
            }
        }

        impl $trait<&Expr> for &Expr {
            type Output = Expr;
            fn $method(self, rhs: &Expr) -> Expr {
                $ctor(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, Expr::add_expr);
impl_binary_op!(Sub, sub, Expr::sub_expr);
impl_binary_op!(Mul, mul, Expr::mul_expr);
impl_binary_op!(Div, div, Expr::div_expr);

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        self.negate()
    }
}

impl Neg for &Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_canonicalize() {
        let x = Expr::symbol("x");
        assert_eq!(&x + &x, Expr::integer(2) * &x);
        assert_eq!(&x * &x, x.pow(2));
        assert!((&x - &x).is_zero());
        assert_eq!(-(-x.clone()), x);
    }
}
