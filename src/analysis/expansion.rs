//! Expansion-necessity check
//!
//! Decides whether a tree can be expanded directly at `x = 0` or has a
//! subexpression that is singular or branch-sensitive there and needs symbolic
//! case analysis first. Flagged patterns, with `a|₀` meaning `a` at `x = 0`:
//!
//! | Node | Flagged when |
//! |------|--------------|
//! | trigonometric / hyperbolic `f(a)` | `a\|₀ ≠ 0` |
//! | `E^a` | `a\|₀ ≠ 0` |
//! | `b^n`, `n` a negative number | `b\|₀ = 0` |
//! | `log(a)` | `a\|₀ = 0` |
//! | `LambertW(a)` | always |

use crate::core::{
    Constant, Expr, ExprError, ExprKind, HyperbolicFunction, Pow, Symbol, TrigFunction,
};
use crate::visitor::{preorder_traversal_stop, BaseVisitor, StopVisitor};

/// Stops at the first node that needs symbolic expansion
#[derive(Debug)]
pub struct NeedsSymbolicExpansionVisitor<'a> {
    x: &'a Symbol,
    needs: bool,
    error: Option<ExprError>,
}

impl<'a> NeedsSymbolicExpansionVisitor<'a> {
    #[must_use]
    pub fn new(x: &'a Symbol) -> Self {
        Self {
            x,
            needs: false,
            error: None,
        }
    }

    /// Whether `e` needs symbolic expansion at `x = 0`
    ///
    /// # Errors
    /// Returns the substitution error if evaluating some subexpression at
    /// `x = 0` fails (a pole such as `0^-1` inside a function argument).
    pub fn apply(&mut self, e: &Expr) -> Result<bool, ExprError> {
        self.needs = false;
        self.error = None;
        preorder_traversal_stop(e, self);
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(self.needs),
        }
    }

    /// `a` with `x := 0`; a failure is recorded and ends the traversal
    fn at_zero(&mut self, a: &Expr) -> Option<Expr> {
        match a.subs_symbol(self.x, &Expr::zero()) {
            Ok(v) => Some(v),
            Err(err) => {
                tracing::debug!(symbol = %self.x, error = %err, "substitution at zero failed");
                self.error = Some(err);
                None
            }
        }
    }

    fn flag_if_nonzero_at_zero(&mut self, arg: &Expr) {
        if let Some(v) = self.at_zero(arg) {
            if !v.is_zero() {
                self.needs = true;
            }
        }
    }
}

impl BaseVisitor for NeedsSymbolicExpansionVisitor<'_> {
    fn bvisit_trig_function(&mut self, _node: &Expr, f: &TrigFunction) {
        self.flag_if_nonzero_at_zero(f.arg());
    }

    fn bvisit_hyperbolic_function(&mut self, _node: &Expr, f: &HyperbolicFunction) {
        self.flag_if_nonzero_at_zero(f.arg());
    }

    fn bvisit_pow(&mut self, _node: &Expr, pow: &Pow) {
        if matches!(pow.base().kind(), ExprKind::Constant(Constant::E)) {
            // exp(a) with a not vanishing at the expansion point
            self.flag_if_nonzero_at_zero(pow.exp());
        } else if pow.exp().as_number().is_some_and(|n| n.is_negative()) {
            // pole b^-n with b vanishing at the expansion point
            if let Some(b) = self.at_zero(pow.base()) {
                if b.is_zero() {
                    self.needs = true;
                }
            }
        }
    }

    fn bvisit_log(&mut self, _node: &Expr, arg: &Expr) {
        if let Some(v) = self.at_zero(arg) {
            if v.is_zero() {
                self.needs = true;
            }
        }
    }

    fn bvisit_lambertw(&mut self, _node: &Expr, _arg: &Expr) {
        self.needs = true;
    }

    fn bvisit_basic(&mut self, _node: &Expr) {}
}

impl StopVisitor for NeedsSymbolicExpansionVisitor<'_> {
    fn stop(&self) -> bool {
        self.needs || self.error.is_some()
    }
}

/// Whether `e` needs symbolic case analysis before expanding at `x = 0`
///
/// # Errors
/// Propagates the substitution error when evaluating a subexpression at
/// `x = 0` hits a pole.
///
/// # Example
/// ```
/// use symb_visit::{needs_symbolic_expansion, symbol, Expr};
///
/// let x = symbol("x");
/// assert!(!needs_symbolic_expansion(&x.to_expr().sin(), &x).unwrap());
/// assert!(needs_symbolic_expansion(&x.to_expr().log(), &x).unwrap());
/// ```
pub fn needs_symbolic_expansion(e: &Expr, x: &Symbol) -> Result<bool, ExprError> {
    tracing::trace!(symbol = %x, type_code = %e.type_code(), "needs_symbolic_expansion");
    NeedsSymbolicExpansionVisitor::new(x).apply(e)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Standard test relaxations")]
mod tests {
    use super::*;
    use crate::core::symbol;

    fn needs(e: &Expr, x: &Symbol) -> bool {
        needs_symbolic_expansion(e, x).unwrap()
    }

    #[test]
    fn test_trig_argument_at_zero() {
        let x = symbol("x");
        let xe = x.to_expr();
        assert!(!needs(&xe.sin(), &x));
        assert!(needs(&(&xe + Expr::one()).sin(), &x));
        assert!(!needs(&xe.cos(), &x));
        assert!(needs(&(Expr::integer(2) + &xe).atan(), &x));
    }

    #[test]
    fn test_hyperbolic_argument_at_zero() {
        let x = symbol("x");
        let xe = x.to_expr();
        assert!(!needs(&(Expr::integer(3) * &xe).sinh(), &x));
        assert!(needs(&(&xe - Expr::one()).cosh(), &x));
    }

    #[test]
    fn test_exponential() {
        let x = symbol("x");
        let xe = x.to_expr();
        assert!(!needs(&xe.exp(), &x));
        assert!(needs(&(&xe + Expr::one()).exp(), &x));
        // exp of a constant exponent is still flagged
        assert!(needs(&Expr::symbol("y").exp(), &x));
        // E^-n: the base never vanishes, the exponent is nonzero
        assert!(needs(&Expr::e().pow(-1), &x));
        assert!(needs(&Expr::e().pow(Expr::rational(-1, 2).unwrap()), &x));
        assert!(!needs(&(-&xe).exp(), &x));
    }

    #[test]
    fn test_pole() {
        let x = symbol("x");
        let xe = x.to_expr();
        assert!(needs(&xe.pow(-1), &x));
        assert!(needs(&(Expr::integer(2) / &xe), &x));
        assert!(!needs(&(&xe + Expr::one()).pow(-2), &x));
        // Positive exponents are regular
        assert!(!needs(&xe.pow(3), &x));

        let minus_half = Expr::rational(-1, 2).unwrap();
        assert!(needs(&xe.pow(&minus_half), &x));
        assert!(!needs(&(&xe + Expr::one()).pow(&minus_half), &x));
        assert!(!needs(&xe.pow(Expr::rational(1, 2).unwrap()), &x));

        let minus_three_halves = Expr::real_double(-1.5);
        assert!(needs(&xe.pow(&minus_three_halves), &x));
        assert!(!needs(&(&xe + Expr::integer(2)).pow(&minus_three_halves), &x));
    }

    #[test]
    fn test_log() {
        let x = symbol("x");
        let xe = x.to_expr();
        assert!(needs(&xe.log(), &x));
        assert!(!needs(&(&xe + Expr::one()).log(), &x));
    }

    #[test]
    fn test_lambertw_always_flags() {
        let x = symbol("x");
        let xe = x.to_expr();
        assert!(needs(&xe.lambertw(), &x));
        assert!(needs(&Expr::symbol("y").lambertw(), &x));
        assert!(needs(&(&xe + Expr::integer(5)).lambertw(), &x));
    }

    #[test]
    fn test_polynomial_is_regular() {
        let x = symbol("x");
        let xe = x.to_expr();
        let e = Expr::integer(3) * xe.pow(2) + &xe + Expr::integer(1);
        assert!(!needs(&e, &x));
    }

    #[test]
    fn test_nested_flag_found() {
        let x = symbol("x");
        let xe = x.to_expr();
        let e = xe.pow(2) * xe.log().gamma();
        assert!(needs(&e, &x));
    }

    #[test]
    fn test_substitution_failure_propagates() {
        // sin(1/x) cannot be evaluated at x = 0
        let x = symbol("x");
        let e = (Expr::one() / x.to_expr()).sin();
        assert_eq!(
            needs_symbolic_expansion(&e, &x),
            Err(ExprError::DivisionByZero)
        );
    }

    #[test]
    fn test_visitor_resets_between_runs() {
        let x = symbol("x");
        let mut v = NeedsSymbolicExpansionVisitor::new(&x);
        assert!(v.apply(&x.to_expr().log()).unwrap());
        assert!(!v.apply(&x.to_expr().sin()).unwrap());
        assert!(v.apply(&(Expr::one() / x.to_expr()).sin()).is_err());
        assert!(!v.apply(&x.to_expr()).unwrap());
    }
}
