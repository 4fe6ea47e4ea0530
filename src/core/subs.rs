//! Substitution of symbols by expressions.
//!
//! The result is rebuilt through the canonical constructors, so substituting
//! `x := 0` into `x + 1` yields the number `1`, not a sum with a zero term.
//! Evaluating a pole on the way (`0^-1`) is an error rather than a silently
//! unevaluated node.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use super::error::ExprError;
use super::expr::{Add, Expr, ExprKind, HyperbolicFunction, TrigFunction};
use super::symbol::Symbol;

/// Symbol to replacement
pub type SubsMap = FxHashMap<Symbol, Expr>;

impl Expr {
    /// Replace every occurrence of the map's symbols
    ///
    /// # Errors
    /// Returns `ExprError::DivisionByZero` if rebuilding evaluates a pole.
    pub fn subs(&self, map: &SubsMap) -> Result<Self, ExprError> {
        if map.is_empty() {
            return Ok(self.clone());
        }
        subs_rec(self, map)
    }

    /// Replace one symbol
    ///
    /// # Errors
    /// Returns `ExprError::DivisionByZero` if rebuilding evaluates a pole.
    pub fn subs_symbol(&self, x: &Symbol, value: &Self) -> Result<Self, ExprError> {
        let mut map = SubsMap::default();
        map.insert(x.clone(), value.clone());
        self.subs(&map)
    }
}

fn subs_rec(e: &Expr, map: &SubsMap) -> Result<Expr, ExprError> {
    let sub = |a: &Expr| subs_rec(a, map);
    Ok(match e.kind() {
        ExprKind::Symbol(s) => map.get(s).cloned().unwrap_or_else(|| e.clone()),
        ExprKind::Number(_) | ExprKind::Constant(_) => e.clone(),
        ExprKind::Add(add) => {
            let mut coef = add.coef().clone();
            let mut dict = BTreeMap::new();
            for (term, c) in add.dict() {
                Add::coef_dict_add_term(&mut coef, &mut dict, c, &sub(term)?);
            }
            Add::from_dict(coef, dict)
        }
        ExprKind::Mul(mul) => {
            let mut factors = Vec::with_capacity(mul.dict().len() + 1);
            factors.push(Expr::number(mul.coef().clone()));
            for (base, exp) in mul.dict() {
                factors.push(sub(base)?.try_pow(sub(exp)?)?);
            }
            Expr::product(&factors)
        }
        ExprKind::Pow(p) => sub(p.base())?.try_pow(sub(p.exp())?)?,
        ExprKind::Trig(f) => TrigFunction::apply(f.kind(), sub(f.arg())?),
        ExprKind::Hyperbolic(f) => HyperbolicFunction::apply(f.kind(), sub(f.arg())?),
        ExprKind::Log(a) => sub(a)?.log(),
        ExprKind::LambertW(a) => sub(a)?.lambertw(),
        ExprKind::Abs(a) => sub(a)?.abs(),
        ExprKind::Gamma(a) => sub(a)?.gamma(),
        ExprKind::LowerGamma(s, x) => Expr::lower_gamma(&sub(s)?, &sub(x)?),
        ExprKind::UpperGamma(s, x) => Expr::upper_gamma(&sub(s)?, &sub(x)?),
        ExprKind::Zeta(s, a) => Expr::zeta(&sub(s)?, &sub(a)?),
        ExprKind::DirichletEta(a) => sub(a)?.dirichlet_eta(),
        ExprKind::KroneckerDelta(i, j) => Expr::kronecker_delta(&sub(i)?, &sub(j)?),
        ExprKind::FunctionSymbol(f) => {
            let args = f.args().iter().map(sub).collect::<Result<Vec<_>, _>>()?;
            Expr::function_symbol(f.name(), args)
        }
        ExprKind::Derivative(d) => {
            // Differentiation variables are bound inside the derivative
            let mut inner = map.clone();
            for s in d.symbols() {
                inner.remove(s);
            }
            subs_rec(d.arg(), &inner)?.derivative(d.symbols().to_vec())
        }
        ExprKind::Series(s) => {
            // The series variable is bound; only the coefficients see the map
            let mut inner = map.clone();
            inner.remove(s.var());
            let coeffs = s
                .coeffs()
                .iter()
                .map(|c| subs_rec(c, &inner))
                .collect::<Result<Vec<_>, _>>()?;
            s.with_coeffs(coeffs)
        }
    })
}
