//! Canonical sums.

use std::collections::BTreeMap;

use num_traits::{One, Zero};

use super::{Expr, ExprKind, Mul};
use crate::core::number::Number;

/// Canonical sum: `coef + Σ dict[term] * term`.
///
/// Invariants, established by [`Add::from_dict`]:
/// - no key is a bare `Number`
/// - no coefficient is zero
/// - the node has at least two summands (otherwise it collapses)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Add {
    coef: Number,
    dict: BTreeMap<Expr, Number>,
}

impl Add {
    /// The numeric constant
    #[inline]
    #[must_use]
    pub fn coef(&self) -> &Number {
        &self.coef
    }

    /// Non-numeric term to numeric coefficient
    #[inline]
    #[must_use]
    pub fn dict(&self) -> &BTreeMap<Expr, Number> {
        &self.dict
    }

    /// Build the canonical expression for `coef + Σ dict`.
    ///
    /// Collapses to a number when `dict` is empty and to `c*term` when there is a
    /// single entry and no constant. `dict` must already satisfy the key and
    /// coefficient invariants, which [`Add::dict_add_term`] maintains.
    #[must_use]
    pub fn from_dict(coef: Number, dict: BTreeMap<Expr, Number>) -> Expr {
        if dict.is_empty() {
            return Expr::number(coef);
        }
        if dict.len() == 1 && coef.is_zero() {
            if let Some((term, c)) = dict.into_iter().next() {
                return if c.is_one() {
                    term
                } else {
                    Mul::from_number_and_term(c, &term)
                };
            }
            return Expr::number(coef);
        }
        Expr::new(ExprKind::Add(Self { coef, dict }))
    }

    /// Add `c * term` into `dict`, where `term` is not a number.
    /// Entries whose coefficient cancels to zero are removed.
    pub fn dict_add_term(dict: &mut BTreeMap<Expr, Number>, c: Number, term: Expr) {
        if c.is_zero() {
            return;
        }
        match dict.get(&term) {
            Some(existing) => {
                let updated = existing.add_num(&c);
                if updated.is_zero() {
                    dict.remove(&term);
                } else {
                    dict.insert(term, updated);
                }
            }
            None => {
                dict.insert(term, c);
            }
        }
    }

    /// Add `c * term` into the pair `(coef, dict)` for an arbitrary `term`.
    ///
    /// Numbers go to the constant, sums are merged entry by entry and products
    /// have their numeric coefficient pulled out, so the key invariants hold.
    pub fn coef_dict_add_term(
        coef: &mut Number,
        dict: &mut BTreeMap<Expr, Number>,
        c: &Number,
        term: &Expr,
    ) {
        match term.kind() {
            ExprKind::Number(n) => {
                *coef = coef.add_num(&c.mul_num(n));
            }
            ExprKind::Add(add) => {
                for (t, tc) in &add.dict {
                    Self::dict_add_term(dict, c.mul_num(tc), t.clone());
                }
                *coef = coef.add_num(&c.mul_num(&add.coef));
            }
            ExprKind::Mul(mul) if !mul.coef().is_one() => {
                let bare = Mul::from_dict(Number::one(), mul.dict().clone());
                Self::dict_add_term(dict, c.mul_num(mul.coef()), bare);
            }
            _ => Self::dict_add_term(dict, c.clone(), term.clone()),
        }
    }
}

impl Expr {
    /// Canonical sum of two expressions
    #[must_use]
    pub fn add_expr(left: &Self, right: &Self) -> Self {
        Self::sum([left, right])
    }

    /// Canonical sum of any number of expressions
    #[must_use]
    pub fn sum<'a>(terms: impl IntoIterator<Item = &'a Self>) -> Self {
        let mut coef = Number::zero();
        let mut dict = BTreeMap::new();
        let one = Number::one();
        for term in terms {
            Add::coef_dict_add_term(&mut coef, &mut dict, &one, term);
        }
        Add::from_dict(coef, dict)
    }

    /// Canonical difference `left - right`
    #[must_use]
    pub fn sub_expr(left: &Self, right: &Self) -> Self {
        let mut coef = Number::zero();
        let mut dict = BTreeMap::new();
        Add::coef_dict_add_term(&mut coef, &mut dict, &Number::one(), left);
        Add::coef_dict_add_term(&mut coef, &mut dict, &Number::from(-1), right);
        Add::from_dict(coef, dict)
    }

    /// Canonical negation
    #[must_use]
    pub fn negate(&self) -> Self {
        Mul::from_number_and_term(Number::from(-1), self)
    }
}
