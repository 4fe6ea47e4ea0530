//! Truncated univariate series objects.
//!
//! Three backends share one payload: a dense coefficient vector in the series
//! variable, truncated at `prec` (the first omitted power). They differ in what
//! coefficients they accept, and each reports its own `TypeCode`.

use dashu::rational::RBig;

use super::{Expr, ExprKind, TypeCode};
use crate::core::number::Number;
use crate::core::symbol::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeriesBackend {
    /// Dense coefficients, any expression
    Generic,
    /// Exact rational coefficients only
    Rational,
    /// Symbolic coefficients in other variables
    Symbolic,
}

impl SeriesBackend {
    #[must_use]
    pub const fn type_code(self) -> TypeCode {
        match self {
            Self::Generic => TypeCode::GenericSeries,
            Self::Rational => TypeCode::RationalSeries,
            Self::Symbolic => TypeCode::SymbolicSeries,
        }
    }
}

/// `Σ coeffs[i] * var^i + O(var^prec)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Series {
    backend: SeriesBackend,
    var: Symbol,
    prec: u32,
    coeffs: Vec<Expr>,
}

impl Series {
    #[inline]
    #[must_use]
    pub fn backend(&self) -> SeriesBackend {
        self.backend
    }

    #[inline]
    #[must_use]
    pub fn var(&self) -> &Symbol {
        &self.var
    }

    /// The first power that is truncated away
    #[inline]
    #[must_use]
    pub fn prec(&self) -> u32 {
        self.prec
    }

    /// `coeffs()[i]` is the coefficient of `var^i`; trailing zeros are trimmed
    #[inline]
    #[must_use]
    pub fn coeffs(&self) -> &[Expr] {
        &self.coeffs
    }

    fn build(backend: SeriesBackend, var: Symbol, prec: u32, mut coeffs: Vec<Expr>) -> Expr {
        coeffs.truncate(prec as usize);
        while coeffs.last().is_some_and(Expr::is_zero) {
            coeffs.pop();
        }
        Expr::new(ExprKind::Series(Self {
            backend,
            var,
            prec,
            coeffs,
        }))
    }

    /// Series with arbitrary expression coefficients
    #[must_use]
    pub fn generic(var: Symbol, prec: u32, coeffs: Vec<Expr>) -> Expr {
        Self::build(SeriesBackend::Generic, var, prec, coeffs)
    }

    /// Series with exact rational coefficients
    #[must_use]
    pub fn rational(var: Symbol, prec: u32, coeffs: Vec<RBig>) -> Expr {
        let coeffs = coeffs
            .into_iter()
            .map(|c| Expr::number(Number::from_rbig(c)))
            .collect();
        Self::build(SeriesBackend::Rational, var, prec, coeffs)
    }

    /// Series whose coefficients may involve other symbols
    #[must_use]
    pub fn symbolic(var: Symbol, prec: u32, coeffs: Vec<Expr>) -> Expr {
        Self::build(SeriesBackend::Symbolic, var, prec, coeffs)
    }

    /// Same backend, variable and precision with new coefficients
    pub(crate) fn with_coeffs(&self, coeffs: Vec<Expr>) -> Expr {
        Self::build(self.backend, self.var.clone(), self.prec, coeffs)
    }
}
