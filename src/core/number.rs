//! Exact and inexact numbers
//!
//! The numeric tower carried by `Number` nodes: arbitrary precision integers and
//! rationals (via `dashu`), exact complex numbers with rational parts, and `f64`
//! reals and complexes. Arithmetic promotes to the widest operand: any inexact
//! operand makes the result inexact, any complex operand makes it complex.
//!
//! Exact results are always normalized: a rational with unit denominator is an
//! `Integer`, an exact complex with zero imaginary part is real.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};

use super::error::ExprError;

/// Exact complex number with rational parts; the imaginary part is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComplexRational {
    pub re: RBig,
    pub im: RBig,
}

/// Floating point complex number
#[derive(Debug, Clone, Copy)]
pub struct ComplexDouble {
    pub re: f64,
    pub im: f64,
}

/// A numeric node payload.
#[derive(Debug, Clone)]
pub enum Number {
    Integer(IBig),
    /// Denominator is never one
    Rational(RBig),
    Complex(ComplexRational),
    RealDouble(f64),
    ComplexDouble(ComplexDouble),
}

// Intermediate forms used while promoting operands
enum Promoted {
    Exact(RBig),
    ExactComplex(RBig, RBig),
    Double(f64),
    DoubleComplex(f64, f64),
}

fn rbig_to_f64(r: &RBig) -> f64 {
    r.to_f64().value()
}

impl Number {
    // -------------------------------------------------------------------------
    // Constructors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn integer(n: impl Into<IBig>) -> Self {
        Self::Integer(n.into())
    }

    /// Create `num/den` in lowest terms
    ///
    /// # Errors
    /// Returns `ExprError::DivisionByZero` if `den` is zero.
    pub fn rational(num: i64, den: i64) -> Result<Self, ExprError> {
        if den == 0 {
            return Err(ExprError::DivisionByZero);
        }
        let r = RBig::from(IBig::from(num)) / RBig::from(IBig::from(den));
        Ok(Self::from_rbig(r))
    }

    /// Normalize an exact rational: unit denominators become integers
    #[must_use]
    pub fn from_rbig(r: RBig) -> Self {
        if *r.denominator() == UBig::ONE {
            Self::Integer(r.numerator().clone())
        } else {
            Self::Rational(r)
        }
    }

    /// Normalize an exact complex: zero imaginary parts become real
    #[must_use]
    pub fn complex(re: RBig, im: RBig) -> Self {
        if im == RBig::ZERO {
            Self::from_rbig(re)
        } else {
            Self::Complex(ComplexRational { re, im })
        }
    }

    /// Create a real double; `-0.0` is stored as `0.0`
    #[must_use]
    pub fn real_double(v: f64) -> Self {
        Self::RealDouble(if v == 0.0 { 0.0 } else { v })
    }

    #[must_use]
    pub fn complex_double(re: f64, im: f64) -> Self {
        let re = if re == 0.0 { 0.0 } else { re };
        let im = if im == 0.0 { 0.0 } else { im };
        Self::ComplexDouble(ComplexDouble { re, im })
    }

    // -------------------------------------------------------------------------
    // Predicates
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == IBig::ZERO,
            Self::Rational(r) => *r == RBig::ZERO,
            Self::Complex(c) => c.re == RBig::ZERO && c.im == RBig::ZERO,
            Self::RealDouble(v) => *v == 0.0,
            Self::ComplexDouble(c) => c.re == 0.0 && c.im == 0.0,
        }
    }

    /// The exact integer one. `1.0` is not.
    #[must_use]
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Integer(n) if *n == IBig::ONE)
    }

    /// Strictly negative real number. Complex numbers are neither negative nor positive.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(n) => *n < IBig::ZERO,
            Self::Rational(r) => *r < RBig::ZERO,
            Self::RealDouble(v) => *v < 0.0,
            Self::Complex(_) | Self::ComplexDouble(_) => false,
        }
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        match self {
            Self::Integer(n) => *n > IBig::ZERO,
            Self::Rational(r) => *r > RBig::ZERO,
            Self::RealDouble(v) => *v > 0.0,
            Self::Complex(_) | Self::ComplexDouble(_) => false,
        }
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Rational(_) | Self::Complex(_))
    }

    #[must_use]
    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(_) | Self::ComplexDouble(_))
    }

    /// The value as an `i64` if this is an integer that fits
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => i64::try_from(n.clone()).ok(),
            _ => None,
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Integer(_) => 0,
            Self::Rational(_) => 1,
            Self::Complex(_) => 2,
            Self::RealDouble(_) => 3,
            Self::ComplexDouble(_) => 4,
        }
    }

    // -------------------------------------------------------------------------
    // Arithmetic
    // -------------------------------------------------------------------------

    fn promote(&self, inexact: bool) -> Promoted {
        match (self, inexact) {
            (Self::Integer(n), false) => Promoted::Exact(RBig::from(n.clone())),
            (Self::Rational(r), false) => Promoted::Exact(r.clone()),
            (Self::Complex(c), false) => Promoted::ExactComplex(c.re.clone(), c.im.clone()),
            (Self::Integer(n), true) => Promoted::Double(n.to_f64().value()),
            (Self::Rational(r), true) => Promoted::Double(rbig_to_f64(r)),
            (Self::Complex(c), true) => {
                Promoted::DoubleComplex(rbig_to_f64(&c.re), rbig_to_f64(&c.im))
            }
            (Self::RealDouble(v), _) => Promoted::Double(*v),
            (Self::ComplexDouble(c), _) => Promoted::DoubleComplex(c.re, c.im),
        }
    }

    fn promote_pair(&self, other: &Self) -> (Promoted, Promoted) {
        let inexact = !self.is_exact() || !other.is_exact();
        (self.promote(inexact), other.promote(inexact))
    }

    /// Sum of two numbers
    #[must_use]
    pub fn add_num(&self, other: &Self) -> Self {
        use Promoted::{Double, DoubleComplex, Exact, ExactComplex};
        match self.promote_pair(other) {
            (Exact(a), Exact(b)) => Self::from_rbig(a + b),
            (Exact(a), ExactComplex(br, bi)) | (ExactComplex(br, bi), Exact(a)) => {
                Self::complex(a + br, bi)
            }
            (ExactComplex(ar, ai), ExactComplex(br, bi)) => Self::complex(ar + br, ai + bi),
            (Double(a), Double(b)) => Self::real_double(a + b),
            (Double(a), DoubleComplex(br, bi)) | (DoubleComplex(br, bi), Double(a)) => {
                Self::complex_double(a + br, bi)
            }
            (DoubleComplex(ar, ai), DoubleComplex(br, bi)) => {
                Self::complex_double(ar + br, ai + bi)
            }
            // promote_pair never mixes exact and inexact forms
            _ => unreachable!("mixed exactness after promotion"),
        }
    }

    /// Product of two numbers
    #[must_use]
    pub fn mul_num(&self, other: &Self) -> Self {
        use Promoted::{Double, DoubleComplex, Exact, ExactComplex};
        match self.promote_pair(other) {
            (Exact(a), Exact(b)) => Self::from_rbig(a * b),
            (Exact(a), ExactComplex(br, bi)) | (ExactComplex(br, bi), Exact(a)) => {
                Self::complex(&a * br, a * bi)
            }
            (ExactComplex(ar, ai), ExactComplex(br, bi)) => {
                Self::complex(&ar * &br - &ai * &bi, ar * bi + ai * br)
            }
            (Double(a), Double(b)) => Self::real_double(a * b),
            (Double(a), DoubleComplex(br, bi)) | (DoubleComplex(br, bi), Double(a)) => {
                Self::complex_double(a * br, a * bi)
            }
            (DoubleComplex(ar, ai), DoubleComplex(br, bi)) => {
                Self::complex_double(ar * br - ai * bi, ar * bi + ai * br)
            }
            _ => unreachable!("mixed exactness after promotion"),
        }
    }

    #[must_use]
    pub fn neg_num(&self) -> Self {
        match self {
            Self::Integer(n) => Self::Integer(-n.clone()),
            Self::Rational(r) => Self::Rational(-r.clone()),
            Self::Complex(c) => Self::Complex(ComplexRational {
                re: -c.re.clone(),
                im: -c.im.clone(),
            }),
            Self::RealDouble(v) => Self::real_double(-v),
            Self::ComplexDouble(c) => Self::complex_double(-c.re, -c.im),
        }
    }

    /// Multiplicative inverse
    ///
    /// # Errors
    /// Returns `ExprError::DivisionByZero` for exact zero. Inexact zero follows IEEE
    /// semantics and yields an infinity.
    pub fn inverse(&self) -> Result<Self, ExprError> {
        if self.is_exact() && self.is_zero() {
            return Err(ExprError::DivisionByZero);
        }
        Ok(match self {
            Self::Integer(n) => Self::from_rbig(RBig::ONE / RBig::from(n.clone())),
            Self::Rational(r) => Self::from_rbig(RBig::ONE / r.clone()),
            Self::Complex(c) => {
                let denom = &c.re * &c.re + &c.im * &c.im;
                Self::complex(&c.re / &denom, -(&c.im / &denom))
            }
            Self::RealDouble(v) => Self::real_double(1.0 / v),
            Self::ComplexDouble(c) => {
                let denom = c.re * c.re + c.im * c.im;
                Self::complex_double(c.re / denom, -c.im / denom)
            }
        })
    }

    /// Raise to an integer power
    ///
    /// # Errors
    /// Returns `ExprError::DivisionByZero` for an exact zero raised to a negative power.
    pub fn pow_i64(&self, exp: i64) -> Result<Self, ExprError> {
        let base = if exp < 0 { self.inverse()? } else { self.clone() };
        let mut remaining = exp.unsigned_abs();
        let mut acc = Self::one();
        let mut square = base;
        while remaining > 0 {
            if remaining & 1 == 1 {
                acc = acc.mul_num(&square);
            }
            remaining >>= 1;
            if remaining > 0 {
                square = square.mul_num(&square);
            }
        }
        Ok(acc)
    }
}

// -----------------------------------------------------------------------------
// Equality, ordering and hashing (structural: exact 0 and 0.0 are different nodes)
// -----------------------------------------------------------------------------

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Rational(a), Self::Rational(b)) => a.cmp(b),
            (Self::Complex(a), Self::Complex(b)) => a.cmp(b),
            (Self::RealDouble(a), Self::RealDouble(b)) => a.total_cmp(b),
            (Self::ComplexDouble(a), Self::ComplexDouble(b)) => a
                .re
                .total_cmp(&b.re)
                .then_with(|| a.im.total_cmp(&b.im)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Integer(n) => n.hash(state),
            Self::Rational(r) => r.hash(state),
            Self::Complex(c) => c.hash(state),
            Self::RealDouble(v) => v.to_bits().hash(state),
            Self::ComplexDouble(c) => {
                c.re.to_bits().hash(state);
                c.im.to_bits().hash(state);
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Operator and num-traits integration
// -----------------------------------------------------------------------------

impl Add for Number {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add_num(&rhs)
    }
}

impl Sub for Number {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.add_num(&rhs.neg_num())
    }
}

impl Mul for Number {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul_num(&rhs)
    }
}

impl Neg for Number {
    type Output = Self;
    fn neg(self) -> Self {
        self.neg_num()
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Self::Integer(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        Number::is_zero(self)
    }
}

impl One for Number {
    fn one() -> Self {
        Self::Integer(IBig::ONE)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Integer(IBig::from(n))
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Integer(IBig::from(n))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::real_double(v)
    }
}

impl From<IBig> for Number {
    fn from(n: IBig) -> Self {
        Self::Integer(n)
    }
}

impl From<RBig> for Number {
    fn from(r: RBig) -> Self {
        Self::from_rbig(r)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Standard test relaxations")]
mod tests {
    use super::*;

    #[test]
    fn test_rational_normalizes_to_integer() {
        assert_eq!(Number::rational(4, 2).unwrap(), Number::from(2));
        assert!(matches!(
            Number::rational(1, 2).unwrap(),
            Number::Rational(_)
        ));
        assert_eq!(Number::rational(1, 0), Err(ExprError::DivisionByZero));
    }

    #[test]
    fn test_promotion() {
        let half = Number::rational(1, 2).unwrap();
        assert_eq!(half.add_num(&half), Number::from(1));
        assert_eq!(
            Number::from(1).add_num(&Number::from(0.5)),
            Number::from(1.5)
        );
        let i = Number::complex(RBig::ZERO, RBig::ONE);
        assert_eq!(i.mul_num(&i), Number::from(-1));
    }

    #[test]
    fn test_structural_zero_is_not_float_zero() {
        assert_ne!(Number::from(0), Number::from(0.0));
        assert!(Number::from(0.0).is_zero());
        assert_eq!(Number::from(-0.0), Number::from(0.0));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Number::from(-3).is_negative());
        assert!(Number::rational(-1, 3).unwrap().is_negative());
        assert!(Number::from(2.5).is_positive());
        assert!(!Number::complex(RBig::ONE, RBig::ONE).is_negative());
    }

    #[test]
    fn test_pow_i64() {
        assert_eq!(Number::from(2).pow_i64(10).unwrap(), Number::from(1024));
        assert_eq!(
            Number::from(2).pow_i64(-2).unwrap(),
            Number::rational(1, 4).unwrap()
        );
        assert_eq!(Number::from(0).pow_i64(-1), Err(ExprError::DivisionByZero));
        assert_eq!(Number::from(5).pow_i64(0).unwrap(), Number::from(1));
    }

    #[test]
    fn test_unit_is_exact_only() {
        assert!(Number::from(1).is_one());
        assert!(!Number::from(1.0).is_one());
        assert!(!Number::complex_double(1.0, 0.0).is_one());
        assert!(!Number::rational(1, 2).unwrap().is_one());
    }

    #[test]
    fn test_num_traits_identities() {
        assert!(Zero::is_zero(&Number::zero()));
        assert!(Number::one().is_one());
        assert_eq!(Number::from(3) - Number::from(3), Number::zero());
    }
}
