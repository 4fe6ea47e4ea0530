//! Expression nodes.
//!
//! This module defines:
//! - `Expr` - a shared handle to an immutable node
//! - `ExprKind` - the closed set of node variants
//! - `TypeCode` - the flat kind tag every node reports, one per visitor method
//!
//! # Architecture
//!
//! ## Shared immutable nodes
//! `Expr` wraps an `Arc`, so cloning a handle never copies the tree and a node
//! lives as long as its last holder. There is no way to obtain mutable access
//! to a node once it is built.
//!
//! ## Canonical Sum/Product dictionaries
//! `Add` maps non-numeric terms to numeric coefficients and keeps the numeric
//! constant apart; `Mul` maps bases to exponents and keeps the numeric
//! coefficient apart. Both use `BTreeMap` so iteration order is fixed by the
//! total order on `Expr`, never by insertion order.
//!
//! ## Structural hashing
//! Each node caches an `FxHasher` hash of its structure, computed once at
//! construction. Equality checks pointer identity first, then rejects on hash
//! mismatch before comparing structure.
//!
//! # Usage
//!
//! ```
//! use symb_visit::{symbol, Expr};
//!
//! let x = symbol("expr_doc_x").to_expr();
//! let y = symbol("expr_doc_y").to_expr();
//! let e = Expr::integer(3) * x.pow(&Expr::integer(2)) * y;
//! assert!(e.as_mul().is_some());
//! ```

mod add;
mod args;
mod functions;
mod mul;
mod operators;
mod pow;
mod series;

pub use add::Add;
pub use functions::{
    Derivative, FunctionSymbol, HyperbolicFunction, HyperbolicKind, TrigFunction, TrigKind,
};
pub use mul::Mul;
pub use pow::Pow;
pub use series::{Series, SeriesBackend};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{Arc, LazyLock};

use rustc_hash::FxHasher;

use super::number::Number;
use super::symbol::{symbol, Symbol};

// =============================================================================
// CACHED DISTINGUISHED VALUES
// =============================================================================

static ZERO: LazyLock<Expr> = LazyLock::new(|| Expr::new(ExprKind::Number(Number::from(0))));
static ONE: LazyLock<Expr> = LazyLock::new(|| Expr::new(ExprKind::Number(Number::from(1))));
static MINUS_ONE: LazyLock<Expr> =
    LazyLock::new(|| Expr::new(ExprKind::Number(Number::from(-1))));
static E: LazyLock<Expr> = LazyLock::new(|| Expr::new(ExprKind::Constant(Constant::E)));

// =============================================================================
// EXPR
// =============================================================================

#[derive(Debug)]
struct ExprData {
    hash: u64,
    kind: ExprKind,
}

/// A shared handle to an immutable expression node.
///
/// Two handles are equal when their trees are structurally equal, whether or
/// not they point at the same allocation.
#[derive(Clone)]
pub struct Expr(Arc<ExprData>);

impl Expr {
    /// Wrap a kind into a node. Only the canonical constructors call this,
    /// so every `Expr` reachable from outside the crate is well formed.
    pub(crate) fn new(kind: ExprKind) -> Self {
        let mut hasher = FxHasher::default();
        kind.hash(&mut hasher);
        Self(Arc::new(ExprData {
            hash: hasher.finish(),
            kind,
        }))
    }

    /// The node's variant and payload
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &ExprKind {
        &self.0.kind
    }

    /// Structural hash, identical for structurally equal trees
    #[inline]
    #[must_use]
    pub fn structural_hash(&self) -> u64 {
        self.0.hash
    }

    /// Whether both handles point at the same allocation
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    // -------------------------------------------------------------------------
    // Distinguished values
    // -------------------------------------------------------------------------

    /// The additive identity (exact integer zero)
    #[must_use]
    pub fn zero() -> Self {
        ZERO.clone()
    }

    /// The multiplicative identity (exact integer one)
    #[must_use]
    pub fn one() -> Self {
        ONE.clone()
    }

    #[must_use]
    pub fn minus_one() -> Self {
        MINUS_ONE.clone()
    }

    /// Base of the natural logarithm
    #[must_use]
    pub fn e() -> Self {
        E.clone()
    }

    #[must_use]
    pub fn pi() -> Self {
        Self::new(ExprKind::Constant(Constant::Pi))
    }

    // -------------------------------------------------------------------------
    // Leaf constructors
    // -------------------------------------------------------------------------

    /// Create a symbol node (the name is interned)
    #[must_use]
    pub fn symbol(name: impl AsRef<str>) -> Self {
        symbol(name.as_ref()).to_expr()
    }

    #[must_use]
    pub fn number(n: Number) -> Self {
        Self::new(ExprKind::Number(n))
    }

    #[must_use]
    pub fn integer(n: i64) -> Self {
        Self::number(Number::from(n))
    }

    /// Create the exact rational `num/den`
    ///
    /// # Errors
    /// Returns `ExprError::DivisionByZero` if `den` is zero.
    pub fn rational(num: i64, den: i64) -> Result<Self, super::error::ExprError> {
        Number::rational(num, den).map(Self::number)
    }

    #[must_use]
    pub fn real_double(v: f64) -> Self {
        Self::number(Number::real_double(v))
    }

    #[must_use]
    pub fn complex_double(re: f64, im: f64) -> Self {
        Self::number(Number::complex_double(re, im))
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The kind tag of this node
    #[must_use]
    pub fn type_code(&self) -> TypeCode {
        match self.kind() {
            ExprKind::Symbol(_) => TypeCode::Symbol,
            ExprKind::Number(n) => match n {
                Number::Integer(_) => TypeCode::Integer,
                Number::Rational(_) => TypeCode::Rational,
                Number::Complex(_) => TypeCode::Complex,
                Number::RealDouble(_) => TypeCode::RealDouble,
                Number::ComplexDouble(_) => TypeCode::ComplexDouble,
            },
            ExprKind::Constant(_) => TypeCode::Constant,
            ExprKind::Add(_) => TypeCode::Add,
            ExprKind::Mul(_) => TypeCode::Mul,
            ExprKind::Pow(_) => TypeCode::Pow,
            ExprKind::Trig(f) => f.kind().type_code(),
            ExprKind::Hyperbolic(f) => f.kind().type_code(),
            ExprKind::Log(_) => TypeCode::Log,
            ExprKind::LambertW(_) => TypeCode::LambertW,
            ExprKind::Abs(_) => TypeCode::Abs,
            ExprKind::Gamma(_) => TypeCode::Gamma,
            ExprKind::LowerGamma(..) => TypeCode::LowerGamma,
            ExprKind::UpperGamma(..) => TypeCode::UpperGamma,
            ExprKind::Zeta(..) => TypeCode::Zeta,
            ExprKind::DirichletEta(_) => TypeCode::DirichletEta,
            ExprKind::KroneckerDelta(..) => TypeCode::KroneckerDelta,
            ExprKind::FunctionSymbol(_) => TypeCode::FunctionSymbol,
            ExprKind::Derivative(_) => TypeCode::Derivative,
            ExprKind::Series(s) => s.backend().type_code(),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self.kind() {
            ExprKind::Symbol(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self.kind() {
            ExprKind::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_add(&self) -> Option<&Add> {
        match self.kind() {
            ExprKind::Add(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_mul(&self) -> Option<&Mul> {
        match self.kind() {
            ExprKind::Mul(m) => Some(m),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_pow(&self) -> Option<&Pow> {
        match self.kind() {
            ExprKind::Pow(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self.kind(), ExprKind::Number(_))
    }

    /// Structurally the exact integer zero. `0.0` is not.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == *ZERO
    }

    /// Structurally the exact integer one
    #[inline]
    #[must_use]
    pub fn is_one(&self) -> bool {
        *self == *ONE
    }
}

impl Deref for Expr {
    type Target = ExprKind;

    fn deref(&self) -> &Self::Target {
        &self.0.kind
    }
}

// Structural equality based on KIND only (with pointer and hash fast paths)
impl PartialEq for Expr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.0.hash != other.0.hash {
            return false;
        }
        self.0.kind == other.0.kind
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash.hash(state);
    }
}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        self.0.kind.cmp(&other.0.kind)
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0.kind, f)
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Self::number(n)
    }
}

impl From<&Expr> for Expr {
    fn from(e: &Expr) -> Self {
        e.clone()
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Self::integer(i64::from(n))
    }
}

impl From<f64> for Expr {
    fn from(v: f64) -> Self {
        Self::real_double(v)
    }
}

// =============================================================================
// EXPRKIND
// =============================================================================

/// Distinguished constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constant {
    /// Base of the natural logarithm
    E,
    Pi,
}

/// The variant set of expression nodes.
///
/// Closed: every match over it is exhaustive, so adding a variant breaks the
/// build everywhere a node is dispatched until the new variant is handled.
/// Variant declaration order is the canonical order between kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExprKind {
    Number(Number),
    Constant(Constant),
    Symbol(Symbol),
    Add(Add),
    Mul(Mul),
    Pow(Pow),
    Trig(TrigFunction),
    Hyperbolic(HyperbolicFunction),
    Log(Expr),
    LambertW(Expr),
    Abs(Expr),
    Gamma(Expr),
    /// Lower incomplete gamma γ(s, x)
    LowerGamma(Expr, Expr),
    /// Upper incomplete gamma Γ(s, x)
    UpperGamma(Expr, Expr),
    /// Hurwitz zeta ζ(s, a)
    Zeta(Expr, Expr),
    DirichletEta(Expr),
    KroneckerDelta(Expr, Expr),
    /// Undefined function applied to arguments, e.g. `f(x, y)`
    FunctionSymbol(FunctionSymbol),
    Derivative(Derivative),
    Series(Series),
}

// =============================================================================
// TYPECODE
// =============================================================================

macro_rules! type_codes {
    ($($code:ident),+ $(,)?) => {
        /// Flat kind tag of a node: exactly one visitor method per code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TypeCode {
            $($code),+
        }

        impl TypeCode {
            /// Every kind, in declaration order
            pub const ALL: &'static [TypeCode] = &[$(TypeCode::$code),+];

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(TypeCode::$code => stringify!($code)),+
                }
            }
        }
    };
}

type_codes! {
    Integer,
    Rational,
    Complex,
    RealDouble,
    ComplexDouble,
    Constant,
    Symbol,
    Add,
    Mul,
    Pow,
    Sin,
    Cos,
    Tan,
    Cot,
    Csc,
    Sec,
    ASin,
    ACos,
    ATan,
    ACot,
    ASec,
    ACsc,
    Sinh,
    Cosh,
    Tanh,
    Coth,
    ASinh,
    ACosh,
    ATanh,
    ACoth,
    Log,
    LambertW,
    Abs,
    Gamma,
    LowerGamma,
    UpperGamma,
    Zeta,
    DirichletEta,
    KroneckerDelta,
    FunctionSymbol,
    Derivative,
    GenericSeries,
    RationalSeries,
    SymbolicSeries,
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TESTS
// =============================================================================
