//! Named function nodes and their constructors.
//!
//! Constructors only evaluate at the points where the value is an exact
//! number without further work (`sin(0) = 0`, `cos(0) = 1`, `log(1) = 0`, ...).
//! Everything else stays an unevaluated application.

use std::sync::Arc;

use super::{Expr, ExprKind, TypeCode};
use crate::core::symbol::Symbol;

// =============================================================================
// TRIGONOMETRIC FAMILY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrigKind {
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
}

impl TrigKind {
    #[must_use]
    pub const fn type_code(self) -> TypeCode {
        match self {
            Self::Sin => TypeCode::Sin,
            Self::Cos => TypeCode::Cos,
            Self::Tan => TypeCode::Tan,
            Self::Cot => TypeCode::Cot,
            Self::Csc => TypeCode::Csc,
            Self::Sec => TypeCode::Sec,
            Self::ASin => TypeCode::ASin,
            Self::ACos => TypeCode::ACos,
            Self::ATan => TypeCode::ATan,
            Self::ACot => TypeCode::ACot,
            Self::ASec => TypeCode::ASec,
            Self::ACsc => TypeCode::ACsc,
        }
    }

    /// Exact value at zero, when the function is defined there and the value is 0 or 1
    fn value_at_zero(self) -> Option<Expr> {
        match self {
            Self::Sin | Self::Tan | Self::ASin | Self::ATan => Some(Expr::zero()),
            Self::Cos | Self::Sec => Some(Expr::one()),
            Self::Cot | Self::Csc | Self::ACos | Self::ACot | Self::ASec | Self::ACsc => None,
        }
    }
}

/// A member of the trigonometric family applied to one argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrigFunction {
    kind: TrigKind,
    arg: Expr,
}

impl TrigFunction {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> TrigKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn arg(&self) -> &Expr {
        &self.arg
    }

    /// Canonical application of `kind` to `arg`
    #[must_use]
    pub fn apply(kind: TrigKind, arg: Expr) -> Expr {
        if arg.is_zero() {
            if let Some(value) = kind.value_at_zero() {
                return value;
            }
        }
        Expr::new(ExprKind::Trig(Self { kind, arg }))
    }
}

// =============================================================================
// HYPERBOLIC FAMILY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HyperbolicKind {
    Sinh,
    Cosh,
    Tanh,
    Coth,
    ASinh,
    ACosh,
    ATanh,
    ACoth,
}

impl HyperbolicKind {
    #[must_use]
    pub const fn type_code(self) -> TypeCode {
        match self {
            Self::Sinh => TypeCode::Sinh,
            Self::Cosh => TypeCode::Cosh,
            Self::Tanh => TypeCode::Tanh,
            Self::Coth => TypeCode::Coth,
            Self::ASinh => TypeCode::ASinh,
            Self::ACosh => TypeCode::ACosh,
            Self::ATanh => TypeCode::ATanh,
            Self::ACoth => TypeCode::ACoth,
        }
    }

    fn value_at_zero(self) -> Option<Expr> {
        match self {
            Self::Sinh | Self::Tanh | Self::ASinh | Self::ATanh => Some(Expr::zero()),
            Self::Cosh => Some(Expr::one()),
            Self::Coth | Self::ACosh | Self::ACoth => None,
        }
    }
}

/// A member of the hyperbolic family applied to one argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HyperbolicFunction {
    kind: HyperbolicKind,
    arg: Expr,
}

impl HyperbolicFunction {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> HyperbolicKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn arg(&self) -> &Expr {
        &self.arg
    }

    /// Canonical application of `kind` to `arg`
    #[must_use]
    pub fn apply(kind: HyperbolicKind, arg: Expr) -> Expr {
        if arg.is_zero() {
            if let Some(value) = kind.value_at_zero() {
                return value;
            }
        }
        Expr::new(ExprKind::Hyperbolic(Self { kind, arg }))
    }
}

// =============================================================================
// UNDEFINED FUNCTIONS AND DERIVATIVES
// =============================================================================

/// An undefined function applied to arguments, e.g. `f(x, y)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionSymbol {
    name: Arc<str>,
    args: Vec<Expr>,
}

impl FunctionSymbol {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn args(&self) -> &[Expr] {
        &self.args
    }
}

/// Unevaluated derivative of `arg` with respect to `symbols`, in order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Derivative {
    arg: Expr,
    symbols: Vec<Symbol>,
}

impl Derivative {
    #[inline]
    #[must_use]
    pub fn arg(&self) -> &Expr {
        &self.arg
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

macro_rules! trig_constructors {
    ($($method:ident => $kind:ident),+ $(,)?) => {
        $(
            #[must_use]
            pub fn $method(&self) -> Self {
                TrigFunction::apply(TrigKind::$kind, self.clone())
            }
        )+
    };
}

macro_rules! hyperbolic_constructors {
    ($($method:ident => $kind:ident),+ $(,)?) => {
        $(
            #[must_use]
            pub fn $method(&self) -> Self {
                HyperbolicFunction::apply(HyperbolicKind::$kind, self.clone())
            }
        )+
    };
}

impl Expr {
    trig_constructors! {
        sin => Sin,
        cos => Cos,
        tan => Tan,
        cot => Cot,
        csc => Csc,
        sec => Sec,
        asin => ASin,
        acos => ACos,
        atan => ATan,
        acot => ACot,
        asec => ASec,
        acsc => ACsc,
    }

    hyperbolic_constructors! {
        sinh => Sinh,
        cosh => Cosh,
        tanh => Tanh,
        coth => Coth,
        asinh => ASinh,
        acosh => ACosh,
        atanh => ATanh,
        acoth => ACoth,
    }

    /// Natural logarithm; `log(1) = 0` and `log(E) = 1`
    #[must_use]
    pub fn log(&self) -> Self {
        if self.is_one() {
            return Self::zero();
        }
        if *self == Self::e() {
            return Self::one();
        }
        Self::new(ExprKind::Log(self.clone()))
    }

    /// Lambert W (principal branch); `W(0) = 0`
    #[must_use]
    pub fn lambertw(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self::new(ExprKind::LambertW(self.clone()))
    }

    /// Absolute value; real numbers evaluate
    #[must_use]
    pub fn abs(&self) -> Self {
        if let Some(n) = self.as_number() {
            if !n.is_complex() {
                return if n.is_negative() {
                    Self::number(n.neg_num())
                } else {
                    self.clone()
                };
            }
        }
        Self::new(ExprKind::Abs(self.clone()))
    }

    #[must_use]
    pub fn gamma(&self) -> Self {
        Self::new(ExprKind::Gamma(self.clone()))
    }

    /// Lower incomplete gamma γ(s, x)
    #[must_use]
    pub fn lower_gamma(s: &Self, x: &Self) -> Self {
        Self::new(ExprKind::LowerGamma(s.clone(), x.clone()))
    }

    /// Upper incomplete gamma Γ(s, x)
    #[must_use]
    pub fn upper_gamma(s: &Self, x: &Self) -> Self {
        Self::new(ExprKind::UpperGamma(s.clone(), x.clone()))
    }

    /// Hurwitz zeta ζ(s, a)
    #[must_use]
    pub fn zeta(s: &Self, a: &Self) -> Self {
        Self::new(ExprKind::Zeta(s.clone(), a.clone()))
    }

    #[must_use]
    pub fn dirichlet_eta(&self) -> Self {
        Self::new(ExprKind::DirichletEta(self.clone()))
    }

    /// Kronecker delta δ(i, j); structurally equal indices give 1
    #[must_use]
    pub fn kronecker_delta(i: &Self, j: &Self) -> Self {
        if i == j {
            return Self::one();
        }
        Self::new(ExprKind::KroneckerDelta(i.clone(), j.clone()))
    }

    /// Undefined function `name(args...)`
    #[must_use]
    pub fn function_symbol(name: impl AsRef<str>, args: Vec<Self>) -> Self {
        Self::new(ExprKind::FunctionSymbol(FunctionSymbol {
            name: Arc::from(name.as_ref()),
            args,
        }))
    }

    /// Unevaluated derivative of `self` with respect to `symbols`.
    /// An empty symbol list is the expression itself.
    #[must_use]
    pub fn derivative(&self, symbols: Vec<Symbol>) -> Self {
        if symbols.is_empty() {
            return self.clone();
        }
        Self::new(ExprKind::Derivative(Derivative {
            arg: self.clone(),
            symbols,
        }))
    }
}
