//! Dispatch framework for expression analyses
//!
//! Three pieces:
//! - [`Visitor`]: one required method per [`TypeCode`]. Implementing it directly
//!   is exhaustive by construction; a new kind breaks the build of every direct
//!   implementor until it is handled.
//! - [`BaseVisitor`]: the default-dispatch adapter. Only
//!   [`bvisit_basic`](BaseVisitor::bvisit_basic) is required; every per-kind
//!   method falls back to its family (numbers, functions, trigonometric and
//!   hyperbolic functions, series) and from there to the catch-all. Any
//!   `BaseVisitor` is a `Visitor` through a blanket impl, so a new kind is
//!   inherited through the catch-all without a silent gap.
//! - traversal drivers in [`traversal`]: preorder, postorder and a stoppable
//!   preorder for visitors implementing [`StopVisitor`].
//! - [`NodeCounter`], a ready-made adapter counting nodes per kind.
//!
//! Resolution is static: defaults are trait default methods, there is no
//! runtime lookup table.
//!
//! # Example
//! ```
//! use symb_visit::visitor::{preorder_traversal, BaseVisitor};
//! use symb_visit::{Expr, Symbol};
//!
//! #[derive(Default)]
//! struct CountSymbols {
//!     count: usize,
//! }
//!
//! impl BaseVisitor for CountSymbols {
//!     fn bvisit_symbol(&mut self, _node: &Expr, _x: &Symbol) {
//!         self.count += 1;
//!     }
//!     fn bvisit_basic(&mut self, _node: &Expr) {}
//! }
//!
//! let x = Expr::symbol("x");
//! let y = Expr::symbol("y");
//! let mut counter = CountSymbols::default();
//! preorder_traversal(&(&x * &y + x.sin()), &mut counter);
//! assert_eq!(counter.count, 3);
//! ```

mod counter;
pub mod traversal;

pub use counter::NodeCounter;
pub use traversal::{postorder_traversal, preorder_traversal, preorder_traversal_stop};

use crate::core::{
    Add, Constant, Derivative, Expr, ExprKind, FunctionSymbol, HyperbolicFunction,
    HyperbolicKind, Mul, Number, Pow, Series, SeriesBackend, Symbol, TrigFunction, TrigKind,
};

// =============================================================================
// CAPABILITY CONTRACT
// =============================================================================

/// Visit a node known to be of one particular kind.
///
/// Each method receives the node itself and its typed payload. Prefer
/// implementing [`BaseVisitor`] unless an analysis genuinely handles every kind.
pub trait Visitor {
    fn visit_integer(&mut self, node: &Expr, n: &Number);
    fn visit_rational(&mut self, node: &Expr, n: &Number);
    fn visit_complex(&mut self, node: &Expr, n: &Number);
    fn visit_real_double(&mut self, node: &Expr, n: &Number);
    fn visit_complex_double(&mut self, node: &Expr, n: &Number);
    fn visit_constant(&mut self, node: &Expr, c: Constant);
    fn visit_symbol(&mut self, node: &Expr, x: &Symbol);
    fn visit_add(&mut self, node: &Expr, add: &Add);
    fn visit_mul(&mut self, node: &Expr, mul: &Mul);
    fn visit_pow(&mut self, node: &Expr, pow: &Pow);

    fn visit_sin(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_cos(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_tan(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_cot(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_csc(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_sec(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_asin(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_acos(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_atan(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_acot(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_asec(&mut self, node: &Expr, f: &TrigFunction);
    fn visit_acsc(&mut self, node: &Expr, f: &TrigFunction);

    fn visit_sinh(&mut self, node: &Expr, f: &HyperbolicFunction);
    fn visit_cosh(&mut self, node: &Expr, f: &HyperbolicFunction);
    fn visit_tanh(&mut self, node: &Expr, f: &HyperbolicFunction);
    fn visit_coth(&mut self, node: &Expr, f: &HyperbolicFunction);
    fn visit_asinh(&mut self, node: &Expr, f: &HyperbolicFunction);
    fn visit_acosh(&mut self, node: &Expr, f: &HyperbolicFunction);
    fn visit_atanh(&mut self, node: &Expr, f: &HyperbolicFunction);
    fn visit_acoth(&mut self, node: &Expr, f: &HyperbolicFunction);

    fn visit_log(&mut self, node: &Expr, arg: &Expr);
    fn visit_lambertw(&mut self, node: &Expr, arg: &Expr);
    fn visit_abs(&mut self, node: &Expr, arg: &Expr);
    fn visit_gamma(&mut self, node: &Expr, arg: &Expr);
    fn visit_lower_gamma(&mut self, node: &Expr, s: &Expr, x: &Expr);
    fn visit_upper_gamma(&mut self, node: &Expr, s: &Expr, x: &Expr);
    fn visit_zeta(&mut self, node: &Expr, s: &Expr, a: &Expr);
    fn visit_dirichlet_eta(&mut self, node: &Expr, arg: &Expr);
    fn visit_kronecker_delta(&mut self, node: &Expr, i: &Expr, j: &Expr);
    fn visit_function_symbol(&mut self, node: &Expr, f: &FunctionSymbol);
    fn visit_derivative(&mut self, node: &Expr, d: &Derivative);

    fn visit_generic_series(&mut self, node: &Expr, s: &Series);
    fn visit_rational_series(&mut self, node: &Expr, s: &Series);
    fn visit_symbolic_series(&mut self, node: &Expr, s: &Series);
}

/// A visitor that can ask [`preorder_traversal_stop`] to abort.
///
/// The driver checks [`stop`](StopVisitor::stop) after each node and after each
/// child subtree; once it reports `true` no further node is visited.
pub trait StopVisitor: Visitor {
    fn stop(&self) -> bool;
}

impl Expr {
    /// Dispatch this node to the visitor method for its kind
    pub fn accept<V: Visitor + ?Sized>(&self, v: &mut V) {
        match self.kind() {
            ExprKind::Number(n) => match n {
                Number::Integer(_) => v.visit_integer(self, n),
                Number::Rational(_) => v.visit_rational(self, n),
                Number::Complex(_) => v.visit_complex(self, n),
                Number::RealDouble(_) => v.visit_real_double(self, n),
                Number::ComplexDouble(_) => v.visit_complex_double(self, n),
            },
            ExprKind::Constant(c) => v.visit_constant(self, *c),
            ExprKind::Symbol(x) => v.visit_symbol(self, x),
            ExprKind::Add(add) => v.visit_add(self, add),
            ExprKind::Mul(mul) => v.visit_mul(self, mul),
            ExprKind::Pow(pow) => v.visit_pow(self, pow),
            ExprKind::Trig(f) => match f.kind() {
                TrigKind::Sin => v.visit_sin(self, f),
                TrigKind::Cos => v.visit_cos(self, f),
                TrigKind::Tan => v.visit_tan(self, f),
                TrigKind::Cot => v.visit_cot(self, f),
                TrigKind::Csc => v.visit_csc(self, f),
                TrigKind::Sec => v.visit_sec(self, f),
                TrigKind::ASin => v.visit_asin(self, f),
                TrigKind::ACos => v.visit_acos(self, f),
                TrigKind::ATan => v.visit_atan(self, f),
                TrigKind::ACot => v.visit_acot(self, f),
                TrigKind::ASec => v.visit_asec(self, f),
                TrigKind::ACsc => v.visit_acsc(self, f),
            },
            ExprKind::Hyperbolic(f) => match f.kind() {
                HyperbolicKind::Sinh => v.visit_sinh(self, f),
                HyperbolicKind::Cosh => v.visit_cosh(self, f),
                HyperbolicKind::Tanh => v.visit_tanh(self, f),
                HyperbolicKind::Coth => v.visit_coth(self, f),
                HyperbolicKind::ASinh => v.visit_asinh(self, f),
                HyperbolicKind::ACosh => v.visit_acosh(self, f),
                HyperbolicKind::ATanh => v.visit_atanh(self, f),
                HyperbolicKind::ACoth => v.visit_acoth(self, f),
            },
            ExprKind::Log(a) => v.visit_log(self, a),
            ExprKind::LambertW(a) => v.visit_lambertw(self, a),
            ExprKind::Abs(a) => v.visit_abs(self, a),
            ExprKind::Gamma(a) => v.visit_gamma(self, a),
            ExprKind::LowerGamma(s, x) => v.visit_lower_gamma(self, s, x),
            ExprKind::UpperGamma(s, x) => v.visit_upper_gamma(self, s, x),
            ExprKind::Zeta(s, a) => v.visit_zeta(self, s, a),
            ExprKind::DirichletEta(a) => v.visit_dirichlet_eta(self, a),
            ExprKind::KroneckerDelta(i, j) => v.visit_kronecker_delta(self, i, j),
            ExprKind::FunctionSymbol(f) => v.visit_function_symbol(self, f),
            ExprKind::Derivative(d) => v.visit_derivative(self, d),
            ExprKind::Series(s) => match s.backend() {
                SeriesBackend::Generic => v.visit_generic_series(self, s),
                SeriesBackend::Rational => v.visit_rational_series(self, s),
                SeriesBackend::Symbolic => v.visit_symbolic_series(self, s),
            },
        }
    }
}

// =============================================================================
// DEFAULT-DISPATCH ADAPTER
// =============================================================================

/// Default-dispatch adapter: implement the kinds you care about plus the
/// mandatory catch-all [`bvisit_basic`](BaseVisitor::bvisit_basic).
///
/// Fallback chains:
/// - numbers: `bvisit_integer` etc. → `bvisit_number` → `bvisit_basic`
/// - trigonometric: `bvisit_sin` etc. → `bvisit_trig_function` → `bvisit_function` → `bvisit_basic`
/// - hyperbolic: `bvisit_sinh` etc. → `bvisit_hyperbolic_function` → `bvisit_function` → `bvisit_basic`
/// - other named functions: `bvisit_log` etc. → `bvisit_function` → `bvisit_basic`
/// - series: `bvisit_generic_series` etc. → `bvisit_series` → `bvisit_basic`
/// - everything else: straight to `bvisit_basic`
#[allow(unused_variables, reason = "default methods ignore the typed payload")]
pub trait BaseVisitor {
    /// Catch-all for every kind without a more specific handler
    fn bvisit_basic(&mut self, node: &Expr);

    // --- families ---

    fn bvisit_number(&mut self, node: &Expr, n: &Number) {
        self.bvisit_basic(node);
    }
    fn bvisit_function(&mut self, node: &Expr) {
        self.bvisit_basic(node);
    }
    fn bvisit_trig_function(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_function(node);
    }
    fn bvisit_hyperbolic_function(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_function(node);
    }
    fn bvisit_series(&mut self, node: &Expr, s: &Series) {
        self.bvisit_basic(node);
    }

    // --- numbers and atoms ---

    fn bvisit_integer(&mut self, node: &Expr, n: &Number) {
        self.bvisit_number(node, n);
    }
    fn bvisit_rational(&mut self, node: &Expr, n: &Number) {
        self.bvisit_number(node, n);
    }
    fn bvisit_complex(&mut self, node: &Expr, n: &Number) {
        self.bvisit_number(node, n);
    }
    fn bvisit_real_double(&mut self, node: &Expr, n: &Number) {
        self.bvisit_number(node, n);
    }
    fn bvisit_complex_double(&mut self, node: &Expr, n: &Number) {
        self.bvisit_number(node, n);
    }
    fn bvisit_constant(&mut self, node: &Expr, c: Constant) {
        self.bvisit_basic(node);
    }
    fn bvisit_symbol(&mut self, node: &Expr, x: &Symbol) {
        self.bvisit_basic(node);
    }

    // --- arithmetic ---

    fn bvisit_add(&mut self, node: &Expr, add: &Add) {
        self.bvisit_basic(node);
    }
    fn bvisit_mul(&mut self, node: &Expr, mul: &Mul) {
        self.bvisit_basic(node);
    }
    fn bvisit_pow(&mut self, node: &Expr, pow: &Pow) {
        self.bvisit_basic(node);
    }

    // --- trigonometric ---

    fn bvisit_sin(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_cos(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_tan(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_cot(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_csc(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_sec(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_asin(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_acos(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_atan(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_acot(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_asec(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }
    fn bvisit_acsc(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_trig_function(node, f);
    }

    // --- hyperbolic ---

    fn bvisit_sinh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_hyperbolic_function(node, f);
    }
    fn bvisit_cosh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_hyperbolic_function(node, f);
    }
    fn bvisit_tanh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_hyperbolic_function(node, f);
    }
    fn bvisit_coth(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_hyperbolic_function(node, f);
    }
    fn bvisit_asinh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_hyperbolic_function(node, f);
    }
    fn bvisit_acosh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_hyperbolic_function(node, f);
    }
    fn bvisit_atanh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_hyperbolic_function(node, f);
    }
    fn bvisit_acoth(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_hyperbolic_function(node, f);
    }

    // --- other named functions ---

    fn bvisit_log(&mut self, node: &Expr, arg: &Expr) {
        self.bvisit_function(node);
    }
    fn bvisit_lambertw(&mut self, node: &Expr, arg: &Expr) {
        self.bvisit_function(node);
    }
    fn bvisit_abs(&mut self, node: &Expr, arg: &Expr) {
        self.bvisit_function(node);
    }
    fn bvisit_gamma(&mut self, node: &Expr, arg: &Expr) {
        self.bvisit_function(node);
    }
    fn bvisit_lower_gamma(&mut self, node: &Expr, s: &Expr, x: &Expr) {
        self.bvisit_function(node);
    }
    fn bvisit_upper_gamma(&mut self, node: &Expr, s: &Expr, x: &Expr) {
        self.bvisit_function(node);
    }
    fn bvisit_zeta(&mut self, node: &Expr, s: &Expr, a: &Expr) {
        self.bvisit_function(node);
    }
    fn bvisit_dirichlet_eta(&mut self, node: &Expr, arg: &Expr) {
        self.bvisit_function(node);
    }
    fn bvisit_kronecker_delta(&mut self, node: &Expr, i: &Expr, j: &Expr) {
        self.bvisit_function(node);
    }
    fn bvisit_function_symbol(&mut self, node: &Expr, f: &FunctionSymbol) {
        self.bvisit_function(node);
    }
    fn bvisit_derivative(&mut self, node: &Expr, d: &Derivative) {
        self.bvisit_basic(node);
    }

    // --- series ---

    fn bvisit_generic_series(&mut self, node: &Expr, s: &Series) {
        self.bvisit_series(node, s);
    }
    fn bvisit_rational_series(&mut self, node: &Expr, s: &Series) {
        self.bvisit_series(node, s);
    }
    fn bvisit_symbolic_series(&mut self, node: &Expr, s: &Series) {
        self.bvisit_series(node, s);
    }
}

impl<T: BaseVisitor + ?Sized> Visitor for T {
    fn visit_integer(&mut self, node: &Expr, n: &Number) {
        self.bvisit_integer(node, n);
    }
    fn visit_rational(&mut self, node: &Expr, n: &Number) {
        self.bvisit_rational(node, n);
    }
    fn visit_complex(&mut self, node: &Expr, n: &Number) {
        self.bvisit_complex(node, n);
    }
    fn visit_real_double(&mut self, node: &Expr, n: &Number) {
        self.bvisit_real_double(node, n);
    }
    fn visit_complex_double(&mut self, node: &Expr, n: &Number) {
        self.bvisit_complex_double(node, n);
    }
    fn visit_constant(&mut self, node: &Expr, c: Constant) {
        self.bvisit_constant(node, c);
    }
    fn visit_symbol(&mut self, node: &Expr, x: &Symbol) {
        self.bvisit_symbol(node, x);
    }
    fn visit_add(&mut self, node: &Expr, add: &Add) {
        self.bvisit_add(node, add);
    }
    fn visit_mul(&mut self, node: &Expr, mul: &Mul) {
        self.bvisit_mul(node, mul);
    }
    fn visit_pow(&mut self, node: &Expr, pow: &Pow) {
        self.bvisit_pow(node, pow);
    }

    fn visit_sin(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_sin(node, f);
    }
    fn visit_cos(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_cos(node, f);
    }
    fn visit_tan(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_tan(node, f);
    }
    fn visit_cot(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_cot(node, f);
    }
    fn visit_csc(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_csc(node, f);
    }
    fn visit_sec(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_sec(node, f);
    }
    fn visit_asin(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_asin(node, f);
    }
    fn visit_acos(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_acos(node, f);
    }
    fn visit_atan(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_atan(node, f);
    }
    fn visit_acot(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_acot(node, f);
    }
    fn visit_asec(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_asec(node, f);
    }
    fn visit_acsc(&mut self, node: &Expr, f: &TrigFunction) {
        self.bvisit_acsc(node, f);
    }

    fn visit_sinh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_sinh(node, f);
    }
    fn visit_cosh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_cosh(node, f);
    }
    fn visit_tanh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_tanh(node, f);
    }
    fn visit_coth(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_coth(node, f);
    }
    fn visit_asinh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_asinh(node, f);
    }
    fn visit_acosh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_acosh(node, f);
    }
    fn visit_atanh(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_atanh(node, f);
    }
    fn visit_acoth(&mut self, node: &Expr, f: &HyperbolicFunction) {
        self.bvisit_acoth(node, f);
    }

    fn visit_log(&mut self, node: &Expr, arg: &Expr) {
        self.bvisit_log(node, arg);
    }
    fn visit_lambertw(&mut self, node: &Expr, arg: &Expr) {
        self.bvisit_lambertw(node, arg);
    }
    fn visit_abs(&mut self, node: &Expr, arg: &Expr) {
        self.bvisit_abs(node, arg);
    }
    fn visit_gamma(&mut self, node: &Expr, arg: &Expr) {
        self.bvisit_gamma(node, arg);
    }
    fn visit_lower_gamma(&mut self, node: &Expr, s: &Expr, x: &Expr) {
        self.bvisit_lower_gamma(node, s, x);
    }
    fn visit_upper_gamma(&mut self, node: &Expr, s: &Expr, x: &Expr) {
        self.bvisit_upper_gamma(node, s, x);
    }
    fn visit_zeta(&mut self, node: &Expr, s: &Expr, a: &Expr) {
        self.bvisit_zeta(node, s, a);
    }
    fn visit_dirichlet_eta(&mut self, node: &Expr, arg: &Expr) {
        self.bvisit_dirichlet_eta(node, arg);
    }
    fn visit_kronecker_delta(&mut self, node: &Expr, i: &Expr, j: &Expr) {
        self.bvisit_kronecker_delta(node, i, j);
    }
    fn visit_function_symbol(&mut self, node: &Expr, f: &FunctionSymbol) {
        self.bvisit_function_symbol(node, f);
    }
    fn visit_derivative(&mut self, node: &Expr, d: &Derivative) {
        self.bvisit_derivative(node, d);
    }

    fn visit_generic_series(&mut self, node: &Expr, s: &Series) {
        self.bvisit_generic_series(node, s);
    }
    fn visit_rational_series(&mut self, node: &Expr, s: &Series) {
        self.bvisit_rational_series(node, s);
    }
    fn visit_symbolic_series(&mut self, node: &Expr, s: &Series) {
        self.bvisit_symbolic_series(node, s);
    }
}

// =============================================================================
// TESTS
// =============================================================================
