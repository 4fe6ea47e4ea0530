//! Core types for symbolic expression trees
//!
//! This module contains the fundamental types:
//! - `Expr` / `ExprKind` / `TypeCode` - shared immutable nodes and their kinds
//! - `Symbol` - interned symbols
//! - `Number` - the numeric tower
//! - canonical constructors and substitution
//! - `ExprError` - error type

pub(crate) mod error;
pub(crate) mod expr;
pub(crate) mod number;
pub(crate) mod subs;
pub(crate) mod symbol;

// Public re-exports (for external API)
pub use error::ExprError;
pub use expr::{
    Add, Constant, Derivative, Expr, ExprKind, FunctionSymbol, HyperbolicFunction,
    HyperbolicKind, Mul, Pow, Series, SeriesBackend, TrigFunction, TrigKind, TypeCode,
};
pub use number::{ComplexDouble, ComplexRational, Number};
pub use subs::SubsMap;
pub use symbol::{symbol, Symbol};
