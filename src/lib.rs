//! Traversal and analysis core for canonical symbolic expression trees
//!
//! Expressions are shared, immutable trees of a closed set of node kinds.
//! This crate provides the machinery for walking them and a handful of
//! analyses built on it.
//!
//! # Features
//! - Double dispatch over every node kind ([`visitor::Visitor`]) with a
//!   default-dispatch adapter ([`visitor::BaseVisitor`]) whose catch-all is
//!   mandatory
//! - Preorder, postorder and early-stopping preorder traversal drivers
//! - Symbol presence, coefficient extraction, expansion-necessity check and
//!   free-symbol collection
//! - Canonical sums, products and powers with exact arithmetic (`dashu`)
//! - Parallel batch analyses behind the `parallel` feature
//!
//! # Usage
//! ```
//! use symb_visit::{coeff, free_symbols, has_symbol, needs_symbolic_expansion, symbol, Expr};
//!
//! let x = symbol("x");
//! let y = Expr::symbol("y");
//! let e = Expr::integer(3) * x.to_expr().pow(2) * &y + x.to_expr().log();
//!
//! assert!(has_symbol(&e, &x));
//! assert_eq!(coeff(&e, &x, &Expr::integer(2)), Expr::integer(3) * &y);
//! assert_eq!(free_symbols(&e).len(), 2);
//! assert!(needs_symbolic_expansion(&e, &x).unwrap());
//! ```
//!
//! # Logging
//! Analyses emit `tracing` events at `trace` level (and `debug` when a
//! substitution failure is propagated). No subscriber is installed here.

pub mod analysis;
mod core;
pub mod visitor;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use analysis::{
    coeff, coeff_of, free_symbols, has_symbol, needs_symbolic_expansion, CoeffVisitor,
    FreeSymbolsVisitor, HasSymbolVisitor, NeedsSymbolicExpansionVisitor,
};
pub use crate::core::{
    symbol, Add, ComplexDouble, ComplexRational, Constant, Derivative, Expr, ExprError, ExprKind,
    FunctionSymbol, HyperbolicFunction, HyperbolicKind, Mul, Number, Pow, Series, SeriesBackend,
    SubsMap, Symbol, TrigFunction, TrigKind, TypeCode,
};
pub use visitor::{
    postorder_traversal, preorder_traversal, preorder_traversal_stop, BaseVisitor, NodeCounter,
    StopVisitor, Visitor,
};
