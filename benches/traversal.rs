//! Traversal Benchmark
//!
//! Benchmarks the analyses over expressions with many mixed terms.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use symb_visit::{
    coeff, free_symbols, has_symbol, needs_symbolic_expansion, symbol, Expr, NodeCounter,
};

// =============================================================================
// Complex Expression Generator
// =============================================================================

/// Generates a mixed expression with N terms
/// Includes: polynomials, trig, exponentials, fractions, and nested functions
fn generate_mixed_complex(n: i64) -> Expr {
    let x = symbol("x").to_expr();
    let y = symbol("y").to_expr();
    let terms: Vec<Expr> = (1..=n)
        .map(|i| {
            let k = Expr::integer(i);
            match i % 5 {
                // Polynomial term: i*x^(i mod 10 + 1)*y
                0 => &k * x.pow(i % 10 + 1) * &y,
                // Trig term: sin(i*x) * cos(x)
                1 => (&k * &x).sin() * x.cos(),
                // Exponential/Log: exp(x*y) + log(x + i)
                2 => (&x * &y).exp() + (&x + &k).log(),
                // Rational: (x^2 + i) / (x + i)
                3 => (x.pow(2) + &k) / (&x + &k),
                // Nested: sinh(exp(x) + i)
                _ => (x.exp() + &k).sinh(),
            }
        })
        .collect();
    Expr::sum(&terms)
}

fn bench_analyses(c: &mut Criterion) {
    let expr = generate_mixed_complex(300);
    let x = symbol("x");
    let absent = symbol("absent_symbol");
    let two = Expr::integer(2);

    let mut group = c.benchmark_group("mixed_300");
    group.sample_size(20);

    group.bench_function("node_count", |b| {
        b.iter(|| NodeCounter::count_nodes(black_box(&expr)).count);
    });
    group.bench_function("free_symbols", |b| {
        b.iter(|| free_symbols(black_box(&expr)));
    });
    group.bench_function("has_symbol/present", |b| {
        b.iter(|| has_symbol(black_box(&expr), &x));
    });
    group.bench_function("has_symbol/absent", |b| {
        b.iter(|| has_symbol(black_box(&expr), &absent));
    });
    group.bench_function("coeff", |b| {
        b.iter(|| coeff(black_box(&expr), &x, &two));
    });
    group.bench_function("needs_symbolic_expansion", |b| {
        b.iter(|| needs_symbolic_expansion(black_box(&expr), &x));
    });

    group.finish();
}

criterion_group!(benches, bench_analyses);

criterion_main!(benches);
