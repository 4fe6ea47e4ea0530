//! Property-Based Testing
//!
//! Uses quickcheck for property-based testing of:
//! - Determinism and mutual consistency of the analyses
//! - Coefficient extraction identities
//! - Early-stop traversal soundness

use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

use crate::visitor::{preorder_traversal, preorder_traversal_stop, BaseVisitor, StopVisitor};
use crate::{coeff, free_symbols, has_symbol, needs_symbolic_expansion, symbol, Expr, Symbol};

// ============================================================
// PART 1: EXPRESSION GENERATORS FOR PROPERTY TESTS
// ============================================================

const SYMBOLS: [&str; 3] = ["x", "y", "z"];

/// A random canonical expression over x, y, z
#[derive(Clone, Debug)]
struct ArbExpr(Expr);

impl Arbitrary for ArbExpr {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = g.size().min(4); // Limit depth to keep trees small
        ArbExpr(gen_expr(g, depth))
    }
}

fn small_int(g: &mut Gen) -> i64 {
    i64::from(i8::arbitrary(g) % 4)
}

fn gen_symbol(g: &mut Gen) -> Symbol {
    symbol(g.choose(&SYMBOLS).copied().unwrap_or("x"))
}

fn gen_expr(g: &mut Gen, depth: usize) -> Expr {
    if depth == 0 {
        return if bool::arbitrary(g) {
            gen_symbol(g).to_expr()
        } else {
            Expr::integer(small_int(g))
        };
    }
    let sub = |g: &mut Gen| gen_expr(g, depth - 1);
    match u8::arbitrary(g) % 12 {
        0 | 1 => sub(g) + sub(g),
        2 => sub(g) - sub(g),
        3 | 4 => sub(g) * sub(g),
        5 => {
            let exp = *g.choose(&[-2_i64, -1, 2, 3]).unwrap_or(&2);
            sub(g).pow(exp)
        }
        6 => sub(g).sin(),
        7 => sub(g).cosh(),
        8 => sub(g).log(),
        9 => sub(g).exp(),
        10 => sub(g).lambertw(),
        _ => sub(g),
    }
}

/// Random polynomial in x: terms `(c, k, m)` meaning `c * x^k * m` where `m`
/// is a monomial in y and z
#[derive(Clone, Debug)]
struct ArbPoly(Vec<(i64, i64, Expr)>);

impl Arbitrary for ArbPoly {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % 6;
        let terms = (0..n)
            .map(|_| {
                let c = small_int(g);
                let k = i64::from(u8::arbitrary(g) % 4);
                let m = symbol("y")
                    .to_expr()
                    .pow(i64::from(u8::arbitrary(g) % 3))
                    * symbol("z").to_expr().pow(i64::from(u8::arbitrary(g) % 2));
                (c, k, m)
            })
            .collect();
        ArbPoly(terms)
    }
}

impl ArbPoly {
    fn to_expr(&self) -> Expr {
        let x = symbol("x").to_expr();
        let terms: Vec<Expr> = self
            .0
            .iter()
            .map(|(c, k, m)| Expr::integer(*c) * x.pow(*k) * m)
            .collect();
        Expr::sum(&terms)
    }
}

/// Records every node until it has seen `limit`
struct Recorder {
    seen: Vec<Expr>,
    limit: usize,
}

impl BaseVisitor for Recorder {
    fn bvisit_basic(&mut self, node: &Expr) {
        self.seen.push(node.clone());
    }
}

impl StopVisitor for Recorder {
    fn stop(&self) -> bool {
        self.seen.len() >= self.limit
    }
}

// ============================================================
// PART 2: ANALYSIS CONSISTENCY
// ============================================================

#[test]
fn test_analyses_are_deterministic() {
    fn prop_deterministic(e: ArbExpr) -> bool {
        let e = e.0;
        let x = symbol("x");
        let two = Expr::integer(2);
        has_symbol(&e, &x) == has_symbol(&e, &x)
            && coeff(&e, &x, &two) == coeff(&e, &x, &two)
            && needs_symbolic_expansion(&e, &x) == needs_symbolic_expansion(&e, &x)
            && free_symbols(&e) == free_symbols(&e)
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop_deterministic as fn(ArbExpr) -> bool);
}

#[test]
fn test_presence_matches_free_symbols() {
    fn prop_presence(e: ArbExpr) -> bool {
        let syms = free_symbols(&e.0);
        ["x", "y", "z", "w"]
            .iter()
            .map(|name| symbol(name))
            .all(|s| has_symbol(&e.0, &s) == syms.contains(&s))
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop_presence as fn(ArbExpr) -> bool);
}

#[test]
fn test_absent_symbol_has_zero_coefficients() {
    fn prop_absent(e: ArbExpr, n: i8) -> TestResult {
        if n == 0 {
            return TestResult::discard();
        }
        let w = symbol("w");
        if free_symbols(&e.0).contains(&w) {
            return TestResult::discard();
        }
        TestResult::from_bool(coeff(&e.0, &w, &Expr::integer(i64::from(n))).is_zero())
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop_absent as fn(ArbExpr, i8) -> TestResult);
}

#[test]
fn test_symbol_self_coefficient() {
    fn prop_self(n: i8) -> bool {
        let x = symbol("x");
        let c = coeff(&x.to_expr(), &x, &Expr::integer(i64::from(n)));
        if n == 1 {
            c.is_one()
        } else {
            c.is_zero()
        }
    }
    QuickCheck::new()
        .tests(100)
        .quickcheck(prop_self as fn(i8) -> bool);
}

#[test]
fn test_coefficient_is_linear_over_sums() {
    fn prop_linear(p: ArbPoly, n: u8) -> bool {
        let n = i64::from(n % 3) + 1;
        let x = symbol("x");
        let expected: Vec<Expr> = p
            .0
            .iter()
            .filter(|(_, k, _)| *k == n)
            .map(|(c, _, m)| Expr::integer(*c) * m)
            .collect();
        coeff(&p.to_expr(), &x, &Expr::integer(n)) == Expr::sum(&expected)
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop_linear as fn(ArbPoly, u8) -> bool);
}

#[test]
fn test_lambertw_always_needs_expansion() {
    fn prop_lambertw(a: ArbExpr) -> TestResult {
        let w = a.0.lambertw();
        if w.is_zero() {
            // LambertW(0) evaluates to 0
            return TestResult::discard();
        }
        let all_flagged = SYMBOLS
            .iter()
            .all(|name| needs_symbolic_expansion(&w, &symbol(name)) == Ok(true));
        TestResult::from_bool(all_flagged)
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop_lambertw as fn(ArbExpr) -> TestResult);
}

// ============================================================
// PART 3: TRAVERSAL
// ============================================================

#[test]
fn test_stoppable_traversal_visits_preorder_prefix() {
    fn prop_prefix(e: ArbExpr, limit: u8) -> bool {
        let mut full = Recorder {
            seen: Vec::new(),
            limit: usize::MAX,
        };
        preorder_traversal(&e.0, &mut full);

        let limit = usize::from(limit % 16) + 1;
        let mut v = Recorder {
            seen: Vec::new(),
            limit,
        };
        preorder_traversal_stop(&e.0, &mut v);

        let expected = limit.min(full.seen.len());
        v.seen.len() == expected && v.seen[..] == full.seen[..expected]
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop_prefix as fn(ArbExpr, u8) -> bool);
}
