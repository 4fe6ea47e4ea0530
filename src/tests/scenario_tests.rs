use crate::{
    coeff, free_symbols, has_symbol, needs_symbolic_expansion, symbol, Expr, ExprError, Series,
    Symbol,
};

fn int(n: i64) -> Expr {
    Expr::integer(n)
}

#[test]
fn test_sum_presence_and_free_symbols() {
    // t = x + y
    let x = symbol("x");
    let y = symbol("y");
    let z = symbol("z");
    let t = x.to_expr() + y.to_expr();

    assert!(has_symbol(&t, &x));
    assert!(!has_symbol(&t, &z));

    let syms = free_symbols(&t);
    assert_eq!(syms.len(), 2);
    assert!(syms.contains(&x));
    assert!(syms.contains(&y));
}

#[test]
fn test_monomial_coefficients() {
    // t = 3*x^2*y
    let x = symbol("x");
    let y = symbol("y");
    let t = int(3) * x.to_expr().pow(2) * y.to_expr();

    assert_eq!(coeff(&t, &x, &int(2)), int(3) * y.to_expr());
    assert_eq!(coeff(&t, &x, &int(1)), int(0));
    assert_eq!(coeff(&t, &y, &int(1)), int(3) * x.to_expr().pow(2));
}

#[test]
fn test_sine_expansion_point() {
    let x = symbol("x");
    // sin(x) vanishes at x = 0: expands directly
    assert_eq!(needs_symbolic_expansion(&x.to_expr().sin(), &x), Ok(false));
    // sin(x + 1) does not
    let shifted = (x.to_expr() + int(1)).sin();
    assert_eq!(needs_symbolic_expansion(&shifted, &x), Ok(true));
}

#[test]
fn test_log_expansion_point() {
    let x = symbol("x");
    assert_eq!(needs_symbolic_expansion(&x.to_expr().log(), &x), Ok(true));
}

#[test]
fn test_expression_methods_agree_with_functions() {
    let x = symbol("x");
    let e = int(2) * x.to_expr().pow(3) + Expr::symbol("k") * x.to_expr();
    assert_eq!(e.has_symbol(&x), has_symbol(&e, &x));
    assert_eq!(e.coeff(&x, &int(3)), int(2));
    assert_eq!(e.coeff(&x, &int(1)), Expr::symbol("k"));
    assert_eq!(e.free_symbols(), free_symbols(&e));
}

#[test]
fn test_polynomial_in_two_variables() {
    // (x + y)^2 written out: x^2 + 2*x*y + y^2
    let x = symbol("x");
    let y = symbol("y");
    let (xe, ye) = (x.to_expr(), y.to_expr());
    let e = xe.pow(2) + int(2) * &xe * &ye + ye.pow(2);

    assert!(coeff(&e, &x, &int(2)).is_one());
    assert_eq!(coeff(&e, &x, &int(1)), int(2) * &ye);
    assert!(coeff(&e, &x, &int(0)).is_zero());
    assert_eq!(coeff(&e, &y, &int(1)), int(2) * &xe);
}

#[test]
fn test_analyses_see_through_quotients() {
    // y / x is stored as y * x^-1
    let x = symbol("x");
    let e = Expr::symbol("y") / x.to_expr();
    assert!(has_symbol(&e, &x));
    assert_eq!(coeff(&e, &x, &int(-1)), Expr::symbol("y"));
    assert_eq!(needs_symbolic_expansion(&e, &x), Ok(true));
}

#[test]
fn test_expansion_check_is_per_symbol() {
    // log(y) is singular at y = 0 but not at x = 0
    let x = symbol("x");
    let y = symbol("y");
    let e = x.to_expr() * y.to_expr().log();
    assert_eq!(needs_symbolic_expansion(&e, &y), Ok(true));
    assert_eq!(needs_symbolic_expansion(&e, &x), Ok(false));
}

#[test]
fn test_expansion_pole_in_argument_is_error() {
    let x = symbol("x");
    let e = (int(1) / x.to_expr() + int(2)).cos();
    assert_eq!(needs_symbolic_expansion(&e, &x), Err(ExprError::DivisionByZero));
}

#[test]
fn test_symbols_in_every_function_family() {
    let a = symbol("a");
    let b = symbol("b");
    let (ae, be) = (a.to_expr(), b.to_expr());
    let trees = [
        ae.tan() * be.acosh(),
        Expr::lower_gamma(&ae, &be),
        Expr::zeta(&ae, &be),
        Expr::kronecker_delta(&ae, &be),
        Expr::function_symbol("f", vec![ae.clone(), be.abs()]),
    ];
    let expected: Vec<Symbol> = vec![a.clone(), b.clone()];
    for t in &trees {
        let syms = free_symbols(t);
        assert_eq!(syms.len(), 2, "{t:?}");
        for s in &expected {
            assert!(syms.contains(s));
            assert!(has_symbol(t, s));
        }
    }
}

#[test]
fn test_series_variable_is_visible_but_bound() {
    let x = symbol("x");
    let a = symbol("a");
    let s = Series::generic(x.clone(), 4, vec![a.to_expr(), int(1)]);
    let syms = free_symbols(&s);
    assert!(syms.contains(&x) && syms.contains(&a));
    assert!(has_symbol(&s, &x));
    // substitution does not reach the series variable
    assert_eq!(s.subs_symbol(&x, &Expr::zero()).unwrap(), s);
}
